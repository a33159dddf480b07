use ratatui::style::Color;

/// Game-show stage palette for the TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(53, 28, 21);
    pub const STAGE: Color = Color::Rgb(43, 22, 16);
    pub const PANEL_BG: Color = Color::Rgb(75, 46, 31);

    // Tiles
    pub const TILE_FACE: Color = Color::Rgb(75, 46, 31);
    pub const TILE_BORDER: Color = Color::Rgb(122, 84, 58);
    pub const TILE_ACTIVE: Color = Color::Rgb(255, 214, 10);
    pub const TILE_DONE: Color = Color::Rgb(92, 92, 92);
    pub const TILE_DONE_TEXT: Color = Color::Rgb(130, 130, 130);

    // Text
    pub const GOLD: Color = Color::Rgb(255, 181, 0);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(205, 180, 150);
    pub const DIM_TEXT: Color = Color::Rgb(140, 115, 90);

    // Question/answer text
    pub const QUESTION_TEXT: Color = Color::Rgb(250, 245, 235);
    pub const ANSWER_TEXT: Color = Color::Rgb(150, 235, 170);

    // Judging feedback
    pub const CORRECT: Color = Color::Rgb(6, 214, 160);
    pub const INCORRECT: Color = Color::Rgb(230, 57, 70);

    // Money / scores
    pub const MONEY_COLOR: Color = Color::Rgb(255, 214, 10);
    pub const NEGATIVE_MONEY: Color = Color::Rgb(230, 57, 70);

    // Podium stands
    pub const PODIUM_GOLD: Color = Color::Rgb(255, 181, 0);
    pub const PODIUM_WOOD: Color = Color::Rgb(75, 46, 31);

    // Timer urgency
    pub const TIMER_CALM: Color = Color::Rgb(255, 181, 0);
    pub const TIMER_URGENT: Color = Color::Rgb(230, 57, 70);
}
