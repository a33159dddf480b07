pub mod background;
pub mod board;
pub mod podium;
pub mod popup;
pub mod scoreboard;
pub mod theme;
pub mod wager_panel;

pub use theme::Theme;
