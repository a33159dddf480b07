/// The lifecycle phase of a single board tile.
/// `WagerPending` only occurs on daily-double tiles, between `Hidden`
/// and `QuestionShown`. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePhase {
    Hidden,
    WagerPending,
    QuestionShown,
    AnswerShown,
    Completed,
}

/// Per-tile state
#[derive(Debug, Clone)]
pub struct Tile {
    pub phase: TilePhase,
    /// Teams that answered this tile wrong and may not retry it
    pub locked_out: Vec<usize>,
    /// Locked-in daily-double wager, set once per tile
    pub wager: Option<i64>,
    pub daily_double: bool,
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}

impl Tile {
    pub fn new() -> Self {
        Self {
            phase: TilePhase::Hidden,
            locked_out: Vec::new(),
            wager: None,
            daily_double: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.phase == TilePhase::Completed
    }

    pub fn is_locked_out(&self, team: usize) -> bool {
        self.locked_out.contains(&team)
    }
}

/// What the render surface should paint for a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileDisplay {
    /// Face-down: the dollar value
    Value,
    Question,
    Answer,
    /// Completed: neutral placeholder, text never re-revealed
    Blank,
}

/// Per-tile view model handed to the presentation layer
#[derive(Debug, Clone)]
pub struct TileView {
    pub display: TileDisplay,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_hidden_and_unlocked() {
        let tile = Tile::new();
        assert_eq!(tile.phase, TilePhase::Hidden);
        assert!(tile.locked_out.is_empty());
        assert!(tile.wager.is_none());
        assert!(!tile.daily_double);
    }

    #[test]
    fn test_lockout_membership() {
        let mut tile = Tile::new();
        tile.locked_out.push(2);
        assert!(tile.is_locked_out(2));
        assert!(!tile.is_locked_out(0));
    }
}
