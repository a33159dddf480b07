pub mod board;
pub mod final_round;
pub mod scoring;
pub mod session;
pub mod tile;

pub use board::{BoardContent, Clue, FinalClue, TileKey};
pub use final_round::{FinalRound, FinalStage, FINAL_COUNTDOWN_START};
pub use scoring::{apply_final_wagers, compute_podium_with_ties, rank_teams};
pub use scoring::{PodiumEntry, TeamStanding};
pub use session::{clamp_wager, GameEvent, GameMode, GameSession};
pub use session::{DAILY_DOUBLE_COUNT, MIN_WAGER, TEAM_COUNT};
pub use tile::{Tile, TileDisplay, TilePhase, TileView};
