pub mod awards;
pub mod engine;
pub mod error;
pub mod export;
pub mod player;

pub use awards::{award_hole, AwardLine, HoleAward, Outcome, POINTS_PER_HOLE};
pub use engine::{CommitPolicy, HoleCount, HoleStrokes, Round};
pub use error::{RoundError, PLAYERS_PER_ROUND};
pub use export::{load_summary, resolve_export_path, save_summary, RoundSummary};
pub use player::{Player, PlayerId};
