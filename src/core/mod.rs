// Core algorithm exports
pub mod compatibility;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod partition;
pub mod population;
pub mod ranking;
pub mod stability;

pub use compatibility::{is_compatible, filter_scores};
pub use engine::{run_deferred_acceptance, EngineResult, FreeQueue};
pub use error::MatchingError;
pub use matcher::{run_matching, MatchOutcome, StableMatcher};
pub use partition::{Side, SideAssignment};
pub use population::{Population, ScoreMatrix};
pub use ranking::PreferenceTable;
pub use stability::{find_blocking_pair, is_monogamous};
