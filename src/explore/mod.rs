/// Greedy explorer state machine and its configuration
pub mod explorer;
/// Recorded paths and completion statistics
pub mod path;

pub use explorer::{Exploration, ExploreError, Explorer, ExplorerConfig, ExplorerState};
pub use path::{CompletionStats, Path, Step};
