/// Bounded worker pool with global quiescence detection
pub mod dispatcher;
/// Recursive backtracking placement search
pub mod engine;
/// Thread-safe store of solution boards
pub mod registry;
/// Search configuration and top-level solve entry point
pub mod solver;

pub use dispatcher::{DispatchStats, Dispatcher, SystemSpawner, ThreadSpawner, WorkerBody};
pub use engine::{SearchContext, Task, pack};
pub use registry::{SolutionObserver, SolutionRegistry};
pub use solver::{Packer, SearchConfig, SearchReport};
