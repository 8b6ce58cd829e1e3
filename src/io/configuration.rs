//! Search constants and runtime configuration defaults

// Default values for configurable parameters
/// Marker printed for unoccupied cells
pub const DEFAULT_BACKGROUND: char = '.';

/// Maximum number of concurrently running branch workers
pub const DEFAULT_THREAD_LIMIT: usize = 4;

/// Recursion depth below which branches may be forked to workers
pub const DEFAULT_BRANCH_CUTOFF: usize = 4;

// Safety limits
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 4096;

/// Maximum allowed worker limit
pub const MAX_THREAD_LIMIT: usize = 256;

// Worker settings
/// Name prefix of spawned worker threads
pub const WORKER_NAME_PREFIX: &str = "rectpack-worker";

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 100;

/// Path argument selecting standard input
pub const STDIN_PATH: &str = "-";
