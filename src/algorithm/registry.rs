//! Thread-safe collection of completed solution boards
//!
//! Every branch that exhausts its piece sequence deposits a snapshot of its
//! board here. Appends from concurrent workers are serialized by a mutex;
//! order among concurrent appenders is unspecified. The collection is taken
//! out only after the dispatcher has reported quiescence.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::spatial::Board;

/// Receives a notification for every recorded solution
///
/// Called from whichever thread found the solution, after the registry lock
/// has been released.
pub trait SolutionObserver: Send + Sync {
    /// A solution was appended; `total` is the registry size right after it
    fn solution_found(&self, total: usize);
}

/// Ordered store of solution boards shared by all search branches
#[derive(Default)]
pub struct SolutionRegistry {
    solutions: Mutex<Vec<Board>>,
    observer: Option<Box<dyn SolutionObserver>>,
}

impl fmt::Debug for SolutionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolutionRegistry")
            .field("len", &self.len())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl SolutionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that reports every append to `observer`
    pub fn with_observer(observer: Box<dyn SolutionObserver>) -> Self {
        Self {
            solutions: Mutex::new(Vec::new()),
            observer: Some(observer),
        }
    }

    /// Insert a solution at the tail and return the new count
    pub fn append(&self, solution: Board) -> usize {
        let total = {
            let mut solutions = self.lock();
            solutions.push(solution);
            solutions.len()
        };

        log::debug!("found solution {total}");
        if let Some(observer) = &self.observer {
            observer.solution_found(total);
        }
        total
    }

    /// Number of solutions recorded so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no solution has been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return every stored solution in arrival order
    pub fn drain(&self) -> Vec<Board> {
        std::mem::take(&mut *self.lock())
    }

    // A branch that panicked while appending leaves a complete Vec behind.
    fn lock(&self) -> MutexGuard<'_, Vec<Board>> {
        self.solutions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
