//! Search configuration and the top-level solve entry point

use std::sync::Arc;

use crate::algorithm::dispatcher::DispatchStats;
use crate::algorithm::engine::{SearchContext, pack};
use crate::algorithm::registry::{SolutionObserver, SolutionRegistry};
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_BRANCH_CUTOFF, DEFAULT_THREAD_LIMIT, MAX_THREAD_LIMIT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::puzzle::Puzzle;
use crate::spatial::{Board, Sequence};

/// Runtime parameters controlling the search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Marker printed for unoccupied cells
    pub background: char,
    /// Whether pieces may also be placed turned by 90 degrees
    pub rotations: bool,
    /// Whether pieces are reordered largest first before searching
    pub sort_descending: bool,
    /// Maximum number of concurrent branch workers (0 = sequential)
    pub thread_limit: usize,
    /// Depth below which branches may be forked to workers
    pub branch_cutoff: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            rotations: false,
            sort_descending: false,
            thread_limit: DEFAULT_THREAD_LIMIT,
            branch_cutoff: DEFAULT_BRANCH_CUTOFF,
        }
    }
}

impl SearchConfig {
    /// Purely sequential configuration with default markers
    pub fn sequential() -> Self {
        Self {
            thread_limit: 0,
            ..Self::default()
        }
    }

    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if the background marker is not a visible character
    /// or the worker limit exceeds [`MAX_THREAD_LIMIT`]
    pub fn validate(&self) -> Result<()> {
        if self.background.is_whitespace() || self.background.is_control() {
            return Err(invalid_parameter(
                "background",
                &self.background.escape_default(),
                &"must be a visible character",
            ));
        }

        if self.thread_limit > MAX_THREAD_LIMIT {
            return Err(invalid_parameter(
                "thread_limit",
                &self.thread_limit,
                &format!("must not exceed {MAX_THREAD_LIMIT}"),
            ));
        }

        Ok(())
    }
}

/// Outcome of a completed search
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Every solution board, in arrival order
    pub solutions: Vec<Board>,
    /// How branches were distributed over workers
    pub stats: DispatchStats,
}

impl SearchReport {
    /// Number of solutions found
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }
}

/// Enumerates every placement of a puzzle's pieces
pub struct Packer {
    config: SearchConfig,
    observer: Option<Box<dyn SolutionObserver>>,
}

impl std::fmt::Debug for Packer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Packer")
            .field("config", &self.config)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl Packer {
    /// Create a packer with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            observer: None,
        })
    }

    /// Report every solution to `observer` as it is found
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn SolutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Configuration used by [`Packer::solve`]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search to completion
    ///
    /// Blocks until every forked branch at every depth has finished.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PackError::WorkerFailure`] if a worker panicked
    pub fn solve(self, puzzle: &Puzzle) -> Result<SearchReport> {
        let sequence = Sequence::ordered(puzzle.pieces.clone(), self.config.sort_descending);
        let mut board = Board::new(puzzle.height, puzzle.width);

        log::info!(
            "{}x{} board with {} pieces",
            puzzle.height,
            puzzle.width,
            sequence.len()
        );
        for piece in sequence.remaining() {
            log::info!("piece {piece}");
        }
        let board_area = puzzle.height * puzzle.width;
        if puzzle.piece_area() > board_area {
            log::info!(
                "pieces cover {} cells but the board has {board_area}, no placement can succeed",
                puzzle.piece_area()
            );
        }

        let registry = self
            .observer
            .map_or_else(SolutionRegistry::new, SolutionRegistry::with_observer);
        let context = Arc::new(SearchContext::with_registry(self.config, registry));

        pack(&context, &mut board, &sequence, 0);
        let stats = context.dispatcher().drain()?;
        debug_assert_eq!(board.empty_cells(), board_area);

        Ok(SearchReport {
            solutions: context.registry().drain(),
            stats,
        })
    }
}
