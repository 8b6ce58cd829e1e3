//! Exhaustive backtracking placement engine
//!
//! [`pack`] tries the head piece of the sequence at every board position in
//! row-major order, unrotated before rotated, and recurses on the tail for
//! every fit. All positions and orientations are tried regardless of earlier
//! successes, so the search enumerates every placement of the sequence.
//!
//! Near the root of the tree a fit may instead be forked: the board is
//! cloned, the piece is placed on the clone, and the clone is submitted to
//! the [`Dispatcher`]. An accepted fork is explored by a worker while the
//! caller keeps scanning on its own untouched board. A rejected fork is
//! explored synchronously on the clone it already built.

use std::sync::Arc;

use crate::algorithm::dispatcher::Dispatcher;
use crate::algorithm::registry::SolutionRegistry;
use crate::algorithm::solver::SearchConfig;
use crate::spatial::{Board, Cell, Sequence};

/// Shared state of one search, passed by reference through every call
#[derive(Debug)]
pub struct SearchContext {
    config: SearchConfig,
    registry: SolutionRegistry,
    dispatcher: Dispatcher,
}

impl SearchContext {
    /// Create a search context with an empty registry
    pub fn new(config: SearchConfig) -> Self {
        Self::with_registry(config, SolutionRegistry::new())
    }

    /// Create a search context recording into `registry`
    pub fn with_registry(config: SearchConfig, registry: SolutionRegistry) -> Self {
        Self {
            dispatcher: Dispatcher::new(config.thread_limit),
            config,
            registry,
        }
    }

    /// Configuration this search runs with
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Solutions collected so far
    pub const fn registry(&self) -> &SolutionRegistry {
        &self.registry
    }

    /// Worker pool running forked branches
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn should_fork(&self, depth: usize) -> bool {
        depth < self.config.branch_cutoff && self.dispatcher.has_capacity()
    }

    /// Hand `task` to a worker, or get it back if the pool refuses it
    fn fork(self: &Arc<Self>, task: Task) -> Result<(), Task> {
        let context = Arc::clone(self);
        self.dispatcher
            .submit(task, move |task| task.run(&context))
    }
}

/// Unit of concurrent work: an owned board and the pieces left to place
#[derive(Debug)]
pub struct Task {
    /// Board with every earlier piece of this branch already placed
    pub board: Board,
    /// Pieces still to place
    pub sequence: Sequence,
    /// Recursion depth the branch continues at
    pub depth: usize,
}

impl Task {
    /// Bundle a branch for execution
    pub const fn new(board: Board, sequence: Sequence, depth: usize) -> Self {
        Self {
            board,
            sequence,
            depth,
        }
    }

    /// Explore this branch to completion on the current thread
    pub fn run(mut self, context: &Arc<SearchContext>) {
        pack(context, &mut self.board, &self.sequence, self.depth);
    }
}

/// Enumerate every placement of `sequence` onto `board`
///
/// Each exhausted sequence records a copy of the board in the context's
/// registry, whether or not the board is fully covered. The board is mutated
/// along the synchronous path but is restored before this call returns.
pub fn pack(context: &Arc<SearchContext>, board: &mut Board, sequence: &Sequence, depth: usize) {
    let Some(piece) = sequence.head() else {
        context.registry.append(board.clone());
        return;
    };

    let tail = sequence.tail();
    let id = Cell::Piece(piece.id());

    for x in 0..board.height() {
        for y in 0..board.width() {
            for shape in piece.orientations(context.config.rotations) {
                if !board.fits(shape, x, y) {
                    continue;
                }

                if context.should_fork(depth) {
                    let mut branch = board.clone();
                    branch.fill_region(id, x, y, shape);
                    if let Err(task) = context.fork(Task::new(branch, tail.clone(), depth + 1)) {
                        log::trace!(
                            "branch at depth {depth} kept inline, {} rejected so far",
                            context.dispatcher.stats().rejected
                        );
                        task.run(context);
                    }
                    continue;
                }

                board.fill_region(id, x, y, shape);
                pack(context, board, &tail, depth + 1);
                board.fill_region(Cell::Empty, x, y, shape);
            }
        }
    }
}
