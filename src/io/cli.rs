//! Command-line interface for solving a packing puzzle file

use crate::algorithm::solver::{Packer, SearchConfig};
use crate::io::configuration::{DEFAULT_BACKGROUND, DEFAULT_BRANCH_CUTOFF, DEFAULT_THREAD_LIMIT};
use crate::io::error::Result;
use crate::io::logging::{ProgressLogger, level_for_verbosity};
use crate::io::progress::SearchProgress;
use crate::io::puzzle::Puzzle;
use crate::io::render::{write_count, write_solutions};
use clap::{ArgAction, Parser};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rectpack")]
#[command(
    author,
    version,
    about = "Enumerate every exact placement of rectangular pieces on a board"
)]
/// Command-line arguments for the packing tool
// Each search option is an independent switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle description file, or `-` for standard input
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Maximum concurrent branch workers (0 searches sequentially)
    #[arg(short, long, default_value_t = DEFAULT_THREAD_LIMIT)]
    pub threads: usize,

    /// Recursion depth below which branches may be handed to workers
    #[arg(short = 'd', long, default_value_t = DEFAULT_BRANCH_CUTOFF)]
    pub branch_depth: usize,

    /// Also try every piece turned by 90 degrees
    #[arg(short, long)]
    pub rotate: bool,

    /// Place larger pieces first
    #[arg(short, long)]
    pub sort: bool,

    /// Marker printed for unoccupied cells
    #[arg(short, long, default_value_t = DEFAULT_BACKGROUND)]
    pub background: char,

    /// Print only the number of solutions
    #[arg(short, long)]
    pub count_only: bool,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Search configuration selected by the arguments
    pub const fn search_config(&self) -> SearchConfig {
        SearchConfig {
            background: self.background,
            rotations: self.rotate,
            sort_descending: self.sort,
            thread_limit: self.threads,
            branch_cutoff: self.branch_depth,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Loads a puzzle, solves it and prints the solutions
pub struct PuzzleProcessor {
    cli: Cli,
    progress: SearchProgress,
}

impl PuzzleProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        };

        Self { cli, progress }
    }

    /// Install the stderr logger sharing this processor's spinner
    pub fn install_logger(&self) {
        ProgressLogger::new(
            level_for_verbosity(self.cli.verbose),
            self.progress.bar().clone(),
        )
        .install();
    }

    /// Solve the puzzle and print the result to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, the
    /// configuration is invalid, a worker fails, or writing fails
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_into(&mut out)
    }

    /// Solve the puzzle and print the result to `out`
    ///
    /// # Errors
    ///
    /// Same conditions as [`PuzzleProcessor::process`]
    pub fn process_into<W: Write>(&self, out: &mut W) -> Result<()> {
        let config = self.cli.search_config();
        let packer = Packer::new(config)?.with_observer(Box::new(self.progress.clone()));
        let puzzle = Puzzle::from_path(&self.cli.input, config.background)?;

        let start_time = Instant::now();
        let outcome = packer.solve(&puzzle);
        self.progress.finish();
        let report = outcome?;
        log::info!(
            "found {} solution(s) in {:.3?}",
            report.solution_count(),
            start_time.elapsed()
        );

        if self.cli.count_only {
            write_count(out, report.solution_count())
        } else {
            write_solutions(out, &report.solutions, config.background)
        }
    }
}
