//! Tests for search configuration validation and the solve entry point

#[cfg(test)]
mod tests {
    use rectpack::PackError;
    use rectpack::algorithm::registry::SolutionObserver;
    use rectpack::algorithm::solver::{Packer, SearchConfig};
    use rectpack::io::configuration::{
        DEFAULT_BACKGROUND, DEFAULT_BRANCH_CUTOFF, DEFAULT_THREAD_LIMIT, MAX_THREAD_LIMIT,
    };
    use rectpack::io::puzzle::Puzzle;
    use rectpack::spatial::Piece;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(Arc<AtomicUsize>);

    impl SolutionObserver for Counter {
        fn solution_found(&self, _total: usize) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn rows_of(puzzle: &Puzzle, config: SearchConfig) -> Vec<Vec<String>> {
        let report = Packer::new(config)
            .and_then(|packer| packer.solve(puzzle))
            .ok();
        let mut rows: Vec<Vec<String>> = report
            .map(|report| report.solutions.iter().map(|b| b.rows('.')).collect())
            .unwrap_or_default();
        rows.sort();
        rows
    }

    // Tests defaults match the configuration constants
    // Verified by changing a default value
    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.background, DEFAULT_BACKGROUND);
        assert_eq!(config.thread_limit, DEFAULT_THREAD_LIMIT);
        assert_eq!(config.branch_cutoff, DEFAULT_BRANCH_CUTOFF);
        assert!(!config.rotations);
        assert!(!config.sort_descending);
        assert_eq!(SearchConfig::sequential().thread_limit, 0);
        assert!(config.validate().is_ok());
    }

    // Tests invisible background markers are rejected
    // Verified by removing the whitespace check
    #[test]
    fn test_invalid_background_rejected() {
        for background in [' ', '\t', '\n'] {
            let config = SearchConfig {
                background,
                ..SearchConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(PackError::InvalidParameter {
                    parameter: "background",
                    ..
                })
            ));
        }
    }

    // Tests the worker limit is bounded
    // Verified by allowing any thread limit
    #[test]
    fn test_thread_limit_bounded() {
        let too_many = SearchConfig {
            thread_limit: MAX_THREAD_LIMIT + 1,
            ..SearchConfig::default()
        };
        let at_limit = SearchConfig {
            thread_limit: MAX_THREAD_LIMIT,
            ..SearchConfig::default()
        };

        assert!(Packer::new(too_many).is_err());
        assert!(Packer::new(at_limit).is_ok());
    }

    // Tests solving reports every solution and notifies the observer
    // Verified by draining the registry before quiescence
    #[test]
    fn test_solve_reports_solutions() {
        let seen = Arc::new(AtomicUsize::new(0));
        let puzzle = Puzzle::new(1, 2, vec![Piece::new('A', 1, 1), Piece::new('B', 1, 1)]);
        let packer = Packer::new(SearchConfig::default())
            .map(|packer| packer.with_observer(Box::new(Counter(Arc::clone(&seen)))));

        let report = packer.and_then(|packer| packer.solve(&puzzle));
        let count = report.as_ref().map_or(0, |report| report.solution_count());

        assert_eq!(count, 2);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    // Tests pre-sorting changes exploration order but not the solution set
    // Verified by dropping pieces during the sort
    #[test]
    fn test_sort_preserves_solution_set() {
        let puzzle = Puzzle::new(
            2,
            3,
            vec![
                Piece::new('a', 1, 1),
                Piece::new('b', 2, 2),
                Piece::new('c', 1, 1),
            ],
        );
        let plain = SearchConfig::sequential();
        let sorted = SearchConfig {
            sort_descending: true,
            ..SearchConfig::sequential()
        };

        let expected = rows_of(&puzzle, plain);
        assert_eq!(expected.len(), 4);
        assert_eq!(rows_of(&puzzle, sorted), expected);
    }

    // Tests an empty piece list records the untouched board once
    // Verified by requiring at least one placed piece per solution
    #[test]
    fn test_no_pieces_yields_empty_board() {
        let puzzle = Puzzle::new(2, 2, Vec::new());

        assert_eq!(
            rows_of(&puzzle, SearchConfig::default()),
            vec![vec!["..".to_string(), "..".to_string()]]
        );
    }

    // Tests the packer exposes its configuration
    // Verified by storing a default configuration
    #[test]
    fn test_packer_config() {
        let config = SearchConfig {
            rotations: true,
            ..SearchConfig::default()
        };
        let rotations = Packer::new(config).map(|packer| packer.config().rotations);

        assert!(matches!(rotations, Ok(true)));
    }

    // Tests pieces larger in total than the board produce no solutions
    // Verified by recording boards before every piece is placed
    #[test]
    fn test_oversized_piece_set_has_no_solutions() {
        let puzzle = Puzzle::new(2, 2, vec![Piece::new('A', 2, 1), Piece::new('B', 2, 2)]);
        assert!(puzzle.piece_area() > 4);

        assert!(rows_of(&puzzle, SearchConfig::default()).is_empty());
    }
}
