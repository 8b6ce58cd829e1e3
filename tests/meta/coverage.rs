//! Checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const TESTS_DIR: &str = "tests";
    const UNIT_DIR: &str = "tests/unit";

    /// Every `.rs` file below `root`, relative to `root`
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|error| io::Error::other(error.to_string()))?;
                    found.insert(relative.to_path_buf());
                }
            }
        }

        Ok(found)
    }

    fn is_module_file(path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == "mod.rs")
    }

    /// `main.rs` directly inside a `tests/<target>/` directory only wires modules
    fn is_target_root(relative_to_tests: &Path) -> bool {
        relative_to_tests.file_name().is_some_and(|name| name == "main.rs")
            && relative_to_tests.components().count() == 2
    }

    fn listing(paths: &[PathBuf]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each source file has a unit test file at the same relative path
    // Verified by adding a source file without a counterpart
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = rust_files(Path::new(SRC_DIR)).unwrap_or_default();
        let units = rust_files(Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!sources.is_empty(), "no sources found under {SRC_DIR}");

        let missing: Vec<PathBuf> = sources
            .iter()
            .filter(|path| !is_module_file(path))
            .filter(|path| *path != Path::new("lib.rs") && *path != Path::new("main.rs"))
            .filter(|path| !units.contains(*path))
            .cloned()
            .collect();

        assert!(
            missing.is_empty(),
            "source files without {UNIT_DIR} counterparts:\n{}",
            listing(&missing)
        );
    }

    // Tests unit test files do not outlive the source files they cover
    // Verified by adding a unit test file for a removed module
    #[test]
    fn test_every_unit_test_file_has_a_source() {
        let sources = rust_files(Path::new(SRC_DIR)).unwrap_or_default();
        let units = rust_files(Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!units.is_empty(), "no unit tests found under {UNIT_DIR}");

        let orphaned: Vec<PathBuf> = units
            .iter()
            .filter(|path| !is_module_file(path))
            .filter(|path| *path != Path::new("main.rs"))
            .filter(|path| !sources.contains(*path))
            .cloned()
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files without {SRC_DIR} counterparts:\n{}",
            listing(&orphaned)
        );
    }

    // Tests every test file other than module wiring declares at least one test
    // Verified by adding a test file with helpers only
    #[test]
    fn test_every_test_file_contains_tests() {
        let files = rust_files(Path::new(TESTS_DIR)).unwrap_or_default();
        assert!(!files.is_empty(), "no files found under {TESTS_DIR}");

        let empty: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| !is_module_file(path) && !is_target_root(path))
            .filter(|path| {
                !fs::read_to_string(Path::new(TESTS_DIR).join(path))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "test files without any #[test] functions:\n{}",
            listing(&empty)
        );
    }

    // Tests the target root detection only accepts `tests/<target>/main.rs`
    // Verified by accepting any file named main.rs
    #[test]
    fn test_target_root_detection() {
        assert!(is_target_root(Path::new("unit/main.rs")));
        assert!(!is_target_root(Path::new("main.rs")));
        assert!(!is_target_root(Path::new("unit/io/main.rs")));
        assert!(!is_target_root(Path::new("unit/cli.rs")));
    }
}
