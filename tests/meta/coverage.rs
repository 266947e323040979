//! Keeps `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    /// Harness roots and module declarations carry no tests of their own
    fn is_structural(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    fn rust_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files.extend(rust_files(&path)?);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Non-structural `.rs` files under `root`, relative to it
    fn module_files(root: &str) -> BTreeSet<PathBuf> {
        let root = Path::new(root);
        let files = rust_files(root)
            .unwrap_or_else(|error| panic!("Failed to scan {}: {error}", root.display()));

        files
            .into_iter()
            .filter(|path| !is_structural(path))
            .filter_map(|path| path.strip_prefix(root).ok().map(Path::to_path_buf))
            .collect()
    }

    fn listing<'a>(paths: impl Iterator<Item = &'a PathBuf>) -> String {
        paths
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_module_has_unit_tests() {
        let src = module_files(SRC);
        let unit = module_files(UNIT);
        let missing: Vec<&PathBuf> = src.difference(&unit).collect();

        assert!(
            missing.is_empty(),
            "Modules without a matching file in {UNIT}:\n{}",
            listing(missing.into_iter())
        );
    }

    #[test]
    fn test_every_unit_test_has_a_module() {
        let src = module_files(SRC);
        let unit = module_files(UNIT);
        let orphaned: Vec<&PathBuf> = unit.difference(&src).collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a module in {SRC}:\n{}",
            listing(orphaned.into_iter())
        );
    }

    #[test]
    fn test_test_files_contain_tests() {
        let files = rust_files(Path::new("tests"))
            .unwrap_or_else(|error| panic!("Failed to scan tests: {error}"));

        let empty: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| !is_structural(path))
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(empty.iter())
        );
    }
}
