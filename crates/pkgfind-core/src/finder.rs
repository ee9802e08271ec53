//! Package directory search.
//!
//! A directory matches when its base name equals the target name ignoring
//! case. `vendor` directories are pruned when requested; that comparison is
//! case-sensitive.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::util::lowercase_file_name;
use crate::walk::{walk, WalkControl};

const VENDOR_DIR: &str = "vendor";

/// Matches of one search, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub matches: Vec<PathBuf>,
    pub visited_dirs: usize,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Walks `SearchConfig::root` looking for the target package directory.
#[derive(Debug, Clone)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Run the search, calling `on_match` as soon as each match is found.
    ///
    /// Stops after the first match unless list-all is set. Fails with
    /// [`Error::PackageNotFound`] when nothing matched.
    pub fn find<F>(&self, mut on_match: F) -> Result<SearchResult>
    where
        F: FnMut(&Path) -> io::Result<()>,
    {
        let target = self.config.target_name().to_lowercase();
        let mut matches = Vec::new();

        tracing::debug!(root = %self.config.root().display(), %target, "Starting search");

        let visited_dirs = walk(self.config.root(), |entry| {
            if self.config.skip_vendor() && entry.file_name() == VENDOR_DIR {
                tracing::debug!(path = %entry.path().display(), "Skipping vendor directory");
                return Ok(WalkControl::SkipSubtree);
            }

            if lowercase_file_name(entry.path()).as_deref() != Some(target.as_str()) {
                return Ok(WalkControl::Continue);
            }

            on_match(entry.path())?;
            matches.push(entry.path().to_path_buf());

            if self.config.list_all() {
                Ok(WalkControl::Continue)
            } else {
                Ok(WalkControl::Stop)
            }
        })?;

        tracing::debug!(visited_dirs, matches = matches.len(), "Search finished");

        let result = SearchResult {
            matches,
            visited_dirs,
        };
        if result.is_found() {
            Ok(result)
        } else {
            Err(Error::PackageNotFound)
        }
    }

    /// Run the search without streaming matches anywhere.
    pub fn collect(&self) -> Result<SearchResult> {
        self.find(|_| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::config::ListOptions;

    const SKIP_VENDOR: ListOptions = ListOptions {
        skip_vendor: true,
        list_all: false,
    };
    const NO_SKIP: ListOptions = ListOptions {
        skip_vendor: false,
        list_all: false,
    };
    const ALL: ListOptions = ListOptions {
        skip_vendor: true,
        list_all: true,
    };

    fn go_src(dirs: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir(&src).unwrap();
        for dir in dirs {
            fs::create_dir_all(src.join(dir)).unwrap();
        }
        temp
    }

    fn finder(temp: &TempDir, name: &str, list: ListOptions) -> PathFinder {
        PathFinder::new(SearchConfig::new(temp.path().join("src"), name, list))
    }

    #[test]
    fn finds_single_match_ignoring_case() {
        let temp = go_src(&["github.com/gorilla/Mux", "github.com/gorilla/handlers"]);

        let result = finder(&temp, "mux", SKIP_VENDOR).collect().unwrap();

        assert!(result.is_found());
        assert_eq!(
            result.matches,
            vec![temp.path().join("src/github.com/gorilla/Mux")]
        );
    }

    #[test]
    fn reports_package_not_found() {
        let temp = go_src(&["github.com/gorilla/handlers"]);
        fs::write(temp.path().join("src/mux"), "a file, not a package").unwrap();

        let error = finder(&temp, "mux", SKIP_VENDOR).collect().unwrap_err();

        assert!(matches!(error, Error::PackageNotFound));
    }

    #[test]
    fn vendor_subtree_is_skipped() {
        let temp = go_src(&["app/vendor/mux"]);

        let error = finder(&temp, "mux", SKIP_VENDOR).collect().unwrap_err();

        assert!(matches!(error, Error::PackageNotFound));
    }

    #[test]
    fn vendor_subtree_is_searched_without_skip() {
        let temp = go_src(&["app/vendor/mux"]);

        let result = finder(&temp, "mux", NO_SKIP).collect().unwrap();

        assert_eq!(result.matches, vec![temp.path().join("src/app/vendor/mux")]);
    }

    #[test]
    fn vendor_skip_is_case_sensitive() {
        let temp = go_src(&["app/Vendor/mux"]);

        let result = finder(&temp, "mux", SKIP_VENDOR).collect().unwrap();

        assert_eq!(result.matches, vec![temp.path().join("src/app/Vendor/mux")]);
    }

    #[test]
    fn stops_at_first_match_unless_listing_all() {
        let temp = go_src(&["Foo", "sub/foo"]);

        let first = finder(&temp, "foo", SKIP_VENDOR).collect().unwrap();
        assert_eq!(first.matches, vec![temp.path().join("src/Foo")]);

        let all = finder(&temp, "foo", ALL).collect().unwrap();
        assert_eq!(
            all.matches,
            vec![temp.path().join("src/Foo"), temp.path().join("src/sub/foo")]
        );
    }

    #[test]
    fn early_exit_skips_remaining_directories() {
        let temp = go_src(&["a/foo", "b", "c", "d"]);

        let result = finder(&temp, "foo", SKIP_VENDOR).collect().unwrap();

        // src, a, a/foo
        assert_eq!(result.visited_dirs, 3);
    }

    #[test]
    fn matches_are_streamed_in_discovery_order() {
        let temp = go_src(&["a/foo/foo", "b/FOO"]);

        let mut streamed = Vec::new();
        let result = finder(&temp, "Foo", ALL)
            .find(|path| {
                streamed.push(path.to_path_buf());
                Ok(())
            })
            .unwrap();

        assert_eq!(
            streamed,
            vec![
                temp.path().join("src/a/foo"),
                temp.path().join("src/a/foo/foo"),
                temp.path().join("src/b/FOO"),
            ]
        );
        assert_eq!(streamed, result.matches);
    }

    #[test]
    fn root_itself_can_match() {
        let temp = go_src(&[]);

        let result = finder(&temp, "SRC", SKIP_VENDOR).collect().unwrap();

        assert_eq!(result.matches, vec![temp.path().join("src")]);
    }

    #[test]
    fn sink_errors_are_propagated() {
        let temp = go_src(&["foo"]);

        let error = finder(&temp, "foo", SKIP_VENDOR)
            .find(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")))
            .unwrap_err();

        assert!(matches!(
            error,
            Error::Io(ref source) if source.kind() == io::ErrorKind::BrokenPipe
        ));
    }
}
