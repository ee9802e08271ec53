//! Search configuration.
//!
//! Turns raw command-line/env input into an immutable [`SearchConfig`]. Checks
//! run in a fixed order: package name, go path, `--list` tokens, and only then
//! the filesystem root. A bad name or list token never touches the disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::util::{non_empty, normalize_path_option};

/// Default value of the `--list` option.
pub const DEFAULT_LIST: &str = "skipvendor";

const SKIP_VENDOR_TOKEN: &str = "skipvendor";
const ALL_TOKEN: &str = "all";
const SOURCE_DIR: &str = "src";
const DEFAULT_GOPATH_DIR: &str = "go";

/// Flags parsed from the comma-separated `--list` option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub skip_vendor: bool,
    pub list_all: bool,
}

impl ListOptions {
    /// Parse a list such as `skipvendor,all`.
    ///
    /// Tokens are matched exactly. Anything else, including an empty token,
    /// is rejected with [`Error::InvalidListOption`].
    pub fn parse(list: &str) -> Result<Self> {
        let mut options = Self::default();
        for token in list.split(',') {
            match token {
                SKIP_VENDOR_TOKEN => options.skip_vendor = true,
                ALL_TOKEN => options.list_all = true,
                other => return Err(Error::InvalidListOption(other.to_string())),
            }
        }
        Ok(options)
    }
}

/// Unvalidated search input as collected from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Explicit `--name` value.
    pub name: Option<String>,
    /// Trailing positional arguments; the last one is the fallback name.
    pub positional: Vec<String>,
    /// Explicit `--gopath` value or `GOPATH` from the environment.
    pub go_path: Option<PathBuf>,
    /// Raw `--list` value.
    pub list: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            name: None,
            positional: Vec::new(),
            go_path: None,
            list: DEFAULT_LIST.to_string(),
        }
    }
}

/// Resolved, immutable search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    root: PathBuf,
    target_name: String,
    skip_vendor: bool,
    list_all: bool,
}

impl SearchConfig {
    /// Build a config for an explicit root without any filesystem checks.
    pub fn new(
        root: impl Into<PathBuf>,
        target_name: impl Into<String>,
        list: ListOptions,
    ) -> Self {
        Self {
            root: root.into(),
            target_name: target_name.into(),
            skip_vendor: list.skip_vendor,
            list_all: list.list_all,
        }
    }

    /// Resolve options into a config whose root is `<go_path>/src`.
    pub fn resolve(options: SearchOptions) -> Result<Self> {
        let config = Self::resolve_unchecked(options)?;
        ensure_accessible(&config.root)?;
        Ok(config)
    }

    /// Same as [`SearchConfig::resolve`] minus the root check.
    pub fn resolve_unchecked(options: SearchOptions) -> Result<Self> {
        let target_name = resolve_name(options.name, &options.positional)?;
        let go_path = normalize_path_option(options.go_path).unwrap_or_else(default_go_path);
        let list = ListOptions::parse(&options.list)?;
        let root = go_path.join(SOURCE_DIR);

        tracing::debug!(
            root = %root.display(),
            name = %target_name,
            skip_vendor = list.skip_vendor,
            list_all = list.list_all,
            "Resolved search config"
        );

        Ok(Self::new(root, target_name, list))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub const fn skip_vendor(&self) -> bool {
        self.skip_vendor
    }

    pub const fn list_all(&self) -> bool {
        self.list_all
    }
}

/// Go's own default when `GOPATH` is unset: `$HOME/go`.
pub fn default_go_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_GOPATH_DIR)
}

fn resolve_name(name: Option<String>, positional: &[String]) -> Result<String> {
    non_empty(name)
        .or_else(|| non_empty(positional.last().cloned()))
        .ok_or(Error::NameNotDefined)
}

fn ensure_accessible(root: &Path) -> Result<()> {
    fs::metadata(root)
        .map(|_| ())
        .map_err(|source| Error::RootNotAccessible {
            path: root.to_path_buf(),
            source,
        })
}
