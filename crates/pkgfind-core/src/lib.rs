//! pkgfind-core - Core library for pkgfind
//!
//! This crate resolves search configuration and walks a `GOPATH/src` tree
//! looking for directories whose name matches a package name.

pub mod config;
pub mod error;
pub mod finder;
pub mod util;
pub mod walk;

pub use config::{ListOptions, SearchConfig, SearchOptions};
pub use error::{Error, Result};
pub use finder::{PathFinder, SearchResult};
pub use walk::WalkControl;
