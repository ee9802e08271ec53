use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pkgfind_core::config::DEFAULT_LIST;
use pkgfind_core::SearchOptions;

#[derive(Parser)]
#[command(name = "pkgfind")]
#[command(about = "Find a package directory inside GOPATH/src")]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Package directory name to look for (case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Go workspace; the search root is <GOPATH>/src
    #[arg(long = "gopath", env = "GOPATH", value_name = "PATH")]
    pub go_path: Option<PathBuf>,

    /// Comma-separated search options: skipvendor, all
    #[arg(long, default_value = DEFAULT_LIST, value_name = "TOKENS")]
    pub list: String,

    /// Output format for matches
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Print a shell completion script instead of searching
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<CompletionShell>,

    /// Write the completion script to a file (stdout when omitted)
    #[arg(short, long, value_name = "PATH", requires = "completions")]
    pub output: Option<PathBuf>,

    /// Quick search: pkgfind mux (the last argument is the name)
    #[arg(trailing_var_arg = true)]
    pub positional: Vec<String>,
}

impl Cli {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            name: self.name.clone(),
            positional: self.positional.clone(),
            go_path: self.go_path.clone(),
            list: self.list.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
