pub mod completions;
pub mod find;
