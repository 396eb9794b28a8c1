//! CLI module graph.

pub mod command;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod run;
