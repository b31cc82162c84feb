pub mod audit;
pub mod checker;
pub mod cli;
pub mod collector;
pub mod commands;
pub mod config;
pub mod error;
pub mod issue;
pub mod model;
pub mod output;
pub mod parser;
pub mod report;
pub mod scanner;

pub use error::{Result, StyleAuditError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_THRESHOLD_EXCEEDED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
