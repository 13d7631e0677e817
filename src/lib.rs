pub mod cli;
pub mod commands;
pub mod config;
pub mod encoding;
pub mod error;
pub mod output;
pub mod report;
pub mod symbols;
pub mod tally;

pub use error::{ElemTallyError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
