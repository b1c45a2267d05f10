// ABOUTME: Library exports for Linear CLI modules for testing and external use
// ABOUTME: Makes the filter engine, config and output modules available to integration tests

pub mod cli;
pub mod cli_output;
pub mod commands;
pub mod config;
pub mod constants;
pub mod filters;
pub mod output;
pub mod types;

#[cfg(test)]
mod test_helpers;
