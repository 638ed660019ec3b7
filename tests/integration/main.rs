//! Integration test binary.

mod cli_test;
mod line_test;
