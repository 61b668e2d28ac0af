//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{CREDITS, print_board, print_check_result, print_distribution, print_outcome};
