//! Nimbus parser: builds expression trees from configuration source.

pub mod parser;

pub use parser::{parse, parse_all, Parser, MAX_NESTING_DEPTH};
