//! CLI parsing and output contracts

mod output_contracts;
mod parse_matrix;
