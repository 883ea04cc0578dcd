//! Bindings for running the counter in a browser.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::builder::ForestBuilder;

/// Count the trees in a newline-separated `grid` and return the full report text.
///
/// Stops at the first empty line, as the command line does for typed input.
#[wasm_bindgen]
pub fn count_trees(grid: &str) -> String {
    ForestBuilder::from_lines(grid.lines().take_while(|line| !line.is_empty()))
        .survey()
        .to_string()
}

/// As [`count_trees`], for an array of lines. Entries which are not strings are read as empty lines.
#[wasm_bindgen]
pub fn count_trees_in_lines(lines: Array) -> String {
    ForestBuilder::from_lines(lines.iter().map(|line| line.as_string().unwrap_or_default()))
        .survey()
        .to_string()
}
