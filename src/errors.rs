//! Problems found in a forest's input, and the errors that stop a run altogether.
//!
//! A [`Problem`] never interrupts counting: it is collected by the
//! [`ForestBuilder`](crate::builder::ForestBuilder) and shown next to the count, which it marks as undefined.
//! An [`Error`] is raised only when the input itself cannot be read.

use std::io;
use std::path::PathBuf;

/// Ways a forest's text may break the puzzle's formatting rules.
///
/// Line numbers count from 1.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Problem {
    /// More lines were offered than the builder accepts; everything from the first extra line on was ignored.
    #[error("more than {limit} lines.")]
    TooManyLines {
        /// The most lines accepted.
        limit: usize,
    },

    /// A line is longer than the builder's limit. Its letters are still planted.
    #[error("more than {limit} characters in line {line} (excluding newline).")]
    LineTooLong {
        /// The offending line.
        line: usize,
        /// The most characters accepted per line.
        limit: usize,
    },

    /// A line holds characters that are neither valid letters nor spaces, each listed once.
    #[error("Invalid characters in line {line}:\n{}", .characters.iter().collect::<String>())]
    InvalidCharacters {
        /// The offending line.
        line: usize,
        /// The invalid characters, in order of first appearance.
        characters: Vec<char>,
    },
}

/// Failures acquiring input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The named file could not be opened.
    #[error("could not open {}: {source}", .path.display())]
    Open {
        /// The file asked for.
        path: PathBuf,
        /// Why opening it failed.
        #[source]
        source: io::Error,
    },

    /// Reading a line failed partway through the input.
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
}
