#![warn(missing_docs)]

//! # `alphaforest`
//!
//! A validator and tree counter for [alphabet forest](http://codegolf.stackexchange.com/questions/36034/how-many-trees-in-the-alphabet-forest) puzzles.
//! Read a grid of letters with a [`ForestBuilder`](builder::ForestBuilder), line by line,
//! then [`build()`](builder::ForestBuilder::build) it into a [`Forest`] and ask for its [`trees()`](Forest::trees),
//! or call [`survey()`](builder::ForestBuilder::survey) for a printable [`Report`].
//!
//! # Internals
//! Every letter exposes between one and four connectors, or [`Port`]s, each facing one of its four diagonal neighbors.
//! Two letters are joined when each exposes the port facing the other.
//! A tree is a maximal set of letters joined to one another, directly or not.
//!
//! The grid itself must satisfy some formatting rules: at most 79 lines of at most 79 characters,
//! using only spaces and the 23 letters of [`Letter`].
//! Breaking a rule does not stop the count; the [`Problem`](errors::Problem)s are reported next to it and mark it as undefined.

pub use builder::ForestBuilder;
pub use forest::{Forest, Link, Node};
pub use letter::Letter;
pub use location::Location;
pub use port::Port;
pub use report::{ProblemReport, Report};
pub use trees::{Tree, TreeFinder};

pub mod builder;
pub mod errors;
pub(crate) mod forest;
pub(crate) mod letter;
pub(crate) mod location;
pub mod log;
pub mod port;
pub(crate) mod report;
pub mod trees;
#[cfg(feature = "wasm")]
pub mod wasm;

/// Read `lines` as a forest and report its tree count along with any problems.
///
/// Shorthand for [`ForestBuilder::from_lines`] followed by [`ForestBuilder::survey`].
pub fn survey<I, S>(lines: I) -> Report
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ForestBuilder::from_lines(lines).survey()
}
