//! Reading a forest from lines of text.

use std::num::NonZero;
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array1, AssignElem};

use crate::errors::Problem;
use crate::forest::{Forest, Node};
use crate::letter::Letter;
use crate::location::{Coord, Location};
use crate::report::{ProblemReport, Report};

pub(crate) type Dimension = NonZero<Coord>;

/// The most lines, and characters per line, a puzzle may have.
pub const DEFAULT_LIMIT: Dimension = match NonZero::new(79) {
    Some(limit) => limit,
    None => panic!("limit must be nonzero"),
};

/// Reads a forest line by line, planting a [`Node`] for every valid letter and noting every [`Problem`] on the way.
///
/// Problems never stop the build: a [`Forest`] can always be built from whatever was read.
/// Builders mutate themselves while reading but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct ForestBuilder {
    // characters per line, lines
    limits: (Dimension, Dimension),
    nodes: Vec<Node>,
    // length of every line read, in characters
    line_lengths: Vec<usize>,
    truncated: bool,
    problems: ProblemReport,
}

impl Default for ForestBuilder {
    fn default() -> Self {
        Self::with_limits((DEFAULT_LIMIT, DEFAULT_LIMIT))
    }
}

impl ForestBuilder {
    /// Construct a new [`Self`] accepting lines of up to `limits.0` characters and up to `limits.1` lines.
    pub fn with_limits(limits: (Dimension, Dimension)) -> Self {
        Self {
            limits,
            nodes: Default::default(),
            line_lengths: Default::default(),
            truncated: false,
            problems: Default::default(),
        }
    }

    /// Read the next line of the forest, which must not include its line terminator.
    ///
    /// Reading one line more than the limit records [`TooManyLines`](Problem::TooManyLines) and truncates the builder.
    /// If the builder is already truncated, this function does nothing.
    pub fn add_line(&mut self, line: &str) -> &mut Self {
        if self.truncated {
            return self;
        }

        if self.line_lengths.len() >= self.limits.1.get() {
            self.problems.push(Problem::TooManyLines { limit: self.limits.1.get() });
            self.truncated = true;
            return self;
        }

        let row = self.line_lengths.len();
        let length = line.chars().count();
        self.line_lengths.push(length);
        if length > self.limits.0.get() {
            self.problems.push(Problem::LineTooLong { line: row + 1, limit: self.limits.0.get() });
        }

        let invalid_characters = line.chars()
            .filter(|character| *character != ' ' && Letter::try_from(*character).is_err())
            .unique()
            .collect_vec();
        if !invalid_characters.is_empty() {
            self.problems.push(Problem::InvalidCharacters { line: row + 1, characters: invalid_characters });
        }

        let planted_before = self.nodes.len();
        self.nodes.extend(line.chars()
            .enumerate()
            .filter_map(|(column, character)| Letter::try_from(character)
                .ok()
                .map(|letter| Node { location: Location(column, row), letter })));
        log::trace!("line {}: {} character(s), {} letter(s)", row + 1, length, self.nodes.len() - planted_before);

        self
    }

    /// Read every line in `lines`, stopping as soon as the builder is truncated.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::default();
        for line in lines {
            if builder.add_line(line.as_ref()).is_truncated() {
                break;
            }
        }

        builder
    }

    /// As [`Self::from_lines`], for sources that can fail, such as a file or standard input.
    ///
    /// No line is pulled from `lines` once the builder is truncated. The first error is returned as is.
    pub fn from_fallible_lines<I, S, E>(lines: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let mut builder = Self::default();
        for line in lines {
            if builder.add_line(line?.as_ref()).is_truncated() {
                break;
            }
        }

        Ok(builder)
    }

    /// Whether more lines were offered than the limit allows.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Every problem found so far.
    pub fn problems(&self) -> &ProblemReport {
        &self.problems
    }

    /// Convert the state of this builder into a [`Forest`].
    pub fn build(&self) -> Forest {
        let mut rows = self.line_lengths.iter()
            .map(|length| Array1::from_elem(*length, None))
            .collect_vec();
        for node in &self.nodes {
            let (row, column) = node.location.as_index();
            rows.index_mut(row).index_mut(column).assign_elem(Some(node.letter));
        }

        log::debug!("built a forest of {} node(s) over {} line(s)", self.nodes.len(), rows.len());
        Forest {
            rows,
            width: self.line_lengths.iter().copied().max().unwrap_or(0),
            nodes: self.nodes.clone(),
        }
    }

    /// Build the forest, count its trees, and report the count alongside every problem found.
    pub fn survey(&self) -> Report {
        Report {
            trees: self.build().trees().len(),
            problems: self.problems.clone(),
        }
    }
}
