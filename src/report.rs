use std::fmt::{Display, Formatter};

use crate::errors::Problem;

/// Every [`Problem`] found while reading a forest, in the order they were found.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProblemReport(pub(crate) Vec<Problem>);

impl ProblemReport {
    /// `true` when the input was fully conformant.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The problems, in the order they were found.
    pub fn problems(&self) -> &[Problem] {
        &self.0
    }

    pub(crate) fn push(&mut self, problem: Problem) {
        log::debug!("recorded problem: {problem}");
        self.0.push(problem);
    }
}

impl Display for ProblemReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for problem in &self.0 {
            writeln!(f, "PROBLEM: {problem}")?;
        }

        Ok(())
    }
}

/// The final verdict on a forest: how many trees it holds, and whether that number can be trusted.
///
/// Displays as the tree count, followed by any problems and a note that the count is undefined.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// Number of trees found, whether or not the input was conformant.
    pub trees: usize,
    /// Everything wrong with the input.
    pub problems: ProblemReport,
}

impl Report {
    /// A count is undefined whenever the input broke a formatting rule, even though it is still computed.
    pub fn is_undefined(&self) -> bool {
        !self.problems.is_empty()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Number of connected trees: {}\n\n", self.trees)?;

        if self.is_undefined() {
            write!(f, "{}\nTherefore output is undefined.\n", self.problems)?;
        }

        Ok(())
    }
}
