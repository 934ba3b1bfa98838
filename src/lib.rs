pub mod formula;
mod solver;

#[cfg(test)]
mod brute_force;

use std::fmt::{self, Display, Formatter};

#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable,
    Unsatisfiable,
}

impl Display for SatResult {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            SatResult::Satisfiable => f.write_str("SAT"),
            SatResult::Unsatisfiable => f.write_str("UNSAT"),
        }
    }
}

pub use formula::{Clause, ClauseValue, Formula, Literal, Term, Variable};
pub use solver::Solver;
