use crate::formula::{Clause, Formula, Literal};
use crate::SatResult;
use log::trace;

pub struct Solver {
    clauses: Vec<Clause>,
    // One snapshot of `clauses` per branch decision still being explored.
    // Snapshots are deep copies; the live collection never aliases them.
    branching_stack: Vec<Vec<Clause>>,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self {
            clauses: formula.into_clauses(),
            branching_stack: vec![],
        }
    }

    pub fn solve(&mut self) -> SatResult {
        self.search()
    }

    // One call frame per branch decision. The frame pushes a snapshot before
    // its positive branch and pops it before its negative branch, so the
    // recursion depth and the branching stack stay in lockstep; the depth is
    // bounded by the number of distinct variables.
    fn search(&mut self) -> SatResult {
        loop {
            if self.all_satisfied() {
                return SatResult::Satisfiable;
            }
            if self.any_falsified() {
                return SatResult::Unsatisfiable;
            }

            if self.unit_propagation() {
                continue;
            }

            let literal = self.pick_literal();
            trace!(
                "branching on {} at depth {}",
                literal,
                self.branching_stack.len()
            );
            self.branching_stack.push(self.clauses.clone());
            self.assign(literal, true);

            match self.search() {
                SatResult::Satisfiable => return SatResult::Satisfiable,
                SatResult::Unsatisfiable => {
                    // First polarity failed: restore the pre-branch state and
                    // try the negation in this same frame, without a new
                    // snapshot.
                    self.backtrack();
                    self.assign(literal.negated(), true);
                }
            }
        }
    }

    fn all_satisfied(&self) -> bool {
        self.clauses.iter().all(Clause::is_satisfied)
    }

    fn any_falsified(&self) -> bool {
        self.clauses.iter().any(Clause::is_falsified)
    }

    // A single sweep: each clause that is unit when visited gets its literal
    // assigned across the whole collection. The caller re-runs the sweep (via
    // the search loop) until no assignment happens.
    fn unit_propagation(&mut self) -> bool {
        let mut did_propagate = false;
        for idx in 0..self.clauses.len() {
            if let Some(literal) = self.clauses[idx].unit_literal() {
                trace!("unit propagating {}", literal);
                self.assign(literal, true);
                did_propagate = true;
            }
        }
        did_propagate
    }

    // Most frequent unassigned literal across undecided clauses, counting the
    // two polarities of a variable separately. Ties go to the literal first
    // encountered in the scan, which makes the choice deterministic for a
    // fixed clause order.
    fn pick_literal(&self) -> Literal {
        let mut counts: Vec<(Literal, usize)> = vec![];
        for clause in &self.clauses {
            if clause.is_satisfied() || clause.is_falsified() {
                continue;
            }
            for literal in clause.unassigned_literals() {
                match counts.iter_mut().find(|(seen, _)| *seen == literal) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((literal, 1)),
                }
            }
        }

        let mut best: Option<(Literal, usize)> = None;
        for (literal, count) in counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((literal, count)),
            }
        }
        best.expect("no unassigned literal to branch on").0
    }

    fn assign(&mut self, literal: Literal, truth: bool) {
        for clause in &mut self.clauses {
            clause.assign_literal(literal, truth);
        }
    }

    fn backtrack(&mut self) {
        let saved = self
            .branching_stack
            .pop()
            .expect("backtrack without a branch point");
        trace!("backtracking to depth {}", self.branching_stack.len());
        self.clauses = saved;
    }
}
