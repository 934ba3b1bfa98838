use crate::*;

// Brute-force truth-table solver, used as the reference in property tests
#[cfg(test)]
pub(crate) fn solve_brute_force(f: &Formula) -> SatResult {
    let variables: Vec<Variable> = f.variables().into_iter().collect();
    assert!(variables.len() <= 16); // keep the truth table small

    fn truth_of(assignment: u32, position: usize) -> bool {
        assignment & (1 << position) == 0
    }

    'search: for assignment in 0..2u32.pow(variables.len() as u32) {
        'clauses: for clause in f.clauses() {
            for literal in clause.unassigned_literals() {
                let position = variables
                    .binary_search(literal.variable())
                    .expect("literal outside the formula's variable set");
                if truth_of(assignment, position) == literal.is_positive() {
                    // satisfied, move on to the next clause
                    continue 'clauses;
                }
            }
            // no literal held, so this assignment is bogus
            continue 'search;
        }
        // every clause held under this assignment
        return SatResult::Satisfiable;
    }
    // exhausted the truth table
    SatResult::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    #[test]
    fn solve_bcp_sat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let f = Formula::new(vec![c1, c2]);

        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable);
    }

    #[test]
    fn solve_bcp_unsat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let c3 = Clause::new(vec![n(2)]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn solve_conflict_sat() {
        let c1 = Clause::new(vec![p(1), p(2), p(3)]);
        let c2 = Clause::new(vec![n(1), n(2), p(3)]);
        let c3 = Clause::new(vec![n(2), n(3)]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable);
    }

    #[test]
    fn empty_formula_is_sat() {
        let f = Formula::new(vec![]);
        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable);
    }

    #[test]
    fn empty_clause_is_unsat() {
        let f = Formula::new(vec![Clause::new(vec![p(1)]), Clause::new(vec![])]);
        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }
}
