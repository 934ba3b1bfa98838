pub mod dimacs;

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "-{}", x),
        }
    }
}

// One slot of an open clause: a literal whose variable is still free, or the
// boolean that slot resolved to once the variable was fixed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Term {
    Literal(Literal),
    Assigned(bool),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ClauseValue {
    Decided(bool),
    Open(Vec<Term>),
}

// A clause starts Open over its original literals and collapses to Decided
// at most once; it never reopens. In the Open shape every Assigned term is
// false, because a term resolving to true decides the whole clause.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    value: ClauseValue,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            value: ClauseValue::Open(disjuncts.into_iter().map(Term::Literal).collect()),
        }
    }

    pub fn value(&self) -> &ClauseValue {
        &self.value
    }

    pub fn is_satisfied(&self) -> bool {
        match &self.value {
            ClauseValue::Decided(truth) => *truth,
            ClauseValue::Open(_) => false,
        }
    }

    pub fn is_falsified(&self) -> bool {
        match &self.value {
            ClauseValue::Decided(truth) => !truth,
            // An open clause with no literal left can only be one that was
            // constructed empty: assignment sweeps collapse "nothing left"
            // to Decided(false) themselves.
            ClauseValue::Open(terms) => {
                terms.iter().all(|term| *term == Term::Assigned(false))
            }
        }
    }

    // Substitutes `truth` for `literal` and `!truth` for its negation, in
    // every slot where either appears. A slot resolving to true decides the
    // clause immediately and the rest of the scan is skipped; a scan that
    // leaves no literal unresolved decides the clause false.
    pub fn assign_literal(&mut self, literal: Literal, truth: bool) {
        let terms = match &mut self.value {
            ClauseValue::Decided(_) => return,
            ClauseValue::Open(terms) => terms,
        };

        let negation = literal.negated();
        let mut satisfied = false;
        let mut unresolved_remains = false;
        for term in terms.iter_mut() {
            match *term {
                Term::Literal(l) if l == literal => {
                    if truth {
                        satisfied = true;
                        break;
                    }
                    *term = Term::Assigned(truth);
                }
                Term::Literal(l) if l == negation => {
                    if !truth {
                        satisfied = true;
                        break;
                    }
                    *term = Term::Assigned(!truth);
                }
                Term::Literal(_) => unresolved_remains = true,
                Term::Assigned(_) => {}
            }
        }

        if satisfied {
            self.value = ClauseValue::Decided(true);
        } else if !unresolved_remains {
            self.value = ClauseValue::Decided(false);
        }
    }

    pub fn unit_literal(&self) -> Option<Literal> {
        let mut unassigned = self.unassigned_literals();
        let candidate = unassigned.next()?;
        match unassigned.next() {
            None => Some(candidate),
            Some(_) => None,
        }
    }

    pub fn unassigned_literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.open_terms().iter().filter_map(|term| match term {
            Term::Literal(literal) => Some(*literal),
            Term::Assigned(_) => None,
        })
    }

    fn open_terms(&self) -> &[Term] {
        match &self.value {
            ClauseValue::Decided(_) => &[],
            ClauseValue::Open(terms) => terms,
        }
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match &self.value {
            ClauseValue::Decided(truth) => write!(f, "{}", truth),
            ClauseValue::Open(terms) => {
                let mut first_term = true;
                for term in terms {
                    if first_term {
                        first_term = false;
                    } else {
                        f.write_str(" | ")?;
                    }
                    match term {
                        Term::Literal(literal) => write!(f, "{}", literal)?,
                        Term::Assigned(truth) => write!(f, "{}", truth)?,
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn variables(&self) -> BTreeSet<Variable> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.unassigned_literals())
            .map(|literal| *literal.variable())
            .collect()
    }

    pub(crate) fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            let parenthesize = match &clause.value {
                ClauseValue::Open(terms) => terms.len() > 1,
                ClauseValue::Decided(_) => false,
            };
            if parenthesize {
                write!(f, "({})", clause)?;
            } else {
                write!(f, "{}", clause)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::collection::vec;
    use proptest::prelude::*;

    let literal = (1usize..=6, any::<bool>())
        .prop_map(|(x, positive)| if positive { p(x) } else { n(x) });
    let clause = vec(literal, 1..=3).prop_map(Clause::new);
    vec(clause, 1..=12).prop_map(Formula::new)
}
