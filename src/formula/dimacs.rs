use crate::formula::{Clause, Formula, Literal, Variable};
use std::io::{BufRead, BufReader, Read};

pub fn parse<R: Read>(reader: R) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut header = None;

    for line in reader.lines() {
        let line = line?;
        let mut line = line.split_whitespace().peekable();

        match line.peek() {
            None => continue,
            Some(token) if token.starts_with('c') => continue,
            Some(&"p") => {
                let _ = line.next();

                if line.next() != Some("cnf") {
                    return Err(DimacsParseError::Format("missing 'cnf'".into()));
                }

                let num_variables = line
                    .next()
                    .and_then(|c| usize::from_str_radix(c, 10).ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid num_variables".into()))?;

                let num_clauses = line
                    .next()
                    .and_then(|c| usize::from_str_radix(c, 10).ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid num_clauses".into()))?;

                header = Some((num_variables, num_clauses));
            }
            Some(_) => {
                let (_, num_clauses) = header
                    .ok_or_else(|| DimacsParseError::Format("missing 'p' line before clauses".into()))?;

                // Anything past the declared clause count is ignored.
                if clauses.len() >= num_clauses {
                    break;
                }

                let mut clause = vec![];
                for token in line {
                    match parse_literal(token)? {
                        Some(literal) => clause.push(literal),
                        None => break,
                    }
                }
                // A bare "0" line is the empty clause, which is legal input;
                // the solver reports it unsatisfiable.
                clauses.push(Clause::new(clause));
            }
        }
    }

    match header {
        None => Err(DimacsParseError::Format("no 'p' line found".into())),
        Some((num_variables, num_clauses)) => {
            if clauses.len() != num_clauses {
                return Err(DimacsParseError::Format(format!(
                    "expected {} clauses, got {}",
                    num_clauses,
                    clauses.len()
                )));
            }
            let formula = Formula::new(clauses);
            let observed = formula.variables().len();
            if observed != num_variables {
                return Err(DimacsParseError::Format(format!(
                    "expected {} variables, got {}",
                    num_variables, observed
                )));
            }
            Ok(formula)
        }
    }
}

fn parse_literal(s: &str) -> Result<Option<Literal>, DimacsParseError> {
    let l = isize::from_str_radix(s, 10)
        .map_err(|_| DimacsParseError::Format(format!("invalid literal '{}'", s)))?;
    if l > 0 {
        Ok(Some(Literal::Positive(Variable(l.unsigned_abs()))))
    } else if l < 0 {
        // unsigned_abs, not negate-then-cast: -isize::MIN overflows
        Ok(Some(Literal::Negative(Variable(l.unsigned_abs()))))
    } else {
        Ok(None)
    }
}

#[derive(Debug)]
pub enum DimacsParseError {
    Io(std::io::Error),
    Format(String),
}

impl From<std::io::Error> for DimacsParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
