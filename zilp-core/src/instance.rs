//! Instance file parsing.
//!
//! The format is plain text with whitespace-separated integers:
//!
//! ```text
//! num_vars num_constraints
//! c_0 c_1 ... c_{n-1}                 (objective coefficients)
//! a_0 a_1 ... a_{n-1} rhs             (one line per constraint, relation <=)
//! ```

use std::fs;
use std::path::Path;

use crate::error::{BnbError, BnbResult};

/// One `<=` constraint row.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRow {
    /// Left-hand-side coefficients, one per variable.
    pub coefficients: Vec<f64>,

    /// Right-hand-side bound.
    pub rhs: f64,
}

/// A parsed 0/1 program: maximize `objective . x` subject to the
/// constraint rows, all variables binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Number of decision variables.
    pub num_vars: usize,

    /// Number of constraint rows.
    pub num_constraints: usize,

    /// Objective coefficients, in variable-index order.
    pub objective: Vec<f64>,

    /// Constraint rows, in file order.
    pub constraints: Vec<ConstraintRow>,
}

impl Instance {
    /// Parse an instance from its textual form.
    ///
    /// Fails fast on the first malformed line; nothing is solved before
    /// the whole file has been validated.
    pub fn parse(text: &str) -> BnbResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty());

        let (header_idx, header) = lines.next().ok_or(BnbError::MissingHeader)?;
        let header = parse_integers(header_idx + 1, header, 2)?;
        let num_vars = counter(header_idx + 1, header[0])?;
        let num_constraints = counter(header_idx + 1, header[1])?;
        if num_vars == 0 {
            return Err(BnbError::NoVariables);
        }

        let (obj_idx, obj_line) = lines.next().ok_or(BnbError::WrongTokenCount {
            line: header_idx + 2,
            expected: num_vars,
            found: 0,
        })?;
        let objective: Vec<f64> = parse_integers(obj_idx + 1, obj_line, num_vars)?
            .into_iter()
            .map(|v| v as f64)
            .collect();

        let mut constraints = Vec::with_capacity(num_constraints);
        for (idx, line) in lines.by_ref().take(num_constraints) {
            let mut values: Vec<f64> = parse_integers(idx + 1, line, num_vars + 1)?
                .into_iter()
                .map(|v| v as f64)
                .collect();
            let rhs = values.pop().unwrap_or_default();
            constraints.push(ConstraintRow {
                coefficients: values,
                rhs,
            });
        }

        let extra = lines.count();
        if constraints.len() != num_constraints || extra > 0 {
            return Err(BnbError::RowCount {
                expected: num_constraints,
                found: constraints.len() + extra,
            });
        }

        Ok(Self {
            num_vars,
            num_constraints,
            objective,
            constraints,
        })
    }

    /// Read and parse an instance file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> BnbResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

/// A header count: integer from the file, rejected if negative.
fn counter(line_no: usize, value: i64) -> BnbResult<usize> {
    usize::try_from(value).map_err(|_| BnbError::BadToken {
        line: line_no,
        token: value.to_string(),
    })
}

/// Parse exactly `expected` whitespace-separated integers from a line.
fn parse_integers(line_no: usize, line: &str, expected: usize) -> BnbResult<Vec<i64>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(BnbError::WrongTokenCount {
            line: line_no,
            expected,
            found: tokens.len(),
        });
    }
    tokens
        .into_iter()
        .map(|t| {
            t.parse::<i64>().map_err(|_| BnbError::BadToken {
                line: line_no,
                token: t.to_string(),
            })
        })
        .collect()
}
