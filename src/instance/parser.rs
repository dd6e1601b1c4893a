//! Instance text format.
//!
//! The format is a count `n` followed by `n` whitespace-separated records
//! of `primary secondary language`. Any whitespace (spaces, newlines)
//! separates tokens.

use super::types::Employee;
use std::path::Path;

/// Error raised while reading or parsing an instance file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("expected {expected} at token {position}, got {got:?}")]
    Syntax {
        expected: &'static str,
        position: usize,
        got: Option<String>,
    },
}

/// Parses an instance from its text representation.
pub fn parse_instance(text: &str) -> Result<Vec<Employee>, ParseError> {
    let mut tokens = text.split_whitespace();
    let mut position = 0usize;

    let count = next_int(&mut tokens, &mut position, "employee count")?;
    let n = usize::try_from(count).map_err(|_| ParseError::Syntax {
        expected: "non-negative employee count",
        position: 0,
        got: Some(count.to_string()),
    })?;

    let mut employees = Vec::with_capacity(n);
    for _ in 0..n {
        let primary = next_int(&mut tokens, &mut position, "primary productivity")?;
        let secondary = next_int(&mut tokens, &mut position, "secondary productivity")?;
        let language = tokens.next().ok_or(ParseError::Syntax {
            expected: "favorite language",
            position,
            got: None,
        })?;
        position += 1;
        employees.push(Employee::new(primary, secondary, language));
    }

    Ok(employees)
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Vec<Employee>, ParseError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_instance(&text)
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    position: &mut usize,
    expected: &'static str,
) -> Result<i64, ParseError> {
    let token = tokens.next().ok_or(ParseError::Syntax {
        expected,
        position: *position,
        got: None,
    })?;
    *position += 1;
    token.parse().map_err(|_| ParseError::Syntax {
        expected,
        position: *position - 1,
        got: Some(token.to_string()),
    })
}
