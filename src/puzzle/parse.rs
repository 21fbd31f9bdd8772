//! Parse grids from text
//!
//! One grid row per line, tokens separated by whitespace, alternating cell values and markers:
//!
//! ```text
//! # a 3x3 puzzle
//! 0 > 0 . 0
//! 0 . 2 . 0
//! 0 . 0 > 0
//! ```
//!
//! A cell value is a number, 0 for blank. A marker is `>`, `<` or `.` for none.

use crate::csp::Value;
use crate::puzzle::error::{ParseError, ParseGridError, ParseGridErrorType};
use crate::puzzle::{Entry, Grid, Relation};

/// parse a `Grid` from a string
pub(crate) fn parse_grid(s: &str) -> Result<Grid, ParseGridError> {
    let rows = s
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_number, line)| parse_row(line, line_number))
        .collect::<Result<Vec<_>, _>>()?;
    let grid = Grid::from_rows(&rows)?;
    Ok(grid)
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<Entry>, ParseError> {
    line.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            if i % 2 == 0 {
                parse_value(token, line_number).map(Entry::Value)
            } else {
                parse_relation(token, line_number).map(Entry::Relation)
            }
        })
        .collect()
}

fn parse_value(token: &str, line_number: usize) -> Result<Value, ParseError> {
    if let Ok(value) = token.parse::<Value>() {
        return Ok(value);
    }
    let error_type = if is_relation(token) {
        ParseGridErrorType::ExpectedValue
    } else {
        ParseGridErrorType::InvalidToken
    };
    Err(ParseError::new(error_type, token, line_number))
}

fn parse_relation(token: &str, line_number: usize) -> Result<Option<Relation>, ParseError> {
    match token {
        "." => Ok(None),
        ">" => Ok(Some(Relation::Greater)),
        "<" => Ok(Some(Relation::Less)),
        _ => {
            let error_type = if token.parse::<Value>().is_ok() {
                ParseGridErrorType::ExpectedRelation
            } else {
                ParseGridErrorType::InvalidToken
            };
            Err(ParseError::new(error_type, token, line_number))
        }
    }
}

fn is_relation(token: &str) -> bool {
    matches!(token, "." | ">" | "<")
}
