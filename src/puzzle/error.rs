use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("invalid grid: {}", msg)]
pub struct InvalidGrid {
    msg: String,
}

impl InvalidGrid {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[derive(Error, Debug)]
pub enum GridFromFileError {
    #[error("error reading grid file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseGridError),
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseGridError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidGrid(#[from] InvalidGrid),
}

#[derive(Debug, Error, PartialEq)]
pub struct ParseError {
    error_type: ParseGridErrorType,
    token: String,
    line: usize,
}

impl ParseError {
    pub(crate) fn new(error_type: ParseGridErrorType, token: impl Display, line: usize) -> Self {
        Self {
            error_type,
            token: token.to_string(),
            line,
        }
    }

    pub fn error_type(&self) -> ParseGridErrorType {
        self.error_type
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseGridErrorType {
    ExpectedValue,
    ExpectedRelation,
    InvalidToken,
}

impl Display for ParseGridErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseGridErrorType::ExpectedValue => "Expected a cell value",
            ParseGridErrorType::ExpectedRelation => "Expected a relation marker",
            ParseGridErrorType::InvalidToken => "Invalid token",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\" on line {}", self.error_type, self.token, self.line)
    }
}
