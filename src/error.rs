//! Errors from reading pools and filters as text

use std::fmt;
use std::fmt::{Display, Formatter};

use thiserror::Error;

/// A pool or filter written as text could not be read
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParseErrorType,
    token: Option<String>,
    index: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParseErrorType, token: impl Display, index: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            index: Some(index),
        }
    }

    pub(crate) const fn from_type(error_type: ParseErrorType) -> Self {
        Self {
            error_type,
            token: None,
            index: None,
        }
    }

    /// The kind of error
    pub fn error_type(&self) -> ParseErrorType {
        self.error_type
    }
}

/// The kinds of [`ParseError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorType {
    /// A list had no values
    EmptyList,
    /// A filter was not a number, a list, `div:N`, `atmost:N` or `any`
    InvalidFilter,
    /// A value was not an integer
    InvalidNumber,
    /// An explicit pool was not strictly increasing
    PoolNotIncreasing,
    /// A pool reached past the largest supported value
    PoolTooLarge,
    /// The input ended early
    UnexpectedEnd,
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorType::EmptyList => "Empty list",
            ParseErrorType::InvalidFilter => "Invalid filter",
            ParseErrorType::InvalidNumber => "Invalid number",
            ParseErrorType::PoolNotIncreasing => "Pool values must be increasing",
            ParseErrorType::PoolTooLarge => "Pool too large",
            ParseErrorType::UnexpectedEnd => "Unexpected end",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(index) = &self.index {
            write!(f, " at {}", index)?;
        }
        Ok(())
    }
}
