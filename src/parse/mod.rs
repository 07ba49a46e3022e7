//! Read pools, value lists and filters from text
//!
//! | text        | meaning                                  |
//! |-------------|------------------------------------------|
//! | `9`         | the pool `1..=9`                         |
//! | `9/2,5`     | the pool `1..=9` without 2 and 5         |
//! | `1,3,4`     | the explicit pool `1, 3, 4`              |
//! | `any`       | a filter with no constraint              |
//! | `14`        | a filter accepting exactly 14            |
//! | `12,14`     | a filter accepting 12 or 14              |
//! | `div:150`   | a filter accepting divisors of 150       |
//! | `atmost:36` | a filter accepting values up to 36       |

use std::str::FromStr;

use crate::error::{ParseError, ParseErrorType::*};
use crate::filter::FilterSpec;
use crate::range::{krange, Pool};
use crate::Value;

use self::fields::Fields;

mod fields;

/// Result of parsing
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// The largest value a pool may contain. Keeps enumeration bounded.
pub const MAX_POOL_BOUND: Value = 64;

/// Parse a comma separated list of values. An empty string is an empty list.
pub fn parse_values(s: &str) -> Result<Vec<Value>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    Fields::new(s, ',').map(parse_value).collect()
}

/// Parse a pool in one of the forms `9`, `9/2,5` or `1,3,4`
pub fn parse_pool(s: &str) -> Result<Pool> {
    if let Some(slash) = s.find('/') {
        let n = parse_bound(0, &s[..slash])?;
        let excluded = parse_values(&s[slash + 1..])?;
        return Ok(Pool::new(krange(n, &excluded)));
    }
    let fields: Vec<_> = Fields::new(s, ',').collect();
    if let [field] = fields.as_slice() {
        let (index, token) = *field;
        if token.is_empty() {
            return Err(ParseError::from_type(UnexpectedEnd));
        }
        return Ok(Pool::width(parse_bound(index, token)?));
    }
    let mut values = Vec::with_capacity(fields.len());
    for (index, token) in fields {
        let value = parse_value((index, token))?;
        if value > MAX_POOL_BOUND {
            return Err(ParseError::new(PoolTooLarge, token, index));
        }
        if values.last().map_or(false, |&last| last >= value) {
            return Err(ParseError::new(PoolNotIncreasing, token, index));
        }
        values.push(value);
    }
    Ok(Pool::new(values))
}

/// Parse a filter in one of the forms `any`, `14`, `12,14`, `div:150` or `atmost:36`
pub fn parse_filter(s: &str) -> Result<FilterSpec> {
    let trimmed = s.trim();
    let index = s.len() - s.trim_start().len();
    if trimmed.is_empty() {
        return Err(ParseError::from_type(UnexpectedEnd));
    }
    if trimmed == "any" {
        return Ok(FilterSpec::Absent);
    }
    if let Some(colon) = trimmed.find(':') {
        let (name, arg) = (&trimmed[..colon], &trimmed[colon + 1..]);
        let constructor: fn(Value) -> FilterSpec = match name.trim() {
            "div" => FilterSpec::divides,
            "atmost" => FilterSpec::at_most,
            _ => return Err(ParseError::new(InvalidFilter, name, index)),
        };
        let arg = parse_value((index + colon + 1, arg.trim()))?;
        return Ok(constructor(arg));
    }
    if !trimmed.contains(',') {
        let value = trimmed
            .parse()
            .map_err(|_| ParseError::new(InvalidFilter, trimmed, index))?;
        return Ok(FilterSpec::Literal(value));
    }
    let values = parse_values(s)?;
    Ok(FilterSpec::from(values))
}

fn parse_value((index, token): (usize, &str)) -> Result<Value> {
    if token.is_empty() {
        return Err(ParseError::new(EmptyList, token, index));
    }
    token
        .parse()
        .map_err(|_| ParseError::new(InvalidNumber, token, index))
}

/// Parse the upper bound of a range, which may not exceed [`MAX_POOL_BOUND`]
pub fn parse_range_bound(s: &str) -> Result<Value> {
    let index = s.len() - s.trim_start().len();
    parse_bound(index, s)
}

fn parse_bound(index: usize, token: &str) -> Result<Value> {
    let token = token.trim();
    let n = parse_value((index, token))?;
    if n > MAX_POOL_BOUND {
        return Err(ParseError::new(PoolTooLarge, token, index));
    }
    Ok(n)
}

impl FromStr for Pool {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_pool(s)
    }
}

impl FromStr for FilterSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_filter(s)
    }
}
