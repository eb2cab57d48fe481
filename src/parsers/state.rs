//! Provides parsers for single state indices.

use crate::parsed_types::State;
use crate::parsers::{ParseResult, Span};
use nom::character::complete::digit1;
use nom::combinator::map_opt;

/// Parses a non-negative integer literal, such as a state index or the grid
/// dimension. Only ASCII digits are accepted; signs and whitespace are not.
///
/// ## Example
/// ```
/// # use maze_search::parsers::{parse_state, preamble::*};
/// let (remainder, state) = parse_state("42 7").unwrap();
/// assert_eq!(state, 42);
/// assert_eq!(remainder.fragment(), &" 7");
///
/// assert!(parse_state("-1").is_err());
/// ```
pub fn parse_state<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, State> {
    map_opt(digit1, |digits: Span<'a>| digits.fragment().parse::<State>().ok())(input.into())
}
