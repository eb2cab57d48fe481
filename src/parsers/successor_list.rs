//! Provides parsers for the successor line of a single state.

use crate::parsed_types::State;
use crate::parsers::{parse_state, ParseResult, Span};
use nom::character::complete::char;
use nom::combinator::{map, opt};
use nom::multi::separated_list0;

/// Parses a list of state indices separated by single spaces. Empty tokens,
/// i.e. repeated, leading or trailing spaces, are skipped. Parsing stops at
/// the first token that is neither empty nor a state index; callers decide
/// whether leftover input is an error.
///
/// ## Example
/// ```
/// # use maze_search::parsers::{parse_successor_list, preamble::*};
/// let (remainder, successors) = parse_successor_list(" 4  1 ").unwrap();
/// assert!(remainder.is_empty());
/// assert_eq!(successors, vec![4, 1]);
/// ```
pub fn parse_successor_list<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<State>> {
    map(separated_list0(char(' '), opt(parse_state)), |tokens| {
        tokens.into_iter().flatten().collect()
    })(input.into())
}
