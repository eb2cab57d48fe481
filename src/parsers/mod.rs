//! Parsers for the textual maze problem format.
//!
//! A problem file is a sequence of lines: the grid dimension, one successor
//! list per state, and finally the goal state. The line-level parsers are
//! ordinary `nom` combinators over [`Span`]s, so every failure can be traced
//! back to a line and column of the original text.

mod problem_description;
mod state;
mod successor_list;
mod utilities;

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

pub use problem_description::{parse_problem_description, ProblemFormatError};
pub use state::parse_state;
pub use successor_list::parse_successor_list;

pub(crate) use utilities::split_lines;
