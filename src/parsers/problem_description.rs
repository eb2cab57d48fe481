//! Provides the parser for complete problem texts.

use crate::parsed_types::{ProblemDescription, State};
use crate::parsers::{parse_state, parse_successor_list, split_lines, Span};
use nom::combinator::all_consuming;
use thiserror::Error;

/// The problem text does not follow the expected line format. Line and
/// column numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemFormatError {
    #[error("the problem text is empty")]
    EmptyInput,
    #[error("line {line}: expected a non-negative integer, found {text:?}")]
    InvalidInteger { line: u32, text: String },
    #[error("line {line}, column {column}: expected a state index, found {text:?}")]
    InvalidSuccessor {
        line: u32,
        column: usize,
        text: String,
    },
}

/// Parses a problem text.
///
/// The first line holds the grid dimension and the last line the goal state.
/// Every line in between lists the successors of one state, the first of them
/// belonging to state `0`. A text consisting of a single line uses it as both
/// the dimension and the goal.
///
/// ## Example
/// ```
/// # use maze_search::parsers::{parse_problem_description, ProblemFormatError};
/// let description = parse_problem_description("2\n2 1\n3\n3\n\n3\n").unwrap();
/// assert_eq!(description.size(), 2);
/// assert_eq!(description.successor_lists()[0], vec![1, 2]);
/// assert_eq!(description.goal_state(), 3);
///
/// assert_eq!(
///     parse_problem_description("two\n3"),
///     Err(ProblemFormatError::InvalidInteger { line: 1, text: "two".to_string() })
/// );
/// ```
pub fn parse_problem_description(text: &str) -> Result<ProblemDescription, ProblemFormatError> {
    let (_, lines) = split_lines(text).map_err(|_| ProblemFormatError::EmptyInput)?;

    let (first, last) = match (lines.first(), lines.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(ProblemFormatError::EmptyInput),
    };
    let size = parse_integer_line(first)?;
    let goal_state = parse_integer_line(last)?;

    let successor_lists = if lines.len() > 2 {
        lines[1..lines.len() - 1]
            .iter()
            .map(|line| parse_successor_line(*line))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        vec![]
    };

    Ok(ProblemDescription::new(size, successor_lists, goal_state))
}

fn parse_integer_line(line: Span) -> Result<State, ProblemFormatError> {
    all_consuming(parse_state)(line)
        .map(|(_, value)| value)
        .map_err(|_| ProblemFormatError::InvalidInteger {
            line: line.location_line(),
            text: line.fragment().to_string(),
        })
}

fn parse_successor_line(line: Span) -> Result<Vec<State>, ProblemFormatError> {
    let invalid_at = |rest: Span| ProblemFormatError::InvalidSuccessor {
        line: rest.location_line(),
        column: rest.get_utf8_column(),
        text: rest.fragment().split(' ').next().unwrap_or_default().to_string(),
    };
    match parse_successor_list(line) {
        Ok((rest, successors)) if rest.is_empty() => Ok(successors),
        Ok((rest, _)) => Err(invalid_at(rest)),
        Err(_) => Err(invalid_at(line)),
    }
}
