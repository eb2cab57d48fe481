//! Utility parsers.

use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till};
use nom::combinator::map;
use nom::multi::separated_list0;

/// Splits the input into lines, accepting `\n`, `\r\n` and lone `\r` as line
/// breaks. A final line break does not start an extra empty line, so
/// `"1\n2\n"` and `"1\n2"` both yield two lines and the empty input yields
/// none.
pub fn split_lines<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Span<'a>>> {
    map(
        separated_list0(
            alt((tag("\r\n"), tag("\n"), tag("\r"))),
            take_till(|c: char| c == '\r' || c == '\n'),
        ),
        |mut lines: Vec<Span<'a>>| {
            if lines.last().is_some_and(|line| line.is_empty()) {
                lines.pop();
            }
            lines
        },
    )(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(input: &str) -> Vec<&str> {
        let (remainder, lines) = split_lines(input).unwrap();
        assert!(remainder.is_empty());
        lines.into_iter().map(|line| *line.fragment()).collect()
    }

    #[test]
    fn trailing_newline_is_ignored() {
        assert_eq!(fragments("1\n2\n"), vec!["1", "2"]);
        assert_eq!(fragments("1\n2"), vec!["1", "2"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(fragments("1\n\n2"), vec!["1", "", "2"]);
        assert_eq!(fragments("1\n\n"), vec!["1", ""]);
    }

    #[test]
    fn mixed_line_breaks() {
        assert_eq!(fragments("1\r\n2 3\r4\n"), vec!["1", "2 3", "4"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(fragments("").is_empty());
    }

    #[test]
    fn lines_know_their_position() {
        let (_, lines) = split_lines("1\r\n2\n3").unwrap();
        assert_eq!(lines[2].location_line(), 3);
    }
}
