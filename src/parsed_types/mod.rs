//! Types produced by the [`parsers`](crate::parsers) module. These mirror the
//! textual problem format and carry no search semantics; see
//! [`Problem`](crate::search::Problem) for the search-ready form.

mod problem_description;

pub use problem_description::ProblemDescription;

/// Identifier of a single vertex of the state graph.
pub type State = usize;
