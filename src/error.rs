/// Parsing errors.
///
/// Defines the errors recorded while turning tokens into a syntax tree.
/// Parse errors are collected rather than raised, so a single run can report
/// several of them.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. The first
/// runtime error stops evaluation.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running source text end to end.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parsing failed; holds every recorded error in source order.
    #[error("{}", render_all(.0))]
    Parse(Vec<ParseError>),
    /// Evaluation stopped at this error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn render_all(errors: &[ParseError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}

impl From<Vec<ParseError>> for Error {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}
