/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// abstract syntax tree. Parse errors are accumulated on the parser rather
/// than raised; a program only runs when the list is empty.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, unknown identifiers, bad call arities, unusable hash
/// keys, and division by zero.
pub mod runtime_error;

use std::fmt;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error type returned by the top-level entry points.
///
/// A source text fails either with the parse errors collected over the whole
/// input, or with the first runtime error raised during evaluation.
#[derive(Debug)]
pub enum MonkeyError {
    /// The source did not parse; evaluation never started.
    Parse(Vec<ParseError>),
    /// The source parsed but evaluation failed.
    Runtime(RuntimeError),
}

impl fmt::Display for MonkeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl std::error::Error for MonkeyError {}

impl From<Vec<ParseError>> for MonkeyError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}

impl From<RuntimeError> for MonkeyError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
