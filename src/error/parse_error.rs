#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// The parser never aborts on an error; it records the message, resumes at
/// the next statement boundary, and keeps collecting. Messages carry no
/// source locations.
pub enum ParseError {
    /// The parser required a specific token and found another.
    UnexpectedToken {
        /// The token kind the parser required.
        expected: String,
        /// The token kind that was actually next.
        got:      String,
    },
    /// No prefix parse rule exists for the token that starts an expression.
    NoPrefixParseFn {
        /// The offending token kind.
        token: String,
    },
    /// An integer literal did not fit a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal text as written in the source.
        literal: String,
    },
    /// A float literal could not be converted.
    InvalidFloatLiteral {
        /// The literal text as written in the source.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got } => {
                write!(f, "expected next token to be {expected}, got {got} instead")
            },
            Self::NoPrefixParseFn { token } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse \"{literal}\" as integer")
            },
            Self::InvalidFloatLiteral { literal } => {
                write!(f, "could not parse \"{literal}\" as float")
            },
        }
    }
}

impl std::error::Error for ParseError {}
