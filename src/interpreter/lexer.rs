use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Literal-bearing
/// variants keep the exact source lexeme; numeric conversion happens in the
/// parser so that conversion failures surface as parse errors.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    /// Float literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_owned())]
    Float(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Int(String),
    /// String literal tokens, such as `"hello"`. No escape processing; the
    /// payload excludes the surrounding quotes.
    #[regex(r#""[^"]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_owned()
    })]
    Str(String),
    /// Identifier tokens; binding names such as `x` or `adder`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),
    /// An unterminated string literal, carrying everything consumed. Other
    /// unrecognized input is mapped here by [`Lexer::next_token`].
    #[regex(r#""[^"]*"#, |lex| lex.slice().to_owned())]
    Illegal(String),

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `<=`
    #[token("<=")]
    Lte,
    /// `>`
    #[token(">")]
    Gt,
    /// `>=`
    #[token(">=")]
    Gte,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `.`
    #[token(".")]
    Dot,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    Lparen,
    /// `)`
    #[token(")")]
    Rparen,
    /// `{`
    #[token("{")]
    Lbrace,
    /// `}`
    #[token("}")]
    Rbrace,
    /// `[`
    #[token("[")]
    Lbracket,
    /// `]`
    #[token("]")]
    Rbracket,
}

/// The token-kind name used when the input ends where a token was required.
pub const EOF: &str = "EOF";

impl Token {
    /// Returns the kind name used in diagnostics.
    ///
    /// Operators and delimiters render as their lexeme; keywords and
    /// literal-bearing kinds render as upper-case names.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Rparen.kind_name(), ")");
    /// assert_eq!(Token::Ident("add".to_owned()).kind_name(), "IDENT");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Illegal(_) => "ILLEGAL",
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Float(_) => "FLOAT",
            Self::Str(_) => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Lparen => "(",
            Self::Rparen => ")",
            Self::Lbrace => "{",
            Self::Rbrace => "}",
            Self::Lbracket => "[",
            Self::Rbracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        }
    }
}

/// Returns the kind name of a possibly absent token; end of input is `EOF`.
#[must_use]
pub fn token_name(token: Option<&Token>) -> &'static str {
    token.map_or(EOF, Token::kind_name)
}

/// A cursor over the tokens of one source text.
///
/// Each call to [`next_token`](Self::next_token) produces exactly one token;
/// end of input is `None`. Whitespace and `//` line comments separate tokens
/// and are never produced. Input no rule matches becomes an
/// [`Token::Illegal`] carrying the offending slice, so lexing never halts.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source), }
    }

    /// Produces the next token, or `None` at end of input.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("let x = 5;");
    ///
    /// assert_eq!(lexer.next_token(), Some(Token::Let));
    /// assert_eq!(lexer.next_token(), Some(Token::Ident("x".to_owned())));
    /// assert_eq!(lexer.next_token(), Some(Token::Assign));
    /// assert_eq!(lexer.next_token(), Some(Token::Int("5".to_owned())));
    /// assert_eq!(lexer.next_token(), Some(Token::Semicolon));
    /// assert_eq!(lexer.next_token(), None);
    /// ```
    pub fn next_token(&mut self) -> Option<Token> {
        match self.inner.next() {
            Some(Ok(token)) => Some(token),
            Some(Err(())) => Some(Token::Illegal(self.inner.slice().to_owned())),
            None => None,
        }
    }
}
