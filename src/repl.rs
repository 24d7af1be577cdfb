use std::io::{self, BufRead, Write};

use crate::interpreter::{
    environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::core::Parser,
};

/// The prompt printed before every line is read.
pub const PROMPT: &str = ">>";

/// Runs the read-evaluate-print loop until `input` is exhausted.
///
/// Each line is lexed, parsed, and evaluated against one environment that
/// lives for the whole session, so bindings persist between lines. Parse
/// errors are printed indented under a tab and the line is not evaluated;
/// runtime errors print as `ERROR: <message>`; otherwise the value's
/// printable form is written.
///
/// # Errors
/// Returns any I/O error raised while reading input or writing output.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("let x = 20;\nx + 22\n");
/// let mut output = Vec::new();
///
/// monkey::repl::start(&mut input, &mut output).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("42"));
/// ```
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let env = Environment::new();
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let (program, errors) = Parser::new(Lexer::new(&line)).parse_program();
        if !errors.is_empty() {
            for error in &errors {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}
