use monkey::interpreter::{
    lexer::{Lexer, Token},
    parser::core::Parser,
};

fn parse_to_string(source: &str) -> String {
    let (program, errors) = Parser::new(Lexer::new(source)).parse_program();
    assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");
    program.to_string()
}

fn parse_errors(source: &str) -> Vec<String> {
    let (_, errors) = Parser::new(Lexer::new(source)).parse_program();
    errors.iter().map(ToString::to_string).collect()
}

#[test]
fn lexer_produces_expected_tokens() {
    let source = "let add = fn(x, y) { x + y; }; add(1, 2.5) != \"ok\";";
    let expected = [
        Token::Let,
        Token::Ident("add".to_owned()),
        Token::Assign,
        Token::Function,
        Token::Lparen,
        Token::Ident("x".to_owned()),
        Token::Comma,
        Token::Ident("y".to_owned()),
        Token::Rparen,
        Token::Lbrace,
        Token::Ident("x".to_owned()),
        Token::Plus,
        Token::Ident("y".to_owned()),
        Token::Semicolon,
        Token::Rbrace,
        Token::Semicolon,
        Token::Ident("add".to_owned()),
        Token::Lparen,
        Token::Int("1".to_owned()),
        Token::Comma,
        Token::Float("2.5".to_owned()),
        Token::Rparen,
        Token::NotEq,
        Token::Str("ok".to_owned()),
        Token::Semicolon,
    ];

    let mut lexer = Lexer::new(source);
    for token in expected {
        assert_eq!(lexer.next_token(), Some(token));
    }
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn lexer_handles_two_character_operators() {
    let mut lexer = Lexer::new("== != <= >= = ! < > .");
    let expected = [
        Token::Eq,
        Token::NotEq,
        Token::Lte,
        Token::Gte,
        Token::Assign,
        Token::Bang,
        Token::Lt,
        Token::Gt,
        Token::Dot,
    ];
    for token in expected {
        assert_eq!(lexer.next_token(), Some(token));
    }
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn lexer_skips_line_comments() {
    let mut lexer = Lexer::new("// leading\nlet x = 1; // trailing");
    assert_eq!(lexer.next_token(), Some(Token::Let));
    assert_eq!(lexer.next_token(), Some(Token::Ident("x".to_owned())));
    assert_eq!(lexer.next_token(), Some(Token::Assign));
    assert_eq!(lexer.next_token(), Some(Token::Int("1".to_owned())));
    assert_eq!(lexer.next_token(), Some(Token::Semicolon));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn lexer_marks_unrecognized_input_illegal() {
    let mut lexer = Lexer::new("@");
    assert_eq!(lexer.next_token(), Some(Token::Illegal("@".to_owned())));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn lexer_marks_unterminated_string_illegal() {
    let mut lexer = Lexer::new("\"abc");
    assert_eq!(lexer.next_token(), Some(Token::Illegal("\"abc".to_owned())));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn operator_precedence_printable_forms() {
    let cases = [
        ("-a * b", "((-a) * b);"),
        ("!-a", "(!(-a));"),
        ("a + b + c", "((a + b) + c);"),
        ("a + b - c", "((a + b) - c);"),
        ("a * b * c", "((a * b) * c);"),
        ("a * b / c", "((a * b) / c);"),
        ("a + b / c", "(a + (b / c));"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
        ("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5);"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));"),
        ("a <= b >= c", "((a <= b) >= c);"),
        ("3 > 5 == false", "((3 > 5) == false);"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
        ("(5 + 5) * 2", "((5 + 5) * 2);"),
        ("-(5 + 5)", "(-(5 + 5));"),
        ("!(true == true)", "(!(true == true));"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d);"),
        ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
         "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));"),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d);"),
        ("add(a * b[2], b[1], 2 * [1, 2][1])",
         "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])));"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_to_string(source), expected, "source: {source}");
    }
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(parse_to_string("a = b = c"), "(a = (b = c));");
    assert_eq!(parse_to_string("a = 1 + 2"), "(a = (1 + 2));");
    assert_eq!(parse_to_string("a = b = 1 + 2"), "(a = (b = (1 + 2)));");
}

#[test]
fn statement_printable_forms() {
    assert_eq!(parse_to_string("let x = 5"), "let x = 5;");
    assert_eq!(parse_to_string("return 2 * 2"), "return (2 * 2);");
    assert_eq!(parse_to_string("fn double(x) { x * 2 }"), "fn double(x) { (x * 2); }");
    assert_eq!(parse_to_string("let f = fn(x, y) { x; y; };"), "let f = fn(x, y) { x; y; };");
    assert_eq!(parse_to_string("if (x < y) { x } else { y }"),
               "if ((x < y)) { x; } else { y; };");
    assert_eq!(parse_to_string("{\"one\": 1, 2: \"two\"}"), "{\"one\": 1, 2: \"two\"};");
    assert_eq!(parse_to_string("let pi = 3.14;"), "let pi = 3.14;");
    assert_eq!(parse_to_string("let half = 2.0;"), "let half = 2.0;");
    assert_eq!(parse_to_string("\"hello\""), "\"hello\";");
}

#[test]
fn printable_form_reparses_to_equal_tree() {
    let sources = [
        "let x = 5;",
        "let y = 3.25;",
        "return fn(x) { x };",
        "fn add(a, b) { return a + b; }",
        "let result = if (x < y) { x } else { y };",
        "let arr = [1, 2 * 2, 3 + 3];",
        "let h = {\"one\": 1, 2: \"two\", true: 3};",
        "a = b = c;",
        "x[0] = y;",
        "let apply = fn(f, x) { f(x) }; apply(fn(n) { n * n }, 4);",
        "[];",
        "{};",
        "fn() { };",
        "-1 - -2;",
        "1 <= 2 >= 3;",
        "let s = \"hello world\";",
        "let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) };",
    ];

    for source in sources {
        let (first, errors) = Parser::new(Lexer::new(source)).parse_program();
        assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");

        let printed = first.to_string();
        let (second, errors) = Parser::new(Lexer::new(&printed)).parse_program();
        assert!(errors.is_empty(), "re-parse errors for {printed:?}: {errors:?}");

        assert_eq!(first, second, "printable form not stable for {source:?}: {printed:?}");
    }
}

#[test]
fn missing_token_diagnostics() {
    assert_eq!(parse_errors("let x 5;"),
               vec!["expected next token to be =, got INT instead"]);
    // Resynchronization resumes at the next token, so the stray `=` also
    // produces a missing-prefix-rule diagnostic.
    assert_eq!(parse_errors("let = 5;"),
               vec!["expected next token to be IDENT, got = instead",
                    "no prefix parse function for = found"]);
    assert_eq!(parse_errors("fn add(a { a }").first().unwrap(),
               "expected next token to be ), got { instead");
}

#[test]
fn missing_prefix_rule_diagnostics() {
    assert_eq!(parse_errors("@;"), vec!["no prefix parse function for ILLEGAL found"]);
    assert_eq!(parse_errors("5 +"), vec!["no prefix parse function for EOF found"]);
}

#[test]
fn numeric_literal_diagnostics() {
    assert_eq!(parse_errors("92233720368547758078;"),
               vec!["could not parse \"92233720368547758078\" as integer"]);
}

#[test]
fn parse_errors_do_not_halt_parsing() {
    let (program, errors) = Parser::new(Lexer::new("let x 5; let y = 2;")).parse_program();
    assert_eq!(errors.len(), 1);
    // The second statement still parses after resynchronization.
    assert!(program.to_string().contains("let y = 2;"));
}
