use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, token_name},
        parser::core::{ASSIGN, LOWEST, PREFIX, Parser},
    },
};

impl Parser<'_> {
    /// Dispatches the current token to its prefix rule.
    ///
    /// The literal rules are the recursion's base cases; the rest re-enter
    /// [`parse_expression`](Self::parse_expression). A token without a
    /// prefix rule is a diagnostic, not a panic.
    pub(crate) fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur_token.clone() {
            Some(Token::Ident(name)) => Some(Expr::Identifier { name }),
            Some(Token::Int(literal)) => self.parse_integer_literal(&literal),
            Some(Token::Float(literal)) => self.parse_float_literal(&literal),
            Some(Token::Str(value)) => Some(Expr::StringLiteral { value }),
            Some(Token::True) => Some(Expr::BooleanLiteral { value: true }),
            Some(Token::False) => Some(Expr::BooleanLiteral { value: false }),
            Some(Token::Bang) => self.parse_prefix_expression(PrefixOperator::Not),
            Some(Token::Minus) => self.parse_prefix_expression(PrefixOperator::Negative),
            Some(Token::Lparen) => self.parse_grouped_expression(),
            Some(Token::If) => self.parse_if_expression(),
            Some(Token::Function) => self.parse_function_literal(),
            Some(Token::Lbracket) => self.parse_array_literal(),
            Some(Token::Lbrace) => self.parse_hash_literal(),
            other => {
                self.errors.push(ParseError::NoPrefixParseFn {
                    token: token_name(other.as_ref()).to_owned(),
                });
                None
            },
        }
    }

    /// Converts an integer literal, recording a diagnostic on overflow.
    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expr> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral { value }),
            Err(_) => {
                self.errors.push(ParseError::InvalidIntegerLiteral { literal: literal.to_owned(), });
                None
            },
        }
    }

    /// Converts a float literal.
    fn parse_float_literal(&mut self, literal: &str) -> Option<Expr> {
        match literal.parse::<f64>() {
            Ok(value) => Some(Expr::FloatLiteral { value }),
            Err(_) => {
                self.errors.push(ParseError::InvalidFloatLiteral { literal: literal.to_owned(), });
                None
            },
        }
    }

    /// Parses `!<expression>` or `-<expression>`.
    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> Option<Expr> {
        self.next_token();
        let right = self.parse_expression(PREFIX)?;
        Some(Expr::Prefix { operator,
                            right: Box::new(right) })
    }

    /// Parses `(<expression>)`.
    ///
    /// The parentheses only steer precedence; no node is produced for them.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(LOWEST)?;
        if !self.expect_peek(&Token::Rparen) {
            return None;
        }
        Some(expr)
    }

    /// Parses `if (<condition>) <block>` with an optional `else <block>`.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::Lparen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(LOWEST)?;
        if !self.expect_peek(&Token::Rparen) {
            return None;
        }
        if !self.expect_peek(&Token::Lbrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(&Token::Else) {
            self.next_token();
            if !self.expect_peek(&Token::Lbrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Parses an anonymous function literal `fn(<parameters>) <block>`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::Lparen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(&Token::Lbrace) {
            return None;
        }
        let body = self.parse_block_statement();
        Some(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses a comma-separated parameter list terminated by `)`.
    ///
    /// Handles `()`, `(a)`, and `(a, b, c)`.
    pub(crate) fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();
        if self.peek_token_is(&Token::Rparen) {
            self.next_token();
            return Some(parameters);
        }
        parameters.push(self.expect_ident()?);
        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            parameters.push(self.expect_ident()?);
        }
        if !self.expect_peek(&Token::Rparen) {
            return None;
        }
        Some(parameters)
    }

    /// Parses `[<expression>, ...]`.
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(&Token::Rbracket)?;
        Some(Expr::ArrayLiteral { elements })
    }

    /// Parses a comma-separated expression list terminated by `end`.
    ///
    /// Shared by array literals (`]`) and call arguments (`)`).
    fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expr>> {
        let mut items = Vec::new();
        self.next_token();
        if self.cur_token_is(end) {
            return Some(items);
        }
        items.push(self.parse_expression(LOWEST)?);
        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(LOWEST)?);
        }
        if !self.expect_peek(end) {
            return None;
        }
        Some(items)
    }

    /// Parses `{<key>: <value>, ...}`.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();
        self.next_token();
        if self.cur_token_is(&Token::Rbrace) {
            return Some(Expr::HashLiteral { pairs });
        }
        pairs.push(self.parse_key_value_pair()?);
        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            pairs.push(self.parse_key_value_pair()?);
        }
        if !self.expect_peek(&Token::Rbrace) {
            return None;
        }
        Some(Expr::HashLiteral { pairs })
    }

    /// Parses one `<key> : <value>` pair of a hash literal, both sides at
    /// the lowest binding power.
    fn parse_key_value_pair(&mut self) -> Option<(Expr, Expr)> {
        let key = self.parse_expression(LOWEST)?;
        if !self.expect_peek(&Token::Colon) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(LOWEST)?;
        Some((key, value))
    }

    /// Parses a binary operator application. The left operand has already
    /// been parsed; the right operand binds at the operator's own level,
    /// which makes every binary operator left-associative.
    pub(crate) fn parse_infix_expression(&mut self,
                                         left: Expr,
                                         operator: InfixOperator)
                                         -> Option<Expr> {
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix { left: Box::new(left),
                           operator,
                           right: Box::new(right) })
    }

    /// Parses a call. The `(` acts as an infix operator whose left operand
    /// is the callee — an identifier, a function literal, or any expression
    /// producing a function.
    pub(crate) fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(&Token::Rparen)?;
        Some(Expr::Call { function: Box::new(function),
                          arguments })
    }

    /// Parses `<expression>[<expression>]`.
    pub(crate) fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_expression(LOWEST)?;
        if !self.expect_peek(&Token::Rbracket) {
            return None;
        }
        Some(Expr::Index { left:  Box::new(left),
                           index: Box::new(index), })
    }

    /// Parses `<target> = <expression>`.
    ///
    /// The right operand is parsed one level below the operator's own
    /// binding power, so chained assignments nest to the right:
    /// `a = b = c` is `a = (b = c)`.
    pub(crate) fn parse_assign_expression(&mut self, target: Expr) -> Option<Expr> {
        self.next_token();
        let value = self.parse_expression(ASSIGN - 1)?;
        Some(Expr::Assign { target: Box::new(target),
                            value:  Box::new(value), })
    }
}
