use std::fmt;

/// The root node of every parsed source text.
///
/// A program is a flat sequence of statements. Its printable form is the
/// canonical rendition of the source: re-parsing it yields an equal tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as the branches of `if` expressions and as function bodies.
/// The printable form renders only the inner statements; the construct that
/// owns the block supplies the braces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    /// The statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
///
/// Statements and expressions are disjoint families: a statement never
/// appears where an expression is expected and vice versa. The split is
/// enforced here at the type level.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <expression>;`.
    Let {
        /// The bound identifier.
        name:  String,
        /// The initializer expression.
        value: Expr,
    },
    /// A `return` statement: `return <expression>;`.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// A bare expression used as a statement.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// A named function declaration: `fn <name>(<params>) { ... }`.
    FunctionDeclaration {
        /// The declared function name.
        name:       String,
        /// The parameter names, in order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
    },
}

/// An abstract syntax tree node representing an expression.
///
/// Every construct that produces a value is an expression, including `if`
/// and function literals. Compound expressions print fully parenthesized so
/// that the printable form is unambiguous.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A reference to a binding by name.
    Identifier {
        /// The identifier text. Never empty.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The parsed value.
        value: i64,
    },
    /// A 64-bit floating-point literal.
    FloatLiteral {
        /// The parsed value.
        value: f64,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A string literal. The text excludes the surrounding quotes.
    StringLiteral {
        /// The literal contents.
        value: String,
    },
    /// An array literal: `[<expression>, ...]`.
    ArrayLiteral {
        /// The element expressions, in order.
        elements: Vec<Expr>,
    },
    /// A hash literal: `{<key>: <value>, ...}`.
    ///
    /// Pairs keep their source order; duplicate keys are resolved during
    /// evaluation, where the later pair wins.
    HashLiteral {
        /// The `(key, value)` expression pairs, in source order.
        pairs: Vec<(Expr, Expr)>,
    },
    /// A prefix operator application: `!<expression>` or `-<expression>`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Expr>,
    },
    /// A binary operator application: `<expression> <op> <expression>`.
    Infix {
        /// The left operand.
        left:     Box<Expr>,
        /// The operator.
        operator: InfixOperator,
        /// The right operand.
        right:    Box<Expr>,
    },
    /// A conditional expression with an optional `else` branch.
    If {
        /// The condition, evaluated for truthiness.
        condition:   Box<Expr>,
        /// The branch taken when the condition is truthy.
        consequence: BlockStatement,
        /// The branch taken otherwise, when present.
        alternative: Option<BlockStatement>,
    },
    /// An anonymous function literal: `fn(<params>) { ... }`.
    FunctionLiteral {
        /// The parameter names, in order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
    },
    /// A call expression: `<expression>(<arguments>)`.
    Call {
        /// The expression producing the callee.
        function:  Box<Expr>,
        /// The argument expressions, in order.
        arguments: Vec<Expr>,
    },
    /// An index expression: `<expression>[<expression>]`.
    Index {
        /// The indexed container.
        left:  Box<Expr>,
        /// The index or key.
        index: Box<Expr>,
    },
    /// An assignment expression: `<target> = <expression>`.
    ///
    /// The parser accepts any expression as the target; the evaluator
    /// restricts targets to identifiers.
    Assign {
        /// The assignment target.
        target: Box<Expr>,
        /// The assigned value.
        value:  Box<Expr>,
    },
}

/// A prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`), defined via truthiness.
    Not,
    /// Arithmetic negation (`-x`).
    Negative,
}

/// An infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`), also string concatenation.
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Lte,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Gte,
    /// Equality (`==`).
    Eq,
    /// Inequality (`!=`).
    NotEq,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negative => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes `items` separated by `separator`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                                 items: &[T],
                                 separator: &str)
                                 -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements, " ")
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements, " ")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr};"),
            Self::FunctionDeclaration { name,
                                        parameters,
                                        body, } => {
                write!(f, "fn {name}(")?;
                write_joined(f, parameters, ", ")?;
                write!(f, ") {{ {body} }}")
            },
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            // `{:?}` keeps a fractional part, so the output re-lexes as a
            // float.
            Self::FloatLiteral { value } => write!(f, "{value:?}"),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "\"{value}\""),
            Self::ArrayLiteral { elements } => {
                write!(f, "[")?;
                write_joined(f, elements, ", ")?;
                write!(f, "]")
            },
            Self::HashLiteral { pairs } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn(")?;
                write_joined(f, parameters, ", ")?;
                write!(f, ") {{ {body} }}")
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments, ", ")?;
                write!(f, ")")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::Assign { target, value } => write!(f, "({target} = {value})"),
        }
    }
}
