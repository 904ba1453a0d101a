use std::fmt;

/// An abstract syntax tree (AST) node representing a dispersion formula.
///
/// `Expr` covers every construct of the formula language: numeric literals,
/// symbol references, arithmetic, built-in function calls, the `sum[...]`
/// aggregate and the optional leading assignment. Each node exclusively owns
/// its children and records the byte offset of the token that introduced it,
/// which the evaluator reports when a sub-expression fails.
///
/// The tree is never mutated after parsing, so one parsed formula can be
/// evaluated any number of times against different contexts.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `1.5`.
    Literal {
        /// The constant value.
        value:    f64,
        /// Byte offset in the formula.
        position: usize,
    },
    /// Reference to a symbol by name.
    ///
    /// Resolved at evaluation time against the independent variable, the
    /// active `sum[...]` element bindings and the scalar constants.
    Variable {
        /// Name of the symbol.
        name:     String,
        /// Byte offset in the formula.
        position: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the formula.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator token.
        position: usize,
    },
    /// Call of a built-in function such as `sqrt(x)`.
    FunctionCall {
        /// Name of the built-in.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Byte offset in the formula.
        position:  usize,
    },
    /// The `sum[...]` aggregate.
    ///
    /// Every identifier in `body` that names a list parameter drives the
    /// aggregation: term `i` binds each of them to its `i`-th element, and the
    /// terms are added.
    Sum {
        /// The per-term expression.
        body:     Box<Self>,
        /// Byte offset of the `sum` keyword.
        position: usize,
    },
    /// A leading `name = expr`. The target is purely documentary.
    Assignment {
        /// The assigned name, for example `n` or `eps`.
        target:   String,
        /// The formula proper.
        value:    Box<Self>,
        /// Byte offset of the target.
        position: usize,
    },
}

impl Expr {
    /// Gets the byte offset of the token that introduced `self`.
    /// ## Example
    /// ```
    /// use formula_dispersion::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "lbda".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. }
            | Self::Sum { position, .. }
            | Self::Assignment { position, .. } => *position,
        }
    }

    /// Returns the first `sum[...]` node found in `self`, searching
    /// depth-first, including `self` itself.
    #[must_use]
    pub fn find_sum(&self) -> Option<&Self> {
        match self {
            Self::Sum { .. } => Some(self),
            Self::Literal { .. } | Self::Variable { .. } => None,
            Self::UnaryOp { expr, .. } => expr.find_sum(),
            Self::BinaryOp { left, right, .. } => left.find_sum().or_else(|| right.find_sum()),
            Self::FunctionCall { arguments, .. } => arguments.iter().find_map(Self::find_sum),
            Self::Assignment { value, .. } => value.find_sum(),
        }
    }

    /// Returns the first `Variable` node, depth-first and left to right, whose
    /// name satisfies `predicate`.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::parse_formula;
    ///
    /// let expr = parse_formula("b * x + c").unwrap();
    /// let found = expr.find_variable(&|name| name != "b" && name != "x").unwrap();
    /// assert_eq!(found.position(), 8);
    /// ```
    #[must_use]
    pub fn find_variable(&self, predicate: &dyn Fn(&str) -> bool) -> Option<&Self> {
        match self {
            Self::Variable { name, .. } if predicate(name) => Some(self),
            Self::Literal { .. } | Self::Variable { .. } => None,
            Self::UnaryOp { expr, .. } => expr.find_variable(predicate),
            Self::BinaryOp { left, right, .. } => {
                left.find_variable(predicate).or_else(|| right.find_variable(predicate))
            },
            Self::FunctionCall { arguments, .. } => {
                arguments.iter().find_map(|argument| argument.find_variable(predicate))
            },
            Self::Sum { body, .. } => body.find_variable(predicate),
            Self::Assignment { value, .. } => value.find_variable(predicate),
        }
    }

    /// Collects the names of all symbols referenced in `self`.
    ///
    /// Function names are not symbols and are not collected. Names are
    /// returned in order of first appearance without duplicates.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::parse_formula;
    ///
    /// let expr = parse_formula("b * x + b / sqrt(c)").unwrap();
    /// assert_eq!(expr.symbols(), vec!["b", "x", "c"]);
    /// ```
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_symbols(&mut names);
        names
    }

    fn collect_symbols<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Literal { .. } => {},
            Self::Variable { name, .. } => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            },
            Self::UnaryOp { expr, .. } => expr.collect_symbols(names),
            Self::BinaryOp { left, right, .. } => {
                left.collect_symbols(names);
                right.collect_symbols(names);
            },
            Self::FunctionCall { arguments, .. } => {
                for argument in arguments {
                    argument.collect_symbols(names);
                }
            },
            Self::Sum { body, .. } => body.collect_symbols(names),
            Self::Assignment { value, .. } => value.collect_symbols(names),
        }
    }
}

/// Renders the tree fully parenthesized, e.g. `n = ((22 * 44) + 66)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::Sum { body, .. } => write!(f, "sum[{body}]"),
            Self::Assignment { target, value, .. } => write!(f, "{target} = {value}"),
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
