use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
};

/// A parsed source unit: the ordered top-level statements.
///
/// Rendering a program concatenates the canonical form of each statement.
/// Expression statements carry no terminator, so consecutive ones run
/// together (`a; b;` renders as `ab`) and only a single expression renders
/// back to source that parses to the same tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A `def` binding, `def name = value`.
///
/// Kept as its own type because the init clause of a `for` loop is a
/// definition without its trailing semicolon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// The bound name.
    pub name:  String,
    /// The expression producing the bound value.
    pub value: Expr,
    /// Line number in the source code.
    pub line:  usize,
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// Represents a statement.
///
/// Statements are the units a program and a block are made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable definition using `def`.
    Def(Definition),
    /// A `return`, optionally carrying a value.
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A nested block.
    Block(Block),
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every variant stores the line its first token appeared on. Sub-expressions
/// are boxed and owned by their parent, so a parsed tree never shares nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An integer literal.
    Integer {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    Str {
        /// The literal contents, without quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator to apply.
        op:      PrefixOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A postfix increment or decrement.
    Postfix {
        /// The operator to apply.
        op:      PostfixOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Conditional expression.
    If {
        /// The condition; only `true` selects the consequence.
        condition:   Box<Self>,
        /// Block evaluated if the condition is true.
        consequence: Block,
        /// Block evaluated otherwise.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal, named or anonymous.
    Function {
        /// The name the function binds itself to, if any.
        name:   Option<String>,
        /// Parameter names in order.
        params: Vec<String>,
        /// The function body, shared with every closure created from it.
        body:   Rc<Block>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Function call expression (e.g. `add(1, 2)`).
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Arguments in order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// C-style `for` loop.
    For {
        /// Definition run once before the first iteration.
        init:      Box<Definition>,
        /// Checked before every iteration.
        condition: Box<Self>,
        /// Evaluated after every iteration.
        post:      Box<Self>,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// Rebinding of an existing name, `name = value`.
    Assign {
        /// The target name.
        name:  String,
        /// The new value.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Array literal expression.
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Indexing expression (e.g., `arr[2]`).
    Index {
        /// The collection to index into.
        collection: Box<Self>,
        /// The index to access.
        index:      Box<Self>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use jipl::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::Integer { line, .. }
            | Self::Str { line, .. }
            | Self::Boolean { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::Postfix { line, .. }
            | Self::If { line, .. }
            | Self::Function { line, .. }
            | Self::Call { line, .. }
            | Self::For { line, .. }
            | Self::Assign { line, .. }
            | Self::Array { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and the logical
/// connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

/// Represents a postfix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixOperator {
    /// `x++`
    Increment,
    /// `x--`
    Decrement,
}

impl Display for InfixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use InfixOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl Display for PostfixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}

/// Writes `items` separated by `,` with no padding.
fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "def {} = {}", self.name, self.value)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))?;
        write!(f, "}}")
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Def(def) => write!(f, "{def};"),
            Self::Return { value: Some(value), .. } => write!(f, "return {value};"),
            Self::Return { value: None, .. } => write!(f, "return;"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

/// Canonical, fully parenthesized rendering.
///
/// Every operator application is wrapped in parentheses, which makes the
/// parser's precedence decisions visible.
///
/// ## Example
/// ```
/// use jipl::ast::{Expr, InfixOperator};
///
/// let sum = Expr::Infix { left:  Box::new(Expr::Integer { value: 1, line: 1 }),
///                         op:    InfixOperator::Add,
///                         right: Box::new(Expr::Integer { value: 2, line: 1 }),
///                         line:  1, };
///
/// assert_eq!(sum.to_string(), "(1+2)");
/// ```
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::Integer { value, .. } => write!(f, "{value}"),
            Self::Str { value, .. } => write!(f, "\"{value}\""),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Prefix { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left}{op}{right})"),
            Self::Postfix { op, operand, .. } => write!(f, "({operand}{op})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function { name, params, body, .. } => {
                write!(f, "function")?;
                if let Some(name) = name {
                    write!(f, " {name}")?;
                }
                write!(f, "(")?;
                write_list(f, params)?;
                write!(f, "){body}")
            },
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                write_list(f, arguments)?;
                write!(f, ")")
            },
            Self::For { init,
                        condition,
                        post,
                        body,
                        .. } => write!(f, "for ({init}; {condition}; {post}) {body}"),
            Self::Assign { name, value, .. } => write!(f, "{name} = {value}"),
            Self::Array { elements, .. } => {
                write!(f, "[")?;
                write_list(f, elements)?;
                write!(f, "]")
            },
            Self::Index { collection, index, .. } => write!(f, "({collection}[{index}])"),
        }
    }
}
