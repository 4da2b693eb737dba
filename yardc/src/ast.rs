use yardspan::Spand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Explicit expression tree built by the recursive-descent parser.
///
/// The stack evaluator never builds one of these; the tree exists as
/// an independent cross-check on its results.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Number(f64),

    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },

    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    Group(Box<Expr>),
}

pub type Expr = Spand<ExprKind>;

impl ExprKind {
    /// Walks the tree bottom-up. Total for every tree the parser can
    /// produce.
    #[must_use]
    pub fn eval(&self) -> f64 {
        match self {
            Self::Number(literal) => *literal,
            Self::Unary {
                op: UnaryOp::Neg,
                expr,
            } => -expr.kind.eval(),
            Self::Binary { op, lhs, rhs } => {
                let lhs = lhs.kind.eval();
                let rhs = rhs.kind.eval();
                match op {
                    BinaryOp::Add => lhs + rhs,
                    BinaryOp::Sub => lhs - rhs,
                    BinaryOp::Mul => lhs * rhs,
                    BinaryOp::Div => lhs / rhs,
                }
            }
            Self::Group(inner) => inner.kind.eval(),
        }
    }
}
