//! Expression AST and evaluator.

use super::errors::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Expr {
    Number(f64),
    /// The free variable `x`.
    Variable,
    /// An identifier other than `x`/`pi`/`e`; resolution fails at eval time.
    Ident(String),
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        name: String,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub(super) fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Expr::Number(v) => Ok(*v),
            Expr::Variable => Ok(x),
            Expr::Ident(name) => Err(EvalError::UnknownIdentifier { name: name.clone() }),
            Expr::Neg(inner) => Ok(-inner.eval(x)?),
            Expr::Binary { op, lhs, rhs } => {
                let l = lhs.eval(x)?;
                let r = rhs.eval(x)?;
                Ok(match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    // IEEE semantics: 1/0 is inf, 0/0 is NaN; the solver's
                    // finiteness check turns either into a failed run.
                    BinOp::Div => l / r,
                    BinOp::Pow => l.powf(r),
                })
            }
            Expr::Call { name, arg } => apply(name, arg.eval(x)?),
        }
    }
}

fn apply(name: &str, v: f64) -> Result<f64, EvalError> {
    Ok(match name {
        "sin"  => v.sin(),
        "cos"  => v.cos(),
        "tan"  => v.tan(),
        "asin" => v.asin(),
        "acos" => v.acos(),
        "atan" => v.atan(),
        "sqrt" => v.sqrt(),
        "cbrt" => v.cbrt(),
        "abs"  => v.abs(),
        "exp"  => v.exp(),
        "ln"   => v.ln(),
        "log"  => v.log10(),
        _ => return Err(EvalError::UnknownFunction { name: name.to_owned() }),
    })
}
