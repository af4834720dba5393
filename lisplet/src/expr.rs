use crate::env::Env;
use crate::eval::{self, EvalError};
use crate::prelude::*;
use ordered_float::{FloatIsNan, NotNan};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use variantly::Variantly;

pub type Num = NotNan<f64>;

/// Error representing a typed access to the wrong [`Value`] variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("Not a List!")]
    NotAList,
}

/// One node of a parsed line. Immutable once the parser built it; a
/// whole tree is dropped after its line finished evaluating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(Num),
    Identifier(String),
    List(Vec<Node>),
}

impl Node {
    pub fn ident(s: &str) -> Self {
        Self::Identifier(s.to_owned())
    }

    pub fn lit(f: f64) -> Result<Self, FloatIsNan> {
        NotNan::new(f).map(Self::Literal)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(n) => write!(f, "{}", n),
            Node::Identifier(s) => write!(f, "{}", s),
            Node::List(l) => write!(f, "({})", l.iter().join(" ")),
        }
    }
}

pub trait Call {
    fn call(&self, args: &[Value]) -> Result<Value, EvalError>;
}

pub type BuiltinFn = fn(&[Value]) -> Result<Value, EvalError>;

/// A named primitive registered in the root scope.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Builtin {
    pub name: &'static str,
    pub f: BuiltinFn,
}

impl Call for Builtin {
    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        (self.f)(args)
    }
}

/// A user lambda: parameter names, the shared body, and the scope that
/// was current at its definition site.
#[derive(Debug, Clone)]
pub struct Closure {
    pub params: Vec<String>,
    pub body: Rc<Node>,
    pub env: Rc<Env>,
}

impl Call for Closure {
    /// Bind arguments positionally in a fresh child scope of the captured
    /// one and evaluate the body there. Arity is not checked: unmatched
    /// parameters stay unbound, extra arguments are dropped by the zip.
    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        let vars: HashMap<_, _> = self
            .params
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect();
        let env = Env::child(self.env.clone(), vars);
        eval::eval(&self.body, &env)
    }
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
            && Rc::ptr_eq(&self.body, &other.body)
            && Rc::ptr_eq(&self.env, &other.env)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Callable {
    Builtin(Builtin),
    Closure(Closure),
}

impl Call for Callable {
    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        match self {
            Callable::Builtin(b) => b.call(args),
            Callable::Closure(c) => c.call(args),
        }
    }
}

#[derive(Variantly, Debug, Clone, PartialEq)]
pub enum Value {
    Number(Num),
    List(Vec<Value>),
    Callable(Callable),
}

impl Value {
    pub fn new_list() -> Self {
        Self::List(vec![])
    }

    pub fn num(f: f64) -> Result<Self, FloatIsNan> {
        NotNan::new(f).map(Self::Number)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::List(l) => write!(f, "({})", l.iter().join(" ")),
            Value::Callable(Callable::Builtin(b)) => write!(f, "#<builtin {}>", b.name),
            Value::Callable(Callable::Closure(c)) => {
                write!(f, "#<lambda ({})>", c.params.iter().join(" "))
            }
        }
    }
}

/// Creates a [`Value::List`] like `vec!`.
///
/// A thin wrapper around `vec!`, expands to `Value::List(vec![/*...*/])`.
///
/// ```
/// # use lisplet::expr::{list, Value};
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let l = list![Value::num(1.)?, Value::num(2.)?].unwrap_list();
/// assert_eq!(l[0], Value::num(1.)?);
/// assert_eq!(l[1], Value::num(2.)?);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! list {
    [] => (
        Value::new_list()
    );
    [$($x:expr),+ $(,)?] => (
        Value::List(vec![$($x),+])
    );
}

pub use list;

/// Creates a [`Node::List`] like `vec!`.
#[macro_export]
macro_rules! node_list {
    [] => (
        Node::List(vec![])
    );
    [$($x:expr),+ $(,)?] => (
        Node::List(vec![$($x),+])
    );
}

pub use node_list;
