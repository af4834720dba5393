use crate::env::Env;
use crate::expr::{Call, ExprError, Node, Value};
use crate::prelude::*;
use std::rc::Rc;
use thiserror::Error;

/// Error representing runtime evaluation failures. Any of these aborts
/// the current line only; the root scope is never touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unbound identifier: {0}!")]
    UnboundIdentifier(String),
    #[error("Wrong argument count: required {required}, passed {passed}!")]
    WrongArgCount { required: usize, passed: usize },
    #[error("Empty list has no first element!")]
    EmptyList,
    #[error("Ill-formed lambda!")]
    IllFormedLambda,
    #[error(transparent)]
    Expr(#[from] ExprError),
}

/// special forms that require different evaluation than normal application
pub mod special {
    use super::*;
    use crate::expr::{Callable, Closure};
    use std::str::FromStr;

    pub enum SpecialForm {
        Lambda,
    }

    impl FromStr for SpecialForm {
        type Err = (); // no need for more here for now

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "lambda" => Ok(Self::Lambda),
                _ => Err(()),
            }
        }
    }

    pub fn eval_special(
        form: SpecialForm,
        rest: &[Node],
        env: &Rc<Env>,
    ) -> Result<Value, EvalError> {
        match form {
            SpecialForm::Lambda => eval_lambda(rest, env),
        }
    }

    /// `(lambda (param ...) body)` -- capture the defining scope and
    /// hand the parameter list and body over untouched.
    fn eval_lambda(rest: &[Node], env: &Rc<Env>) -> Result<Value, EvalError> {
        let [params, body] = rest else {
            return Err(EvalError::IllFormedLambda);
        };
        let Node::List(params) = params else {
            return Err(EvalError::IllFormedLambda);
        };
        let params = params
            .iter()
            .map(|p| match p {
                Node::Identifier(name) => Ok(name.clone()),
                _ => Err(EvalError::IllFormedLambda),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::Callable(Callable::Closure(Closure {
            params,
            body: Rc::new(body.clone()),
            env: env.clone(),
        })))
    }
}

fn eval_list(list: &[Node], env: &Rc<Env>) -> Result<Value, EvalError> {
    // special forms see their arguments unevaluated
    if let [Node::Identifier(head), rest @ ..] = list {
        if let Ok(form) = head.parse() {
            return special::eval_special(form, rest, env);
        }
    }

    let values = list
        .iter()
        .map(|node| eval(node, env))
        .collect::<Result<Vec<_>, _>>()?;

    match values.split_first() {
        Some((Value::Callable(op), args)) => op.call(args),
        // a list that doesn't start with a callable is itself the result
        _ => values.pipe(Value::List).pipe(Ok),
    }
}

pub fn eval(node: &Node, env: &Rc<Env>) -> Result<Value, EvalError> {
    match node {
        Node::Literal(n) => Ok(Value::Number(*n)),
        Node::Identifier(name) => env
            .get(name)
            .ok_or_else(|| EvalError::UnboundIdentifier(name.clone())),
        Node::List(list) => eval_list(list, env),
    }
}
