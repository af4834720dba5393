use crate::{env::Env, eval, expr::Value, parser};
use std::io::{self, BufRead};
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ParseErr(#[from] parser::ParseError),
    #[error(transparent)]
    EvalErr(#[from] eval::EvalError),
    #[error(transparent)]
    IOErr(#[from] io::Error),
}

pub type Result<T = Value> = std::result::Result<T, Error>;

/// Run one line through the whole pipeline against the given root scope.
pub fn eval_line(line: &str, env: &Rc<Env>) -> Result {
    let ast = parser::parse_line(line)?;
    Ok(eval::eval(&ast, env)?)
}

/// Owns the process-lifetime root scope; every line evaluated through
/// the same interpreter sees the same one.
#[derive(Debug)]
pub struct Interpreter {
    env: Rc<Env>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self {
            env: Env::new_global(),
        }
    }
}

impl Interpreter {
    pub fn eval(&self, line: &str) -> Result {
        eval_line(line, &self.env)
    }

    /// Evaluate a whole source strictly line by line, skipping blank
    /// lines, and return the last line's value.
    pub fn run(&self, source: impl io::Read) -> Result<Option<Value>> {
        let mut last = None;
        for line in io::BufReader::new(source).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            last = Some(self.eval(&line)?);
        }
        Ok(last)
    }
}

pub fn eval(line: &str) -> Result {
    Interpreter::default().eval(line)
}

pub fn run(source: impl io::Read) -> Result<Option<Value>> {
    Interpreter::default().run(source)
}
