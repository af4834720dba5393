use crate::builtins;
use crate::expr::{Callable, Value};
use std::collections::HashMap;
use std::rc::Rc;

/// A lexical scope: local bindings plus the enclosing scope.
///
/// Scopes are populated once at construction and never written again --
/// the root scope at startup, call scopes at each closure invocation.
/// That is what lets the whole chain be shared as plain [`Rc`]s, with
/// parent links always pointing strictly outward (never a cycle).
#[derive(Debug, Default)]
pub struct Env {
    vars: HashMap<String, Value>,
    parent: Option<Rc<Env>>,
}

impl Env {
    /// The root scope, holding the builtin library. Created once per
    /// interpreter and alive for its whole lifetime.
    pub fn new_global() -> Rc<Self> {
        let vars = builtins::library()
            .into_iter()
            .map(|b| (b.name.to_owned(), Value::Callable(Callable::Builtin(b))))
            .collect();
        Rc::new(Self { vars, parent: None })
    }

    /// A call scope with `vars` bound locally and `parent` as the next
    /// scope outward.
    pub fn child(parent: Rc<Env>, vars: HashMap<String, Value>) -> Rc<Self> {
        Rc::new(Self {
            vars,
            parent: Some(parent),
        })
    }

    /// Innermost-first lookup along the parent chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.vars.get(name) {
            Some(v) => Some(v.clone()),
            None => self.parent.as_ref().and_then(|p| p.get(name)),
        }
    }
}
