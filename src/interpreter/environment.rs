use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an [`Environment`].
///
/// Environments are shared, not copied: a function value holds a handle to
/// the environment its literal was evaluated in, and every invocation of the
/// function encloses that same environment. Mutation through one handle is
/// visible through all of them, which is what makes sibling closures over
/// the same frame see each other's writes. The chain of `outer` handles
/// forms a DAG with no back-edges, so reference counting is sufficient to
/// manage lifetimes.
pub type Env = Rc<RefCell<Environment>>;

/// A lexically nested symbol table.
///
/// Each environment owns the bindings of one scope and an optional handle to
/// the environment of the enclosing scope. Lookups walk outward; bindings
/// always land in the innermost frame.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a root environment with no outer scope.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// Used at function application: parameters are bound in the new frame
    /// while lookups still reach the function's captured scope.
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks a name up, walking outward through enclosing scopes.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let root = Environment::new();
    /// root.borrow_mut().set("x", Value::Integer(1));
    ///
    /// let inner = Environment::new_enclosed(&root);
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(inner.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Looks a name up in this frame only.
    ///
    /// Declarations use this to allow shadowing an outer scope while
    /// rejecting redefinition within the same frame.
    #[must_use]
    pub fn get_local(&self, name: &str) -> Option<Value> {
        self.store.get(name).cloned()
    }

    /// Binds a name in this frame unconditionally.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_owned(), value);
    }

    /// Overwrites an existing binding in the frame that owns it.
    ///
    /// The search walks outward from this frame. Returns `false` when the
    /// name is unbound in every reachable scope, in which case nothing is
    /// written.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let root = Environment::new();
    /// root.borrow_mut().set("n", Value::Integer(0));
    ///
    /// let frame = Environment::new_enclosed(&root);
    /// assert!(frame.borrow_mut().assign("n", Value::Integer(1)));
    /// assert!(!frame.borrow_mut().assign("missing", Value::Null));
    ///
    /// assert_eq!(root.borrow().get("n"), Some(Value::Integer(1)));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if self.store.contains_key(name) {
            self.store.insert(name.to_owned(), value);
            return true;
        }
        match &self.outer {
            Some(outer) => outer.borrow_mut().assign(name, value),
            None => false,
        }
    }
}
