use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Object;

/// One level of the scope chain.
#[derive(Default)]
struct Scope {
    bindings: HashMap<String, Object>,
    outer:    Option<Environment>,
}

/// A lexical scope: local bindings plus an optional enclosing scope.
///
/// `Environment` is a shared handle; cloning it yields another handle to the
/// same scope. Closures keep their defining scope alive through such a handle.
///
/// A closure stored in the scope it captures forms a reference cycle, so that
/// scope is never freed. This is not limited to the root: a named function, or
/// a `def`-bound function literal, evaluated inside a function body is stored
/// in that call's scope, so every such call leaks its scope together with
/// everything reachable from it.
///
/// # Example
/// ```
/// use jipl::interpreter::value::{Environment, Object};
///
/// let root = Environment::new_root();
/// root.set("x", Object::Integer(1));
///
/// let inner = Environment::new_child(&root);
/// inner.set("x", Object::Integer(2));
///
/// assert_eq!(inner.get("x"), Some(Object::Integer(2)));
/// assert_eq!(root.get("x"), Some(Object::Integer(1)));
/// ```
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates an empty scope with no enclosing scope.
    #[must_use]
    pub fn new_root() -> Self {
        Self::default()
    }

    /// Creates an empty scope enclosed by `outer`.
    #[must_use]
    pub fn new_child(outer: &Self) -> Self {
        Self(Rc::new(RefCell::new(Scope { bindings: HashMap::new(),
                                          outer:    Some(outer.clone()), })))
    }

    /// Looks `name` up in this scope, then outward. The nearest binding wins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.0.borrow();
        match scope.bindings.get(name) {
            Some(value) => Some(value.clone()),
            None => scope.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` in this scope, shadowing any outer binding, and returns
    /// the bound value.
    pub fn set(&self, name: impl Into<String>, value: Object) -> Object {
        self.0.borrow_mut().bindings.insert(name.into(), value.clone());
        value
    }

    /// Rebinds `name` in the nearest scope that already holds it.
    ///
    /// Returns `false`, and binds nothing, if no scope in the chain holds
    /// `name`.
    pub fn assign(&self, name: &str, value: Object) -> bool {
        let mut scope = self.0.borrow_mut();
        if let Some(slot) = scope.bindings.get_mut(name) {
            *slot = value;
            return true;
        }
        match &scope.outer {
            Some(outer) => outer.assign(name, value),
            None => false,
        }
    }

    /// Returns `true` if this scope is enclosed by another one, i.e. it is
    /// not the root.
    #[must_use]
    pub fn has_outer(&self) -> bool {
        self.0.borrow().outer.is_some()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names = scope.bindings.keys().collect::<Vec<_>>();
        names.sort();

        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_outer", &scope.outer.is_some())
         .finish()
    }
}
