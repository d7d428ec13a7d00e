//! Type-erased method bodies.
//!
//! Method, constructor, and destructor bodies are ordinary Rust callables
//! stored behind [`MethodFn`]. Composition invokes stored callables in
//! sequence; no source text is ever synthesized or evaluated.

use std::fmt;
use std::sync::Arc;

use crate::error::RuntimeError;
use crate::instance::Instance;
use crate::value::Value;

/// Trait for callable method bodies.
///
/// The body receives the instance it is bound to and the positional call
/// arguments, and produces a [`Value`] (or `Value::Null` for procedures).
/// A blanket impl covers plain closures of the matching signature.
pub trait ClassCallable {
    /// Invoke this body on `this` with the given arguments.
    fn call(&self, this: &mut Instance, args: &[Value]) -> Result<Value, RuntimeError>;
}

impl<F> ClassCallable for F
where
    F: Fn(&mut Instance, &[Value]) -> Result<Value, RuntimeError>,
{
    fn call(&self, this: &mut Instance, args: &[Value]) -> Result<Value, RuntimeError> {
        (self)(this, args)
    }
}

/// Type-erased method body.
///
/// Wraps any [`ClassCallable`] so bodies of different concrete types can be
/// stored uniformly in method tables. The inner callable is held in an
/// `Arc`, so cloning a `MethodFn` shares the same implementation; a resolved
/// class and every class derived from it hold the same underlying body.
pub struct MethodFn {
    inner: Arc<dyn ClassCallable + Send + Sync>,
}

impl MethodFn {
    /// Create a new `MethodFn` from a callable.
    pub fn new<F>(f: F) -> Self
    where
        F: ClassCallable + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Create a `MethodFn` that runs `parts` in order.
    ///
    /// Intermediate results are discarded and the last part's result is
    /// returned (`Value::Null` for an empty chain). Used to expose a base
    /// class's full constructor chain as a single qualified callable.
    pub fn chain(parts: Vec<MethodFn>) -> Self {
        Self::new(move |this: &mut Instance, args: &[Value]| {
            let mut last = Value::Null;
            for part in &parts {
                last = part.call(this, args)?;
            }
            Ok(last)
        })
    }

    /// Invoke this body on `this` with the given arguments.
    pub fn call(&self, this: &mut Instance, args: &[Value]) -> Result<Value, RuntimeError> {
        self.inner.call(this, args)
    }
}

impl Clone for MethodFn {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for MethodFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolved::ResolvedClass;

    fn blank_instance() -> Instance {
        ResolvedClass::instantiate(&ResolvedClass::empty("Blank"), &[]).unwrap()
    }

    #[test]
    fn method_fn_calls_closure() {
        let body = MethodFn::new(|_this: &mut Instance, args: &[Value]| {
            Ok(args.first().cloned().unwrap_or_default())
        });
        let mut this = blank_instance();
        assert_eq!(body.call(&mut this, &[Value::Int(5)]).unwrap(), Value::Int(5));
        assert_eq!(body.call(&mut this, &[]).unwrap(), Value::Null);
    }

    #[test]
    fn method_fn_clone_shares_body() {
        let body = MethodFn::new(|this: &mut Instance, _args: &[Value]| {
            let n = this.get("n").and_then(|v| v.as_int()).unwrap_or(0);
            this.set("n", n + 1);
            Ok(Value::Int(n + 1))
        });
        let copy = body.clone();
        let mut this = blank_instance();
        body.call(&mut this, &[]).unwrap();
        copy.call(&mut this, &[]).unwrap();
        assert_eq!(this.get("n"), Some(&Value::Int(2)));
    }

    #[test]
    fn chain_runs_parts_in_order() {
        let append = |tag: &'static str| {
            MethodFn::new(move |this: &mut Instance, _args: &[Value]| {
                let mut log = this
                    .get("log")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                log.push_str(tag);
                this.set("log", log);
                Ok(Value::Null)
            })
        };
        let chained = MethodFn::chain(vec![append("A"), append("B"), append("C")]);
        let mut this = blank_instance();
        chained.call(&mut this, &[]).unwrap();
        assert_eq!(this.get("log"), Some(&Value::str("ABC")));
    }

    #[test]
    fn chain_stops_on_error() {
        let ok = MethodFn::new(|this: &mut Instance, _args: &[Value]| {
            this.set("ran", true);
            Ok(Value::Null)
        });
        let fail = MethodFn::new(|_this: &mut Instance, _args: &[Value]| {
            Err(RuntimeError::method("boom"))
        });
        let after = MethodFn::new(|this: &mut Instance, _args: &[Value]| {
            this.set("after", true);
            Ok(Value::Null)
        });
        let chained = MethodFn::chain(vec![ok, fail, after]);
        let mut this = blank_instance();
        let err = chained.call(&mut this, &[]).unwrap_err();
        assert_eq!(err, RuntimeError::method("boom"));
        assert_eq!(this.get("ran"), Some(&Value::Bool(true)));
        assert_eq!(this.get("after"), None);
    }

    #[test]
    fn empty_chain_returns_null() {
        let chained = MethodFn::chain(Vec::new());
        let mut this = blank_instance();
        assert_eq!(chained.call(&mut this, &[]).unwrap(), Value::Null);
    }
}
