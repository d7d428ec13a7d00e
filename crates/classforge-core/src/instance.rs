//! Constructed class instances.
//!
//! An [`Instance`] owns its field state and holds a shared, read-only
//! reference to the resolved class it was constructed from. The reference
//! is captured at construction time: if the class name is later
//! re-registered, existing instances keep dispatching against the table
//! that was active when they were built.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::RuntimeError;
use crate::resolved::ResolvedClass;
use crate::value::Value;

/// A constructed instance of a composed class.
#[derive(Debug)]
pub struct Instance {
    class: Arc<ResolvedClass>,
    fields: FxHashMap<String, Value>,
}

impl Instance {
    pub(crate) fn new(class: Arc<ResolvedClass>) -> Self {
        Self {
            class,
            fields: FxHashMap::default(),
        }
    }

    /// The resolved class this instance is bound to.
    pub fn class(&self) -> &Arc<ResolvedClass> {
        &self.class
    }

    /// The name of the class this instance was constructed from.
    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set a field value, creating the field if it does not exist.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Iterate over the names of the fields currently set.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Call a method by unqualified name.
    ///
    /// Resolves to the most-derived override in the bound method table.
    pub fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let class = Arc::clone(&self.class);
        let Some(body) = class.method(method) else {
            return Err(RuntimeError::UnknownMethod {
                class: class.name().to_string(),
                method: method.to_string(),
            });
        };
        body.call(self, args)
    }

    /// Call a specific ancestor's implementation of a method.
    ///
    /// Resolves against the qualified aliases fixed when the instance's
    /// class was composed, so the named base's body runs even when the
    /// instance's own class overrides the method.
    pub fn call_qualified(
        &mut self,
        base: &str,
        method: &str,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        let class = Arc::clone(&self.class);
        let Some(body) = class.qualified_method(base, method) else {
            return Err(RuntimeError::UnknownQualifiedMethod {
                base: base.to_string(),
                method: method.to_string(),
            });
        };
        body.call(self, args)
    }

    /// Run the composed destructor chain (base bodies first, own last).
    ///
    /// When the chain runs is the caller's business; nothing is torn down
    /// automatically on drop.
    pub fn destruct(&mut self) -> Result<(), RuntimeError> {
        let class = Arc::clone(&self.class);
        for body in class.destructor_chain() {
            body.call(self, &[])?;
        }
        Ok(())
    }
}
