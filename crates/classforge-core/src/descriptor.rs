//! Declarative class records supplied at registration time.
//!
//! A [`MethodTable`] carries the method bodies a caller supplies for one
//! class, with `construct` and `destruct` as reserved slots. Joined with a
//! parsed declaration it forms a [`ClassDescriptor`], the input to
//! composition.

use crate::method::{ClassCallable, MethodFn};

/// Reserved method-table key for the constructor body.
pub const CONSTRUCT: &str = "construct";

/// Reserved method-table key for the destructor body.
pub const DESTRUCT: &str = "destruct";

/// The method implementations supplied for one class declaration.
///
/// Built with chained calls; later entries for the same method name replace
/// earlier ones. The reserved names [`CONSTRUCT`] and [`DESTRUCT`] are
/// routed to the constructor/destructor slots even when passed to
/// [`MethodTable::method`], so the table behaves like the source-style
/// single map with reserved keys.
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    methods: Vec<(String, MethodFn)>,
    constructor: Option<MethodFn>,
    destructor: Option<MethodFn>,
}

impl MethodTable {
    /// Create an empty method table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named method body.
    pub fn method(mut self, name: impl Into<String>, f: impl ClassCallable + Send + Sync + 'static) -> Self {
        let name = name.into();
        let body = MethodFn::new(f);
        match name.as_str() {
            CONSTRUCT => self.constructor = Some(body),
            DESTRUCT => self.destructor = Some(body),
            _ => self.methods.push((name, body)),
        }
        self
    }

    /// Set the constructor body.
    pub fn construct(mut self, f: impl ClassCallable + Send + Sync + 'static) -> Self {
        self.constructor = Some(MethodFn::new(f));
        self
    }

    /// Set the destructor body.
    pub fn destruct(mut self, f: impl ClassCallable + Send + Sync + 'static) -> Self {
        self.destructor = Some(MethodFn::new(f));
        self
    }

    /// The named method bodies, in insertion order.
    pub fn methods(&self) -> &[(String, MethodFn)] {
        &self.methods
    }

    /// The constructor body, if one was supplied.
    pub fn constructor(&self) -> Option<&MethodFn> {
        self.constructor.as_ref()
    }

    /// The destructor body, if one was supplied.
    pub fn destructor(&self) -> Option<&MethodFn> {
        self.destructor.as_ref()
    }
}

/// A parsed declaration joined with its method table.
///
/// This is the composition engine's input: the class name, its declared
/// bases in declaration order, and the bodies it defines. An empty base
/// list means the class inherits nothing.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    name: String,
    base_names: Vec<String>,
    table: MethodTable,
}

impl ClassDescriptor {
    /// Create a descriptor from already-parsed parts.
    pub fn new(name: impl Into<String>, base_names: Vec<String>, table: MethodTable) -> Self {
        Self {
            name: name.into(),
            base_names,
            table,
        }
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared base names, left to right.
    pub fn base_names(&self) -> &[String] {
        &self.base_names
    }

    /// The supplied method table.
    pub fn table(&self) -> &MethodTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use crate::value::Value;

    #[test]
    fn method_table_collects_methods_in_order() {
        let table = MethodTable::new()
            .method("first", |_this: &mut Instance, _args: &[Value]| Ok(Value::Int(1)))
            .method("second", |_this: &mut Instance, _args: &[Value]| Ok(Value::Int(2)));

        let names: Vec<&str> = table.methods().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(table.constructor().is_none());
        assert!(table.destructor().is_none());
    }

    #[test]
    fn reserved_names_route_to_lifecycle_slots() {
        let table = MethodTable::new()
            .method(CONSTRUCT, |_this: &mut Instance, _args: &[Value]| Ok(Value::Null))
            .method(DESTRUCT, |_this: &mut Instance, _args: &[Value]| Ok(Value::Null));

        assert!(table.methods().is_empty());
        assert!(table.constructor().is_some());
        assert!(table.destructor().is_some());
    }

    #[test]
    fn construct_and_destruct_builders() {
        let table = MethodTable::new()
            .construct(|_this: &mut Instance, _args: &[Value]| Ok(Value::Null))
            .destruct(|_this: &mut Instance, _args: &[Value]| Ok(Value::Null));

        assert!(table.constructor().is_some());
        assert!(table.destructor().is_some());
    }

    #[test]
    fn descriptor_exposes_parts() {
        let descriptor = ClassDescriptor::new(
            "Sprite",
            vec!["Drawable".to_string(), "Updatable".to_string()],
            MethodTable::new(),
        );
        assert_eq!(descriptor.name(), "Sprite");
        assert_eq!(descriptor.base_names(), ["Drawable", "Updatable"]);
        assert!(descriptor.table().methods().is_empty());
    }
}
