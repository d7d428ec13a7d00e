//! Composed, ready-to-instantiate class types.
//!
//! A [`ResolvedClass`] is the output of composition: the merged method
//! table, the qualified super-call aliases, and the flattened constructor
//! and destructor chains. The registry stores resolved classes behind
//! `Arc`; every instance of a class shares the same resolved type.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::RuntimeError;
use crate::instance::Instance;
use crate::method::MethodFn;
use crate::value::Value;

/// Key for a qualified super-call alias.
///
/// Names both the contributing base class and the method, so an explicit
/// `Base.method(...)` call can resolve to that ancestor's implementation
/// rather than the most-derived override.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// The base class the implementation came from.
    pub base: String,
    /// The method name.
    pub method: String,
}

impl QualifiedName {
    /// Create a qualified name.
    pub fn new(base: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.base, self.method)
    }
}

/// A composed class type.
///
/// Instances hold an `Arc` to the resolved class they were constructed
/// from; re-registering the class name later never retargets them, because
/// the binding is captured at construction time.
#[derive(Debug)]
pub struct ResolvedClass {
    name: String,
    base_names: Vec<String>,
    methods: FxHashMap<String, MethodFn>,
    qualified: FxHashMap<QualifiedName, MethodFn>,
    constructors: Vec<MethodFn>,
    destructors: Vec<MethodFn>,
}

impl ResolvedClass {
    /// Create a resolved class from composed parts.
    ///
    /// Normally produced by the registry's composition step rather than
    /// built by hand.
    pub fn new(
        name: impl Into<String>,
        base_names: Vec<String>,
        methods: FxHashMap<String, MethodFn>,
        qualified: FxHashMap<QualifiedName, MethodFn>,
        constructors: Vec<MethodFn>,
        destructors: Vec<MethodFn>,
    ) -> Self {
        Self {
            name: name.into(),
            base_names,
            methods,
            qualified,
            constructors,
            destructors,
        }
    }

    /// Create a resolved class with no bases, methods, or lifecycle bodies.
    pub fn empty(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(
            name,
            Vec::new(),
            FxHashMap::default(),
            FxHashMap::default(),
            Vec::new(),
            Vec::new(),
        ))
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared base names, left to right.
    pub fn base_names(&self) -> &[String] {
        &self.base_names
    }

    /// Look up a method by unqualified name (most-derived override).
    pub fn method(&self, name: &str) -> Option<&MethodFn> {
        self.methods.get(name)
    }

    /// Check whether a method name exists in the merged table.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Iterate over the merged method table.
    pub fn methods(&self) -> impl Iterator<Item = (&str, &MethodFn)> {
        self.methods.iter().map(|(n, f)| (n.as_str(), f))
    }

    /// Look up a specific ancestor's implementation of a method.
    pub fn qualified_method(&self, base: &str, method: &str) -> Option<&MethodFn> {
        self.qualified
            .get(&QualifiedName::new(base, method))
    }

    /// Iterate over the qualified super-call aliases.
    pub fn qualified_methods(&self) -> impl Iterator<Item = (&QualifiedName, &MethodFn)> {
        self.qualified.iter()
    }

    /// The flattened constructor chain (base bodies first, own body last).
    pub fn constructor_chain(&self) -> &[MethodFn] {
        &self.constructors
    }

    /// The flattened destructor chain (base bodies first, own body last).
    pub fn destructor_chain(&self) -> &[MethodFn] {
        &self.destructors
    }

    /// Construct a new instance of this class.
    ///
    /// Runs every body in the constructor chain, in order, with the given
    /// positional arguments. Any constructor failure is wrapped as
    /// [`RuntimeError::ConstructionFailed`] with the class name and
    /// argument count attached.
    ///
    /// Takes the `Arc` rather than `&self` because the new instance
    /// captures a shared handle to its class.
    pub fn instantiate(class: &Arc<Self>, args: &[Value]) -> Result<Instance, RuntimeError> {
        let mut instance = Instance::new(Arc::clone(class));
        for body in &class.constructors {
            body.call(&mut instance, args)
                .map_err(|source| RuntimeError::ConstructionFailed {
                    class: class.name.clone(),
                    arg_count: args.len(),
                    source: Box::new(source),
                })?;
        }
        Ok(instance)
    }
}
