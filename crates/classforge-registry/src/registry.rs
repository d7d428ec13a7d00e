//! ClassRegistry - declaration-order class composition.
//!
//! This module provides [`ClassRegistry`], the central storage for all
//! composed class types. Registration parses a declaration string, merges
//! the declared bases' method tables (left-to-right, last-wins), records
//! qualified super-call aliases, flattens the constructor and destructor
//! chains, and stores the resulting [`ResolvedClass`] under the class name.
//!
//! # Merge Model
//!
//! - **Methods**: each base's table is copied in declaration order, so a
//!   name defined by several bases resolves to the rightmost base's body.
//!   The class's own methods are overlaid last and always win.
//! - **Qualified aliases**: every copied method also stays reachable under
//!   `(base, method)`, and each base's own aliases are inherited, so
//!   super-calls keep working across more than one level of derivation.
//! - **Lifecycle chains**: a class's constructor chain is every base's
//!   chain in declaration order followed by its own `construct` body;
//!   destructors compose the same way. Chains are flattened at
//!   registration time, never re-resolved at instantiation.
//!
//! # Thread Safety
//!
//! `ClassRegistry` is **not thread-safe** by design. In the typical usage
//! pattern:
//!
//! - **Registration phase**: the registry is populated single-threaded at
//!   application bootstrap, bases before derived classes.
//!
//! - **Use phase**: afterwards the registry is effectively read-only and
//!   only serves instantiation lookups. If multi-threaded access is
//!   needed, the caller must wrap the registry in appropriate
//!   synchronization (e.g., `Arc<RwLock<_>>`); all stored bodies are
//!   `Send + Sync`, so that wrapping is sound.
//!
//! # Example
//!
//! ```
//! use classforge_registry::ClassRegistry;
//! use classforge_core::{Instance, MethodTable, Value};
//!
//! let mut registry = ClassRegistry::new();
//! registry.declare_class(
//!     "Counter",
//!     MethodTable::new().construct(|this: &mut Instance, _args: &[Value]| {
//!         this.set("count", 0i64);
//!         Ok(Value::Null)
//!     }),
//! )?;
//!
//! let counter = registry.instantiate("Counter", &[])?;
//! assert_eq!(counter.get("count"), Some(&Value::Int(0)));
//! # Ok::<(), classforge_core::ClassError>(())
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;

use classforge_core::{
    ClassDescriptor, Instance, MethodFn, MethodTable, QualifiedName, RegistrationError,
    ResolvedClass, RuntimeError, Value, CONSTRUCT,
};

use crate::declaration::Declaration;

/// Central storage for composed class types.
///
/// Entries are only ever added or overwritten (last-registration-wins),
/// never removed; the registry lives as long as the process needs classes.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: FxHashMap<String, Arc<ResolvedClass>>,
}

impl ClassRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Declare a class from a declaration string and a method table.
    ///
    /// The declaration is `"Name"` or `"Name < Base1, Base2, ..."`. Every
    /// named base must already be registered. On success the composed type
    /// is stored under the class name, unconditionally replacing any
    /// previous entry; instances constructed from the previous entry keep
    /// the table they were bound to. On error the registry is left
    /// unchanged for that name.
    pub fn declare_class(
        &mut self,
        decl: &str,
        table: MethodTable,
    ) -> Result<Arc<ResolvedClass>, RegistrationError> {
        let (name, bases) = Declaration::parse(decl)?.into_parts();
        let descriptor = ClassDescriptor::new(name, bases, table);
        let resolved = Arc::new(self.compose(&descriptor)?);
        self.classes
            .insert(resolved.name().to_string(), Arc::clone(&resolved));
        Ok(resolved)
    }

    /// Register an already-parsed descriptor.
    ///
    /// Same contract as [`declare_class`](Self::declare_class) minus the
    /// string parsing.
    pub fn register(
        &mut self,
        descriptor: &ClassDescriptor,
    ) -> Result<Arc<ResolvedClass>, RegistrationError> {
        let resolved = Arc::new(self.compose(descriptor)?);
        self.classes
            .insert(resolved.name().to_string(), Arc::clone(&resolved));
        Ok(resolved)
    }

    /// Compose a descriptor against the current registry contents.
    fn compose(&self, descriptor: &ClassDescriptor) -> Result<ResolvedClass, RegistrationError> {
        let mut methods: FxHashMap<String, MethodFn> = FxHashMap::default();
        let mut qualified: FxHashMap<QualifiedName, MethodFn> = FxHashMap::default();
        let mut constructors: Vec<MethodFn> = Vec::new();
        let mut destructors: Vec<MethodFn> = Vec::new();

        for base_name in descriptor.base_names() {
            let base = self.classes.get(base_name).ok_or_else(|| {
                RegistrationError::UnknownBaseClass {
                    class: descriptor.name().to_string(),
                    base: base_name.clone(),
                }
            })?;

            // Inherited aliases first, so grandparent super-calls survive.
            for (key, body) in base.qualified_methods() {
                qualified.insert(key.clone(), body.clone());
            }

            for (method_name, body) in base.methods() {
                methods.insert(method_name.to_string(), body.clone());
                qualified.insert(QualifiedName::new(base_name, method_name), body.clone());
            }

            // A base with a constructor is also callable explicitly, as
            // `Base.construct(...)`, bound to its full chain.
            if !base.constructor_chain().is_empty() {
                qualified.insert(
                    QualifiedName::new(base_name, CONSTRUCT),
                    MethodFn::chain(base.constructor_chain().to_vec()),
                );
            }

            constructors.extend_from_slice(base.constructor_chain());
            destructors.extend_from_slice(base.destructor_chain());
        }

        // Own definitions always win over inherited ones.
        for (method_name, body) in descriptor.table().methods() {
            methods.insert(method_name.clone(), body.clone());
        }
        if let Some(body) = descriptor.table().constructor() {
            constructors.push(body.clone());
        }
        if let Some(body) = descriptor.table().destructor() {
            destructors.push(body.clone());
        }

        Ok(ResolvedClass::new(
            descriptor.name(),
            descriptor.base_names().to_vec(),
            methods,
            qualified,
            constructors,
            destructors,
        ))
    }

    // ==========================================================================
    // Instantiation
    // ==========================================================================

    /// Construct an instance of a registered class.
    ///
    /// Fails with [`RuntimeError::UnknownClass`] if the name was never
    /// registered; constructor failures surface as
    /// [`RuntimeError::ConstructionFailed`].
    pub fn instantiate(&self, name: &str, args: &[Value]) -> Result<Instance, RuntimeError> {
        let class = self
            .classes
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownClass {
                name: name.to_string(),
            })?;
        ResolvedClass::instantiate(class, args)
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get a resolved class by name.
    pub fn get(&self, name: &str) -> Option<&Arc<ResolvedClass>> {
        self.classes.get(name)
    }

    /// Check if a class name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over the registered class names.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}
