//! classforge - declaration-order class composition.
//!
//! Classes are declared at runtime from a textual declaration
//! (`"Name"` or `"Name < Base1, Base2"`) plus a table of method bodies,
//! and composed into callable types: instances expose the union of all
//! base methods (left-to-right, last-wins on collisions, own definitions
//! always winning), constructors run every base's body in declaration
//! order before the class's own, and qualified super-calls
//! (`Base.method(...)`) resolve to the specific ancestor's implementation
//! recorded at registration time.
//!
//! # Example
//!
//! ```
//! use classforge::prelude::*;
//!
//! let mut registry = ClassRegistry::new();
//!
//! registry.declare_class(
//!     "AClass",
//!     MethodTable::new().construct(|this: &mut Instance, args: &[Value]| {
//!         this.set("a", args.first().cloned().unwrap_or(Value::str("")));
//!         Ok(Value::Null)
//!     }),
//! )?;
//!
//! registry.declare_class(
//!     "BClass < AClass",
//!     MethodTable::new().construct(|this: &mut Instance, args: &[Value]| {
//!         this.set("b", args.get(1).cloned().unwrap_or(Value::str("")));
//!         Ok(Value::Null)
//!     }),
//! )?;
//!
//! let b = registry.instantiate("BClass", &[Value::str("x"), Value::str("y")])?;
//! assert_eq!(b.get("a"), Some(&Value::str("x")));
//! assert_eq!(b.get("b"), Some(&Value::str("y")));
//! # Ok::<(), classforge::ClassError>(())
//! ```

pub use classforge_core::{
    ClassCallable, ClassDescriptor, ClassError, Instance, MethodFn, MethodTable, QualifiedName,
    RegistrationError, ResolvedClass, RuntimeError, Value, CONSTRUCT, DESTRUCT,
};
pub use classforge_registry::{ClassRegistry, Declaration};

/// Convenience re-exports for callers that want everything in scope.
pub mod prelude {
    pub use crate::{
        ClassError, ClassRegistry, Instance, MethodFn, MethodTable, RegistrationError,
        RuntimeError, Value,
    };
}
