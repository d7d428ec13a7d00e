//! Core types for the classforge composition engine.
//!
//! This crate holds the data model shared by the registry and by calling
//! code: dynamic [`Value`]s, type-erased method bodies ([`MethodFn`]),
//! declarative class records ([`ClassDescriptor`], [`MethodTable`]),
//! composed types ([`ResolvedClass`]), constructed [`Instance`]s, and the
//! error taxonomy.
//!
//! The composition algorithm itself lives in `classforge-registry`; this
//! crate only defines what it operates on.

mod descriptor;
mod error;
mod instance;
mod method;
mod resolved;
mod value;

pub use descriptor::{ClassDescriptor, MethodTable, CONSTRUCT, DESTRUCT};
pub use error::{ClassError, RegistrationError, RuntimeError};
pub use instance::Instance;
pub use method::{ClassCallable, MethodFn};
pub use resolved::{QualifiedName, ResolvedClass};
pub use value::Value;
