//! Error types for class composition and dispatch.
//!
//! Two phase-specific enums cover the two operations callers can invoke:
//!
//! ```text
//! ClassError (top-level wrapper)
//! ├── RegistrationError - declaration parsing and base resolution errors
//! └── RuntimeError      - instantiation and method dispatch errors
//! ```
//!
//! Each phase-specific type can be handled directly for fine-grained
//! recovery, or converted to [`ClassError`] for unified handling. Every
//! error is terminal for the operation that raised it (the registration or
//! instantiation aborts with no partial state) but recoverable by the
//! caller.

use thiserror::Error;

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while registering a class declaration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// The declaration string could not be parsed.
    #[error("malformed class declaration '{decl}': {detail}")]
    MalformedDeclaration {
        /// The declaration string as supplied.
        decl: String,
        /// What was wrong with it.
        detail: String,
    },

    /// A declared base class has not been registered yet.
    ///
    /// Bases must be declared before derived classes; forward references
    /// are an error, not a deferred lookup.
    #[error("unknown base class '{base}' in declaration of '{class}'")]
    UnknownBaseClass {
        /// The class being declared.
        class: String,
        /// The base name that failed to resolve.
        base: String,
    },
}

// ============================================================================
// Runtime Errors
// ============================================================================

/// Errors raised during instantiation and method dispatch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Instantiation of a name that was never registered.
    #[error("unknown class: {name}")]
    UnknownClass {
        /// The class name that wasn't found.
        name: String,
    },

    /// Dispatch to a method name absent from the bound method table.
    #[error("unknown method '{method}' on class '{class}'")]
    UnknownMethod {
        /// The class the call was made on.
        class: String,
        /// The method name that wasn't found.
        method: String,
    },

    /// Qualified super-call naming a base that never contributed the method.
    #[error("unknown qualified method '{base}.{method}'")]
    UnknownQualifiedMethod {
        /// The base class named in the call.
        base: String,
        /// The method name that wasn't found.
        method: String,
    },

    /// A constructor body failed during instantiation.
    ///
    /// Wraps the original cause together with the class name and argument
    /// count for diagnostics.
    #[error("construction of '{class}' with {arg_count} argument(s) failed: {source}")]
    ConstructionFailed {
        /// The class being instantiated.
        class: String,
        /// How many positional arguments were supplied.
        arg_count: usize,
        /// The error raised by the constructor body.
        #[source]
        source: Box<RuntimeError>,
    },

    /// A generic failure raised by a method body.
    #[error("{message}")]
    Method {
        /// The error message.
        message: String,
    },
}

impl RuntimeError {
    /// Build a generic method-body failure.
    pub fn method(message: impl Into<String>) -> Self {
        RuntimeError::Method {
            message: message.into(),
        }
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// The unified error type for all composition operations.
///
/// Wraps both phase-specific error types; each variant uses `#[from]` so
/// the `?` operator converts automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassError {
    /// A registration error.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// A runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ClassError {
    /// Check if this is a registration error.
    pub fn is_registration(&self) -> bool {
        matches!(self, ClassError::Registration(_))
    }

    /// Check if this is a runtime error.
    pub fn is_runtime(&self) -> bool {
        matches!(self, ClassError::Runtime(_))
    }
}
