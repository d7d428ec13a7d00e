//! Classforge registry crate.
//!
//! Declaration parsing ([`Declaration`]) and the process-wide
//! [`ClassRegistry`] that composes declared classes into ready-to-
//! instantiate types. The data model lives in `classforge-core`.

mod declaration;
mod registry;

pub use declaration::Declaration;
pub use registry::ClassRegistry;
