//! Store types for page-owned gallery state
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod gallery;

pub use gallery::*;
