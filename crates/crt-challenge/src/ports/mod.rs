//! Ports Layer
//!
//! Driven ports the challenge code depends on. Adapters in `adapters/`
//! provide the production and test implementations.

pub mod outbound;

pub use outbound::{NonceSource, TimeSource};
