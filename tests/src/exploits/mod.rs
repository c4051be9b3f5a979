//! # Exploit Simulations
//!
//! Attacks a hostile client could mount against the verifier. Every test
//! asserts the attack is rejected with the expected error kind and never
//! panics.

pub mod tampering;
