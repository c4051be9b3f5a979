//! # Integration Tests
//!
//! End-to-end flows through `ChallengeService` using only the public API.

pub mod concurrency;
