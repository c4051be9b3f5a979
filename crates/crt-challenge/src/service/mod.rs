//! Service Layer
//!
//! Issues challenges and verifies the challenges clients hand back.

mod challenge_service;

pub use challenge_service::{ChallengeService, IssuedChallenge};
