//! # Concurrency
//!
//! Challenges are immutable and the service holds no mutable state, so
//! both can be shared across threads freely.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use crt_challenge::{Challenge, ChallengeService};

    use crate::{init_tracing, sample_challenge, test_config, TEST_SECRET};

    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    #[test]
    fn test_shared_challenge_reads() {
        let challenge = Arc::new(sample_challenge());
        let expected = challenge.serialize(TEST_SECRET).unwrap();

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let challenge = Arc::clone(&challenge);
                thread::spawn(move || {
                    (0..PER_THREAD)
                        .map(|_| challenge.serialize(TEST_SECRET).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for wire in handle.join().unwrap() {
                assert_eq!(wire, expected);
            }
        }
    }

    #[test]
    fn test_shared_service_issue_and_verify() {
        init_tracing();
        let service = Arc::new(ChallengeService::new(test_config()).unwrap());

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    let user = format!("user-{}", t);
                    (0..PER_THREAD)
                        .map(|_| {
                            let issued = service.issue(&user, &[t as u8; 8]).unwrap();
                            let verified = service.verify(&issued.wire).unwrap();
                            assert_eq!(verified.user_name(), user);
                            verified.unique_data()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut nonces = HashSet::new();
        for handle in handles {
            for nonce in handle.join().unwrap() {
                assert!(nonces.insert(nonce), "duplicate unique_data issued");
            }
        }
        assert_eq!(nonces.len(), THREADS * PER_THREAD);
    }

    #[test]
    fn test_challenge_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Challenge>();
        assert_send_sync::<ChallengeService>();
    }
}
