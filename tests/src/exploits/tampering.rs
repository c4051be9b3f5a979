//! # Tampering Attacks
//!
//! A client holds a genuine challenge and tries to alter it (extend the
//! window, swap the user, replace the key fingerprint) without knowing the
//! server secret.

#[cfg(test)]
mod tests {
    use crt_challenge::{Challenge, ChallengeError, WireWriter, TAG_LEN};

    use crate::{sample_challenge, TEST_SECRET, TEST_SERVER};

    /// Encoded size of the bin8-framed tag at the end of every message.
    const FRAMED_TAG_LEN: usize = TAG_LEN + 2;

    fn genuine() -> Vec<u8> {
        sample_challenge().serialize(TEST_SECRET).unwrap()
    }

    fn signed_prefix(wire: &[u8]) -> &[u8] {
        &wire[..wire.len() - FRAMED_TAG_LEN]
    }

    fn with_tag(prefix: &[u8], tag: &[u8]) -> Vec<u8> {
        let mut writer = WireWriter::new();
        writer.write_bytes(tag).unwrap();
        let mut wire = prefix.to_vec();
        wire.extend_from_slice(writer.as_bytes());
        wire
    }

    #[test]
    fn test_every_bit_flip_is_rejected() {
        let wire = genuine();
        for index in 0..wire.len() {
            for bit in 0..8 {
                let mut forged = wire.clone();
                forged[index] ^= 1 << bit;
                assert!(
                    Challenge::deserialize_authenticated(&forged, TEST_SECRET).is_err(),
                    "flip of bit {} at byte {} accepted",
                    bit,
                    index
                );
            }
        }
    }

    #[test]
    fn test_reencoded_fields_with_old_tag_rejected() {
        let wire = genuine();
        let old_tag = &wire[wire.len() - TAG_LEN..];

        let stretched = Challenge::new(
            &[0x5a; 20],
            0,
            u32::MAX,
            &[1, 2, 3, 4, 5, 6],
            TEST_SERVER,
            "root",
        )
        .unwrap()
        .serialize(b"attacker-guess")
        .unwrap();

        let spliced = with_tag(signed_prefix(&stretched), old_tag);
        assert_eq!(
            Challenge::deserialize_authenticated(&spliced, TEST_SECRET),
            Err(ChallengeError::AuthenticationFailure)
        );
    }

    #[test]
    fn test_tag_from_other_challenge_rejected() {
        let a = genuine();
        let b = Challenge::new(&[0x11; 20], 10, 20, &[9; 6], TEST_SERVER, "bob")
            .unwrap()
            .serialize(TEST_SECRET)
            .unwrap();

        let spliced = with_tag(signed_prefix(&a), &b[b.len() - TAG_LEN..]);
        assert_eq!(
            Challenge::deserialize_authenticated(&spliced, TEST_SECRET),
            Err(ChallengeError::AuthenticationFailure)
        );
    }

    #[test]
    fn test_truncated_and_extended_tags_rejected() {
        let wire = genuine();
        let tag = &wire[wire.len() - TAG_LEN..];
        let prefix = signed_prefix(&wire);

        let short = with_tag(prefix, &tag[..TAG_LEN - 1]);
        assert_eq!(
            Challenge::deserialize_authenticated(&short, TEST_SECRET),
            Err(ChallengeError::AuthenticationFailure)
        );

        let mut long_tag = tag.to_vec();
        long_tag.push(0);
        let long = with_tag(prefix, &long_tag);
        assert_eq!(
            Challenge::deserialize_authenticated(&long, TEST_SECRET),
            Err(ChallengeError::AuthenticationFailure)
        );

        let empty = with_tag(prefix, &[]);
        assert_eq!(
            Challenge::deserialize_authenticated(&empty, TEST_SECRET),
            Err(ChallengeError::AuthenticationFailure)
        );
    }

    #[test]
    fn test_forged_header_rejected_before_interpretation() {
        let wire = genuine();
        let mut forged = wire.clone();
        forged[0] = 2;
        assert_eq!(
            Challenge::deserialize_authenticated(&forged, TEST_SECRET),
            Err(ChallengeError::AuthenticationFailure)
        );
    }

    #[test]
    fn test_unauthenticated_decode_trusts_forgeries() {
        // Only safe for messages authenticated by other means.
        let forged = Challenge::new(&[0; 20], 0, u32::MAX, &[0; 6], TEST_SERVER, "root")
            .unwrap()
            .serialize(b"attacker-guess")
            .unwrap();

        assert!(Challenge::deserialize(&forged).is_ok());
        assert_eq!(
            Challenge::deserialize_authenticated(&forged, TEST_SECRET),
            Err(ChallengeError::AuthenticationFailure)
        );
    }

    #[test]
    fn test_empty_secret_does_not_verify_real_tags() {
        assert_eq!(
            Challenge::deserialize_authenticated(&genuine(), b""),
            Err(ChallengeError::AuthenticationFailure)
        );
    }
}
