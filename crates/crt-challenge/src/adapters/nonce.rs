use rand::RngCore;

use crate::domain::UNIQUE_DATA_LEN;
use crate::ports::NonceSource;

/// Nonce source backed by the operating system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn unique_data(&self) -> [u8; UNIQUE_DATA_LEN] {
        let mut data = [0u8; UNIQUE_DATA_LEN];
        rand::rngs::OsRng.fill_bytes(&mut data);
        data
    }
}

/// Always returns the same unique data. Test use only.
#[derive(Debug, Clone, Copy)]
pub struct FixedNonceSource(pub [u8; UNIQUE_DATA_LEN]);

impl NonceSource for FixedNonceSource {
    fn unique_data(&self) -> [u8; UNIQUE_DATA_LEN] {
        self.0
    }
}
