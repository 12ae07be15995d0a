// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use super::{KeyError, PrivateKey, PublicKey, KEY_SIZE};

// A draw lands outside [1, n-1] with probability below 2^-32, so running out
// of attempts means the source is broken rather than unlucky.
const MAX_SAMPLE_ATTEMPTS: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl Keypair {
    #[inline]
    pub fn from_private(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self { private_key, public_key }
    }

    /// Samples a private key uniformly from `[1, n-1]` by rejection sampling.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, KeyError> {
        let mut buf = Zeroizing::new([0u8; KEY_SIZE]);
        for attempt in 1..=MAX_SAMPLE_ATTEMPTS {
            rng.try_fill_bytes(buf.as_mut_slice())
                .map_err(|_| KeyError::RandomSourceUnavailable)?;

            if let Ok(private_key) = PrivateKey::from_be_bytes(&buf) {
                debug!(attempt, "secp256r1 private key sampled");
                return Ok(Self::from_private(private_key));
            }
        }

        Err(KeyError::RandomSourceUnavailable)
    }

    /// Generates a keypair from the operating system's secure random source.
    #[inline]
    pub fn random() -> Result<Self, KeyError> {
        Self::generate(&mut OsRng)
    }
}
