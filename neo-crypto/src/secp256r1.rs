// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::fmt::{self, Debug, Display, Formatter};

use neo_base::encoding::{ToHex, WifDecode, WifDecodeError, WifEncode, WIF_VERSION};
use p256::{
    elliptic_curve::sec1::ToEncodedPoint, PublicKey as P256PublicKey, SecretKey as P256SecretKey,
};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

mod keypair;

pub use keypair::Keypair;

pub const KEY_SIZE: usize = 32;
pub const PUBLIC_COMPRESSED_SIZE: usize = 1 + KEY_SIZE;

const COMPRESSED_EVEN: u8 = 0x02;
const COMPRESSED_ODD: u8 = 0x03;
const UNCOMPRESSED: u8 = 0x04;

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
pub enum KeyError {
    #[error("secp256r1: private key is out of range [1, n-1]")]
    InvalidPrivateKey,

    #[error("secp256r1: invalid public key encoding")]
    InvalidPublicKey,

    #[error("secp256r1: secure random source unavailable")]
    RandomSourceUnavailable,

    #[error("secp256r1: {0}")]
    Wif(#[from] WifDecodeError),
}

/// Compressed SEC1 form of the point `(x, y)`: `0x02` for even `y`, `0x03` for odd, then `x`.
///
/// Both coordinates are big-endian. The point is not checked to be on the curve.
#[inline]
pub fn compress_public_key(
    x: &[u8; KEY_SIZE],
    y: &[u8; KEY_SIZE],
) -> [u8; PUBLIC_COMPRESSED_SIZE] {
    let mut buf = [0u8; PUBLIC_COMPRESSED_SIZE];
    buf[0] = if y[KEY_SIZE - 1] & 0x01 == 0 { COMPRESSED_EVEN } else { COMPRESSED_ODD };
    buf[1..].copy_from_slice(x);
    buf
}

/// A secp256r1 scalar in `[1, n-1]`. Wiped from memory on drop.
#[derive(Clone)]
pub struct PrivateKey {
    key: P256SecretKey,
}

impl PrivateKey {
    pub fn from_be_bytes(bytes: &[u8; KEY_SIZE]) -> Result<Self, KeyError> {
        P256SecretKey::from_bytes(&(*bytes).into())
            .map(|key| Self { key })
            .map_err(|_| KeyError::InvalidPrivateKey)
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: &[u8; KEY_SIZE] = slice.try_into().map_err(|_| KeyError::InvalidPrivateKey)?;
        Self::from_be_bytes(bytes)
    }

    /// Parses a compressed-form WIF (`0x80 ‖ key ‖ 0x01`, Base58Check).
    pub fn from_wif(wif: &str) -> Result<Self, KeyError> {
        let wif = wif.wif_decode(WIF_VERSION, KEY_SIZE)?;
        Self::from_slice(wif.data())
    }

    #[inline]
    pub fn to_be_bytes(&self) -> Zeroizing<[u8; KEY_SIZE]> {
        Zeroizing::new(self.key.to_bytes().into())
    }

    #[inline]
    pub fn to_wif(&self) -> Zeroizing<String> {
        Zeroizing::new(self.to_be_bytes().wif_encode(WIF_VERSION))
    }

    /// 64 lowercase hex characters of the big-endian scalar.
    #[inline]
    pub fn to_hex_lower(&self) -> Zeroizing<String> {
        Zeroizing::new(self.to_be_bytes().as_slice().to_hex_lower())
    }

    #[inline]
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_p256(&self.key.public_key())
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_be_bytes().as_slice().ct_eq(other.to_be_bytes().as_slice()).into()
    }
}

impl PartialEq<[u8]> for PrivateKey {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.to_be_bytes().as_slice().ct_eq(other).into()
    }
}

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct PublicKey {
    gx: [u8; KEY_SIZE],
    gy: [u8; KEY_SIZE],
}

impl PublicKey {
    fn from_p256(public: &P256PublicKey) -> Self {
        // a p256 public key is never the identity, so this is always 0x04 ‖ x ‖ y
        let encoded = public.to_encoded_point(false);
        let bytes = encoded.as_bytes();

        let mut gx = [0u8; KEY_SIZE];
        let mut gy = [0u8; KEY_SIZE];
        gx.copy_from_slice(&bytes[1..1 + KEY_SIZE]);
        gy.copy_from_slice(&bytes[1 + KEY_SIZE..]);
        Self { gx, gy }
    }

    /// Accepts compressed (33 bytes) or uncompressed (65 bytes) SEC1 encodings of a curve point.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        // p256 also takes the identity and the compact form, neither is a Neo public key
        if !matches!(bytes.first(), Some(&(COMPRESSED_EVEN | COMPRESSED_ODD | UNCOMPRESSED))) {
            return Err(KeyError::InvalidPublicKey);
        }

        P256PublicKey::from_sec1_bytes(bytes)
            .map(|public| Self::from_p256(&public))
            .map_err(|_| KeyError::InvalidPublicKey)
    }

    #[inline]
    pub fn x(&self) -> &[u8; KEY_SIZE] {
        &self.gx
    }

    #[inline]
    pub fn y(&self) -> &[u8; KEY_SIZE] {
        &self.gy
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; PUBLIC_COMPRESSED_SIZE] {
        compress_public_key(&self.gx, &self.gy)
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &self.to_compressed().to_hex_lower())
            .finish()
    }
}

impl Display for PublicKey {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compressed().to_hex_lower())
    }
}
