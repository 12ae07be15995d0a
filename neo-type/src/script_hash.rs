// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use core::fmt::{Display, Formatter};

use neo_base::{encoding::ToRevHex, hash::hash160};
use neo_crypto::secp256r1::PublicKey;

use crate::{Address, CheckSign, ToAddressError, ToCheckSign, SCRIPT_HASH_SIZE};

/// RIPEMD-160 over SHA-256 of a verification script, in hash output order.
#[derive(Debug, Default, Hash, Copy, Clone, Eq, PartialEq)]
pub struct ScriptHash(pub [u8; SCRIPT_HASH_SIZE]);

impl ScriptHash {
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SCRIPT_HASH_SIZE] {
        &self.0
    }

    /// Decodes a Neo N3 address into the script hash it encodes.
    #[inline]
    pub fn from_neo3_address(address: &str) -> Result<Self, ToAddressError> {
        Address::try_from(address).map(|addr| addr.script_hash())
    }
}

impl AsRef<[u8; SCRIPT_HASH_SIZE]> for ScriptHash {
    #[inline]
    fn as_ref(&self) -> &[u8; SCRIPT_HASH_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for ScriptHash {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SCRIPT_HASH_SIZE]> for ScriptHash {
    #[inline]
    fn from(value: [u8; SCRIPT_HASH_SIZE]) -> Self {
        Self(value)
    }
}

impl Display for ScriptHash {
    /// `0x`-prefixed and byte-reversed, as Neo prints `UInt160`.
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("0x")?;
        f.write_str(&self.0.to_rev_hex())
    }
}

pub trait ToScriptHash {
    fn to_script_hash(&self) -> ScriptHash;
}

impl ToScriptHash for [u8] {
    #[inline]
    fn to_script_hash(&self) -> ScriptHash {
        ScriptHash(hash160(self))
    }
}

impl ToScriptHash for CheckSign {
    #[inline]
    fn to_script_hash(&self) -> ScriptHash {
        self.as_bytes().to_script_hash()
    }
}

impl ToScriptHash for PublicKey {
    /// Script hash of the compact single-signature script.
    #[inline]
    fn to_script_hash(&self) -> ScriptHash {
        self.to_check_sign().to_script_hash()
    }
}
