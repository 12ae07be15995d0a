// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use core::fmt::{Display, Formatter};

use neo_base::encoding::{FromBase58Check, FromBase58CheckError, ToBase58Check, CHECKSUM_SIZE};
use neo_crypto::secp256r1::PublicKey;

use crate::{
    CheckSign, ScriptHash, ToCheckSign, ToScriptHash, ADDRESS_NEO3, ADDRESS_PAYLOAD_SIZE,
    SCRIPT_HASH_SIZE,
};

/// A validated Neo N3 address.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Address {
    script_hash: ScriptHash,
    base58check: String,
}

impl Address {
    #[inline]
    pub fn version(&self) -> u8 {
        ADDRESS_NEO3
    }

    #[inline]
    pub fn script_hash(&self) -> ScriptHash {
        self.script_hash
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.base58check.as_str()
    }
}

impl AsRef<str> for Address {
    #[inline]
    fn as_ref(&self) -> &str {
        self.base58check.as_str()
    }
}

impl Display for Address {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.base58check)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum ToAddressError {
    #[error("to-address: malformed base58, invalid character '{0}'")]
    MalformedBase58(char),

    /// Decoded byte count, checksum included.
    #[error("to-address: invalid decoded length {0}")]
    InvalidLength(usize),

    #[error("to-address: invalid checksum")]
    InvalidChecksum,

    #[error("to-address: invalid version '0x{0:02x}'")]
    InvalidVersion(u8),
}

impl TryFrom<&str> for Address {
    type Error = ToAddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use FromBase58CheckError as Error;

        let check = Vec::from_base58_check(value, None, None).map_err(|err| match err {
            Error::InvalidChar(ch) => ToAddressError::MalformedBase58(ch),
            Error::InvalidChecksum => ToAddressError::InvalidChecksum,
            Error::InvalidLength(len) => ToAddressError::InvalidLength(len),
            Error::InvalidPrefix(_, got) => ToAddressError::InvalidVersion(got),
            Error::InvalidSuffix(..) => ToAddressError::InvalidChecksum,
        })?;

        // the checksum was stripped above
        if check.len() + CHECKSUM_SIZE != ADDRESS_PAYLOAD_SIZE {
            return Err(Self::Error::InvalidLength(check.len() + CHECKSUM_SIZE));
        }

        if check[0] != ADDRESS_NEO3 {
            return Err(Self::Error::InvalidVersion(check[0]));
        }

        let mut hash = [0u8; SCRIPT_HASH_SIZE];
        hash.copy_from_slice(&check[1..]);

        Ok(Self { script_hash: ScriptHash(hash), base58check: value.into() })
    }
}

impl core::str::FromStr for Address {
    type Err = ToAddressError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

pub trait ToNeo3Address {
    fn to_neo3_address(&self) -> Address;
}

impl ToNeo3Address for ScriptHash {
    #[inline]
    fn to_neo3_address(&self) -> Address {
        let base58check = self.0.to_base58_check(Some(ADDRESS_NEO3), None);
        Address { script_hash: *self, base58check }
    }
}

impl ToNeo3Address for CheckSign {
    #[inline]
    fn to_neo3_address(&self) -> Address {
        self.to_script_hash().to_neo3_address()
    }
}

impl ToNeo3Address for PublicKey {
    /// Address of the compact single-signature script.
    #[inline]
    fn to_neo3_address(&self) -> Address {
        self.to_check_sign().to_neo3_address()
    }
}
