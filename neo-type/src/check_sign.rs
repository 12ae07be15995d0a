// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use neo_crypto::secp256r1::{PublicKey, PUBLIC_COMPRESSED_SIZE};
use serde::{Deserialize, Serialize};

// 39 bytes = 1-byte push + 33-bytes key + 1-byte syscall + 4-bytes id
pub const COMPACT_CHECK_SIG_SIZE: usize = 1 + PUBLIC_COMPRESSED_SIZE + 1 + 4;

pub const PUSH_BYTES33: u8 = 0x21;
pub const COMPACT_SYSCALL: u8 = 0x68;

/// Little-endian syscall id of the signature check in the compact template.
pub const COMPACT_CHECK_SIG_ID: [u8; 4] = [0xdb, 0xb4, 0x7f, 0xac];

// 40 bytes = 1-byte PUSHDATA1 + 1-byte length + 33-bytes key + 1-byte SYSCALL + 4-bytes suffix
pub const INTEROP_CHECK_SIG_SIZE: usize = 1 + 1 + PUBLIC_COMPRESSED_SIZE + 1 + 4;

pub const PUSH_DATA1: u8 = 0x0c;
pub const INTEROP_SYSCALL: u8 = 0x41;

/// `System.Crypto.CheckSig` interop hash, little-endian.
pub const CHECK_SIG_HASH_SUFFIX: [u8; 4] = [0x56, 0xe7, 0xb3, 0x27];

/// Template of the single-signature verification script.
///
/// Both templates are fixed byte layouts; the syscall identifiers are protocol
/// constants and are never derived at runtime.
#[derive(Debug, Default, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSigLayout {
    /// `0x21 ‖ key ‖ 0x68 ‖ DB B4 7F AC`
    #[default]
    Compact,

    /// `0x0C 0x21 ‖ key ‖ 0x41 ‖ 56 E7 B3 27`
    Interop,
}

impl CheckSigLayout {
    #[inline]
    pub const fn script_size(self) -> usize {
        match self {
            Self::Compact => COMPACT_CHECK_SIG_SIZE,
            Self::Interop => INTEROP_CHECK_SIG_SIZE,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Interop => "interop",
        }
    }
}

impl core::fmt::Display for CheckSigLayout {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-signature verification script.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct CheckSign {
    layout: CheckSigLayout,
    script: Vec<u8>,
}

impl CheckSign {
    #[inline]
    pub fn layout(&self) -> CheckSigLayout {
        self.layout
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.script.as_slice()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl AsRef<[u8]> for CheckSign {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.script
    }
}

impl From<CheckSign> for Vec<u8> {
    #[inline]
    fn from(value: CheckSign) -> Self {
        value.script
    }
}

pub trait ToCheckSign {
    #[inline]
    fn to_check_sign(&self) -> CheckSign {
        self.to_check_sign_with(CheckSigLayout::Compact)
    }

    fn to_check_sign_with(&self, layout: CheckSigLayout) -> CheckSign;
}

impl ToCheckSign for PublicKey {
    fn to_check_sign_with(&self, layout: CheckSigLayout) -> CheckSign {
        const SIZE: usize = PUBLIC_COMPRESSED_SIZE;

        let key = self.to_compressed();
        let mut script = Vec::with_capacity(layout.script_size());
        match layout {
            CheckSigLayout::Compact => {
                script.push(PUSH_BYTES33);
                script.extend_from_slice(&key);
                script.push(COMPACT_SYSCALL);
                script.extend_from_slice(&COMPACT_CHECK_SIG_ID);
            }
            CheckSigLayout::Interop => {
                script.push(PUSH_DATA1);
                script.push(SIZE as u8);
                script.extend_from_slice(&key);
                script.push(INTEROP_SYSCALL);
                script.extend_from_slice(&CHECK_SIG_HASH_SUFFIX);
            }
        }

        CheckSign { layout, script }
    }
}
