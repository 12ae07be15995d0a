// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use zeroize::Zeroizing;

use crate::encoding::base58::{
    FromBase58Check, FromBase58CheckError, ToBase58Check, CHECKSUM_SIZE,
};

/// Version byte of a Neo (and Bitcoin mainnet) WIF.
pub const WIF_VERSION: u8 = 0x80;

/// Trailing flag marking the key as used with a compressed public key.
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;

#[derive(Clone)]
pub struct Wif {
    version: u8,

    // data-bytes only, without version and compressed flag
    data: Zeroizing<Vec<u8>>,
}

impl Wif {
    #[inline]
    pub fn version(&self) -> u8 {
        self.version
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl core::fmt::Debug for Wif {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wif")
            .field("version", &self.version)
            .field("data", &"***")
            .finish()
    }
}

pub trait WifEncode {
    /// Always emits the compressed form: `version ‖ data ‖ 0x01`.
    fn wif_encode(&self, version: u8) -> String;
}

impl<T: AsRef<[u8]> + ?Sized> WifEncode for T {
    fn wif_encode(&self, version: u8) -> String {
        let data = self.as_ref();
        let mut buf = Zeroizing::new(Vec::with_capacity(1 + data.len() + 1));

        buf.push(version);
        buf.extend_from_slice(data);
        buf.push(WIF_COMPRESSED_FLAG);

        buf.to_base58_check(None, None)
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
pub enum WifDecodeError {
    #[error("wif-decode: malformed base58, invalid character '{0}'")]
    MalformedBase58(char),

    #[error("wif-decode: invalid checksum")]
    InvalidChecksum,

    /// Carries the decoded byte count, checksum included.
    #[error("wif-decode: invalid decoded length {0}")]
    InvalidLength(usize),

    #[error("wif-decode: invalid version byte '0x{0:02x}'")]
    InvalidVersionByte(u8),

    #[error("wif-decode: invalid compressed flag '0x{0:02x}'")]
    InvalidCompressionFlag(u8),
}

pub trait WifDecode {
    type Error;

    /// Decodes a compressed-form WIF carrying exactly `data_size` bytes of key data.
    fn wif_decode(&self, version: u8, data_size: usize) -> Result<Wif, Self::Error>;
}

impl<T: AsRef<str> + ?Sized> WifDecode for T {
    type Error = WifDecodeError;

    fn wif_decode(&self, version: u8, data_size: usize) -> Result<Wif, Self::Error> {
        use FromBase58CheckError as B58Error;

        let payload = Vec::from_base58_check(self.as_ref(), None, None)
            .map(Zeroizing::new)
            .map_err(|err| match err {
                B58Error::InvalidChar(ch) => Self::Error::MalformedBase58(ch),
                B58Error::InvalidChecksum => Self::Error::InvalidChecksum,
                B58Error::InvalidLength(len) => Self::Error::InvalidLength(len),
                B58Error::InvalidPrefix(_, got) => Self::Error::InvalidVersionByte(got),
                B58Error::InvalidSuffix(_, got) => Self::Error::InvalidCompressionFlag(got),
            })?;

        if payload.len() != 1 + data_size + 1 {
            return Err(Self::Error::InvalidLength(payload.len() + CHECKSUM_SIZE));
        }

        if payload[0] != version {
            return Err(Self::Error::InvalidVersionByte(payload[0]));
        }

        let flag = payload[payload.len() - 1];
        if flag != WIF_COMPRESSED_FLAG {
            return Err(Self::Error::InvalidCompressionFlag(flag));
        }

        Ok(Wif {
            version,
            data: Zeroizing::new(payload[1..1 + data_size].to_vec()),
        })
    }
}
