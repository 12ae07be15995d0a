// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use crate::hash::Sha256Twice;

pub const CHECKSUM_SIZE: usize = 4;

/// Decodes plain Base58 without any checksum handling.
///
/// Only characters outside the Bitcoin alphabet are rejected.
pub fn decode_base58<T>(src: &T) -> Result<Vec<u8>, FromBase58CheckError>
where
    T: AsRef<str> + ?Sized,
{
    use bs58::decode::Error;

    let src = src.as_ref();
    bs58::decode(src).into_vec().map_err(|err| match err {
        Error::InvalidCharacter { character, .. } => FromBase58CheckError::InvalidChar(character),
        Error::NonAsciiCharacter { index } => {
            let ch = src[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            FromBase58CheckError::InvalidChar(ch)
        }
        // into_vec sizes its own buffer
        _ => FromBase58CheckError::InvalidLength(0),
    })
}

pub trait ToBase58Check {
    fn to_base58_check(&self, prefix: Option<u8>, suffix: Option<u8>) -> String;
}

impl<T: AsRef<[u8]> + ?Sized> ToBase58Check for T {
    fn to_base58_check(&self, prefix: Option<u8>, suffix: Option<u8>) -> String {
        let src = self.as_ref();
        let mut buf = Vec::with_capacity(1 + src.len() + 1 + CHECKSUM_SIZE);

        if let Some(prefix) = prefix {
            buf.push(prefix);
        }

        buf.extend_from_slice(src);

        if let Some(suffix) = suffix {
            buf.push(suffix)
        }

        let check = buf.sha256_twice();
        buf.extend_from_slice(&check[..CHECKSUM_SIZE]);

        bs58::encode(buf).into_string()
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
pub enum FromBase58CheckError {
    #[error("base58check: invalid character '{0}'")]
    InvalidChar(char),

    /// Carries the decoded byte count, checksum included.
    #[error("base58check: invalid decoded length {0}")]
    InvalidLength(usize),

    #[error("base58check: invalid checksum")]
    InvalidChecksum,

    #[error("base58check: expected prefix {0} but got {1}")]
    InvalidPrefix(u8, u8),

    #[error("base58check: expected suffix {0} but got {1}")]
    InvalidSuffix(u8, u8),
}

pub trait FromBase58Check: Sized {
    type Error;

    /// Decodes `src` and strips the checksum, then the optional `prefix` and `suffix`.
    ///
    /// The checksum is verified before the prefix and suffix, so a corrupted string
    /// always reports `InvalidChecksum` rather than a misleading field error.
    fn from_base58_check<T: AsRef<str>>(
        src: T,
        prefix: Option<u8>,
        suffix: Option<u8>,
    ) -> Result<Self, Self::Error>;
}

impl FromBase58Check for Vec<u8> {
    type Error = FromBase58CheckError;

    fn from_base58_check<T: AsRef<str>>(
        src: T,
        prefix: Option<u8>,
        suffix: Option<u8>,
    ) -> Result<Vec<u8>, Self::Error> {
        let head = prefix.map_or(0, |_| 1);
        let tail = suffix.map_or(0, |_| 1);

        let mut v = decode_base58(src.as_ref())?;
        if v.len() < head + tail + CHECKSUM_SIZE + 1 {
            return Err(Self::Error::InvalidLength(v.len()));
        }

        let body = v.len() - CHECKSUM_SIZE;
        let sha = v[..body].sha256_twice();
        if sha[..CHECKSUM_SIZE] != v[body..] {
            return Err(Self::Error::InvalidChecksum);
        }
        v.truncate(body);

        if let Some(prefix) = prefix {
            if v[0] != prefix {
                return Err(Self::Error::InvalidPrefix(prefix, v[0]));
            }
            v.remove(0);
        }

        if let Some(suffix) = suffix {
            let last = v[v.len() - 1];
            if last != suffix {
                return Err(Self::Error::InvalidSuffix(suffix, last));
            }
            v.truncate(v.len() - 1);
        }

        Ok(v)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::encoding::hex::ToHex;

    #[test]
    fn test_base58_check() {
        let origin = "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu";
        let decoded =
            Vec::from_base58_check(origin, Some(0x00), None).expect("decode should be ok");

        let encoded = decoded.to_base58_check(Some(0x00), None);
        assert_eq!(origin, encoded);

        let origin = "1234567890";
        let _ = Vec::from_base58_check(origin, None, None).expect_err("decode should be failed");

        let encoded = origin.to_base58_check(None, Some(0x01));
        let decoded =
            Vec::from_base58_check(&encoded, None, Some(0x01)).expect("decode should be ok");
        assert_eq!(origin.as_bytes(), decoded.as_slice());

        let encoded = origin.to_base58_check(Some(0x03), None);
        let _ = Vec::from_base58_check((encoded + "x").as_str(), Some(0x03), None)
            .expect_err("decode should be failed");
    }

    #[test]
    fn test_base58_addr() {
        let addr = "AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVRj";
        let addr = Vec::from_base58_check(addr, None, None).expect("decode should be ok");

        assert_eq!(addr.to_hex_lower(), "17e4f124b1c3b23553f07cebfb852b2a60aa6c6d94");
    }

    #[test]
    fn test_base58_check_errors() {
        let err = Vec::from_base58_check("AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVR0", None, None)
            .expect_err("'0' is outside the alphabet");
        assert_eq!(err, FromBase58CheckError::InvalidChar('0'));

        let err = Vec::from_base58_check("AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVRk", None, None)
            .expect_err("last character changed");
        assert_eq!(err, FromBase58CheckError::InvalidChecksum);

        let err = Vec::from_base58_check("", None, None).expect_err("empty input");
        assert_eq!(err, FromBase58CheckError::InvalidLength(0));

        let err = Vec::from_base58_check("11111", Some(0x35), None).expect_err("too short");
        assert_eq!(err, FromBase58CheckError::InvalidLength(5));

        let err = Vec::from_base58_check("AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVRé", None, None)
            .expect_err("non-ascii character");
        assert_eq!(err, FromBase58CheckError::InvalidChar('é'));

        let encoded = [0x11u8; 20].to_base58_check(Some(0x35), None);
        let err = Vec::from_base58_check(&encoded, Some(0x17), None)
            .expect_err("prefix should not match");
        assert_eq!(err, FromBase58CheckError::InvalidPrefix(0x17, 0x35));

        let encoded = [0x11u8; 32].to_base58_check(Some(0x80), Some(0x01));
        let err = Vec::from_base58_check(&encoded, Some(0x80), Some(0x02))
            .expect_err("suffix should not match");
        assert_eq!(err, FromBase58CheckError::InvalidSuffix(0x02, 0x01));
    }

    #[test]
    fn test_base58_check_long_zero_run() {
        // every leading '1' decodes to one zero byte
        let ones = "1".repeat(133);
        assert_eq!(decode_base58(&ones).expect("decode should be ok"), vec![0u8; 133]);

        let err = Vec::from_base58_check(&ones, Some(0x35), None).expect_err("zeros only");
        assert_eq!(err, FromBase58CheckError::InvalidChecksum);

        let long = "1".repeat(4096) + "AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVRj";
        let err = Vec::from_base58_check(&long, None, None).expect_err("zero-padded payload");
        assert_eq!(err, FromBase58CheckError::InvalidChecksum);
    }
}
