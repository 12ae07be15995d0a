// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use sha2::Digest;

pub const SHA256_SIZE: usize = 32;
pub const RIPEMD160_SIZE: usize = 20;

pub trait Sha256 {
    fn sha256(&self) -> [u8; SHA256_SIZE];
}

impl<T: AsRef<[u8]> + ?Sized> Sha256 for T {
    #[inline]
    fn sha256(&self) -> [u8; SHA256_SIZE] {
        let mut h = sha2::Sha256::new();
        h.update(self.as_ref());
        h.finalize().into()
    }
}

/// SHA-256 applied twice, the Base58Check checksum function.
pub trait Sha256Twice {
    fn sha256_twice(&self) -> [u8; SHA256_SIZE];
}

impl<T: AsRef<[u8]> + ?Sized> Sha256Twice for T {
    #[inline]
    fn sha256_twice(&self) -> [u8; SHA256_SIZE] {
        self.sha256().sha256()
    }
}

pub trait Ripemd160 {
    fn ripemd160(&self) -> [u8; RIPEMD160_SIZE];
}

impl<T: AsRef<[u8]> + ?Sized> Ripemd160 for T {
    #[inline]
    fn ripemd160(&self) -> [u8; RIPEMD160_SIZE] {
        let mut h = ripemd::Ripemd160::new();
        h.update(self.as_ref());
        h.finalize().into()
    }
}

/// RIPEMD-160 over SHA-256.
#[inline]
pub fn hash160<T: AsRef<[u8]> + ?Sized>(data: &T) -> [u8; RIPEMD160_SIZE] {
    data.sha256().ripemd160()
}
