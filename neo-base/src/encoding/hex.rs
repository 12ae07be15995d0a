// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

pub trait ToHex {
    fn to_hex_lower(&self) -> String;
}

impl<T: AsRef<[u8]>> ToHex for T {
    #[inline]
    fn to_hex_lower(&self) -> String {
        hex::encode(self)
    }
}

/// Hex in reversed byte order, the way Neo prints `UInt160` values.
pub trait ToRevHex {
    fn to_rev_hex(&self) -> String;
}

impl<T: AsRef<[u8]>> ToRevHex for T {
    #[inline]
    fn to_rev_hex(&self) -> String {
        const TABLE: &[u8; 16] = b"0123456789abcdef";

        let data = self.as_ref();
        let mut h = String::with_capacity(data.len() * 2);
        data.iter().rev().for_each(|b| {
            h.push(TABLE[(b >> 4) as usize] as char);
            h.push(TABLE[(b & 0x0F) as usize] as char);
        });

        h
    }
}
