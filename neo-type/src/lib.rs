// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

mod address;
mod check_sign;
mod script_hash;

pub use address::*;
pub use check_sign::*;
pub use script_hash::*;

/// Address version byte of Neo N3.
pub const ADDRESS_NEO3: u8 = 0x35;

pub const SCRIPT_HASH_SIZE: usize = 20;

// 1-byte version + 20-bytes script hash + 4-bytes checksum
pub const ADDRESS_PAYLOAD_SIZE: usize = 1 + SCRIPT_HASH_SIZE + 4;
