// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

pub mod base58;
mod hex;
mod wif;

pub use base58::{
    decode_base58, FromBase58Check, FromBase58CheckError, ToBase58Check, CHECKSUM_SIZE,
};
pub use hex::*;
pub use wif::*;
