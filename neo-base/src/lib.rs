// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Byte-level building blocks shared by the key and account crates:
//! the hash functions used for script hashes and checksums, Base58Check
//! framing, and the Wallet Import Format envelope.

pub mod encoding;
pub mod hash;
