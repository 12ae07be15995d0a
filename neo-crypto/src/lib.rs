// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! secp256r1 (NIST P-256) key material as used by Neo N3 single-signature accounts.

pub mod secp256r1;
