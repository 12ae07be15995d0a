//! Property-based tests for neo-crypto
//!
//! These tests use proptest to verify:
//! - WIF round-trips for every valid scalar
//! - compressed public keys carry the parity of Y

use neo_crypto::secp256r1::{compress_public_key, PrivateKey, PublicKey, KEY_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_wif_roundtrip(bytes in any::<[u8; KEY_SIZE]>()) {
        let key = PrivateKey::from_be_bytes(&bytes);
        prop_assume!(key.is_ok());
        let key = key.expect("checked above");

        let decoded = PrivateKey::from_wif(&key.to_wif()).expect("decode should be ok");
        prop_assert_eq!(&decoded, &key);
        let be = decoded.to_be_bytes();
        prop_assert_eq!(be.as_slice(), bytes.as_slice());
    }

    #[test]
    fn test_compressed_prefix_tracks_parity(bytes in any::<[u8; KEY_SIZE]>()) {
        let key = PrivateKey::from_be_bytes(&bytes);
        prop_assume!(key.is_ok());
        let public = key.expect("checked above").public_key();

        let compressed = public.to_compressed();
        let expected = if public.y()[KEY_SIZE - 1] % 2 == 0 { 0x02 } else { 0x03 };
        prop_assert_eq!(compressed[0], expected);
        prop_assert_eq!(compressed, compress_public_key(public.x(), public.y()));
        prop_assert_eq!(PublicKey::from_sec1_bytes(&compressed).expect("on curve"), public);
    }
}
