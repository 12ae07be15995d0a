use neo_crypto::secp256r1::{Keypair, PrivateKey, PublicKey};
use neo_type::{
    Address, CheckSigLayout, CheckSign, ScriptHash, ToCheckSign, ToNeo3Address, ToScriptHash,
};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::WalletError;

/// A single-signature account and everything derived from its private key.
///
/// All fields are computed once on construction and never change.
#[derive(Clone, Debug)]
pub struct Account {
    keypair: Keypair,
    verification_script: CheckSign,
    script_hash: ScriptHash,
    address: Address,
}

impl Account {
    pub fn from_private_key(private_key: PrivateKey, layout: CheckSigLayout) -> Self {
        let keypair = Keypair::from_private(private_key);
        let verification_script = keypair.public_key.to_check_sign_with(layout);
        let script_hash = verification_script.to_script_hash();
        let address = script_hash.to_neo3_address();

        debug!(address = %address, layout = %layout, "account derived");
        Self { keypair, verification_script, script_hash, address }
    }

    #[inline]
    pub fn from_wif(wif: &str, layout: CheckSigLayout) -> Result<Self, WalletError> {
        Ok(Self::from_private_key(PrivateKey::from_wif(wif)?, layout))
    }

    pub fn generate_with<R: CryptoRng + RngCore>(
        rng: &mut R,
        layout: CheckSigLayout,
    ) -> Result<Self, WalletError> {
        let keypair = Keypair::generate(rng)?;
        Ok(Self::from_private_key(keypair.private_key, layout))
    }

    /// Generates a fresh account from the operating system's secure random source.
    #[inline]
    pub fn generate(layout: CheckSigLayout) -> Result<Self, WalletError> {
        let keypair = Keypair::random()?;
        Ok(Self::from_private_key(keypair.private_key, layout))
    }

    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.keypair.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.keypair.public_key
    }

    #[inline]
    pub fn layout(&self) -> CheckSigLayout {
        self.verification_script.layout()
    }

    #[inline]
    pub fn verification_script(&self) -> &CheckSign {
        &self.verification_script
    }

    #[inline]
    pub fn script_hash(&self) -> ScriptHash {
        self.script_hash
    }

    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }

    #[inline]
    pub fn wif(&self) -> Zeroizing<String> {
        self.keypair.private_key.to_wif()
    }

    #[inline]
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        self.keypair.private_key.to_hex_lower()
    }
}
