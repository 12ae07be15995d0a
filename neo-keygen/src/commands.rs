use anyhow::{Context, Result};
use neo_crypto::secp256r1::PrivateKey;
use neo_wallet::{Account, KeyFile};
use std::io::Write;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::{args::Command, config::KeygenConfig};

pub fn run<W: Write>(command: Command, config: &KeygenConfig, out: &mut W) -> Result<()> {
    match command {
        Command::Generate => generate(config, out),
        Command::DecodeWif => decode_wif(config, out),
        Command::Verify => verify(config, out),
    }
}

/// Generates one account, prints `Address:` and `WIF:` lines and writes the key file.
pub fn generate<W: Write>(config: &KeygenConfig, out: &mut W) -> Result<()> {
    let account = Account::generate(config.layout).context("failed to generate account")?;

    KeyFile::from_account(&account)
        .write(&config.out)
        .with_context(|| format!("failed to write key file {}", config.out.display()))?;

    writeln!(out, "Address: {}", account.address())?;
    writeln!(out, "WIF: {}", account.wif().as_str())?;
    Ok(())
}

/// Prints the raw private key of a WIF taken from `config.wif_var`, or from the key file
/// when the variable is unset.
pub fn decode_wif<W: Write>(config: &KeygenConfig, out: &mut W) -> Result<()> {
    let wif = match std::env::var(&config.wif_var) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(var = %config.wif_var, "wif read from environment");
            Zeroizing::new(value)
        }
        _ => {
            let file = KeyFile::load(&config.out).with_context(|| {
                format!(
                    "{} is not set and key file {} could not be read",
                    config.wif_var,
                    config.out.display()
                )
            })?;
            debug!(path = %config.out.display(), "wif read from key file");
            Zeroizing::new(file.wif().to_string())
        }
    };

    let key = PrivateKey::from_wif(wif.trim()).context("invalid WIF")?;
    writeln!(out, "NEO_WALLET_PRIVATE_KEY_HEX: {}", key.to_hex_lower().as_str())?;
    Ok(())
}

/// Loads the key file and checks all three fields describe the same key.
pub fn verify<W: Write>(config: &KeygenConfig, out: &mut W) -> Result<()> {
    let file = KeyFile::load(&config.out)
        .with_context(|| format!("failed to load key file {}", config.out.display()))?;
    let account = file
        .verify(config.layout)
        .with_context(|| format!("key file {} is inconsistent", config.out.display()))?;

    info!(address = %account.address(), layout = %config.layout, "key file verified");
    writeln!(out, "Address: {}", account.address())?;
    Ok(())
}
