use std::{fs, io::Write, path::Path};

use neo_type::{Address, CheckSigLayout};
use tracing::info;
use zeroize::Zeroizing;

use crate::{Account, WalletError};

pub const ADDRESS_KEY: &str = "NEO_WALLET_ADDRESS";
pub const PRIVATE_KEY_KEY: &str = "NEO_WALLET_PRIVATE_KEY";
pub const PRIVATE_KEY_HEX_KEY: &str = "NEO_WALLET_PRIVATE_KEY_HEX";

/// The three-line `KEY=VALUE` file an account is persisted to.
///
/// ```text
/// NEO_WALLET_ADDRESS=<address>
/// NEO_WALLET_PRIVATE_KEY=<wif>
/// NEO_WALLET_PRIVATE_KEY_HEX=<64 lowercase hex chars>
/// ```
#[derive(Clone)]
pub struct KeyFile {
    address: String,
    wif: Zeroizing<String>,
    private_key_hex: Zeroizing<String>,
}

impl KeyFile {
    pub fn from_account(account: &Account) -> Self {
        Self {
            address: account.address().to_string(),
            wif: account.wif(),
            private_key_hex: account.private_key_hex(),
        }
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn wif(&self) -> &str {
        &self.wif
    }

    #[inline]
    pub fn private_key_hex(&self) -> &str {
        &self.private_key_hex
    }

    pub fn render(&self) -> Zeroizing<String> {
        Zeroizing::new(format!(
            "{ADDRESS_KEY}={}\n{PRIVATE_KEY_KEY}={}\n{PRIVATE_KEY_HEX_KEY}={}\n",
            self.address, *self.wif, *self.private_key_hex,
        ))
    }

    /// Writes the file, replacing any existing content. New files are owner-only on Unix.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), WalletError> {
        let path = path.as_ref();
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(path)?;
        file.write_all(self.render().as_bytes())?;
        file.sync_all()?;

        info!(path = %path.display(), address = %self.address, "key file written");
        Ok(())
    }

    /// Parses dotenv content: `export`, quoting and `#` comments are handled by `dotenvy`,
    /// unrelated keys are skipped and a repeated key keeps its last value.
    pub fn parse(content: &str) -> Result<Self, WalletError> {
        let mut address = None;
        let mut wif = None;
        let mut private_key_hex = None;

        for (no, item) in dotenvy::from_read_iter(content.as_bytes()).enumerate() {
            let (key, value) = item.map_err(|err| match err {
                dotenvy::Error::Io(err) => WalletError::Io(err),
                _ => WalletError::MalformedEntry { entry: no + 1 },
            })?;
            let value = Zeroizing::new(value);

            match key.as_str() {
                ADDRESS_KEY => address = Some(value.to_string()),
                PRIVATE_KEY_KEY => wif = Some(value),
                PRIVATE_KEY_HEX_KEY => private_key_hex = Some(value),
                _ => {}
            }
        }

        Ok(Self {
            address: address.ok_or(WalletError::MissingField(ADDRESS_KEY))?,
            wif: wif.ok_or(WalletError::MissingField(PRIVATE_KEY_KEY))?,
            private_key_hex: private_key_hex
                .ok_or(WalletError::MissingField(PRIVATE_KEY_HEX_KEY))?,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let content = Zeroizing::new(fs::read_to_string(path)?);
        Self::parse(&content)
    }

    /// Re-derives the account from the WIF and checks the other two fields agree with it.
    pub fn verify(&self, layout: CheckSigLayout) -> Result<Account, WalletError> {
        let account = Account::from_wif(&self.wif, layout)?;

        if !self.private_key_hex.eq_ignore_ascii_case(&account.private_key_hex()) {
            return Err(WalletError::Mismatch { field: PRIVATE_KEY_HEX_KEY });
        }

        let address = Address::try_from(self.address.as_str())?;
        if &address != account.address() {
            return Err(WalletError::Mismatch { field: ADDRESS_KEY });
        }

        Ok(account)
    }
}

impl core::fmt::Debug for KeyFile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyFile")
            .field("address", &self.address)
            .field("wif", &"***")
            .field("private_key_hex", &"***")
            .finish()
    }
}
