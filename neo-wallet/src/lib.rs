//! Single-signature Neo N3 accounts and the key file they are persisted to.

mod account;
mod error;
mod keyfile;

pub use account::Account;
pub use error::WalletError;
pub use keyfile::{KeyFile, ADDRESS_KEY, PRIVATE_KEY_HEX_KEY, PRIVATE_KEY_KEY};
