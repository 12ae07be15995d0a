use clap::{Parser, Subcommand, ValueEnum};
use neo_type::CheckSigLayout;
use std::path::PathBuf;

/// Command-line arguments for neo-keygen
#[derive(Parser, Debug, Clone)]
#[command(
    name = "neo-keygen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate and inspect Neo N3 single-signature accounts",
    long_about = "Without a subcommand, generates a fresh account, prints its address and WIF, \
                  and writes the key file (.env by default), replacing any existing file."
)]
pub struct CliArgs {
    /// TOML configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        env = "NEO_KEYGEN_CONFIG",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Key file to write or read
    #[arg(short = 'o', long = "out", value_name = "PATH", env = "NEO_KEYGEN_OUT", global = true)]
    pub out: Option<PathBuf>,

    /// Verification script template the address is derived from
    #[arg(long = "layout", value_enum, global = true)]
    pub layout: Option<LayoutArg>,

    /// Environment variable holding the WIF for `decode-wif`
    #[arg(long = "wif-var", value_name = "NAME", global = true)]
    pub wif_var: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate a new account and write the key file (the default)
    Generate,

    /// Decode a WIF and print the raw private key as hex
    DecodeWif,

    /// Check that the key file's address and hex key match its WIF
    Verify,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// 0x21 ‖ key ‖ 0x68 ‖ DB B4 7F AC
    Compact,
    /// 0x0C 0x21 ‖ key ‖ 0x41 ‖ 56 E7 B3 27
    Interop,
}

impl From<LayoutArg> for CheckSigLayout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Compact => CheckSigLayout::Compact,
            LayoutArg::Interop => CheckSigLayout::Interop,
        }
    }
}

impl CliArgs {
    #[inline]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Generate)
    }
}
