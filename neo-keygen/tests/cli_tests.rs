//! End-to-end tests for the neo-keygen binary.

use assert_cmd::Command;
use neo_type::CheckSigLayout;
use neo_wallet::{Account, KeyFile};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const WIF_ONE: &str = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
const HEX_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

fn keygen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("neo-keygen").expect("binary should be built");
    cmd.current_dir(dir.path())
        .env_remove("NEO_KEYGEN_CONFIG")
        .env_remove("NEO_KEYGEN_OUT")
        .env_remove("NEO_WALLET_PRIVATE_KEY")
        .env("RUST_LOG", "off");
    cmd
}

fn printed_address(stdout: &[u8]) -> String {
    let stdout = String::from_utf8(stdout.to_vec()).expect("utf8");
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Address: "))
        .expect("address line")
        .to_string()
}

#[test]
fn test_no_arguments_generates_key_file() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(".env"), "OLD=1\n").expect("seed file");

    let printed = predicate::str::is_match(
        r"^Address: N[1-9A-HJ-NP-Za-km-z]{33}\nWIF: [KL][1-9A-HJ-NP-Za-km-z]{51}\n$",
    )
    .expect("regex");

    let output = keygen(&dir)
        .assert()
        .success()
        .stdout(printed)
        .get_output()
        .stdout
        .clone();

    let content = fs::read_to_string(dir.path().join(".env")).expect("key file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("NEO_WALLET_ADDRESS="));
    assert!(lines[1].starts_with("NEO_WALLET_PRIVATE_KEY="));
    assert!(lines[2].starts_with("NEO_WALLET_PRIVATE_KEY_HEX="));
    assert_eq!(lines[2].len(), "NEO_WALLET_PRIVATE_KEY_HEX=".len() + 64);

    let file = KeyFile::parse(&content).expect("parse");
    let account = file.verify(CheckSigLayout::Compact).expect("consistent file");
    assert_eq!(account.address().as_str(), printed_address(&output));
}

#[test]
fn test_decode_wif_from_environment() {
    let dir = TempDir::new().expect("tempdir");

    keygen(&dir)
        .arg("decode-wif")
        .env("NEO_WALLET_PRIVATE_KEY", WIF_ONE)
        .assert()
        .success()
        .stdout(format!("NEO_WALLET_PRIVATE_KEY_HEX: {HEX_ONE}\n"));
}

#[test]
fn test_decode_wif_custom_variable() {
    let dir = TempDir::new().expect("tempdir");

    keygen(&dir)
        .args(["decode-wif", "--wif-var", "HEDGE_WIF"])
        .env("HEDGE_WIF", WIF_ONE)
        .assert()
        .success()
        .stdout(predicate::str::contains(HEX_ONE));
}

#[test]
fn test_decode_wif_falls_back_to_key_file() {
    let dir = TempDir::new().expect("tempdir");
    let account = Account::from_wif(WIF_ONE, CheckSigLayout::Compact).expect("valid wif");
    KeyFile::from_account(&account).write(dir.path().join(".env")).expect("write");

    keygen(&dir)
        .arg("decode-wif")
        .assert()
        .success()
        .stdout(format!("NEO_WALLET_PRIVATE_KEY_HEX: {HEX_ONE}\n"));
}

#[test]
fn test_decode_wif_rejects_corrupted_input() {
    let dir = TempDir::new().expect("tempdir");

    keygen(&dir)
        .arg("decode-wif")
        .env("NEO_WALLET_PRIVATE_KEY", "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWo")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid checksum"));
}

#[test]
fn test_decode_wif_rejects_long_zero_run() {
    let dir = TempDir::new().expect("tempdir");

    keygen(&dir)
        .arg("decode-wif")
        .env("NEO_WALLET_PRIVATE_KEY", "1".repeat(133))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid checksum"));
}

#[test]
fn test_verify_detects_layout_mismatch() {
    let dir = TempDir::new().expect("tempdir");
    let account = Account::from_wif(WIF_ONE, CheckSigLayout::Compact).expect("valid wif");
    KeyFile::from_account(&account).write(dir.path().join(".env")).expect("write");

    keygen(&dir)
        .arg("verify")
        .assert()
        .success()
        .stdout("Address: NdrzSo3cieuW2E6PbLa3cNnkZ53rppHRd9\n");

    keygen(&dir)
        .args(["verify", "--layout", "interop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn test_config_file_selects_output_and_layout() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("keygen.toml"), "out = \"testnet.env\"\nlayout = \"interop\"\n")
        .expect("write config");

    keygen(&dir).args(["--config", "keygen.toml"]).assert().success();

    assert!(!dir.path().join(".env").exists());
    let file = KeyFile::load(dir.path().join("testnet.env")).expect("key file");
    assert!(file.verify(CheckSigLayout::Interop).is_ok());
    assert!(file.verify(CheckSigLayout::Compact).is_err());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().expect("tempdir");

    keygen(&dir)
        .args(["--out", "missing-dir/.env"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to write key file"));
}
