#![allow(dead_code)]

use proptest::test_runner::Config as ProptestConfig;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT_LOGGER: OnceLock<()> = OnceLock::new();

/// Route crate logs to the test output; `RUST_LOG=wallet_signatory=trace` to see them.
pub fn init_logger() {
    INIT_LOGGER.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(32);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

pub const SECRET: &str = "this is a top secret passphrase";
pub const SECOND_SECRET: &str = "this is the confirmation secret";
pub const MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
pub const SECOND_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";
pub const ARK_WIF: &str = "SGq4xLgZKCGxs7bjmwnBrWcT4C1ADFEermj846KC97FSv1WFD1dA";
pub const SECOND_ARK_WIF: &str = "S9hZQ1QGHFSMqEsoGr7ZWvvrL23kAniRzeCcr5q1ViAr3RSTXKWm";
pub const SECRET_ADDRESS: &str = "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus";
pub const SECRET_PRIVATE_KEY: &str =
    "d8839c2432bfd0a67ef10a804ba991eabba19f154a3d707917681d45822a5712";
pub const SECRET_PUBLIC_KEY: &str =
    "034151a3ec46b5670a682b0a63394f863587d1bc97483b1b6c70eb58e7f0aed192";
