// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Encoding Error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("BIP38 Error: {0}")]
    Bip38(#[from] Bip38Error),

    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Signatory Error: {0}")]
    Signatory(#[from] SignatoryError),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

/// Failures of the Base58 / Base58Check / WIF envelopes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid checksum.")]
    InvalidChecksum,

    #[error("Invalid base58 character '{character}' at position {index}.")]
    InvalidCharacter { character: char, index: usize },

    #[error("Invalid envelope length: expected {expected}, got {actual} bytes.")]
    InvalidEnvelopeLength { expected: &'static str, actual: usize },

    #[error("Invalid compression flag: 0x{0:02x}.")]
    InvalidCompressionFlag(u8),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid private key length: expected {expected} bytes, got {actual}.")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Bip38Error {
    #[error("Invalid BIP38 header: 0x{0:02x}.")]
    InvalidHeader(u8),

    #[error("Unknown BIP38 type: 0x{0:02x}.")]
    UnknownType(u8),

    #[error("EC multiply BIP38 keys are not supported.")]
    UnsupportedScheme,

    #[error("Passphrase does not match the encrypted key.")]
    PassphraseMismatch,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatoryError {
    #[error("Method Signatory::{method} is forbidden for a {variant} signatory.")]
    ForbiddenMethodCall {
        method: &'static str,
        variant: &'static str,
    },

    #[error("Invalid multi-signature asset: {0}")]
    InvalidMultiSignature(String),
}

impl WalletError {
    /// Shorthand used by the signatory facade.
    pub(crate) fn forbidden(method: &'static str, variant: &'static str) -> Self {
        WalletError::Signatory(SignatoryError::ForbiddenMethodCall { method, variant })
    }
}
