// wallet-core/src/crypto/mnemonic.rs
//
// BIP-39 phrase validation + seed derivation (PBKDF2-HMAC-SHA512)
//
// Phrases are imported, never generated here: signatories are built from
// credentials the user already holds.

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Word counts accepted by BIP-39
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Validated BIP-39 phrase.
///
/// - Whitespace is collapsed to single spaces on import
/// - The phrase is zeroized on drop and never shown by `Debug`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

// Custom Debug - never print the phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    /// Import an existing phrase.
    ///
    /// # Errors
    /// - `InvalidWordCount` unless the phrase has 12, 15, 18, 21 or 24 words
    /// - `UnknownWord` for a word outside the English wordlist
    /// - `ChecksumFailed` when the last word does not match the entropy checksum
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let count = words.len();

        if !VALID_WORD_COUNTS.contains(&count) {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(count)));
        }

        let normalized = words.join(" ");
        Mnemonic::parse(normalized.as_str()).map_err(|e| map_bip39_error(e, &words))?;

        Ok(Self {
            phrase: normalized,
            word_count: count,
        })
    }

    /// Cheap yes/no check, no error detail.
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    /// Handle with care, this is the secret.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// 64-byte seed, `passphrase` is the optional BIP-39 "25th word".
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Mnemonic::parse(self.phrase.as_str())
            .map_err(|e| WalletError::Mnemonic(MnemonicError::Bip39Error(e.to_string())))?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or(""))))
    }
}

fn map_bip39_error(error: bip39::Error, words: &[&str]) -> WalletError {
    let mnemonic_error = match error {
        bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
        bip39::Error::UnknownWord(index) => MnemonicError::UnknownWord(
            words
                .get(index)
                .map(|word| word.to_string())
                .unwrap_or_else(|| format!("word #{}", index)),
        ),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        other => MnemonicError::Bip39Error(other.to_string()),
    };
    WalletError::Mnemonic(mnemonic_error)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
