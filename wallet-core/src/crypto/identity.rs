// wallet-core/src/crypto/identity.rs
//
// Identity derivation: credential → (private key, public key, address)
//
// ┌──────────────────────┬──────────────────────────────────────────────┐
// │ Credential           │ Private key                                  │
// ├──────────────────────┼──────────────────────────────────────────────┤
// │ secret / passphrase  │ sha256(NFD(text))                            │
// │ mnemonic, no HD hint │ sha256(NFD(text))                            │
// │ mnemonic + bip39/4x  │ BIP-32(seed(mnemonic), path from options)    │
// │ WIF                  │ decoded key (compression from the WIF flag)  │
// │ raw private key      │ as given                                     │
// └──────────────────────┴──────────────────────────────────────────────┘
//
// Addresses are legacy `Base58Check([pubKeyHash] || hash160(pubkey))`.

use crate::crypto::hash::sha256;
use crate::crypto::key_deriver::Secp256k1Deriver;
use crate::crypto::keys::{address_from_public_key, PrivateKey};
use crate::crypto::mnemonic::WalletMnemonic;
use crate::crypto::paths::DerivationPaths;
use crate::crypto::wif::{Wif, WifKey};
use crate::error::WalletResult;
use crate::network::NetworkParams;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

// =============================================================================
// OPTIONS
// =============================================================================

/// `account'/change/address_index` levels of a BIP-44 style path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DerivationLevels {
    pub account: u32,
    pub change: u32,
    pub address_index: u32,
}

/// Identity derivation hints carried by every signatory.
///
/// Deserializes from `{"bip39": true, "bip44": {"account": 0}}` and friends;
/// every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityOptions {
    pub bip39: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bip44: Option<DerivationLevels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bip49: Option<DerivationLevels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bip84: Option<DerivationLevels>,
}

impl IdentityOptions {
    /// Plain BIP-39 import, BIP-44 account 0
    pub fn bip39() -> Self {
        Self {
            bip39: true,
            ..Default::default()
        }
    }

    pub fn bip44(levels: DerivationLevels) -> Self {
        Self {
            bip39: true,
            bip44: Some(levels),
            ..Default::default()
        }
    }

    pub fn bip49(levels: DerivationLevels) -> Self {
        Self {
            bip39: true,
            bip49: Some(levels),
            ..Default::default()
        }
    }

    pub fn bip84(levels: DerivationLevels) -> Self {
        Self {
            bip39: true,
            bip84: Some(levels),
            ..Default::default()
        }
    }

    /// `true` when a mnemonic should go through BIP-39/BIP-32 instead of sha256.
    #[inline]
    pub fn is_hierarchical(&self) -> bool {
        self.bip39 || self.bip44.is_some() || self.bip49.is_some() || self.bip84.is_some()
    }
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Key material + address of one credential on one network.
///
/// `Debug` is safe to log: `PrivateKey` redacts itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub private_key: PrivateKey,
    /// SEC1 public key, lowercase hex
    pub public_key: String,
    pub address: String,
    pub compressed: bool,
}

impl Identity {
    /// Build from a private key. Fails for a scalar outside `[1, n - 1]`.
    pub fn from_private_key(
        private_key: PrivateKey,
        network: &NetworkParams,
        compressed: bool,
    ) -> WalletResult<Self> {
        private_key.validate()?;
        let public_key = private_key.public_key(compressed)?;
        let address = address_from_public_key(&public_key, network.pub_key_hash);

        Ok(Self {
            private_key,
            public_key: hex::encode(public_key),
            address,
            compressed,
        })
    }

    /// Hex private key, compressed public key.
    pub fn from_private_key_hex(value: &str, network: &NetworkParams) -> WalletResult<Self> {
        Self::from_private_key(PrivateKey::from_hex(value)?, network, true)
    }

    /// `sha256(NFD(secret))` as the private key.
    pub fn from_secret(secret: &str, network: &NetworkParams) -> WalletResult<Self> {
        let normalized = Zeroizing::new(secret.nfd().collect::<String>());
        let private_key = PrivateKey::from_bytes(sha256(normalized.as_bytes()));
        Self::from_private_key(private_key, network, true)
    }

    /// Mnemonic import: BIP-32 when `options` ask for it, secret-style otherwise.
    ///
    /// # Errors
    /// Mnemonic errors (word count, unknown word, checksum) only apply on the
    /// hierarchical branch.
    pub fn from_mnemonic(
        mnemonic: &str,
        network: &NetworkParams,
        options: &IdentityOptions,
    ) -> WalletResult<Self> {
        let path = match DerivationPaths::from_options(options, network.slip44) {
            Some(path) => path,
            None => return Self::from_secret(mnemonic, network),
        };

        debug!(path = %path, network = %network.id, "identity: deriving from BIP-39 mnemonic");

        let normalized = Zeroizing::new(mnemonic.nfkd().collect::<String>());
        let seed = WalletMnemonic::from_phrase(&normalized)?.to_seed(None)?;
        let derived = Secp256k1Deriver::derive(&seed[..], &path)?;
        Self::from_private_key(derived.private_key, network, true)
    }

    /// WIF import. The compression flag of the WIF is honored.
    pub fn from_wif(wif: &str, network: &NetworkParams) -> WalletResult<Self> {
        let decoded = Wif::decode(wif)?;
        if decoded.version != network.wif {
            warn!(
                expected = network.wif,
                actual = decoded.version,
                network = %network.id,
                "identity: WIF version does not match network"
            );
        }
        Self::from_private_key(decoded.private_key, network, decoded.compressed)
    }

    /// WIF of this identity's key under the network's WIF version.
    pub fn wif(&self, network: &NetworkParams) -> String {
        Wif::encode(&WifKey::new(
            network.wif,
            self.private_key.clone(),
            self.compressed,
        ))
    }

    #[inline]
    pub fn private_key_hex(&self) -> String {
        self.private_key.to_hex()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CryptoError, MnemonicError, WalletError};

    const SECRET: &str = "this is a top secret passphrase";
    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_from_secret() {
        let identity = Identity::from_secret(SECRET, &NetworkParams::ark_mainnet()).unwrap();
        assert_eq!(
            identity.private_key_hex(),
            "d8839c2432bfd0a67ef10a804ba991eabba19f154a3d707917681d45822a5712"
        );
        assert_eq!(
            identity.public_key,
            "034151a3ec46b5670a682b0a63394f863587d1bc97483b1b6c70eb58e7f0aed192"
        );
        assert_eq!(identity.address, "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus");
        assert_eq!(
            identity.wif(&NetworkParams::ark_mainnet()),
            "SGq4xLgZKCGxs7bjmwnBrWcT4C1ADFEermj846KC97FSv1WFD1dA"
        );
    }

    #[test]
    fn test_secret_is_nfd_normalized() {
        let network = NetworkParams::ark_mainnet();
        let composed = Identity::from_secret("caf\u{00E9}", &network).unwrap();
        let decomposed = Identity::from_secret("cafe\u{0301}", &network).unwrap();
        assert_eq!(composed, decomposed);
    }

    #[test]
    fn test_mnemonic_without_hints_is_hashed() {
        let network = NetworkParams::ark_mainnet();
        let identity = Identity::from_mnemonic(TEST_MNEMONIC, &network, &IdentityOptions::default())
            .unwrap();
        assert_eq!(
            identity.private_key_hex(),
            "c557eec878dfd852ba3f88087c4f350f09c55537ab5e549c3cd14320ec3cef38"
        );
        assert_eq!(identity.address, "ASqZqHkv5XeuSjS4eouncnnXu4C15vzSCB");
    }

    #[test]
    fn test_mnemonic_bip39_default_path() {
        let identity = Identity::from_mnemonic(
            TEST_MNEMONIC,
            &NetworkParams::ark_mainnet(),
            &IdentityOptions::bip39(),
        )
        .unwrap();
        assert_eq!(
            identity.private_key_hex(),
            "98216ac9db6d462c889ea1008e6d670327276342bc5bfaebe4ef1553d2fc9179"
        );
        assert_eq!(identity.address, "AJiLnzhUfSGFeKzfXndhFYsRR1T36QmbXx");
    }

    #[test]
    fn test_mnemonic_bip44_levels() {
        let options = IdentityOptions::bip44(DerivationLevels {
            account: 1,
            change: 0,
            address_index: 3,
        });
        let identity =
            Identity::from_mnemonic(TEST_MNEMONIC, &NetworkParams::ark_mainnet(), &options).unwrap();
        assert_eq!(identity.address, "ARuxMSQFZDh39vTfQGntwkw2MEUN82Ddxz");
    }

    #[test]
    fn test_mnemonic_bitcoin_bip44() {
        let identity = Identity::from_mnemonic(
            TEST_MNEMONIC,
            &NetworkParams::bitcoin(),
            &IdentityOptions::bip39(),
        )
        .unwrap();
        assert_eq!(identity.address, "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
        assert_eq!(
            identity.public_key,
            "03aaeb52dd7494c361049de67cc680e83ebcbbbdbeb13637d92cd845f70308af5e"
        );
    }

    #[test]
    fn test_mnemonic_bip39_rejects_non_bip39_text() {
        let result = Identity::from_mnemonic(SECRET, &NetworkParams::ark_mainnet(), &IdentityOptions::bip39());
        assert_eq!(
            result.unwrap_err(),
            WalletError::Mnemonic(MnemonicError::InvalidWordCount(6))
        );
    }

    #[test]
    fn test_from_wif() {
        let network = NetworkParams::ark_mainnet();
        let identity = Identity::from_wif("SGq4xLgZKCGxs7bjmwnBrWcT4C1ADFEermj846KC97FSv1WFD1dA", &network)
            .unwrap();
        assert_eq!(identity.address, "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus");
        assert!(identity.compressed);
    }

    #[test]
    fn test_from_uncompressed_wif() {
        let identity = Identity::from_wif(
            "5KN7MzqK5wt2TP1fQCYyHBtDrXdJuXbUzm4A9rKAteGu3Qi5CVR",
            &NetworkParams::bitcoin(),
        )
        .unwrap();
        assert!(!identity.compressed);
        assert_eq!(identity.public_key.len(), 130);
        assert_eq!(identity.address, "1Jq6MksXQVWzrznvZzxkV6oY57oWXD9TXB");
    }

    #[test]
    fn test_from_private_key_hex() {
        let identity = Identity::from_private_key_hex(
            "0000000000000000000000000000000000000000000000000000000000000001",
            &NetworkParams::ark_mainnet(),
        )
        .unwrap();
        assert_eq!(identity.address, "AST9CekEhDWuxHPynRmeyjg5biNFSijvb3");
    }

    #[test]
    fn test_zero_private_key_rejected() {
        assert!(matches!(
            Identity::from_private_key(PrivateKey::from_bytes([0u8; 32]), &NetworkParams::bitcoin(), true),
            Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(_)))
        ));
    }

    #[test]
    fn test_options_serde() {
        let options: IdentityOptions =
            serde_json::from_str(r#"{"bip44":{"account":2,"addressIndex":5}}"#).unwrap();
        assert!(!options.bip39);
        assert!(options.is_hierarchical());
        assert_eq!(
            options.bip44,
            Some(DerivationLevels {
                account: 2,
                change: 0,
                address_index: 5
            })
        );

        let empty: IdentityOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, IdentityOptions::default());
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"bip39":false}"#);
    }
}
