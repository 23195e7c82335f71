// wallet-core/src/signatory/factory.rs
//
// Build signatories from raw credentials on a given network

use super::facade::Signatory;
use super::multi_signature::MultiSignatureAsset;
use super::variants::{
    ConfirmationSignatory, IdentitySignatory, LedgerSignatory, MultiSignatureSignatory,
    PrivateKeySignatory, SignatoryVariant,
};
use crate::crypto::bip38::Bip38;
use crate::crypto::identity::{Identity, IdentityOptions};
use crate::crypto::wif::Wif;
use crate::error::WalletResult;
use crate::network::NetworkParams;
use tracing::debug;
use zeroize::Zeroizing;

/// Signatory factory bound to one network.
///
/// # Example
/// ```
/// use wallet_signatory::network::NetworkParams;
/// use wallet_signatory::signatory::SignatoryFactory;
/// use wallet_signatory::crypto::IdentityOptions;
///
/// let factory = SignatoryFactory::new(NetworkParams::ark_mainnet());
/// let signatory = factory
///     .secret("this is a top secret passphrase", IdentityOptions::default())
///     .unwrap();
/// assert!(signatory.acts_with_secret());
/// assert_eq!(signatory.address().unwrap(), "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus");
/// ```
#[derive(Debug, Clone)]
pub struct SignatoryFactory {
    network: NetworkParams,
    bip38: Bip38,
}

impl SignatoryFactory {
    pub fn new(network: NetworkParams) -> Self {
        Self {
            network,
            bip38: Bip38::new(),
        }
    }

    /// Swap the BIP38 codec (e.g. lighter scrypt parameters).
    pub fn with_bip38(mut self, bip38: Bip38) -> Self {
        self.bip38 = bip38;
        self
    }

    #[inline]
    pub fn network(&self) -> &NetworkParams {
        &self.network
    }

    // =========================================================================
    // MNEMONIC / SECRET / WIF
    // =========================================================================

    pub fn mnemonic(&self, mnemonic: &str, options: IdentityOptions) -> WalletResult<Signatory> {
        let identity = Identity::from_mnemonic(mnemonic, &self.network, &options)?;
        debug!(network = %self.network.id, hierarchical = options.is_hierarchical(), "factory: mnemonic signatory");
        Ok(Signatory::new(SignatoryVariant::Mnemonic(
            IdentitySignatory::new(mnemonic, &identity, options),
        )))
    }

    /// Identity comes from `primary`; `confirmation` is only carried along.
    pub fn confirmation_mnemonic(
        &self,
        primary: &str,
        confirmation: &str,
        options: IdentityOptions,
    ) -> WalletResult<Signatory> {
        let identity = Identity::from_mnemonic(primary, &self.network, &options)?;
        // Validate the confirmation under the same derivation rules
        Identity::from_mnemonic(confirmation, &self.network, &options)?;
        debug!(network = %self.network.id, "factory: confirmation mnemonic signatory");
        Ok(Signatory::new(SignatoryVariant::ConfirmationMnemonic(
            ConfirmationSignatory::new(IdentitySignatory::new(primary, &identity, options), confirmation),
        )))
    }

    pub fn secret(&self, secret: &str, options: IdentityOptions) -> WalletResult<Signatory> {
        let identity = Identity::from_secret(secret, &self.network)?;
        debug!(network = %self.network.id, "factory: secret signatory");
        Ok(Signatory::new(SignatoryVariant::Secret(IdentitySignatory::new(
            secret, &identity, options,
        ))))
    }

    pub fn confirmation_secret(
        &self,
        primary: &str,
        confirmation: &str,
        options: IdentityOptions,
    ) -> WalletResult<Signatory> {
        let identity = Identity::from_secret(primary, &self.network)?;
        debug!(network = %self.network.id, "factory: confirmation secret signatory");
        Ok(Signatory::new(SignatoryVariant::ConfirmationSecret(
            ConfirmationSignatory::new(IdentitySignatory::new(primary, &identity, options), confirmation),
        )))
    }

    pub fn wif(&self, wif: &str, options: IdentityOptions) -> WalletResult<Signatory> {
        let identity = Identity::from_wif(wif, &self.network)?;
        debug!(network = %self.network.id, compressed = identity.compressed, "factory: WIF signatory");
        Ok(Signatory::new(SignatoryVariant::Wif(IdentitySignatory::new(
            wif, &identity, options,
        ))))
    }

    /// # Errors
    /// Both WIFs must decode.
    pub fn confirmation_wif(
        &self,
        primary: &str,
        confirmation: &str,
        options: IdentityOptions,
    ) -> WalletResult<Signatory> {
        let identity = Identity::from_wif(primary, &self.network)?;
        Wif::decode(confirmation)?;
        debug!(network = %self.network.id, "factory: confirmation WIF signatory");
        Ok(Signatory::new(SignatoryVariant::ConfirmationWif(
            ConfirmationSignatory::new(IdentitySignatory::new(primary, &identity, options), confirmation),
        )))
    }

    // =========================================================================
    // RAW / ENCRYPTED KEYS
    // =========================================================================

    pub fn private_key(&self, private_key_hex: &str, options: IdentityOptions) -> WalletResult<Signatory> {
        let identity = Identity::from_private_key_hex(private_key_hex, &self.network)?;
        debug!(network = %self.network.id, "factory: private key signatory");
        Ok(Signatory::new(SignatoryVariant::PrivateKey(
            PrivateKeySignatory::new(&identity, options),
        )))
    }

    /// Decrypt a BIP38 key and import it as a WIF signatory on this network.
    ///
    /// Blocks for the duration of the scrypt step.
    pub fn bip38(
        &self,
        encrypted: &str,
        passphrase: &str,
        options: IdentityOptions,
    ) -> WalletResult<Signatory> {
        let decrypted = self.bip38.decrypt(encrypted, passphrase)?;
        let identity =
            Identity::from_private_key(decrypted.private_key, &self.network, decrypted.compressed)?;
        let wif = Zeroizing::new(identity.wif(&self.network));
        debug!(network = %self.network.id, "factory: BIP38 key decrypted");
        self.wif(&wif, options)
    }

    // =========================================================================
    // KEYLESS
    // =========================================================================

    pub fn ledger(&self, path: &str, options: IdentityOptions) -> WalletResult<Signatory> {
        let ledger = LedgerSignatory::new(path, options)?;
        debug!(path, "factory: ledger signatory");
        Ok(Signatory::new(SignatoryVariant::Ledger(ledger)))
    }

    /// Address comes from the asset's aggregate public key.
    pub fn multi_signature(&self, asset: MultiSignatureAsset) -> WalletResult<Signatory> {
        let signatory = MultiSignatureSignatory::from_asset(asset, self.network.pub_key_hash)?;
        debug!(
            network = %self.network.id,
            min = signatory.asset().min(),
            participants = signatory.asset().participants(),
            "factory: multi-signature signatory"
        );
        Ok(Signatory::new(SignatoryVariant::MultiSignature(signatory)))
    }
}

impl Default for SignatoryFactory {
    fn default() -> Self {
        Self::new(NetworkParams::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::bip38::ScryptParams;
    use crate::error::{Bip38Error, EncodingError, WalletError};

    const SECRET: &str = "this is a top secret passphrase";
    const SECOND_SECRET: &str = "this is the confirmation secret";
    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const ARK_WIF: &str = "SGq4xLgZKCGxs7bjmwnBrWcT4C1ADFEermj846KC97FSv1WFD1dA";
    const SECOND_ARK_WIF: &str = "S9hZQ1QGHFSMqEsoGr7ZWvvrL23kAniRzeCcr5q1ViAr3RSTXKWm";

    fn factory() -> SignatoryFactory {
        SignatoryFactory::new(NetworkParams::ark_mainnet())
    }

    #[test]
    fn test_secret() {
        let signatory = factory().secret(SECRET, IdentityOptions::default()).unwrap();
        assert!(signatory.acts_with_secret());
        assert_eq!(signatory.signing_key().unwrap(), SECRET);
        assert_eq!(signatory.address().unwrap(), "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus");
        assert_eq!(
            signatory.public_key().unwrap(),
            "034151a3ec46b5670a682b0a63394f863587d1bc97483b1b6c70eb58e7f0aed192"
        );
        assert!(signatory.confirm_key().is_err());
    }

    #[test]
    fn test_confirmation_secret() {
        let signatory = factory()
            .confirmation_secret(SECRET, SECOND_SECRET, IdentityOptions::default())
            .unwrap();
        assert!(signatory.acts_with_confirmation_secret());
        assert_eq!(signatory.confirm_key().unwrap(), SECOND_SECRET);
        assert_eq!(signatory.address().unwrap(), "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus");
    }

    #[test]
    fn test_mnemonic_bip39() {
        let signatory = factory().mnemonic(TEST_MNEMONIC, IdentityOptions::bip39()).unwrap();
        assert!(signatory.acts_with_mnemonic());
        assert_eq!(signatory.address().unwrap(), "AJiLnzhUfSGFeKzfXndhFYsRR1T36QmbXx");
        assert!(signatory.options().unwrap().bip39);
    }

    #[test]
    fn test_confirmation_mnemonic_rejects_bad_confirmation() {
        let result = factory().confirmation_mnemonic(TEST_MNEMONIC, "not a mnemonic", IdentityOptions::bip39());
        assert!(matches!(result, Err(WalletError::Mnemonic(_))));
    }

    #[test]
    fn test_wif() {
        let signatory = factory().wif(ARK_WIF, IdentityOptions::default()).unwrap();
        assert!(signatory.acts_with_wif());
        assert_eq!(signatory.signing_key().unwrap(), ARK_WIF);
        assert_eq!(signatory.address().unwrap(), "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus");
    }

    #[test]
    fn test_confirmation_wif() {
        let signatory = factory()
            .confirmation_wif(ARK_WIF, SECOND_ARK_WIF, IdentityOptions::default())
            .unwrap();
        assert!(signatory.acts_with_confirmation_wif());
        assert_eq!(signatory.confirm_key().unwrap(), SECOND_ARK_WIF);

        let bad = factory().confirmation_wif(ARK_WIF, "nope", IdentityOptions::default());
        assert!(matches!(bad, Err(WalletError::Encoding(_))));
    }

    #[test]
    fn test_private_key() {
        let signatory = factory()
            .private_key(
                "d8839c2432bfd0a67ef10a804ba991eabba19f154a3d707917681d45822a5712",
                IdentityOptions::default(),
            )
            .unwrap();
        assert!(signatory.acts_with_private_key());
        assert_eq!(signatory.address().unwrap(), "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus");
        assert_eq!(signatory.signing_key().unwrap(), signatory.private_key().unwrap());
    }

    #[test]
    fn test_bip38() {
        let codec = Bip38::with_params(ScryptParams::light());
        let encrypted = codec
            .encrypt(
                "d8839c2432bfd0a67ef10a804ba991eabba19f154a3d707917681d45822a5712",
                "bip38 password",
                true,
            )
            .unwrap();

        let factory = factory().with_bip38(codec);
        let signatory = factory
            .bip38(&encrypted, "bip38 password", IdentityOptions::default())
            .unwrap();
        assert!(signatory.acts_with_wif());
        assert_eq!(signatory.signing_key().unwrap(), ARK_WIF);
        assert_eq!(signatory.address().unwrap(), "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus");

        assert_eq!(
            factory.bip38(&encrypted, "wrong", IdentityOptions::default()).unwrap_err(),
            WalletError::Bip38(Bip38Error::PassphraseMismatch)
        );
    }

    #[test]
    fn test_bip38_keeps_compression_and_network_version() {
        let codec = Bip38::with_params(ScryptParams::light());
        let encrypted = codec
            .encrypt(
                "d8839c2432bfd0a67ef10a804ba991eabba19f154a3d707917681d45822a5712",
                "bip38 password",
                false,
            )
            .unwrap();

        let signatory = factory()
            .with_bip38(codec)
            .bip38(&encrypted, "bip38 password", IdentityOptions::default())
            .unwrap();
        let wif = Wif::decode(signatory.signing_key().unwrap()).unwrap();
        assert_eq!(wif.version, 170);
        assert!(!wif.compressed);
        assert_ne!(signatory.address().unwrap(), "Af7MWxfn1435x89m7JwTZ5Nd4KDP4hHWus");
    }

    #[test]
    fn test_ledger() {
        let signatory = factory().ledger("m/44'/111'/0'/0/0", IdentityOptions::default()).unwrap();
        assert!(signatory.acts_with_ledger());
        assert!(factory().ledger("44/111", IdentityOptions::default()).is_err());
    }

    #[test]
    fn test_multi_signature() {
        let asset = MultiSignatureAsset::new(
            2,
            vec![
                "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798".to_string(),
                "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5".to_string(),
                "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9".to_string(),
            ],
        )
        .unwrap();
        let signatory = factory().multi_signature(asset).unwrap();
        assert!(signatory.acts_with_multi_signature());
        assert_eq!(signatory.address().unwrap(), "AXBTkLr5aLMEtmwRH9nnMKqArGJYhfDd7q");
        assert!(signatory.signing_key().is_err());
    }

    #[test]
    fn test_invalid_wif() {
        assert!(matches!(
            factory().wif("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDe", IdentityOptions::default()),
            Err(WalletError::Encoding(EncodingError::InvalidChecksum))
        ));
    }
}
