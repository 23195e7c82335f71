// wallet-core/src/signatory/variants.rs
//
// The closed set of credentials a transaction can be signed with
//
// ┌──────────────────────┬─────────────┬─────────┬────────────┬──────┬───────┐
// │ Variant              │ signing key │ confirm │ identity   │ path │ asset │
// ├──────────────────────┼─────────────┼─────────┼────────────┼──────┼───────┤
// │ Mnemonic             │ mnemonic    │         │ yes        │      │       │
// │ ConfirmationMnemonic │ mnemonic    │ yes     │ yes        │      │       │
// │ Secret               │ secret      │         │ yes        │      │       │
// │ ConfirmationSecret   │ secret      │ yes     │ yes        │      │       │
// │ WIF                  │ WIF         │         │ yes        │      │       │
// │ ConfirmationWIF      │ WIF         │ yes     │ yes        │      │       │
// │ PrivateKey           │ private key │         │ yes        │      │       │
// │ Ledger               │ path        │         │            │ yes  │       │
// │ MultiSignature       │             │         │ address    │      │ yes   │
// └──────────────────────┴─────────────┴─────────┴────────────┴──────┴───────┘

use super::multi_signature::MultiSignatureAsset;
use crate::crypto::identity::{Identity, IdentityOptions};
use crate::crypto::key_deriver::Secp256k1Deriver;
use crate::error::WalletResult;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// VARIANT PAYLOADS
// =============================================================================

/// Mnemonic / secret / WIF signatory: the credential text plus the identity it yields.
///
/// The signing key is stored NFD-normalized so composed and decomposed input
/// compare equal.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct IdentitySignatory {
    signing_key: String,
    address: String,
    public_key: String,
    private_key: String,
    #[zeroize(skip)]
    options: IdentityOptions,
}

impl IdentitySignatory {
    pub fn new(signing_key: &str, identity: &Identity, options: IdentityOptions) -> Self {
        Self {
            signing_key: signing_key.nfd().collect(),
            address: identity.address.clone(),
            public_key: identity.public_key.clone(),
            private_key: identity.private_key_hex(),
            options,
        }
    }

    #[inline]
    pub fn signing_key(&self) -> &str {
        &self.signing_key
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    #[inline]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    #[inline]
    pub fn options(&self) -> &IdentityOptions {
        &self.options
    }
}

impl std::fmt::Debug for IdentitySignatory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentitySignatory")
            .field("signing_key", &"[REDACTED]")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("options", &self.options)
            .finish()
    }
}

/// Identity signatory plus the second secret that confirms it.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ConfirmationSignatory {
    identity: IdentitySignatory,
    confirm_key: String,
}

impl ConfirmationSignatory {
    pub fn new(identity: IdentitySignatory, confirm_key: &str) -> Self {
        Self {
            identity,
            confirm_key: confirm_key.nfd().collect(),
        }
    }

    #[inline]
    pub fn identity(&self) -> &IdentitySignatory {
        &self.identity
    }

    #[inline]
    pub fn confirm_key(&self) -> &str {
        &self.confirm_key
    }
}

impl std::fmt::Debug for ConfirmationSignatory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmationSignatory")
            .field("identity", &self.identity)
            .field("confirm_key", &"[REDACTED]")
            .finish()
    }
}

/// Raw private key signatory. No mnemonic-like text exists for it.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKeySignatory {
    address: String,
    public_key: String,
    private_key: String,
    #[zeroize(skip)]
    options: IdentityOptions,
}

impl PrivateKeySignatory {
    pub fn new(identity: &Identity, options: IdentityOptions) -> Self {
        Self {
            address: identity.address.clone(),
            public_key: identity.public_key.clone(),
            private_key: identity.private_key_hex(),
            options,
        }
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    #[inline]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    #[inline]
    pub fn options(&self) -> &IdentityOptions {
        &self.options
    }
}

impl std::fmt::Debug for PrivateKeySignatory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKeySignatory")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("options", &self.options)
            .finish()
    }
}

/// Hardware wallet: keys never leave the device, only the derivation path is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSignatory {
    path: String,
    options: IdentityOptions,
}

impl LedgerSignatory {
    /// # Errors
    /// `DerivationFailed` unless `path` is a BIP-32 path.
    pub fn new(path: &str, options: IdentityOptions) -> WalletResult<Self> {
        Secp256k1Deriver::parse_path(path)?;
        Ok(Self {
            path: path.to_string(),
            options,
        })
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn options(&self) -> &IdentityOptions {
        &self.options
    }
}

/// Participant in an m-of-n scheme. Holds no key material of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSignatureSignatory {
    asset: MultiSignatureAsset,
    address: String,
}

impl MultiSignatureSignatory {
    pub fn new(asset: MultiSignatureAsset, address: String) -> Self {
        Self { asset, address }
    }

    /// Address derived from the asset's aggregate key.
    pub fn from_asset(asset: MultiSignatureAsset, version: u8) -> WalletResult<Self> {
        let address = asset.address(version)?;
        Ok(Self { asset, address })
    }

    #[inline]
    pub fn asset(&self) -> &MultiSignatureAsset {
        &self.asset
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }
}

// =============================================================================
// SUM TYPE
// =============================================================================

/// One case per supported credential kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatoryVariant {
    Mnemonic(IdentitySignatory),
    ConfirmationMnemonic(ConfirmationSignatory),
    Secret(IdentitySignatory),
    ConfirmationSecret(ConfirmationSignatory),
    Wif(IdentitySignatory),
    ConfirmationWif(ConfirmationSignatory),
    PrivateKey(PrivateKeySignatory),
    Ledger(LedgerSignatory),
    MultiSignature(MultiSignatureSignatory),
}

impl SignatoryVariant {
    /// Stable name, used in error messages and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            SignatoryVariant::Mnemonic(_) => "Mnemonic",
            SignatoryVariant::ConfirmationMnemonic(_) => "ConfirmationMnemonic",
            SignatoryVariant::Secret(_) => "Secret",
            SignatoryVariant::ConfirmationSecret(_) => "ConfirmationSecret",
            SignatoryVariant::Wif(_) => "WIF",
            SignatoryVariant::ConfirmationWif(_) => "ConfirmationWIF",
            SignatoryVariant::PrivateKey(_) => "PrivateKey",
            SignatoryVariant::Ledger(_) => "Ledger",
            SignatoryVariant::MultiSignature(_) => "MultiSignature",
        }
    }

    /// Identity fields shared by the six mnemonic/secret/WIF cases.
    pub(crate) fn identity(&self) -> Option<&IdentitySignatory> {
        match self {
            SignatoryVariant::Mnemonic(identity)
            | SignatoryVariant::Secret(identity)
            | SignatoryVariant::Wif(identity) => Some(identity),
            SignatoryVariant::ConfirmationMnemonic(confirmation)
            | SignatoryVariant::ConfirmationSecret(confirmation)
            | SignatoryVariant::ConfirmationWif(confirmation) => Some(confirmation.identity()),
            SignatoryVariant::PrivateKey(_)
            | SignatoryVariant::Ledger(_)
            | SignatoryVariant::MultiSignature(_) => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
