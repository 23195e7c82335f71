// wallet-core/src/signatory/facade.rs
//
// Signatory facade: one variant + an optional facade-level multi-signature asset
//
// Accessors that do not apply to the wrapped variant return
// `SignatoryError::ForbiddenMethodCall`. Callers are expected to check with
// `acts_with_*` first; the error marks a programming mistake, not bad input.

use super::multi_signature::MultiSignatureAsset;
use super::variants::SignatoryVariant;
use crate::crypto::identity::IdentityOptions;
use crate::error::{WalletError, WalletResult};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signatory {
    variant: SignatoryVariant,
    multi_signature: Option<MultiSignatureAsset>,
}

impl Signatory {
    pub fn new(variant: SignatoryVariant) -> Self {
        trace!(variant = variant.name(), "signatory: constructed");
        Self {
            variant,
            multi_signature: None,
        }
    }

    /// Attach the multi-signature asset this signatory takes part in.
    pub fn with_multi_signature(mut self, asset: MultiSignatureAsset) -> Self {
        self.multi_signature = Some(asset);
        self
    }

    #[inline]
    pub fn variant(&self) -> &SignatoryVariant {
        &self.variant
    }

    #[inline]
    pub fn variant_name(&self) -> &'static str {
        self.variant.name()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Mnemonic, secret or WIF text; private key hex for `PrivateKey`; path for `Ledger`.
    pub fn signing_key(&self) -> WalletResult<&str> {
        match &self.variant {
            SignatoryVariant::PrivateKey(signatory) => Ok(signatory.private_key()),
            SignatoryVariant::Ledger(signatory) => Ok(signatory.path()),
            SignatoryVariant::MultiSignature(_) => Err(self.forbidden("signingKey")),
            other => other
                .identity()
                .map(|identity| identity.signing_key())
                .ok_or_else(|| self.forbidden("signingKey")),
        }
    }

    pub fn confirm_key(&self) -> WalletResult<&str> {
        match &self.variant {
            SignatoryVariant::ConfirmationMnemonic(signatory)
            | SignatoryVariant::ConfirmationSecret(signatory)
            | SignatoryVariant::ConfirmationWif(signatory) => Ok(signatory.confirm_key()),
            _ => Err(self.forbidden("confirmKey")),
        }
    }

    pub fn address(&self) -> WalletResult<&str> {
        match &self.variant {
            SignatoryVariant::PrivateKey(signatory) => Ok(signatory.address()),
            SignatoryVariant::MultiSignature(signatory) => Ok(signatory.address()),
            SignatoryVariant::Ledger(_) => Err(self.forbidden("address")),
            other => other
                .identity()
                .map(|identity| identity.address())
                .ok_or_else(|| self.forbidden("address")),
        }
    }

    pub fn public_key(&self) -> WalletResult<&str> {
        match &self.variant {
            SignatoryVariant::PrivateKey(signatory) => Ok(signatory.public_key()),
            SignatoryVariant::Ledger(_) | SignatoryVariant::MultiSignature(_) => {
                Err(self.forbidden("publicKey"))
            }
            other => other
                .identity()
                .map(|identity| identity.public_key())
                .ok_or_else(|| self.forbidden("publicKey")),
        }
    }

    pub fn private_key(&self) -> WalletResult<&str> {
        match &self.variant {
            SignatoryVariant::PrivateKey(signatory) => Ok(signatory.private_key()),
            SignatoryVariant::Ledger(_) | SignatoryVariant::MultiSignature(_) => {
                Err(self.forbidden("privateKey"))
            }
            other => other
                .identity()
                .map(|identity| identity.private_key())
                .ok_or_else(|| self.forbidden("privateKey")),
        }
    }

    pub fn options(&self) -> WalletResult<&IdentityOptions> {
        match &self.variant {
            SignatoryVariant::PrivateKey(signatory) => Ok(signatory.options()),
            SignatoryVariant::Ledger(signatory) => Ok(signatory.options()),
            SignatoryVariant::MultiSignature(_) => Err(self.forbidden("options")),
            other => other
                .identity()
                .map(|identity| identity.options())
                .ok_or_else(|| self.forbidden("options")),
        }
    }

    pub fn path(&self) -> WalletResult<&str> {
        match &self.variant {
            SignatoryVariant::Ledger(signatory) => Ok(signatory.path()),
            _ => Err(self.forbidden("path")),
        }
    }

    pub fn asset(&self) -> WalletResult<&MultiSignatureAsset> {
        match &self.variant {
            SignatoryVariant::MultiSignature(signatory) => Ok(signatory.asset()),
            _ => Err(self.forbidden("asset")),
        }
    }

    /// Facade-level asset, independent of the variant.
    #[inline]
    pub fn multi_signature(&self) -> Option<&MultiSignatureAsset> {
        self.multi_signature.as_ref()
    }

    #[inline]
    pub fn has_multi_signature(&self) -> bool {
        self.multi_signature.is_some()
    }

    // =========================================================================
    // CAPABILITY CHECKS
    // =========================================================================

    #[inline]
    pub fn acts_with_mnemonic(&self) -> bool {
        matches!(self.variant, SignatoryVariant::Mnemonic(_))
    }

    #[inline]
    pub fn acts_with_confirmation_mnemonic(&self) -> bool {
        matches!(self.variant, SignatoryVariant::ConfirmationMnemonic(_))
    }

    #[inline]
    pub fn acts_with_wif(&self) -> bool {
        matches!(self.variant, SignatoryVariant::Wif(_))
    }

    #[inline]
    pub fn acts_with_confirmation_wif(&self) -> bool {
        matches!(self.variant, SignatoryVariant::ConfirmationWif(_))
    }

    #[inline]
    pub fn acts_with_private_key(&self) -> bool {
        matches!(self.variant, SignatoryVariant::PrivateKey(_))
    }

    #[inline]
    pub fn acts_with_multi_signature(&self) -> bool {
        matches!(self.variant, SignatoryVariant::MultiSignature(_))
    }

    #[inline]
    pub fn acts_with_ledger(&self) -> bool {
        matches!(self.variant, SignatoryVariant::Ledger(_))
    }

    #[inline]
    pub fn acts_with_secret(&self) -> bool {
        matches!(self.variant, SignatoryVariant::Secret(_))
    }

    #[inline]
    pub fn acts_with_confirmation_secret(&self) -> bool {
        matches!(self.variant, SignatoryVariant::ConfirmationSecret(_))
    }

    fn forbidden(&self, method: &'static str) -> WalletError {
        WalletError::forbidden(method, self.variant.name())
    }
}

impl From<SignatoryVariant> for Signatory {
    fn from(variant: SignatoryVariant) -> Self {
        Self::new(variant)
    }
}

// =============================================================================
// TESTS
// =============================================================================
