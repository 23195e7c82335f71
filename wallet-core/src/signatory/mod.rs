// wallet-core/src/signatory/mod.rs

//! Signatory Module
//!
//! A [`Signatory`] hides which kind of credential signs a transaction:
//!
//! - **Variants**: a closed [`SignatoryVariant`] sum type, one case per credential kind.
//! - **Facade**: uniform accessors failing with `ForbiddenMethodCall` when a
//!   field does not exist for the wrapped variant, plus `acts_with_*` capability checks.
//! - **Factory**: [`SignatoryFactory`] turns raw credentials into signatories for a network.
//! - **Multi-signature**: [`MultiSignatureAsset`] describes an m-of-n participant set.

pub mod facade;
pub mod factory;
pub mod multi_signature;
pub mod variants;

pub use crate::crypto::identity::{DerivationLevels, IdentityOptions};
pub use facade::Signatory;
pub use factory::SignatoryFactory;
pub use multi_signature::MultiSignatureAsset;
pub use variants::{
    ConfirmationSignatory, IdentitySignatory, LedgerSignatory, MultiSignatureSignatory,
    PrivateKeySignatory, SignatoryVariant,
};
