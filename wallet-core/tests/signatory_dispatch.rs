//! Every variant answers exactly one capability check and refuses the
//! accessors it has no data for.

mod common;

use common::*;
use wallet_signatory::crypto::bip38::{Bip38, ScryptParams};
use wallet_signatory::error::{SignatoryError, WalletError};
use wallet_signatory::signatory::{IdentityOptions, MultiSignatureAsset, Signatory, SignatoryFactory};
use wallet_signatory::NetworkParams;

const CAPABILITIES: [&str; 9] = [
    "Mnemonic",
    "ConfirmationMnemonic",
    "Secret",
    "ConfirmationSecret",
    "WIF",
    "ConfirmationWIF",
    "PrivateKey",
    "Ledger",
    "MultiSignature",
];

fn capabilities(signatory: &Signatory) -> [bool; 9] {
    [
        signatory.acts_with_mnemonic(),
        signatory.acts_with_confirmation_mnemonic(),
        signatory.acts_with_secret(),
        signatory.acts_with_confirmation_secret(),
        signatory.acts_with_wif(),
        signatory.acts_with_confirmation_wif(),
        signatory.acts_with_private_key(),
        signatory.acts_with_ledger(),
        signatory.acts_with_multi_signature(),
    ]
}

fn asset() -> MultiSignatureAsset {
    MultiSignatureAsset::new(
        2,
        vec![
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798".to_string(),
            "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5".to_string(),
            "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9".to_string(),
        ],
    )
    .unwrap()
}

fn all_signatories() -> Vec<Signatory> {
    let factory = SignatoryFactory::new(NetworkParams::ark_mainnet());
    vec![
        factory.mnemonic(MNEMONIC, IdentityOptions::bip39()).unwrap(),
        factory
            .confirmation_mnemonic(MNEMONIC, SECOND_MNEMONIC, IdentityOptions::bip39())
            .unwrap(),
        factory.secret(SECRET, IdentityOptions::default()).unwrap(),
        factory.confirmation_secret(SECRET, SECOND_SECRET, IdentityOptions::default()).unwrap(),
        factory.wif(ARK_WIF, IdentityOptions::default()).unwrap(),
        factory.confirmation_wif(ARK_WIF, SECOND_ARK_WIF, IdentityOptions::default()).unwrap(),
        factory.private_key(SECRET_PRIVATE_KEY, IdentityOptions::default()).unwrap(),
        factory.ledger("m/44'/111'/0'/0/0", IdentityOptions::default()).unwrap(),
        factory.multi_signature(asset()).unwrap(),
    ]
}

fn assert_forbidden<T: std::fmt::Debug>(result: Result<T, WalletError>, method: &str, variant: &str) {
    match result {
        Err(WalletError::Signatory(SignatoryError::ForbiddenMethodCall {
            method: m,
            variant: v,
        })) => {
            assert_eq!(m, method);
            assert_eq!(v, variant);
        }
        other => panic!("{}::{} should be forbidden, got {:?}", variant, method, other),
    }
}

#[test]
fn test_exactly_one_capability_per_variant() {
    common::init_logger();

    for (index, signatory) in all_signatories().iter().enumerate() {
        let answers = capabilities(signatory);
        let expected: Vec<bool> = (0..CAPABILITIES.len()).map(|position| position == index).collect();
        assert_eq!(answers.to_vec(), expected, "{}", CAPABILITIES[index]);
        assert_eq!(signatory.variant_name(), CAPABILITIES[index]);
    }
}

#[test]
fn test_accessor_matrix() {
    for signatory in all_signatories() {
        let name = signatory.variant_name();
        let identity_bearing = !signatory.acts_with_ledger() && !signatory.acts_with_multi_signature();
        let confirmation = signatory.acts_with_confirmation_mnemonic()
            || signatory.acts_with_confirmation_secret()
            || signatory.acts_with_confirmation_wif();

        if identity_bearing {
            assert!(signatory.public_key().is_ok(), "{}", name);
            assert!(signatory.private_key().is_ok(), "{}", name);
            assert!(signatory.address().is_ok(), "{}", name);
        } else {
            assert_forbidden(signatory.public_key(), "publicKey", name);
            assert_forbidden(signatory.private_key(), "privateKey", name);
        }

        if confirmation {
            assert!(signatory.confirm_key().is_ok(), "{}", name);
        } else {
            assert_forbidden(signatory.confirm_key(), "confirmKey", name);
        }

        if signatory.acts_with_ledger() {
            assert!(signatory.path().is_ok());
            assert_forbidden(signatory.address(), "address", name);
        } else {
            assert_forbidden(signatory.path(), "path", name);
        }

        if signatory.acts_with_multi_signature() {
            assert!(signatory.asset().is_ok());
            assert!(signatory.address().is_ok());
            assert_forbidden(signatory.signing_key(), "signingKey", name);
            assert_forbidden(signatory.options(), "options", name);
        } else {
            assert_forbidden(signatory.asset(), "asset", name);
            assert!(signatory.signing_key().is_ok(), "{}", name);
            assert!(signatory.options().is_ok(), "{}", name);
        }

        // Facade-level asset is always queryable
        assert!(!signatory.has_multi_signature());
        assert!(signatory.multi_signature().is_none());
    }
}

#[test]
fn test_secret_wif_and_private_key_agree() {
    let signatories = all_signatories();
    // Secret, ConfirmationSecret, WIF, ConfirmationWIF and PrivateKey share one key
    for signatory in &signatories[2..7] {
        assert_eq!(signatory.address().unwrap(), SECRET_ADDRESS, "{}", signatory.variant_name());
        assert_eq!(signatory.public_key().unwrap(), SECRET_PUBLIC_KEY);
        assert_eq!(signatory.private_key().unwrap(), SECRET_PRIVATE_KEY);
    }
}

#[test]
fn test_multi_signature_scenario() {
    let signatory = SignatoryFactory::new(NetworkParams::ark_mainnet())
        .multi_signature(asset())
        .unwrap();

    assert!(signatory.acts_with_multi_signature());
    assert_forbidden(signatory.signing_key(), "signingKey", "MultiSignature");
    assert_eq!(signatory.address().unwrap(), asset().address(23).unwrap());
}

#[test]
fn test_with_multi_signature_on_any_variant() {
    for signatory in all_signatories() {
        let signatory = signatory.with_multi_signature(asset());
        assert!(signatory.has_multi_signature());
        assert_eq!(signatory.multi_signature(), Some(&asset()));
    }
}

#[test]
fn test_bip38_signatory_matches_wif_signatory() {
    let codec = Bip38::with_params(ScryptParams::light());
    let encrypted = codec.encrypt(SECRET_PRIVATE_KEY, "hunter2", true).unwrap();
    let factory = SignatoryFactory::new(NetworkParams::ark_mainnet()).with_bip38(codec);

    let from_bip38 = factory.bip38(&encrypted, "hunter2", IdentityOptions::default()).unwrap();
    let from_wif = factory.wif(ARK_WIF, IdentityOptions::default()).unwrap();
    assert_eq!(from_bip38, from_wif);
}
