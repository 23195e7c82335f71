// wallet-core/src/signatory/multi_signature.rs
//
// m-of-n multi-signature participant set
//
// The aggregate public key (and so the address) of an asset is
//   P = pub(sha256(hex(min))) + P_1 + ... + P_n
// which commits to both the threshold and every participant.

use crate::crypto::hash::sha256;
use crate::crypto::keys::{address_from_public_key, parse_public_key, PrivateKey};
use crate::error::{CryptoError, SignatoryError, WalletError, WalletResult};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{AffinePoint, PublicKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound on participants accepted by multi-signature registrations
pub const MAX_PARTICIPANTS: usize = 16;

const COMPRESSED_KEY_LEN: usize = 33;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSignatureAsset {
    min: u8,
    public_keys: Vec<String>,
}

impl MultiSignatureAsset {
    /// Validated asset.
    ///
    /// # Errors
    /// `InvalidMultiSignature` unless `1 <= min <= public_keys.len() <= 16`,
    /// every key is a compressed secp256k1 point and no key repeats.
    pub fn new(min: u8, public_keys: Vec<String>) -> WalletResult<Self> {
        let asset = Self {
            min,
            public_keys: public_keys.into_iter().map(|key| key.to_lowercase()).collect(),
        };
        asset.validate()?;
        Ok(asset)
    }

    #[inline]
    pub fn min(&self) -> u8 {
        self.min
    }

    #[inline]
    pub fn public_keys(&self) -> &[String] {
        &self.public_keys
    }

    #[inline]
    pub fn participants(&self) -> usize {
        self.public_keys.len()
    }

    /// Re-check the invariants, for assets that came in through serde.
    pub fn validate(&self) -> WalletResult<()> {
        let count = self.public_keys.len();
        if count == 0 || count > MAX_PARTICIPANTS {
            return Err(invalid(format!(
                "expected 1 to {} participants, got {}",
                MAX_PARTICIPANTS, count
            )));
        }
        if self.min == 0 || usize::from(self.min) > count {
            return Err(invalid(format!(
                "min must be between 1 and {}, got {}",
                count, self.min
            )));
        }

        let mut seen = HashSet::with_capacity(count);
        for key in &self.public_keys {
            let bytes = parse_public_key(key)
                .map_err(|_| invalid(format!("invalid public key {}", key)))?;
            if bytes.len() != COMPRESSED_KEY_LEN {
                return Err(invalid(format!("public key {} is not compressed", key)));
            }
            if !seen.insert(key.to_lowercase()) {
                return Err(invalid(format!("duplicate public key {}", key)));
            }
        }
        Ok(())
    }

    /// Aggregate public key, compressed SEC1 hex.
    pub fn public_key(&self) -> WalletResult<String> {
        self.validate()?;

        let min_key = PrivateKey::from_bytes(sha256(format!("{:02x}", self.min)));
        let mut aggregate = decode_point(&min_key.public_key(true)?)?.to_projective();
        for key in &self.public_keys {
            aggregate += decode_point(&parse_public_key(key)?)?.to_projective();
        }

        let combined = PublicKey::from_affine(AffinePoint::from(aggregate)).map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidPublicKey(
                "aggregate key is the point at infinity".to_string(),
            ))
        })?;
        Ok(hex::encode(combined.to_encoded_point(true).as_bytes()))
    }

    /// Legacy address of the aggregate key.
    pub fn address(&self, version: u8) -> WalletResult<String> {
        let public_key = hex::decode(self.public_key()?)
            .map_err(|e| WalletError::Crypto(CryptoError::InvalidPublicKey(e.to_string())))?;
        Ok(address_from_public_key(&public_key, version))
    }
}

fn decode_point(bytes: &[u8]) -> WalletResult<PublicKey> {
    PublicKey::from_sec1_bytes(bytes)
        .map_err(|e| WalletError::Crypto(CryptoError::InvalidPublicKey(e.to_string())))
}

fn invalid(reason: String) -> WalletError {
    WalletError::Signatory(SignatoryError::InvalidMultiSignature(reason))
}

// =============================================================================
// TESTS
// =============================================================================
