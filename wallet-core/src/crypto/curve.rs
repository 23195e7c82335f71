// wallet-core/src/crypto/curve.rs
//
// Named elliptic curve domain parameters
//
// Only secp256k1 is registered. Point arithmetic itself is delegated to `k256`;
// these constants gate which scalars we hand it.

use crate::error::{CryptoError, WalletError, WalletResult};
use k256::elliptic_curve::bigint::U256;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;

/// Short Weierstrass curve `y^2 = x^3 + ax + b (mod p)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    pub name: &'static str,
    /// Field prime
    pub p: U256,
    pub a: U256,
    pub b: U256,
    /// Generator point
    pub gx: U256,
    pub gy: U256,
    /// Group order
    pub n: U256,
    /// Cofactor
    pub h: u8,
}

/// secp256k1 (SEC 2, section 2.4.1)
pub const SECP256K1: CurveParams = CurveParams {
    name: "secp256k1",
    p: U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
    a: U256::ZERO,
    b: U256::from_u8(7),
    gx: U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    gy: U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    n: U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    h: 1,
};

const NAMED_CURVES: &[&CurveParams] = &[&SECP256K1];

impl CurveParams {
    /// Look up a registered curve by name.
    pub fn by_name(name: &str) -> Option<&'static CurveParams> {
        NAMED_CURVES
            .iter()
            .copied()
            .find(|curve| curve.name.eq_ignore_ascii_case(name))
    }

    /// `true` when `0 < scalar < n`.
    pub fn is_valid_scalar(&self, scalar: &[u8; 32]) -> bool {
        let k = U256::from_be_slice(scalar);
        k != U256::ZERO && k < self.n
    }

    /// `G * scalar`, SEC1-encoded (33 bytes compressed, 65 uncompressed).
    pub fn multiply_generator(&self, scalar: &[u8; 32], compressed: bool) -> WalletResult<Vec<u8>> {
        if !self.is_valid_scalar(scalar) {
            return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "scalar out of range for {}",
                self.name
            ))));
        }

        let secret = SecretKey::from_slice(scalar).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid {} private key: {}",
                self.name, e
            )))
        })?;

        let point = secret.public_key().to_encoded_point(compressed);
        Ok(point.as_bytes().to_vec())
    }
}
