//! GOST R 34.10-2012 256-bit signature scheme over the fixed prime curve
//!
//! The wire formats are plain hex strings: a private key is 64 hex
//! characters (a big-endian scalar), a public key is 128 hex characters
//! `Qx || Qy`, and a certificate is 128 uppercase hex characters
//! `s || r`, each half zero-padded to 64 digits.
//!
//! Verification deliberately computes `v = e^-1 mod q` instead of the
//! standard `s^-1 mod q`: certificates in the wild were issued and
//! checked with that variant, and correcting it would invalidate them.
//!
//! The nonce generator is injectable. The default, kept for
//! compatibility with the original issuance tool, is a deterministic
//! generator seeded from a wall-clock value; callers with stronger
//! requirements pass their own `RngCore`.

use num_bigint::{BigInt, RandBigInt};
use num_traits::{Num, One, Zero};
use rand::rngs::StdRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};
use zeroize::Zeroize;

use licrypt_algorithms::bigint::{modinv, modulus};
use licrypt_algorithms::ec::curve;
use licrypt_algorithms::ec::CurvePoint;
use licrypt_algorithms::{Gost94, HashFunction};
use licrypt_api::{Error, Result, Signature};

/// Length of a private key in hex characters (256-bit scalar)
pub const PRIVATE_KEY_HEX_LEN: usize = 64;
/// Length of a public key in hex characters (`Qx || Qy`)
pub const PUBLIC_KEY_HEX_LEN: usize = 128;
/// Length of a certificate in hex characters (`s || r`)
pub const SIGNATURE_HEX_LEN: usize = 128;

/// A validated private-key scalar in hex form
#[derive(Clone, Zeroize)]
pub struct SecretKey(String);

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl SecretKey {
    /// Parse and validate a 64-hex-character private key
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        parse_hex_scalar(hex_str, PRIVATE_KEY_HEX_LEN, "private key")?;
        Ok(SecretKey(hex_str.to_string()))
    }

    /// The key as its hex wire form
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

/// A validated public key in hex form, `Qx || Qy`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    /// Parse and validate a 128-hex-character public key
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        require_hex(hex_str, PUBLIC_KEY_HEX_LEN, "public key")?;
        Ok(PublicKey(hex_str.to_string()))
    }

    /// The key as its hex wire form
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

/// A freshly generated key pair in wire form
#[derive(Clone)]
pub struct KeyPair {
    /// 64 hex characters, big-endian scalar d
    pub private_key: SecretKey,
    /// 128 hex characters, `Qx || Qy` of Q = d*P
    pub public_key: PublicKey,
}

/// Marker type implementing [`licrypt_api::Signature`] for this scheme
pub struct Gost3410;

/// Reject strings that are not exactly `len` hex characters
fn require_hex(s: &str, len: usize, what: &'static str) -> Result<()> {
    if s.len() != len {
        return Err(Error::InvalidParameter {
            context: what,
            message: format!("expected {} hex characters, got {}", len, s.len()),
        });
    }
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidParameter {
            context: what,
            message: "non-hex character".to_string(),
        });
    }
    Ok(())
}

/// Parse a fixed-width hex scalar
fn parse_hex_scalar(s: &str, len: usize, what: &'static str) -> Result<BigInt> {
    require_hex(s, len, what)?;
    BigInt::from_str_radix(s, 16).map_err(|_| Error::InvalidParameter {
        context: what,
        message: "unparseable hex scalar".to_string(),
    })
}

/// Fixed-width wire form of a scalar: exactly 64 uppercase hex digits
fn to_hex64(n: &BigInt) -> String {
    format!("{:064X}", n)
}

/// Message digest interpreted as a big-endian integer through its
/// uppercase hex form, mirroring the issuance tool
fn message_scalar(message: &[u8]) -> Result<BigInt> {
    let digest = Gost94::digest(message).map_err(Error::from)?;
    let hex_upper = hex::encode_upper(digest);
    BigInt::from_str_radix(&hex_upper, 16).map_err(|_| Error::InvalidParameter {
        context: "message digest",
        message: "digest is not valid hex".to_string(),
    })
}

/// Compatibility-mode nonce source: a deterministic generator seeded from
/// the wall clock, as the original issuance tool did. Not suitable when
/// the caller needs unpredictable nonces; inject an OS RNG instead.
fn compat_rng() -> StdRng {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    StdRng::seed_from_u64(seed)
}

/// Draw a 256-bit value and reduce it modulo q, as the issuance tool
/// draws its nonces; a zero residue is not re-rolled.
fn random_mod_q<R: RngCore + ?Sized>(rng: &mut R, q: &BigInt) -> BigInt {
    let raw: BigInt = rng.gen_biguint(256).into();
    modulus(&raw, q)
}

/// Generate a key pair with the supplied RNG: d in [1, q), Q = d*P
pub fn generate_key_pair_with_rng<R: RngCore + ?Sized>(rng: &mut R) -> Result<KeyPair> {
    let c = curve();
    let d = rng.gen_bigint_range(&BigInt::one(), &c.q);
    let q_point = c.generator().scalar_mul(&d).map_err(Error::from)?;

    Ok(KeyPair {
        private_key: SecretKey(to_hex64(&d)),
        public_key: PublicKey(format!(
            "{}{}",
            to_hex64(q_point.x()),
            to_hex64(q_point.y())
        )),
    })
}

/// Generate a key pair with the compatibility-mode RNG
pub fn generate_key_pair() -> Result<KeyPair> {
    generate_key_pair_with_rng(&mut compat_rng())
}

/// Sign `message` with the private scalar, drawing the nonce from `rng`.
///
/// Returns the 128-hex-character certificate `s || r`.
pub fn sign_message_with_rng<R: RngCore + ?Sized>(
    rng: &mut R,
    message: &str,
    private_key_hex: &str,
) -> Result<String> {
    let c = curve();
    let d = parse_hex_scalar(private_key_hex, PRIVATE_KEY_HEX_LEN, "private key")?;

    let k = random_mod_q(rng, &c.q);

    let mut e = modulus(&message_scalar(message.as_bytes())?, &c.q);
    if e.is_zero() {
        e = BigInt::one();
    }

    let big_c = c.generator().scalar_mul(&k).map_err(Error::from)?;
    let r = modulus(big_c.x(), &c.q);
    let s = modulus(&(&r * &d + &k * &e), &c.q);

    Ok(format!("{}{}", to_hex64(&s), to_hex64(&r)))
}

/// Sign `message` with the compatibility-mode nonce source
pub fn sign_message(message: &str, private_key_hex: &str) -> Result<String> {
    sign_message_with_rng(&mut compat_rng(), message, private_key_hex)
}

/// Check a certificate against `message` and a public key.
///
/// Returns `Ok(false)` for a well-formed signature that does not match;
/// malformed inputs are errors.
pub fn check_sign(message: &str, signature_hex: &str, public_key_hex: &str) -> Result<bool> {
    let c = curve();

    require_hex(signature_hex, SIGNATURE_HEX_LEN, "signature")?;
    require_hex(public_key_hex, PUBLIC_KEY_HEX_LEN, "public key")?;

    let s = parse_hex_scalar(&signature_hex[..64], 64, "signature s")?;
    let r = parse_hex_scalar(&signature_hex[64..], 64, "signature r")?;
    let qx = parse_hex_scalar(&public_key_hex[..64], 64, "public key x")?;
    let qy = parse_hex_scalar(&public_key_hex[64..], 64, "public key y")?;

    for (name, value) in [("signature s", &s), ("signature r", &r)] {
        if value < &BigInt::one() || value >= &c.q {
            return Err(Error::InvalidParameter {
                context: name,
                message: "scalar outside [1, q)".to_string(),
            });
        }
    }

    let q_point = CurvePoint::new(qx, qy, c.a.clone(), c.p.clone());
    if !q_point.is_on_curve(&c.b) {
        return Err(Error::InvalidParameter {
            context: "public key",
            message: "point is not on the curve".to_string(),
        });
    }

    // The digest is used unreduced here, and v inverts e rather than s;
    // existing certificates depend on both.
    let e = message_scalar(message.as_bytes())?;
    let v = modinv(&e, &c.q).map_err(Error::from)?;

    let z1 = modulus(&(&s * &v), &c.q);
    let z2 = modulus(&(-&r * &v), &c.q);

    let n_c = c
        .generator()
        .scalar_mul(&z1)
        .map_err(Error::from)?
        .add(&q_point.scalar_mul(&z2).map_err(Error::from)?)
        .map_err(Error::from)?;

    if n_c.is_neutral() {
        return Ok(false);
    }

    Ok(modulus(n_c.x(), &c.q) == r)
}

impl Signature for Gost3410 {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type SignatureData = String;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        "GOST-R-34.10-2012-256"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        generate_key_pair_with_rng(rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.private_key.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        let message = core::str::from_utf8(message).map_err(|_| Error::InvalidParameter {
            context: "message",
            message: "device signatures are UTF-8 strings".to_string(),
        })?;
        sign_message(message, secret_key.as_hex())
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()> {
        let message = core::str::from_utf8(message).map_err(|_| Error::InvalidParameter {
            context: "message",
            message: "device signatures are UTF-8 strings".to_string(),
        })?;
        if check_sign(message, signature, public_key.as_hex())? {
            Ok(())
        } else {
            Err(Error::VerifyFailed {
                context: "GOST-R-34.10-2012-256",
            })
        }
    }
}

#[cfg(test)]
mod tests;
