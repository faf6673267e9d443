//! Sign-aware big-integer helpers
//!
//! Thin layer over `num-bigint` shared by the curve arithmetic and the
//! signer. The reduction is sign-aware: it always returns a residue in
//! `[0, m)`, also for negative operands, which is what the curve formulas
//! rely on when they subtract coordinates.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Reduce `x` modulo `m`, returning a value in `[0, m)`.
///
/// For negative `x` the result is `((x + m - m*floor(x/m)) mod m)`.
pub fn modulus(x: &BigInt, m: &BigInt) -> BigInt {
    if x.is_negative() {
        return (x + m - m * (x / m)) % m;
    }
    x % m
}

/// Extended Euclidean algorithm.
///
/// Returns `(d, x, y)` with `a*x + b*y = d` and `d = gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let mut a = a.clone();
    let mut b = b.clone();
    let (mut x, mut y);
    let mut x2 = BigInt::one();
    let mut x1 = BigInt::zero();
    let mut y2 = BigInt::zero();
    let mut y1 = BigInt::one();

    while b.is_positive() {
        let q = &a / &b;
        let r = &a - &q * &b;
        x = &x2 - &q * &x1;
        y = &y2 - &q * &y1;
        a = b;
        b = r;
        x2 = x1;
        x1 = x;
        y2 = y1;
        y1 = y;
    }

    (a, x2, y2)
}

/// Modular inverse of `a` modulo `n`, as a residue in `[0, n)`.
///
/// Fails when `gcd(a, n) != 1`.
pub fn modinv(a: &BigInt, n: &BigInt) -> Result<BigInt> {
    let (d, x, _) = extended_gcd(a, n);
    if !d.is_one() {
        return Err(Error::param(
            "inverse",
            "operand is not invertible modulo n",
        ));
    }
    Ok(modulus(&x, n))
}
