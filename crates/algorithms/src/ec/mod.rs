//! Affine elliptic-curve point arithmetic over F_p
//!
//! Points are owned value types carrying the curve coefficient `a` and
//! the field prime `p` alongside their coordinates, so a point stays
//! self-describing across arithmetic. The point at infinity is a tagged
//! value produced by [`CurvePoint::neutral`].
//!
//! Scalar multiplication is plain double-and-add over the bit
//! decomposition of the scalar; it is not constant time.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::bigint::{modinv, modulus};
use crate::error::Result;

mod params;
pub use params::{curve, CurveParams};

/// A point on a short-Weierstrass curve y^2 = x^3 + a*x + b over F_p
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvePoint {
    x: BigInt,
    y: BigInt,
    a: BigInt,
    p: BigInt,
    infinity: bool,
}

impl CurvePoint {
    /// An affine point with the given coordinates
    pub fn new(x: BigInt, y: BigInt, a: BigInt, p: BigInt) -> Self {
        CurvePoint {
            x,
            y,
            a,
            p,
            infinity: false,
        }
    }

    /// The group-neutral point at infinity
    pub fn neutral(a: BigInt, p: BigInt) -> Self {
        CurvePoint {
            x: BigInt::zero(),
            y: BigInt::zero(),
            a,
            p,
            infinity: true,
        }
    }

    /// x-coordinate; unspecified for the point at infinity
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// y-coordinate; unspecified for the point at infinity
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Whether this is the point at infinity
    pub fn is_neutral(&self) -> bool {
        self.infinity
    }

    /// Whether (x, y) satisfies y^2 = x^3 + a*x + b (mod p)
    pub fn is_on_curve(&self, b: &BigInt) -> bool {
        if self.infinity {
            return true;
        }
        let lhs = modulus(&(&self.y * &self.y), &self.p);
        let rhs = modulus(
            &(&self.x * &self.x * &self.x + &self.a * &self.x + b),
            &self.p,
        );
        lhs == rhs
    }

    /// In-place group addition, `self += other`.
    ///
    /// Adding a point to itself takes the doubling branch; adding a point
    /// to its negation yields the point at infinity.
    pub fn add_assign(&mut self, other: &CurvePoint) -> Result<()> {
        if other.infinity {
            return Ok(());
        }
        if self.infinity {
            *self = other.clone();
            return Ok(());
        }

        // P + (-P) = O; also catches doubling a 2-torsion point (y = 0)
        if self.y == modulus(&(-&other.y), &self.p) {
            self.infinity = true;
            return Ok(());
        }

        let x_tmp = self.x.clone();
        let lambda;

        if self.x != other.x {
            let den = modulus(&(&other.x - &self.x), &self.p);
            let num = modulus(&(&other.y - &self.y), &self.p);
            let den_inv = modinv(&den, &self.p)?;
            lambda = modulus(&(num * den_inv), &self.p);
            let lambda2 = modulus(&(&lambda * &lambda), &self.p);
            self.x = modulus(&(lambda2 - &self.x - &other.x), &self.p);
        } else {
            let den = modulus(&(&self.y * 2), &self.p);
            let num = modulus(&(&self.x * &self.x * 3 + &self.a), &self.p);
            let den_inv = modinv(&den, &self.p)?;
            lambda = modulus(&(num * den_inv), &self.p);
            let lambda2 = modulus(&(&lambda * &lambda), &self.p);
            self.x = modulus(&(lambda2 - &self.x * 2), &self.p);
        }

        self.y = modulus(&(lambda * (x_tmp - &self.x) - &self.y), &self.p);
        Ok(())
    }

    /// Group addition returning a new point
    pub fn add(&self, other: &CurvePoint) -> Result<CurvePoint> {
        let mut out = self.clone();
        out.add_assign(other)?;
        Ok(out)
    }

    /// Scalar multiplication k * self by double-and-add.
    ///
    /// Multiplying by zero yields the point at infinity.
    pub fn scalar_mul(&self, k: &BigInt) -> Result<CurvePoint> {
        let mut result = CurvePoint::neutral(self.a.clone(), self.p.clone());
        let mut point = self.clone();
        let mut n = k.clone();
        let one = BigInt::one();

        while n.is_positive() {
            if (&n & &one).is_one() {
                result.add_assign(&point)?;
            }
            let doubled = point.add(&point)?;
            point = doubled;
            n >>= 1;
        }

        Ok(result)
    }
}
