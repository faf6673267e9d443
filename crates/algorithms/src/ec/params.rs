//! Fixed curve parameters for the 256-bit GOST R 34.10-2012 parameter set
//!
//! The license authority signs over a single curve; its parameters are
//! module-level constants parsed once on first use.

use num_bigint::BigInt;
use num_traits::Num;
use once_cell::sync::Lazy;

use super::CurvePoint;

/// Field prime p = 2^256 - 617
const P_DEC: &str =
    "57896044618658097711785492504343953926634992332820282019728792003956564821041";
/// Curve coefficient a
const A_DEC: &str = "7";
/// Curve coefficient b
const B_DEC: &str =
    "43308876546767276905765904595650931995942111794451039583252968842033849580414";
/// Order q of the base-point subgroup
const Q_DEC: &str =
    "57896044618658097711785492504343953927082934583725450622380973592137631069619";
/// Base point x-coordinate
const GX_DEC: &str = "2";
/// Base point y-coordinate
const GY_DEC: &str =
    "4018974056539037503335449422937059775635739389905545080690979365213431566280";

/// Parameters of the fixed prime curve y^2 = x^3 + a*x + b over F_p
#[derive(Debug, Clone)]
pub struct CurveParams {
    /// Field prime
    pub p: BigInt,
    /// Coefficient a
    pub a: BigInt,
    /// Coefficient b
    pub b: BigInt,
    /// Subgroup order
    pub q: BigInt,
    /// Base point x
    pub gx: BigInt,
    /// Base point y
    pub gy: BigInt,
}

static PARAMS: Lazy<CurveParams> = Lazy::new(|| {
    let dec = |s| BigInt::from_str_radix(s, 10).expect("curve constant");
    CurveParams {
        p: dec(P_DEC),
        a: dec(A_DEC),
        b: dec(B_DEC),
        q: dec(Q_DEC),
        gx: dec(GX_DEC),
        gy: dec(GY_DEC),
    }
});

/// The fixed curve parameters
pub fn curve() -> &'static CurveParams {
    &PARAMS
}

impl CurveParams {
    /// The base point P of the subgroup of order q
    pub fn generator(&self) -> CurvePoint {
        CurvePoint::new(
            self.gx.clone(),
            self.gy.clone(),
            self.a.clone(),
            self.p.clone(),
        )
    }
}
