//! Prime-field arithmetic over 𝔽ₚ
//!
//! Field elements are plain [`U256`] values kept fully reduced into
//! [0, p − 1]. Addition, subtraction and negation come straight from
//! `crypto-bigint`, multiplication goes through its runtime-modulus
//! Montgomery form, and inversion is the iterative extended Euclidean
//! algorithm.

use crate::error::{validate, Error, Result};
use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::U256;

type FieldParams = DynResidueParams<{ U256::LIMBS }>;

/// Size in bytes of the integer backing a field element
pub const UINT_BYTES: usize = 32;

/// Returns the unique v ∈ [0, n − 1] with a·v ≡ 1 (mod n).
///
/// `a` may be any value; it is reduced modulo `n` first, so a "negative"
/// operand is passed as its residue (for example `n − 3` for −3).
///
/// The iteration keeps a low/high remainder pair and the matching Bézout
/// coefficients, replacing (high, low) by (low, high mod low) until the low
/// remainder reaches 1. The coefficient attached to that remainder is the
/// inverse.
///
/// # Errors
/// [`Error::NotInvertible`] when gcd(a, n) ≠ 1, and [`Error::Parameter`]
/// when n < 2.
pub fn modular_inverse(a: &U256, n: &U256) -> Result<U256> {
    validate::parameter(*n > U256::ONE, "modulus", "must be at least 2")?;

    let mut low = a.wrapping_rem(n);
    let mut high = *n;
    let mut low_coeff = Coefficient::ONE;
    let mut high_coeff = Coefficient::ZERO;

    while low > U256::ONE {
        let ratio = high.wrapping_div(&low);
        let next = high.wrapping_rem(&low);
        let next_coeff = high_coeff.sub(&low_coeff.scale(&ratio));

        high_coeff = low_coeff;
        low_coeff = next_coeff;
        high = low;
        low = next;
    }

    // A zero remainder means a shares a factor with n
    if low != U256::ONE {
        return Err(Error::NotInvertible {
            context: "modular inverse",
        });
    }
    Ok(low_coeff.reduce(n))
}

/// Signed Bézout coefficient. Successive coefficients alternate in sign and
/// their magnitudes never exceed the modulus, so a 256-bit magnitude is
/// enough.
#[derive(Clone, Copy, Debug)]
struct Coefficient {
    magnitude: U256,
    negative: bool,
}

impl Coefficient {
    const ZERO: Self = Self {
        magnitude: U256::ZERO,
        negative: false,
    };
    const ONE: Self = Self {
        magnitude: U256::ONE,
        negative: false,
    };

    fn scale(&self, factor: &U256) -> Self {
        Self {
            magnitude: self.magnitude.wrapping_mul(factor),
            negative: self.negative,
        }
    }

    fn add(&self, other: &Self) -> Self {
        if self.negative == other.negative {
            Self {
                magnitude: self.magnitude.wrapping_add(&other.magnitude),
                negative: self.negative,
            }
        } else if self.magnitude >= other.magnitude {
            Self {
                magnitude: self.magnitude.wrapping_sub(&other.magnitude),
                negative: self.negative,
            }
        } else {
            Self {
                magnitude: other.magnitude.wrapping_sub(&self.magnitude),
                negative: other.negative,
            }
        }
    }

    fn sub(&self, other: &Self) -> Self {
        self.add(&Self {
            magnitude: other.magnitude,
            negative: !other.negative,
        })
    }

    /// Map onto [0, n − 1]
    fn reduce(&self, n: &U256) -> U256 {
        let m = self.magnitude.wrapping_rem(n);
        if self.negative && m != U256::ZERO {
            n.wrapping_sub(&m)
        } else {
            m
        }
    }
}

/// The prime field 𝔽ₚ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: U256,
    params: FieldParams,
}

impl PrimeField {
    /// Wrap an odd modulus greater than 3.
    ///
    /// Primality is not tested; a composite modulus surfaces later as
    /// [`Error::NotInvertible`] from [`PrimeField::invert`].
    pub fn new(modulus: U256) -> Result<Self> {
        validate::parameter(
            modulus > U256::from_u64(3),
            "field modulus",
            "must be greater than 3",
        )?;
        validate::parameter(
            modulus.bit_vartime(0),
            "field modulus",
            "must be odd",
        )?;
        Ok(Self {
            modulus,
            params: FieldParams::new(&modulus),
        })
    }

    /// The prime p
    pub fn modulus(&self) -> &U256 {
        &self.modulus
    }

    /// Number of bytes needed to hold any element
    pub fn byte_len(&self) -> usize {
        (self.modulus.bits_vartime() + 7) / 8
    }

    /// Is `value` a canonical element (value < p)?
    pub fn contains(&self, value: &U256) -> bool {
        *value < self.modulus
    }

    /// Reduce an arbitrary integer into [0, p − 1]
    pub fn reduce(&self, value: &U256) -> U256 {
        value.wrapping_rem(&self.modulus)
    }

    /// (a + b) mod p
    pub fn add(&self, a: &U256, b: &U256) -> U256 {
        a.add_mod(b, &self.modulus)
    }

    /// (a − b) mod p
    pub fn sub(&self, a: &U256, b: &U256) -> U256 {
        a.sub_mod(b, &self.modulus)
    }

    /// (−a) mod p
    pub fn neg(&self, a: &U256) -> U256 {
        a.neg_mod(&self.modulus)
    }

    /// (a · b) mod p
    pub fn mul(&self, a: &U256, b: &U256) -> U256 {
        let a = DynResidue::new(a, self.params);
        let b = DynResidue::new(b, self.params);
        a.mul(&b).retrieve()
    }

    /// (a²) mod p
    pub fn square(&self, a: &U256) -> U256 {
        DynResidue::new(a, self.params).square().retrieve()
    }

    /// (k · a) mod p for a small constant k
    pub fn mul_small(&self, a: &U256, k: u64) -> U256 {
        self.mul(a, &self.reduce(&U256::from_u64(k)))
    }

    /// a⁻¹ mod p
    pub fn invert(&self, a: &U256) -> Result<U256> {
        modular_inverse(a, &self.modulus)
    }
}
