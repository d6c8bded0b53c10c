//! Short Weierstrass curve tables: y² = x³ + a·x + b over 𝔽ₚ

/// Domain parameters of a prime-field short Weierstrass curve.
///
/// Every value is a big-endian hexadecimal string without a `0x` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConstants {
    /// Human-readable curve name
    pub name: &'static str,
    /// Field prime p
    pub p: &'static str,
    /// Order n of the generator
    pub n: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Generator x-coordinate
    pub g_x: &'static str,
    /// Generator y-coordinate
    pub g_y: &'static str,
}

/// NIST P-192 (secp192r1), FIPS 186-4 §D.1.2.1.
///
/// p = 2¹⁹² − 2⁶⁴ − 1, a = −3.
pub const NIST_P192: CurveConstants = CurveConstants {
    name: "P-192",
    p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    n: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    g_x: "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    g_y: "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
};

/// secp192k1 (SEC 2 §2.2.1), the Koblitz curve y² = x³ + 3.
pub const SECP192K1: CurveConstants = CurveConstants {
    name: "secp192k1",
    p: "fffffffffffffffffffffffffffffffffffffffeffffee37",
    n: "fffffffffffffffffffffffe26f2fc170f69466a74defd8d",
    a: "000000000000000000000000000000000000000000000000",
    b: "000000000000000000000000000000000000000000000003",
    g_x: "db4ff10ec057e9ae26b07d0280b7f4341da5d1b1eae06c7d",
    g_y: "9b2f2f6d9c5628a7844163d015be86344082aa88d95e2f9d",
};

/// Field element size in bytes for the 192-bit curves
pub const CURVE192_FIELD_ELEMENT_SIZE: usize = 24;

/// Width of a fixed-width hex coordinate on the 192-bit curves
pub const CURVE192_COORDINATE_HEX_WIDTH: usize = 2 * CURVE192_FIELD_ELEMENT_SIZE;
