//! Known-answer vectors
//!
//! The toy curve y² = x³ + 2x + 2 over 𝔽₁₇ has a generator of prime order
//! 19, small enough to check every multiple by hand. The P-192 vectors
//! were produced by an independent affine implementation.

use ecrekey_algorithms::ec::{CurveParameters, CurvePoint};
use ecrekey_algorithms::U256;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// y² = x³ + 2x + 2 over 𝔽₁₇, G = (5, 1), N = 19
pub fn toy_curve() -> CurveParameters {
    CurveParameters::new(
        "toy-17",
        U256::from_u64(17),
        U256::from_u64(19),
        U256::from_u64(2),
        U256::from_u64(2),
        (U256::from_u64(5), U256::from_u64(1)),
    )
    .expect("toy curve parameters are valid")
}

/// Affine point from small coordinates
pub fn small_point(x: u64, y: u64) -> CurvePoint {
    CurvePoint::new(U256::from_u64(x), U256::from_u64(y))
}

/// k·G for k = 1..=18 on the toy curve
pub const TOY_MULTIPLES: [(u64, u64); 18] = [
    (5, 1),
    (6, 3),
    (10, 6),
    (3, 1),
    (9, 16),
    (16, 13),
    (0, 6),
    (13, 7),
    (7, 6),
    (7, 11),
    (13, 10),
    (0, 11),
    (16, 4),
    (9, 1),
    (3, 16),
    (10, 11),
    (6, 14),
    (5, 16),
];

/// One end-to-end rekey with fixed scalars
#[derive(Debug, Clone, Copy)]
pub struct RekeyVector {
    /// Node private scalar d
    pub private_key: &'static str,
    /// Ephemeral scalar k
    pub ephemeral: &'static str,
    /// Message generator g
    pub message_generator: &'static str,
    /// Y = d·G
    pub public_key: (&'static str, &'static str),
    /// R = k·G
    pub r: (&'static str, &'static str),
    /// C = k·Y + M
    pub c: (&'static str, &'static str),
    /// Session key width in hex digits
    pub session_key_width: usize,
    /// Expected session key
    pub session_key: &'static str,
}

/// Toy curve: d = 7, k = 3, g = 10
pub const TOY_REKEY: RekeyVector = RekeyVector {
    private_key: "07",
    ephemeral: "03",
    message_generator: "0a",
    public_key: ("00", "06"),
    r: ("0a", "06"),
    c: ("00", "0b"),
    session_key_width: 4,
    session_key: "0007",
};

/// The ephemeral scalar the legacy deployment used for every node
pub const LEGACY_EPHEMERAL: &str = "000000006f92be224ddfaa1ff36b4f51d153ed3de19e7800";

/// NIST P-192 with the legacy ephemeral scalar
pub const P192_REKEY: RekeyVector = RekeyVector {
    private_key: "001a8b7f3c5d2e4f60718293a4b5c6d7e8f9011223344556",
    ephemeral: LEGACY_EPHEMERAL,
    message_generator: "0000000000000000000000018ee90ff6c373e0ee4e3f0ad2",
    public_key: (
        "d446f19ba3f0fec59df94b17005b379e6599374f665d9b47",
        "243fc69ab527ad98b34df791ef5d1d041d7c2df82b508c05",
    ),
    r: (
        "43272ea59ee290fa3840d5457480482339bacb22b63d0492",
        "292e0b40fd996857065900936c832a3a39961cb0deb1073f",
    ),
    c: (
        "676546fcaca17ef727021e2d0d95275927df93cbb8dbbe86",
        "0f195cfdd54532ffa33e6770ea607b90a9dc8969c1b93d3b",
    ),
    session_key_width: 32,
    session_key: "4ca97be68b43137612bb568379b9d98c",
};

/// Seeded RNG for reproducible runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
