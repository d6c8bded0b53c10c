//! Property-based tests for curve arithmetic and rekey recovery

use ecrekey::prelude::*;
use ecrekey_algorithms::ec::{modular_inverse, multiply, multiply_base, PrimeField};
use ecrekey_tests::vectors::{small_point, toy_curve, TOY_MULTIPLES};
use proptest::prelude::*;

fn p192_scalar() -> impl Strategy<Value = U256> {
    // Below 2^191, hence below N for P-192
    (any::<[u8; 24]>()).prop_filter_map("non-zero scalar", |mut bytes| {
        bytes[0] &= 0x7f;
        let mut wide = [0u8; 32];
        wide[8..].copy_from_slice(&bytes);
        let value = U256::from_be_slice(&wide);
        (value != U256::ZERO).then_some(value)
    })
}

proptest! {
    #[test]
    fn toy_multiples_on_curve(k in 1u64..19) {
        let curve = toy_curve();
        let p = multiply_base(&curve, &U256::from_u64(k)).unwrap();
        prop_assert!(curve.is_on_curve(&p));
        let (x, y) = TOY_MULTIPLES[(k - 1) as usize];
        prop_assert_eq!(p, small_point(x, y));
    }

    #[test]
    fn toy_addition_commutes(a in 1u64..19, b in 1u64..19) {
        let curve = toy_curve();
        let p = multiply_base(&curve, &U256::from_u64(a)).unwrap();
        let q = multiply_base(&curve, &U256::from_u64(b)).unwrap();
        prop_assert_eq!(p.add(&q, &curve).unwrap(), q.add(&p, &curve).unwrap());
    }

    #[test]
    fn inverse_mod_prime(a in 1u64..1_000_003) {
        let n = U256::from_u64(1_000_003);
        let field = PrimeField::new(n).unwrap();
        let a = U256::from_u64(a);
        let inv = modular_inverse(&a, &n).unwrap();
        prop_assert_eq!(field.mul(&a, &inv), U256::ONE);
        // −a has inverse −a⁻¹
        prop_assert_eq!(modular_inverse(&field.neg(&a), &n).unwrap(), field.neg(&inv));
    }

    #[test]
    fn inverse_of_non_coprime_fails(a in 1u64..1000) {
        // 2a shares the factor 2 with an even modulus
        let n = U256::from_u64(2048);
        prop_assert!(modular_inverse(&U256::from_u64(2 * a), &n).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn p192_multiples_on_curve(k in p192_scalar()) {
        let curve = CurveParameters::nist_p192();
        let p = multiply(&curve, curve.generator(), &k).unwrap();
        prop_assert!(curve.is_on_curve(&p));
    }

    #[test]
    fn p192_recovery_reproduces_session_key(seed in any::<u64>()) {
        let curve = CurveParameters::nist_p192();
        let mut rng = ecrekey_tests::vectors::seeded_rng(seed);
        let (d, y) = generate_keypair(&curve, &mut rng).unwrap();
        let protocol = RekeyProtocol::new(&curve, RekeyConfig::random(&curve)).unwrap();
        let output = protocol.rekey(&y, &mut rng).unwrap();
        prop_assert_eq!(recover(&curve, &d, &output.ciphertext, 32).unwrap(), output.session_key);
    }
}
