//! End-to-end rekeying against known-answer vectors

use ecrekey::prelude::*;
use ecrekey_algorithms::ec::{uint_from_hex, CurveParameters, CurvePoint};
use ecrekey_api::ErrorKind;
use ecrekey_pke::recover_message;
use ecrekey_tests::init_tracing;
use ecrekey_tests::vectors::{seeded_rng, toy_curve, RekeyVector, P192_REKEY, TOY_REKEY};

fn hex(value: &str) -> U256 {
    uint_from_hex(value).unwrap()
}

fn point(coords: (&str, &str)) -> CurvePoint {
    CurvePoint::new(hex(coords.0), hex(coords.1))
}

fn run_vector(curve: &CurveParameters, vector: &RekeyVector) {
    init_tracing();
    let d = Scalar::from_hex(vector.private_key, curve).unwrap();
    let y = ecrekey_algorithms::ec::scalar_mult_base_g(&d, curve).unwrap();
    assert_eq!(y, point(vector.public_key));

    let config = RekeyConfig::deterministic(hex(vector.ephemeral), hex(vector.message_generator))
        .with_session_key_hex_width(vector.session_key_width);
    let protocol = RekeyProtocol::new(curve, config).unwrap();
    let output = protocol.rekey(&y, &mut seeded_rng(1)).unwrap();

    assert_eq!(*output.ciphertext.r(), point(vector.r));
    assert_eq!(*output.ciphertext.c(), point(vector.c));
    assert_eq!(output.session_key.as_str(), vector.session_key);

    let recovered = recover(curve, &d, &output.ciphertext, vector.session_key_width).unwrap();
    assert_eq!(recovered, output.session_key);
}

#[test]
fn test_toy_curve_vector() {
    run_vector(&toy_curve(), &TOY_REKEY);
}

#[test]
fn test_p192_legacy_vector() {
    run_vector(&CurveParameters::nist_p192(), &P192_REKEY);
}

#[test]
fn test_p192_session_key_skips_leading_zero_nibble() {
    let curve = CurveParameters::nist_p192();
    let d = Scalar::from_hex(P192_REKEY.private_key, &curve).unwrap();
    let y = point(P192_REKEY.public_key);
    // M = 28·G has M.x = 0b0975ea...
    let config = RekeyConfig::deterministic(U256::from_u64(5), U256::from_u64(28));
    let output = RekeyProtocol::new(&curve, config)
        .unwrap()
        .rekey(&y, &mut seeded_rng(3))
        .unwrap();
    assert_eq!(output.session_key.as_str(), "b0975ea9c391157a409bb07d92e52091");
    assert_eq!(recover(&curve, &d, &output.ciphertext, 32).unwrap(), output.session_key);
}

#[test]
fn test_p192_message_point_recovered_exactly() {
    let curve = CurveParameters::nist_p192();
    let d = Scalar::from_hex(P192_REKEY.private_key, &curve).unwrap();
    let ciphertext = Ciphertext::new(point(P192_REKEY.r), point(P192_REKEY.c));
    let m = recover_message(&curve, &d, &ciphertext).unwrap();
    assert_eq!(
        m.to_hex(&curve).unwrap().0,
        "4ca97be68b43137612bb568379b9d98cc2b7573adb330ede"
    );
}

#[test]
fn test_p192_random_rekey_through_key_file() {
    init_tracing();
    let curve = CurveParameters::nist_p192();
    let mut rng = seeded_rng(2024);
    let (d, y) = generate_keypair(&curve, &mut rng).unwrap();

    let record = KeyRecord::new("sensor-12", y, &curve).unwrap();
    let line = record.to_line(&curve).unwrap();
    assert_eq!(line.len(), "sensor-12".len() + 2 + 2 * 48);

    let path = std::env::temp_dir().join(format!("ecrekey-it-{}.txt", std::process::id()));
    std::fs::write(&path, format!("{}\n", line)).unwrap();
    assert_eq!(load_public_key(&path, &curve).unwrap(), record);

    let mut delivered: Vec<Vec<String>> = Vec::new();
    let output = ecrekey::rekey_from_file(&path, &curve, RekeyConfig::random(&curve), &mut delivered).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(delivered.len(), 1);
    let fields: Vec<&str> = delivered[0].iter().map(String::as_str).collect();
    assert!(fields[..4].iter().all(|f| f.len() == 48));
    assert_eq!(fields[4].len(), 32);

    // Receiving node side
    let message = RekeyMessage::from_fields(&fields, &curve, 32).unwrap();
    let ciphertext = message.ciphertext(&curve).unwrap();
    assert_eq!(ciphertext, output.ciphertext);
    let key = recover(&curve, &d, &ciphertext, 32).unwrap();
    assert_eq!(key, message.session_key().unwrap());
}

#[test]
fn test_legacy_config_on_p192() {
    let curve = CurveParameters::nist_p192();
    let mut rng = seeded_rng(7);
    let d = Scalar::from_hex(P192_REKEY.private_key, &curve).unwrap();
    let y = point(P192_REKEY.public_key);

    let protocol = RekeyProtocol::new(&curve, RekeyConfig::legacy(&curve, hex(P192_REKEY.ephemeral))).unwrap();
    let output = protocol.rekey(&y, &mut rng).unwrap();
    // The fixed ephemeral scalar always yields the same R
    assert_eq!(*output.ciphertext.r(), point(P192_REKEY.r));
    assert_eq!(recover(&curve, &d, &output.ciphertext, 32).unwrap(), output.session_key);
}

#[test]
fn test_secp192k1_round_trip() {
    let curve = CurveParameters::secp192k1();
    let mut rng = seeded_rng(99);
    let (d, y) = generate_keypair(&curve, &mut rng).unwrap();
    let protocol = RekeyProtocol::new(&curve, RekeyConfig::random(&curve)).unwrap();
    let output = protocol.rekey(&y, &mut rng).unwrap();
    assert_eq!(recover(&curve, &d, &output.ciphertext, 32).unwrap(), output.session_key);
}

#[test]
fn test_ephemeral_equal_to_order_rejected() {
    let curve = CurveParameters::nist_p192();
    let config = RekeyConfig::deterministic(*curve.order(), U256::from_u64(5));
    let err: Error = RekeyProtocol::new(&curve, config).unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::InvalidScalar);
    assert!(err.is_core_failure());
}

#[test]
fn test_empty_and_truncated_records_rejected() {
    let curve = toy_curve();
    for line in ["", "node", "node;00"] {
        let err: Error = KeyRecord::parse(line, &curve).unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::KeyParse, "record {:?}", line);
    }
}

#[test]
fn test_legacy_parameter_set_is_rejected() {
    // P-192's p and G combined with b = 1 describe no curve G lies on
    let err = CurveParameters::new(
        "legacy",
        *CurveParameters::nist_p192().modulus(),
        *CurveParameters::secp192k1().order(),
        hex("fffffffffffffffffffffffffffffffefffffffffffffffc"),
        U256::ONE,
        (
            hex("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
            hex("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
        ),
    )
    .unwrap_err();
    let err: Error = err.into();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}
