//! Serialization of the rekey handoff tuple

use ecrekey::prelude::*;
use ecrekey_tests::vectors::{seeded_rng, small_point, toy_curve};

#[test]
fn test_rekey_message_json_round_trip() {
    let curve = toy_curve();
    let config = RekeyConfig::deterministic(U256::from_u64(3), U256::from_u64(10)).with_session_key_hex_width(2);
    let output = RekeyProtocol::new(&curve, config)
        .unwrap()
        .rekey(&small_point(0, 6), &mut seeded_rng(0))
        .unwrap();
    let message = output.to_message(&curve).unwrap();

    let json = serde_json::to_string(&message).unwrap();
    assert_eq!(
        json,
        r#"{"r_x":"0a","r_y":"06","c_x":"00","c_y":"0b","session_key":"07"}"#
    );
    let decoded: RekeyMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, message);
    assert_eq!(decoded.ciphertext(&curve).unwrap(), output.ciphertext);
}
