//! End-to-end issuance flow: keypair -> certificate -> descriptor ->
//! reload -> verify.

use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use licrypt::license::{load_certificate, store_certificate, LICENSE_FIELD};
use licrypt::sign::{check_sign, generate_key_pair_with_rng, sign_message_with_rng};

fn scratch_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("licrypt-flow-{}-{}", std::process::id(), name));
    path
}

#[test]
fn test_issue_store_reload_verify() {
    let mut rng = ChaCha20Rng::seed_from_u64(1234);
    let keypair = generate_key_pair_with_rng(&mut rng).unwrap();

    let device_signature = "XYZ";
    let certificate =
        sign_message_with_rng(&mut rng, device_signature, keypair.private_key.as_hex()).unwrap();

    let license_path = scratch_path("license.json");
    store_certificate(&license_path, &certificate).unwrap();

    // the descriptor is a JSON object carrying the certificate verbatim
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&license_path).unwrap()).unwrap();
    assert_eq!(raw[LICENSE_FIELD], serde_json::json!(certificate));

    let reloaded = load_certificate(&license_path).unwrap();
    assert_eq!(reloaded, certificate);
    assert!(check_sign(device_signature, &reloaded, keypair.public_key.as_hex()).unwrap());

    // a different device signature does not verify against it
    assert!(!check_sign("ZYX", &reloaded, keypair.public_key.as_hex()).unwrap());

    fs::remove_file(&license_path).unwrap();
}

#[test]
fn test_reissue_preserves_descriptor_fields() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let keypair = generate_key_pair_with_rng(&mut rng).unwrap();

    let license_path = scratch_path("reissue.json");
    fs::write(&license_path, r#"{"Vendor":"3divi"}"#).unwrap();

    let certificate =
        sign_message_with_rng(&mut rng, "device:R", keypair.private_key.as_hex()).unwrap();
    store_certificate(&license_path, &certificate).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&license_path).unwrap()).unwrap();
    assert_eq!(raw["Vendor"], "3divi");
    assert_eq!(raw[LICENSE_FIELD], serde_json::json!(certificate));

    fs::remove_file(&license_path).unwrap();
}
