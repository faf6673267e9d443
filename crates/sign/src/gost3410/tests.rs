use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

#[test]
fn test_sign_verify_round_trip() {
    let mut rng = seeded_rng(1);
    let kp = generate_key_pair_with_rng(&mut rng).unwrap();
    let message = "device:ABCDEF";

    let cert = sign_message_with_rng(&mut rng, message, kp.private_key.as_hex()).unwrap();
    assert!(check_sign(message, &cert, kp.public_key.as_hex()).unwrap());
}

#[test]
fn test_signature_wire_format() {
    let mut rng = seeded_rng(2);
    let kp = generate_key_pair_with_rng(&mut rng).unwrap();

    let cert = sign_message_with_rng(&mut rng, "device:XYZ", kp.private_key.as_hex()).unwrap();
    assert_eq!(cert.len(), SIGNATURE_HEX_LEN);
    assert!(cert
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));

    // both halves parse below q
    let c = curve();
    let s = BigInt::from_str_radix(&cert[..64], 16).unwrap();
    let r = BigInt::from_str_radix(&cert[64..], 16).unwrap();
    assert!(s < c.q);
    assert!(r < c.q);
}

#[test]
fn test_tampered_signature_fails() {
    let mut rng = seeded_rng(3);
    let kp = generate_key_pair_with_rng(&mut rng).unwrap();
    let message = "device:ABCDEF";
    let cert = sign_message_with_rng(&mut rng, message, kp.private_key.as_hex()).unwrap();

    // flip one nibble of r (the low digit keeps the scalar in range)
    let mut tampered: Vec<u8> = cert.clone().into_bytes();
    let last = tampered[127];
    tampered[127] = if last == b'0' { b'1' } else { b'0' };
    let tampered = String::from_utf8(tampered).unwrap();

    assert!(!check_sign(message, &tampered, kp.public_key.as_hex()).unwrap());
}

#[test]
fn test_wrong_message_fails() {
    let mut rng = seeded_rng(4);
    let kp = generate_key_pair_with_rng(&mut rng).unwrap();
    let cert = sign_message_with_rng(&mut rng, "device:AAAA", kp.private_key.as_hex()).unwrap();

    assert!(!check_sign("device:BBBB", &cert, kp.public_key.as_hex()).unwrap());
}

#[test]
fn test_wrong_key_fails() {
    let mut rng = seeded_rng(5);
    let kp = generate_key_pair_with_rng(&mut rng).unwrap();
    let other = generate_key_pair_with_rng(&mut rng).unwrap();
    let message = "device:ABCDEF";
    let cert = sign_message_with_rng(&mut rng, message, kp.private_key.as_hex()).unwrap();

    assert!(!check_sign(message, &cert, other.public_key.as_hex()).unwrap());
}

#[test]
fn test_keypair_wire_format() {
    let mut rng = seeded_rng(6);
    let kp = generate_key_pair_with_rng(&mut rng).unwrap();

    assert_eq!(kp.private_key.as_hex().len(), PRIVATE_KEY_HEX_LEN);
    assert_eq!(kp.public_key.as_hex().len(), PUBLIC_KEY_HEX_LEN);

    // the public point satisfies the curve equation
    let c = curve();
    let qx = BigInt::from_str_radix(&kp.public_key.as_hex()[..64], 16).unwrap();
    let qy = BigInt::from_str_radix(&kp.public_key.as_hex()[64..], 16).unwrap();
    let q_point = CurvePoint::new(qx, qy, c.a.clone(), c.p.clone());
    assert!(q_point.is_on_curve(&c.b));
}

#[test]
fn test_malformed_inputs_are_errors() {
    let mut rng = seeded_rng(7);
    let kp = generate_key_pair_with_rng(&mut rng).unwrap();
    let cert = sign_message_with_rng(&mut rng, "m", kp.private_key.as_hex()).unwrap();

    // wrong lengths
    assert!(check_sign("m", &cert[..100], kp.public_key.as_hex()).is_err());
    assert!(check_sign("m", &cert, &kp.public_key.as_hex()[..100]).is_err());

    // non-hex characters
    let mut bad = cert.clone().into_bytes();
    bad[0] = b'G';
    let bad = String::from_utf8(bad).unwrap();
    assert!(check_sign("m", &bad, kp.public_key.as_hex()).is_err());

    // zero s is outside [1, q)
    let zero_s = format!("{}{}", "0".repeat(64), &cert[64..]);
    assert!(check_sign("m", &zero_s, kp.public_key.as_hex()).is_err());

    // off-curve public key
    let off_curve = format!("{}{}", "1".repeat(64), "2".repeat(64));
    assert!(check_sign("m", &cert, &off_curve).is_err());

    // bad private key
    assert!(sign_message_with_rng(&mut rng, "m", "zz").is_err());
}

#[test]
fn test_deterministic_with_seeded_rng() {
    let kp = generate_key_pair_with_rng(&mut seeded_rng(8)).unwrap();

    let cert_a =
        sign_message_with_rng(&mut seeded_rng(99), "device:D", kp.private_key.as_hex()).unwrap();
    let cert_b =
        sign_message_with_rng(&mut seeded_rng(99), "device:D", kp.private_key.as_hex()).unwrap();
    assert_eq!(cert_a, cert_b);

    // a different nonce stream gives a different certificate for the
    // same message, and both verify
    let cert_c =
        sign_message_with_rng(&mut seeded_rng(100), "device:D", kp.private_key.as_hex()).unwrap();
    assert_ne!(cert_a, cert_c);
    assert!(check_sign("device:D", &cert_a, kp.public_key.as_hex()).unwrap());
    assert!(check_sign("device:D", &cert_c, kp.public_key.as_hex()).unwrap());
}

#[test]
fn test_signature_trait_surface() {
    let mut rng = seeded_rng(9);
    let kp = Gost3410::keypair(&mut rng).unwrap();
    let pk = Gost3410::public_key(&kp);
    let sk = Gost3410::secret_key(&kp);

    let sig = Gost3410::sign(b"device:TRAIT", &sk).unwrap();
    assert!(Gost3410::verify(b"device:TRAIT", &sig, &pk).is_ok());

    let err = Gost3410::verify(b"device:OTHER", &sig, &pk).unwrap_err();
    assert!(matches!(err, Error::VerifyFailed { .. }));
}

#[test]
fn test_default_rng_signs_verifiably() {
    // compatibility-mode nonce source still yields valid certificates
    let kp = generate_key_pair().unwrap();
    let cert = sign_message("device:CLOCK", kp.private_key.as_hex()).unwrap();
    assert!(check_sign("device:CLOCK", &cert, kp.public_key.as_hex()).unwrap());
}
