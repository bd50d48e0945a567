//! The cross-implementation fixture, driven through the facade crate.

use edsig::prelude::*;

const SEED: &str = "e1ecffa6cd4ec7092f8744af48b37f6371631e01f720e90afa3c90ec974c1627";
const PUBLIC: &str = "0f908bafef4079b594b513f9f60265ef4d95a4842dc7231b93e42e9d4552ed62";
const MESSAGE: &[u8] = b"This is a test message! -EinMByte";
const SIGNATURE: &str = "fa69312261b54ff57e20a60591e7ab4143488502accf3f1713093e253c156dc3\
                         55cd8a3007e241a19824e5c09e90bb9e6be841842d132e1f2a46312e5c947e0d";

#[test]
fn test_fixture_sign() {
    let signer = Signer::from_seed(&hex::decode(SEED).unwrap()).unwrap();
    assert_eq!(hex::encode(signer.public_key()), PUBLIC);
    assert_eq!(signer.public_key_len(), 32);
    assert_eq!(signer.signature_len(), 64);

    let signature = signer.sign(MESSAGE);
    assert_eq!(hex::encode(signature), SIGNATURE);
    assert_eq!(signer.sign(MESSAGE), signature, "Signing must be deterministic");
}

#[test]
fn test_fixture_verify() {
    let verifier = Verifier::from_bytes(&hex::decode(PUBLIC).unwrap()).unwrap();
    let signature = hex::decode(SIGNATURE).unwrap();

    assert!(verifier.verify(MESSAGE, &signature));
    assert!(!verifier.verify(&[0u8; 10], &signature));
    assert!(!verifier.verify(MESSAGE, &[0u8; 64]));
    assert!(!verifier.verify(MESSAGE, &signature[..32]));
}

#[test]
fn test_fixture_through_trait_objects() {
    let signer = Signer::from_seed(&hex::decode(SEED).unwrap()).unwrap();
    let verifier = signer.verifier();

    let boxed: Vec<(Box<dyn MessageSigner>, Box<dyn MessageVerifier>)> =
        vec![(Box::new(signer), Box::new(verifier))];

    for (signer, verifier) in &boxed {
        let signature = signer.sign_to_vec(MESSAGE).unwrap();
        assert_eq!(hex::encode(&signature), SIGNATURE);
        assert!(verifier.verify(MESSAGE, &signature));
        assert_eq!(verifier.public_key_len(), <Ed25519 as SignatureScheme>::PUBLIC_KEY_LEN);

        let mut short = [0u8; 63];
        assert!(matches!(
            signer.sign_into(MESSAGE, &mut short),
            Err(Error::InvalidSignatureLength { expected: 64, actual: 63 })
        ));
    }
}

#[test]
fn test_construction_errors() {
    match Signer::from_seed(&[0u8; 64]) {
        Err(Error::InvalidSeedLength { expected, actual }) => {
            assert_eq!(expected, 32);
            assert_eq!(actual, 64);
        }
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(matches!(
        Verifier::from_bytes(&[0u8; 33]),
        Err(Error::InvalidPublicKeyLength { .. })
    ));
    assert!(matches!(
        Signature::from_bytes(&[0u8; 12]),
        Err(Error::InvalidSignatureLength { .. })
    ));
}

#[test]
fn test_keypair_from_chacha() {
    use rand::SeedableRng;

    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0x0ed2_5519);
    let (seed, public_key) = generate_keypair(&mut rng).unwrap();

    let signer = Signer::from_seed(seed.as_bytes()).unwrap();
    assert_eq!(signer.public_key(), &public_key);

    let signature = signer.sign(b"hello router");
    assert!(Verifier::new(&public_key).verify(b"hello router", signature.as_ref()));
}
