//! Property-based tests for Ed25519 signing and verification

use edsig_sign::{Signer, VerifyMode};
use proptest::prelude::*;

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=512)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ed25519_sign_verify_roundtrip(
        seed in any::<[u8; 32]>(),
        message in message()
    ) {
        let signer = Signer::from_seed(&seed).unwrap();
        let signature = signer.sign(&message);

        let verifier = signer.verifier();
        prop_assert!(verifier.verify(&message, signature.as_ref()));

        let exact = verifier.clone().with_mode(VerifyMode::Cofactorless);
        prop_assert!(exact.verify(&message, signature.as_ref()));
    }

    #[test]
    fn ed25519_deterministic(
        seed in any::<[u8; 32]>(),
        message in message()
    ) {
        let first = Signer::from_seed(&seed).unwrap().sign(&message);
        let second = Signer::from_seed(&seed).unwrap().sign(&message);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ed25519_signature_bit_flip_rejected(
        seed in any::<[u8; 32]>(),
        message in message(),
        bit in 0usize..512
    ) {
        let signer = Signer::from_seed(&seed).unwrap();
        let mut signature = signer.sign(&message).to_bytes();
        signature[bit / 8] ^= 1 << (bit % 8);

        prop_assert!(!signer.verifier().verify(&message, &signature));
    }

    #[test]
    fn ed25519_message_bit_flip_rejected(
        seed in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 1..=256),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let signer = Signer::from_seed(&seed).unwrap();
        let signature = signer.sign(&message);

        let mut tampered = message.clone();
        let i = index.index(tampered.len());
        tampered[i] ^= 1 << bit;

        prop_assert!(!signer.verifier().verify(&tampered, signature.as_ref()));
    }

    #[test]
    fn ed25519_wrong_length_rejected(
        seed in any::<[u8; 32]>(),
        len in (0usize..128).prop_filter("not 64", |l| *l != 64)
    ) {
        let signer = Signer::from_seed(&seed).unwrap();
        let signature = signer.sign(b"length check");
        let mut bytes = signature.to_bytes().to_vec();
        bytes.resize(len, 0);

        prop_assert!(!signer.verifier().verify(b"length check", &bytes));
    }

    #[test]
    fn ed25519_verify_never_panics(
        public_key in any::<[u8; 32]>(),
        signature in prop::collection::vec(any::<u8>(), 0..=80),
        message in message()
    ) {
        let verifier = edsig_sign::Verifier::from_bytes(&public_key).unwrap();
        let _ = verifier.verify(&message, &signature);
    }
}
