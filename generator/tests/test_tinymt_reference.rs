//! Tests for the TinyMT32 bit engine
//!
//! CRITICAL: The output sequence for a seed tuple must match the reference
//! implementation word for word. Seeds are exchanged instead of values.

use random_generator_core_rs::{EntropySource, RandomGenerator, SeedConfig, TinyMt32};

/// First 50 words for seed tuple (1, 3, 3, 7), from the reference implementation
const REFERENCE_1337: [u32; 50] = [
    0xa564a7ba, 0xdda6773c, 0x99452fe1, 0x0123936a, 0xe888e74e,
    0xc2290110, 0x7cb0a271, 0xc384ec27, 0x968bd6bb, 0x16caca33,
    0x7c651dea, 0xc8672f20, 0x16a5bd73, 0xf6a3ae2e, 0x3ac5531f,
    0xe2511090, 0x462fba19, 0x2737256e, 0xe1fc7209, 0x396ef346,
    0x1463328d, 0xe2ac8621, 0x0f3a2b0b, 0x3e7ee4a6, 0xc4a79f91,
    0xe664b78d, 0x639bf566, 0x610d0662, 0x4cb51b00, 0xe5b78b47,
    0x8c031703, 0x82607f49, 0x415a38f4, 0x12015244, 0x8d33956e,
    0x096d207a, 0xcf579bf3, 0x4404612b, 0x71d31686, 0x3f026479,
    0xf755a15c, 0xbc291ce7, 0x8fbb4cba, 0x9a2397f9, 0x71bed3bf,
    0x91667531, 0x228362b4, 0xa2ebac84, 0xe8a1dac5, 0x76e40102,
];

#[test]
fn test_reference_sequence_first_five() {
    let mut engine = TinyMt32::new(SeedConfig::with_parameters(1, 3, 3, 7));
    let first: Vec<u32> = (0..5).map(|_| engine.next_u32()).collect();
    assert_eq!(first, vec![0xa564a7ba, 0xdda6773c, 0x99452fe1, 0x0123936a, 0xe888e74e]);
}

#[test]
fn test_reference_sequence_full_fixture() {
    let mut rng = RandomGenerator::with_config(SeedConfig::with_parameters(1, 3, 3, 7));
    for (i, expected) in REFERENCE_1337.iter().enumerate() {
        let actual = rng.next_u32();
        assert_eq!(
            actual, *expected,
            "wrong value {} of {}: {:#010x} != {:#010x}",
            i,
            REFERENCE_1337.len(),
            actual,
            expected
        );
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = RandomGenerator::new(12345);
    let mut b = RandomGenerator::new(12345);

    for i in 0..1000 {
        assert_eq!(a.next_u32(), b.next_u32(), "Determinism broken at iteration {}", i);
    }
}

#[test]
fn test_different_seeds_different_sequences() {
    let mut a = RandomGenerator::new(12345);
    let mut b = RandomGenerator::new(54321);

    let first_a: Vec<u32> = (0..10).map(|_| a.next_u32()).collect();
    let first_b: Vec<u32> = (0..10).map(|_| b.next_u32()).collect();
    assert_ne!(first_a, first_b, "Different seeds should produce different values");
}

#[test]
fn test_parameters_change_sequence() {
    let mut plain = TinyMt32::new(SeedConfig::new(1));
    let mut tuned = TinyMt32::new(SeedConfig::with_parameters(1, 3, 3, 7));

    let a: Vec<u32> = (0..10).map(|_| plain.next_u32()).collect();
    let b: Vec<u32> = (0..10).map(|_| tuned.next_u32()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_seed_zero_produces_non_constant_output() {
    let mut engine = TinyMt32::new(SeedConfig::new(0));
    let values: Vec<u32> = (0..16).map(|_| engine.next_u32()).collect();
    assert!(values.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn test_clone_is_independent() {
    let mut original = RandomGenerator::with_config(SeedConfig::with_parameters(1, 3, 3, 7));
    original.next_u32();

    let mut copy = original.clone();
    assert_eq!(copy.next_u32(), REFERENCE_1337[1]);
    assert_eq!(copy.next_u32(), REFERENCE_1337[2]);

    // advancing the copy leaves the original where it was
    assert_eq!(original.next_u32(), REFERENCE_1337[1]);
}

#[test]
fn test_from_default_generators_are_valid() {
    let mut a = RandomGenerator::from_default();
    let mut b = RandomGenerator::from_default();

    // seeded from successive default draws, so almost surely distinct
    let sa: Vec<u32> = (0..4).map(|_| a.next_u32()).collect();
    let sb: Vec<u32> = (0..4).map(|_| b.next_u32()).collect();
    assert_ne!(sa, sb);
}

#[test]
fn test_into_source_resumes_engine() {
    let mut rng = RandomGenerator::with_config(SeedConfig::with_parameters(1, 3, 3, 7));
    rng.next_u32();

    let mut engine = rng.into_source();
    assert_eq!(engine.next_u32(), REFERENCE_1337[1]);
}
