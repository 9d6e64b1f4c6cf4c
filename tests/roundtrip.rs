use islsb::bits::BitCursor;
use islsb::frame::{self, SIGNATURE};
use islsb::{decode_file, encode_file, Obfuscation, Pattern, Payload, Raster, StegConfig, StegError};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

fn config(bits_used: u8, pattern: Pattern, obfuscation: Obfuscation) -> StegConfig {
    StegConfig::new(bits_used, pattern, obfuscation).unwrap()
}

fn noisy_raster(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bytes = vec![0u8; width as usize * height as usize * 3];
    rng.fill_bytes(&mut bytes);

    Raster::new(width, height, bytes).unwrap()
}

fn random_payload(len: usize, seed: u64) -> Payload {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut content = vec![0u8; len];
    rng.fill_bytes(&mut content);

    Payload::new("payload.bin".into(), content)
}

fn is_no_encoded_file<T: std::fmt::Debug>(result: islsb::Result<T>) -> bool {
    matches!(result, Err(StegError::NoEncodedFile))
}

#[test]
fn small_text_in_blank_image() {
    let raster = Raster::blank(100, 100).unwrap();
    let payload = Payload::new("a.txt".into(), b"hi".to_vec());
    let config = StegConfig::default();

    let cover = encode_file(&raster, &payload, &config).unwrap();

    for (i, byte) in cover.bytes()[..40].iter().enumerate() {
        let expected = (SIGNATURE[i / 8] >> (7 - i % 8)) & 1;
        assert_eq!(*byte, expected, "byte {}", i);
    }

    let decoded = decode_file(&cover, &config).unwrap();
    assert_eq!(decoded.filename, "a.txt");
    assert_eq!(decoded.content, b"hi");

    // The input raster is never modified
    assert_eq!(raster, Raster::blank(100, 100).unwrap());
}

#[test]
fn four_bits_hold_500_bytes() {
    let raster = Raster::blank(100, 100).unwrap();
    let payload = random_payload(500, 2);
    let config = config(4, Pattern::Stride(1), Obfuscation::None);

    let cover = encode_file(&raster, &payload, &config).unwrap();
    assert_eq!(decode_file(&cover, &config).unwrap(), payload);
}

#[test]
fn too_large_for_small_image() {
    let raster = Raster::blank(10, 10).unwrap();
    let payload = random_payload(40, 3);

    match encode_file(&raster, &payload, &StegConfig::default()) {
        Err(StegError::CapacityExceeded {
            required,
            available,
        }) => {
            assert_eq!(required, 8 * (5 + 4 + 11 + 4 + 40));
            assert_eq!(available, 300);
        }
        other => panic!("expected CapacityExceeded, got {:?}", other),
    }
}

#[test]
fn capacity_bound_is_exact_for_strides() {
    // 300 bytes at 1 bit: 37 whole frame bytes
    let raster = Raster::blank(10, 10).unwrap();
    let overhead = frame::frame_len(1, 0) as usize;

    let fits = Payload::new("a".into(), vec![1; 37 - overhead]);
    let too_big = Payload::new("a".into(), vec![1; 38 - overhead]);

    assert!(encode_file(&raster, &fits, &StegConfig::default()).is_ok());
    assert!(matches!(
        encode_file(&raster, &too_big, &StegConfig::default()),
        Err(StegError::CapacityExceeded { .. })
    ));
}

#[test]
fn wrong_stride_finds_nothing() {
    let raster = noisy_raster(64, 64, 4);
    let payload = random_payload(100, 4);

    let cover = encode_file(&raster, &payload, &config(1, Pattern::Stride(3), Obfuscation::None)).unwrap();

    let wrong = config(1, Pattern::Stride(2), Obfuscation::None);
    assert!(is_no_encoded_file(decode_file(&cover, &wrong)));
}

#[test]
fn random_pattern_needs_the_seed() {
    let raster = noisy_raster(64, 64, 5);
    let payload = random_payload(200, 5);
    let pattern = |seed| Pattern::Random { seed, lo: 1, hi: 5 };

    let cover = encode_file(&raster, &payload, &config(1, pattern(42), Obfuscation::None)).unwrap();

    assert_eq!(decode_file(&cover, &config(1, pattern(42), Obfuscation::None)).unwrap(), payload);
    assert!(is_no_encoded_file(decode_file(&cover, &config(1, pattern(43), Obfuscation::None))));
}

#[test]
fn vigenere_key_is_case_sensitive() {
    let raster = noisy_raster(64, 64, 6);
    let payload = random_payload(64, 6);

    let lower = config(2, Pattern::Stride(1), Obfuscation::Vigenere("key".into()));
    let upper = config(2, Pattern::Stride(1), Obfuscation::Vigenere("KEY".into()));

    let cover = encode_file(&raster, &payload, &lower).unwrap();
    assert_eq!(decode_file(&cover, &lower).unwrap(), payload);
    assert!(is_no_encoded_file(decode_file(&cover, &upper)));
}

#[test]
fn round_trips_every_configuration() {
    let raster = noisy_raster(80, 60, 7);
    let payload = Payload::new("résumé 2024.pdf".into(), random_payload(300, 7).content);

    let patterns = [
        Pattern::Stride(1),
        Pattern::Stride(2),
        Pattern::Stride(5),
        Pattern::Random {
            seed: 42,
            lo: 1,
            hi: 5,
        },
        Pattern::Random {
            seed: -9_999_999,
            lo: 2,
            hi: 3,
        },
    ];
    let obfuscations = [
        Obfuscation::None,
        Obfuscation::Caesar(1),
        Obfuscation::Caesar(7),
        Obfuscation::Vigenere("correct horse".into()),
    ];

    for bits_used in 1..=8 {
        for pattern in &patterns {
            for obfuscation in &obfuscations {
                let config = config(bits_used, pattern.clone(), obfuscation.clone());

                let cover = encode_file(&raster, &payload, &config).unwrap();
                let decoded = decode_file(&cover, &config).unwrap();

                assert_eq!(decoded, payload, "{:?}", config);
            }
        }
    }
}

#[test]
fn only_low_bits_change() {
    let raster = noisy_raster(50, 50, 8);
    let payload = random_payload(400, 8);

    for bits_used in 1..=7u8 {
        let config = config(bits_used, Pattern::Stride(1), Obfuscation::None);
        let cover = encode_file(&raster, &payload, &config).unwrap();

        let high = !((1u8 << bits_used) - 1);
        for (a, b) in raster.bytes().iter().zip(cover.bytes()) {
            assert_eq!(a & high, b & high);
        }
    }
}

#[test]
fn stride_skips_untouched_bytes() {
    let raster = noisy_raster(40, 40, 9);
    let payload = random_payload(50, 9);
    let config = config(1, Pattern::Stride(4), Obfuscation::None);

    let cover = encode_file(&raster, &payload, &config).unwrap();

    for (i, (a, b)) in raster.bytes().iter().zip(cover.bytes()).enumerate() {
        if i % 4 != 0 {
            assert_eq!(a, b, "byte {}", i);
        }
    }
}

#[test]
fn flipped_signature_bits_are_detected() {
    let raster = Raster::blank(32, 32).unwrap();
    let payload = random_payload(10, 10);
    let config = StegConfig::default();

    let cover = encode_file(&raster, &payload, &config).unwrap();

    for bit in 0..40 {
        let mut bytes = cover.clone().into_bytes();
        bytes[bit] ^= 1;

        let tampered = Raster::new(32, 32, bytes).unwrap();
        assert!(is_no_encoded_file(decode_file(&tampered, &config)), "bit {}", bit);
    }
}

#[test]
fn mismatched_parameters_find_nothing() {
    let raster = noisy_raster(64, 64, 11);
    let payload = random_payload(100, 11);
    let encoded_with = config(2, Pattern::Stride(1), Obfuscation::Caesar(3));

    let cover = encode_file(&raster, &payload, &encoded_with).unwrap();

    let others = [
        config(1, Pattern::Stride(1), Obfuscation::Caesar(3)),
        config(3, Pattern::Stride(1), Obfuscation::Caesar(3)),
        config(2, Pattern::Stride(1), Obfuscation::Caesar(4)),
        config(2, Pattern::Stride(1), Obfuscation::None),
        config(2, Pattern::Random { seed: 0, lo: 1, hi: 2 }, Obfuscation::Caesar(3)),
    ];

    for other in others {
        assert!(is_no_encoded_file(decode_file(&cover, &other)), "{:?}", other);
    }
}

#[test]
fn clean_images_have_nothing_to_decode() {
    let mut rng = StdRng::seed_from_u64(12);

    for seed in 0..20 {
        let raster = noisy_raster(30, 30, seed);
        let bits_used = rng.gen_range(1..=8);
        let config = config(bits_used, Pattern::Stride(1), Obfuscation::None);

        assert!(is_no_encoded_file(decode_file(&raster, &config)));
    }
}

#[test]
fn segments_can_be_read_at_any_offset() {
    let raster = noisy_raster(40, 40, 13);
    let payload = Payload::new("x.y".into(), b"positional".to_vec());
    let config = config(
        3,
        Pattern::Random {
            seed: 7,
            lo: 1,
            hi: 4,
        },
        Obfuscation::None,
    );

    let cover = encode_file(&raster, &payload, &config).unwrap();

    // body starts after signature, name length, name and body length
    let offset = frame::frame_len(3, 0) as usize;
    let body = BitCursor::at(&config.pattern, config.bits_used, offset)
        .read_bytes(cover.bytes(), payload.content.len())
        .unwrap();

    assert_eq!(body, payload.content);
}

#[test]
fn survives_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cover.png");

    let raster = noisy_raster(64, 48, 14);
    let payload = random_payload(250, 14);
    let config = StegConfig::parse(3, "random,42,1,5", "vigenerekey").unwrap();

    encode_file(&raster, &payload, &config).unwrap().save(&path).unwrap();

    let loaded = Raster::load(&path).unwrap();
    assert_eq!(decode_file(&loaded, &config).unwrap(), payload);
}

#[test]
fn empty_payload_and_name() {
    let raster = Raster::blank(10, 10).unwrap();
    let payload = Payload::new(String::new(), vec![]);

    let cover = encode_file(&raster, &payload, &StegConfig::default()).unwrap();
    assert_eq!(decode_file(&cover, &StegConfig::default()).unwrap(), payload);
}
