use sha2::{Digest as _, Sha256};
use sha256_core::Digest;
use sha256_core::hash::sha256::H256_INIT;
use sha256_core::hash::sha256::core::{compress_blocks, sha256, sha256_hex};

fn expect_sha256_eq(input: &[u8], expected: &str) {
    let got = sha256_hex(input).unwrap();

    assert_eq!(
        got,
        expected,
        "Digest mismatch for input of {} bytes\nExpected {}\nGot      {}",
        input.len(),
        expected,
        got,
    );
}

fn reference(input: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(input));
    out
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn sha256_abc_vector() {
    expect_sha256_eq(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn sha256_hello_world() {
    expect_sha256_eq(
        b"hello world",
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
    );
}

#[test]
fn sha256_two_block_vector() {
    expect_sha256_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_known_phrase() {
    expect_sha256_eq(
        b"The quick brown fox jumps over the lazy dog",
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    );
}

#[test]
fn sha256_one_million_a() {
    let buf = vec![b'a'; 1_000_000];

    expect_sha256_eq(
        &buf,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

// -------------------------------------------------------
// 2. PADDING BOUNDARIES
// -------------------------------------------------------

#[test]
fn sha256_padding_boundaries() {
    let cases: [(usize, &str); 7] = [
        (
            55,
            "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318",
        ),
        (
            56,
            "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a",
        ),
        (
            63,
            "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34",
        ),
        (
            64,
            "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb",
        ),
        (
            65,
            "635361c48bb9eab14198e76ea8ab7f1a41685d6ad62aa9146d301d4f17eb0ae0",
        ),
        (
            119,
            "31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb",
        ),
        (
            120,
            "2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c",
        ),
    ];

    for (len, expected) in cases {
        expect_sha256_eq(&vec![b'a'; len], expected);
    }
}

// -------------------------------------------------------
// 3. AGREEMENT WITH THE sha2 CRATE
// -------------------------------------------------------

#[test]
fn sha256_incremental_lengths_match_reference() {
    let mut buf = Vec::with_capacity(300);

    for i in 0..300 {
        let got = sha256(&buf).unwrap();
        assert_eq!(got.as_bytes(), &reference(&buf), "length {}", i);

        buf.push(i as u8);
    }
}

#[test]
fn sha256_ff_various_lengths() {
    for len in [1, 2, 4, 8, 16, 32, 64, 128, 255, 256, 1000] {
        let buf = vec![0xFF; len];
        assert_eq!(sha256(&buf).unwrap().as_bytes(), &reference(&buf));
    }
}

#[test]
fn sha256_single_bytes() {
    for b in 0u8..=255 {
        assert_eq!(sha256(&[b]).unwrap().as_bytes(), &reference(&[b]));
    }
}

// -------------------------------------------------------
// 4. GENERAL PROPERTIES
// -------------------------------------------------------

#[test]
fn sha256_is_deterministic() {
    let a = sha256(b"hello world").unwrap();
    let b = sha256(b"hello world").unwrap();

    assert_eq!(a, b);
}

#[test]
fn sha256_hex_is_64_lowercase_chars() {
    for len in [0, 1, 55, 56, 64, 200] {
        let hex = sha256_hex(&vec![0x5Au8; len]).unwrap();

        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}

#[test]
fn sha256_single_bit_flips_change_digest() {
    let base = b"hello world".to_vec();
    let original = sha256(&base).unwrap();

    for (byte, bit) in [(0, 0), (0, 7), (5, 3), (10, 0), (10, 7)] {
        let mut flipped = base.clone();
        flipped[byte] ^= 1 << bit;

        assert_ne!(
            sha256(&flipped).unwrap(),
            original,
            "flip of byte {} bit {} did not change the digest",
            byte,
            bit
        );
    }
}

#[test]
fn sha256_does_not_touch_caller_buffer() {
    let mut buf = Vec::with_capacity(256);
    buf.extend_from_slice(b"abc");
    let capacity = buf.capacity();

    let _ = sha256(&buf).unwrap();

    assert_eq!(buf, b"abc");
    assert_eq!(buf.capacity(), capacity);
}

#[test]
fn compress_blocks_of_nothing_is_initial_state() {
    let digest = compress_blocks(std::iter::empty::<&[u8; 64]>());

    assert_eq!(digest, Digest::from(H256_INIT));
    assert_eq!(
        digest.to_hex(),
        "6a09e667bb67ae853c6ef372a54ff53a510e527f9b05688c1f83d9ab5be0cd19"
    );
}
