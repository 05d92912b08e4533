//! SHA-256 round computations
//!
//! The logical functions of FIPS 180-4 §4.1.2, the message schedule
//! expansion, and the 64-round core. All arithmetic wraps modulo 2³².

use super::{BLOCK_LEN, K256};

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expands one block into the 64-word message schedule.
///
/// The first 16 words are the block read as big-endian `u32`s; each of the
/// remaining 48 is derived from four earlier words.
pub fn expand_schedule(block: &[u8; BLOCK_LEN]) -> [u32; 64] {
    let mut w = [0u32; 64];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 16..64 {
        let s0 = small_sigma0(w[i - 15]);
        let s1 = small_sigma1(w[i - 2]);

        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    w
}

/// Runs the 64 rounds over `w` and accumulates the result into `state`.
pub fn all_rounds(state: &mut [u32; 8], w: &[u32; 64]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (&wi, &ki) in w.iter().zip(K256.iter()) {
        let bs1 = big_sigma1(e);
        let ch = ch(e, f, g);

        let t1 = h
            .wrapping_add(bs1)
            .wrapping_add(ch)
            .wrapping_add(ki)
            .wrapping_add(wi);

        let bs0 = big_sigma0(a);
        let maj = maj(a, b, c);

        let t2 = bs0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, var) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(var);
    }
}
