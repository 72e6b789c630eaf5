//! SHA-256 round functions and block transform
//!
//! Two interchangeable versions of [`all_rounds`] are provided:
//!
//! - the default one runs the 64 rounds as a plain loop and shifts the
//!   working variables after every round
//! - the `speed` feature unrolls the rounds in groups of eight and renames
//!   the working variables instead of moving them
//!
//! Both expand the message schedule in a rolling 16-word window, so no
//! 64-word schedule is ever materialized. They produce identical output.

use super::K256;

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

/// Computes schedule word `W[t]` in place, for `t >= 16`.
///
/// Slot `t & 15` still holds `W[t - 16]` when this is called and receives
/// `W[t]` on return.
#[inline(always)]
fn expand(w: &mut [u32; 16], t: usize) {
    let w16 = w[t & 15];
    let w15 = w[(t + 1) & 15];
    let w7 = w[(t + 9) & 15];
    let w2 = w[(t + 14) & 15];

    w[t & 15] = w16
        .wrapping_add(small_sigma0(w15))
        .wrapping_add(w7)
        .wrapping_add(small_sigma1(w2));
}

/// Runs the 64 SHA-256 rounds over one block and folds the result back
/// into `state`.
///
/// `w` holds the first 16 schedule words, already decoded from the block
/// as big-endian integers.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 8], mut w: [u32; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (t, &k) in K256.iter().enumerate() {
        if t >= 16 {
            expand(&mut w, t);
        }

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w[t & 15]);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(v);
    }
}

/// Runs the 64 SHA-256 rounds over one block and folds the result back
/// into `state`.
///
/// Unrolled variant: each `round!` writes only `d` and `h`, and the next
/// round is called with the variable list rotated by one position.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 8], mut w: [u32; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    macro_rules! round {
        ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident, $t:expr) => {{
            let t = $t;

            let t1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(K256[t])
                .wrapping_add(w[t & 15]);

            let t2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));

            $d = $d.wrapping_add(t1);
            $h = t1.wrapping_add(t2);
        }};
    }

    macro_rules! eight_rounds {
        ($base:expr) => {{
            let base = $base;

            round!(a, b, c, d, e, f, g, h, base);
            round!(h, a, b, c, d, e, f, g, base + 1);
            round!(g, h, a, b, c, d, e, f, base + 2);
            round!(f, g, h, a, b, c, d, e, base + 3);
            round!(e, f, g, h, a, b, c, d, base + 4);
            round!(d, e, f, g, h, a, b, c, base + 5);
            round!(c, d, e, f, g, h, a, b, base + 6);
            round!(b, c, d, e, f, g, h, a, base + 7);
        }};
    }

    let mut t = 0;
    while t < 64 {
        // Refill the whole window ahead of the next sixteen rounds.
        if t >= 16 {
            for j in t..t + 16 {
                expand(&mut w, j);
            }
        }

        eight_rounds!(t);
        eight_rounds!(t + 8);

        t += 16;
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256::H256_INIT;

    #[test]
    fn sigma_functions_on_single_bit() {
        assert_eq!(big_sigma0(1), 0x4008_0400);
        assert_eq!(big_sigma1(1), 0x0420_0080);
        assert_eq!(small_sigma0(1), 0x0200_4000);
        assert_eq!(small_sigma1(1), 0x0000_a000);
        assert_eq!(small_sigma0(0x8000_0000), 0x1100_2000);
    }

    #[test]
    fn choice_and_majority() {
        let x = 0xdead_beef;
        let y = 0x0123_4567;

        assert_eq!(ch(u32::MAX, x, y), x);
        assert_eq!(ch(0, x, y), y);
        assert_eq!(maj(x, x, y), x);
        assert_eq!(maj(y, x, y), y);
    }

    #[test]
    fn single_block_abc() {
        let mut w = [0u32; 16];
        w[0] = 0x6162_6380;
        w[15] = 24;

        let mut state = H256_INIT;
        all_rounds(&mut state, w);

        assert_eq!(
            state,
            [
                0xba78_16bf,
                0x8f01_cfea,
                0x4141_40de,
                0x5dae_2223,
                0xb003_61a3,
                0x9617_7a9c,
                0xb410_ff61,
                0xf200_15ad,
            ]
        );
    }
}
