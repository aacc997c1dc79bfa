//! rust-sais
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

pub(crate) mod bucket;
pub mod bwt;
pub(crate) mod ls_type;
pub(crate) mod sais;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use crate::error::SaisError;
use crate::suffix_array::sais::sa_is;
use num_traits::{cast, PrimInt};

const BYTE_KEY_BOUND: usize = 256;

/// Computes the suffix array of `data`: the starting offsets of all of its
/// suffixes in lexicographic order, where a proper prefix sorts first.
pub fn suffix_array(data: &[u8]) -> Vec<usize> {
    let mut sa = vec![0; data.len()];
    sa_is(data, &mut sa, BYTE_KEY_BOUND, 0);
    sa
}

/// Computes the suffix array of the UTF-8 encoding of `text`. The offsets
/// are byte offsets, not character offsets.
pub fn suffix_array_str(text: &str) -> Vec<usize> {
    suffix_array(text.as_bytes())
}

/// Computes the suffix array of a text over the integer alphabet
/// `0..key_bound`.
///
/// # Errors
///
/// Returns [`SaisError::InvalidAlphabet`] for the first symbol that is
/// negative or not below `key_bound`.
pub fn suffix_array_with_bound<T: PrimInt>(
    text: &[T],
    key_bound: usize,
) -> Result<Vec<usize>, SaisError> {
    let mut max_symbol = 0;
    let symbols = text
        .iter()
        .enumerate()
        .map(|(index, &v)| match cast::<T, usize>(v) {
            Some(symbol) if symbol < key_bound => {
                max_symbol = max_symbol.max(symbol);
                Ok(symbol)
            }
            symbol => Err(SaisError::InvalidAlphabet {
                index,
                symbol,
                key_bound,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    // the bucket table only needs to cover the symbols actually present
    let mut sa = vec![0; symbols.len()];
    sa_is(&symbols, &mut sa, key_bound.min(max_symbol + 1), 0);
    Ok(sa)
}

pub trait SuffixArrayExt {
    fn suffix_array(&self) -> Vec<usize>;
}

impl SuffixArrayExt for [u8] {
    fn suffix_array(&self) -> Vec<usize> {
        suffix_array(self)
    }
}

impl SuffixArrayExt for str {
    fn suffix_array(&self) -> Vec<usize> {
        suffix_array_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Standard;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;
    use simple_logger;

    fn setup() {
        let _ = simple_logger::init();
    }

    fn is_sorted_permutation(data: &[u8], sa: &[usize]) -> bool {
        let mut seen = vec![false; data.len()];
        for &i in sa {
            if i >= data.len() || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        sa.windows(2).all(|w| data[w[0]..] < data[w[1]..])
    }

    fn naive(data: &[u8]) -> Vec<usize> {
        let mut sa = (0..data.len()).collect::<Vec<_>>();
        sa.sort_by(|&a, &b| data[a..].cmp(&data[b..]));
        sa
    }

    #[test]
    fn known_small_strings() {
        setup();
        assert_eq!(suffix_array_str("banana"), vec![5, 3, 1, 0, 4, 2]);
        assert_eq!(
            suffix_array_str("missisipi"),
            vec![8, 6, 4, 1, 0, 7, 5, 3, 2]
        );
        assert_eq!(
            suffix_array_str("The quick brown fox jumps over the lazy dog."),
            vec![
                9, 39, 15, 19, 34, 25, 3, 30, 43, 0, 36, 10, 7, 40, 33, 2, 28,
                16, 42, 32, 1, 6, 20, 8, 35, 22, 14, 41, 26, 12, 17, 23, 4, 29,
                11, 24, 31, 5, 21, 27, 13, 18, 38, 37,
            ]
        );
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(suffix_array_str(""), Vec::<usize>::new());
        assert_eq!(suffix_array(&[]), Vec::<usize>::new());
        assert_eq!(suffix_array_str("a"), vec![0]);
        assert_eq!(suffix_array_str("6"), vec![0]);
        assert_eq!(suffix_array(&[0xFF]), vec![0]);
    }

    #[test]
    fn repeated_characters() {
        assert_eq!(suffix_array_str("aaa"), vec![2, 1, 0]);
        assert_eq!(suffix_array_str("aaaaa"), vec![4, 3, 2, 1, 0]);
        let long = "a".repeat(46);
        assert_eq!(
            suffix_array_str(&long),
            (0..46).rev().collect::<Vec<usize>>()
        );
    }

    #[test]
    fn two_distinct_characters() {
        assert_eq!(suffix_array_str("abab"), vec![2, 0, 3, 1]);
        assert_eq!(
            suffix_array_str("383838383838383838"),
            vec![16, 14, 12, 10, 8, 6, 4, 2, 0, 17, 15, 13, 11, 9, 7, 5, 3, 1]
        );
    }

    #[test]
    fn multi_byte_text_uses_byte_offsets() {
        let text = "cafééclair";
        assert_eq!(text.len(), 12);
        let sa = suffix_array_str(text);
        assert_eq!(sa, vec![1, 9, 0, 7, 2, 10, 8, 11, 6, 4, 5, 3]);
        assert!(is_sorted_permutation(text.as_bytes(), &sa));
        // the continuation bytes of "é" (0xA9) are suffix starts too
        assert!(sa.iter().any(|&i| !text.is_char_boundary(i)));
    }

    #[test]
    fn extension_trait() {
        assert_eq!("banana".suffix_array(), vec![5, 3, 1, 0, 4, 2]);
        assert_eq!(b"banana"[..].suffix_array(), vec![5, 3, 1, 0, 4, 2]);
        let owned = b"abab".to_vec();
        assert_eq!(owned.suffix_array(), vec![2, 0, 3, 1]);
    }

    #[test]
    fn deterministic() {
        let data = b"mmiissiissiippiimmiissiissiippii";
        assert_eq!(suffix_array(data), suffix_array(data));
    }

    #[test]
    fn fuzz() {
        setup();
        let mut rng = XorShiftRng::from_seed([
            0xDA, 0xE1, 0x4B, 0x0B, 0xFF, 0xC2, 0xFE, 0x64, 0x23, 0xFE, 0x3F,
            0x51, 0x6D, 0x3E, 0xA2, 0xF3,
        ]);

        for _ in 0..100 {
            let len = rng.gen_range(0..1024 * 5);
            let data = (&mut rng)
                .sample_iter(&Standard)
                .take(len)
                .collect::<Vec<u8>>();
            let sa = suffix_array(&data);
            assert!(is_sorted_permutation(&data, &sa));
            assert_eq!(sa, naive(&data));
        }
    }

    #[test]
    fn with_bound_matches_bytes() {
        let data = b"mississippi";
        let wide = data.iter().map(|&b| u32::from(b)).collect::<Vec<_>>();
        assert_eq!(suffix_array_with_bound(&wide, 256), Ok(suffix_array(data)));

        let small = [3_i64, 1, 2, 1, 2, 0];
        assert_eq!(
            suffix_array_with_bound(&small, 4),
            Ok(vec![5, 3, 1, 4, 2, 0])
        );
        assert_eq!(
            suffix_array_with_bound::<u16>(&[], 0),
            Ok(Vec::<usize>::new())
        );
    }

    #[test]
    fn with_bound_huge_key_bound() {
        assert_eq!(
            suffix_array_with_bound(&[1_u64, 2, 1], usize::MAX),
            Ok(vec![2, 0, 1])
        );
        assert_eq!(
            suffix_array_with_bound(&[40_u32, 7, 40], u32::MAX as usize),
            Ok(vec![1, 2, 0])
        );
        assert_eq!(
            suffix_array_with_bound::<u64>(&[], usize::MAX),
            Ok(Vec::<usize>::new())
        );
    }

    #[test]
    fn with_bound_rejects_symbols_outside_alphabet() {
        assert_eq!(
            suffix_array_with_bound(&[0_u8, 1, 4, 2], 4),
            Err(SaisError::InvalidAlphabet {
                index: 2,
                symbol: Some(4),
                key_bound: 4,
            })
        );
        assert_eq!(
            suffix_array_with_bound(&[1_i32, -1], 4),
            Err(SaisError::InvalidAlphabet {
                index: 1,
                symbol: None,
                key_bound: 4,
            })
        );
        assert!(suffix_array_with_bound(&[0_u8], 0).is_err());
    }
}
