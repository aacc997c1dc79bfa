//! rust-sais
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use crate::suffix_array::suffix_array;

/// Burrows-Wheeler transform of a text terminated by an implicit sentinel
/// that sorts before every byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bwt {
    /// Last column of the sorted rotations with the sentinel left out.
    pub last: Vec<u8>,
    /// Row whose last character is the sentinel.
    pub primary: usize,
}

/// Computes the transform from the suffix array of `data`. Row 0 is always
/// the rotation starting at the sentinel.
pub fn bwt(data: &[u8]) -> Bwt {
    let sa = suffix_array(data);
    let mut last = Vec::with_capacity(data.len());
    let mut primary = 0;

    if let Some(&c) = data.last() {
        last.push(c);
    }
    for (row, &i) in sa.iter().enumerate() {
        if i == 0 {
            primary = row + 1;
        } else {
            last.push(data[i - 1]);
        }
    }
    Bwt { last, primary }
}

impl Bwt {
    /// Restores the original text by walking the last-to-first mapping
    /// backwards from the sentinel row.
    ///
    /// # Panics
    ///
    /// Panics if `primary` is not the one produced by [`bwt`] for `last`.
    pub fn inverse(&self) -> Vec<u8> {
        let count = self.last.len();
        if count == 0 {
            return Vec::new();
        }
        assert!(
            self.primary > 0 && self.primary <= count,
            "primary row {} out of range",
            self.primary
        );

        let mut occurrences = [0_usize; 256];
        let mut rank = Vec::with_capacity(count);
        for &c in &self.last {
            let c = usize::from(c);
            rank.push(occurrences[c]);
            occurrences[c] += 1;
        }

        // first row of every byte, after the sentinel row
        let mut starts = [0_usize; 256];
        let mut sum = 1;
        for (s, &o) in starts.iter_mut().zip(occurrences.iter()) {
            *s = sum;
            sum += o;
        }

        let mut data = vec![0_u8; count];
        let mut row = 0;
        for k in (0..count).rev() {
            let j = if row < self.primary { row } else { row - 1 };
            let c = self.last[j];
            data[k] = c;
            row = starts[usize::from(c)] + rank[j];
        }
        data
    }
}
