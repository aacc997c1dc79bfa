//! rust-sais
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use crate::bitset::BitArray;
use core::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LSType {
    /// The suffix is larger than the one starting one position later.
    L,
    /// The suffix is smaller than the one starting one position later.
    S,
}

/// S/L classification of every position, stored one bit per position
/// (set means S).
#[derive(Debug)]
pub(crate) struct LSTypeArray {
    bitmap: BitArray,
    lms_count: usize,
}

impl LSTypeArray {
    pub fn new<T: Ord>(array: &[T]) -> Self {
        let mut bitmap = BitArray::new(array.len());
        let mut lms_count = 0;

        // the sentinel past the end is S, so the last position is always L
        let mut prev_type = LSType::L;
        let mut prev_key: Option<&T> = None;

        for (i, key) in array.iter().enumerate().rev() {
            match prev_key.map(|p| key.cmp(p)) {
                None | Some(Ordering::Greater) => {
                    if prev_type == LSType::S {
                        // position i + 1 was a LMS position
                        lms_count += 1;
                    }
                    prev_type = LSType::L;
                }
                Some(Ordering::Less) => prev_type = LSType::S,
                Some(Ordering::Equal) => {}
            }
            bitmap.set(i, prev_type == LSType::S);
            prev_key = Some(key);
        }

        Self { bitmap, lms_count }
    }

    pub fn get(&self, idx: usize) -> LSType {
        if self.bitmap.get(idx) {
            LSType::S
        } else {
            LSType::L
        }
    }

    pub fn is_lms(&self, idx: usize) -> bool {
        idx > 0
            && idx < self.len()
            && self.bitmap.get(idx)
            && !self.bitmap.get(idx - 1)
    }

    pub fn lms_count(&self) -> usize {
        self.lms_count
    }

    /// LMS positions in text order.
    pub fn lms_positions(&self) -> Vec<usize> {
        let mut positions = Vec::with_capacity(self.lms_count);
        let mut previous = LSType::S;
        for (i, b) in self.bitmap.iter().enumerate() {
            let current = if b { LSType::S } else { LSType::L };
            if current == LSType::S && previous == LSType::L {
                positions.push(i);
            }
            previous = current;
        }
        debug_assert_eq!(positions.len(), self.lms_count);
        positions
    }

    pub fn len(&self) -> usize {
        self.bitmap.len()
    }
}
