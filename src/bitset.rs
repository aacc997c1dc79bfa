//! rust-sais
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
use core::fmt::{Debug, Formatter, Result};

/// Fixed length array of bits packed into `u64` words.
pub(crate) struct BitArray {
    data: Box<[u64]>, // want to use RawVec but that is unstable
    len: usize,
}

impl BitArray {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            data: vec![0_u64; (len + 63) >> 6].into_boxed_slice(),
            len,
        }
    }

    pub(crate) fn get(&self, idx: usize) -> bool {
        (self.data[idx >> 6] & (1 << ((idx & 63) as u64))) != 0
    }

    pub(crate) fn set(&mut self, idx: usize, value: bool) {
        let v = 1 << ((idx & 63) as u8);
        if value {
            self.data[idx >> 6] |= v;
        } else {
            self.data[idx >> 6] &= !v;
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn iter(&self) -> BitArrayIter<'_> {
        BitArrayIter {
            array: self,
            pos: 0,
            data: 0,
        }
    }
}

pub(crate) struct BitArrayIter<'a> {
    array: &'a BitArray,
    pos: usize,
    data: u64,
}

impl Iterator for BitArrayIter<'_> {
    type Item = bool;
    fn next(&mut self) -> Option<bool> {
        if self.pos < self.array.len {
            let d = 1 << ((self.pos & 63) as u64);
            if d == 1 {
                self.data = self.array.data[self.pos >> 6]
            }
            self.pos += 1;
            Some(self.data & d != 0)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.array.len - self.pos;
        (rest, Some(rest))
    }
}

impl Debug for BitArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
