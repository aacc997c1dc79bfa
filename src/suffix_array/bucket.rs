//! rust-sais
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
use core::ops::{Index, IndexMut};

/// Histogram of symbol occurrences, from which the per-pass bucket cursors
/// are derived.
pub(crate) struct BucketBuilder<'a, T: 'a> {
    counts: Box<[usize]>, // want to use RawVec but that is unstable
    array: &'a [T],
}

impl<'a, T: Copy> BucketBuilder<'a, T>
where
    usize: From<T>,
{
    pub fn new(array: &'a [T], key_bound: usize) -> Self {
        let mut counts = vec![0; key_bound].into_boxed_slice();

        for v in array {
            let v = usize::from(*v);
            if v >= key_bound {
                panic!("out of range: key bound {} <= {}", key_bound, v);
            }
            counts[v] += 1;
        }
        Self { counts, array }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn is_empty(&self) -> bool {
        self.counts().is_empty()
    }

    /// Cursors at the first slot of every bucket.
    pub fn heads(&self) -> Bucket<'a, T> {
        let mut sum = 0;
        let data = self
            .counts
            .iter()
            .map(|&c| {
                let head = sum;
                sum += c;
                head
            })
            .collect();
        Bucket::new(self.array, data)
    }

    /// Cursors one past the last slot of every bucket.
    pub fn tails(&self) -> Bucket<'a, T> {
        let mut sum = 0;
        let data = self
            .counts
            .iter()
            .map(|&c| {
                sum += c;
                sum
            })
            .collect();
        Bucket::new(self.array, data)
    }
}

/// Bucket cursors, indexed by text position: `bucket[i]` is the cursor of
/// the bucket that the symbol at position `i` belongs to.
pub(crate) struct Bucket<'a, T: 'a> {
    data: Box<[usize]>, // want to use RawVec but that is unstable
    array: &'a [T],
}

impl<'a, T> Bucket<'a, T> {
    pub fn new(array: &'a [T], data: Box<[usize]>) -> Self {
        Self { array, data }
    }
}

impl<'a, T: Copy> Index<usize> for Bucket<'a, T>
where
    usize: From<T>,
{
    type Output = usize;
    fn index(&self, idx: usize) -> &usize {
        &self.data[usize::from(self.array[idx])]
    }
}

impl<'a, T: Copy> IndexMut<usize> for Bucket<'a, T>
where
    usize: From<T>,
{
    fn index_mut(&mut self, idx: usize) -> &mut usize {
        &mut self.data[usize::from(self.array[idx])]
    }
}
