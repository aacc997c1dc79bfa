//! rust-sais
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use crate::suffix_array::bucket::BucketBuilder;
use crate::suffix_array::ls_type::{LSType, LSTypeArray};

fn fill(array: &mut [usize], value: usize) {
    for a in array.iter_mut() {
        *a = value
    }
}

/// Sorts every suffix from the LMS positions in `lms`, whose relative order
/// is taken as given. Empty slots hold `type_array.len()` while running.
fn induce_sa<T: Copy>(
    bucket_builder: &BucketBuilder<T>,
    type_array: &LSTypeArray,
    lms: &[usize],
    suffix_array: &mut [usize],
) where
    usize: From<T>,
{
    assert!(!bucket_builder.is_empty(), "buckets must not be empty");

    let count = type_array.len();
    let last = count - 1;
    fill(suffix_array, count);

    // put the LMS positions at the ends of their buckets
    {
        let mut bucket = bucket_builder.tails();
        for &i in lms.iter().rev() {
            let bi = bucket[i] - 1;
            bucket[i] = bi;
            suffix_array[bi] = i;
        }
    }

    // compute SAl
    {
        let mut bucket = bucket_builder.heads();

        // the suffix before the sentinel
        if type_array.get(last) == LSType::L {
            let bl = bucket[last];
            suffix_array[bl] = last;
            bucket[last] = bl + 1;
        }

        for i in 0..count {
            let j = suffix_array[i];
            if j != count && j > 0 {
                let j = j - 1;
                if type_array.get(j) == LSType::L {
                    let bj = bucket[j];
                    suffix_array[bj] = j;
                    bucket[j] = bj + 1;
                }
            }
        }
    }

    // compute SAs
    {
        let mut bucket = bucket_builder.tails();
        for i in (0..count).rev() {
            let j = suffix_array[i];
            if j != count && j > 0 {
                let j = j - 1;
                if type_array.get(j) == LSType::S {
                    let bj = bucket[j] - 1;
                    bucket[j] = bj;
                    suffix_array[bj] = j;
                }
            }
        }

        if type_array.get(last) == LSType::S {
            let bl = bucket[last] - 1;
            bucket[last] = bl;
            suffix_array[bl] = last;
        }
    }
}

/// Compares the LMS substrings starting at `a` and `b`. A substring ends at
/// the end of the text or at the first S position following an L position.
fn lms_substring_eq<T: PartialEq>(
    array: &[T],
    type_array: &LSTypeArray,
    a: usize,
    b: usize,
) -> bool {
    let count = array.len();
    let mut a_type = LSType::S;
    let mut b_type = LSType::S;
    let mut k = 0;
    loop {
        let a_end = a + k >= count
            || (a_type == LSType::L && type_array.get(a + k) == LSType::S);
        let b_end = b + k >= count
            || (b_type == LSType::L && type_array.get(b + k) == LSType::S);

        if a_end && b_end {
            return true;
        }
        if a_end != b_end || array[a + k] != array[b + k] {
            return false;
        }

        a_type = type_array.get(a + k);
        b_type = type_array.get(b + k);
        k += 1;
    }
}

/// Names the LMS substrings in the order they appear in `suffix_array`.
/// Rewrites `lms` into that order and returns the names aligned with it
/// together with the number of distinct names.
fn name_lms_substrings<T: PartialEq>(
    array: &[T],
    type_array: &LSTypeArray,
    suffix_array: &[usize],
    lms: &mut [usize],
) -> (Vec<usize>, usize) {
    let mut names = Vec::with_capacity(lms.len());
    let mut name = 0;
    let mut prev: Option<usize> = None;

    for &pos in suffix_array {
        if !type_array.is_lms(pos) {
            continue;
        }
        if let Some(prev) = prev {
            if !lms_substring_eq(array, type_array, prev, pos) {
                name += 1;
            }
        }
        lms[names.len()] = pos;
        names.push(name);
        prev = Some(pos);
    }
    debug_assert_eq!(names.len(), lms.len());

    (names, name + 1)
}

/// Computes the suffix array of `array`, whose symbols are all below
/// `key_bound`, into `suffix_array`.
pub(crate) fn sa_is<T: Copy + Ord>(
    array: &[T],
    suffix_array: &mut [usize],
    key_bound: usize,
    depth: usize,
) where
    usize: From<T>,
{
    let count = array.len();
    debug_assert_eq!(count, suffix_array.len());
    match count {
        0 => return,
        1 => {
            suffix_array[0] = 0;
            return;
        }
        _ => {}
    }

    let type_array = LSTypeArray::new(array);
    let mut lms = type_array.lms_positions();
    let bucket_builder = BucketBuilder::new(array, key_bound);

    // each level is at most half of its parent, which bounds the depth
    assert!(
        lms.len() * 2 <= count,
        "too many LMS positions: {} of {}",
        lms.len(),
        count
    );
    debug!(
        "sa-is depth {}: length {}, key bound {}, lms {}",
        depth,
        count,
        key_bound,
        type_array.lms_count()
    );

    if lms.len() > 1 {
        // stage 1: sort the LMS substrings
        induce_sa(&bucket_builder, &type_array, &lms, suffix_array);

        let (names, name_count) =
            name_lms_substrings(array, &type_array, suffix_array, &mut lms);
        trace!(
            "sa-is depth {}: {} distinct names for {} lms substrings",
            depth,
            name_count,
            lms.len()
        );

        // stage 2: solve the reduced problem
        // recurse if names are not yet unique
        if name_count < lms.len() {
            // the names are parked at their LMS positions and read back in
            // text order
            for (&pos, &name) in lms.iter().zip(names.iter()) {
                suffix_array[pos] = name;
            }
            let text_order = type_array.lms_positions();
            let reduced = text_order
                .iter()
                .map(|&pos| suffix_array[pos])
                .collect::<Vec<_>>();

            let mut reduced_sa = vec![0; reduced.len()];
            sa_is::<usize>(&reduced, &mut reduced_sa, name_count, depth + 1);

            // map the reduced order back to text positions
            for r in reduced_sa.iter_mut() {
                *r = text_order[*r];
            }
            lms = reduced_sa;
        }
    }

    // stage 3: induce the result for the original problem
    induce_sa(&bucket_builder, &type_array, &lms, suffix_array);
}
