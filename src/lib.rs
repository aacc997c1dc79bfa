//! rust-sais
//!
//! Linear time suffix array construction by induced sorting (SA-IS).
//!
//! ```
//! use sais::{suffix_array, suffix_array_str};
//!
//! assert_eq!(suffix_array(b"banana"), vec![5, 3, 1, 0, 4, 2]);
//! assert_eq!(suffix_array_str("abab"), vec![2, 0, 3, 1]);
//! ```
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

#![cfg_attr(not(feature = "std"), no_std)]
#![crate_type = "lib"]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

#[macro_use]
extern crate log;
extern crate num_traits;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate rand_xorshift;
#[cfg(test)]
extern crate simple_logger;

mod bitset;
mod error;
mod suffix_array;

pub use crate::error::SaisError;
pub use crate::suffix_array::bwt::{bwt, Bwt};
pub use crate::suffix_array::{
    suffix_array, suffix_array_str, suffix_array_with_bound, SuffixArrayExt,
};
