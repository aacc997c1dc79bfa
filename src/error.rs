//! rust-sais
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaisError {
    /// The symbol at `index` lies outside `[0, key_bound)`. `symbol` is
    /// `None` when the value does not fit in a `usize` at all.
    InvalidAlphabet {
        index: usize,
        symbol: Option<usize>,
        key_bound: usize,
    },
}

impl fmt::Display for SaisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SaisError::InvalidAlphabet {
                index,
                symbol: Some(symbol),
                key_bound,
            } => write!(
                f,
                "{} at offset {}: symbol {} is not below the key bound {}",
                self.description_in(),
                index,
                symbol,
                key_bound
            ),
            SaisError::InvalidAlphabet {
                index, key_bound, ..
            } => write!(
                f,
                "{} at offset {}: negative or oversized symbol for key bound {}",
                self.description_in(),
                index,
                key_bound
            ),
        }
    }
}

#[cfg(feature = "std")]
impl ::std::error::Error for SaisError {}

impl SaisError {
    fn description_in(&self) -> &str {
        match *self {
            SaisError::InvalidAlphabet { .. } => "symbol outside of alphabet",
        }
    }
}
