//! Suffix-array text search with a parallel k-mismatch enumerator.
//!
//! Builds a suffix array over an arbitrary byte string using SA-IS induced
//! sorting (see [Two Efficient Algorithms for Linear Time Suffix Array
//! Construction](https://ieeexplore.ieee.org/document/5582081)), exposes
//! exact-match search over it, and layers a recursive Hamming-distance
//! mismatch enumerator on top, intended for locating near-matches of short
//! anchored windows across many positions in parallel.
//!
//! ```
//! use anchor_array::{anchor_locator, find_repeat_counts, SuffixIndex, WindowOffsets};
//!
//! let anchors = SuffixIndex::build(b"NNNNAAAC".to_vec()).unwrap();
//! let target = SuffixIndex::build(b"AAACAAAC".to_vec()).unwrap();
//!
//! let positions = anchor_locator(&anchors, b"AAAC");
//! let window = WindowOffsets::new(-3, 0).unwrap();
//! let results = find_repeat_counts(&anchors, &positions, b"", &target, window, 1, 1).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].1.len(), 2); // counts[0..=k]
//! ```

mod anchor;
mod error;
mod index;
mod mismatch;
mod sais;


pub use anchor::anchor_locator;
pub use error::{Error, Result};
pub use index::SuffixIndex;
pub use mismatch::{find_repeat_counts, WindowOffsets};
