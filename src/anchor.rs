//! Locating anchor positions: a thin composition over [`SuffixIndex`].


use crate::index::SuffixIndex;

/// Every start position of `anchor_text` as a substring of `index`'s text.
///
/// Specified as its own function, separate from [`SuffixIndex::locate`],
/// because the mismatch enumerator accepts anchor positions as plain input
/// regardless of how they were obtained; this is simply the expected way to
/// obtain them.
pub fn anchor_locator(index: &SuffixIndex, anchor_text: &[u8]) -> Vec<usize> {
    index.locate(anchor_text)
}
