//! The suffix index: an immutable `(text, suffix array)` pair with
//! exact-match search primitives.


use crate::error::{Error, Result};
use crate::sais;

/// A byte string paired with its suffix array.
///
/// Construction is the only fallible operation; every search method takes
/// `&self` and never mutates or allocates beyond the result it returns, so a
/// single `SuffixIndex` can be shared across any number of concurrent
/// readers (see the mismatch enumerator in [`crate::mismatch`]).
#[derive(Clone)]
pub struct SuffixIndex {
    text: Vec<u8>,
    /// Length `text.len() + 1`. `sa[0]` is the virtual empty suffix at
    /// position `text.len()`; `sa[1..]` is the public suffix array.
    sa: Vec<u32>,
}

impl SuffixIndex {
    /// Build a suffix index over `text` using SA-IS induced sorting.
    ///
    /// Fails with [`Error::InvalidArgument`] if `text` is at or beyond the
    /// `u32`-offset length ceiling (see [`sais::MAX_LENGTH`]); the bound is
    /// strict because the SA-IS builder needs one spare offset value for the
    /// virtual empty suffix. Otherwise the only way this fails is allocation
    /// failure, surfaced as [`Error::OutOfMemory`] rather than the process
    /// abort that `Vec::with_capacity` would otherwise trigger.
    pub fn build(text: impl Into<Vec<u8>>) -> Result<Self> {
        let text = text.into();
        if text.len() >= sais::MAX_LENGTH {
            return Err(Error::InvalidArgument(format!(
                "text of {} bytes exceeds the {}-byte limit",
                text.len(),
                sais::MAX_LENGTH
            )));
        }

        let mut sa = Vec::new();
        sa.try_reserve_exact(text.len() + 1)
            .map_err(|_| Error::OutOfMemory)?;
        sa.resize(text.len() + 1, 0);
        sais::construct(&text, &mut sa);

        let index = SuffixIndex { text, sa };
        debug_assert!(
            index.check_integrity(),
            "SA-IS postcondition violated for a {}-byte input",
            index.text.len()
        );
        Ok(index)
    }

    /// Recompose an index from an already-sorted suffix array, checking the
    /// sortedness invariant before trusting it.
    ///
    /// `sa` must have length `text.len()` and be a permutation of
    /// `0..text.len()`; use this when an index was produced elsewhere (e.g.
    /// deserialized) and its integrity needs to be (re-)established before
    /// use. Returns [`Error::InternalInvariant`] if the check fails.
    pub fn from_parts(text: impl Into<Vec<u8>>, sa: Vec<u32>) -> Result<Self> {
        let text = text.into();
        if sa.len() != text.len() {
            return Err(Error::InternalInvariant(format!(
                "suffix array has {} entries, expected {}",
                sa.len(),
                text.len()
            )));
        }

        let mut full_sa = Vec::with_capacity(sa.len() + 1);
        full_sa.push(text.len() as u32);
        full_sa.extend(sa);

        let index = SuffixIndex {
            text,
            sa: full_sa,
        };
        if index.check_integrity() {
            Ok(index)
        } else {
            Err(Error::InternalInvariant(
                "suffix array is not a sorted permutation of the text".to_owned(),
            ))
        }
    }

    /// Recompose an index from parts without checking the sortedness
    /// invariant. Caller must uphold it; every other method on this type
    /// assumes it.
    ///
    /// # Safety
    /// Not memory-unsafe by itself, but every other method assumes `sa` is
    /// sorted; passing a non-sorted or non-permutation `sa` makes every
    /// search result meaningless without triggering any detectable error.
    pub unsafe fn unchecked_from_parts(text: impl Into<Vec<u8>>, sa: Vec<u32>) -> Self {
        let text = text.into();
        let mut full_sa = Vec::with_capacity(sa.len() + 1);
        full_sa.push(text.len() as u32);
        full_sa.extend(sa);
        SuffixIndex {
            text,
            sa: full_sa,
        }
    }

    fn check_integrity(&self) -> bool {
        if self.sa.len() != self.text.len() + 1 {
            return false;
        }
        for w in self.sa.windows(2) {
            let (a, b) = (w[0] as usize, w[1] as usize);
            if self.text[a..] >= self.text[b..] {
                return false;
            }
        }
        true
    }

    /// Length of the underlying text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The underlying text.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// The public suffix array: a permutation of `0..self.len()` in
    /// ascending suffix order.
    pub fn suffix_array(&self) -> &[u32] {
        &self.sa[1..]
    }

    /// Whether `pattern` occurs anywhere in the text.
    pub fn contains(&self, pattern: &[u8]) -> bool {
        if pattern.is_empty() {
            return true;
        }
        !self.match_range(pattern).is_empty()
    }

    /// Every start position `o` such that `text[o..o+pattern.len()] == pattern`.
    ///
    /// The empty pattern returns an empty list. Order is unspecified; treat
    /// the result as a set.
    pub fn locate(&self, pattern: &[u8]) -> Vec<usize> {
        self.match_range(pattern)
            .iter()
            .map(|&o| o as usize)
            .collect()
    }

    /// The number of start positions `o` such that
    /// `text[o..o+pattern.len()] == pattern` and
    /// `text[o-prefix_offset..o-prefix_offset+prefix.len()] == prefix`.
    ///
    /// Candidate positions where `o < prefix_offset` (the prefix window
    /// would start before the text) are skipped without counting as an
    /// error.
    pub fn count_with_prefix(&self, pattern: &[u8], prefix: &[u8], prefix_offset: usize) -> usize {
        self.match_range(pattern)
            .iter()
            .filter(|&&o| self.prefix_matches_at(o as usize, prefix, prefix_offset))
            .count()
    }

    fn prefix_matches_at(&self, o: usize, prefix: &[u8], prefix_offset: usize) -> bool {
        if prefix_offset > o {
            return false;
        }
        let start = o - prefix_offset;
        let end = start + prefix.len();
        end <= self.text.len() && &self.text[start..end] == prefix
    }

    /// The slice of `self.sa[1..]` whose entries begin with `pattern`, empty
    /// for the empty pattern or a pattern absent from the text.
    ///
    /// Uses two binary searches (lower and upper bound) over suffixes
    /// truncated to `pattern.len()` bytes, rather than the source's
    /// find-then-expand walk: both are `O(|pattern| log N)`, and truncating
    /// rather than relying on a bounded `strncmp` sidesteps the off-by-one
    /// at the last SA entry noted in the design notes.
    fn match_range(&self, pattern: &[u8]) -> &[u32] {
        if pattern.is_empty() || self.text.is_empty() {
            return &[];
        }

        let real_sa = &self.sa[1..];
        let lower = lower_bound(&self.text, real_sa, pattern);
        let upper = upper_bound(&self.text, real_sa, pattern);
        &real_sa[lower..upper]
    }
}

/// First index `i` in `sa` such that `truncate(text[sa[i]..], pat.len()) >= pat`.
fn lower_bound(text: &[u8], sa: &[u32], pat: &[u8]) -> usize {
    let mut lo = 0usize;
    let mut hi = sa.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let suffix = truncate(&text[sa[mid] as usize..], pat.len());
        if suffix < pat {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// First index `i` in `sa` such that `text[sa[i]..]` does not start with `pat`.
fn upper_bound(text: &[u8], sa: &[u32], pat: &[u8]) -> usize {
    let mut lo = 0usize;
    let mut hi = sa.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let suffix = &text[sa[mid] as usize..];
        if suffix.starts_with(pat) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

fn truncate(s: &[u8], max: usize) -> &[u8] {
    &s[..Ord::min(s.len(), max)]
}
