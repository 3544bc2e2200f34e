//! Parallel k-mismatch enumeration over anchored windows.


use crate::error::{Error, Result};
use crate::index::SuffixIndex;

/// The four letters the mismatch enumerator substitutes among. The
/// enumerator is fixed to this alphabet regardless of what bytes the
/// underlying indices were built from.
const ALPHABET: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// A validated `(dstart, dend)` window pair: both offsets are relative to an
/// anchor position, non-positive, and `dstart < dend`, so the window always
/// lies at or upstream of the anchor. The only way to obtain one is
/// [`WindowOffsets::new`], which rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOffsets {
    dstart: i64,
    dend: i64,
}

impl WindowOffsets {
    /// Validate and construct a window pair.
    ///
    /// Despite the field names (kept for continuity with the positions they
    /// describe), the enforced constraints describe a window that sits at or
    /// *before* the anchor, never after it.
    pub fn new(dstart: i64, dend: i64) -> Result<Self> {
        if dstart >= dend {
            return Err(Error::InvalidArgument(format!(
                "dstart ({}) must be < dend ({})",
                dstart, dend
            )));
        }
        if dstart > 0 || dend > 0 {
            return Err(Error::InvalidArgument(format!(
                "window offsets must be <= 0, got dstart={} dend={}",
                dstart, dend
            )));
        }
        Ok(WindowOffsets { dstart, dend })
    }

    /// The window's length, `dend - dstart`.
    pub fn len(&self) -> usize {
        (self.dend - self.dstart) as usize
    }
}

/// For each anchor, the per-Hamming-distance count of occurrences of its
/// window (and every substitution variant of it, up to `k` substitutions) in
/// `target_index`, gated by the upstream prefix `anchor_text`.
///
/// `threads == 0` uses the process-wide rayon pool (one worker per hardware
/// thread by default). `threads > 0` builds a dedicated pool scoped to this
/// call. Anchors whose window would read before the start of
/// `anchor_index`'s text, or past its end, are silently skipped and no pair
/// is emitted for them. The order of the returned pairs is unspecified.
///
/// An allocation failure in any per-anchor worker poisons the whole call:
/// every worker still runs to completion, and once all have quiesced the
/// first [`Error::OutOfMemory`] (in anchor order) is returned instead of a
/// partial result.
pub fn find_repeat_counts(
    anchor_index: &SuffixIndex,
    anchors: &[usize],
    anchor_text: &[u8],
    target_index: &SuffixIndex,
    window: WindowOffsets,
    k: usize,
    threads: usize,
) -> Result<Vec<(usize, Vec<u64>)>> {
    let process = |&anchor: &usize| process_anchor(anchor_index, anchor_text, target_index, window, k, anchor);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let run = || anchors.par_iter().map(process).collect::<Vec<_>>();
        let raw = if threads == 0 {
            run()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| Error::InternalInvariant(format!("failed to build thread pool: {}", e)))?;
            pool.install(run)
        };
        finish(raw)
    }

    #[cfg(not(feature = "parallel"))]
    {
        let _ = threads;
        finish(anchors.iter().map(process).collect())
    }
}

/// Resolve the per-anchor results of a (possibly parallel) pass: every
/// worker runs to completion regardless of earlier failures, and only once
/// all have quiesced is the first [`Error::OutOfMemory`] (in anchor order)
/// returned, poisoning the whole call. With no failures, the skipped
/// anchors (`None`) are dropped and the rest collected in whatever order
/// the workers produced them.
fn finish(raw: Vec<Result<Option<(usize, Vec<u64>)>>>) -> Result<Vec<(usize, Vec<u64>)>> {
    if let Some(err) = raw.iter().find_map(|r| r.as_ref().err()) {
        return Err(err.clone());
    }
    Ok(raw.into_iter().filter_map(|r| r.unwrap()).collect())
}

fn process_anchor(
    anchor_index: &SuffixIndex,
    anchor_text: &[u8],
    target_index: &SuffixIndex,
    window: WindowOffsets,
    k: usize,
    anchor: usize,
) -> Result<Option<(usize, Vec<u64>)>> {
    let anchor_i = anchor as i64;
    let start = anchor_i + window.dstart;
    let end = anchor_i + window.dend;

    if start < 0 || end as usize > anchor_index.len() {
        return Ok(None);
    }

    let mut q = try_clone_slice(&anchor_index.text()[start as usize..end as usize])?;
    let mut counts = try_zeroed_u64_vec(k + 1)?;
    enumerate_variants(target_index, anchor_text, (-window.dstart) as usize, &mut q, 0, 0, k, &mut counts);
    Ok(Some((anchor, counts)))
}

/// `slice.to_vec()`, but surfacing allocation failure as
/// [`Error::OutOfMemory`] instead of aborting the worker.
fn try_clone_slice(slice: &[u8]) -> Result<Vec<u8>> {
    let mut v = Vec::new();
    v.try_reserve_exact(slice.len()).map_err(|_| Error::OutOfMemory)?;
    v.extend_from_slice(slice);
    Ok(v)
}

/// `vec![0u64; len]`, but surfacing allocation failure as
/// [`Error::OutOfMemory`] instead of aborting the worker.
fn try_zeroed_u64_vec(len: usize) -> Result<Vec<u64>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| Error::OutOfMemory)?;
    v.resize(len, 0);
    Ok(v)
}

/// Recursively substitute `{A,C,G,T} \ {original}` at every position from
/// `change_start` onward, at most `k` levels deep, counting matches in
/// `target_index` against `anchor_text` anchored `prefix_offset` bytes
/// upstream of each candidate.
///
/// Strictly increasing `change_start` across recursive calls ensures each
/// subset of substituted positions is visited exactly once, so no variant
/// string is ever generated (and counted) twice.
fn enumerate_variants(
    target_index: &SuffixIndex,
    anchor_text: &[u8],
    prefix_offset: usize,
    q: &mut [u8],
    change_start: usize,
    depth: usize,
    k: usize,
    counts: &mut [u64],
) {
    let hits = target_index.count_with_prefix(q, anchor_text, prefix_offset);
    counts[depth] += hits as u64;

    if depth == k {
        return;
    }

    for p in change_start..q.len() {
        let original = q[p];
        for &c in ALPHABET.iter() {
            if c == original {
                continue;
            }
            q[p] = c;
            enumerate_variants(target_index, anchor_text, prefix_offset, q, p + 1, depth + 1, k, counts);
        }
        q[p] = original;
    }
}
