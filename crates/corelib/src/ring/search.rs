//! Interpolation search over the sorted virtual-node hash table.

/// Finds the smallest index whose table entry is `>= item_hash`.
///
/// `hashes` is the ascending virtual-node table terminated by the sentinel,
/// so a qualifying index always exists and the result stays in bounds.
/// `partition_size` is the expected gap between consecutive entries under a
/// uniform hash distribution; it only steers probe placement, never
/// correctness.
///
/// Invariant: entries below `lo` are `< item_hash`, entries at or above `hi`
/// are `>= item_hash`. Every probe strictly narrows `[lo, hi)` (low samples
/// push `lo` past them, high samples pull `hi` onto them), so the loop
/// finishes within `hashes.len()` iterations.
pub(super) fn start_position(hashes: &[u64], item_hash: u64, partition_size: u64) -> usize {
    debug_assert!(!hashes.is_empty());
    debug_assert!(partition_size > 0);

    let mut lo = 0usize;
    let mut hi = hashes.len();
    let mut probe = (item_hash / partition_size) as usize;
    let mut fuel = hashes.len();

    while lo < hi {
        debug_assert!(fuel > 0, "interpolation search failed to converge");
        fuel = fuel.saturating_sub(1);

        let at = probe.clamp(lo, hi - 1);
        let sample = hashes[at];
        if sample < item_hash {
            lo = at + 1;
            let step = ((item_hash - sample) / partition_size) as usize;
            probe = (at + 1).saturating_add(step);
        } else {
            hi = at;
            let step = (((sample - item_hash) / partition_size) as usize).max(1);
            probe = at.saturating_sub(step);
        }
    }

    lo
}
