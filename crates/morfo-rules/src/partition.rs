// Shared partition step for the anchored rule tables.
//
// The break and replacement tables both reclassify one flat sequence
// into contiguous anchor ranges at load time; the partitioning itself
// lives here so each table only supplies its classifier and its marker
// stripping.

/// Stably partition `items` so every element matching `pred` precedes
/// every element that does not, preserving relative order within both
/// groups. Returns the boundary index (count of matching elements).
///
/// Stability is load-bearing: the tables' tie order is the rule author's
/// priority order and must survive reclassification.
pub(crate) fn stable_partition<T, F>(items: &mut [T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    // A stable sort on the classifier bool is a stable partition.
    items.sort_by_key(|x| !pred(x));
    items.partition_point(|x| pred(x))
}
