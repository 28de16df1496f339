// Merge sort trace generator

use crate::algorithms::{Meta, SortRecorder};
use crate::trace::{Category, Trace};

const META: Meta = Meta {
    name: "Merge Sort",
    key: "mergeSort",
    category: Category::Sorting,
    description: "Recursively splits the list into halves, then merges the \
                  sorted halves by repeatedly taking the smaller front \
                  element of the two runs.",
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
    pseudo_code: &[
        "function sort(lo, hi)",
        "  if hi - lo <= 1 return",
        "  mid = (lo + hi) / 2",
        "  sort(lo, mid)",
        "  sort(mid, hi)",
        "  merge(lo, mid, hi)",
        "function merge(lo, mid, hi)",
        "  while both runs non-empty",
        "    write the smaller front element",
        "  write any remaining elements",
    ],
    reference: Some("https://en.wikipedia.org/wiki/Merge_sort"),
};

/// Trace top-down merge sort over `input`.
///
/// Splitting emits no steps; each merge emits a comparison step while both
/// runs have a front element and a snapshot step per written element.
/// Merged values are only guaranteed final at the top-level merge, so
/// `completed` stays empty until then and fills left to right during it.
pub fn merge_sort(input: &[i32]) -> Trace {
    let mut rec = SortRecorder::new(input);
    let n = rec.len();
    if n > 1 {
        sort(&mut rec, 0, n);
    }
    rec.finish(META)
}

fn sort(rec: &mut SortRecorder, lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort(rec, lo, mid);
    sort(rec, mid, hi);
    merge(rec, lo, mid, hi);
}

fn merge(rec: &mut SortRecorder, lo: usize, mid: usize, hi: usize) {
    let top_level = lo == 0 && hi == rec.len();
    let left: Vec<i32> = (lo..mid).map(|i| rec.get(i)).collect();
    let right: Vec<i32> = (mid..hi).map(|i| rec.get(i)).collect();

    let mut i = 0;
    let mut j = 0;
    for k in lo..hi {
        let take_left = if i < left.len() && j < right.len() {
            // Highlight the front positions of the two runs as they stood
            // before this merge started overwriting them.
            rec.compare(lo + i, mid + j);
            left[i] <= right[j]
        } else {
            i < left.len()
        };

        if take_left {
            rec.set(k, left[i]);
            i += 1;
        } else {
            rec.set(k, right[j]);
            j += 1;
        }
        if top_level {
            rec.mark(k);
        }
        rec.snapshot();
    }
}
