// Quick sort trace generator

use crate::algorithms::{Meta, SortRecorder};
use crate::trace::{Category, Trace};

const META: Meta = Meta {
    name: "Quick Sort",
    key: "quickSort",
    category: Category::Sorting,
    description: "Partitions the list around a pivot so smaller elements \
                  precede it and larger ones follow, then sorts both \
                  partitions recursively.",
    time_complexity: "O(n log n)",
    space_complexity: "O(log n)",
    pseudo_code: &[
        "function sort(lo, hi)",
        "  if lo >= hi return",
        "  pivot = array[hi]",
        "  i = lo",
        "  for j = lo to hi - 1",
        "    if array[j] < pivot",
        "      swap(array[i], array[j])",
        "      i = i + 1",
        "  swap(array[i], array[hi])",
        "  sort(lo, i - 1)",
        "  sort(i + 1, hi)",
    ],
    reference: Some("https://en.wikipedia.org/wiki/Quicksort"),
};

/// Trace quick sort over `input`.
///
/// Lomuto partition with the last element of the active partition as the
/// pivot. Each scan position is compared against the pivot; elements that
/// belong before it are swapped down, and the pivot's final resting index
/// is marked `completed` after each partition.
pub fn quick_sort(input: &[i32]) -> Trace {
    let mut rec = SortRecorder::new(input);
    let n = rec.len();
    if n > 0 {
        sort(&mut rec, 0, n as isize - 1);
    }
    rec.finish(META)
}

fn sort(rec: &mut SortRecorder, lo: isize, hi: isize) {
    if lo > hi {
        return;
    }
    if lo == hi {
        // Single-element partition is final by definition.
        rec.mark(lo as usize);
        rec.snapshot();
        return;
    }
    let p = partition(rec, lo as usize, hi as usize);
    sort(rec, lo, p as isize - 1);
    sort(rec, p as isize + 1, hi);
}

fn partition(rec: &mut SortRecorder, lo: usize, hi: usize) -> usize {
    let pivot = rec.get(hi);
    let mut i = lo;
    for j in lo..hi {
        rec.compare(j, hi);
        if rec.get(j) < pivot {
            if i != j {
                rec.swap(i, j);
            }
            i += 1;
        }
    }
    if i != hi {
        rec.swap(i, hi);
    }
    rec.mark(i);
    rec.snapshot();
    i
}
