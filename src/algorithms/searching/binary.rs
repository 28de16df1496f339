// Binary search trace generator

use crate::algorithms::{Meta, SearchRecorder};
use crate::trace::{Category, Trace};

const META: Meta = Meta {
    name: "Binary Search",
    key: "binarySearch",
    category: Category::Searching,
    description: "Repeatedly halves a [low, high] bound over a sorted \
                  list, comparing the midpoint value to the target.",
    time_complexity: "O(log n)",
    space_complexity: "O(1)",
    pseudo_code: &[
        "low = 0, high = n - 1",
        "while low <= high",
        "  mid = (low + high) / 2",
        "  if array[mid] == target",
        "    return mid",
        "  else if array[mid] < target",
        "    low = mid + 1",
        "  else",
        "    high = mid - 1",
        "return not found",
    ],
    reference: Some("https://en.wikipedia.org/wiki/Binary_search"),
};

/// Trace binary search for `target`.
///
/// Each step examines the midpoint of the current bound and narrows the
/// bound toward the target. Terminates with `found = true` at a matching
/// midpoint, or with an empty bound, no current index and `found = false`.
///
/// # Precondition
///
/// `input` must be sorted in ascending order. Passing an unsorted array
/// yields an undefined (but non-panicking) result; the input is not
/// validated.
pub fn binary_search(input: &[i32], target: i32) -> Trace {
    let mut rec = SearchRecorder::new(input, target);

    let mut low = 0isize;
    let mut high = rec.len() as isize - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        let value = rec.get(mid as usize);
        let found = value == rec.target();
        rec.visit(mid as usize, found);
        if found {
            return rec.finish(META);
        }
        if value < rec.target() {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    rec.exhausted();
    rec.finish(META)
}
