// Insertion sort trace generator

use crate::algorithms::{Meta, SortRecorder};
use crate::trace::{Category, Trace};

const META: Meta = Meta {
    name: "Insertion Sort",
    key: "insertionSort",
    category: Category::Sorting,
    description: "Builds a sorted prefix one element at a time, shifting \
                  larger predecessors rightward until each new element \
                  reaches its insertion point.",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    pseudo_code: &[
        "for i = 1 to n - 1",
        "  j = i",
        "  while j > 0 and array[j - 1] > array[j]",
        "    swap(array[j - 1], array[j])",
        "    j = j - 1",
        "  mark prefix 0..i as sorted",
    ],
    reference: Some("https://en.wikipedia.org/wiki/Insertion_sort"),
};

/// Trace insertion sort over `input`.
///
/// Each shift of a larger predecessor emits a comparison step followed by
/// a swap step; after every outer iteration the prefix up to the current
/// position is marked `completed`.
pub fn insertion_sort(input: &[i32]) -> Trace {
    let mut rec = SortRecorder::new(input);
    let n = rec.len();

    for i in 1..n {
        let mut j = i;
        while j > 0 {
            rec.compare(j - 1, j);
            if rec.get(j - 1) > rec.get(j) {
                rec.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
        for k in 0..=i {
            rec.mark(k);
        }
        rec.snapshot();
    }

    rec.finish(META)
}
