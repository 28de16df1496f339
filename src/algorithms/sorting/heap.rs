// Heap sort trace generator

use crate::algorithms::{Meta, SortRecorder};
use crate::trace::{Category, Trace};

const META: Meta = Meta {
    name: "Heap Sort",
    key: "heapSort",
    category: Category::Sorting,
    description: "Builds a max-heap over the list, then repeatedly swaps \
                  the heap root with the last unsorted element and sifts \
                  the new root down the reduced heap.",
    time_complexity: "O(n log n)",
    space_complexity: "O(1)",
    pseudo_code: &[
        "for root = n / 2 - 1 down to 0",
        "  siftDown(root, n)",
        "for end = n - 1 down to 1",
        "  swap(array[0], array[end])",
        "  mark end as sorted",
        "  siftDown(0, end)",
    ],
    reference: Some("https://en.wikipedia.org/wiki/Heapsort"),
};

/// Trace heap sort over `input`.
///
/// Every comparison and swap inside a sift-down emits a step; each
/// extraction swaps the root to the end of the heap and marks that
/// position `completed`.
pub fn heap_sort(input: &[i32]) -> Trace {
    let mut rec = SortRecorder::new(input);
    let n = rec.len();

    if n > 1 {
        for root in (0..n / 2).rev() {
            sift_down(&mut rec, root, n);
        }
        for end in (1..n).rev() {
            rec.swap(0, end);
            rec.mark(end);
            rec.snapshot();
            sift_down(&mut rec, 0, end);
        }
    }

    rec.finish(META)
}

/// Restore the max-heap property for the subtree at `root`, heap bounded
/// by `end` (exclusive).
fn sift_down(rec: &mut SortRecorder, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end {
            rec.compare(child, child + 1);
            if rec.get(child + 1) > rec.get(child) {
                child += 1;
            }
        }
        rec.compare(root, child);
        if rec.get(root) < rec.get(child) {
            rec.swap(root, child);
            root = child;
        } else {
            break;
        }
    }
}
