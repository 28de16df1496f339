// Bubble sort trace generator

use crate::algorithms::{Meta, SortRecorder};
use crate::trace::{Category, Trace};

const META: Meta = Meta {
    name: "Bubble Sort",
    key: "bubbleSort",
    category: Category::Sorting,
    description: "Repeatedly steps through the list, compares adjacent \
                  elements and swaps them if they are in the wrong order, \
                  until a full pass performs no swaps.",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    pseudo_code: &[
        "repeat",
        "  swapped = false",
        "  for i = 0 to boundary - 1",
        "    if array[i] > array[i + 1]",
        "      swap(array[i], array[i + 1])",
        "      swapped = true",
        "  mark boundary as sorted",
        "  boundary = boundary - 1",
        "until not swapped",
    ],
    reference: Some("https://en.wikipedia.org/wiki/Bubble_sort"),
};

/// Trace bubble sort over `input`.
///
/// Left-to-right adjacent-pair passes; after each pass the pass boundary is
/// the largest remaining element's final position, so `completed` grows
/// from the end of the array inward. Terminates early when a pass performs
/// no swaps, at which point every index is marked.
pub fn bubble_sort(input: &[i32]) -> Trace {
    let mut rec = SortRecorder::new(input);
    let n = rec.len();

    if n > 1 {
        let mut boundary = n - 1;
        loop {
            let mut swapped = false;
            for i in 0..boundary {
                rec.compare(i, i + 1);
                if rec.get(i) > rec.get(i + 1) {
                    rec.swap(i, i + 1);
                    swapped = true;
                }
            }
            rec.mark(boundary);
            rec.snapshot();
            if !swapped || boundary == 1 {
                break;
            }
            boundary -= 1;
        }
    }

    rec.finish(META)
}
