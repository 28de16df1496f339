// Selection sort trace generator

use crate::algorithms::{Meta, SortRecorder};
use crate::trace::{Category, Trace};

const META: Meta = Meta {
    name: "Selection Sort",
    key: "selectionSort",
    category: Category::Sorting,
    description: "Divides the list into a sorted prefix and an unsorted \
                  suffix, repeatedly selecting the smallest remaining \
                  element and swapping it into place.",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    pseudo_code: &[
        "for i = 0 to n - 1",
        "  min = i",
        "  for j = i + 1 to n - 1",
        "    if array[j] < array[min]",
        "      min = j",
        "  swap(array[i], array[min])",
        "  mark i as sorted",
    ],
    reference: Some("https://en.wikipedia.org/wiki/Selection_sort"),
};

/// Trace selection sort over `input`.
///
/// Every minimum-candidate comparison in the suffix scan emits a step;
/// `completed` grows from the front, one position per outer iteration.
pub fn selection_sort(input: &[i32]) -> Trace {
    let mut rec = SortRecorder::new(input);
    let n = rec.len();

    for i in 0..n {
        let mut min = i;
        for j in (i + 1)..n {
            rec.compare(j, min);
            if rec.get(j) < rec.get(min) {
                min = j;
            }
        }
        if min != i {
            rec.swap(i, min);
        }
        rec.mark(i);
        rec.snapshot();
    }

    rec.finish(META)
}
