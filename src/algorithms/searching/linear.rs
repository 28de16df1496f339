// Linear search trace generator

use crate::algorithms::{Meta, SearchRecorder};
use crate::trace::{Category, Trace};

const META: Meta = Meta {
    name: "Linear Search",
    key: "linearSearch",
    category: Category::Searching,
    description: "Examines each element from left to right until the \
                  target is found or the list is exhausted.",
    time_complexity: "O(n)",
    space_complexity: "O(1)",
    pseudo_code: &[
        "for i = 0 to n - 1",
        "  if array[i] == target",
        "    return i",
        "return not found",
    ],
    reference: Some("https://en.wikipedia.org/wiki/Linear_search"),
};

/// Trace a left-to-right scan for `target`.
///
/// One step per index visited; stops at the first match. If the scan
/// exhausts the array, the final step has no current index and
/// `found = false`, with every index in `visited`.
pub fn linear_search(input: &[i32], target: i32) -> Trace {
    let mut rec = SearchRecorder::new(input, target);

    for i in 0..rec.len() {
        let found = rec.get(i) == rec.target();
        rec.visit(i, found);
        if found {
            return rec.finish(META);
        }
    }

    rec.exhausted();
    rec.finish(META)
}
