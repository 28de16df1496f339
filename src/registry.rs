//! Algorithm registry: a closed set of trace generators
//!
//! Instead of a string-keyed map of function pointers, the registry is the
//! [`Algorithm`] enum dispatched through exhaustive matches, so a missing
//! table entry is a compile error rather than a runtime lookup miss.
//! String keys only exist at the edges: [`Algorithm::resolve`] turns an
//! externally supplied key into a variant (or `None`, never a panic), and
//! [`catalog`] exposes the static metadata listings are built from.

use serde::{Deserialize, Serialize};

use crate::algorithms::searching::{binary_search, linear_search};
use crate::algorithms::sorting::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
use crate::random::random_value_from;
use crate::trace::{Category, Trace};

/// Every algorithm the engine can trace.
///
/// Serializes as its registry key (`"bubbleSort"`, ...), so persisted
/// records keep the external string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    LinearSearch,
    BinarySearch,
}

/// All algorithms, in catalog order.
pub const ALL_ALGORITHMS: [Algorithm; 8] = [
    Algorithm::BubbleSort,
    Algorithm::SelectionSort,
    Algorithm::InsertionSort,
    Algorithm::MergeSort,
    Algorithm::QuickSort,
    Algorithm::HeapSort,
    Algorithm::LinearSearch,
    Algorithm::BinarySearch,
];

impl Algorithm {
    /// Look up an algorithm by its stable string key.
    ///
    /// Unknown keys are a recoverable condition: the result is `None`,
    /// never a panic or an error.
    pub fn resolve(key: &str) -> Option<Algorithm> {
        match key {
            "bubbleSort" => Some(Algorithm::BubbleSort),
            "selectionSort" => Some(Algorithm::SelectionSort),
            "insertionSort" => Some(Algorithm::InsertionSort),
            "mergeSort" => Some(Algorithm::MergeSort),
            "quickSort" => Some(Algorithm::QuickSort),
            "heapSort" => Some(Algorithm::HeapSort),
            "linearSearch" => Some(Algorithm::LinearSearch),
            "binarySearch" => Some(Algorithm::BinarySearch),
            _ => None,
        }
    }

    /// The stable string key, e.g. `"bubbleSort"`.
    pub fn key(&self) -> &'static str {
        self.info().key
    }

    /// Display name, e.g. `"Bubble Sort"`.
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn category(&self) -> Category {
        self.info().category
    }

    /// Static catalog entry for this algorithm.
    pub fn info(&self) -> &'static AlgorithmInfo {
        &CATALOG[*self as usize]
    }

    /// Run the trace generator for this algorithm.
    ///
    /// Sorting algorithms ignore `target`. Searching algorithms use it as
    /// the value to look for; when absent, a random element of `data` is
    /// drawn so the search still has something plausible to find.
    pub fn generate(&self, data: &[i32], target: Option<i32>) -> Trace {
        match self {
            Algorithm::BubbleSort => bubble_sort(data),
            Algorithm::SelectionSort => selection_sort(data),
            Algorithm::InsertionSort => insertion_sort(data),
            Algorithm::MergeSort => merge_sort(data),
            Algorithm::QuickSort => quick_sort(data),
            Algorithm::HeapSort => heap_sort(data),
            Algorithm::LinearSearch => {
                linear_search(data, target.unwrap_or_else(|| random_value_from(data)))
            }
            Algorithm::BinarySearch => {
                binary_search(data, target.unwrap_or_else(|| random_value_from(data)))
            }
        }
    }
}

/// Difficulty tier shown on listing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One read-only catalog entry; static configuration, not computed state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub key: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

// Indexed by `Algorithm as usize`; keep in declaration order.
static CATALOG: [AlgorithmInfo; 8] = [
    AlgorithmInfo {
        name: "Bubble Sort",
        key: "bubbleSort",
        category: Category::Sorting,
        description: "Swap adjacent out-of-order pairs until no pass swaps anything.",
        difficulty: Difficulty::Easy,
    },
    AlgorithmInfo {
        name: "Selection Sort",
        key: "selectionSort",
        category: Category::Sorting,
        description: "Select the smallest remaining element and swap it into place.",
        difficulty: Difficulty::Easy,
    },
    AlgorithmInfo {
        name: "Insertion Sort",
        key: "insertionSort",
        category: Category::Sorting,
        description: "Grow a sorted prefix by inserting each element where it belongs.",
        difficulty: Difficulty::Easy,
    },
    AlgorithmInfo {
        name: "Merge Sort",
        key: "mergeSort",
        category: Category::Sorting,
        description: "Split the list in halves, sort them, and merge the sorted runs.",
        difficulty: Difficulty::Medium,
    },
    AlgorithmInfo {
        name: "Quick Sort",
        key: "quickSort",
        category: Category::Sorting,
        description: "Partition around a pivot and sort both partitions recursively.",
        difficulty: Difficulty::Medium,
    },
    AlgorithmInfo {
        name: "Heap Sort",
        key: "heapSort",
        category: Category::Sorting,
        description: "Build a max-heap, then repeatedly extract the maximum.",
        difficulty: Difficulty::Hard,
    },
    AlgorithmInfo {
        name: "Linear Search",
        key: "linearSearch",
        category: Category::Searching,
        description: "Scan left to right until the target turns up.",
        difficulty: Difficulty::Easy,
    },
    AlgorithmInfo {
        name: "Binary Search",
        key: "binarySearch",
        category: Category::Searching,
        description: "Halve a bound over a sorted list until the target is pinned down.",
        difficulty: Difficulty::Medium,
    },
];

/// The full read-only metadata catalog, in a stable listing order.
pub fn catalog() -> &'static [AlgorithmInfo] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_round_trips_every_key() {
        for algorithm in ALL_ALGORITHMS {
            assert_eq!(Algorithm::resolve(algorithm.key()), Some(algorithm));
        }
    }

    #[test]
    fn resolve_unknown_key_is_none() {
        assert_eq!(Algorithm::resolve("dijkstra"), None);
        assert_eq!(Algorithm::resolve(""), None);
    }

    #[test]
    fn catalog_matches_enum_order() {
        for algorithm in ALL_ALGORITHMS {
            let info = algorithm.info();
            assert_eq!(info.key, algorithm.key());
            assert_eq!(info.category, algorithm.category());
        }
        assert_eq!(catalog().len(), ALL_ALGORITHMS.len());
    }

    #[test]
    fn generated_trace_carries_matching_metadata() {
        let trace = Algorithm::BubbleSort.generate(&[3, 1, 2], None);
        assert_eq!(trace.key, "bubbleSort");
        assert_eq!(trace.name, "Bubble Sort");
        assert_eq!(trace.category, Category::Sorting);
        assert_eq!(trace.time_complexity, "O(n²)");
        assert_eq!(trace.space_complexity, "O(1)");
        assert!(!trace.pseudo_code.is_empty());
    }
}
