// Trace generator tests: sortedness, purity, determinism, step invariants

use algostep::algorithms::searching::{binary_search, linear_search};
use algostep::algorithms::sorting::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
use algostep::registry::{Algorithm, ALL_ALGORITHMS};
use algostep::trace::{Category, Step, Trace};

use proptest::prelude::*;

const SORTS: [(&str, fn(&[i32]) -> Trace); 6] = [
    ("bubbleSort", bubble_sort),
    ("selectionSort", selection_sort),
    ("insertionSort", insertion_sort),
    ("mergeSort", merge_sort),
    ("quickSort", quick_sort),
    ("heapSort", heap_sort),
];

/// All permutations of `items`, via Heap's algorithm.
fn permutations(items: &[i32]) -> Vec<Vec<i32>> {
    fn go(k: usize, a: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        if k <= 1 {
            out.push(a.clone());
            return;
        }
        for i in 0..k {
            go(k - 1, a, out);
            if k % 2 == 0 {
                a.swap(i, k - 1);
            } else {
                a.swap(0, k - 1);
            }
        }
    }
    let mut a = items.to_vec();
    let mut out = Vec::new();
    let k = a.len();
    if k == 0 {
        out.push(a);
    } else {
        go(k, &mut a, &mut out);
    }
    out
}

fn assert_sort_invariants(name: &str, input: &[i32], trace: &Trace) {
    let mut expected = input.to_vec();
    expected.sort_unstable();

    assert!(!trace.steps.is_empty(), "{name}: empty trace");

    let first = trace.steps[0].as_sorting().expect("sorting step");
    assert_eq!(first.array, input, "{name}: first step is not the input");

    let last = trace.steps[trace.last_index()].as_sorting().unwrap();
    assert_eq!(
        last.array, expected,
        "{name}: final step is not sorted for input {input:?}"
    );
    assert_eq!(
        last.completed.len(),
        input.len(),
        "{name}: final completed set incomplete for input {input:?}"
    );

    // completed cardinality never shrinks and every step stays within
    // bounds. (No multiset check: merge sort buffers a run and writes it
    // back over the array, so mid-merge snapshots legitimately hold
    // transient duplicates.)
    let mut prev_completed = 0;
    for (i, step) in trace.steps.iter().enumerate() {
        let step = step.as_sorting().unwrap();
        assert!(
            step.completed.len() >= prev_completed,
            "{name}: completed shrank at step {i}"
        );
        prev_completed = step.completed.len();

        assert_eq!(step.array.len(), input.len(), "{name}: step {i} resized");

        assert!(step.comparing.len() <= 2);
        assert!(step.comparing.iter().all(|&ix| ix < input.len()));
        assert!(step.completed.iter().all(|&ix| ix < input.len()));
        assert!(step.completed.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn every_sort_sorts_every_small_permutation() {
    for size in 0..=6 {
        let base: Vec<i32> = (0..size).map(|v| v * 10 + 1).collect();
        for perm in permutations(&base) {
            for (name, sort) in SORTS {
                assert_sort_invariants(name, &perm, &sort(&perm));
            }
        }
    }
}

#[test]
fn sorts_handle_duplicates() {
    let input = [4, 1, 4, 2, 2, 4, 1];
    for (name, sort) in SORTS {
        assert_sort_invariants(name, &input, &sort(&input));
    }
}

#[test]
fn generators_leave_the_input_untouched() {
    let input = vec![9, -3, 7, 0, 7, 2];
    let pristine = input.clone();
    for (_, sort) in SORTS {
        sort(&input);
        assert_eq!(input, pristine);
    }
    linear_search(&input, 7);
    binary_search(&input, 7);
    assert_eq!(input, pristine);
}

#[test]
fn generators_are_deterministic() {
    let input = [5, 3, 8, 4, 2];
    for (_, sort) in SORTS {
        assert_eq!(sort(&input), sort(&input));
    }
    assert_eq!(linear_search(&input, 4), linear_search(&input, 4));
    let sorted = [2, 3, 4, 5, 8];
    assert_eq!(binary_search(&sorted, 4), binary_search(&sorted, 4));
}

#[test]
fn bubble_sort_pinned_example() {
    let trace = bubble_sort(&[5, 3, 8, 4, 2]);
    let last = trace.steps[trace.last_index()].as_sorting().unwrap();
    assert_eq!(last.array, vec![2, 3, 4, 5, 8]);
}

#[test]
fn empty_input_yields_a_single_empty_step() {
    for algorithm in ALL_ALGORITHMS {
        let trace = algorithm.generate(&[], Some(1));
        assert!(!trace.steps.is_empty(), "{}: empty trace", algorithm.key());
        match &trace.steps[0] {
            Step::Sorting(step) => {
                assert!(step.array.is_empty());
                assert!(step.completed.is_empty());
            }
            Step::Searching(step) => {
                assert!(step.array.is_empty());
                assert!(step.visited.is_empty());
                assert!(!step.found);
            }
        }
    }
}

#[test]
fn single_element_input_still_completes() {
    for (name, sort) in SORTS {
        assert_sort_invariants(name, &[7], &sort(&[7]));
    }
}

#[test]
fn binary_search_pinned_example() {
    // ceil(log2(5)) + 1 = 4 probes at most
    let trace = binary_search(&[1, 3, 5, 7, 9], 7);
    assert!(trace.len() <= 4, "too many steps: {}", trace.len());
    let last = trace.steps[trace.last_index()].as_searching().unwrap();
    assert!(last.found);
    assert_eq!(last.current, Some(3));
}

#[test]
fn binary_search_miss_exhausts_the_bound() {
    let trace = binary_search(&[1, 3, 5, 7, 9], 4);
    let last = trace.steps[trace.last_index()].as_searching().unwrap();
    assert!(!last.found);
    assert_eq!(last.current, None);
    assert!(!last.visited.is_empty());
}

#[test]
fn linear_search_stops_at_the_first_match() {
    let trace = linear_search(&[6, 2, 9, 2, 5], 2);
    let last = trace.steps[trace.last_index()].as_searching().unwrap();
    assert!(last.found);
    assert_eq!(last.current, Some(1));
    assert_eq!(last.visited, vec![0, 1]);
}

#[test]
fn linear_search_miss_visits_everything() {
    let input = [6, 2, 9, 2, 5];
    let trace = linear_search(&input, 42);
    let last = trace.steps[trace.last_index()].as_searching().unwrap();
    assert!(!last.found);
    assert_eq!(last.current, None);
    assert_eq!(last.visited.len(), input.len());

    // One visiting step per index plus the terminal determination.
    assert_eq!(trace.len(), input.len() + 1);
}

#[test]
fn search_steps_carry_the_target_and_grow_visited() {
    let trace = binary_search(&[1, 2, 3, 4, 5, 6, 7, 8], 6);
    let mut prev_visited = 0;
    for step in &trace.steps {
        let step = step.as_searching().unwrap();
        assert_eq!(step.target, 6);
        assert!(step.visited.len() >= prev_visited);
        prev_visited = step.visited.len();
    }
}

#[test]
fn trace_metadata_is_category_consistent() {
    for algorithm in ALL_ALGORITHMS {
        let trace = algorithm.generate(&[3, 1, 2], Some(2));
        assert_eq!(trace.key, algorithm.key());
        assert_eq!(trace.category, algorithm.category());
        for step in &trace.steps {
            match trace.category {
                Category::Sorting => assert!(step.as_sorting().is_some()),
                Category::Searching => assert!(step.as_searching().is_some()),
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_sorts_agree_with_sort_unstable(
        input in prop::collection::vec(-100i32..100, 0..=8)
    ) {
        for (name, sort) in SORTS {
            assert_sort_invariants(name, &input, &sort(&input));
        }
    }

    #[test]
    fn prop_binary_search_finds_present_values(
        mut input in prop::collection::vec(-50i32..50, 1..=16),
        pick in any::<prop::sample::Index>(),
    ) {
        input.sort_unstable();
        let target = input[pick.index(input.len())];
        let trace = binary_search(&input, target);
        let last = trace.steps[trace.last_index()].as_searching().unwrap();
        prop_assert!(last.found);
        let at = last.current.expect("found step has a current index");
        prop_assert_eq!(input[at], target);
    }

    #[test]
    fn prop_linear_search_matches_position_of_first_occurrence(
        input in prop::collection::vec(0i32..10, 0..=12),
        target in 0i32..10,
    ) {
        let trace = linear_search(&input, target);
        let last = trace.steps[trace.last_index()].as_searching().unwrap();
        match input.iter().position(|&v| v == target) {
            Some(expected) => {
                prop_assert!(last.found);
                prop_assert_eq!(last.current, Some(expected));
            }
            None => {
                prop_assert!(!last.found);
                prop_assert_eq!(last.current, None);
                prop_assert_eq!(last.visited.len(), input.len());
            }
        }
    }
}

#[test]
fn registry_resolves_generators_like_the_catalog_promises() {
    assert!(Algorithm::resolve("bubbleSort").is_some());
    assert!(Algorithm::resolve("bogoSort").is_none());
}
