//! Instrumented algorithm implementations
//!
//! Each submodule holds one trace generator: a pure function that takes an
//! input array (plus a target value for searches) and returns a [`Trace`]
//! recording every comparison, swap and visit the algorithm performs.
//!
//! Generators never touch the caller's slice. They copy the input into a
//! recorder on the first line and every emitted step carries an owned
//! snapshot, so the same input always yields the same step sequence.

pub mod searching;
pub mod sorting;

use std::collections::BTreeSet;

use crate::trace::{Category, SearchStep, SortingStep, Step, Trace};

/// Static metadata attached to every trace a generator produces.
pub(crate) struct Meta {
    pub name: &'static str,
    pub key: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub pseudo_code: &'static [&'static str],
    pub reference: Option<&'static str>,
}

impl Meta {
    fn into_trace(self, steps: Vec<Step>) -> Trace {
        Trace {
            steps,
            name: self.name.to_string(),
            key: self.key.to_string(),
            category: self.category,
            description: self.description.to_string(),
            time_complexity: self.time_complexity.to_string(),
            space_complexity: self.space_complexity.to_string(),
            pseudo_code: self.pseudo_code.iter().map(|s| s.to_string()).collect(),
            reference: self.reference.map(|s| s.to_string()),
        }
    }
}

/// Step recorder for comparison sorts.
///
/// Owns the working copy of the array and the growing `completed` set, and
/// appends one [`SortingStep`] snapshot per recorded event. The recorder
/// pushes the pristine input as step zero on construction, so every trace
/// has at least one step.
pub(crate) struct SortRecorder {
    array: Vec<i32>,
    completed: BTreeSet<usize>,
    steps: Vec<Step>,
}

impl SortRecorder {
    pub fn new(input: &[i32]) -> Self {
        let mut rec = SortRecorder {
            array: input.to_vec(),
            completed: BTreeSet::new(),
            steps: Vec::new(),
        };
        rec.snapshot();
        rec
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn get(&self, i: usize) -> i32 {
        self.array[i]
    }

    /// Write a value directly (merge sort reconstructs runs in place).
    pub fn set(&mut self, i: usize, value: i32) {
        self.array[i] = value;
    }

    fn push(&mut self, comparing: Vec<usize>, swapped: bool) {
        self.steps.push(Step::Sorting(SortingStep {
            array: self.array.clone(),
            comparing,
            swapped,
            completed: self.completed.iter().copied().collect(),
        }));
    }

    /// Record a comparison between two indices.
    pub fn compare(&mut self, i: usize, j: usize) {
        self.push(vec![i, j], false);
    }

    /// Exchange two elements and record the exchange.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
        self.push(vec![i, j], true);
    }

    /// Record the current array state with no comparison highlighted.
    pub fn snapshot(&mut self) {
        self.push(Vec::new(), false);
    }

    /// Mark an index as holding its final sorted value.
    pub fn mark(&mut self, i: usize) {
        self.completed.insert(i);
    }

    /// Marks without emitting; pair with [`SortRecorder::snapshot`] when the
    /// growth should be visible as its own step.
    pub fn mark_all(&mut self) {
        for i in 0..self.array.len() {
            self.completed.insert(i);
        }
    }

    /// Finalize: every index is marked completed, and the terminal step
    /// reflects that, appending one closing snapshot if needed.
    pub fn finish(mut self, meta: Meta) -> Trace {
        self.mark_all();
        let settled = self
            .steps
            .last()
            .and_then(Step::as_sorting)
            .is_some_and(|s| s.completed.len() == self.completed.len());
        if !settled {
            self.snapshot();
        }
        meta.into_trace(self.steps)
    }
}

/// Step recorder for searches.
///
/// Tracks the ordered set of visited indices; the array itself never
/// changes, but each step still carries a snapshot so both step variants
/// read uniformly.
pub(crate) struct SearchRecorder {
    array: Vec<i32>,
    target: i32,
    visited: Vec<usize>,
    steps: Vec<Step>,
}

impl SearchRecorder {
    pub fn new(input: &[i32], target: i32) -> Self {
        SearchRecorder {
            array: input.to_vec(),
            target,
            visited: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn get(&self, i: usize) -> i32 {
        self.array[i]
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    /// Record the examination of one index.
    pub fn visit(&mut self, i: usize, found: bool) {
        self.visited.push(i);
        self.steps.push(Step::Searching(SearchStep {
            array: self.array.clone(),
            current: Some(i),
            target: self.target,
            found,
            visited: self.visited.clone(),
        }));
    }

    /// Record the terminal not-found determination.
    pub fn exhausted(&mut self) {
        self.steps.push(Step::Searching(SearchStep {
            array: self.array.clone(),
            current: None,
            target: self.target,
            found: false,
            visited: self.visited.clone(),
        }));
    }

    pub fn finish(mut self, meta: Meta) -> Trace {
        // Zero-length input produces no visits; the trace still needs its
        // terminal step.
        if self.steps.is_empty() {
            self.exhausted();
        }
        meta.into_trace(self.steps)
    }
}
