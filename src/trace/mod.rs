//! Trace data model: the recorded execution of an algorithm
//!
//! A [`Trace`] is the complete, ordered recording of one algorithm run:
//! a non-empty sequence of [`Step`] snapshots plus descriptive metadata
//! (name, complexity, pseudo-code). Traces are produced once by a generator
//! in [`crate::algorithms`] and never modified afterwards; playback only
//! moves a cursor over `steps`.

use serde::{Deserialize, Serialize};

/// Algorithm category, used to pick the right step variant and to group
/// catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Searching,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
        }
    }
}

/// One snapshot of a comparison sort in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingStep {
    /// Array contents at this point in the run
    pub array: Vec<i32>,
    /// Indices currently under comparison (0, 1 or 2 of them)
    pub comparing: Vec<usize>,
    /// Whether this step records an exchange of the compared pair
    pub swapped: bool,
    /// Indices guaranteed to hold their final sorted value, ascending
    pub completed: Vec<usize>,
}

/// One snapshot of a search in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    /// Array contents (searches never reorder, but every step carries the
    /// snapshot so consumers can treat both variants uniformly)
    pub array: Vec<i32>,
    /// Index under examination, or `None` once the search has terminated
    /// without a match
    pub current: Option<usize>,
    /// The value being searched for
    pub target: i32,
    /// Whether the target has been located at this point
    pub found: bool,
    /// Indices examined so far, in examination order
    pub visited: Vec<usize>,
}

/// A single inspectable snapshot of algorithm state.
///
/// A trace is homogeneous: every step of a sorting trace is `Sorting` and
/// every step of a searching trace is `Searching`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Sorting(SortingStep),
    Searching(SearchStep),
}

impl Step {
    /// The array snapshot carried by this step, whichever the variant.
    pub fn array(&self) -> &[i32] {
        match self {
            Step::Sorting(s) => &s.array,
            Step::Searching(s) => &s.array,
        }
    }

    pub fn as_sorting(&self) -> Option<&SortingStep> {
        match self {
            Step::Sorting(s) => Some(s),
            Step::Searching(_) => None,
        }
    }

    pub fn as_searching(&self) -> Option<&SearchStep> {
        match self {
            Step::Sorting(_) => None,
            Step::Searching(s) => Some(s),
        }
    }
}

/// The recorded execution of one algorithm over one input, plus the
/// metadata a listing or detail view needs to describe it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Ordered, non-empty step sequence. The first step reflects the
    /// unmodified input; the last reflects the fully sorted array or the
    /// terminal found/not-found determination.
    pub steps: Vec<Step>,
    /// Display name, e.g. "Bubble Sort"
    pub name: String,
    /// Registry key, e.g. "bubbleSort"
    pub key: String,
    pub category: Category,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
    /// Pseudo-code, one line per entry
    pub pseudo_code: Vec<String>,
    /// Optional external reference link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Trace {
    /// Number of steps in the trace (always ≥ 1).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the last step, the upper bound for the playback cursor.
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}
