//! Comparison sort trace generators
//!
//! All six sorts share the same contract: sort ascending, record every
//! comparison and exchange as a step, and grow the `completed` set
//! monotonically until it covers the whole array in the final step. Where
//! indices become final differs per algorithm (bubble settles the tail
//! first, selection the head, quick sort one pivot per partition) and is
//! documented on each generator.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;
