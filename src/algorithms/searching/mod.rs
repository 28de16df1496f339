//! Search trace generators
//!
//! Searches never reorder the array; their steps track the index under
//! examination, the growing visited set, and the terminal found/not-found
//! determination.

mod binary;
mod linear;

pub use binary::binary_search;
pub use linear::linear_search;
