//! Myers diff algorithm implementation.
//!
//! Myers' algorithm is a classic diff algorithm with O(ND) time complexity,
//! where N is the sum of the lengths of the two sequences and D is the number
//! of differences. It's particularly efficient when the two texts are similar.
//!
//! Unlike the block matcher it finds a shortest edit script. The search uses
//! the linear-space refinement (middle snake, divide and conquer), so memory
//! stays O(N) even for completely dissimilar texts; time remains O(ND).

pub mod algorithm;
pub mod optimization;

pub use algorithm::MyersDiff;
