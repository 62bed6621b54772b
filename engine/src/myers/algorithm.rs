//! Myers diff algorithm.

use super::optimization::collapse_edits;
use crate::algorithm::DiffAlgorithm;
use crate::opcode::{Opcode, Tag};
use std::hash::Hash;
use std::iter::repeat_n;
use std::ops::Range;

/// Myers diff algorithm implementation.
///
/// This implementation uses the classic O(ND) algorithm described by Eugene Myers
/// in "An O(ND) Difference Algorithm and Its Variations" (1986).
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;

impl MyersDiff {
    /// Creates a new Myers diff algorithm instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for MyersDiff {
    fn opcodes<T: Eq + Hash>(&self, old: &[T], new: &[T]) -> Vec<Opcode> {
        if old.is_empty() && new.is_empty() {
            return Vec::new();
        }
        if old.is_empty() {
            return vec![Opcode::new(Tag::Insert, 0, 0, 0, new.len())];
        }
        if new.is_empty() {
            return vec![Opcode::new(Tag::Delete, 0, old.len(), 0, 0)];
        }
        collapse_edits(&shortest_edit_script(old, new))
    }
}

/// A single step of the shortest edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditOp {
    /// Take the next symbol of the new sequence.
    Insert,
    /// Drop the next symbol of the old sequence.
    Delete,
    /// Both sequences share the next symbol.
    Keep,
}

/// Maps diagonal `k` (which may be negative) to an index into a frontier.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
const fn diagonal(k: isize, offset: usize) -> usize {
    (k + offset as isize) as usize
}

/// A pending piece of the divide-and-conquer search.
enum Task {
    /// Align `old[a]` against `new[b]`.
    Solve(Range<usize>, Range<usize>),
    /// Emit a run of kept symbols (a stripped common suffix).
    Keep(usize),
}

/// Computes a shortest edit script (SES) between two sequences.
///
/// Uses the linear-space variant: the middle snake of each subproblem splits
/// it in two, so memory stays proportional to `n + m` whatever the edit
/// distance. Pending subproblems live on an explicit stack.
pub(crate) fn shortest_edit_script<T: Eq>(old: &[T], new: &[T]) -> Vec<EditOp> {
    let mut edits = Vec::with_capacity(old.len() + new.len());
    let offset = (old.len() + new.len()).div_ceil(2) + 1;
    let mut forward = vec![0isize; 2 * offset + 1];
    let mut backward = vec![0isize; 2 * offset + 1];
    let mut pending = vec![Task::Solve(0..old.len(), 0..new.len())];

    while let Some(task) = pending.pop() {
        let (a, b) = match task {
            Task::Keep(count) => {
                edits.extend(repeat_n(EditOp::Keep, count));
                continue;
            }
            Task::Solve(a, b) => (a, b),
        };

        let prefix = common_prefix(&old[a.clone()], &new[b.clone()]);
        edits.extend(repeat_n(EditOp::Keep, prefix));
        let (a, b) = (a.start + prefix..a.end, b.start + prefix..b.end);

        let suffix = common_suffix(&old[a.clone()], &new[b.clone()]);
        pending.push(Task::Keep(suffix));
        let (a, b) = (a.start..a.end - suffix, b.start..b.end - suffix);

        if a.is_empty() || b.is_empty() {
            edits.extend(repeat_n(EditOp::Delete, a.len()));
            edits.extend(repeat_n(EditOp::Insert, b.len()));
            continue;
        }

        match middle_snake(&old[a.clone()], &new[b.clone()], &mut forward, &mut backward, offset) {
            Some((x, y)) if (x, y) != (0, 0) && (x, y) != (a.len(), b.len()) => {
                pending.push(Task::Solve(a.start + x..a.end, b.start + y..b.end));
                pending.push(Task::Solve(a.start..a.start + x, b.start..b.start + y));
            }
            _ => {
                edits.extend(repeat_n(EditOp::Delete, a.len()));
                edits.extend(repeat_n(EditOp::Insert, b.len()));
            }
        }
    }

    edits
}

fn common_prefix<T: Eq>(old: &[T], new: &[T]) -> usize {
    old.iter().zip(new).take_while(|(a, b)| a == b).count()
}

fn common_suffix<T: Eq>(old: &[T], new: &[T]) -> usize {
    old.iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Finds a point `(x, y)` that some shortest edit path passes through.
///
/// Runs the forward search from the origin and the backward search from
/// `(n, m)` one round at a time until their furthest reaches overlap. Both
/// inputs must be non-empty. `forward` and `backward` are scratch frontiers
/// indexed through `offset`; stale entries are never read. Only points
/// inside the `n x m` grid are reported.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::similar_names
)]
fn middle_snake<T: Eq>(
    old: &[T],
    new: &[T],
    forward: &mut [isize],
    backward: &mut [isize],
    offset: usize,
) -> Option<(usize, usize)> {
    let (n, m) = (old.len() as isize, new.len() as isize);
    let delta = n - m;
    let odd = delta % 2 != 0;
    let d_max = (n + m + 1) / 2;

    forward[diagonal(1, offset)] = 0;
    backward[diagonal(1, offset)] = 0;

    for d in 0..=d_max {
        for k in (-d..=d).rev().step_by(2) {
            let idx = diagonal(k, offset);
            let mut x = if k == -d || (k != d && forward[idx - 1] < forward[idx + 1]) {
                forward[idx + 1]
            } else {
                forward[idx - 1] + 1
            };
            let mut y = x - k;
            let (x0, y0) = (x, y);
            while x < n && y < m && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }
            forward[idx] = x;

            let mirror = delta - k;
            if odd
                && mirror.abs() < d
                && x0 <= n
                && y0 <= m
                && forward[idx] + backward[diagonal(mirror, offset)] >= n
            {
                return Some((x0 as usize, y0 as usize));
            }
        }

        for k in (-d..=d).rev().step_by(2) {
            let idx = diagonal(k, offset);
            let mut x = if k == -d || (k != d && backward[idx - 1] < backward[idx + 1]) {
                backward[idx + 1]
            } else {
                backward[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && old[(n - x - 1) as usize] == new[(m - y - 1) as usize] {
                x += 1;
                y += 1;
            }
            backward[idx] = x;

            let mirror = delta - k;
            if !odd
                && mirror.abs() <= d
                && x <= n
                && y <= m
                && backward[idx] + forward[diagonal(mirror, offset)] >= n
            {
                return Some(((n - x) as usize, (m - y) as usize));
            }
        }
    }

    None
}
