//! Longest-match search and recursive block collection.

use super::blocks::{MatchBlock, opcodes_from_blocks};
use crate::algorithm::DiffAlgorithm;
use crate::opcode::{Opcode, Tag};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

/// Greedy block-matching aligner.
///
/// Deterministic: identical inputs always produce identical blocks and
/// opcodes. See the [module docs](crate::block) for the trade-off against a
/// minimal edit script.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockMatcher;

impl BlockMatcher {
    /// Creates a new block matcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for BlockMatcher {
    fn opcodes<T: Eq + Hash>(&self, old: &[T], new: &[T]) -> Vec<Opcode> {
        if old.is_empty() && new.is_empty() {
            return Vec::new();
        }
        if old == new {
            return vec![Opcode::new(Tag::Equal, 0, old.len(), 0, new.len())];
        }
        opcodes_from_blocks(&matching_blocks(old, new))
    }
}

/// Positions of every symbol of `new`, ascending.
fn index_positions<T: Eq + Hash>(new: &[T]) -> HashMap<&T, Vec<usize>> {
    let mut positions: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, symbol) in new.iter().enumerate() {
        positions.entry(symbol).or_default().push(j);
    }
    positions
}

/// Window `[alo, ahi) x [blo, bhi)` still to be searched.
#[derive(Debug, Clone, Copy)]
struct Window {
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
}

/// Finds the longest run shared by `old[alo..ahi]` and `new[blo..bhi]`.
///
/// Among runs of maximal length the one starting earliest in `old` wins,
/// then the one starting earliest in `new`. Returns a zero-size block at
/// `(alo, blo)` when the windows share no symbol.
fn find_longest_match<T: Eq + Hash>(
    old: &[T],
    positions: &HashMap<&T, Vec<usize>>,
    window: Window,
) -> MatchBlock {
    let Window { alo, ahi, blo, bhi } = window;
    let mut best = MatchBlock::new(alo, blo, 0);

    // run_len[j] = length of the match ending at old[i - 1], new[j]
    let mut run_len: HashMap<usize, usize> = HashMap::new();
    let mut next_run_len: HashMap<usize, usize> = HashMap::new();

    for (i, symbol) in old.iter().enumerate().take(ahi).skip(alo) {
        next_run_len.clear();
        if let Some(js) = positions.get(symbol) {
            let first = js.partition_point(|&j| j < blo);
            for &j in &js[first..] {
                if j >= bhi {
                    break;
                }
                let previous = j
                    .checked_sub(1)
                    .and_then(|prev| run_len.get(&prev))
                    .copied()
                    .unwrap_or(0);
                let len = previous + 1;
                next_run_len.insert(j, len);
                if len > best.size {
                    best = MatchBlock::new(i + 1 - len, j + 1 - len, len);
                }
            }
        }
        std::mem::swap(&mut run_len, &mut next_run_len);
    }

    best
}

/// Computes the matching blocks between `old` and `new`.
///
/// Blocks are sorted, adjacent blocks are merged, and the list always ends
/// with the zero-length sentinel `(old.len(), new.len(), 0)`.
#[must_use]
pub fn matching_blocks<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<MatchBlock> {
    let positions = index_positions(new);
    let mut pending = vec![Window {
        alo: 0,
        ahi: old.len(),
        blo: 0,
        bhi: new.len(),
    }];
    let mut found = Vec::new();

    while let Some(window) = pending.pop() {
        if window.alo >= window.ahi || window.blo >= window.bhi {
            continue;
        }
        let block = find_longest_match(old, &positions, window);
        if block.size == 0 {
            continue;
        }
        found.push(block);
        if window.alo < block.a && window.blo < block.b {
            pending.push(Window {
                alo: window.alo,
                ahi: block.a,
                blo: window.blo,
                bhi: block.b,
            });
        }
        if block.a_end() < window.ahi && block.b_end() < window.bhi {
            pending.push(Window {
                alo: block.a_end(),
                ahi: window.ahi,
                blo: block.b_end(),
                bhi: window.bhi,
            });
        }
    }

    found.sort_unstable();

    let mut merged: Vec<MatchBlock> = Vec::with_capacity(found.len() + 1);
    for block in found {
        match merged.last_mut() {
            Some(last) if last.a_end() == block.a && last.b_end() == block.b => {
                last.size += block.size;
            }
            _ => merged.push(block),
        }
    }
    merged.push(MatchBlock::new(old.len(), new.len(), 0));

    trace!(blocks = merged.len() - 1, "Collected matching blocks");
    merged
}
