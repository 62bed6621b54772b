//! Myers diff post-processing.
//!
//! The shortest edit script interleaves single-symbol inserts and deletes.
//! This module folds it into opcodes: every maximal run of changes between
//! two kept runs becomes one insert, delete or replace.

use super::algorithm::EditOp;
use crate::opcode::{Opcode, Tag};

/// Collapses an edit script into contiguous opcodes.
pub(crate) fn collapse_edits(edits: &[EditOp]) -> Vec<Opcode> {
    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);
    let mut rest = edits;

    while let Some(first) = rest.first() {
        let run = if *first == EditOp::Keep {
            rest.iter().take_while(|e| **e == EditOp::Keep).count()
        } else {
            rest.iter().take_while(|e| **e != EditOp::Keep).count()
        };
        let (chunk, tail) = rest.split_at(run);

        if *first == EditOp::Keep {
            ops.push(Opcode::new(Tag::Equal, i, i + run, j, j + run));
            i += run;
            j += run;
        } else {
            let deleted = chunk.iter().filter(|e| **e == EditOp::Delete).count();
            let inserted = run - deleted;
            let tag = match (deleted > 0, inserted > 0) {
                (true, true) => Tag::Replace,
                (true, false) => Tag::Delete,
                _ => Tag::Insert,
            };
            ops.push(Opcode::new(tag, i, i + deleted, j, j + inserted));
            i += deleted;
            j += inserted;
        }
        rest = tail;
    }

    ops
}
