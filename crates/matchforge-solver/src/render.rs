//! Textual rendering of the working state.

use std::fmt::Write;

use matchforge_core::Cost;

use crate::event::StateSnapshot;

/// Renders the working matrix in the classical worked-example style.
///
/// Covered columns carry a `C` mark in the header line, starred cells a
/// `*` suffix, primed cells a `'` suffix, and covered rows a trailing `C`.
/// Pure string building so traces are testable without capturing stdout.
pub fn render<C: Cost>(snapshot: &StateSnapshot<'_, C>) -> String {
    let dim = snapshot.reduced.dim();
    let mut out = String::new();

    out.push_str("  ");
    for column in 0..dim {
        if snapshot.cover.is_column_covered(column) {
            out.push_str("C \t  ");
        } else {
            out.push_str("  \t  ");
        }
    }
    out.push('\n');

    for row in 0..dim {
        out.push_str("| ");
        for column in 0..dim {
            let _ = write!(out, "{}", snapshot.reduced.at(row, column));
            if snapshot.starred.column_in_row(row) == Some(column) {
                out.push('*');
            }
            if snapshot.primed.column_in_row(row) == Some(column) {
                out.push('\'');
            }
            out.push_str(" \t| ");
        }
        if snapshot.cover.is_row_covered(row) {
            out.push('C');
        }
        out.push('\n');
    }

    out
}
