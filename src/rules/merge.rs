//! The line merge every move is built from.
//!
//! A line is always merged toward index 0. Moves in other directions read
//! their lines reversed or transposed first (see `Board::line`).

use crate::core::board::{Line, SIZE};

/// Result of merging a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineMerge {
    /// The line after merging and compacting.
    pub line: Line,
    /// Sum of the tiles created by merges.
    pub gained: u64,
}

impl LineMerge {
    /// Whether merging changed any cell of `original`.
    #[must_use]
    pub fn changed_from(&self, original: &Line) -> bool {
        self.line != *original
    }
}

/// Slide tiles toward index 0, keeping their order.
fn compact(cells: Line) -> Line {
    let mut line = [0; SIZE];
    for (slot, value) in line.iter_mut().zip(cells.into_iter().filter(|&v| v != 0)) {
        *slot = value;
    }
    line
}

/// Merge and compact one line toward index 0.
///
/// Tiles first slide together, then adjacent equal tiles are merged in a
/// single front-to-back pass and the survivors slide again. Each tile merges
/// at most once per move: `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, not
/// `[8, 0, 0, 0]`, and gaps never keep equal tiles apart.
///
/// ```
/// use rust_2048::rules::merge_line;
///
/// let merged = merge_line([2, 2, 2, 2]);
/// assert_eq!(merged.line, [4, 4, 0, 0]);
/// assert_eq!(merged.gained, 8);
///
/// assert_eq!(merge_line([0, 2, 0, 2]).line, [4, 0, 0, 0]);
/// ```
#[must_use]
pub fn merge_line(original: Line) -> LineMerge {
    let mut cells = compact(original);
    let mut gained = 0;

    for i in 0..SIZE - 1 {
        if cells[i] != 0 && cells[i] == cells[i + 1] {
            cells[i] *= 2;
            gained += u64::from(cells[i]);
            cells[i + 1] = 0;
        }
    }

    LineMerge {
        line: compact(cells),
        gained,
    }
}
