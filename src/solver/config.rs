use crate::cell::CellKind;
use crate::safe::Safe;
use crate::types::idx_to_rc;

use super::backtrack::Configuration;

/// One candidate assignment of lasers: a safe plus a cursor marking the last
/// cell decided in row-major order. Everything strictly before the cursor is
/// final for this branch; everything at or after it is as loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeConfig {
    safe: Safe,
    // Row-major index of the last decided cell. None before the first
    // decision; >= safe.len() once parked past the end of the grid.
    cursor: Option<usize>,
}

impl SafeConfig {
    #[inline]
    pub fn from_safe(safe: Safe) -> Self {
        Self { safe, cursor: None }
    }

    #[inline]
    pub fn safe(&self) -> &Safe {
        &self.safe
    }

    #[inline]
    pub fn into_safe(self) -> Safe {
        self.safe
    }

    /// The cursor as grid coordinates, when it points at an actual cell.
    #[inline]
    pub fn cursor_coord(&self) -> Option<(usize, usize)> {
        self.cursor
            .filter(|&idx| idx < self.safe.len())
            .map(|idx| idx_to_rc(idx, self.safe.cols()))
    }

    #[inline]
    fn past_end(&self) -> bool {
        self.cursor.is_some_and(|idx| idx >= self.safe.len())
    }

    // Grid-wide consistency snapshot used while pruning: every laser placed
    // so far must be out of sight of the others, and no numbered pillar may
    // already exceed its requirement. Exact pillar counts are left to goal
    // verification, because empty neighbors may still become lasers.
    fn is_consistent(&self) -> bool {
        for idx in 0..self.safe.len() {
            let (r, c) = idx_to_rc(idx, self.safe.cols());
            match self.safe.cell_at(idx).kind() {
                CellKind::Laser => {
                    if self.safe.laser_sees_laser(r, c) {
                        return false;
                    }
                }
                CellKind::Pillar(Some(required)) => {
                    if !self.safe.pillar_within_bound(r, c, required) {
                        return false;
                    }
                }
                CellKind::Empty | CellKind::Pillar(None) => {}
            }
        }
        true
    }
}

impl Configuration for SafeConfig {
    /// Advance the cursor to the next non-pillar cell and offer both
    /// decisions for it: place a laser there, or leave it as is. Pillars are
    /// never decision points. When the advance runs off the grid, a single
    /// terminal child is produced for the engine to test as a goal candidate.
    /// The place child comes first, which decides only which solution is
    /// found first.
    fn successors(&self) -> Vec<Self> {
        let len = self.safe.len();
        let mut next = self.cursor.map_or(0, |idx| idx + 1);
        while next < len && self.safe.cell_at(next).is_pillar() {
            next += 1;
        }
        if next >= len {
            let mut terminal = self.clone();
            terminal.cursor = Some(len);
            return vec![terminal];
        }

        let (r, c) = idx_to_rc(next, self.safe.cols());
        let mut children = Vec::with_capacity(2);

        let mut place = self.clone();
        place.cursor = Some(next);
        if place.safe.place_laser(r, c).is_ok()
            && !place.safe.laser_sees_laser(r, c)
            && place.is_consistent()
        {
            children.push(place);
        }

        let mut skip = self.clone();
        skip.cursor = Some(next);
        if skip.is_consistent() {
            children.push(skip);
        }

        children
    }

    /// Incremental validity: only the newest decision can have broken an
    /// already-valid prefix, so inspect just the cell at the cursor. Past the
    /// end of the grid the whole safe is verified instead.
    fn is_valid(&self) -> bool {
        if self.past_end() {
            return self.safe.verify().is_ok();
        }
        match self.cursor_coord() {
            Some((r, c)) => {
                if self.safe.cell(r, c).is_some_and(|cell| cell.is_laser()) {
                    !self.safe.laser_sees_laser(r, c)
                } else {
                    true
                }
            }
            None => true,
        }
    }

    /// Goal whenever the full grid verifies, regardless of cursor position;
    /// an already-solved safe is recognized without advancing at all.
    fn is_goal(&self) -> bool {
        self.safe.verify().is_ok()
    }
}
