use std::fmt;

use crate::cell::{Cell, CellKind};
use crate::types::{idx_to_rc, rc_to_idx, Dir};

/// Rejected mutation on a [`Safe`]. The grid is untouched whenever one of
/// these comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeError {
    OutOfRange { row: usize, col: usize },
    Occupied { row: usize, col: usize },
    NoLaser { row: usize, col: usize },
}

impl fmt::Display for SafeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SafeError::OutOfRange { row, col } => {
                write!(f, "coordinates ({row}, {col}) are out of range")
            }
            SafeError::Occupied { row, col } => {
                write!(f, "cell ({row}, {col}) is occupied by a pillar or laser")
            }
            SafeError::NoLaser { row, col } => {
                write!(f, "no laser at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for SafeError {}

/// Why a full-grid verification failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyCause {
    /// An empty cell is not crossed by any laser's beam.
    UnlitCell,
    /// Two lasers share a row or column with no pillar between them.
    LaserInSight,
    /// A numbered pillar's adjacent laser count is off.
    PillarCount { required: u8, actual: u8 },
}

/// First offending coordinate (row-major scan order) and its cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyFailure {
    pub row: usize,
    pub col: usize,
    pub cause: VerifyCause,
}

impl fmt::Display for VerifyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cause {
            VerifyCause::UnlitCell => {
                write!(f, "cell ({}, {}) is not lit by any laser", self.row, self.col)
            }
            VerifyCause::LaserInSight => write!(
                f,
                "laser at ({}, {}) sees another laser",
                self.row, self.col
            ),
            VerifyCause::PillarCount { required, actual } => write!(
                f,
                "pillar at ({}, {}) requires {} adjacent lasers, has {}",
                self.row, self.col, required, actual
            ),
        }
    }
}

/// The safe: a fixed-size rectangular grid of cells. Dimensions are set at
/// load time and never change; `Clone` deep-copies the cell array so search
/// branches never share mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Safe {
    rows: usize,
    cols: usize,
    // Cells laid out row-major (r * cols + c)
    cells: Vec<Cell>,
}

impl Safe {
    /// Build a safe from pre-laid-out cells. `cells.len()` must equal
    /// `rows * cols`; the loader upholds this.
    #[inline]
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cell(&self, r: usize, c: usize) -> Option<Cell> {
        rc_to_idx(r, c, self.rows, self.cols).map(|i| self.cells[i])
    }

    #[inline]
    pub fn cell_at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline]
    pub fn in_bounds(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols
    }

    /// Place a laser at (r, c) and project its beams. The target must be an
    /// empty cell (lit or not); pillars and existing lasers reject the
    /// placement with the grid untouched.
    pub fn place_laser(&mut self, r: usize, c: usize) -> Result<(), SafeError> {
        let idx =
            rc_to_idx(r, c, self.rows, self.cols).ok_or(SafeError::OutOfRange { row: r, col: c })?;
        if self.cells[idx].kind() != CellKind::Empty {
            return Err(SafeError::Occupied { row: r, col: c });
        }
        self.cells[idx].set_kind(CellKind::Laser);
        self.for_each_in_sight(r, c, Cell::add_beam);
        Ok(())
    }

    /// Remove the laser at (r, c) and withdraw its beams. Exact inverse of
    /// [`Safe::place_laser`]: place followed by remove restores every cell's
    /// kind and beam counter.
    pub fn remove_laser(&mut self, r: usize, c: usize) -> Result<(), SafeError> {
        let idx =
            rc_to_idx(r, c, self.rows, self.cols).ok_or(SafeError::OutOfRange { row: r, col: c })?;
        if self.cells[idx].kind() != CellKind::Laser {
            return Err(SafeError::NoLaser { row: r, col: c });
        }
        // The cell keeps displaying a beam if another laser still crosses it;
        // that is exactly what its own counter records.
        self.cells[idx].set_kind(CellKind::Empty);
        self.for_each_in_sight(r, c, Cell::remove_beam);
        Ok(())
    }

    // Walk the four orthogonal rays from (r, c), applying `f` to every cell
    // until the grid edge or the first pillar. Beams pass through lasers; the
    // origin cell itself is not visited.
    fn for_each_in_sight(&mut self, r: usize, c: usize, f: impl Fn(&mut Cell)) {
        for dir in Dir::all() {
            let (mut cr, mut cc) = (r, c);
            while let Some((nr, nc)) = dir.step(cr, cc, self.rows, self.cols) {
                let idx = nr * self.cols + nc;
                if self.cells[idx].is_pillar() {
                    break;
                }
                f(&mut self.cells[idx]);
                cr = nr;
                cc = nc;
            }
        }
    }

    /// True when another laser lies in (r, c)'s row or column with no pillar
    /// in between. The "no two lasers in mutual sight" rule.
    pub fn laser_sees_laser(&self, r: usize, c: usize) -> bool {
        for dir in Dir::all() {
            let (mut cr, mut cc) = (r, c);
            while let Some((nr, nc)) = dir.step(cr, cc, self.rows, self.cols) {
                let cell = self.cells[nr * self.cols + nc];
                if cell.is_laser() {
                    return true;
                }
                if cell.is_pillar() {
                    break;
                }
                cr = nr;
                cc = nc;
            }
        }
        false
    }

    /// Count lasers in the up-to-four orthogonally adjacent cells.
    pub fn adjacent_lasers(&self, r: usize, c: usize) -> u8 {
        let mut count = 0;
        for dir in Dir::all() {
            if let Some((nr, nc)) = dir.step(r, c, self.rows, self.cols) {
                if self.cells[nr * self.cols + nc].is_laser() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Pruning bound for a numbered pillar during search: the adjacent laser
    /// count may not exceed the requirement. Exact equality is only demanded
    /// at full verification.
    #[inline]
    pub fn pillar_within_bound(&self, r: usize, c: usize, limit: u8) -> bool {
        self.adjacent_lasers(r, c) <= limit
    }

    /// Full-grid verification: every empty cell lit, no two lasers in mutual
    /// sight, every numbered pillar's adjacency exact. Scans row-major and
    /// reports the first offence; a pure function of the grid, so repeated
    /// calls agree.
    pub fn verify(&self) -> Result<(), VerifyFailure> {
        for (idx, cell) in self.cells.iter().enumerate() {
            let (r, c) = idx_to_rc(idx, self.cols);
            match cell.kind() {
                CellKind::Laser => {
                    if self.laser_sees_laser(r, c) {
                        return Err(VerifyFailure {
                            row: r,
                            col: c,
                            cause: VerifyCause::LaserInSight,
                        });
                    }
                }
                CellKind::Empty => {
                    if cell.is_unlit_empty() {
                        return Err(VerifyFailure {
                            row: r,
                            col: c,
                            cause: VerifyCause::UnlitCell,
                        });
                    }
                }
                CellKind::Pillar(Some(required)) => {
                    let actual = self.adjacent_lasers(r, c);
                    if actual != required {
                        return Err(VerifyFailure {
                            row: r,
                            col: c,
                            cause: VerifyCause::PillarCount { required, actual },
                        });
                    }
                }
                CellKind::Pillar(None) => {}
            }
        }
        Ok(())
    }

    #[inline]
    pub fn laser_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_laser()).count()
    }

    /// Laser coordinates in row-major order. Used by the hint layer to spot
    /// the first configuration whose placements differ from the start.
    pub fn laser_positions(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_laser())
            .map(|(idx, _)| idx_to_rc(idx, self.cols))
            .collect()
    }
}

impl fmt::Display for Safe {
    /// Textual layout consumed by the console: column coordinates (mod 10),
    /// a divider, then `r|` prefixed rows of space-separated cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..self.cols {
            write!(f, " {}", c % 10)?;
        }
        writeln!(f)?;
        write!(f, "  ")?;
        for _ in 0..self.cols.saturating_mul(2).saturating_sub(1) {
            write!(f, "-")?;
        }
        writeln!(f)?;
        for r in 0..self.rows {
            write!(f, "{}|", r % 10)?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[r * self.cols + c])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
