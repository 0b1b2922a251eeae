#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    #[inline]
    pub fn all() -> [Dir; 4] {
        [Dir::Up, Dir::Right, Dir::Down, Dir::Left]
    }

    /// One step from (r, c) within a rows x cols grid, or None at the edge.
    #[inline]
    pub fn step(self, r: usize, c: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        match self {
            Dir::Up => (r > 0).then(|| (r - 1, c)),
            Dir::Right => (c + 1 < cols).then(|| (r, c + 1)),
            Dir::Down => (r + 1 < rows).then(|| (r + 1, c)),
            Dir::Left => (c > 0).then(|| (r, c - 1)),
        }
    }
}

/// Grid indexing helpers (row-major, dynamic dimensions)
#[inline]
pub fn idx_to_rc(idx: usize, cols: usize) -> (usize, usize) {
    debug_assert!(cols > 0);
    (idx / cols, idx % cols)
}

#[inline]
pub fn rc_to_idx(r: usize, c: usize, rows: usize, cols: usize) -> Option<usize> {
    if r < rows && c < cols {
        Some(r * cols + c)
    } else {
        None
    }
}
