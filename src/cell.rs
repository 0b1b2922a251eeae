use std::fmt;

/// What occupies a cell. The beam-exposure counter lives next to this in
/// `Cell`, so a cell's displayed character is always derivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    /// Fixed obstacle. `Some(n)` demands exactly `n` orthogonally adjacent
    /// lasers (0..=4); `None` is the unconstrained pillar.
    Pillar(Option<u8>),
    Laser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    kind: CellKind,
    // Number of currently placed lasers whose line of sight crosses this cell.
    // Tracked so removal never has to rescan for other lasers.
    beams: u8,
}

impl Cell {
    #[inline]
    pub fn empty() -> Self {
        Self {
            kind: CellKind::Empty,
            beams: 0,
        }
    }

    #[inline]
    pub fn pillar(required: Option<u8>) -> Self {
        Self {
            kind: CellKind::Pillar(required),
            beams: 0,
        }
    }

    #[inline]
    pub fn kind(self) -> CellKind {
        self.kind
    }

    #[inline]
    pub fn beams(self) -> u8 {
        self.beams
    }

    #[inline]
    pub fn is_pillar(self) -> bool {
        matches!(self.kind, CellKind::Pillar(_))
    }

    #[inline]
    pub fn is_laser(self) -> bool {
        self.kind == CellKind::Laser
    }

    /// A pillar's required adjacent-laser count, if it has one.
    #[inline]
    pub fn pillar_requirement(self) -> Option<u8> {
        match self.kind {
            CellKind::Pillar(req) => req,
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    #[inline]
    pub(crate) fn add_beam(&mut self) {
        self.beams = self.beams.saturating_add(1);
    }

    #[inline]
    pub(crate) fn remove_beam(&mut self) {
        self.beams = self.beams.saturating_sub(1);
    }

    /// Character shown by the presentation layers. Laser and pillar kinds win
    /// outright; an empty cell shows a beam whenever its counter is positive.
    #[inline]
    pub fn display_char(self) -> char {
        match self.kind {
            CellKind::Laser => 'L',
            CellKind::Pillar(None) => 'X',
            CellKind::Pillar(Some(n)) => char::from(b'0' + n),
            CellKind::Empty => {
                if self.beams > 0 {
                    '*'
                } else {
                    '.'
                }
            }
        }
    }

    /// True when nothing shines on this cell and no laser sits here.
    #[inline]
    pub fn is_unlit_empty(self) -> bool {
        self.kind == CellKind::Empty && self.beams == 0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_char())
    }
}
