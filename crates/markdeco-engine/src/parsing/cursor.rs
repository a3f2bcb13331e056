use crate::options::PositionUnit;

/// Running position in document coordinates.
///
/// Raw characters advance the cursor by their measured length; every block
/// container adds one boundary unit on entry and one on exit. A block's
/// `from` is the mark taken before [`Cursor::enter_block`], its `to` the
/// mark taken after [`Cursor::exit_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: usize,
    unit: PositionUnit,
}

impl Cursor {
    /// Creates a cursor at `base` counting UTF-16 code units.
    pub fn new(base: usize) -> Self {
        Self {
            pos: base,
            unit: PositionUnit::default(),
        }
    }

    pub fn with_unit(mut self, unit: PositionUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Returns the current position.
    pub fn mark(&self) -> usize {
        self.pos
    }

    /// Advances by `n` units.
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advances over `s`, measured in the cursor's unit.
    pub fn consume(&mut self, s: &str) {
        self.pos += self.unit.measure(s);
    }

    /// Measures `s` without moving.
    pub fn measure(&self, s: &str) -> usize {
        self.unit.measure(s)
    }

    pub fn enter_block(&mut self) {
        self.pos += 1;
    }

    pub fn exit_block(&mut self) {
        self.pos += 1;
    }
}
