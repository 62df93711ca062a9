use alloc::{format, string::String};
use core::fmt;

use crate::opcode::Opcode;

/// Capacity of a [`CommandBuffer`] when none is given.
pub const DEFAULT_CAPACITY: usize = 256;

/// Fixed-capacity, append-only list of opcodes.
///
/// The translator writes into a buffer owned by the caller, so each
/// translation needs exclusive (`&mut`) access and independent translations
/// use independent buffers.
///
/// Appends past the capacity are dropped without error. The logical length
/// is authoritative: a full buffer may have lost its trailing
/// [`Opcode::STOP`], which [`dropped`](Self::dropped) reveals.
#[derive(Debug, Clone)]
pub struct CommandBuffer<const N: usize = DEFAULT_CAPACITY> {
    slots: [Opcode; N],
    len: usize,
    dropped: usize,
}

impl<const N: usize> Default for CommandBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CommandBuffer<N> {
    /// Creates a cleared buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [Opcode::STOP; N],
            len: 0,
            dropped: 0,
        }
    }

    /// Empties the buffer and writes [`Opcode::STOP`] into the first slot, so
    /// raw readers of [`slots`](Self::slots) see a terminated sequence.
    pub fn clear(&mut self) {
        self.len = 0;
        self.dropped = 0;
        if let Some(first) = self.slots.first_mut() {
            *first = Opcode::STOP;
        }
    }

    /// Stores `op` after the last written opcode, or drops it when full.
    pub fn append(&mut self, op: Opcode) {
        let Some(slot) = self.slots.get_mut(self.len) else {
            self.dropped += 1;
            tracing::warn!(opcode = %op, capacity = N, "command buffer full, opcode dropped");
            return;
        };
        *slot = op;
        self.len += 1;
    }

    /// Number of opcodes written since the last [`clear`](Self::clear).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of appends discarded because the buffer was full.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// `true` when at least one append was lost since the last clear.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    /// The opcodes written since the last clear.
    #[must_use]
    pub fn as_slice(&self) -> &[Opcode] {
        &self.slots[..self.len]
    }

    /// The whole backing store, including slots past the logical length.
    #[must_use]
    pub fn slots(&self) -> &[Opcode] {
        &self.slots
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Opcode> {
        self.as_slice().iter()
    }

    /// Lists the written opcodes by name, e.g. `FWD2, SS90ER, FWD1, STOP`.
    ///
    /// Diagnostic output only; the format is not stable.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{self}")
    }
}

impl<'a, const N: usize> IntoIterator for &'a CommandBuffer<N> {
    type Item = &'a Opcode;
    type IntoIter = core::slice::Iter<'a, Opcode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> fmt::Display for CommandBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Result of [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Match,
    /// Index of the first position where the sequences differ.
    MismatchAt(usize),
}

impl Comparison {
    #[must_use]
    pub fn is_match(self) -> bool {
        self == Comparison::Match
    }

    #[must_use]
    pub fn mismatch(self) -> Option<usize> {
        match self {
            Comparison::Match => None,
            Comparison::MismatchAt(i) => Some(i),
        }
    }
}

/// Compares `expected` against `actual`, at most `max` positions.
///
/// The scan ends with a match at the first [`Opcode::STOP`] in `actual` once
/// it compared equal; `expected` is never read past that point. Exhausting
/// `max`, or both slices together, also counts as a match. A slice that ends
/// before the other is a mismatch at its length.
#[must_use]
pub fn compare(expected: &[Opcode], actual: &[Opcode], max: usize) -> Comparison {
    for i in 0..max {
        match (expected.get(i), actual.get(i)) {
            (None, None) => return Comparison::Match,
            (Some(e), Some(a)) if e == a => {
                if a.is_stop() {
                    return Comparison::Match;
                }
            }
            _ => return Comparison::MismatchAt(i),
        }
    }
    Comparison::Match
}
