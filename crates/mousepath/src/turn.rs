//! The catalog of turn primitives understood by the motion controller.
//!
//! Each primitive has a fixed slot in the opcode space (`0x40 + index`) and a
//! row in [`TURN_TABLE`] describing its geometry, so callers never do offset
//! arithmetic on raw opcodes to learn what a turn does.
//!
//! Mnemonics follow the controller's naming: `IP` is an in-place turn, `SS` a
//! smooth turn from straight to straight, `SD` straight to diagonal, `DS`
//! diagonal to straight and `DD` diagonal to diagonal. The trailing letter is
//! the hand. For the 90° straight-to-straight turns the letter before the
//! hand picks the profile: `S` is the search turn used mid-path, `F` the fast
//! variant, `E` the turn that ends a path in the goal cell.

use core::fmt;

use crate::error::OpcodeError;

/// Which way a turn rotates the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Hand {
    Right,
    Left,
}

/// Whether a turn is executed standing still or while rolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Motion {
    InPlace,
    Smooth,
}

/// Alignment of the robot's travel relative to the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Heading {
    Orthogonal,
    Diagonal,
}

/// Geometry of one turn primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TurnInfo {
    pub motion: Motion,
    pub entry: Heading,
    pub exit: Heading,
    pub angle_degrees: u16,
    pub hand: Hand,
}

/// A turn primitive. Discriminants are catalog indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(u8)]
pub enum Turn {
    /// `IP45R`
    InPlace45Right = 0,
    /// `IP45L`
    InPlace45Left,
    /// `IP90R`
    InPlace90Right,
    /// `IP90L`
    InPlace90Left,
    /// `IP135R`
    InPlace135Right,
    /// `IP135L`
    InPlace135Left,
    /// `IP180R`
    InPlace180Right,
    /// `IP180L`
    InPlace180Left,
    /// `SS90SR`: the 90° smooth turn between two orthogonal runs.
    Smooth90Right,
    /// `SS90SL`
    Smooth90Left,
    /// `SS90FR`
    Smooth90FastRight,
    /// `SS90FL`
    Smooth90FastLeft,
    /// `SS180R`
    Smooth180Right,
    /// `SS180L`
    Smooth180Left,
    /// `SD45R`
    OrthoToDiagonal45Right,
    /// `SD45L`
    OrthoToDiagonal45Left,
    /// `SD135R`
    OrthoToDiagonal135Right,
    /// `SD135L`
    OrthoToDiagonal135Left,
    /// `DS45R`
    DiagonalToOrtho45Right,
    /// `DS45L`
    DiagonalToOrtho45Left,
    /// `DS135R`
    DiagonalToOrtho135Right,
    /// `DS135L`
    DiagonalToOrtho135Left,
    /// `DD90R`
    Diagonal90Right,
    /// `DD90L`
    Diagonal90Left,
    /// `SS90ER`: a 90° smooth turn into the final cell of a path.
    Smooth90ExitRight,
    /// `SS90EL`
    Smooth90ExitLeft,
}

const fn row(
    motion: Motion,
    entry: Heading,
    exit: Heading,
    angle_degrees: u16,
    hand: Hand,
) -> TurnInfo {
    TurnInfo {
        motion,
        entry,
        exit,
        angle_degrees,
        hand,
    }
}

use Hand::{Left, Right};
use Heading::{Diagonal as Dia, Orthogonal as Orth};
use Motion::{InPlace, Smooth};

/// Geometry of every turn, indexed by [`Turn::index`].
pub const TURN_TABLE: [TurnInfo; Turn::COUNT] = [
    row(InPlace, Orth, Dia, 45, Right),
    row(InPlace, Orth, Dia, 45, Left),
    row(InPlace, Orth, Orth, 90, Right),
    row(InPlace, Orth, Orth, 90, Left),
    row(InPlace, Orth, Dia, 135, Right),
    row(InPlace, Orth, Dia, 135, Left),
    row(InPlace, Orth, Orth, 180, Right),
    row(InPlace, Orth, Orth, 180, Left),
    row(Smooth, Orth, Orth, 90, Right),
    row(Smooth, Orth, Orth, 90, Left),
    row(Smooth, Orth, Orth, 90, Right),
    row(Smooth, Orth, Orth, 90, Left),
    row(Smooth, Orth, Orth, 180, Right),
    row(Smooth, Orth, Orth, 180, Left),
    row(Smooth, Orth, Dia, 45, Right),
    row(Smooth, Orth, Dia, 45, Left),
    row(Smooth, Orth, Dia, 135, Right),
    row(Smooth, Orth, Dia, 135, Left),
    row(Smooth, Dia, Orth, 45, Right),
    row(Smooth, Dia, Orth, 45, Left),
    row(Smooth, Dia, Orth, 135, Right),
    row(Smooth, Dia, Orth, 135, Left),
    row(Smooth, Dia, Dia, 90, Right),
    row(Smooth, Dia, Dia, 90, Left),
    row(Smooth, Orth, Orth, 90, Right),
    row(Smooth, Orth, Orth, 90, Left),
];

const MNEMONICS: [&str; Turn::COUNT] = [
    "IP45R", "IP45L", "IP90R", "IP90L", "IP135R", "IP135L", "IP180R", "IP180L", "SS90SR",
    "SS90SL", "SS90FR", "SS90FL", "SS180R", "SS180L", "SD45R", "SD45L", "SD135R", "SD135L",
    "DS45R", "DS45L", "DS135R", "DS135L", "DD90R", "DD90L", "SS90ER", "SS90EL",
];

impl Turn {
    /// Number of primitives in the catalog.
    pub const COUNT: usize = 26;

    /// Every primitive in catalog order.
    pub const ALL: [Turn; Turn::COUNT] = [
        Turn::InPlace45Right,
        Turn::InPlace45Left,
        Turn::InPlace90Right,
        Turn::InPlace90Left,
        Turn::InPlace135Right,
        Turn::InPlace135Left,
        Turn::InPlace180Right,
        Turn::InPlace180Left,
        Turn::Smooth90Right,
        Turn::Smooth90Left,
        Turn::Smooth90FastRight,
        Turn::Smooth90FastLeft,
        Turn::Smooth180Right,
        Turn::Smooth180Left,
        Turn::OrthoToDiagonal45Right,
        Turn::OrthoToDiagonal45Left,
        Turn::OrthoToDiagonal135Right,
        Turn::OrthoToDiagonal135Left,
        Turn::DiagonalToOrtho45Right,
        Turn::DiagonalToOrtho45Left,
        Turn::DiagonalToOrtho135Right,
        Turn::DiagonalToOrtho135Left,
        Turn::Diagonal90Right,
        Turn::Diagonal90Left,
        Turn::Smooth90ExitRight,
        Turn::Smooth90ExitLeft,
    ];

    /// Position of this turn in the catalog (the low six bits of its opcode).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// # Errors
    ///
    /// Returns [`OpcodeError::UnknownTurn`] if `index` is past the end of the
    /// catalog.
    pub fn from_index(index: u8) -> Result<Self, OpcodeError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(OpcodeError::UnknownTurn(index))
    }

    #[must_use]
    pub const fn info(self) -> TurnInfo {
        TURN_TABLE[self as usize]
    }

    /// Short controller name, e.g. `SD45R`.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        MNEMONICS[self as usize]
    }

    #[must_use]
    pub const fn hand(self) -> Hand {
        self.info().hand
    }

    /// The same primitive turning the other way.
    ///
    /// Right and left variants always occupy adjacent slots with the right
    /// turn on the even index.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self::ALL[usize::from(self.index() ^ 1)]
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
