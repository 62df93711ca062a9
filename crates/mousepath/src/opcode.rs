//! One-byte motion opcodes.
//!
//! Layout of the encoded byte:
//!
//! ```text
//! 000n_nnnn  orthogonal straight, n cells (0x00 doubles as STOP)
//! 001n_nnnn  diagonal straight, n cells
//! 01tt_tttt  turn, catalog index t (0x40..=0x59)
//! 0111_1111  END
//! 1111_rrrr  error, reason r
//! ```
//!
//! Every other byte is rejected when decoding, so the category of a valid
//! opcode can always be read off the byte alone.

use core::{fmt, str::FromStr};

use crate::{
    error::{ErrorReason, OpcodeError},
    turn::Turn,
};

const DIAGONAL_BASE: u8 = 0x20;
const TURN_BASE: u8 = 0x40;
const END_BYTE: u8 = 0x7F;
const ERROR_BASE: u8 = 0xF0;

/// A run length in cells, `0..=31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Cells(u8);

impl Cells {
    pub const ZERO: Cells = Cells(0);
    pub const ONE: Cells = Cells(1);
    pub const MAX: Cells = Cells(31);

    /// # Errors
    ///
    /// Returns [`OpcodeError::CellsOutOfRange`] if `n` exceeds 31.
    pub fn new(n: usize) -> Result<Self, OpcodeError> {
        match u8::try_from(n) {
            Ok(v) if v <= Self::MAX.0 => Ok(Cells(v)),
            _ => Err(OpcodeError::CellsOutOfRange(n)),
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Cells {
    type Error = OpcodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Cells::new(usize::from(value))
    }
}

impl From<Cells> for u8 {
    fn from(cells: Cells) -> Self {
        cells.0
    }
}

/// Coarse class of an opcode, as encoded in its high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Orthogonal,
    Diagonal,
    Turn,
    Error,
    End,
}

/// One instruction for the motion controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Opcode {
    /// Straight run along the grid.
    Forward(Cells),
    /// Straight run across the grid at 45°.
    Diagonal(Cells),
    /// One primitive from the turn catalog.
    Turn(Turn),
    /// Translation failed here; see [`ErrorReason`].
    Error(ErrorReason),
    /// Inspection sentinel: nothing will ever follow. Never emitted by the
    /// translator.
    End,
}

impl Opcode {
    /// End of a command sequence. Same value as a zero-cell forward run.
    pub const STOP: Opcode = Opcode::Forward(Cells::ZERO);

    /// An orthogonal run of `cells` cells.
    ///
    /// # Errors
    ///
    /// Returns [`OpcodeError::CellsOutOfRange`] if `cells` exceeds 31.
    pub fn forward(cells: usize) -> Result<Self, OpcodeError> {
        Cells::new(cells).map(Opcode::Forward)
    }

    /// A diagonal run of `cells` cells.
    ///
    /// # Errors
    ///
    /// Returns [`OpcodeError::CellsOutOfRange`] if `cells` exceeds 31.
    pub fn diagonal(cells: usize) -> Result<Self, OpcodeError> {
        Cells::new(cells).map(Opcode::Diagonal)
    }

    #[must_use]
    pub fn is_stop(self) -> bool {
        self == Self::STOP
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Opcode::Error(_))
    }

    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Opcode::Forward(_) => Category::Orthogonal,
            Opcode::Diagonal(_) => Category::Diagonal,
            Opcode::Turn(_) => Category::Turn,
            Opcode::Error(_) => Category::Error,
            Opcode::End => Category::End,
        }
    }

    /// Encodes the opcode into its controller byte.
    #[must_use]
    pub fn to_byte(self) -> u8 {
        match self {
            Opcode::Forward(cells) => cells.get(),
            Opcode::Diagonal(cells) => DIAGONAL_BASE | cells.get(),
            Opcode::Turn(turn) => TURN_BASE | turn.index(),
            Opcode::Error(reason) => ERROR_BASE | reason.code(),
            Opcode::End => END_BYTE,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = OpcodeError;

    fn try_from(byte: u8) -> Result<Self, OpcodeError> {
        Ok(match byte {
            0x00..=0x1F => Opcode::Forward(Cells(byte)),
            0x20..=0x3F => Opcode::Diagonal(Cells(byte & 0x1F)),
            END_BYTE => Opcode::End,
            0x40..=0x7E => Opcode::Turn(Turn::from_index(byte & 0x3F)?),
            ERROR_BASE..=0xFF => Opcode::Error(ErrorReason::from_code(byte & 0x0F)?),
            0x80..=0xEF => return Err(OpcodeError::ReservedByte(byte)),
        })
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.to_byte()
    }
}

impl From<Turn> for Opcode {
    fn from(turn: Turn) -> Self {
        Opcode::Turn(turn)
    }
}

impl From<ErrorReason> for Opcode {
    fn from(reason: ErrorReason) -> Self {
        Opcode::Error(reason)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            op if op.is_stop() => f.write_str("STOP"),
            Opcode::Forward(cells) => write!(f, "FWD{}", cells.get()),
            Opcode::Diagonal(cells) => write!(f, "DIA{}", cells.get()),
            Opcode::Turn(turn) => fmt::Display::fmt(turn, f),
            Opcode::Error(reason) => write!(f, "ERR_{:02}", reason.code()),
            Opcode::End => f.write_str("END"),
        }
    }
}

/// Parses the names produced by [`Display`](fmt::Display), e.g. `DIA3` or
/// `SD45R`.
impl FromStr for Opcode {
    type Err = OpcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = |digits: &str| {
            digits
                .parse::<usize>()
                .map_err(|_| OpcodeError::UnknownName)
        };
        match s {
            "STOP" => return Ok(Opcode::STOP),
            "END" => return Ok(Opcode::End),
            _ => {}
        }
        if let Some(n) = s.strip_prefix("FWD") {
            return Opcode::forward(number(n)?);
        }
        if let Some(n) = s.strip_prefix("DIA") {
            return Opcode::diagonal(number(n)?);
        }
        if let Some(code) = s.strip_prefix("ERR_") {
            let code = u8::try_from(number(code)?).map_err(|_| OpcodeError::UnknownName)?;
            return ErrorReason::from_code(code).map(Opcode::Error);
        }
        Turn::ALL
            .into_iter()
            .find(|turn| turn.mnemonic() == s)
            .map(Opcode::Turn)
            .ok_or(OpcodeError::UnknownName)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn stop_is_zero_length_forward() {
        assert_eq!(Opcode::STOP.to_byte(), 0);
        assert_eq!(Opcode::forward(0), Ok(Opcode::STOP));
        assert_eq!(Opcode::try_from(0u8), Ok(Opcode::STOP));
        assert_eq!(Opcode::STOP.category(), Category::Orthogonal);
    }

    #[test]
    fn every_variant_reports_its_category() {
        assert_eq!(Opcode::forward(7).unwrap().category(), Category::Orthogonal);
        assert_eq!(Opcode::diagonal(3).unwrap().category(), Category::Diagonal);
        assert_eq!(Opcode::Turn(Turn::Diagonal90Right).category(), Category::Turn);
        assert_eq!(Opcode::Turn(Turn::Smooth90ExitLeft).category(), Category::Turn);
        assert_eq!(Opcode::Error(ErrorReason::RunTooLong).category(), Category::Error);
        assert_eq!(Opcode::End.category(), Category::End);
        assert_eq!(Opcode::try_from(0x7F).map(Opcode::category), Ok(Category::End));
    }

    #[test]
    fn cells_are_range_checked() {
        assert!(Opcode::forward(31).is_ok());
        assert_eq!(Opcode::forward(32), Err(OpcodeError::CellsOutOfRange(32)));
        assert_eq!(
            Opcode::diagonal(300),
            Err(OpcodeError::CellsOutOfRange(300))
        );
    }

    #[quickcheck_macros::quickcheck]
    fn cells_accept_exactly_five_bits(n: usize) -> bool {
        Cells::new(n).map(Cells::get).ok() == u8::try_from(n).ok().filter(|&v| v <= 31)
    }

    #[test]
    fn bytes_match_controller_layout() {
        assert_eq!(Opcode::forward(5).unwrap().to_byte(), 0x05);
        assert_eq!(Opcode::diagonal(2).unwrap().to_byte(), 0x22);
        assert_eq!(Opcode::Turn(Turn::InPlace45Right).to_byte(), 0x40);
        assert_eq!(Opcode::Turn(Turn::OrthoToDiagonal45Right).to_byte(), 78);
        assert_eq!(Opcode::Turn(Turn::Smooth90ExitLeft).to_byte(), 89);
        assert_eq!(Opcode::End.to_byte(), 0x7F);
        assert_eq!(Opcode::Error(ErrorReason::InvalidStart).to_byte(), 0xF0);
        assert_eq!(Opcode::Error(ErrorReason::Fatal).to_byte(), 0xFF);
    }

    #[test]
    fn every_byte_decodes_to_itself_or_is_rejected() {
        let mut valid = 0;
        for byte in 0..=u8::MAX {
            match Opcode::try_from(byte) {
                Ok(op) => {
                    valid += 1;
                    assert_eq!(op.to_byte(), byte);
                }
                Err(err) => assert!(matches!(
                    err,
                    OpcodeError::ReservedByte(_)
                        | OpcodeError::UnknownTurn(_)
                        | OpcodeError::UnassignedErrorReason(_)
                )),
            }
        }
        // 32 + 32 straights, the turn catalog, END and the assigned reasons
        assert_eq!(valid, 64 + Turn::COUNT + 1 + ErrorReason::ALL.len());
    }

    #[test]
    fn display_uses_controller_names() {
        assert_eq!(Opcode::STOP.to_string(), "STOP");
        assert_eq!(Opcode::forward(12).unwrap().to_string(), "FWD12");
        assert_eq!(Opcode::diagonal(0).unwrap().to_string(), "DIA0");
        assert_eq!(Opcode::Turn(Turn::Diagonal90Left).to_string(), "DD90L");
        assert_eq!(Opcode::Error(ErrorReason::AfterLeft).to_string(), "ERR_03");
        assert_eq!(Opcode::Error(ErrorReason::Fatal).to_string(), "ERR_15");
        assert_eq!(Opcode::End.to_string(), "END");
    }

    #[test]
    fn names_parse_back() {
        for byte in 0..=u8::MAX {
            if let Ok(op) = Opcode::try_from(byte) {
                assert_eq!(op.to_string().parse::<Opcode>(), Ok(op));
            }
        }
        assert_eq!(" FWD0 ".parse::<Opcode>(), Ok(Opcode::STOP));
        assert_eq!("FWD32".parse::<Opcode>(), Err(OpcodeError::CellsOutOfRange(32)));
        assert_eq!("ERR_12".parse::<Opcode>(), Err(OpcodeError::UnassignedErrorReason(12)));
        assert_eq!("SS90XR".parse::<Opcode>(), Err(OpcodeError::UnknownName));
        assert_eq!("FWD".parse::<Opcode>(), Err(OpcodeError::UnknownName));
    }
}
