use core::fmt;

use thiserror::Error;

/// Why the translator gave up on a path.
///
/// Reasons are data: the translator appends them to the command stream as
/// [`Opcode::Error`](crate::Opcode::Error) at the position where the anomaly
/// was seen. The numeric code is the low nibble of the encoded opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(u8)]
pub enum ErrorReason {
    /// The path did not begin with `F` or `S`.
    InvalidStart = 0,
    /// Unexpected character after an orthogonal run.
    AfterOrthoRun = 1,
    /// Unexpected character after a single right turn.
    AfterRight = 2,
    /// Unexpected character after a single left turn.
    AfterLeft = 3,
    /// A third right turn, or an unexpected character, after two rights.
    AfterTwoRights = 4,
    /// Unexpected character in a diagonal entered right-then-left.
    DiagonalAfterRightLeft = 5,
    /// Unexpected character in a diagonal entered left-then-right.
    DiagonalAfterLeftRight = 6,
    /// A third left turn, or an unexpected character, after two lefts.
    AfterTwoLefts = 7,
    /// Unexpected character in a diagonal after two lefts.
    DiagonalAfterTwoLefts = 8,
    /// Unexpected character in a diagonal after two rights.
    DiagonalAfterTwoRights = 9,
    /// A pending run no longer fits the 5-bit cell count.
    RunTooLong = 10,
    /// A transition with no defined meaning.
    Fatal = 15,
}

impl ErrorReason {
    /// Every assigned reason, in code order.
    pub const ALL: [ErrorReason; 12] = [
        Self::InvalidStart,
        Self::AfterOrthoRun,
        Self::AfterRight,
        Self::AfterLeft,
        Self::AfterTwoRights,
        Self::DiagonalAfterRightLeft,
        Self::DiagonalAfterLeftRight,
        Self::AfterTwoLefts,
        Self::DiagonalAfterTwoLefts,
        Self::DiagonalAfterTwoRights,
        Self::RunTooLong,
        Self::Fatal,
    ];

    /// The 4-bit reason code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a reason by its 4-bit code. Codes 11 to 14 are unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`OpcodeError::UnassignedErrorReason`] for codes with no
    /// reason attached.
    pub fn from_code(code: u8) -> Result<Self, OpcodeError> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.code() == code)
            .ok_or(OpcodeError::UnassignedErrorReason(code))
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidStart => "path must start with F or S",
            Self::AfterOrthoRun => "invalid character after a straight run",
            Self::AfterRight => "invalid character after a right turn",
            Self::AfterLeft => "invalid character after a left turn",
            Self::AfterTwoRights => "invalid character after two right turns",
            Self::DiagonalAfterRightLeft => "invalid character in a right-left diagonal",
            Self::DiagonalAfterLeftRight => "invalid character in a left-right diagonal",
            Self::AfterTwoLefts => "invalid character after two left turns",
            Self::DiagonalAfterTwoLefts => "invalid character in a diagonal after two lefts",
            Self::DiagonalAfterTwoRights => "invalid character in a diagonal after two rights",
            Self::RunTooLong => "run is longer than 31 cells",
            Self::Fatal => "undefined transition",
        };
        f.write_str(msg)
    }
}

/// Failure to build or decode an [`Opcode`](crate::Opcode).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeError {
    #[error("run of {0} cells does not fit in 5 bits")]
    CellsOutOfRange(usize),
    #[error("turn index {0} is not in the catalog")]
    UnknownTurn(u8),
    #[error("error reason {0} is unassigned")]
    UnassignedErrorReason(u8),
    #[error("byte {0:#04x} does not encode an opcode")]
    ReservedByte(u8),
    #[error("unknown opcode name")]
    UnknownName,
}
