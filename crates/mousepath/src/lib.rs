//! Translates micromouse path strings into motion-controller opcodes.
//!
//! A maze solver describes the route to the goal as a string over `F`, `R`,
//! `L` and `S`. [`translate`] turns that string into a compact stream of
//! [`Opcode`]s: straight runs (orthogonal or diagonal) and smooth turns that
//! let the mouse cut zig-zags short with diagonal runs.
//!
//! ```rust
//! use mousepath::{CommandBuffer, Outcome, translate};
//!
//! let mut commands = CommandBuffer::<64>::new();
//! let result = translate("FRLS", &mut commands);
//!
//! assert_eq!(result.outcome, Outcome::Completed);
//! assert_eq!(commands.render(), "FWD1, SD45R, DIA2, DS45L, FWD1, STOP");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod opcode;
mod translator;
mod turn;

#[cfg(test)]
mod tests;

pub use buffer::{CommandBuffer, Comparison, DEFAULT_CAPACITY, compare};
pub use error::{ErrorReason, OpcodeError};
pub use opcode::{Category, Cells, Opcode};
pub use translator::{
    Outcome, PathChar, PathState, PathTranslator, Translation, TranslatorOptions,
};
pub use turn::{Hand, Heading, Motion, TURN_TABLE, Turn, TurnInfo};

/// Translates `path` into `out` with default options.
///
/// See [`PathTranslator::translate`].
pub fn translate<const N: usize>(
    path: impl AsRef<[u8]>,
    out: &mut CommandBuffer<N>,
) -> Translation {
    PathTranslator::default().translate(path, out)
}
