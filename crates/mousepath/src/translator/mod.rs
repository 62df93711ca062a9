//! Path translator: a single-pass state machine from path text to opcodes.
//!
//! The input alphabet is `F` (advance one cell), `R` / `L` (turn 90° right or
//! left) and `S` (stop in this cell). Turns cannot be emitted the moment they
//! are read: one more character decides whether an `R` is an isolated 90°
//! turn, half of a 180° turn, or the entry into a diagonal run. The states
//! below remember exactly that much history, and opcodes are emitted as soon
//! as the history is unambiguous.
//!
//! A pending run length accompanies the run-carrying states. Each smooth turn
//! consumes the cell it enters from and the cell it exits into, so a run that
//! starts after a turn already counts two cells.
//!
//! Errors never abort a translation. An error opcode is appended where the
//! bad character was seen, followed by the usual `STOP`, and everything
//! emitted before it stays valid.

mod options;

use bstr::ByteSlice as _;
pub use options::TranslatorOptions;

use crate::{
    buffer::CommandBuffer,
    error::ErrorReason,
    opcode::{Cells, Opcode},
    turn::Turn,
};

/// Where the translator is in a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathState {
    /// Nothing read yet; only `F` or `S` may start a path.
    Start,
    /// Counting `F`s of an orthogonal run.
    InOrthoRun,
    /// Read one `R` after an orthogonal run.
    AfterOneRight,
    /// Read one `L` after an orthogonal run.
    AfterOneLeft,
    /// Read `RR` after an orthogonal run.
    AfterTwoRights,
    /// Read `LL` after an orthogonal run.
    AfterTwoLefts,
    /// On a diagonal whose last turn was a left following a right.
    InDiagRunAfterRightThenLeft,
    /// On a diagonal whose last turn was a right following a left.
    InDiagRunAfterLeftThenRight,
    /// On a diagonal whose last two turns were rights.
    InDiagRunAfterTwoRights,
    /// On a diagonal whose last two turns were lefts.
    InDiagRunAfterTwoLefts,
    /// The next input position only terminates the stream with `STOP`.
    Stopping,
    /// Terminal; no further input is consumed.
    Exited,
}

/// One input position, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathChar {
    /// `F`
    Forward,
    /// `R`
    Right,
    /// `L`
    Left,
    /// `S`
    Stop,
    /// End of input. A NUL byte also ends the input.
    End,
    /// Any other byte.
    Other(u8),
}

impl PathChar {
    /// Classifies one input position; `None` is the end of input.
    #[must_use]
    pub fn classify(input: Option<u8>) -> Self {
        match input {
            Some(b'F') => PathChar::Forward,
            Some(b'R') => PathChar::Right,
            Some(b'L') => PathChar::Left,
            Some(b'S') => PathChar::Stop,
            None | Some(b'\0') => PathChar::End,
            Some(other) => PathChar::Other(other),
        }
    }
}

/// How a translation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The path was well formed and the stream ends in `STOP`.
    Completed,
    /// An error opcode was emitted before the final `STOP`.
    Failed(ErrorReason),
}

/// Summary of one [`PathTranslator::translate`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    /// Input positions consumed, counting the end-of-input sentinel.
    pub consumed: usize,
    /// Opcodes the translator tried to append, including dropped ones.
    pub emitted: usize,
    /// Whether the buffer ran out of room for some of them.
    pub truncated: bool,
    /// Whether an error opcode was emitted.
    pub outcome: Outcome,
}

impl Translation {
    /// Completed without losing any opcode to overflow.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome == Outcome::Completed && !self.truncated
    }
}

/// Converts path text into opcodes, one input position per [`step`].
///
/// [`step`]: PathTranslator::step
#[derive(Debug, Clone)]
pub struct PathTranslator {
    state: PathState,
    /// Cells accumulated since the last emitted run.
    run: usize,
    consumed: usize,
    emitted: usize,
    failure: Option<ErrorReason>,

    split_long_runs: bool,
    #[cfg(any(test, feature = "fuzzing"))]
    panic_on_error: bool,
}

impl Default for PathTranslator {
    fn default() -> Self {
        Self::new(TranslatorOptions::default())
    }
}

impl PathTranslator {
    /// Creates a translator in [`PathState::Start`].
    #[must_use]
    pub fn new(options: TranslatorOptions) -> Self {
        Self {
            state: PathState::Start,
            run: 0,
            consumed: 0,
            emitted: 0,
            failure: None,
            split_long_runs: options.split_long_runs,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: options.panic_on_error,
        }
    }

    /// Returns to [`PathState::Start`], keeping the options.
    pub fn reset(&mut self) {
        self.state = PathState::Start;
        self.run = 0;
        self.consumed = 0;
        self.emitted = 0;
        self.failure = None;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PathState {
        self.state
    }

    /// Whether [`PathState::Exited`] has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == PathState::Exited
    }

    /// Pending cell count of the current run.
    #[must_use]
    pub fn run_length(&self) -> usize {
        self.run
    }

    /// Input positions consumed since the last reset.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Clears `out` and translates the whole of `path` into it.
    ///
    /// The bytes of `path` are followed by an end-of-input sentinel, so the
    /// translator always reaches [`PathState::Exited`]. Characters after the
    /// path's `S` are never read.
    pub fn translate<const N: usize>(
        &mut self,
        path: impl AsRef<[u8]>,
        out: &mut CommandBuffer<N>,
    ) -> Translation {
        let path = path.as_ref();
        tracing::debug!(path = ?path.as_bstr(), "translating path");

        self.reset();
        out.clear();
        let mut input = path.iter().copied();
        while !self.is_finished() {
            self.step(input.next(), out);
        }

        let translation = Translation {
            consumed: self.consumed,
            emitted: self.emitted,
            truncated: out.is_truncated(),
            outcome: self
                .failure
                .map_or(Outcome::Completed, Outcome::Failed),
        };
        tracing::debug!(
            consumed = translation.consumed,
            emitted = translation.emitted,
            truncated = translation.truncated,
            outcome = ?translation.outcome,
            "translation finished"
        );
        translation
    }

    /// Consumes one input position (`None` is end of input), appending any
    /// opcodes it settles to `out`, and returns the new state.
    ///
    /// Once [`PathState::Exited`] is reached, further calls consume nothing.
    pub fn step<const N: usize>(
        &mut self,
        input: Option<u8>,
        out: &mut CommandBuffer<N>,
    ) -> PathState {
        use PathChar::{Forward as F, Left as L, Right as R, Stop as S};
        use PathState::*;

        if self.state == Exited {
            return Exited;
        }
        self.consumed += 1;

        let from = self.state;
        let ch = PathChar::classify(input);
        let next = match (from, ch) {
            (Start, F) => {
                self.run = 1;
                InOrthoRun
            }
            (Start, S) => Stopping,
            (Start, _) => self.fail(out, ErrorReason::InvalidStart),

            (InOrthoRun, F) => {
                self.run = self.run.saturating_add(1);
                InOrthoRun
            }
            (InOrthoRun, R) => self.flush(out, Opcode::Forward, AfterOneRight),
            (InOrthoRun, L) => self.flush(out, Opcode::Forward, AfterOneLeft),
            (InOrthoRun, S) => self.flush(out, Opcode::Forward, Stopping),
            (InOrthoRun, _) => self.fail(out, ErrorReason::AfterOrthoRun),

            (AfterOneRight, F) => self.turn(out, Turn::Smooth90Right, InOrthoRun),
            (AfterOneRight, R) => AfterTwoRights,
            (AfterOneRight, L) => self.turn(
                out,
                Turn::OrthoToDiagonal45Right,
                InDiagRunAfterRightThenLeft,
            ),
            (AfterOneRight, S) => self.finish(out, Turn::Smooth90ExitRight),
            (AfterOneRight, _) => self.fail(out, ErrorReason::AfterRight),

            (AfterOneLeft, F) => self.turn(out, Turn::Smooth90Left, InOrthoRun),
            (AfterOneLeft, R) => self.turn(
                out,
                Turn::OrthoToDiagonal45Left,
                InDiagRunAfterLeftThenRight,
            ),
            (AfterOneLeft, L) => AfterTwoLefts,
            (AfterOneLeft, S) => self.finish(out, Turn::Smooth90ExitLeft),
            (AfterOneLeft, _) => self.fail(out, ErrorReason::AfterLeft),

            (AfterTwoRights, F) => self.turn(out, Turn::Smooth180Right, InOrthoRun),
            (AfterTwoRights, L) => self.turn(
                out,
                Turn::OrthoToDiagonal135Right,
                InDiagRunAfterRightThenLeft,
            ),
            (AfterTwoRights, S) => self.finish(out, Turn::Smooth180Right),
            (AfterTwoRights, _) => self.fail(out, ErrorReason::AfterTwoRights),

            (AfterTwoLefts, F) => self.turn(out, Turn::Smooth180Left, InOrthoRun),
            (AfterTwoLefts, R) => self.turn(
                out,
                Turn::OrthoToDiagonal135Left,
                InDiagRunAfterLeftThenRight,
            ),
            (AfterTwoLefts, S) => self.finish(out, Turn::Smooth180Left),
            (AfterTwoLefts, _) => self.fail(out, ErrorReason::AfterTwoLefts),

            (InDiagRunAfterRightThenLeft, F) => {
                self.splice(out, Turn::DiagonalToOrtho45Left, InOrthoRun)
            }
            (InDiagRunAfterRightThenLeft, R) => {
                self.run = self.run.saturating_add(1);
                InDiagRunAfterLeftThenRight
            }
            (InDiagRunAfterRightThenLeft, L) => InDiagRunAfterTwoLefts,
            (InDiagRunAfterRightThenLeft, S) => {
                self.finish_diagonal(out, Turn::DiagonalToOrtho45Left)
            }
            (InDiagRunAfterRightThenLeft, _) => {
                self.fail(out, ErrorReason::DiagonalAfterRightLeft)
            }

            (InDiagRunAfterLeftThenRight, F) => {
                self.splice(out, Turn::DiagonalToOrtho45Right, InOrthoRun)
            }
            (InDiagRunAfterLeftThenRight, R) => InDiagRunAfterTwoRights,
            (InDiagRunAfterLeftThenRight, L) => {
                self.run = self.run.saturating_add(1);
                InDiagRunAfterRightThenLeft
            }
            (InDiagRunAfterLeftThenRight, S) => {
                self.finish_diagonal(out, Turn::DiagonalToOrtho45Right)
            }
            (InDiagRunAfterLeftThenRight, _) => {
                self.fail(out, ErrorReason::DiagonalAfterLeftRight)
            }

            (InDiagRunAfterTwoLefts, F) => {
                self.splice(out, Turn::DiagonalToOrtho135Left, InOrthoRun)
            }
            (InDiagRunAfterTwoLefts, R) => {
                self.splice(out, Turn::Diagonal90Left, InDiagRunAfterLeftThenRight)
            }
            (InDiagRunAfterTwoLefts, S) => {
                self.finish_diagonal(out, Turn::DiagonalToOrtho135Left)
            }
            (InDiagRunAfterTwoLefts, _) => self.fail(out, ErrorReason::DiagonalAfterTwoLefts),

            (InDiagRunAfterTwoRights, F) => {
                self.splice(out, Turn::DiagonalToOrtho135Right, InOrthoRun)
            }
            // No primitive turns a diagonal through three rights. Flagged as
            // undefined rather than reported as a reason-9 error.
            (InDiagRunAfterTwoRights, R) => self.fail(out, ErrorReason::Fatal),
            (InDiagRunAfterTwoRights, L) => {
                self.splice(out, Turn::Diagonal90Right, InDiagRunAfterRightThenLeft)
            }
            (InDiagRunAfterTwoRights, S) => {
                self.finish_diagonal(out, Turn::DiagonalToOrtho135Right)
            }
            (InDiagRunAfterTwoRights, _) => {
                self.fail(out, ErrorReason::DiagonalAfterTwoRights)
            }

            (Stopping, _) => {
                self.emit(out, Opcode::STOP);
                Exited
            }
            (Exited, _) => Exited,
        };

        tracing::trace!(?from, ?ch, to = ?next, run = self.run, "path step");
        self.state = next;
        next
    }

    fn emit<const N: usize>(&mut self, out: &mut CommandBuffer<N>, op: Opcode) {
        self.emitted += 1;
        out.append(op);
    }

    /// Records `reason` in the stream and heads for `STOP`.
    fn fail<const N: usize>(
        &mut self,
        out: &mut CommandBuffer<N>,
        reason: ErrorReason,
    ) -> PathState {
        tracing::warn!(code = reason.code(), %reason, "path translation failed");
        #[cfg(any(test, feature = "fuzzing"))]
        if self.panic_on_error {
            panic!("path translation failed: {reason}");
        }
        self.emit(out, Opcode::Error(reason));
        self.failure = Some(reason);
        PathState::Stopping
    }

    /// Emits the pending run as `kind` opcodes and clears it.
    fn emit_run<const N: usize>(
        &mut self,
        out: &mut CommandBuffer<N>,
        kind: fn(Cells) -> Opcode,
    ) -> Result<(), ErrorReason> {
        let max = usize::from(Cells::MAX.get());
        let mut remaining = self.run;
        if self.split_long_runs {
            while remaining > max {
                self.emit(out, kind(Cells::MAX));
                remaining -= max;
            }
        }
        let cells = Cells::new(remaining).map_err(|_| ErrorReason::RunTooLong)?;
        self.emit(out, kind(cells));
        self.run = 0;
        Ok(())
    }

    fn flush<const N: usize>(
        &mut self,
        out: &mut CommandBuffer<N>,
        kind: fn(Cells) -> Opcode,
        next: PathState,
    ) -> PathState {
        match self.emit_run(out, kind) {
            Ok(()) => next,
            Err(reason) => self.fail(out, reason),
        }
    }

    /// Emits a turn that starts a new two-cell run.
    fn turn<const N: usize>(
        &mut self,
        out: &mut CommandBuffer<N>,
        turn: Turn,
        next: PathState,
    ) -> PathState {
        self.emit(out, Opcode::Turn(turn));
        self.run = 2;
        next
    }

    /// Ends the pending diagonal run with `turn` and starts a new run.
    fn splice<const N: usize>(
        &mut self,
        out: &mut CommandBuffer<N>,
        turn: Turn,
        next: PathState,
    ) -> PathState {
        if let Err(reason) = self.emit_run(out, Opcode::Diagonal) {
            return self.fail(out, reason);
        }
        self.turn(out, turn, next)
    }

    /// Final turn into the goal cell: the turn, then the one cell it exits
    /// into.
    fn finish<const N: usize>(&mut self, out: &mut CommandBuffer<N>, turn: Turn) -> PathState {
        self.emit(out, Opcode::Turn(turn));
        self.emit(out, Opcode::Forward(Cells::ONE));
        PathState::Stopping
    }

    fn finish_diagonal<const N: usize>(
        &mut self,
        out: &mut CommandBuffer<N>,
        turn: Turn,
    ) -> PathState {
        if let Err(reason) = self.emit_run(out, Opcode::Diagonal) {
            return self.fail(out, reason);
        }
        self.finish(out, turn)
    }
}
