/// Configuration options for the path translator.
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslatorOptions {
    /// Whether runs longer than 31 cells are split into several opcodes.
    ///
    /// A run opcode holds at most 31 cells. When `true`, a longer run is
    /// emitted as consecutive 31-cell runs followed by the remainder, e.g.
    /// `FWD31, FWD9` for 40 cells. When `false`, the translator emits
    /// [`ErrorReason::RunTooLong`](crate::ErrorReason::RunTooLong) and stops.
    ///
    /// # Default
    ///
    /// `false`
    pub split_long_runs: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic when an error opcode is emitted instead of recording it.
    ///
    /// Enabled only in test builds to produce backtraces on bad paths.
    pub panic_on_error: bool,
}
