/// Decision interface implemented by every player, human or scripted.
///
/// The turn engine calls [`choose_rerolls`](Strategy::choose_rerolls) after
/// each throw except the last. A strategy sees only its own current faces
/// and throw counters, never other players' state.
///
/// # Example Implementation
///
/// ```rust
/// use schocken_engine::strategy::Strategy;
///
/// struct KeepOnes;
///
/// impl Strategy for KeepOnes {
///     fn choose_rerolls(&self, faces: &[u8], _throw_number: u8, _throws_remaining: u8) -> Vec<usize> {
///         faces
///             .iter()
///             .enumerate()
///             .filter(|(_, &face)| face != 1)
///             .map(|(index, _)| index)
///             .collect()
///     }
///
///     fn name(&self) -> &str {
///         "keep-ones"
///     }
/// }
/// ```
pub trait Strategy: Send + Sync {
    /// Returns the indices of the dice to throw again, given the current
    /// faces. An empty set ends the turn early. `throw_number` starts at 1;
    /// `throws_remaining` is the number of re-throws still allowed.
    ///
    /// Every returned index must be a valid, unique index into `faces`;
    /// anything else aborts the turn with
    /// [`GameError::InvalidStrategyOutput`](crate::errors::GameError::InvalidStrategyOutput).
    fn choose_rerolls(&self, faces: &[u8], throw_number: u8, throws_remaining: u8) -> Vec<usize>;

    /// Identifier of this strategy, used in narration and diagnostics.
    fn name(&self) -> &str;
}
