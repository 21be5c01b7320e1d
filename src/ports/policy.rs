//! Policy port - a decision rule mapping game states to actions

/// A control policy for one player.
///
/// Implementers are responsible for producing actions the game accepts:
/// for the pursuit-evasion game that means clamping to the [-1, 1] turn
/// input range and substituting a neutral action when evaluation of the
/// underlying decision rule produces no usable number.
pub trait Policy<S, A>: Send {
    /// Produce an action for the given state.
    fn perform_action(&mut self, state: &S) -> A;

    /// Name used in reports and logging.
    fn name(&self) -> &str;
}
