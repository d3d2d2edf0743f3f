use super::effect::Effect;

/// Folds actions into screen state.
///
/// `reduce` is the only place where state changes. It must not block or perform
/// I/O itself; asynchronous work is returned as an [`Effect`] built from the
/// environment.
pub trait Reducer: Send + Sync + 'static {
    /// Screen state.
    type State: Clone + Send + Sync + 'static;

    /// User intents and effect results.
    type Action: Send + 'static;

    /// Injected dependencies.
    type Environment: Send + Sync + 'static;

    /// Applies `action` to `state` and returns the work it requires.
    fn reduce(
        state: &mut Self::State,
        action: Self::Action,
        environment: &Self::Environment,
    ) -> Effect<Self::Action>;
}
