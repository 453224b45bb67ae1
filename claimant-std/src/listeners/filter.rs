//! Predicate-based listener constructors.

use claimant_core::Listener;

/// A listener that claims whenever `predicate` holds for the corroborate
/// payload.
pub fn when<C, A, F>(predicate: F) -> Listener<C, A>
where
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Listener::new().with_corroborate(predicate)
}

/// A listener that claims when the key extracted from the payload equals
/// `key`.
///
/// This is the usual shape of command routing: one listener per keyword.
///
/// ```rust
/// use claimant_core::{Dispatcher, ready};
/// use claimant_std::listeners::keyed;
///
/// struct Command { keyword: String }
///
/// let commands = Dispatcher::<Command>::new();
/// commands.attach(&keyed(|cmd: &Command| cmd.keyword.clone(), "help".to_string()));
///
/// let help = Command { keyword: "help".into() };
/// assert!(commands.dispatch(ready(help)).is_claimed());
/// ```
pub fn keyed<C, A, K, F>(key_of: F, key: K) -> Listener<C, A>
where
    K: PartialEq + Send + Sync + 'static,
    F: Fn(&C) -> K + Send + Sync + 'static,
{
    when(move |payload| key_of(payload) == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimant_core::{Dispatcher, ready};

    #[test]
    fn test_when_follows_predicate() {
        let dispatcher = Dispatcher::<i32>::new();
        dispatcher.attach(&when(|n: &i32| n.is_negative()));

        assert!(dispatcher.dispatch(ready(-4)).is_claimed());
        assert!(dispatcher.dispatch(ready(4)).is_unclaimed());
    }

    #[test]
    fn test_keyed_matches_key() {
        let dispatcher = Dispatcher::<(&'static str, u32)>::new();
        dispatcher.attach(&keyed(|pair: &(&'static str, u32)| pair.0, "bake"));

        assert!(dispatcher.dispatch(ready(("bake", 1))).is_claimed());
        assert!(dispatcher.dispatch(ready(("wash", 1))).is_unclaimed());
    }
}
