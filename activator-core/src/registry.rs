use tracing::debug;

/// Slack for the pixel-rounded ratio browsers report on the crossing entry.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Whether a visibility change is enough to fire a target's action.
pub fn qualifies(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

struct Registration<K, A> {
    target: K,
    action: A,
}

/// One-shot visibility registrations.
///
/// Each target is bound to a single action. The first qualifying visibility
/// change hands the action back and forgets the target, so later
/// transitions for the same element are ignored.
pub struct VisibilityRegistry<K, A> {
    threshold: f64,
    registrations: Vec<Registration<K, A>>,
}

impl<K: PartialEq, A> VisibilityRegistry<K, A> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            registrations: Vec::new(),
        }
    }

    /// Returns false if the target was already registered; the existing
    /// binding is kept.
    pub fn register(&mut self, target: K, action: A) -> bool {
        if self.is_registered(&target) {
            return false;
        }
        self.registrations.push(Registration { target, action });
        true
    }

    pub fn is_registered(&self, target: &K) -> bool {
        self.registrations.iter().any(|r| &r.target == target)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Feeds one observer entry. On the first qualifying change the target is
    /// unregistered and its action returned; the caller stops observing it.
    pub fn on_visibility(&mut self, target: &K, is_intersecting: bool, ratio: f64) -> Option<A> {
        if !qualifies(is_intersecting, ratio, self.threshold) {
            return None;
        }
        let idx = self.registrations.iter().position(|r| &r.target == target)?;
        let reg = self.registrations.remove(idx);
        debug!(remaining = self.registrations.len(), "visibility target fired");
        Some(reg.action)
    }

    /// Drops every registration, returning the targets that never fired.
    pub fn disconnect(&mut self) -> Vec<K> {
        self.registrations.drain(..).map(|r| r.target).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{CounterAnimation, CounterStart};

    #[derive(Debug, PartialEq)]
    enum Action {
        Counter(i64),
        Chart(&'static str),
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(qualifies(true, 0.5, 0.5));
        assert!(qualifies(true, 1.0, 0.5));
        assert!(!qualifies(true, 0.49, 0.5));
        assert!(!qualifies(false, 0.9, 0.5));
    }

    #[test]
    fn crossing_entry_with_rounded_ratio_fires() {
        let mut reg = VisibilityRegistry::new(0.5);
        reg.register("hortas", 63);
        assert_eq!(reg.on_visibility(&"hortas", true, 0.49998), Some(63));
        assert!(reg.is_empty());
    }

    #[test]
    fn fires_once_per_target() {
        let mut reg = VisibilityRegistry::new(0.5);
        assert!(reg.register("chart", Action::Chart("producaoChart")));
        assert_eq!(reg.on_visibility(&"chart", true, 0.2), None);
        assert_eq!(
            reg.on_visibility(&"chart", true, 0.6),
            Some(Action::Chart("producaoChart"))
        );
        // leaving and re-entering the viewport does nothing
        assert_eq!(reg.on_visibility(&"chart", false, 0.0), None);
        assert_eq!(reg.on_visibility(&"chart", true, 1.0), None);
        assert!(reg.is_empty());
    }

    #[test]
    fn duplicate_registration_keeps_first_binding() {
        let mut reg = VisibilityRegistry::new(0.5);
        assert!(reg.register(1, Action::Counter(63)));
        assert!(!reg.register(1, Action::Counter(100)));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.on_visibility(&1, true, 0.5), Some(Action::Counter(63)));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut reg: VisibilityRegistry<u32, Action> = VisibilityRegistry::new(0.5);
        reg.register(1, Action::Counter(1));
        assert_eq!(reg.on_visibility(&2, true, 1.0), None);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn targets_are_independent() {
        let mut reg = VisibilityRegistry::new(0.5);
        reg.register("a", Action::Counter(63));
        reg.register("b", Action::Counter(2000));
        reg.register("c", Action::Chart("beneficiosChart"));
        assert_eq!(
            reg.on_visibility(&"c", true, 0.7),
            Some(Action::Chart("beneficiosChart"))
        );
        assert!(reg.is_registered(&"a"));
        assert!(reg.is_registered(&"b"));
        assert_eq!(reg.on_visibility(&"a", true, 0.7), Some(Action::Counter(63)));
    }

    #[test]
    fn disconnect_releases_everything() {
        let mut reg = VisibilityRegistry::new(0.5);
        reg.register("a", Action::Counter(1));
        reg.register("b", Action::Counter(2));
        let left = reg.disconnect();
        assert_eq!(left, vec!["a", "b"]);
        assert!(reg.is_empty());
        assert_eq!(reg.on_visibility(&"a", true, 1.0), None);
    }

    #[test]
    fn counter_reaches_63_and_reentry_does_not_restart() {
        let mut reg = VisibilityRegistry::new(0.5);
        reg.register("hortas", Action::Counter(63));

        let Some(Action::Counter(goal)) = reg.on_visibility(&"hortas", true, 0.8) else {
            panic!("counter should fire on first qualifying entry");
        };
        let CounterStart::Animate { mut animation, .. } = CounterAnimation::start(goal, 2000)
        else {
            panic!("63 animates");
        };
        let mut shown = String::from("0");
        while let Some(t) = animation.tick() {
            shown = t.text();
        }
        assert_eq!(shown, "63");

        assert_eq!(reg.on_visibility(&"hortas", false, 0.0), None);
        assert_eq!(reg.on_visibility(&"hortas", true, 0.9), None);
        assert!(animation.tick().is_none());
    }
}
