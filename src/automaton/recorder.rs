//! Recording committed transitions into a [`StateHistory`].

use crate::automaton::event::Subscription;
use crate::automaton::machine::Automaton;
use crate::core::{State, StateHistory, StateTransition};
use chrono::Utc;
use std::cell::RefCell;
use std::rc::Rc;

/// Listener that appends every committed transition to a history.
///
/// # Example
///
/// ```rust
/// use mata::automaton::HistoryRecorder;
/// use mata::builder::RulesetBuilder;
/// use mata::core::Guard;
/// use mata::schematic::Schematic;
///
/// let schematic: Schematic<&'static str, ()> = Schematic::new(
///     RulesetBuilder::new()
///         .rule("a", "b", Guard::Continue)
///         .rule("b", "c", Guard::Continue)
///         .build(),
/// );
/// let machine = schematic.create_automaton("a").unwrap();
/// let recorder = HistoryRecorder::attach(&machine);
///
/// machine.next(&());
/// machine.next(&());
///
/// assert_eq!(recorder.snapshot().get_path(), vec![&"a", &"b", &"c"]);
/// ```
pub struct HistoryRecorder<S: State, I> {
    history: Rc<RefCell<StateHistory<S>>>,
    subscription: Subscription<S, I>,
}

impl<S: State + 'static, I> HistoryRecorder<S, I> {
    /// Start recording transitions of `automaton`.
    pub fn attach(automaton: &Automaton<S, I>) -> Self {
        let history = Rc::new(RefCell::new(StateHistory::new()));
        let sink = Rc::clone(&history);
        let subscription = automaton.subscribe(move |event| {
            let transition = StateTransition {
                from: event.from.clone(),
                to: event.to.clone(),
                timestamp: Utc::now(),
                forced: event.is_forced(),
            };
            sink.borrow_mut().push(transition);
        });
        Self {
            history,
            subscription,
        }
    }
}

impl<S: State, I> HistoryRecorder<S, I> {
    /// Copy of everything recorded so far.
    pub fn snapshot(&self) -> StateHistory<S> {
        self.history.borrow().clone()
    }

    /// Stop recording. The history recorded so far is kept.
    pub fn stop(&self) {
        self.subscription.unsubscribe();
    }

    pub fn is_recording(&self) -> bool {
        self.subscription.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RulesetBuilder;
    use crate::core::Guard;
    use crate::schematic::Schematic;

    fn toggle() -> Schematic<String, bool> {
        Schematic::new(
            RulesetBuilder::new()
                .rule("on".to_string(), "off".to_string(), Guard::when(|b: &bool| !*b))
                .rule("off".to_string(), "on".to_string(), Guard::when(|b: &bool| *b))
                .build(),
        )
    }

    #[test]
    fn records_guarded_and_forced_transitions() {
        let machine = toggle().create_automaton("off".to_string()).unwrap();
        let recorder = HistoryRecorder::attach(&machine);

        machine.next(&true);
        machine.next(&true);
        machine.force("off".to_string()).unwrap();

        let history = recorder.snapshot();
        assert_eq!(history.len(), 2);
        assert!(!history.transitions()[0].forced);
        assert!(history.transitions()[1].forced);
        assert_eq!(history.transitions()[1].from, "on");
    }

    #[test]
    fn long_runs_record_every_transition() {
        let machine = toggle().create_automaton("off".to_string()).unwrap();
        let recorder = HistoryRecorder::attach(&machine);

        for i in 0..1000 {
            machine.next(&(i % 2 == 0));
        }

        let history = recorder.snapshot();
        assert_eq!(history.len(), 1000);
        assert_eq!(history.get_path().len(), 1001);
        assert_eq!(history.transitions()[999].to, "off");
    }

    #[test]
    fn stop_keeps_recorded_history() {
        let machine = toggle().create_automaton("off".to_string()).unwrap();
        let recorder = HistoryRecorder::attach(&machine);

        machine.next(&true);
        recorder.stop();
        machine.next(&false);

        assert!(!recorder.is_recording());
        assert_eq!(recorder.snapshot().len(), 1);
        assert_eq!(machine.state(), "off");
    }
}
