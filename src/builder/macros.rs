//! Macros for ergonomic state declaration.

/// Declare a plain enum usable as a state.
///
/// Derives the traits [`State`](crate::core::State) needs and names each
/// variant after itself.
///
/// # Example
///
/// ```
/// use mata::state_enum;
/// use mata::core::State;
///
/// state_enum! {
///     pub enum Sink {
///         Empty,
///         Running,
///         Full,
///         Draining,
///     }
/// }
///
/// assert_eq!(Sink::Draining.name(), "Draining");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::RulesetBuilder;
    use crate::core::{Guard, State};
    use crate::schematic::Schematic;

    state_enum! {
        enum Phase {
            Start,
            Middle,
            End,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Phase::Start.name(), "Start");
        assert_eq!(Phase::Middle.name(), "Middle");
        assert_eq!(Phase::End.name(), "End");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::B.name(), "B");
        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn state_enum_drives_a_schematic() {
        let schematic: Schematic<Phase, ()> = Schematic::new(
            RulesetBuilder::new()
                .rule(Phase::Start, Phase::Middle, Guard::Continue)
                .rule(Phase::Middle, Phase::End, Guard::Continue)
                .build(),
        );
        let machine = schematic.create_automaton(Phase::Start).unwrap();

        machine.next(&());
        assert_eq!(machine.next(&()), Phase::End);
        assert_eq!(schematic.states().names(), vec!["Start", "Middle", "End"]);
    }
}
