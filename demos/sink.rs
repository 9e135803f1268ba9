//! A kitchen sink driven by its tap and plug.
//!
//! Demonstrates wildcard rules, listeners and history recording.

use mata::automaton::HistoryRecorder;
use mata::{Guard, RulesetBuilder, Schematic};

#[derive(Debug, Clone, Copy)]
struct Controls {
    tap: u32,
    drainable: bool,
}

fn main() {
    let schematic = Schematic::new(
        RulesetBuilder::new()
            .from_any_when("running", |c: &Controls| c.tap > 0)
            .state("empty")
            .when("running", "full", |c: &Controls| c.tap == 0 && !c.drainable)
            .when("running", "draining", |c: &Controls| c.tap == 0 && c.drainable)
            .when("full", "draining", |c: &Controls| c.drainable)
            .rule("draining", "empty", Guard::Continue)
            .build(),
    );

    println!("States: {:?}", schematic.states().names());

    let sink = match schematic.create_automaton("empty") {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let recorder = HistoryRecorder::attach(&sink);

    sink.subscribe(|event| {
        println!(
            "  {} -> {} (input: {:?})",
            event.from, event.to, event.input
        );
    });

    let inputs = [
        Controls { tap: 1, drainable: false },
        Controls { tap: 0, drainable: false },
        Controls { tap: 0, drainable: true },
        Controls { tap: 0, drainable: true },
    ];

    for controls in &inputs {
        println!("Input {:?}", controls);
        let state = sink.next(controls);
        println!("  now {}", state);
    }

    let history = recorder.snapshot();
    println!("Path: {:?}", history.get_path());
}
