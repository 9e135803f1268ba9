//! Screen navigation for a small game, with global routes and a graph
//! export for diagram tools.

use mata::graph::EdgeKind;
use mata::{Guard, RulesetBuilder, Schematic};

#[derive(Debug, Clone, Copy, Default)]
struct Session {
    games_played: u32,
    finished: bool,
    dead: bool,
    force_tutorial: bool,
}

fn main() {
    let schematic = Schematic::new(
        RulesetBuilder::new()
            .when("welcome", "tutorial", |s: &Session| s.games_played < 1)
            .when("welcome", "game", |s: &Session| s.games_played > 0)
            .when("tutorial", "game", |s: &Session| {
                s.games_played > 0 && !s.force_tutorial
            })
            .rule("game", "playing", Guard::Continue)
            .when("playing", "results", |s: &Session| s.finished)
            .when("results", "game", |s: &Session| !s.finished)
            .when("game_over", "game", |s: &Session| !s.dead)
            .from_any_when("tutorial", |s: &Session| s.force_tutorial)
            .from_any_when("game_over", |s: &Session| s.dead)
            .build(),
    );

    for edge in schematic.edges() {
        let arrow = match edge.kind {
            EdgeKind::Strong => "-->",
            EdgeKind::Weak => "-.->",
        };
        println!("{} {} {}", edge.from, arrow, edge.to);
    }

    match schematic.blueprint().to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{e}"),
    }

    let nav = match schematic.create_automaton("welcome") {
        Ok(nav) => nav,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let mut session = Session::default();
    println!("{}", nav.next(&session));
    session.games_played = 1;
    println!("{}", nav.next(&session));
    println!("{}", nav.next(&session));
    session.dead = true;
    println!("{}", nav.next(&session));
}
