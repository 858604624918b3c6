//! Minimal Machine
//!
//! This example walks the smallest useful machine end to end:
//!
//! ```text
//!   [Initial] --a / action1--> [A] --b [guard2] / action2--> [Final]
//! ```
//!
//! Key concepts:
//! - Pseudo-states come from the identity space
//! - Actions receive the dispatched trigger
//! - Enter/exit hooks and the debug hook
//! - Reset requires a new init()
//!
//! Run with: RUST_LOG=reactive_fsm=debug cargo run --example sample

use reactive_fsm::core::{Event, IdSpace, State, Transition};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn action1(event: &Event) {
    println!("perform custom action 1 with event {}", event.id());
}

fn guard2() -> bool {
    true
}

fn action2(event: &Event) {
    println!("perform custom action 2 with event {}", event.id());
}

fn report(from: &State, to: &State, trigger: &Event) {
    println!(
        "changed from {} to {} with trigger {}",
        from.id(),
        to.id(),
        trigger.id()
    );
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reactive_fsm=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Minimal Machine Example ===\n");

    let ids = IdSpace::new();
    let event_a = ids.event();
    let event_b = ids.event();

    let state_a = ids.state();
    state_a.on_enter(|| println!("entering state A"));
    state_a.on_exit(|| println!("exiting state A"));

    let mut fsm = ids.fsm().named("sample");
    fsm.on_transition(report);
    fsm.add_transitions(vec![
        Transition::new(ids.initial(), &state_a, &event_a).action(action1),
        Transition::new(&state_a, ids.final_state(), &event_b)
            .guard(guard2)
            .action(action2),
    ]);

    fsm.init();
    println!("Initial: {}", fsm.is_initial());

    match fsm.execute(&event_a) {
        Ok(dispatch) => println!("Dispatched a: {dispatch:?}"),
        Err(err) => println!("Dispatch of a failed: {err}"),
    }
    println!("Now in state A: {}", fsm.state() == &state_a);

    match fsm.execute(&event_b) {
        Ok(dispatch) => println!("Dispatched b: {dispatch:?}"),
        Err(err) => println!("Dispatch of b failed: {err}"),
    }
    println!("Final: {}", fsm.is_final());

    fsm.reset();
    println!("After reset, initial: {}", fsm.is_initial());
    if let Err(err) = fsm.execute(&event_a) {
        println!("Dispatch before init: {err} (code {})", err.code());
    }

    println!("\n=== Example Complete ===");
}
