//! Coin-Operated Turnstile
//!
//! This example demonstrates a cyclic machine driven by payload-carrying
//! triggers.
//!
//! Key concepts:
//! - One trigger kind dispatched with different payloads (`with_payload`)
//! - Guards reading caller state
//! - Blocked dispatches versus unrecognized triggers
//! - Bounded transition history
//!
//! Run with: cargo run --example turnstile

use reactive_fsm::builder::FsmBuilder;
use reactive_fsm::core::IdSpace;
use reactive_fsm::engine::{Dispatch, ExecuteError};
use reactive_fsm::transitions;
use std::cell::Cell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FARE: u32 = 50;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let ids = IdSpace::new();
    let locked = ids.state();
    let unlocked = ids.state();
    let coin = ids.event_with(0u32);
    let push = ids.event_with(0u32);
    let credit = Cell::new(0u32);

    unlocked.on_enter(|| println!("  * gate opens"));
    unlocked.on_exit(|| println!("  * gate closes"));

    let fsm = FsmBuilder::new(&ids)
        .name("turnstile")
        .transitions(transitions![
            ids.initial() => &locked, on &push;
            &locked => &unlocked, on &coin,
                if || credit.get() >= FARE,
                then |_| credit.set(credit.get() - FARE);
            &unlocked => &locked, on &push;
        ])
        .history_limit(8)
        .strict()
        .initialized()
        .build();

    let mut fsm = match fsm {
        Ok(fsm) => fsm,
        Err(err) => {
            eprintln!("failed to build turnstile: {err}");
            return;
        }
    };

    let _ = fsm.execute(&push);

    for amount in [20u32, 20, 20, 0] {
        credit.set(credit.get() + amount);
        let outcome = fsm.execute(&coin.with_payload(amount));
        match outcome {
            Ok(Dispatch::Transitioned { .. }) => println!("coin {amount}: unlocked"),
            Ok(Dispatch::Blocked) => println!("coin {amount}: credit {} too low", credit.get()),
            Err(ExecuteError::NoMatchingTrigger { .. }) => {
                println!("coin {amount}: ignored, gate already open")
            }
            Err(err) => println!("coin {amount}: {err}"),
        }
    }

    if fsm.execute(&push).is_ok() {
        println!("push: passed through");
    }

    if let Some(history) = fsm.history() {
        println!("\nTransitions recorded: {}", history.len());
        for record in history.records() {
            println!("  {} -> {} on {}", record.from, record.to, record.trigger);
        }
    }

    println!("\n=== Example Complete ===");
}
