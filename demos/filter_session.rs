//! Filter Session
//!
//! This example plays the part of the UI: it subscribes to a session, presses
//! the buttons, and prints what a screen would render after each press.
//!
//! Key concepts:
//! - One snapshot published per command
//! - Toggles ignored while reverted
//! - Labels follow the saved flags while reverted
//!
//! Run with: cargo run --example filter_session

use filterstate::builder::FilterMachineBuilder;
use filterstate::config::BrightnessFormula;
use filterstate::machine::Command;
use filterstate::session::FilterSession;
use filterstate::view::ControlsView;
use filterstate::FilterState;
use tracing_subscriber::EnvFilter;

fn render(label: &str, state: &FilterState) {
    let controls = ControlsView::from_state(state);
    let pixel = state.composed_filter().apply_clamped([200.0, 100.0, 50.0, 255.0]);

    println!("{label}");
    println!(
        "  mode: {}  gray: {:?} (enabled: {})  bright: {:?} (enabled: {})  reset: {:?}",
        state.mode(),
        controls.gray.action,
        controls.gray.enabled,
        controls.bright.action,
        controls.bright.enabled,
        controls.reset,
    );
    println!("  sample pixel (200, 100, 50) -> {pixel:.1?}");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Filter Session Example ===\n");

    let machine = FilterMachineBuilder::new()
        .brightness(BrightnessFormula::scaled())
        .build()?;
    let mut session = FilterSession::new(machine);
    let mut rx = session.subscribe();

    render("Initial", &rx.borrow_and_update());

    let presses = [
        Command::ToggleBright,
        Command::ToggleGray,
        Command::Reset,
        Command::ToggleGray,
        Command::Reset,
        Command::ToggleBright,
    ];

    for command in presses {
        session.dispatch(command);
        rx.changed().await?;
        let state = rx.borrow_and_update().clone();
        render(&format!("After {command}"), &state);
    }

    println!("\nSnapshots published: {}", session.published());
    println!("\n=== Example Complete ===");
    Ok(())
}
