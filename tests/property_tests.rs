//! Property-based tests for filter transitions.
//!
//! States are generated by replaying random command sequences from
//! `FilterState::empty()`, so every generated state is reachable.

use filterstate::core::filter::{self, Adjustments};
use filterstate::core::{ColorMatrix, FilterState, State};
use filterstate::machine::Command;
use filterstate::view::ControlsView;
use filterstate::{BrightnessFormula, FilterConfig};
use proptest::prelude::*;

const EPS: f32 = 1e-4;

prop_compose! {
    fn arbitrary_command()(variant in 0..3u8) -> Command {
        match variant {
            0 => Command::ToggleGray,
            1 => Command::ToggleBright,
            _ => Command::Reset,
        }
    }
}

prop_compose! {
    fn arbitrary_adjustments()(offset_only in any::<bool>(), sat in 0.0f32..0.9) -> Adjustments {
        let brightness = if offset_only {
            BrightnessFormula::offset_only()
        } else {
            BrightnessFormula::scaled()
        };
        FilterConfig { brightness, gray_saturation: sat }.adjustments()
    }
}

fn run(state: &FilterState, command: Command, adjustments: &Adjustments) -> FilterState {
    match command {
        Command::ToggleGray => filter::toggle_gray(state, adjustments),
        Command::ToggleBright => filter::toggle_bright(state, adjustments),
        Command::Reset => filter::reset(state),
    }
}

prop_compose! {
    fn arbitrary_state()(
        commands in prop::collection::vec(arbitrary_command(), 0..12),
        adjustments in arbitrary_adjustments(),
    ) -> (FilterState, Adjustments) {
        let state = commands
            .iter()
            .fold(FilterState::empty(), |s, c| run(&s, *c, &adjustments));
        (state, adjustments)
    }
}

fn editing_state() -> impl Strategy<Value = (FilterState, Adjustments)> {
    arbitrary_state().prop_map(|(s, adj)| {
        if s.is_reverted() {
            (filter::reset(&s), adj)
        } else {
            (s, adj)
        }
    })
}

fn reverted_state() -> impl Strategy<Value = (FilterState, Adjustments)> {
    editing_state().prop_map(|(s, adj)| (filter::reset(&s), adj))
}

#[test]
fn empty_state_is_identity() {
    let state = FilterState::empty();
    assert!(state.composed_filter().is_identity());
    assert!(!state.is_gray_applied());
    assert!(!state.is_bright_applied());
    assert!(!state.is_reverted());
    assert!(!state.saved_is_gray());
    assert!(!state.saved_is_bright());
}

#[test]
fn composed_filter_matches_stepwise_application() {
    let adj = Adjustments::default();
    let state = filter::toggle_gray(&filter::toggle_bright(&FilterState::empty(), &adj), &adj);

    let input = [200.0, 100.0, 50.0, 255.0];
    let brightened = ColorMatrix::lighting(1.2, 10.0).apply_clamped(input);
    for (got, want) in brightened.iter().zip([250.0, 130.0, 70.0, 255.0].iter()) {
        assert!((got - want).abs() < EPS);
    }

    let stepwise = ColorMatrix::saturation(0.0).apply(brightened);
    let direct = state.composed_filter().apply(input);
    for (a, b) in stepwise.iter().zip(direct.iter()) {
        assert!((a - b).abs() < EPS, "{stepwise:?} != {direct:?}");
    }

    // Grayscale output has equal color channels.
    assert!((direct[0] - direct[1]).abs() < EPS);
    assert!((direct[1] - direct[2]).abs() < EPS);
}

#[test]
fn revert_snapshot_is_faithful() {
    let adj = Adjustments::default();
    let edited = filter::toggle_bright(&filter::toggle_gray(&FilterState::empty(), &adj), &adj);
    let reverted = filter::reset(&edited);

    assert_eq!(reverted.saved_composed_filter(), edited.composed_filter());

    let restored = filter::reset(&reverted);
    assert_eq!(restored.is_gray_applied(), edited.is_gray_applied());
    assert_eq!(restored.is_bright_applied(), edited.is_bright_applied());
    assert_eq!(restored.composed_filter(), edited.composed_filter());
}

proptest! {
    #[test]
    fn gray_toggle_pair_is_identity((state, adj) in editing_state()) {
        let twice = filter::toggle_gray(&filter::toggle_gray(&state, &adj), &adj);
        prop_assert_eq!(twice, state);
    }

    #[test]
    fn bright_toggle_pair_is_identity((state, adj) in editing_state()) {
        let twice = filter::toggle_bright(&filter::toggle_bright(&state, &adj), &adj);
        prop_assert_eq!(twice, state);
    }

    #[test]
    fn reset_pair_is_identity((state, _adj) in arbitrary_state()) {
        prop_assert_eq!(filter::reset(&filter::reset(&state)), state);
    }

    #[test]
    fn toggles_are_noops_while_reverted((state, adj) in reverted_state()) {
        prop_assert_eq!(filter::toggle_gray(&state, &adj), state.clone());
        prop_assert_eq!(filter::toggle_bright(&state, &adj), state);
    }

    #[test]
    fn gray_toggle_leaves_brightness_alone((state, adj) in editing_state()) {
        let next = filter::toggle_gray(&state, &adj);
        prop_assert_eq!(next.bright_matrix(), state.bright_matrix());
        prop_assert_eq!(next.is_bright_applied(), state.is_bright_applied());
    }

    #[test]
    fn bright_toggle_leaves_gray_alone((state, adj) in editing_state()) {
        let next = filter::toggle_bright(&state, &adj);
        prop_assert_eq!(next.gray_matrix(), state.gray_matrix());
        prop_assert_eq!(next.is_gray_applied(), state.is_gray_applied());
    }

    #[test]
    fn reachable_states_are_consistent((state, _adj) in arbitrary_state()) {
        prop_assert!(state.is_consistent());
        prop_assert_eq!(state.accepts_edits(), !state.is_reverted());
    }

    #[test]
    fn revert_captures_live_filter((state, _adj) in editing_state()) {
        let reverted = filter::reset(&state);
        prop_assert!(reverted.composed_filter().is_identity());
        prop_assert_eq!(reverted.saved_composed_filter(), state.composed_filter());
        prop_assert_eq!(reverted.saved_is_gray(), state.is_gray_applied());
        prop_assert_eq!(reverted.saved_is_bright(), state.is_bright_applied());
    }

    #[test]
    fn composed_filter_equals_stepwise(
        (state, _adj) in editing_state(),
        r in 0.0f32..255.0,
        g in 0.0f32..255.0,
        b in 0.0f32..255.0,
    ) {
        let color = [r, g, b, 255.0];
        let stepwise = state.gray_matrix().apply(state.bright_matrix().apply(color));
        let direct = state.composed_filter().apply(color);
        for (x, y) in stepwise.iter().zip(direct.iter()) {
            prop_assert!((x - y).abs() < 1e-2);
        }
    }

    #[test]
    fn controls_disable_effects_only_while_reverted((state, _adj) in arbitrary_state()) {
        let view = ControlsView::from_state(&state);
        prop_assert_eq!(view.gray.enabled, !state.is_reverted());
        prop_assert_eq!(view.bright.enabled, !state.is_reverted());
        prop_assert_eq!(view.reset.is_restore(), state.is_reverted());
    }

    #[test]
    fn state_roundtrip_serialization((state, _adj) in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: FilterState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
