//! Property-based tests for coverage, determinism and all-or-nothing plan building

use disparrange::error::PlanError;
use disparrange::plan::{build_plan, GroupKind};
use disparrange::probe::OutputRecord;
use disparrange::profile::{OutputSpec, ProfileSet};
use disparrange::types::{Mode, Position};
use proptest::prelude::*;
use std::collections::HashSet;

/// Probed outputs with unique names, in arbitrary order.
fn probed_outputs() -> impl Strategy<Value = Vec<OutputRecord>> {
    prop::collection::hash_set("(eDP|HDMI|DP|VGA)-[1-4]", 1..8).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let len = names.len();
        prop::collection::vec(any::<bool>(), len).prop_map(move |connected| {
            names
                .iter()
                .zip(connected)
                .map(|(name, connected)| OutputRecord::new(name.clone(), connected))
                .collect()
        })
    })
}

fn spec_for(name: String) -> impl Strategy<Value = OutputSpec> {
    (
        prop::option::of((1u32..8000, 1u32..8000)),
        prop::option::of((-4000i32..8000, -4000i32..8000)),
    )
        .prop_map(move |(mode, pos)| OutputSpec {
            output: name.clone(),
            mode: mode.map(|(w, h)| Mode::new(w, h)),
            pos: pos.map(|(x, y)| Position::new(x, y)),
        })
}

/// Probed outputs plus a non-empty profile whose entries (duplicates allowed) all exist.
fn probed_and_profile() -> impl Strategy<Value = (Vec<OutputRecord>, Vec<OutputSpec>)> {
    probed_outputs().prop_flat_map(|probed| {
        let names: Vec<String> = probed.iter().map(|o| o.name.clone()).collect();
        let specs = prop::collection::vec(prop::sample::select(names), 1..10)
            .prop_flat_map(|picked| picked.into_iter().map(spec_for).collect::<Vec<_>>());
        (Just(probed), specs)
    })
}

fn single_profile(specs: Vec<OutputSpec>) -> ProfileSet {
    std::iter::once(("p".to_string(), specs)).collect()
}

/// Every probed output gets exactly one group; activated ones are exactly the requested ones.
#[test]
fn test_plan_covers_probed_outputs_exactly_once() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&probed_and_profile(), |(probed, specs)| {
            let requested: HashSet<String> = specs.iter().map(|s| s.output.clone()).collect();
            let plan = build_plan("p", &single_profile(specs), &probed).unwrap();

            let keys: Vec<&str> = plan.groups.iter().map(|g| g.output.as_str()).collect();
            let unique: HashSet<&str> = keys.iter().copied().collect();
            prop_assert_eq!(keys.len(), unique.len());

            let probed_names: HashSet<&str> = probed.iter().map(|o| o.name.as_str()).collect();
            prop_assert_eq!(&unique, &probed_names);

            for group in &plan.groups {
                let expected = if requested.contains(&group.output) {
                    GroupKind::Activate
                } else {
                    GroupKind::Off
                };
                prop_assert_eq!(group.kind, expected);
            }

            Ok(())
        })
        .unwrap();
}

/// Building twice from the same inputs yields the same tokens.
#[test]
fn test_plan_is_deterministic() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&probed_and_profile(), |(probed, specs)| {
            let profiles = single_profile(specs);
            let first = build_plan("p", &profiles, &probed).unwrap();
            let second = build_plan("p", &profiles, &probed).unwrap();
            prop_assert_eq!(first.command_line("xrandr", None), second.command_line("xrandr", None));
            prop_assert_eq!(first, second);
            Ok(())
        })
        .unwrap();
}

/// Adding an output that was not probed anywhere in the profile fails the whole build.
#[test]
fn test_unknown_output_fails_whole_plan() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(probed_and_profile(), any::<prop::sample::Index>()),
            |((probed, mut specs), index)| {
                let at = index.index(specs.len() + 1);
                specs.insert(
                    at,
                    OutputSpec {
                        output: "UNPROBED-0".to_string(),
                        mode: None,
                        pos: None,
                    },
                );

                let result = build_plan("p", &single_profile(specs), &probed);
                prop_assert_eq!(result, Err(PlanError::UnknownOutput("UNPROBED-0".to_string())));
                Ok(())
            },
        )
        .unwrap();
}
