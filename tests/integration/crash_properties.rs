//! Randomized crash schedules across every scenario

use std::collections::BTreeSet;

use proptest::collection::btree_set;
use proptest::prelude::*;
use proptest::sample::Index;
use resumable_calc::journal::parse_entries;
use resumable_calc::{Error, Interpreter, MemoryStorage};

use super::common::scripts;
use super::common::{is_induced_failure, BrokenConsole, CrashingStorage, TestConsole};

fn scenario(index: Index) -> usize {
    index.index(scripts::all().len())
}

/// Run a scenario to completion under the given crash schedules.
///
/// Returns the number of restarts it took.
fn survive(
    scenario: usize,
    console_crashes: BTreeSet<usize>,
    storage_crashes: BTreeSet<usize>,
) -> std::result::Result<usize, TestCaseError> {
    let all = scripts::all();
    let (name, script) = &all[scenario];
    let max_runs = console_crashes.len() + storage_crashes.len() + 1;

    let mut console = TestConsole::new(script);
    let memory = MemoryStorage::new();
    let mut storage = CrashingStorage::new(memory.clone(), storage_crashes);
    let mut restarts = 0;

    {
        let mut broken = BrokenConsole::new(&mut console, console_crashes);
        loop {
            prop_assert!(restarts <= max_runs, "scenario {name:?} is not making progress");
            match Interpreter::new().run(&mut broken, &mut storage) {
                Ok(()) => break,
                Err(err) if is_induced_failure(&err) => restarts += 1,
                Err(Error::InputClosed) if broken.console().at_end() => break,
                Err(err) => return Err(TestCaseError::fail(format!("{name}: {err}"))),
            }
        }
    }

    prop_assert!(console.at_end(), "scenario {name:?} did not finish");
    let entries = parse_entries(&memory.snapshot()).unwrap();
    prop_assert_eq!(entries.len(), 1, "journal holds more than the seed");
    Ok(restarts)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_any_console_crash_schedule_is_survived(
        index in any::<Index>(),
        crashes in btree_set(0usize..80, 0..8),
    ) {
        survive(scenario(index), crashes, BTreeSet::new())?;
    }

    #[test]
    fn test_any_storage_crash_schedule_is_survived(
        index in any::<Index>(),
        crashes in btree_set(0usize..60, 0..8),
    ) {
        survive(scenario(index), BTreeSet::new(), crashes)?;
    }

    #[test]
    fn test_mixed_crash_schedules_are_survived(
        index in any::<Index>(),
        console_crashes in btree_set(0usize..80, 0..6),
        storage_crashes in btree_set(0usize..60, 0..6),
    ) {
        survive(scenario(index), console_crashes, storage_crashes)?;
    }
}

#[test]
fn test_crash_free_schedule_needs_no_restart() {
    for i in 0..scripts::all().len() {
        let restarts = survive(i, BTreeSet::new(), BTreeSet::new()).unwrap();
        assert_eq!(restarts, 0);
    }
}
