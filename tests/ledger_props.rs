//! Property tests for the ledger's XP invariants
//!
//! The total is maintained incrementally, so these tests recompute it by
//! folding over the tasks after every mutation and assert the two agree.

use devmastery::domain::{TaskDraft, builtin_tasks};
use devmastery::ledger::{TaskLedger, fold_total};
use proptest::prelude::*;

/// One random ledger operation
#[derive(Debug, Clone)]
enum Op {
    /// Toggle the task at this index (mod task count)
    Toggle(usize),
    /// Toggle an id that does not exist
    ToggleMissing,
    /// Append a generated draft with this XP value
    Append(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (0usize..64).prop_map(Op::Toggle),
        1 => Just(Op::ToggleMissing),
        1 => (0u32..100).prop_map(Op::Append),
    ]
}

proptest! {
    #[test]
    fn prop_total_always_equals_fold(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut ledger = TaskLedger::with_tasks(builtin_tasks());

        for op in ops {
            match op {
                Op::Toggle(i) => {
                    let id = ledger.tasks()[i % ledger.tasks().len()].id.clone();
                    ledger.toggle(&id);
                }
                Op::ToggleMissing => ledger.toggle("no-such-task"),
                Op::Append(xp) => {
                    ledger.append_generated(vec![TaskDraft::new("Generated", "d", xp)], "code");
                }
            }

            prop_assert_eq!(ledger.total_xp(), fold_total(ledger.tasks()));
        }
    }

    #[test]
    fn prop_double_toggle_is_identity(
        setup in proptest::collection::vec(0usize..13, 0..13),
        target in 0usize..13,
    ) {
        let mut ledger = TaskLedger::with_tasks(builtin_tasks());

        // Drive the ledger into an arbitrary completion state first
        for i in setup {
            let id = ledger.tasks()[i].id.clone();
            ledger.toggle(&id);
        }

        let id = ledger.tasks()[target].id.clone();
        let flag_before = ledger.tasks()[target].completed;
        let total_before = ledger.total_xp();

        ledger.toggle(&id);
        ledger.toggle(&id);

        prop_assert_eq!(ledger.tasks()[target].completed, flag_before);
        prop_assert_eq!(ledger.total_xp(), total_before);
    }
}
