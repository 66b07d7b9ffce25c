//! Property tests for the chain invariants.
//!
//! Random sequences of revisit commits must keep every lineage linear,
//! symmetric, and single-tipped, and history reads must stay stable.

use proptest::prelude::*;

use decision_ledger::domain::decision::{Decision, DecisionSet, NewDecision};
use decision_ledger::domain::foundation::{MeetingId, SphereId, TopicId, UserId};
use decision_ledger::domain::revisit::{
    commit_revisit, RevisitFlow, RevisitReason, SuccessorDraft,
};

fn draft(content: String, sphere: SphereId) -> NewDecision {
    NewDecision {
        content,
        rationale: "r".to_string(),
        impact: "i".to_string(),
        meeting_id: MeetingId::new(),
        sphere_id: sphere,
        topic_ids: vec![TopicId::new("architecture")],
        created_by: UserId::new("prop"),
    }
}

fn commit_once(set: &mut DecisionSet, tip: &Decision, content: String) -> Decision {
    let mut flow = RevisitFlow::start(tip).expect("tip is active");
    flow.advance();
    flow.set_reason(RevisitReason::NewInformation, "property run");
    flow.advance();
    flow.set_meeting(MeetingId::new());
    flow.advance();

    commit_revisit(
        set,
        &flow,
        SuccessorDraft {
            content,
            rationale: "revised".to_string(),
            impact: "i".to_string(),
            topic_ids: vec![TopicId::new("architecture")],
            created_by: UserId::new("prop"),
        },
    )
    .expect("commit succeeds on the live tip")
    .successor
}

proptest! {
    #[test]
    fn lineages_stay_linear_and_single_tipped(contents in prop::collection::vec("[a-z]{1,12}", 1..15)) {
        let sphere = SphereId::new();
        let mut set = DecisionSet::new();
        let root = Decision::initial(draft("root".to_string(), sphere)).unwrap();
        let root_id = root.id();
        set.insert(root.clone()).unwrap();

        let mut tip = root;
        for content in contents {
            tip = commit_once(&mut set, &tip, content);

            // I2: exactly one active record, at the tip, with no successor.
            let history = set.history(root_id).unwrap();
            let active: Vec<_> = history.iter().filter(|d| d.is_active()).collect();
            prop_assert_eq!(active.len(), 1);
            prop_assert_eq!(active[0].id(), tip.id());
            prop_assert!(active[0].next_id().is_none());

            // I3: pointer symmetry on every record in the set.
            for d in set.decisions() {
                if let Some(next_id) = d.next_id() {
                    prop_assert_eq!(set.get(next_id).unwrap().previous_id(), Some(d.id()));
                }
                if let Some(prev_id) = d.previous_id() {
                    prop_assert_eq!(set.get(prev_id).unwrap().next_id(), Some(d.id()));
                }
            }

            // I4: the walk terminates and verification passes.
            set.verify_lineage(root_id).unwrap();
        }
    }

    #[test]
    fn history_concatenation_is_stable_across_calls(n in 1usize..10) {
        let sphere = SphereId::new();
        let mut set = DecisionSet::new();
        let root = Decision::initial(draft("v0".to_string(), sphere)).unwrap();
        let root_id = root.id();
        set.insert(root.clone()).unwrap();

        let mut tip = root;
        for i in 1..n {
            tip = commit_once(&mut set, &tip, format!("v{}", i));
        }

        let read = || -> String {
            set.history(root_id)
                .unwrap()
                .iter()
                .map(|d| d.content())
                .collect()
        };
        prop_assert_eq!(read(), read());

        let lazy: String = set
            .history_iter(tip.id())
            .unwrap()
            .map(|d| d.content())
            .collect();
        prop_assert_eq!(lazy, read());
    }
}
