use crate::core::types::TimeSlotKind;
use crate::schedule::time_slots::{core_position, core_slots, is_special, resolve};

#[test]
fn core_slots_are_fixed_and_ordered() {
    let ids: Vec<&str> = core_slots().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["8-10", "10-12", "1-3"]);
    assert!(core_slots().iter().all(|s| s.kind == TimeSlotKind::Core));
    assert_eq!(core_slots()[2].start.as_deref(), Some("13:00"));
    assert_eq!(core_slots()[2].end.as_deref(), Some("15:00"));
    assert_eq!(core_slots(), core_slots());
}

#[test]
fn core_position_and_special_detection() {
    assert_eq!(core_position("8-10"), Some(0));
    assert_eq!(core_position("1-3"), Some(2));
    assert_eq!(core_position("3-5"), None);
    assert!(!is_special("10-12"));
    assert!(is_special("custom-block-1"));
    assert!(is_special(""));
}

#[test]
fn resolve_returns_core_or_synthesized_special() {
    assert_eq!(resolve("10-12"), core_slots()[1]);

    let special = resolve("custom-block-1");
    assert_eq!(special.id, "custom-block-1");
    assert_eq!(special.label, "custom-block-1");
    assert_eq!(special.kind, TimeSlotKind::Special);
    assert_eq!(special.end, None);
}
