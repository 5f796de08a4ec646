use crate::core::models::TimeSlot;
use crate::schedule::time_slots::core_position;
use std::cmp::Ordering;

pub trait SlotComparator {
    fn cmp(&self, a: &TimeSlot, b: &TimeSlot) -> Ordering;
}

// Start ascending; blank start falls back to label, then id. Ties broken by label, then id.
pub struct SpecialSlotOrder;
impl SlotComparator for SpecialSlotOrder {
    fn cmp(&self, a: &TimeSlot, b: &TimeSlot) -> Ordering {
        let by_key = primary_key(a).cmp(primary_key(b));
        if by_key != Ordering::Equal {
            return by_key;
        }
        let by_label = a.label.cmp(&b.label);
        if by_label != Ordering::Equal {
            return by_label;
        }
        a.id.cmp(&b.id)
    }
}

// Core before special; core by registry rank; special by SpecialSlotOrder.
pub struct CanonicalSlotOrder;
impl SlotComparator for CanonicalSlotOrder {
    fn cmp(&self, a: &TimeSlot, b: &TimeSlot) -> Ordering {
        match (core_position(&a.id), core_position(&b.id)) {
            (Some(pa), Some(pb)) => pa.cmp(&pb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => SpecialSlotOrder.cmp(a, b),
        }
    }
}

fn primary_key(slot: &TimeSlot) -> &str {
    [slot.start.as_deref(), Some(slot.label.as_str())]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(slot.id.as_str())
}

/// Stable sort into canonical display order.
pub fn sort_canonical(slots: &mut [TimeSlot]) {
    slots.sort_by(|a, b| CanonicalSlotOrder.cmp(a, b));
}
