use once_cell::sync::Lazy;

use crate::core::models::TimeSlot;

/// Coaching windows, in the order every view renders them.
static CORE_SLOTS: Lazy<Vec<TimeSlot>> = Lazy::new(|| {
    vec![
        TimeSlot::core("8-10", "8:00 AM - 10:00 AM", "08:00", "10:00"),
        TimeSlot::core("10-12", "10:00 AM - 12:00 PM", "10:00", "12:00"),
        TimeSlot::core("1-3", "1:00 PM - 3:00 PM", "13:00", "15:00"),
    ]
});

/// The fixed, ordered set of core slots. Returns the same values on every call.
pub fn core_slots() -> &'static [TimeSlot] {
    CORE_SLOTS.as_slice()
}

/// Canonical rank of a core slot id.
pub fn core_position(id: &str) -> Option<usize> {
    CORE_SLOTS.iter().position(|slot| slot.id == id)
}

pub fn is_special(id: &str) -> bool {
    core_position(id).is_none()
}

/// Never fails: ids outside the core set come back as special slots.
pub fn resolve(id: &str) -> TimeSlot {
    match core_position(id) {
        Some(pos) => CORE_SLOTS[pos].clone(),
        None => TimeSlot::special(id),
    }
}
