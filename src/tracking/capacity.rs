//! Slot capacity rules

use crate::models::{Participation, TimeSlot};

/// Number of accepted participations
pub fn accepted_count(participations: &[Participation]) -> usize {
    participations.iter().filter(|p| p.is_accepted()).count()
}

/// Capacity view of a slot
pub trait SlotCapacity {
    fn accepted_count(&self) -> usize;

    fn max_participants(&self) -> u32;

    /// Free places, clamped at zero when the slot is over capacity
    fn available_spots(&self) -> usize {
        (self.max_participants() as usize).saturating_sub(self.accepted_count())
    }

    fn is_full(&self) -> bool {
        self.accepted_count() >= self.max_participants() as usize
    }

    fn can_admit(&self) -> bool {
        !self.is_full()
    }
}

impl SlotCapacity for TimeSlot {
    fn accepted_count(&self) -> usize {
        accepted_count(&self.participations)
    }

    fn max_participants(&self) -> u32 {
        self.max_participants
    }
}
