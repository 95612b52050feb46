//! Generational arena of animated `f32` slots.

use crate::types::SubjectId;

#[derive(Clone, Copy, Debug)]
struct Slot {
    value: f32,
    generation: u32,
    occupied: bool,
}

/// Storage for every value the engine animates. Slots are recycled through
/// a free list; each reuse bumps the generation so stale [`SubjectId`]s
/// never read or write a successor's value.
#[derive(Clone, Debug, Default)]
pub(crate) struct Subjects {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl Subjects {
    pub(crate) fn add(&mut self, initial: f32) -> SubjectId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = initial;
            slot.occupied = true;
            return SubjectId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            value: initial,
            generation: 0,
            occupied: true,
        });
        SubjectId {
            index,
            generation: 0,
        }
    }

    pub(crate) fn remove(&mut self, id: SubjectId) -> bool {
        match self.slots.get_mut(id.index as usize) {
            Some(slot) if slot.occupied && slot.generation == id.generation => {
                slot.occupied = false;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(id.index);
                self.live -= 1;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn get(&self, id: SubjectId) -> Option<f32> {
        match self.slots.get(id.index as usize) {
            Some(slot) if slot.occupied && slot.generation == id.generation => Some(slot.value),
            _ => None,
        }
    }

    pub(crate) fn set(&mut self, id: SubjectId, value: f32) -> bool {
        match self.slots.get_mut(id.index as usize) {
            Some(slot) if slot.occupied && slot.generation == id.generation => {
                slot.value = value;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.live
    }
}
