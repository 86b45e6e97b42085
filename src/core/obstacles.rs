//! Obstacle registry and hit notices.
//!
//! Every falling hazard registers its footprint here for the shot and player
//! collision checks. Slots are recycled with a generation counter so a stale
//! id held by a dead task can never resolve to a newer occupant.

use crate::core::geometry::BoundingBox;

/// Stable identity of a registered obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebrisId {
    slot: u32,
    generation: u32,
}

/// Footprint of one falling hazard.
///
/// The row advances every tick; column and size are fixed at spawn and always
/// cover at least the frame that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Debris {
    pub top: f64,
    pub left: i32,
    pub height: u16,
    pub width: u16,
}

impl Debris {
    pub fn new(top: f64, left: i32, height: u16, width: u16) -> Self {
        Self {
            top,
            left,
            height,
            width,
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.top,
            f64::from(self.left),
            f64::from(self.height),
            f64::from(self.width),
        )
    }

    pub fn center(&self) -> (f64, f64) {
        self.bounds().center()
    }
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    debris: Option<Debris>,
}

/// Registry of live obstacle footprints.
#[derive(Debug, Default)]
pub struct DebrisRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl DebrisRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Insert an obstacle, returning its identity.
    pub fn register(&mut self, debris: Debris) -> DebrisId {
        self.live += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.debris = Some(debris);
            return DebrisId {
                slot: idx,
                generation: slot.generation,
            };
        }
        let idx = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            debris: Some(debris),
        });
        DebrisId {
            slot: idx,
            generation: 0,
        }
    }

    /// Remove an obstacle. Removing twice, or with a stale id, is a no-op.
    pub fn unregister(&mut self, id: DebrisId) -> Option<Debris> {
        let slot = self.slots.get_mut(id.slot as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let debris = slot.debris.take()?;
        self.free.push(id.slot);
        self.live -= 1;
        Some(debris)
    }

    pub fn get(&self, id: DebrisId) -> Option<&Debris> {
        let slot = self.slots.get(id.slot as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.debris.as_ref()
    }

    pub fn get_mut(&mut self, id: DebrisId) -> Option<&mut Debris> {
        let slot = self.slots.get_mut(id.slot as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.debris.as_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DebrisId, &Debris)> {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.debris.as_ref().map(|debris| {
                (
                    DebrisId {
                        slot: idx as u32,
                        generation: slot.generation,
                    },
                    debris,
                )
            })
        })
    }

    /// Identities of every obstacle whose box contains the point.
    pub fn query_point(&self, row: f64, col: f64) -> impl Iterator<Item = DebrisId> + '_ {
        self.iter()
            .filter(move |(_, debris)| debris.bounds().contains(row, col))
            .map(|(id, _)| id)
    }

    /// Identities of every obstacle whose box overlaps the given box.
    pub fn query_box(&self, bounds: BoundingBox) -> impl Iterator<Item = DebrisId> + '_ {
        self.iter()
            .filter(move |(_, debris)| debris.bounds().overlaps(&bounds))
            .map(|(id, _)| id)
    }
}

/// Hit notices posted by shots, drained once by the obstacle they name.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    hits: Vec<DebrisId>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a hit notice. Posting the same id twice keeps one membership.
    pub fn post(&mut self, id: DebrisId) {
        if !self.hits.contains(&id) {
            self.hits.push(id);
        }
    }

    pub fn contains(&self, id: DebrisId) -> bool {
        self.hits.contains(&id)
    }

    /// Consume a notice. Returns whether one was present; absent is a no-op.
    pub fn take(&mut self, id: DebrisId) -> bool {
        match self.hits.iter().position(|hit| *hit == id) {
            Some(pos) => {
                self.hits.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
