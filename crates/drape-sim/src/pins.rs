//! Pin constraints and their registry.
//!
//! A pin forces one point to an externally driven target position
//! (e.g., from a mouse-drag UI in the host). The registry is an arena
//! handing out stable [`PinId`] handles, so host code never holds raw
//! references into simulation-owned storage.

use drape_math::Vec3;
use drape_types::PinId;

use crate::state::SimulationState;

/// An externally driven constraint forcing a point to a target.
///
/// Created and logically owned by the host; the simulation copies the
/// value into its arena and tracks it by handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinConstraint {
    /// Index of the pinned vertex.
    pub vertex: u32,
    /// Target position the vertex is held at.
    pub target: Vec3,
}

impl PinConstraint {
    /// Creates a pin holding `vertex` at `target`.
    pub fn new(vertex: u32, target: Vec3) -> Self {
        Self { vertex, target }
    }
}

/// Arena of active pin constraints.
///
/// Slots are reused through a free list, so `add`/`remove` are O(1)
/// amortized. Nothing prevents two pins from targeting the same
/// vertex; they are applied in slot order, so the highest-index
/// active slot wins.
#[derive(Debug, Default)]
pub struct PinRegistry {
    slots: Vec<Option<PinConstraint>>,
    free: Vec<u32>,
}

impl PinRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pin and returns its handle.
    pub fn add(&mut self, pin: PinConstraint) -> PinId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(pin);
                PinId(slot)
            }
            None => {
                self.slots.push(Some(pin));
                PinId((self.slots.len() - 1) as u32)
            }
        }
    }

    /// Moves an active pin's target. Returns false for stale handles.
    pub fn move_target(&mut self, id: PinId, target: Vec3) -> bool {
        match self.slots.get_mut(id.index()) {
            Some(Some(pin)) => {
                pin.target = target;
                true
            }
            _ => false,
        }
    }

    /// Removes a pin. Removing an unknown or stale handle is a silent
    /// no-op; the pinned point resumes normal dynamics from the next
    /// step onward (prior velocity and mass are not restored).
    pub fn remove(&mut self, id: PinId) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            if slot.take().is_some() {
                self.free.push(id.0);
            }
        }
    }

    /// Returns the pin behind a handle, if it is still active.
    pub fn get(&self, id: PinId) -> Option<&PinConstraint> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Iterates active pins in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &PinConstraint> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Number of active pins.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if no pins are active.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Applies all active pins to the state, in slot order:
    /// position and prediction snap to the target, velocity zeroes,
    /// inverse mass zeroes (infinitely heavy).
    ///
    /// Runs at the start of each step, after the mass model.
    pub fn apply(&self, state: &mut SimulationState) {
        for pin in self.iter() {
            let i = pin.vertex as usize;
            state.set_position(i, pin.target);
            state.set_predicted(i, pin.target);
            state.set_velocity(i, Vec3::ZERO);
            state.inv_mass[i] = 0.0;
        }
    }
}
