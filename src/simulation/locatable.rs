//! Trait for entities that have a position and a liveness status.
//!
//! Nearest-food, nearest-prey, and nearest-rival queries all run over this
//! trait, so the scan logic (and its tie-breaking) lives in one place.

use ndarray::Array1;

use super::geometry;

/// Trait for entities with a position that nearest-neighbor scans can see.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f32>;

    /// Whether the entity should be considered by queries. Entities with no
    /// liveness notion (food) are always alive.
    fn is_alive(&self) -> bool {
        true
    }
}

/// Finds the living entity closest to `origin`, returning its index.
///
/// Scans in collection order and keeps the first strict minimum, so ties go
/// to the earlier-indexed entity. Returns `None` when no living entity
/// exists.
pub fn nearest<T: Locatable>(origin: &Array1<f32>, items: &[T]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, item) in items.iter().enumerate() {
        if !item.is_alive() {
            continue;
        }
        let dist = geometry::distance(origin, item.pos());
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((idx, dist));
        }
    }
    best.map(|(idx, _)| idx)
}
