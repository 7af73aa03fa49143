use crate::overlay::model::Overlay;

/// Insertion-ordered collection of overlays.
///
/// Ids are assigned from a counter that only moves forward, so an id is never
/// reused within the store's lifetime even after removals.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStore {
    overlays: Vec<Overlay>,
    next_id: u64,
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self {
            overlays: Vec::new(),
            next_id: 1,
        }
    }
}

impl OverlayStore {
    /// Insert a new overlay, assigning it a fresh id. Whatever id the caller
    /// put on the record is discarded. Returns the assigned id.
    pub fn add(&mut self, mut overlay: Overlay) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        overlay.id = id;
        overlay.x = overlay.x.max(0.0);
        overlay.y = overlay.y.max(0.0);
        self.overlays.push(overlay);
        id
    }

    /// Apply `patch` to the overlay with the given id. Unknown ids are
    /// ignored. The entry's id is restored afterwards and its position
    /// re-clamped to non-negative, so a patch cannot break either invariant.
    pub fn update(&mut self, id: u64, patch: impl FnOnce(&mut Overlay)) {
        if let Some(overlay) = self.overlays.iter_mut().find(|o| o.id == id) {
            patch(overlay);
            overlay.id = id;
            overlay.x = overlay.x.max(0.0);
            overlay.y = overlay.y.max(0.0);
        }
    }

    /// Remove the overlay with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.overlays.retain(|o| o.id != id);
    }

    pub fn get(&self, id: u64) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
