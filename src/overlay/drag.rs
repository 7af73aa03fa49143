use crate::overlay::store::OverlayStore;

/// One pointer-drag session over an overlay.
///
/// The offset is pointer-to-overlay-origin, captured at press time relative
/// to the video container, so the overlay does not jump to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        overlay_id: u64,
        offset_x: f32,
        offset_y: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Begin a drag on the given overlay. `pointer` and `container_origin`
    /// are in the same (client) coordinate space; overlay positions are
    /// container-relative. Pressing an unknown id leaves the controller Idle.
    pub fn press(
        &mut self,
        store: &OverlayStore,
        overlay_id: u64,
        pointer: (f32, f32),
        container_origin: (f32, f32),
    ) {
        let Some(overlay) = store.get(overlay_id) else {
            return;
        };
        self.state = DragState::Dragging {
            overlay_id,
            offset_x: pointer.0 - container_origin.0 - overlay.x,
            offset_y: pointer.1 - container_origin.1 - overlay.y,
        };
    }

    /// Apply a pointer move. Ignored while Idle. The container origin is
    /// passed on every move so the math stays correct if the pane moved.
    /// The store clamps the resulting position to non-negative.
    pub fn drag_to(
        &mut self,
        store: &mut OverlayStore,
        pointer: (f32, f32),
        container_origin: (f32, f32),
    ) {
        let DragState::Dragging {
            overlay_id,
            offset_x,
            offset_y,
        } = self.state
        else {
            return;
        };
        let new_x = pointer.0 - container_origin.0 - offset_x;
        let new_y = pointer.1 - container_origin.1 - offset_y;
        store.update(overlay_id, |overlay| {
            overlay.x = new_x;
            overlay.y = new_y;
        });
    }

    /// End the session on pointer release.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    /// End the session without a release event. Called when pointer capture
    /// is lost (focus change, overlay deleted mid-drag) so the controller
    /// cannot stay stuck in Dragging.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn active_overlay(&self) -> Option<u64> {
        match self.state {
            DragState::Dragging { overlay_id, .. } => Some(overlay_id),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::model::{
        Overlay, OverlayKind, DEFAULT_BACKGROUND, DEFAULT_CORNER_RADIUS, DEFAULT_FONT_SIZE,
        DEFAULT_SIZE, DEFAULT_TEXT_COLOR,
    };

    fn store_with(positions: &[(f32, f32)]) -> (OverlayStore, Vec<u64>) {
        let mut store = OverlayStore::default();
        let ids = positions
            .iter()
            .map(|&(x, y)| {
                store.add(Overlay {
                    id: 0,
                    kind: OverlayKind::Text,
                    content: String::new(),
                    x,
                    y,
                    width: DEFAULT_SIZE.0,
                    height: DEFAULT_SIZE.1,
                    font_size: DEFAULT_FONT_SIZE,
                    color: DEFAULT_TEXT_COLOR,
                    background: DEFAULT_BACKGROUND,
                    corner_radius: DEFAULT_CORNER_RADIUS,
                })
            })
            .collect();
        (store, ids)
    }

    #[test]
    fn press_captures_pointer_to_origin_offset() {
        let (mut store, ids) = store_with(&[(100.0, 100.0)]);
        let mut drag = DragController::default();

        drag.press(&store, ids[0], (110.0, 105.0), (0.0, 0.0));
        assert_eq!(
            drag.state(),
            DragState::Dragging {
                overlay_id: ids[0],
                offset_x: 10.0,
                offset_y: 5.0,
            }
        );

        drag.drag_to(&mut store, (200.0, 205.0), (0.0, 0.0));
        let overlay = store.get(ids[0]).unwrap();
        assert_eq!((overlay.x, overlay.y), (190.0, 200.0));
    }

    #[test]
    fn press_accounts_for_container_origin() {
        let (mut store, ids) = store_with(&[(20.0, 30.0)]);
        let mut drag = DragController::default();

        // container sits at (300, 150) in client space
        drag.press(&store, ids[0], (325.0, 185.0), (300.0, 150.0));
        drag.drag_to(&mut store, (400.0, 300.0), (300.0, 150.0));

        let overlay = store.get(ids[0]).unwrap();
        assert_eq!((overlay.x, overlay.y), (95.0, 145.0));
    }

    #[test]
    fn drag_clamps_to_container_edges() {
        let (mut store, ids) = store_with(&[(100.0, 100.0)]);
        let mut drag = DragController::default();

        drag.press(&store, ids[0], (100.0, 100.0), (0.0, 0.0));
        drag.drag_to(&mut store, (-500.0, -500.0), (0.0, 0.0));

        let overlay = store.get(ids[0]).unwrap();
        assert_eq!((overlay.x, overlay.y), (0.0, 0.0));
    }

    #[test]
    fn press_on_unknown_overlay_stays_idle() {
        let (mut store, _) = store_with(&[(0.0, 0.0)]);
        let mut drag = DragController::default();

        drag.press(&store, 42, (10.0, 10.0), (0.0, 0.0));
        assert!(!drag.is_dragging());

        let before = store.clone();
        drag.drag_to(&mut store, (50.0, 50.0), (0.0, 0.0));
        assert_eq!(store, before);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let (mut store, _) = store_with(&[(10.0, 10.0)]);
        let mut drag = DragController::default();
        let before = store.clone();
        drag.drag_to(&mut store, (300.0, 300.0), (0.0, 0.0));
        assert_eq!(store, before);
    }

    #[test]
    fn release_ends_session_and_next_drag_moves_only_its_target() {
        let (mut store, ids) = store_with(&[(100.0, 100.0), (10.0, 10.0)]);
        let mut drag = DragController::default();

        drag.press(&store, ids[0], (100.0, 100.0), (0.0, 0.0));
        drag.drag_to(&mut store, (150.0, 150.0), (0.0, 0.0));
        drag.release();
        assert!(!drag.is_dragging());

        drag.press(&store, ids[1], (10.0, 10.0), (0.0, 0.0));
        drag.drag_to(&mut store, (60.0, 70.0), (0.0, 0.0));
        drag.release();

        let first = store.get(ids[0]).unwrap();
        let second = store.get(ids[1]).unwrap();
        assert_eq!((first.x, first.y), (150.0, 150.0));
        assert_eq!((second.x, second.y), (60.0, 70.0));
    }

    #[test]
    fn cancel_ends_session_without_moving_anything() {
        let (mut store, ids) = store_with(&[(40.0, 40.0)]);
        let mut drag = DragController::default();

        drag.press(&store, ids[0], (45.0, 45.0), (0.0, 0.0));
        drag.cancel();
        assert!(!drag.is_dragging());

        let before = store.clone();
        drag.drag_to(&mut store, (500.0, 500.0), (0.0, 0.0));
        assert_eq!(store, before);
    }
}
