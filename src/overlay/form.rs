use crate::overlay::model::{
    Color, Overlay, OverlayKind, DEFAULT_BACKGROUND, DEFAULT_CORNER_RADIUS, DEFAULT_FONT_SIZE,
    DEFAULT_SIZE, DEFAULT_TEXT_COLOR,
};
use crate::overlay::store::OverlayStore;
use rand::Rng;

const PLACEMENT_X: std::ops::Range<f32> = 50.0..350.0;
const PLACEMENT_Y: std::ops::Range<f32> = 50.0..250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    X,
    Y,
    Width,
    Height,
    FontSize,
    CornerRadius,
}

/// Working copy of the overlay fields while the add/edit window is open.
/// Disjoint from the store until [`OverlayForm::submit`] commits it.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayDraft {
    pub id: Option<u64>,
    pub kind: OverlayKind,
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub color: Color,
    pub background: Color,
    pub corner_radius: f32,
}

impl Default for OverlayDraft {
    fn default() -> Self {
        Self {
            id: None,
            kind: OverlayKind::Text,
            content: String::new(),
            x: 50.0,
            y: 50.0,
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            font_size: DEFAULT_FONT_SIZE,
            color: DEFAULT_TEXT_COLOR,
            background: DEFAULT_BACKGROUND,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl OverlayDraft {
    fn into_overlay(self, id: u64) -> Overlay {
        Overlay {
            id,
            kind: self.kind,
            content: self.content,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            font_size: self.font_size,
            color: self.color,
            background: self.background,
            corner_radius: self.corner_radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayForm {
    pub open: bool,
    draft: OverlayDraft,
}

impl OverlayForm {
    pub fn open_for_create(&mut self) {
        self.draft = OverlayDraft::default();
        self.open = true;
    }

    pub fn open_for_edit(&mut self, overlay: &Overlay) {
        self.draft = OverlayDraft {
            id: Some(overlay.id),
            kind: overlay.kind,
            content: overlay.content.clone(),
            x: overlay.x,
            y: overlay.y,
            width: overlay.width,
            height: overlay.height,
            font_size: overlay.font_size,
            color: overlay.color,
            background: overlay.background,
            corner_radius: overlay.corner_radius,
        };
        self.open = true;
    }

    pub fn draft(&self) -> &OverlayDraft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<u64> {
        self.draft.id
    }

    pub fn is_edit(&self) -> bool {
        self.draft.id.is_some()
    }

    pub fn set_kind(&mut self, kind: OverlayKind) {
        self.draft.kind = kind;
    }

    pub fn set_content(&mut self, content: &str) {
        self.draft.content = content.to_string();
    }

    pub fn set_color(&mut self, color: Color) {
        self.draft.color = color;
    }

    pub fn set_background(&mut self, background: Color) {
        self.draft.background = background;
    }

    /// Parse raw text from a numeric input into the draft. Input that does
    /// not parse as a finite number is rejected and the draft keeps its
    /// previous value; parsed values are clamped to the field's lower bound.
    /// Returns whether the draft was updated.
    pub fn set_numeric(&mut self, field: NumericField, raw: &str) -> bool {
        let Ok(value) = raw.trim().parse::<f32>() else {
            return false;
        };
        if !value.is_finite() {
            return false;
        }
        match field {
            NumericField::X => self.draft.x = value.max(0.0),
            NumericField::Y => self.draft.y = value.max(0.0),
            NumericField::Width => self.draft.width = value.max(1.0),
            NumericField::Height => self.draft.height = value.max(1.0),
            NumericField::FontSize => self.draft.font_size = value.max(1.0),
            NumericField::CornerRadius => self.draft.corner_radius = value.max(0.0),
        }
        true
    }

    /// Commit the draft. A draft without an id becomes a new overlay placed
    /// at a random spot inside the placement region, overriding whatever
    /// position the draft carried. A draft with an id is written back over
    /// the matching store entry. Both paths close the window and reset the
    /// draft. Returns the committed id, or `None` when the edited overlay
    /// was deleted mid-edit.
    pub fn submit(&mut self, store: &mut OverlayStore, rng: &mut impl Rng) -> Option<u64> {
        let draft = std::mem::take(&mut self.draft);
        self.open = false;

        match draft.id {
            None => {
                let mut overlay = draft.into_overlay(0);
                overlay.x = rng.gen_range(PLACEMENT_X);
                overlay.y = rng.gen_range(PLACEMENT_Y);
                Some(store.add(overlay))
            }
            Some(id) => {
                if store.get(id).is_none() {
                    return None;
                }
                store.update(id, |entry| *entry = draft.into_overlay(id));
                Some(id)
            }
        }
    }

    pub fn cancel(&mut self) {
        self.draft = OverlayDraft::default();
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn open_for_create_resets_to_defaults() {
        let mut form = OverlayForm::default();
        form.set_content("leftover");
        form.set_numeric(NumericField::Width, "999");
        form.open_for_create();

        assert!(form.open);
        assert_eq!(form.draft(), &OverlayDraft::default());
        assert!(!form.is_edit());
    }

    #[test]
    fn set_numeric_rejects_garbage_and_keeps_previous_value() {
        let mut form = OverlayForm::default();
        form.open_for_create();
        assert!(form.set_numeric(NumericField::Width, "320"));
        assert!(!form.set_numeric(NumericField::Width, "wide"));
        assert!(!form.set_numeric(NumericField::Width, ""));
        assert!(!form.set_numeric(NumericField::Width, "inf"));
        assert_eq!(form.draft().width, 320.0);
    }

    #[test]
    fn set_numeric_clamps_to_field_bounds() {
        let mut form = OverlayForm::default();
        form.open_for_create();
        form.set_numeric(NumericField::X, "-40");
        form.set_numeric(NumericField::Height, "0");
        form.set_numeric(NumericField::FontSize, "-2");
        assert_eq!(form.draft().x, 0.0);
        assert_eq!(form.draft().height, 1.0);
        assert_eq!(form.draft().font_size, 1.0);
    }

    #[test]
    fn submit_create_places_inside_placement_region() {
        let mut store = OverlayStore::default();
        let mut rng = rng();
        for _ in 0..100 {
            let mut form = OverlayForm::default();
            form.open_for_create();
            form.set_content("Hello");
            form.set_numeric(NumericField::X, "1000");
            form.set_numeric(NumericField::Y, "1000");
            let id = form.submit(&mut store, &mut rng).expect("created");
            let overlay = store.get(id).expect("inserted");
            assert!((50.0..350.0).contains(&overlay.x), "x = {}", overlay.x);
            assert!((50.0..250.0).contains(&overlay.y), "y = {}", overlay.y);
        }
    }

    #[test]
    fn submit_create_commits_content_and_defaults() {
        let mut store = OverlayStore::default();
        let mut form = OverlayForm::default();
        form.open_for_create();
        form.set_content("Hello");
        let _ = form.submit(&mut store, &mut rng());

        assert_eq!(store.len(), 1);
        let overlay = store.iter().next().unwrap();
        assert_eq!(overlay.content, "Hello");
        assert_eq!(overlay.kind, OverlayKind::Text);
        assert_eq!(overlay.width, 200.0);
        assert_eq!(overlay.height, 50.0);
        assert!(!form.open);
        assert_eq!(form.draft(), &OverlayDraft::default());
    }

    #[test]
    fn submit_edit_updates_in_place_without_changing_count() {
        let mut store = OverlayStore::default();
        let mut form = OverlayForm::default();
        let mut rng = rng();

        form.open_for_create();
        form.set_content("before");
        let id = form.submit(&mut store, &mut rng).unwrap();
        let placed = store.get(id).unwrap().clone();

        form.open_for_edit(&placed);
        form.set_content("after");
        form.set_numeric(NumericField::FontSize, "24");
        let edited = form.submit(&mut store, &mut rng).unwrap();

        assert_eq!(edited, id);
        assert_eq!(store.len(), 1);
        let overlay = store.get(id).unwrap();
        assert_eq!(overlay.content, "after");
        assert_eq!(overlay.font_size, 24.0);
        assert_eq!((overlay.x, overlay.y), (placed.x, placed.y));
    }

    #[test]
    fn submit_edit_of_deleted_overlay_is_ignored() {
        let mut store = OverlayStore::default();
        let mut form = OverlayForm::default();
        let mut rng = rng();

        form.open_for_create();
        let id = form.submit(&mut store, &mut rng).unwrap();
        let placed = store.get(id).unwrap().clone();

        form.open_for_edit(&placed);
        store.remove(id);
        assert_eq!(form.submit(&mut store, &mut rng), None);

        assert!(store.is_empty());
        assert!(!form.open);
    }

    #[test]
    fn cancel_closes_and_resets() {
        let mut form = OverlayForm::default();
        form.open_for_create();
        form.set_content("discarded");
        form.cancel();
        assert!(!form.open);
        assert_eq!(form.draft(), &OverlayDraft::default());
    }
}
