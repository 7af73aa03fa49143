pub mod drag;
pub mod form;
pub mod model;
pub mod store;

pub use drag::{DragController, DragState};
pub use form::{NumericField, OverlayDraft, OverlayForm};
pub use model::{Color, Overlay, OverlayKind};
pub use store::OverlayStore;
