//! Selection state shared across views.

use uuid::Uuid;

/// Which clip the properties panel is showing. Transient, never saved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Selection {
    clip_id: Option<Uuid>,
}

impl Selection {
    /// Replace the selection with a single clip, or clear it.
    pub fn select_clip(&mut self, clip_id: Option<Uuid>) {
        self.clip_id = clip_id;
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.clip_id = None;
    }

    /// Return the selected clip, if any.
    pub fn clip_id(&self) -> Option<Uuid> {
        self.clip_id
    }

    pub fn is_selected(&self, clip_id: Uuid) -> bool {
        self.clip_id == Some(clip_id)
    }
}
