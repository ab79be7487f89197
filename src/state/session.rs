//! Editor session state that lives beside the project.

use uuid::Uuid;

use super::{Clip, FilterKey, FilterPreset, FilterSettings, Project, Selection};

/// Per-session editor state: preview filters and the clip selection.
///
/// Created once at startup and handed to whoever mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EditorSession {
    pub filters: FilterSettings,
    pub selection: Selection,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, key: FilterKey, value: f64) {
        self.filters.set(key, value);
    }

    pub fn apply_preset(&mut self, preset: FilterPreset) {
        log::debug!("Applying filter preset {:?}", preset);
        self.filters.apply_preset(preset);
    }

    pub fn select_clip(&mut self, clip_id: Option<Uuid>) {
        self.selection.select_clip(clip_id);
    }

    /// Resolve the selection against the project. A stale id resolves to `None`.
    pub fn selected_clip<'a>(&self, project: &'a Project) -> Option<&'a Clip> {
        self.selection.clip_id().and_then(|id| project.find_clip(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_resolve_clip() {
        let project = Project::seeded();
        let mut session = EditorSession::new();
        assert!(session.selected_clip(&project).is_none());

        let id = project.tracks[0].clips[1].id;
        session.select_clip(Some(id));
        assert!(session.selection.is_selected(id));
        assert_eq!(
            session.selected_clip(&project).map(|clip| clip.name.as_str()),
            Some("Urban Exploration")
        );

        session.select_clip(None);
        assert!(session.selected_clip(&project).is_none());
    }

    #[test]
    fn test_stale_selection_resolves_to_none() {
        let project = Project::seeded();
        let mut session = EditorSession::new();
        session.select_clip(Some(Uuid::new_v4()));
        assert!(session.selected_clip(&project).is_none());
    }

    #[test]
    fn test_filters_are_independent_of_project() {
        let project = Project::seeded();
        let snapshot = project.clone();
        let mut session = EditorSession::new();
        session.set_filter(FilterKey::Brightness, 150.0);
        session.apply_preset(FilterPreset::Noir);
        session.set_filter(FilterKey::Blur, 3.0);
        assert_eq!(session.filters.brightness, 80.0);
        assert_eq!(session.filters.blur, 3.0);
        assert_eq!(project, snapshot);
    }
}
