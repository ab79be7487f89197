//! Hotkey system
//!
//! Keyboard bindings for the editor.
//!
//! - **HotkeyAction**: semantic actions that can be triggered from the keyboard
//! - **HotkeyContext**: app state that affects dispatch
//! - **handle_hotkey()**: maps a key event to an action
//!
//! New bindings get a variant in `HotkeyAction`, a match arm in
//! `handle_hotkey()` and a handler in the App component.

use dioxus::prelude::Key;

/// Actions that can be triggered by hotkeys.
///
/// Each variant names what should happen, not which key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════
    /// Toggle playback.
    PlayPause,
    /// Jump to the start of the project.
    SeekStart,
    /// Jump to the end of the project.
    SeekEnd,

    // ═══════════════════════════════════════════════════════════════
    // Timeline Zoom
    // ═══════════════════════════════════════════════════════════════
    /// Zoom in on the timeline (increase pixels per second)
    TimelineZoomIn,
    /// Zoom out on the timeline (decrease pixels per second)
    TimelineZoomOut,

    // ═══════════════════════════════════════════════════════════════
    // Selection
    // ═══════════════════════════════════════════════════════════════
    ClearSelection,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a text field or slider has focus (suppresses all hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
///
/// Bindings with Ctrl/Cmd held are left to the webview so copy/paste in
/// text fields keeps working.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }
    if ctrl || meta {
        return HotkeyResult::NoMatch;
    }

    // Numpad +/- produce the same characters; "=" is unshifted "+" on most layouts.
    let action = match key {
        Key::Character(c) if c == " " => HotkeyAction::PlayPause,
        Key::Character(c) if c == "+" || c == "=" => HotkeyAction::TimelineZoomIn,
        Key::Character(c) if c == "-" => HotkeyAction::TimelineZoomOut,
        Key::Home => HotkeyAction::SeekStart,
        Key::End => HotkeyAction::SeekEnd,
        Key::Escape => HotkeyAction::ClearSelection,
        _ => return HotkeyResult::NoMatch,
    };
    HotkeyResult::Action(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> HotkeyResult {
        handle_hotkey(&key, false, false, false, false, &HotkeyContext::default())
    }

    #[test]
    fn test_plus_and_equals_zoom_in() {
        assert!(matches!(
            press(Key::Character("+".to_string())),
            HotkeyResult::Action(HotkeyAction::TimelineZoomIn)
        ));
        assert!(matches!(
            press(Key::Character("=".to_string())),
            HotkeyResult::Action(HotkeyAction::TimelineZoomIn)
        ));
    }

    #[test]
    fn test_minus_zooms_out() {
        assert!(matches!(
            press(Key::Character("-".to_string())),
            HotkeyResult::Action(HotkeyAction::TimelineZoomOut)
        ));
    }

    #[test]
    fn test_space_toggles_playback() {
        assert!(matches!(
            press(Key::Character(" ".to_string())),
            HotkeyResult::Action(HotkeyAction::PlayPause)
        ));
    }

    #[test]
    fn test_home_end_escape() {
        assert!(matches!(press(Key::Home), HotkeyResult::Action(HotkeyAction::SeekStart)));
        assert!(matches!(press(Key::End), HotkeyResult::Action(HotkeyAction::SeekEnd)));
        assert!(matches!(press(Key::Escape), HotkeyResult::Action(HotkeyAction::ClearSelection)));
    }

    #[test]
    fn test_unbound_key_no_match() {
        assert!(matches!(press(Key::Character("q".to_string())), HotkeyResult::NoMatch));
        assert!(matches!(press(Key::Enter), HotkeyResult::NoMatch));
    }

    #[test]
    fn test_ctrl_chords_are_ignored() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("-".to_string()), false, true, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext { input_focused: true };
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
