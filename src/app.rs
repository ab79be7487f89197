//! Root application component
//!
//! Owns the editor state and wires the panels together.

use dioxus::prelude::*;
use std::time::{Duration, Instant};

use crate::components::assets::{AssetsPanelContent, SidebarTab};
use crate::components::attributes::AttributesPanelContent;
use crate::components::{PreviewPanel, SidePanel, StatusBar, TitleBar};
use crate::config::AppConfig;
use crate::constants::*;
use crate::core::generation::{request_video, storyboard_or_empty};
use crate::core::playback::{PlaybackClock, RunToken, Tick};
use crate::core::timeline_query::active_clip;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::providers::gemini::GeminiClient;
use crate::state::{
    EditorSession, GenerationStatus, LibraryAsset, Project, StoryboardShot, TrackKind,
    LIBRARY_TARGET_TRACK_INDEX, ZOOM_STEP,
};
use crate::timeline::TimelinePanel;

/// Delay between playback ticks (~60 Hz).
const PLAYBACK_TICK_MS: u64 = 16;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let gateway = use_hook(|| GeminiClient::new(&config));

    // Core state
    let mut project = use_signal(Project::seeded);
    let mut session = use_signal(EditorSession::new);
    let clock = use_signal(PlaybackClock::new);

    // Panel state
    let mut sidebar_tab = use_signal(SidebarTab::default);
    let mut left_collapsed = use_signal(|| false);
    let mut right_collapsed = use_signal(|| false);
    let mut input_focused = use_signal(|| false);

    // AI assistant state
    let video_prompt = use_signal(String::new);
    let storyboard_theme = use_signal(String::new);
    let mut storyboard = use_signal(Vec::<StoryboardShot>::new);
    let mut storyboard_status = use_signal(GenerationStatus::default);
    let mut video_status = use_signal(GenerationStatus::default);
    let mut last_status = use_signal(GenerationStatus::default);

    let is_playing = clock.read().is_running();
    let project_read = project.read();
    let current_time = project_read.current_time;
    let duration = project_read.duration;
    let zoom = project_read.zoom_level;
    let video_clip = active_clip(&project_read, current_time, TrackKind::Video).cloned();
    let overlay_clip = active_clip(&project_read, current_time, TrackKind::Overlay).cloned();
    let clip_count = project_read.clip_count();
    let project_name = project_read.name.clone();
    let tracks = project_read.tracks.clone();
    drop(project_read);

    let filter_css = session.read().filters.css_filter();
    let selected_clip = session.read().selection.clip_id();
    let status_is_error = matches!(last_status(), GenerationStatus::Failed(_));
    let status_message = last_status().message().map(str::to_string);

    let storyboard_gateway = gateway.clone();
    let on_generate_storyboard = move |theme: String| {
        if storyboard_status.read().is_running() {
            return;
        }
        let theme = theme.trim().to_string();
        if theme.is_empty() {
            storyboard_status.set(GenerationStatus::Failed("Enter a storyboard theme first".to_string()));
            return;
        }
        storyboard_status.set(GenerationStatus::Running);
        last_status.set(GenerationStatus::Running);
        let gateway = storyboard_gateway.clone();
        spawn(async move {
            let shots = storyboard_or_empty(&gateway, &theme).await;
            let status = if shots.is_empty() {
                GenerationStatus::Failed("Storyboard came back empty".to_string())
            } else {
                GenerationStatus::Done(format!("Storyboard ready: {} shots", shots.len()))
            };
            storyboard.set(shots);
            storyboard_status.set(status.clone());
            last_status.set(status);
        });
    };

    let video_gateway = gateway.clone();
    let on_generate_video = move |prompt: String| {
        if video_status.read().is_running() {
            return;
        }
        video_status.set(GenerationStatus::Running);
        last_status.set(GenerationStatus::Running);
        let gateway = video_gateway.clone();
        spawn(async move {
            let status = match request_video(&gateway, &prompt).await {
                Ok(media) => GenerationStatus::Done(format!("Video ready: {}", media.url)),
                Err(err) => GenerationStatus::Failed(err.to_string()),
            };
            video_status.set(status.clone());
            last_status.set(status);
        });
    };

    rsx! {
        // Global CSS
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.8; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            .collapsed-rail {{ transition: background-color 0.15s ease; }}
            .collapsed-rail:hover {{ background-color: {BG_HOVER} !important; }}
            .asset-item:hover {{ background-color: {BG_HOVER}; border-color: {BORDER_STRONG} !important; }}
            .asset-item:hover .asset-add {{ color: {BORDER_ACCENT} !important; }}
            "#
        }

        // Main app container
        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                user-select: none; outline: none;
            ",
            // Enable keyboard focus on this container for hotkeys
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    input_focused: input_focused(),
                };
                let modifiers = e.modifiers();
                match handle_hotkey(
                    &e.key(),
                    modifiers.shift(),
                    modifiers.ctrl(),
                    modifiers.alt(),
                    modifiers.meta(),
                    &hotkey_context,
                ) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::PlayPause => toggle_playback(project, clock),
                            HotkeyAction::TimelineZoomIn => {
                                project.write().zoom_by(ZOOM_STEP);
                            }
                            HotkeyAction::TimelineZoomOut => {
                                project.write().zoom_by(-ZOOM_STEP);
                            }
                            HotkeyAction::SeekStart => seek_to(project, clock, 0.0),
                            HotkeyAction::SeekEnd => {
                                let end = project.read().duration;
                                seek_to(project, clock, end);
                            }
                            HotkeyAction::ClearSelection => session.write().select_clip(None),
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar {
                project_name: project_name,
                assistant_active: sidebar_tab() == SidebarTab::Generate && !left_collapsed(),
                on_open_assistant: move |_| {
                    left_collapsed.set(false);
                    sidebar_tab.set(SidebarTab::Generate);
                },
            }

            // Main content
            div {
                class: "main-content",
                style: "display: flex; flex: 1; overflow: hidden; min-height: 0;",

                // Left panel - Assets / Generate
                SidePanel {
                    title: "Library",
                    width: SIDEBAR_WIDTH,
                    collapsed: left_collapsed(),
                    side: "left",
                    on_toggle: move |_| left_collapsed.set(!left_collapsed()),

                    AssetsPanelContent {
                        tab: sidebar_tab(),
                        on_tab_change: move |tab| sidebar_tab.set(tab),
                        on_add_to_timeline: move |asset: LibraryAsset| {
                            add_library_clip(project, &asset);
                        },
                        video_prompt: video_prompt,
                        storyboard_theme: storyboard_theme,
                        storyboard: storyboard(),
                        storyboard_status: storyboard_status(),
                        video_status: video_status(),
                        on_generate_storyboard: on_generate_storyboard,
                        on_generate_video: on_generate_video,
                        on_focus_change: move |focused| input_focused.set(focused),
                    }
                }

                // Center
                div {
                    class: "center-area",
                    style: "display: flex; flex-direction: column; flex: 1; overflow: hidden; min-width: 0;",

                    PreviewPanel {
                        video_clip: video_clip,
                        overlay_clip: overlay_clip,
                        filter_css: filter_css,
                        current_time: current_time,
                        duration: duration,
                        is_playing: is_playing,
                        on_play_pause: move |_| toggle_playback(project, clock),
                        on_seek: move |t: f64| seek_to(project, clock, t),
                    }

                    TimelinePanel {
                        tracks: tracks,
                        current_time: current_time,
                        duration: duration,
                        zoom: zoom,
                        selected_clip: selected_clip,
                        on_seek: move |t: f64| seek_to(project, clock, t),
                        on_zoom_slider: move |z: f64| {
                            project.write().set_zoom_from_slider(z);
                        },
                        on_clip_select: move |id| session.write().select_clip(Some(id)),
                        on_focus_change: move |focused| input_focused.set(focused),
                    }
                }

                // Right panel
                SidePanel {
                    title: "Properties",
                    width: PROPERTIES_WIDTH,
                    collapsed: right_collapsed(),
                    side: "right",
                    on_toggle: move |_| right_collapsed.set(!right_collapsed()),

                    AttributesPanelContent {
                        project: project,
                        session: session,
                        on_focus_change: move |focused| input_focused.set(focused),
                    }
                }
            }

            StatusBar {
                message: status_message,
                is_error: status_is_error,
                is_playing: is_playing,
                current_time: current_time,
                duration: duration,
                zoom: zoom,
                clip_count: clip_count,
            }
        }
    }
}

/// Play/pause. Starting playback spawns a tick loop bound to the new run.
fn toggle_playback(project: Signal<Project>, mut clock: Signal<PlaybackClock>) {
    let current_time = project.read().current_time;
    let started = clock.write().toggle(current_time, Instant::now());
    if let Some(token) = started {
        spawn_playback_loop(project, clock, token);
    }
}

/// Advance the playhead until the run ends. A loop whose run was stopped or
/// replaced sees `Tick::Stale` and exits without touching the project.
fn spawn_playback_loop(mut project: Signal<Project>, mut clock: Signal<PlaybackClock>, token: RunToken) {
    spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_millis(PLAYBACK_TICK_MS)).await;
            let duration = project.read().duration;
            let tick = clock.write().tick(token, Instant::now(), duration);
            match tick {
                Tick::Advanced(time) => {
                    project.write().seek(time);
                }
                Tick::Finished(time) => {
                    project.write().seek(time);
                    break;
                }
                Tick::Stale => break,
            }
        }
    });
}

fn seek_to(mut project: Signal<Project>, mut clock: Signal<PlaybackClock>, time: f64) {
    let mut project = project.write();
    clock.write().seek(&mut project, time, Instant::now());
}

fn add_library_clip(mut project: Signal<Project>, asset: &LibraryAsset) {
    let clip = asset.to_clip();
    if let Err(err) = project.write().add_clip(clip, LIBRARY_TARGET_TRACK_INDEX) {
        log::warn!("Could not add {:?} to the timeline: {}", asset.name, err);
    }
}
