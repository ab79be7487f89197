use dioxus::prelude::*;
use crate::constants::*;
use crate::core::timeline_layout::format_timecode;
use crate::state::Clip;

/// Mock program monitor: shows the active video clip's still, the active
/// overlay card and the current filter grade.
#[component]
pub fn PreviewPanel(
    video_clip: Option<Clip>,
    overlay_clip: Option<Clip>,
    filter_css: String,
    current_time: f64,
    duration: f64,
    is_playing: bool,
    on_play_pause: EventHandler<MouseEvent>,
    on_seek: EventHandler<f64>,
) -> Element {
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let timecode = format!("{} / {}", format_timecode(current_time), format_timecode(duration));
    let waiting_label = format!("Waiting for video stream at {:.2}s", current_time);
    let frame = video_clip.as_ref().map(|clip| {
        let src = clip
            .thumbnail
            .clone()
            .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/1280/720", clip.id));
        (src, clip.name.clone())
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; flex: 1; min-height: 0; min-width: 0; background-color: {BG_DEEPEST};",

            div {
                style: "flex: 1; display: flex; align-items: center; justify-content: center; padding: 24px; min-height: 0;",
                div {
                    style: "
                        position: relative; width: 100%; max-width: 960px; aspect-ratio: 16 / 9; max-height: 100%;
                        background-color: #000; border-radius: 8px; overflow: hidden;
                        border: 1px solid {BORDER_SUBTLE};
                    ",

                    // Graded frame
                    div {
                        style: "position: absolute; inset: 0; filter: {filter_css}; transition: filter 0.3s ease;",
                        if let Some((src, name)) = frame {
                            img {
                                src: "{src}",
                                style: "width: 100%; height: 100%; object-fit: cover;",
                                alt: "Video frame",
                            }
                            div {
                                style: "
                                    position: absolute; left: 16px; bottom: 16px;
                                    padding: 3px 8px; border-radius: 4px;
                                    background-color: rgba(0,0,0,0.5); color: {TEXT_SECONDARY};
                                    font-family: 'SF Mono', Consolas, monospace; font-size: 10px;
                                ",
                                "CLIP: {name}"
                            }
                        } else {
                            div {
                                style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 8px; color: {TEXT_DIM};",
                                span { style: "font-size: 32px; font-weight: 700;", "NO SIGNAL" }
                                span { style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px;", "{waiting_label}" }
                            }
                        }
                    }

                    if let Some(overlay) = overlay_clip {
                        div {
                            style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; pointer-events: none;",
                            div {
                                style: "
                                    padding: 16px 32px; border-radius: 12px;
                                    background-color: rgba(255,255,255,0.1); border: 1px solid rgba(255,255,255,0.2);
                                    color: {TEXT_PRIMARY}; font-size: 28px; font-weight: 700;
                                ",
                                "{overlay.name}"
                            }
                        }
                    }

                    // Rule-of-thirds guides
                    div {
                        style: "
                            position: absolute; inset: 0; pointer-events: none; opacity: 0.2;
                            display: grid; grid-template-columns: repeat(3, 1fr); grid-template-rows: repeat(3, 1fr);
                        ",
                        for cell in 0..9 {
                            div { key: "guide-{cell}", style: "border: 1px solid rgba(255,255,255,0.2);" }
                        }
                    }
                }
            }

            // Transport
            div {
                style: "
                    position: relative; display: flex; align-items: center; justify-content: center; gap: 18px;
                    height: 52px; flex-shrink: 0;
                    background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT};
                ",
                TransportBtn { icon: "⏮", on_click: move |_| on_seek.call(0.0) }
                TransportBtn { icon: play_icon, primary: true, on_click: move |e| on_play_pause.call(e) }
                TransportBtn { icon: "⏭", on_click: move |_| on_seek.call(duration) }
                span {
                    style: "position: absolute; right: 20px; font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_MUTED};",
                    "{timecode}"
                }
            }
        }
    }
}

#[component]
fn TransportBtn(
    icon: &'static str,
    #[props(default = false)] primary: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let (size, bg, fg) = if primary {
        (36, TEXT_PRIMARY, BG_DEEPEST)
    } else {
        (28, "transparent", TEXT_SECONDARY)
    };
    rsx! {
        button {
            class: "collapse-btn",
            style: "width: {size}px; height: {size}px; border: none; border-radius: 50%; background-color: {bg}; color: {fg}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}
