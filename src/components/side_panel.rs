use dioxus::prelude::*;
use crate::constants::*;

/// Collapsible column docked to the left or right edge of the workspace.
#[component]
pub fn SidePanel(
    title: &'static str,
    width: f64,
    collapsed: bool,
    side: &'static str,
    on_toggle: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_left = side == "left";
    let icon = if collapsed {
        if is_left { "▶" } else { "◀" }
    } else if is_left {
        "◀"
    } else {
        "▶"
    };
    let border = if is_left {
        format!("border-right: 1px solid {BORDER_DEFAULT};")
    } else {
        format!("border-left: 1px solid {BORDER_DEFAULT};")
    };
    let width = if collapsed { PANEL_COLLAPSED_WIDTH } else { width };
    let rail_cursor = if collapsed { "pointer" } else { "default" };
    let panel_class = if collapsed { "collapsed-rail" } else { "" };

    rsx! {
        div {
            class: "{panel_class}",
            style: "
                display: flex; flex-direction: column;
                width: {width}px; min-width: {width}px;
                background-color: {BG_ELEVATED}; {border}
                transition: width 0.2s ease, min-width 0.2s ease;
                overflow: hidden;
                cursor: {rail_cursor};
            ",
            onclick: move |e| {
                if collapsed {
                    on_toggle.call(e);
                }
            },

            div {
                style: "
                    display: flex; align-items: center; gap: 8px;
                    height: 32px; padding: 0 8px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                if !collapsed {
                    span {
                        style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px; flex: 1;",
                        "{title}"
                    }
                }
                button {
                    class: "collapse-btn",
                    style: "
                        width: 24px; height: 24px; border: none; border-radius: 4px;
                        background: transparent; color: {TEXT_MUTED}; font-size: 10px;
                        cursor: pointer; display: flex; align-items: center; justify-content: center;
                    ",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_toggle.call(e);
                    },
                    "{icon}"
                }
            }

            if !collapsed {
                div {
                    style: "flex: 1; display: flex; flex-direction: column; overflow: hidden;",
                    {children}
                }
            }
        }
    }
}
