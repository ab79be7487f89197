use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn TitleBar(
    project_name: String,
    assistant_active: bool,
    on_open_assistant: EventHandler<MouseEvent>,
) -> Element {
    let assistant_bg = if assistant_active { BG_HOVER } else { BG_BASE };
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 44px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none; flex-shrink: 0;
            ",
            div {
                style: "display: flex; align-items: center; gap: 14px;",
                div {
                    style: "
                        width: 24px; height: 24px; border-radius: 6px;
                        background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY};
                        display: flex; align-items: center; justify-content: center; font-size: 12px;
                    ",
                    "🎬"
                }
                span {
                    style: "font-size: 12px; font-weight: 700; color: {TEXT_SECONDARY}; text-transform: uppercase; letter-spacing: 2px;",
                    "{PRODUCT_NAME}"
                }
                div { style: "width: 1px; height: 16px; background-color: {BORDER_STRONG};" }
                span {
                    style: "font-size: 12px; color: {TEXT_MUTED}; font-family: 'SF Mono', Consolas, monospace;",
                    "{project_name}"
                }
            }
            button {
                class: "collapse-btn",
                style: "
                    display: flex; align-items: center; gap: 6px;
                    background: {assistant_bg}; border: 1px solid {BORDER_DEFAULT};
                    color: {TEXT_PRIMARY}; font-size: 12px; cursor: pointer;
                    padding: 5px 12px; border-radius: 6px;
                ",
                onclick: move |e| on_open_assistant.call(e),
                span { style: "color: {ACCENT_AI};", "✨" }
                "AI Assistant"
            }
        }
    }
}
