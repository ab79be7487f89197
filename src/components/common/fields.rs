use dioxus::prelude::*;
use crate::constants::*;
use crate::utils::parse_f64_input;

/// Single-line text input. The parent owns the value.
#[component]
pub fn TextField(
    label: String,
    value: String,
    #[props(default)] placeholder: String,
    on_input: EventHandler<String>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            if !label.is_empty() {
                span { style: "font-size: 10px; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "{label}" }
            }
            input {
                r#type: "text",
                value: "{value}",
                placeholder: "{placeholder}",
                style: "
                    width: 100%; min-width: 0; box-sizing: border-box;
                    padding: 6px 8px; font-size: 12px;
                    background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    outline: none;
                    user-select: text;
                ",
                oninput: move |e| on_input.call(e.value()),
                onfocus: move |_| on_focus_change.call(true),
                onblur: move |_| on_focus_change.call(false),
            }
        }
    }
}

/// Multi-line text input. The parent owns the value.
#[component]
pub fn TextAreaField(
    label: String,
    value: String,
    rows: u32,
    #[props(default)] placeholder: String,
    on_input: EventHandler<String>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            span { style: "font-size: 10px; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "{label}" }
            textarea {
                rows: "{rows}",
                value: "{value}",
                placeholder: "{placeholder}",
                style: "
                    width: 100%; min-width: 0; box-sizing: border-box;
                    padding: 6px 8px; font-size: 12px; line-height: 1.4;
                    background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    outline: none;
                    resize: vertical;
                    user-select: text;
                ",
                oninput: move |e| on_input.call(e.value()),
                onfocus: move |_| on_focus_change.call(true),
                onblur: move |_| on_focus_change.call(false),
            }
        }
    }
}

/// Labeled range slider with a value readout.
#[component]
pub fn SliderField(
    label: &'static str,
    value: f64,
    min: f64,
    max: f64,
    #[props(default = 1.0)] step: f64,
    #[props(default)] unit: &'static str,
    on_change: EventHandler<f64>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let readout = format!("{:.0}{}", value, unit);
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px;",
                span { style: "color: {TEXT_SECONDARY};", "{label}" }
                span { style: "color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace;", "{readout}" }
            }
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                style: "width: 100%; accent-color: {ACCENT_PRIMARY};",
                oninput: move |e| {
                    let parsed = parse_f64_input(&e.value(), value).clamp(min, max);
                    on_change.call(parsed);
                },
                onfocus: move |_| on_focus_change.call(true),
                onblur: move |_| on_focus_change.call(false),
            }
        }
    }
}
