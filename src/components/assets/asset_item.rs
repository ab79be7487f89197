use dioxus::prelude::*;
use crate::constants::*;
use crate::state::LibraryAsset;

/// One row of the asset library. Clicking adds the asset to the timeline.
#[component]
pub fn AssetItem(asset: LibraryAsset, on_add_to_timeline: EventHandler<LibraryAsset>) -> Element {
    let icon = asset.kind.icon();
    let accent = asset.color.clone();
    let name = asset.name.clone();
    let thumbnail = asset.thumbnail.clone();

    rsx! {
        div {
            class: "asset-item",
            style: "
                display: flex; align-items: center; gap: 10px;
                padding: 6px 8px; margin-bottom: 2px;
                border: 1px solid transparent; border-radius: 6px;
                cursor: pointer; user-select: none;
            ",
            title: "Add to timeline",
            onclick: move |_| on_add_to_timeline.call(asset.clone()),

            div {
                style: "
                    width: 40px; height: 24px; flex-shrink: 0; overflow: hidden;
                    border-radius: 3px; background-color: {BG_HOVER};
                    display: flex; align-items: center; justify-content: center;
                    font-size: 11px; border-left: 2px solid {accent};
                ",
                if let Some(src) = thumbnail {
                    img { src: "{src}", style: "width: 100%; height: 100%; object-fit: cover;", alt: "" }
                } else {
                    span { "{icon}" }
                }
            }
            span {
                style: "flex: 1; font-size: 12px; color: {TEXT_SECONDARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                "{name}"
            }
            span { class: "asset-add", style: "font-size: 12px; color: {TEXT_DIM};", "+" }
        }
    }
}
