mod assets_panel;
mod asset_item;
mod generate_panel;

pub use assets_panel::{AssetsPanelContent, SidebarTab};
pub use asset_item::AssetItem;
pub use generate_panel::GeneratePanel;
