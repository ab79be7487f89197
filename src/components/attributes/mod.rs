mod attributes_panel;

pub use attributes_panel::AttributesPanelContent;
