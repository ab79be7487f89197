//! Preview color grading knobs.
//!
//! Filters are editor-session state: they apply to the whole preview frame
//! regardless of which clip is active and are not part of the project.

use serde::{Deserialize, Serialize};

/// The five independent preview filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Percent, 100 is neutral
    pub brightness: f64,
    /// Percent, 100 is neutral
    pub contrast: f64,
    /// Percent, 100 is neutral
    pub saturation: f64,
    /// Percent, 0 is neutral
    pub sepia: f64,
    /// Pixels, 0 is neutral
    pub blur: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
            sepia: 0.0,
            blur: 0.0,
        }
    }
}

/// Names one field of `FilterSettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKey {
    Brightness,
    Contrast,
    Saturation,
    Sepia,
    Blur,
}

impl FilterKey {
    pub const ALL: [FilterKey; 5] = [
        FilterKey::Brightness,
        FilterKey::Contrast,
        FilterKey::Saturation,
        FilterKey::Sepia,
        FilterKey::Blur,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterKey::Brightness => "Brightness",
            FilterKey::Contrast => "Contrast",
            FilterKey::Saturation => "Saturation",
            FilterKey::Sepia => "Sepia",
            FilterKey::Blur => "Blur",
        }
    }

    /// Slider range `(min, max)` for this filter.
    pub fn range(self) -> (f64, f64) {
        match self {
            FilterKey::Brightness | FilterKey::Contrast | FilterKey::Saturation => (0.0, 200.0),
            FilterKey::Sepia => (0.0, 100.0),
            FilterKey::Blur => (0.0, 20.0),
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            FilterKey::Blur => "px",
            _ => "%",
        }
    }
}

/// Canned filter combinations offered in the properties panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPreset {
    Cinematic,
    Noir,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 2] = [FilterPreset::Cinematic, FilterPreset::Noir];

    pub fn label(self) -> &'static str {
        match self {
            FilterPreset::Cinematic => "Cinematic",
            FilterPreset::Noir => "Noir",
        }
    }

    pub fn settings(self) -> FilterSettings {
        match self {
            FilterPreset::Cinematic => FilterSettings {
                brightness: 100.0,
                contrast: 120.0,
                saturation: 80.0,
                sepia: 20.0,
                blur: 0.0,
            },
            FilterPreset::Noir => FilterSettings {
                brightness: 80.0,
                contrast: 150.0,
                saturation: 0.0,
                sepia: 0.0,
                blur: 0.0,
            },
        }
    }
}

impl FilterSettings {
    pub fn get(&self, key: FilterKey) -> f64 {
        match key {
            FilterKey::Brightness => self.brightness,
            FilterKey::Contrast => self.contrast,
            FilterKey::Saturation => self.saturation,
            FilterKey::Sepia => self.sepia,
            FilterKey::Blur => self.blur,
        }
    }

    /// Set one filter. The value is stored as given; range enforcement is
    /// left to the input control.
    pub fn set(&mut self, key: FilterKey, value: f64) {
        let slot = match key {
            FilterKey::Brightness => &mut self.brightness,
            FilterKey::Contrast => &mut self.contrast,
            FilterKey::Saturation => &mut self.saturation,
            FilterKey::Sepia => &mut self.sepia,
            FilterKey::Blur => &mut self.blur,
        };
        *slot = value;
    }

    /// Replace every field with the preset's values.
    pub fn apply_preset(&mut self, preset: FilterPreset) {
        *self = preset.settings();
    }

    /// CSS `filter` property value for the preview frame.
    pub fn css_filter(&self) -> String {
        format!(
            "brightness({}%) contrast({}%) saturate({}%) sepia({}%) blur({}px)",
            self.brightness, self.contrast, self.saturation, self.sepia, self.blur
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_touches_only_named_field() {
        let mut filters = FilterSettings::default();
        filters.set(FilterKey::Sepia, 42.0);
        assert_eq!(filters.sepia, 42.0);
        assert_eq!(filters.brightness, 100.0);
        assert_eq!(filters.contrast, 100.0);
        assert_eq!(filters.saturation, 100.0);
        assert_eq!(filters.blur, 0.0);

        for key in FilterKey::ALL {
            filters.set(key, 7.0);
            assert_eq!(filters.get(key), 7.0);
        }
    }

    #[test]
    fn test_presets() {
        let mut filters = FilterSettings::default();
        filters.apply_preset(FilterPreset::Noir);
        assert_eq!(filters.saturation, 0.0);
        assert_eq!(filters.contrast, 150.0);
        filters.apply_preset(FilterPreset::Cinematic);
        assert_eq!(filters.sepia, 20.0);
        assert_eq!(filters.brightness, 100.0);
    }

    #[test]
    fn test_css_filter_string() {
        let filters = FilterSettings::default();
        assert_eq!(
            filters.css_filter(),
            "brightness(100%) contrast(100%) saturate(100%) sepia(0%) blur(0px)"
        );

        let mut filters = FilterSettings::default();
        filters.set(FilterKey::Blur, 2.5);
        assert!(filters.css_filter().ends_with("blur(2.5px)"));
    }

    #[test]
    fn test_ranges_contain_defaults() {
        let defaults = FilterSettings::default();
        for key in FilterKey::ALL {
            let (min, max) = key.range();
            let value = defaults.get(key);
            assert!(value >= min && value <= max, "{:?}", key);
        }
    }
}
