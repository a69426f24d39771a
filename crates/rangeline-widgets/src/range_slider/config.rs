//! Declarative slider configuration loaded from YAML or JSON.

use rangeline_core::{Color, EdgeInsets, ImageId};
use serde::{Deserialize, Serialize};

use super::appearance::{HandleAppearance, SliderStyle, TrackAppearance, DEFAULT_TOUCH_INSETS};
use crate::error::ConfigError;

/// Every property of a range slider. Missing fields take the widget defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSliderConfig {
    /// Lower domain bound
    #[serde(default)]
    pub minimum: f64,
    /// Upper domain bound
    #[serde(default = "default_maximum")]
    pub maximum: f64,
    /// Minimum separation between the values
    #[serde(default)]
    pub minimum_distance: f64,
    /// Grid step (0 = continuous)
    #[serde(default)]
    pub step: f64,
    /// Snap to the grid while dragging
    #[serde(default)]
    pub step_continuously: bool,
    /// Notify on every pointer event instead of only on release
    #[serde(default = "default_change_continuously")]
    pub change_continuously: bool,
    /// Initial low value (defaults to `minimum`)
    #[serde(default)]
    pub low: Option<f64>,
    /// Initial high value (defaults to `maximum`)
    #[serde(default)]
    pub high: Option<f64>,
    /// Secondary upper bound for the low handle
    #[serde(default)]
    pub low_maximum: Option<f64>,
    /// Secondary lower bound for the high handle
    #[serde(default)]
    pub high_minimum: Option<f64>,
    /// Hide the low handle
    #[serde(default)]
    pub low_hidden: bool,
    /// Hide the high handle
    #[serde(default)]
    pub high_hidden: bool,
    /// Low handle hit-area insets
    #[serde(default = "default_touch_insets")]
    pub low_touch_insets: EdgeInsets,
    /// High handle hit-area insets
    #[serde(default = "default_touch_insets")]
    pub high_touch_insets: EdgeInsets,
    /// Track color as hex
    #[serde(default)]
    pub track_color: Option<String>,
    /// Track image, overrides `track_color`
    #[serde(default)]
    pub track_image: Option<ImageId>,
    /// Crossed track color as hex
    #[serde(default)]
    pub track_crossed_color: Option<String>,
    /// Crossed track image, overrides `track_crossed_color`
    #[serde(default)]
    pub track_crossed_image: Option<ImageId>,
    /// Background color as hex
    #[serde(default)]
    pub track_background_color: Option<String>,
    /// Background image, overrides `track_background_color`
    #[serde(default)]
    pub track_background_image: Option<ImageId>,
    /// Low handle image
    #[serde(default)]
    pub low_handle_image: Option<ImageId>,
    /// Low handle image while selected
    #[serde(default)]
    pub low_handle_image_highlighted: Option<ImageId>,
    /// High handle image
    #[serde(default)]
    pub high_handle_image: Option<ImageId>,
    /// High handle image while selected
    #[serde(default)]
    pub high_handle_image_highlighted: Option<ImageId>,
    /// Transparent margin on each side of the low handle image
    #[serde(default)]
    pub low_horizontal_padding: f32,
    /// Transparent margin on each side of the high handle image
    #[serde(default)]
    pub high_horizontal_padding: f32,
    /// Test identifier
    #[serde(default)]
    pub test_id: Option<String>,
}

const fn default_maximum() -> f64 {
    1.0
}

const fn default_change_continuously() -> bool {
    true
}

const fn default_touch_insets() -> EdgeInsets {
    DEFAULT_TOUCH_INSETS
}

impl Default for RangeSliderConfig {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: default_maximum(),
            minimum_distance: 0.0,
            step: 0.0,
            step_continuously: false,
            change_continuously: default_change_continuously(),
            low: None,
            high: None,
            low_maximum: None,
            high_minimum: None,
            low_hidden: false,
            high_hidden: false,
            low_touch_insets: default_touch_insets(),
            high_touch_insets: default_touch_insets(),
            track_color: None,
            track_image: None,
            track_crossed_color: None,
            track_crossed_image: None,
            track_background_color: None,
            track_background_image: None,
            low_handle_image: None,
            low_handle_image_highlighted: None,
            high_handle_image: None,
            high_handle_image_highlighted: None,
            low_horizontal_padding: 0.0,
            high_horizontal_padding: 0.0,
            test_id: None,
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            message: format!("must be a finite number, got {value}"),
        })
    }
}

fn padding(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            message: format!("must be a non-negative number, got {value}"),
        })
    }
}

fn track(
    field: &'static str,
    color: Option<&str>,
    image: Option<ImageId>,
    fallback: Color,
) -> Result<TrackAppearance, ConfigError> {
    if let Some(image) = image {
        return Ok(TrackAppearance::Image(image));
    }
    match color {
        Some(hex) => Color::from_hex(hex)
            .map(TrackAppearance::Color)
            .map_err(|source| ConfigError::Color { field, source }),
        None => Ok(TrackAppearance::Color(fallback)),
    }
}

fn handle(normal: Option<ImageId>, highlighted: Option<ImageId>) -> HandleAppearance {
    normal.map_or(HandleAppearance::System, |normal| HandleAppearance::Image {
        normal,
        highlighted,
    })
}

impl RangeSliderConfig {
    /// Parse from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that the configuration describes a usable slider.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("minimum", self.minimum)?;
        finite("maximum", self.maximum)?;
        if self.maximum < self.minimum {
            return Err(ConfigError::InvalidValue {
                field: "maximum",
                message: format!(
                    "must not be below minimum ({} < {})",
                    self.maximum, self.minimum
                ),
            });
        }
        finite("minimum_distance", self.minimum_distance)?;
        finite("step", self.step)?;
        if self.step < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "step",
                message: "must not be negative".to_string(),
            });
        }
        for (field, value) in [
            ("low", self.low),
            ("high", self.high),
            ("low_maximum", self.low_maximum),
            ("high_minimum", self.high_minimum),
        ] {
            if let Some(value) = value {
                finite(field, value)?;
            }
        }
        padding("low_horizontal_padding", self.low_horizontal_padding)?;
        padding("high_horizontal_padding", self.high_horizontal_padding)?;
        self.style().map(|_| ())
    }

    /// Resolve the visual settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a color string is not valid hex.
    pub fn style(&self) -> Result<SliderStyle, ConfigError> {
        Ok(SliderStyle {
            low_handle: handle(self.low_handle_image, self.low_handle_image_highlighted),
            high_handle: handle(self.high_handle_image, self.high_handle_image_highlighted),
            low_horizontal_padding: self.low_horizontal_padding,
            high_horizontal_padding: self.high_horizontal_padding,
            track: track(
                "track_color",
                self.track_color.as_deref(),
                self.track_image,
                Color::ACCENT_BLUE,
            )?,
            track_crossed: track(
                "track_crossed_color",
                self.track_crossed_color.as_deref(),
                self.track_crossed_image,
                Color::RED,
            )?,
            track_background: track(
                "track_background_color",
                self.track_background_color.as_deref(),
                self.track_background_image,
                Color::LIGHT_GRAY,
            )?,
            low_touch_insets: self.low_touch_insets,
            high_touch_insets: self.high_touch_insets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeline_core::Size;

    const PRICE_FILTER: &str = r##"
minimum: 0
maximum: 500
minimum_distance: 25
step: 5
step_continuously: true
low: 100
high: 300
track_color: "#34c759"
high_handle_image:
  id: 7
  size: { width: 32.0, height: 32.0 }
high_horizontal_padding: 2.0
test_id: price-filter
"##;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_from_yaml() {
        let config = RangeSliderConfig::from_yaml(PRICE_FILTER).unwrap();
        assert_eq!(config.maximum, 500.0);
        assert_eq!(config.minimum_distance, 25.0);
        assert!(config.step_continuously);
        assert_eq!(config.low, Some(100.0));
        assert_eq!(config.high_handle_image, Some(ImageId::new(7, Size::square(32.0))));
        assert_eq!(config.test_id.as_deref(), Some("price-filter"));
        // Unspecified fields keep widget defaults
        assert_eq!(config.low_touch_insets, EdgeInsets::uniform(-5.0));
        assert!(config.change_continuously);
    }

    #[test]
    fn test_from_json() {
        let config =
            RangeSliderConfig::from_json(r#"{"maximum": 10, "change_continuously": false}"#)
                .unwrap();
        assert_eq!(config.minimum, 0.0);
        assert_eq!(config.maximum, 10.0);
        assert!(!config.change_continuously);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = RangeSliderConfig::from_json("{}").unwrap();
        assert_eq!(config, RangeSliderConfig::default());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = RangeSliderConfig::from_yaml("maximum: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = RangeSliderConfig::from_yaml(PRICE_FILTER).unwrap();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(RangeSliderConfig::from_yaml(&yaml).unwrap(), config);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn test_validate_ok() {
        RangeSliderConfig::from_yaml(PRICE_FILTER)
            .unwrap()
            .validate()
            .unwrap();
    }

    #[test]
    fn test_validate_inverted_domain() {
        let config = RangeSliderConfig {
            minimum: 5.0,
            maximum: 1.0,
            ..RangeSliderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "maximum",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_negative_step() {
        let config = RangeSliderConfig {
            step: -1.0,
            ..RangeSliderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "step", .. })
        ));
    }

    #[test]
    fn test_validate_non_finite() {
        let config = RangeSliderConfig {
            low_maximum: Some(f64::INFINITY),
            ..RangeSliderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "low_maximum",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_negative_distance_allowed() {
        let config = RangeSliderConfig {
            minimum_distance: -0.5,
            ..RangeSliderConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_color() {
        let config = RangeSliderConfig {
            track_background_color: Some("#12".to_string()),
            ..RangeSliderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Color {
                field: "track_background_color",
                source: rangeline_core::ColorParseError::InvalidLength,
            })
        ));
    }

    // =========================================================================
    // Style
    // =========================================================================

    #[test]
    fn test_style_defaults() {
        let style = RangeSliderConfig::default().style().unwrap();
        assert_eq!(style, SliderStyle::default());
    }

    #[test]
    fn test_style_from_yaml() {
        let style = RangeSliderConfig::from_yaml(PRICE_FILTER)
            .unwrap()
            .style()
            .unwrap();
        assert_eq!(style.low_handle, HandleAppearance::System);
        assert_eq!(
            style.high_handle,
            HandleAppearance::image(ImageId::new(7, Size::square(32.0)))
        );
        assert_eq!(style.high_horizontal_padding, 2.0);
        assert_eq!(
            style.track,
            TrackAppearance::Color(Color::from_hex("#34c759").unwrap())
        );
        assert_eq!(style.track_crossed, TrackAppearance::Color(Color::RED));
    }

    #[test]
    fn test_image_overrides_color() {
        let image = ImageId::new(3, Size::new(1.0, 4.0));
        let config = RangeSliderConfig {
            track_color: Some("not a color".to_string()),
            track_image: Some(image),
            ..RangeSliderConfig::default()
        };
        assert_eq!(config.style().unwrap().track, TrackAppearance::Image(image));
    }
}
