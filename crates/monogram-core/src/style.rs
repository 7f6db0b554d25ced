use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::style_defaults;

/// A style attribute that is either a bare number or literal CSS text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CssValue {
    Number(f64),
    Text(String),
}

impl CssValue {
    /// Renders the value for an inline style. Non-zero numbers get a `px`
    /// suffix unless the property is unitless.
    pub fn to_css(&self, unitless: bool) -> String {
        match self {
            Self::Number(value) if unitless || *value == 0.0 => format!("{value}"),
            Self::Number(value) => format!("{value}px"),
            Self::Text(value) => value.clone(),
        }
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for CssValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Caller-supplied style overrides. Omitted fields take the defaults in
/// [`style_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOptions {
    pub size: Option<f64>,
    pub radius: Option<CssValue>,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<CssValue>,
    pub line_height: Option<CssValue>,
    pub letter_spacing: Option<CssValue>,
}

/// Style with every default applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub size: f64,
    pub radius: CssValue,
    pub bg_color: String,
    pub text_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: CssValue,
    pub line_height: CssValue,
    pub letter_spacing: CssValue,
}

impl StyleOptions {
    pub fn resolve(&self) -> ResolvedStyle {
        let size = self.size.unwrap_or(style_defaults::SIZE);
        ResolvedStyle {
            size,
            radius: self
                .radius
                .clone()
                .unwrap_or_else(|| style_defaults::RADIUS.into()),
            bg_color: self
                .bg_color
                .clone()
                .unwrap_or_else(|| style_defaults::BG_COLOR.to_string()),
            text_color: self
                .text_color
                .clone()
                .unwrap_or_else(|| style_defaults::TEXT_COLOR.to_string()),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| style_defaults::FONT_FAMILY.to_string()),
            font_size: self
                .font_size
                .unwrap_or(size * style_defaults::FONT_SIZE_RATIO),
            font_weight: self
                .font_weight
                .clone()
                .unwrap_or(CssValue::Number(style_defaults::FONT_WEIGHT)),
            line_height: self
                .line_height
                .clone()
                .unwrap_or_else(|| CssValue::Text(format!("{size}px"))),
            letter_spacing: self
                .letter_spacing
                .clone()
                .unwrap_or(CssValue::Number(style_defaults::LETTER_SPACING)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_size() {
        let style = StyleOptions::default().resolve();
        assert_eq!(style.size, 50.0);
        assert_eq!(style.font_size, 20.0);
        assert_eq!(style.line_height, CssValue::Text("50px".to_string()));
        assert_eq!(style.radius, CssValue::Text("50%".to_string()));
        assert_eq!(style.font_weight, CssValue::Number(600.0));
        assert_eq!(style.letter_spacing, CssValue::Number(0.0));
        assert_eq!(style.bg_color, "#4f46e5");
        assert_eq!(style.text_color, "#ffffff");
        assert_eq!(style.font_family, "inherit");
    }

    #[test]
    fn explicit_zero_font_size_wins() {
        let options = StyleOptions {
            size: Some(80.0),
            font_size: Some(0.0),
            ..StyleOptions::default()
        };
        let style = options.resolve();
        assert_eq!(style.font_size, 0.0);
        assert_eq!(style.line_height, CssValue::Text("80px".to_string()));
    }

    #[test]
    fn css_value_units() {
        assert_eq!(CssValue::Number(12.0).to_css(false), "12px");
        assert_eq!(CssValue::Number(1.5).to_css(true), "1.5");
        assert_eq!(CssValue::Number(0.0).to_css(false), "0");
        assert_eq!(CssValue::from("8px").to_css(false), "8px");
    }

    #[test]
    fn css_value_accepts_numbers_and_text() {
        let options: StyleOptions =
            serde_json::from_str(r#"{"radius": 8, "fontWeight": "bold", "bgColor": "red"}"#)
                .expect("style options");
        assert_eq!(options.radius, Some(CssValue::Number(8.0)));
        assert_eq!(options.font_weight, Some(CssValue::Text("bold".to_string())));
        assert_eq!(options.bg_color.as_deref(), Some("red"));
        assert_eq!(options.size, None);
    }
}
