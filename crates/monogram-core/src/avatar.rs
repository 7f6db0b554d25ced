use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::initials::{extract_initials, InitialOptions, NameInput};
use crate::style::{CssValue, StyleOptions};

/// Everything a rendering layer needs to draw an avatar box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresentationDescriptor {
    pub width: f64,
    pub height: f64,
    pub radius: CssValue,
    pub bg_color: String,
    pub text_color: String,
    /// Content is centered on both axes.
    pub centered: bool,
    /// Text can be selected by the user.
    pub selectable: bool,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: CssValue,
    pub line_height: CssValue,
    pub letter_spacing: CssValue,
    pub content: String,
}

pub fn render_avatar<'a>(
    name: impl Into<NameInput<'a>>,
    style: &StyleOptions,
    options: &InitialOptions,
) -> PresentationDescriptor {
    let content = extract_initials(name, options);
    let style = style.resolve();
    PresentationDescriptor {
        width: style.size,
        height: style.size,
        radius: style.radius,
        bg_color: style.bg_color,
        text_color: style.text_color,
        centered: true,
        selectable: false,
        font_family: style.font_family,
        font_size: style.font_size,
        font_weight: style.font_weight,
        line_height: style.line_height,
        letter_spacing: style.letter_spacing,
        content,
    }
}

impl PresentationDescriptor {
    /// Inline-style declarations in CSS property order.
    pub fn style_declarations(&self) -> Vec<(&'static str, String)> {
        let mut declarations = vec![
            ("width", CssValue::Number(self.width).to_css(false)),
            ("height", CssValue::Number(self.height).to_css(false)),
            ("border-radius", self.radius.to_css(false)),
            ("background-color", self.bg_color.clone()),
            ("color", self.text_color.clone()),
        ];
        if self.centered {
            declarations.push(("display", "flex".to_string()));
            declarations.push(("align-items", "center".to_string()));
            declarations.push(("justify-content", "center".to_string()));
        }
        declarations.extend([
            ("font-family", self.font_family.clone()),
            ("font-size", CssValue::Number(self.font_size).to_css(false)),
            ("font-weight", self.font_weight.to_css(true)),
            ("line-height", self.line_height.to_css(true)),
            ("letter-spacing", self.letter_spacing.to_css(false)),
        ]);
        if !self.selectable {
            declarations.push(("user-select", "none".to_string()));
        }
        declarations
    }

    pub fn inline_style(&self) -> String {
        self.style_declarations()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
