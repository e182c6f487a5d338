use std::fmt;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use super::Rgb;

/// Bounds for the font-size stepper, in pixels.
pub const FONT_SIZE_MIN: u32 = 12;
pub const FONT_SIZE_MAX: u32 = 48;
pub const FONT_SIZE_DEFAULT: u32 = 18;

/// Bounds for the line-height stepper (multiplier of the font size).
pub const LINE_HEIGHT_MIN: f32 = 1.0;
pub const LINE_HEIGHT_MAX: f32 = 2.5;
pub const LINE_HEIGHT_STEP: f32 = 0.1;
pub const LINE_HEIGHT_DEFAULT: f32 = 1.6;

/// The complete set of user-editable content and style fields describing one
/// poem presentation. Serialized field names match the draft record format,
/// so saved drafts round-trip every field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoemDocument {
    pub text: String,
    pub title: String,
    #[serde(rename = "poet")]
    pub author: String,
    pub font: PoemFont,
    #[serde(rename = "fontSize")]
    pub font_size_px: u32,
    #[serde(rename = "lineHeight")]
    pub line_height: f32,
    #[serde(rename = "fontColor")]
    pub font_color: Rgb,
    #[serde(rename = "bgColor")]
    pub background_color: Rgb,
    #[serde(rename = "textAlign")]
    pub text_align: TextAlign,
    pub template: Template,
    /// Epoch milliseconds, set at save time.
    pub timestamp: i64,
}

impl Default for PoemDocument {
    fn default() -> Self {
        PoemDocument {
            text: String::new(),
            title: String::new(),
            author: String::new(),
            font: PoemFont::default(),
            font_size_px: FONT_SIZE_DEFAULT,
            line_height: LINE_HEIGHT_DEFAULT,
            font_color: Rgb::DEFAULT_FG,
            background_color: Rgb::DEFAULT_BG,
            text_align: TextAlign::default(),
            template: Template::default(),
            timestamp: 0,
        }
    }
}

impl PoemDocument {
    /// Clamps the bounded numeric fields back into their control ranges.
    /// Applied after loading a draft so out-of-range stored values cannot
    /// push the steppers outside their bounds.
    pub fn clamp_ranges(&mut self) {
        self.font_size_px = self.font_size_px.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        self.line_height = self.line_height.clamp(LINE_HEIGHT_MIN, LINE_HEIGHT_MAX);
    }

    /// Value shown next to the font-size stepper.
    pub fn font_size_display(&self) -> String {
        format!("{}px", self.font_size_px)
    }

    /// Value shown next to the line-height stepper.
    pub fn line_height_display(&self) -> String {
        format!("{:.1}", self.line_height)
    }
}

/// Typeface choices offered by the editor. Each resolves to a system font
/// file at startup (see `gui::renderer::fonts`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoemFont {
    #[default]
    Serif,
    SerifItalic,
    Sans,
    Mono,
}

impl PoemFont {
    pub const ALL: [PoemFont; 4] = [
        PoemFont::Serif,
        PoemFont::SerifItalic,
        PoemFont::Sans,
        PoemFont::Mono,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PoemFont::Serif => "Serif",
            PoemFont::SerifItalic => "Serif Italic",
            PoemFont::Sans => "Sans",
            PoemFont::Mono => "Typewriter",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub const ALL: [TextAlign; 4] = [
        TextAlign::Left,
        TextAlign::Center,
        TextAlign::Right,
        TextAlign::Justify,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextAlign::Left => "Left",
            TextAlign::Center => "Center",
            TextAlign::Right => "Right",
            TextAlign::Justify => "Justify",
        }
    }
}

/// Background template presets. Anything other than `None` visually
/// overrides the manual background color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    None,
    Gradient1,
    Gradient2,
    Gradient3,
    Gradient4,
    Paper,
}

impl Template {
    pub const ALL: [Template; 6] = [
        Template::None,
        Template::Gradient1,
        Template::Gradient2,
        Template::Gradient3,
        Template::Gradient4,
        Template::Paper,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Template::None => "None",
            Template::Gradient1 => "Dawn",
            Template::Gradient2 => "Dusk",
            Template::Gradient3 => "Meadow",
            Template::Gradient4 => "Ocean",
            Template::Paper => "Paper",
        }
    }

    fn from_record(raw: &str) -> Template {
        match raw {
            "gradient1" => Template::Gradient1,
            "gradient2" => Template::Gradient2,
            "gradient3" => Template::Gradient3,
            "gradient4" => Template::Gradient4,
            "paper" => Template::Paper,
            // Stored values that match no known option load as None.
            _ => Template::None,
        }
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Template::from_record(&raw))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
