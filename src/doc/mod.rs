mod color;
mod model;
mod plain_text;

pub use color::Rgb;
pub use model::{
    FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN, LINE_HEIGHT_DEFAULT, LINE_HEIGHT_MAX,
    LINE_HEIGHT_MIN, LINE_HEIGHT_STEP, PoemDocument, PoemFont, Template, TextAlign,
};
pub use plain_text::plain_text;
