//! Demo configuration.
//!
//! Configuration is read from JSON. Every field is optional:
//!
//! ```json
//! {
//!     "window": { "title": "Icons", "width": 350, "height": 350 },
//!     "atlas": { "path": "icons.png", "side_count": 4, "overflow": "clamp" },
//!     "font": { "path": "LiberationSans-Regular.ttf", "character": "g" }
//! }
//! ```

use serde::Deserialize;
use std::{fs, path};

use crate::atlas::{AtlasLayout, RowOrder};
use crate::cursor::Overflow;
use crate::error::Result;

/// Window and context settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,

    /// Initial width in pixels.
    pub width: u32,

    /// Initial height in pixels.
    pub height: u32,

    /// Synchronize buffer swaps with the display.
    pub vsync: bool,

    /// Samples per pixel; 0 disables multisampling.
    pub multisampling: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Playground".to_owned(),
            width: 350,
            height: 350,
            vsync: true,
            multisampling: 0,
        }
    }
}

/// Sprite-sheet settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AtlasConfig {
    /// Path to the atlas image.
    pub path: path::PathBuf,

    /// Icons per side of the atlas.
    pub side_count: u32,

    /// Row storage order of the atlas image.
    pub row_order: RowOrder,

    /// Behaviour when stepping past the first or last icon.
    pub overflow: Overflow,
}

impl AtlasConfig {
    /// Validates the settings into an atlas layout.
    pub fn layout(&self) -> Result<AtlasLayout> {
        AtlasLayout::with_row_order(self.side_count, self.row_order)
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            path: "icons.png".into(),
            side_count: 4,
            row_order: RowOrder::default(),
            overflow: Overflow::default(),
        }
    }
}

/// Glyph rasterization settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    /// Path to a TrueType or OpenType font file.
    pub path: path::PathBuf,

    /// The character to rasterize.
    pub character: char,

    /// Font size in pixels.
    pub pixel_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: "/usr/share/fonts/TTF/LiberationSans-Regular.ttf".into(),
            character: 'a',
            pixel_size: 46.0,
        }
    }
}

/// Top-level demo configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window and context settings.
    pub window: WindowConfig,

    /// Sprite-sheet settings, used by the icons demo.
    pub atlas: Option<AtlasConfig>,

    /// Image path, used by the image texture demo.
    pub image: Option<path::PathBuf>,

    /// Glyph settings, used by the font character demo.
    pub font: Option<FontConfig>,
}

impl Config {
    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Reads configuration from a JSON file.
    pub fn load<P>(path: P) -> Result<Self>
        where P: AsRef<path::Path>
    {
        let contents = fs::read_to_string(path.as_ref())?;
        debug!("loaded configuration from {}", path.as_ref().display());
        Self::from_json(&contents)
    }

    /// Reads configuration from `path` if one is given, otherwise returns
    /// `default`.
    pub fn load_or<P>(path: Option<P>, default: Self) -> Result<Self>
        where P: AsRef<path::Path>
    {
        match path {
            Some(path) => Self::load(path),
            None => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_object_takes_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(Config::default(), config);
        assert_eq!(350, config.window.width);
        assert!(config.atlas.is_none());
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let json = r#"{
            "window": { "title": "Icon from Texture Set" },
            "atlas": { "side_count": 8, "overflow": "clamp", "row_order": "bottom_up" }
        }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!("Icon from Texture Set", config.window.title);
        assert_eq!(350, config.window.height);
        let atlas = config.atlas.unwrap();
        assert_eq!(path::PathBuf::from("icons.png"), atlas.path);
        assert_eq!(Overflow::Clamp, atlas.overflow);
        let layout = atlas.layout().unwrap();
        assert_eq!(64, layout.region_count());
        assert_eq!(RowOrder::BottomUp, layout.row_order());
    }

    #[test]
    fn font_section_keeps_unset_fields() {
        let json = r#"{ "font": { "character": "g" } }"#;
        let font = Config::from_json(json).unwrap().font.unwrap();
        assert_eq!('g', font.character);
        assert_eq!(46.0, font.pixel_size);
        assert_eq!(FontConfig::default().path, font.path);
    }

    #[test]
    fn zero_side_count_fails_validation() {
        let config = Config::from_json(r#"{ "atlas": { "side_count": 0 } }"#).unwrap();
        match config.atlas.unwrap().layout() {
            Err(Error::InvalidLayout { side_count: 0 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        match Config::from_json(r#"{ "window": { "width": "wide" } }"#) {
            Err(Error::Json(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        match Config::load("does/not/exist.json") {
            Err(Error::Io(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn no_path_returns_default() {
        let default = Config {
            image: Some("image.png".into()),
            ..Config::default()
        };
        let config = Config::load_or(None::<&str>, default.clone()).unwrap();
        assert_eq!(default, config);
    }
}
