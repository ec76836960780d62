use crate::domain::color::Color::{Hex, RGB, RGBA};
use thiserror::Error;

#[derive(PartialEq, Clone, Debug)]
pub enum Color {
    RGB(u8, u8, u8),
    /// Alpha is in the range [0, 1].
    RGBA(u8, u8, u8, f64),
    Hex(String),
}

impl Color {
    /// Looks up one of the CSS color keywords used by the globe symbols.
    pub fn from_name(name: &str) -> Option<Color> {
        let rgb = match name.to_lowercase().as_str() {
            "black" => RGB(0, 0, 0),
            "white" => RGB(255, 255, 255),
            "red" => RGB(255, 0, 0),
            "green" => RGB(0, 128, 0),
            "blue" => RGB(0, 0, 255),
            "yellow" => RGB(255, 255, 0),
            "cyan" => RGB(0, 255, 255),
            "magenta" => RGB(255, 0, 255),
            "orange" => RGB(255, 165, 0),
            "gray" | "grey" => RGB(128, 128, 128),
            _ => return None,
        };
        Some(rgb)
    }

    pub fn to_hex(self) -> Color {
        match self {
            RGB(r, g, b) => Hex(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            RGBA(r, g, b, a) => Hex(format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha_to_u8(a))),
            Hex(_) => self,
        }
    }

    pub fn to_rgba(self) -> Result<Color, ColorConversionError> {
        match self {
            RGB(r, g, b) => Ok(RGBA(r, g, b, 1.0)),
            RGBA(_, _, _, _) => Ok(self),
            Hex(value) => hex_to_rgba(&value),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.clone().to_hex() {
            Hex(value) => write!(f, "{}", value),
            other => write!(f, "{:?}", other),
        }
    }
}

#[derive(Error, Debug)]
pub enum ColorConversionError {
    #[error("invalid hexadecimal value '{0}'")]
    InvalidHexFormat(String),
}

fn alpha_to_u8(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hex_to_rgba(hex: &str) -> Result<Color, ColorConversionError> {
    let hex = hex.trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorConversionError::InvalidHexFormat(hex.to_string()));
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorConversionError::InvalidHexFormat(hex.to_string()));
    let alpha = if hex.len() == 8 { channel(6)? as f64 / 255.0 } else { 1.0 };

    Ok(RGBA(channel(0)?, channel(2)?, channel(4)?, alpha))
}
