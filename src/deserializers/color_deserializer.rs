use crate::domain::Color;
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawColor {
            Text(String),
            Rgb(u8, u8, u8),
            Rgba(u8, u8, u8, f64),
        }

        match RawColor::deserialize(deserializer)? {
            RawColor::Text(s) => {
                if let Some(color) = Color::from_name(&s) {
                    return Ok(color);
                }

                let hex = Color::Hex(format!("#{}", s.trim_start_matches('#').to_lowercase()));
                match hex.clone().to_rgba() {
                    Ok(_) => Ok(hex),
                    Err(_) => Err(Error::invalid_value(Unexpected::Str(&s), &"a color name or a 6 or 8-digit hex color")),
                }
            }
            RawColor::Rgb(r, g, b) => Ok(Color::RGB(r, g, b)),
            RawColor::Rgba(r, g, b, a) if (0.0..=1.0).contains(&a) => Ok(Color::RGBA(r, g, b, a)),
            RawColor::Rgba(_, _, _, a) => Err(Error::invalid_value(Unexpected::Float(a), &"an alpha between 0 and 1")),
        }
    }
}
