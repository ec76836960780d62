use crate::domain::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub size_pt: f64,
    pub family: String,
    pub bold: bool,
}

/// How a drawable is rendered by the globe toolkit.
#[derive(Clone, Debug, PartialEq)]
pub enum Symbol {
    /// A filled circle.
    SimpleMarker { color: Color, size_px: f64 },
    Text {
        text: String,
        color: Color,
        halo_color: Color,
        halo_size_px: f64,
        font: Font,
        x_offset_px: f64,
        y_offset_px: f64,
    },
    PictureMarker {
        url: String,
        width_px: f64,
        height_px: f64,
        angle: f64,
        opacity: f64,
    },
    SimpleLine { color: Color, width_px: f64 },
}

impl Symbol {
    pub fn kind(&self) -> &'static str {
        match self {
            Symbol::SimpleMarker { .. } => "simple-marker",
            Symbol::Text { .. } => "text",
            Symbol::PictureMarker { .. } => "picture-marker",
            Symbol::SimpleLine { .. } => "simple-line",
        }
    }

    /// A square picture marker, as used for the plane and cloud icons.
    pub fn picture(url: &str, size_px: f64, opacity: f64) -> Symbol {
        Symbol::PictureMarker {
            url: url.to_string(),
            width_px: size_px,
            height_px: size_px,
            angle: 0.0,
            opacity,
        }
    }

    /// A bold city label with a white halo, drawn up and to the right of its point.
    pub fn label(text: &str, color: Color) -> Symbol {
        Symbol::Text {
            text: text.to_string(),
            color,
            halo_color: Color::RGB(255, 255, 255),
            halo_size_px: 2.0,
            font: Font {
                size_pt: 12.0,
                family: "Arial".to_string(),
                bold: true,
            },
            x_offset_px: 10.0,
            y_offset_px: 20.0,
        }
    }
}
