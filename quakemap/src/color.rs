use serde::{Deserialize, Serialize};

/// Color representation.
///
/// Colors are serialized as CSS color strings: the CSS keyword for the named constants of this
/// type and `#RRGGBBAA` for everything else.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::from_css(&value).unwrap_or(Color::rgba(0, 0, 0, 255))
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_css()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// CSS keywords of the colors used by the map, in the order of magnitude buckets.
const NAMED_COLORS: [(&str, Color); 8] = [
    ("red", Color::RED),
    ("orange", Color::ORANGE),
    ("gold", Color::GOLD),
    ("yellow", Color::YELLOW),
    ("yellowgreen", Color::YELLOW_GREEN),
    ("greenyellow", Color::GREEN_YELLOW),
    ("blue", Color::BLUE),
    ("white", Color::WHITE),
];

impl Color {
    /// Red color: `#FF0000FF`
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Orange color: `#FFA500FF`
    pub const ORANGE: Color = Color::rgba(255, 165, 0, 255);
    /// Gold color: `#FFD700FF`
    pub const GOLD: Color = Color::rgba(255, 215, 0, 255);
    /// Yellow color: `#FFFF00FF`
    pub const YELLOW: Color = Color::rgba(255, 255, 0, 255);
    /// Yellow-green color: `#9ACD32FF`
    pub const YELLOW_GREEN: Color = Color::rgba(154, 205, 50, 255);
    /// Green-yellow color: `#ADFF2FFF`
    pub const GREEN_YELLOW: Color = Color::rgba(173, 255, 47, 255);
    /// Blue color: `#0000FFFF`
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// CSS keyword of the color, if it is one of the named constants.
    pub fn css_name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }

    /// Converts the color into a CSS color value, preferring the keyword form.
    pub fn to_css(&self) -> String {
        match self.css_name() {
            Some(name) => name.to_string(),
            None => self.to_hex(),
        }
    }

    /// Parses a CSS keyword known to this type or a hex string.
    pub fn from_css(value: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|(_, color)| *color)
            .or_else(|| Self::try_from_hex(value))
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        if hex_string.len() != 7 && hex_string.len() != 9 || !hex_string.starts_with('#') {
            return None;
        }

        let r = u8::from_str_radix(hex_string.get(1..3)?, 16).ok()?;
        let g = u8::from_str_radix(hex_string.get(3..5)?, 16).ok()?;
        let b = u8::from_str_radix(hex_string.get(5..7)?, 16).ok()?;
        let a = if hex_string.len() == 9 {
            u8::from_str_radix(hex_string.get(7..9)?, 16).ok()?
        } else {
            255
        };

        Some(Self { r, g, b, a })
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_use_css_keywords() {
        assert_eq!(Color::GOLD.to_css(), "gold");
        assert_eq!(Color::GREEN_YELLOW.to_string(), "greenyellow");
        assert_eq!(Color::from_css("YellowGreen"), Some(Color::YELLOW_GREEN));
    }

    #[test]
    fn unnamed_colors_use_hex() {
        let color = Color::RED.with_alpha(0x80);
        assert_eq!(color.css_name(), None);
        assert_eq!(color.to_css(), "#FF000080");
        assert_eq!(Color::from_css("#FF000080"), Some(color));
    }

    #[test]
    fn color_serialization() {
        let json = serde_json::to_string(&Color::ORANGE).unwrap();
        assert_eq!(json, "\"orange\"");
        let color: Color = serde_json::from_str("\"#9ACD32\"").unwrap();
        assert_eq!(color, Color::YELLOW_GREEN);
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert_eq!(Color::try_from_hex("FF0000"), None);
        assert_eq!(Color::try_from_hex("#GG0000"), None);
        assert_eq!(Color::try_from_hex("#ÄÄÄ0"), None);
    }
}
