// SPDX-License-Identifier: MIT

//!
//! The colour type, and the colour forms accepted in settings
//!

use image::Rgba;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can arise when turning a setting into a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    /// Not a known colour name
    #[error("Unknown colour name `{0}`")]
    UnknownName(String),

    /// Looked like a hex colour but isn't one
    #[error("Invalid hex colour `{0}`")]
    InvalidHex(String),
}

/// The `Colour` type
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl From<Colour> for [u8; 3] {
    fn from(value: Colour) -> Self {
        [value.r, value.g, value.b]
    }
}

impl From<[u8; 3]> for Colour {
    fn from(value: [u8; 3]) -> Self {
        Colour::from_rgb(value[0], value[1], value[2])
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(value: Colour) -> Self {
        Rgba([value.r, value.g, value.b, u8::MAX])
    }
}

impl Colour {
    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let original = hex_colour.into();
        let hex_colour = original.trim().trim_start_matches('#');
        let invalid = || ColourError::InvalidHex(original.clone());

        let hex_colour = match hex_colour.len() {
            6 => hex_colour,
            8 => &hex_colour[0..6],
            _ => return Err(invalid()),
        };
        if !hex_colour.is_ascii() {
            return Err(invalid());
        }

        let r = u8::from_str_radix(&hex_colour[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&hex_colour[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&hex_colour[4..6], 16).map_err(|_| invalid())?;
        Ok(Colour::from_rgb(r, g, b))
    }

    /// Look up a named colour (the CSS colour keywords, case insensitive)
    pub fn from_name(name: &str) -> Result<Self, ColourError> {
        let key = name.trim().to_ascii_lowercase();
        NAMED_COLOURS
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, rgb)| Colour::from(*rgb))
            .ok_or_else(|| ColourError::UnknownName(name.to_string()))
    }

    /// Parse a colour written either as a name or as a `#` prefixed hex value
    pub fn parse(value: &str) -> Result<Self, ColourError> {
        if value.trim().starts_with('#') {
            Colour::from_hex(value)
        } else {
            Colour::from_name(value)
        }
    }

    /// Blend the colour over `pixel`, where `coverage` is the colour's opacity
    /// (`0.0` leaves the pixel untouched, `1.0` replaces it)
    pub fn blend_onto(&self, pixel: &mut Rgba<u8>, coverage: f32) {
        let coverage = coverage.clamp(0.0, 1.0);
        let Rgba([r, g, b, a]) = *pixel;
        let mix = |over: u8, under: u8| -> u8 {
            let mixed = f32::from(over) * coverage + f32::from(under) * (1.0 - coverage);
            mixed.round().clamp(0.0, 255.0) as u8
        };
        let alpha = f32::from(a) + (255.0 - f32::from(a)) * coverage;
        *pixel = Rgba([
            mix(self.r, r),
            mix(self.g, g),
            mix(self.b, b),
            alpha.round().clamp(0.0, 255.0) as u8,
        ]);
    }
}

/// A colour as it may be written in settings: a name (`"white"`), a hex value
/// (`"#ffffff"`), or RGB channels (`[255, 255, 255]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColourSetting {
    Rgb([u8; 3]),
    Text(String),
}

impl TryFrom<&ColourSetting> for Colour {
    type Error = ColourError;
    fn try_from(value: &ColourSetting) -> Result<Self, Self::Error> {
        match value {
            ColourSetting::Rgb(rgb) => Ok(Colour::from(*rgb)),
            ColourSetting::Text(text) => Colour::parse(text),
        }
    }
}

/// The CSS colour keywords
#[rustfmt::skip]
const NAMED_COLOURS: &[(&str, [u8; 3])] = &[
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightslategrey", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hex() {
        assert_eq!(Colour::from_hex("#ab66ef"), Ok(Colour::from_rgb(0xab, 0x66, 0xef)));
        assert_eq!(Colour::from_hex("ab66ef"), Ok(Colour::from_rgb(0xab, 0x66, 0xef)));
        assert_eq!(Colour::from_hex("#ab66efff"), Ok(Colour::from_rgb(0xab, 0x66, 0xef)));
        assert!(Colour::from_hex("#ab66e").is_err());
        assert!(Colour::from_hex("#zz66ef").is_err());
        assert!(Colour::from_hex("#ä6ef1").is_err());
    }

    #[test]
    fn from_name() {
        assert_eq!(Colour::from_name("black"), Ok(Colour::from_rgb(0, 0, 0)));
        assert_eq!(Colour::from_name(" White "), Ok(Colour::from_rgb(255, 255, 255)));
        assert_eq!(
            Colour::from_name("not-a-colour"),
            Err(ColourError::UnknownName("not-a-colour".to_string()))
        );
    }

    #[test]
    fn setting_forms_normalise_to_the_same_colour() {
        let named = ColourSetting::Text("gold".to_string());
        let hex = ColourSetting::Text("#ffd700".to_string());
        let rgb = ColourSetting::Rgb([255, 215, 0]);
        let expected = Colour::from_rgb(255, 215, 0);
        assert_eq!(Colour::try_from(&named), Ok(expected));
        assert_eq!(Colour::try_from(&hex), Ok(expected));
        assert_eq!(Colour::try_from(&rgb), Ok(expected));
    }

    #[test]
    fn blend_onto() {
        let white = Colour::from_rgb(255, 255, 255);

        let mut pixel = Rgba([0, 0, 0, 255]);
        white.blend_onto(&mut pixel, 1.0);
        assert_eq!(pixel, Rgba([255, 255, 255, 255]));

        let mut pixel = Rgba([0, 0, 0, 255]);
        white.blend_onto(&mut pixel, 0.0);
        assert_eq!(pixel, Rgba([0, 0, 0, 255]));

        let mut pixel = Rgba([0, 0, 0, 255]);
        white.blend_onto(&mut pixel, 0.5);
        assert_eq!(pixel, Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn names_are_lowercase_and_unique() {
        for (index, (name, _)) in NAMED_COLOURS.iter().enumerate() {
            assert_eq!(*name, name.to_ascii_lowercase());
            assert!(!NAMED_COLOURS[index + 1..].iter().any(|(other, _)| other == name));
        }
    }
}
