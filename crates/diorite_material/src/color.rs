use serde::{Deserialize, Serialize};

/// The sixteen dye colors. The discriminant is the wool data value; dye items
/// count the other way round.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DyeColor {
    White = 0,
    Orange = 1,
    Magenta = 2,
    LightBlue = 3,
    Yellow = 4,
    Lime = 5,
    Pink = 6,
    Gray = 7,
    #[serde(alias = "silver")]
    LightGray = 8,
    Cyan = 9,
    Purple = 10,
    Blue = 11,
    Brown = 12,
    Green = 13,
    Red = 14,
    Black = 15,
}

impl DyeColor {
    pub const ALL: [DyeColor; 16] = [
        DyeColor::White,
        DyeColor::Orange,
        DyeColor::Magenta,
        DyeColor::LightBlue,
        DyeColor::Yellow,
        DyeColor::Lime,
        DyeColor::Pink,
        DyeColor::Gray,
        DyeColor::LightGray,
        DyeColor::Cyan,
        DyeColor::Purple,
        DyeColor::Blue,
        DyeColor::Brown,
        DyeColor::Green,
        DyeColor::Red,
        DyeColor::Black,
    ];

    #[inline]
    pub const fn wool_data(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn dye_data(self) -> u8 {
        15 - self as u8
    }

    /// Only the low four bits are used.
    pub const fn from_wool_data(data: u8) -> DyeColor {
        Self::ALL[(data & 0xF) as usize]
    }

    pub const fn from_dye_data(data: u8) -> DyeColor {
        Self::ALL[(15 - (data & 0xF)) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wool_and_dye_orders_are_mirrored() {
        assert_eq!(DyeColor::White.wool_data(), 0);
        assert_eq!(DyeColor::Black.wool_data(), 15);
        assert_eq!(DyeColor::Black.dye_data(), 0);
        assert_eq!(DyeColor::White.dye_data(), 15);
        for color in DyeColor::ALL {
            assert_eq!(DyeColor::from_wool_data(color.wool_data()), color);
            assert_eq!(DyeColor::from_dye_data(color.dye_data()), color);
        }
    }

    #[test]
    fn legacy_name_alias() {
        let color: DyeColor = serde_json::from_str("\"silver\"").unwrap();
        assert_eq!(color, DyeColor::LightGray);
        assert_eq!(
            serde_json::to_string(&DyeColor::LightBlue).unwrap(),
            "\"light_blue\""
        );
    }
}
