use crate::block::BlockVariant;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RailShape {
    NorthSouth = 0,
    EastWest = 1,
    AscendingEast = 2,
    AscendingWest = 3,
    AscendingNorth = 4,
    AscendingSouth = 5,
    SouthEast = 6,
    SouthWest = 7,
    NorthWest = 8,
    NorthEast = 9,
}

impl RailShape {
    pub const ALL: [RailShape; 10] = [
        RailShape::NorthSouth,
        RailShape::EastWest,
        RailShape::AscendingEast,
        RailShape::AscendingWest,
        RailShape::AscendingNorth,
        RailShape::AscendingSouth,
        RailShape::SouthEast,
        RailShape::SouthWest,
        RailShape::NorthWest,
        RailShape::NorthEast,
    ];

    #[inline]
    pub const fn data(self) -> u8 {
        self as u8
    }

    pub const fn from_data(data: u8) -> Option<RailShape> {
        if (data as usize) < Self::ALL.len() {
            Some(Self::ALL[data as usize])
        } else {
            None
        }
    }

    pub const fn is_curve(self) -> bool {
        self as u8 >= 6
    }

    pub const fn is_ascending(self) -> bool {
        matches!(self as u8, 2..=5)
    }
}

pub trait Rail: BlockVariant {
    /// Bits of the data value that hold the shape.
    const SHAPE_MASK: u8;

    fn shape(self) -> RailShape {
        RailShape::from_data(self.data() & Self::SHAPE_MASK).unwrap_or(RailShape::NorthSouth)
    }

    /// Curves on rails that cannot turn give the default state.
    fn with_shape(self, shape: RailShape) -> Self {
        Self::resolve((self.data() & !Self::SHAPE_MASK) | shape.data())
    }
}

#[macro_export]
macro_rules! rail_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        paste::paste! {
            $crate::generate_block_states! {
                variant: $variant,
                id: $id,
                identifier: $identifier,
                name: $name,
                states: {
                    [<$name _NORTH_SOUTH>] = "NORTH_SOUTH" => 0,
                    [<$name _EAST_WEST>] = "EAST_WEST" => 1,
                    [<$name _ASCENDING_EAST>] = "ASCENDING_EAST" => 2,
                    [<$name _ASCENDING_WEST>] = "ASCENDING_WEST" => 3,
                    [<$name _ASCENDING_NORTH>] = "ASCENDING_NORTH" => 4,
                    [<$name _ASCENDING_SOUTH>] = "ASCENDING_SOUTH" => 5,
                    [<$name _SOUTH_EAST>] = "SOUTH_EAST" => 6,
                    [<$name _SOUTH_WEST>] = "SOUTH_WEST" => 7,
                    [<$name _NORTH_WEST>] = "NORTH_WEST" => 8,
                    [<$name _NORTH_EAST>] = "NORTH_EAST" => 9,
                },
                default: [<$name _NORTH_SOUTH>]
                $(, block_properties: $properties)?
            }

            impl $crate::block::family::rail::Rail for $variant {
                const SHAPE_MASK: u8 = 0xF;
            }

            impl $variant {
                pub fn [<get_ $name:lower>](shape: $crate::block::family::rail::RailShape) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(shape.data())
                }
            }
        }
    };
}

/// Straight-only rails with a powered flag at `0x8`: powered, detector and
/// activator rails.
#[macro_export]
macro_rules! powered_rail_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        paste::paste! {
            $crate::generate_block_states! {
                variant: $variant,
                id: $id,
                identifier: $identifier,
                name: $name,
                states: {
                    [<$name _NORTH_SOUTH>] = "NORTH_SOUTH" => 0x0,
                    [<$name _EAST_WEST>] = "EAST_WEST" => 0x1,
                    [<$name _ASCENDING_EAST>] = "ASCENDING_EAST" => 0x2,
                    [<$name _ASCENDING_WEST>] = "ASCENDING_WEST" => 0x3,
                    [<$name _ASCENDING_NORTH>] = "ASCENDING_NORTH" => 0x4,
                    [<$name _ASCENDING_SOUTH>] = "ASCENDING_SOUTH" => 0x5,
                    [<$name _POWERED_NORTH_SOUTH>] = "POWERED_NORTH_SOUTH" => 0x8,
                    [<$name _POWERED_EAST_WEST>] = "POWERED_EAST_WEST" => 0x9,
                    [<$name _POWERED_ASCENDING_EAST>] = "POWERED_ASCENDING_EAST" => 0xA,
                    [<$name _POWERED_ASCENDING_WEST>] = "POWERED_ASCENDING_WEST" => 0xB,
                    [<$name _POWERED_ASCENDING_NORTH>] = "POWERED_ASCENDING_NORTH" => 0xC,
                    [<$name _POWERED_ASCENDING_SOUTH>] = "POWERED_ASCENDING_SOUTH" => 0xD,
                },
                default: [<$name _NORTH_SOUTH>]
                $(, block_properties: $properties)?
            }

            impl $crate::block::family::rail::Rail for $variant {
                const SHAPE_MASK: u8 = 0x7;
            }

            $crate::impl_powerable_flag!($variant, 0x8);

            impl $variant {
                pub fn [<get_ $name:lower>](shape: $crate::block::family::rail::RailShape, powered: bool) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        shape.data() | if powered { 0x8 } else { 0 },
                    )
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::minecraft::golden_rail::*;
    use crate::block::minecraft::rail::{RAIL_NORTH_EAST, RAIL_NORTH_SOUTH, RegularRail};
    use crate::capability::Powerable;

    #[test]
    fn regular_rail_curves() {
        let rail = RegularRail::get_rail(RailShape::NorthEast);
        assert_eq!(rail, RAIL_NORTH_EAST);
        assert_eq!(rail.data(), 9);
        assert!(rail.shape().is_curve());
        assert_eq!(RAIL_NORTH_SOUTH.with_shape(RailShape::NorthEast), RAIL_NORTH_EAST);
        assert_eq!(RegularRail::used_data_values(), 10);
    }

    #[test]
    fn powered_rail_has_no_curves() {
        let rail = PoweredRail::get_golden_rail(RailShape::AscendingSouth, true);
        assert_eq!(rail, GOLDEN_RAIL_POWERED_ASCENDING_SOUTH);
        assert_eq!(rail.shape(), RailShape::AscendingSouth);
        assert!(rail.is_powered());
        assert_eq!(rail.with_shape(RailShape::EastWest), GOLDEN_RAIL_POWERED_EAST_WEST);
        assert_eq!(rail.with_shape(RailShape::SouthWest), GOLDEN_RAIL_NORTH_SOUTH);
        assert_eq!(PoweredRail::get_golden_rail(RailShape::SouthEast, false), GOLDEN_RAIL_NORTH_SOUTH);
    }
}
