//! Two-block-high doors. The bottom half stores facing and open, the top half
//! stores hinge side and powered, so each attribute only exists on one half.

use crate::block::BlockVariant;
use crate::direction::BlockFace;
use crate::error::MaterialError;

pub const TOP: u8 = 0x8;
pub const OPEN: u8 = 0x4;
pub const HINGE_RIGHT: u8 = 0x1;
pub const POWERED: u8 = 0x2;

/// Faces other than the four horizontal ones are stored as east.
pub const fn facing_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::South => 1,
        BlockFace::West => 2,
        BlockFace::North => 3,
        _ => 0,
    }
}

pub const fn facing(data: u8) -> BlockFace {
    match data & 0x3 {
        0 => BlockFace::East,
        1 => BlockFace::South,
        2 => BlockFace::West,
        _ => BlockFace::North,
    }
}

pub const fn combine_bottom(face: BlockFace, open: bool) -> u8 {
    facing_data(face) | if open { OPEN } else { 0 }
}

pub const fn combine_top(hinge_right: bool, powered: bool) -> u8 {
    TOP | if hinge_right { HINGE_RIGHT } else { 0 } | if powered { POWERED } else { 0 }
}

pub trait Door: BlockVariant {
    fn bottom(face: BlockFace, open: bool) -> Self {
        Self::resolve(combine_bottom(face, open))
    }

    fn top(hinge_right: bool, powered: bool) -> Self {
        Self::resolve(combine_top(hinge_right, powered))
    }

    #[inline]
    fn is_top(self) -> bool {
        self.data() & TOP != 0
    }

    fn facing(self) -> Result<BlockFace, MaterialError> {
        if self.is_top() {
            return self.undefined("facing");
        }
        Ok(facing(self.data()))
    }

    fn is_open(self) -> Result<bool, MaterialError> {
        if self.is_top() {
            return self.undefined("open");
        }
        Ok(self.data() & OPEN != 0)
    }

    fn is_hinge_right(self) -> Result<bool, MaterialError> {
        if !self.is_top() {
            return self.undefined("hinge");
        }
        Ok(self.data() & HINGE_RIGHT != 0)
    }

    fn is_powered(self) -> Result<bool, MaterialError> {
        if !self.is_top() {
            return self.undefined("powered");
        }
        Ok(self.data() & POWERED != 0)
    }

    fn with_facing(self, face: BlockFace) -> Result<Self, MaterialError> {
        let open = self.is_open()?;
        Ok(Self::bottom(face, open))
    }

    fn with_open(self, open: bool) -> Result<Self, MaterialError> {
        let face = self.facing()?;
        Ok(Self::bottom(face, open))
    }

    fn with_hinge_right(self, hinge_right: bool) -> Result<Self, MaterialError> {
        let powered = self.is_powered()?;
        Ok(Self::top(hinge_right, powered))
    }

    fn with_powered(self, powered: bool) -> Result<Self, MaterialError> {
        let hinge_right = self.is_hinge_right()?;
        Ok(Self::top(hinge_right, powered))
    }
}

#[macro_export]
macro_rules! door_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident
        $(, wood: $wood:ident)?
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
                    [<$name _BOTTOM_EAST>] = "BOTTOM_EAST" => 0x0,
                    [<$name _BOTTOM_SOUTH>] = "BOTTOM_SOUTH" => 0x1,
                    [<$name _BOTTOM_WEST>] = "BOTTOM_WEST" => 0x2,
                    [<$name _BOTTOM_NORTH>] = "BOTTOM_NORTH" => 0x3,
                    [<$name _BOTTOM_OPEN_EAST>] = "BOTTOM_OPEN_EAST" => 0x4,
                    [<$name _BOTTOM_OPEN_SOUTH>] = "BOTTOM_OPEN_SOUTH" => 0x5,
                    [<$name _BOTTOM_OPEN_WEST>] = "BOTTOM_OPEN_WEST" => 0x6,
                    [<$name _BOTTOM_OPEN_NORTH>] = "BOTTOM_OPEN_NORTH" => 0x7,
                    [<$name _TOP_LEFT>] = "TOP_LEFT" => 0x8,
                    [<$name _TOP_RIGHT>] = "TOP_RIGHT" => 0x9,
                    [<$name _TOP_LEFT_POWERED>] = "TOP_LEFT_POWERED" => 0xA,
                    [<$name _TOP_RIGHT_POWERED>] = "TOP_RIGHT_POWERED" => 0xB,
                },
                default: [<$name _BOTTOM_EAST>]
                $(, block_properties: $properties)?
            }

            impl $crate::block::family::door::Door for $variant {}

            $($crate::impl_wooden!($variant, $wood);)?

            impl $variant {
                /// Bottom half facing `face`.
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace, open: bool) -> Self {
                    <Self as $crate::block::family::door::Door>::bottom(face, open)
                }

                pub fn [<get_ $name:lower _top>](hinge_right: bool, powered: bool) -> Self {
                    <Self as $crate::block::family::door::Door>::top(hinge_right, powered)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::minecraft::iron_door::{IRON_DOOR_TOP_RIGHT_POWERED, IronDoor};
    use crate::block::minecraft::wooden_door::*;
    use crate::capability::Wooden;
    use crate::wood::WoodType;

    #[test]
    fn oak_door_bottom_open_north() {
        let door = OakDoor::get_oak_door(BlockFace::North, true);
        assert_eq!(door, OAK_DOOR_BOTTOM_OPEN_NORTH);
        assert_eq!(door.data(), 7);
        assert_eq!(door.type_name(), "BOTTOM_OPEN_NORTH");
        assert_eq!(door.legacy_state().0, 64 << 4 | 7);
        assert_eq!(door.wood_type(), WoodType::Oak);
    }

    #[test]
    fn halves_reject_foreign_attributes() {
        let top = OakDoor::get_oak_door_top(true, false);
        assert_eq!(top, OAK_DOOR_TOP_RIGHT);
        assert!(matches!(
            top.facing(),
            Err(MaterialError::UndefinedAttribute { attribute: "facing", .. })
        ));
        assert!(top.is_open().is_err());
        assert!(top.with_open(true).is_err());
        assert_eq!(top.is_hinge_right(), Ok(true));

        let bottom = OAK_DOOR_BOTTOM_WEST;
        assert!(bottom.is_hinge_right().is_err());
        assert!(bottom.is_powered().is_err());
        assert!(bottom.with_powered(true).is_err());
        assert_eq!(bottom.facing(), Ok(BlockFace::West));
    }

    #[test]
    fn mutators_stay_on_their_half() {
        assert_eq!(
            OAK_DOOR_BOTTOM_EAST.with_open(true),
            Ok(OAK_DOOR_BOTTOM_OPEN_EAST)
        );
        assert_eq!(
            OAK_DOOR_BOTTOM_OPEN_EAST.with_facing(BlockFace::North),
            Ok(OAK_DOOR_BOTTOM_OPEN_NORTH)
        );
        assert_eq!(
            OAK_DOOR_BOTTOM_SOUTH.with_facing(BlockFace::Up),
            Ok(OAK_DOOR_BOTTOM_EAST)
        );
        assert_eq!(
            OAK_DOOR_TOP_LEFT.with_powered(true),
            Ok(OAK_DOOR_TOP_LEFT_POWERED)
        );
        assert_eq!(
            IronDoor::get_iron_door_top(true, true),
            IRON_DOOR_TOP_RIGHT_POWERED
        );
    }

    #[test]
    fn every_combination_is_registered() {
        for face in BlockFace::ALL {
            for open in [false, true] {
                assert!(OakDoor::by_id(combine_bottom(face, open)).is_some());
            }
        }
        for hinge in [false, true] {
            for powered in [false, true] {
                assert!(OakDoor::by_id(combine_top(hinge, powered)).is_some());
            }
        }
        assert_eq!(OakDoor::used_data_values(), 12);
    }
}
