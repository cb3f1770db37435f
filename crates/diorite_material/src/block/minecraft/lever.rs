use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::block::family::facing::{LEVER_POWERED, lever_along_x, lever_data, lever_face};
use crate::capability::Directional;
use crate::direction::BlockFace;

crate::generate_block_states! {
    variant: Lever,
    id: 69,
    identifier: "lever",
    name: LEVER,
    states: {
        LEVER_DOWN_X = "DOWN_X" => 0x0,
        LEVER_EAST = "EAST" => 0x1,
        LEVER_WEST = "WEST" => 0x2,
        LEVER_SOUTH = "SOUTH" => 0x3,
        LEVER_NORTH = "NORTH" => 0x4,
        LEVER_UP_Z = "UP_Z" => 0x5,
        LEVER_UP_X = "UP_X" => 0x6,
        LEVER_DOWN_Z = "DOWN_Z" => 0x7,
        LEVER_POWERED_DOWN_X = "POWERED_DOWN_X" => 0x8,
        LEVER_POWERED_EAST = "POWERED_EAST" => 0x9,
        LEVER_POWERED_WEST = "POWERED_WEST" => 0xA,
        LEVER_POWERED_SOUTH = "POWERED_SOUTH" => 0xB,
        LEVER_POWERED_NORTH = "POWERED_NORTH" => 0xC,
        LEVER_POWERED_UP_Z = "POWERED_UP_Z" => 0xD,
        LEVER_POWERED_UP_X = "POWERED_UP_X" => 0xE,
        LEVER_POWERED_DOWN_Z = "POWERED_DOWN_Z" => 0xF,
    },
    default: LEVER_UP_Z,
    block_properties: Properties::new().with_strength(0.5, 2.5).no_collision()
}

impl Directional for Lever {
    #[inline]
    fn facing(self) -> BlockFace {
        lever_face(self.0)
    }

    /// Floor and ceiling levers keep the axis their handle swings along.
    fn with_facing(self, face: BlockFace) -> Self {
        Self::resolve(lever_data(face, lever_along_x(self.0)) | (self.0 & LEVER_POWERED))
    }
}

crate::impl_powerable_flag!(Lever, LEVER_POWERED);

impl Lever {
    pub fn get_lever(face: BlockFace, powered: bool) -> Self {
        Self::resolve(lever_data(face, false) | if powered { LEVER_POWERED } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Powerable;

    #[test]
    fn orientation_and_power() {
        assert_eq!(Lever::get_lever(BlockFace::Up, false), LEVER_UP_Z);
        assert_eq!(Lever::get_lever(BlockFace::Down, true), LEVER_POWERED_DOWN_Z);
        assert_eq!(LEVER_UP_X.with_facing(BlockFace::Down), LEVER_DOWN_X);
        assert_eq!(LEVER_POWERED_EAST.with_facing(BlockFace::North), LEVER_POWERED_NORTH);
        assert_eq!(LEVER_NORTH.with_powered(true), LEVER_POWERED_NORTH);
        assert_eq!(LEVER_DOWN_Z.facing(), BlockFace::Down);
    }
}
