use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::block::family::cartesian_face;
use crate::block::family::facing::hopper_data;

crate::generate_block_states! {
    variant: Hopper,
    id: 154,
    identifier: "hopper",
    name: HOPPER,
    states: {
        HOPPER_DOWN = "DOWN" => 0x0,
        HOPPER_NORTH = "NORTH" => 0x2,
        HOPPER_SOUTH = "SOUTH" => 0x3,
        HOPPER_WEST = "WEST" => 0x4,
        HOPPER_EAST = "EAST" => 0x5,
        HOPPER_POWERED_DOWN = "POWERED_DOWN" => 0x8,
        HOPPER_POWERED_NORTH = "POWERED_NORTH" => 0xA,
        HOPPER_POWERED_SOUTH = "POWERED_SOUTH" => 0xB,
        HOPPER_POWERED_WEST = "POWERED_WEST" => 0xC,
        HOPPER_POWERED_EAST = "POWERED_EAST" => 0xD,
    },
    default: HOPPER_DOWN,
    block_properties: Properties::new().with_strength(3.0, 8.0).requires_correct_tool_for_drops()
}

crate::impl_directional!(Hopper, mask: 0x7, data: hopper_data, face: cartesian_face);
crate::impl_powerable_flag!(Hopper, 0x8);

impl Hopper {
    pub fn get_hopper(face: crate::direction::BlockFace, powered: bool) -> Self {
        Self::resolve(hopper_data(face) | if powered { 0x8 } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{Directional, Powerable};
    use crate::direction::BlockFace;

    #[test]
    fn cannot_face_up() {
        assert_eq!(Hopper::get_hopper(BlockFace::Up, false), HOPPER_DOWN);
        assert_eq!(HOPPER_POWERED_EAST.with_facing(BlockFace::Up), HOPPER_POWERED_DOWN);
        assert_eq!(HOPPER_WEST.with_powered(true), HOPPER_POWERED_WEST);
        assert_eq!(HOPPER_POWERED_SOUTH.facing(), BlockFace::South);
        assert_eq!(Hopper::by_id(1), None);
    }
}
