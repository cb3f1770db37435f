use crate::block::BlockVariant;
use crate::block::behaviour::Properties;

const DAMAGE_SHIFT: u8 = 2;
pub const MAX_DAMAGE: u8 = 2;

// The lower two bits hold the facing (south 0, west 1, north 2, east 3),
// the next two the damage stage.
crate::generate_block_states! {
    variant: Anvil,
    id: 145,
    identifier: "anvil",
    name: ANVIL,
    states: {
        ANVIL_SOUTH = "SOUTH" => 0x0,
        ANVIL_WEST = "WEST" => 0x1,
        ANVIL_NORTH = "NORTH" => 0x2,
        ANVIL_EAST = "EAST" => 0x3,
        ANVIL_SLIGHTLY_DAMAGED_SOUTH = "SLIGHTLY_DAMAGED_SOUTH" => 0x4,
        ANVIL_SLIGHTLY_DAMAGED_WEST = "SLIGHTLY_DAMAGED_WEST" => 0x5,
        ANVIL_SLIGHTLY_DAMAGED_NORTH = "SLIGHTLY_DAMAGED_NORTH" => 0x6,
        ANVIL_SLIGHTLY_DAMAGED_EAST = "SLIGHTLY_DAMAGED_EAST" => 0x7,
        ANVIL_VERY_DAMAGED_SOUTH = "VERY_DAMAGED_SOUTH" => 0x8,
        ANVIL_VERY_DAMAGED_WEST = "VERY_DAMAGED_WEST" => 0x9,
        ANVIL_VERY_DAMAGED_NORTH = "VERY_DAMAGED_NORTH" => 0xA,
        ANVIL_VERY_DAMAGED_EAST = "VERY_DAMAGED_EAST" => 0xB,
    },
    default: ANVIL_SOUTH,
    block_properties: Properties::new().with_strength(5.0, 6000.0).requires_correct_tool_for_drops()
}

crate::impl_directional!(
    Anvil,
    mask: 0x3,
    data: crate::block::family::horizontal_data,
    face: crate::block::family::horizontal_face
);

impl Anvil {
    #[inline]
    pub fn damage(self) -> u8 {
        self.0 >> DAMAGE_SHIFT
    }

    /// Damage past the last stage is clamped to it.
    pub fn with_damage(self, damage: u8) -> Self {
        Self::resolve((self.0 & 0x3) | damage.min(MAX_DAMAGE) << DAMAGE_SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Directional;
    use crate::direction::BlockFace;

    #[test]
    fn damage_keeps_facing() {
        let anvil = ANVIL_EAST.with_damage(1);
        assert_eq!(anvil, ANVIL_SLIGHTLY_DAMAGED_EAST);
        assert_eq!(anvil.damage(), 1);
        assert_eq!(anvil.with_damage(5), ANVIL_VERY_DAMAGED_EAST);
        assert_eq!(anvil.with_facing(BlockFace::North), ANVIL_SLIGHTLY_DAMAGED_NORTH);
        assert_eq!(ANVIL_VERY_DAMAGED_WEST.facing(), BlockFace::West);
    }
}
