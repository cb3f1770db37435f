use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::capability::{Directional, Leveled};
use crate::direction::BlockFace;

const AGE_SHIFT: u8 = 2;

// Cocoa pods face the log they hang on: south 0, west 1, north 2, east 3.
// Age 0 to 2 sits in the upper two bits.
crate::generate_block_states! {
    variant: Cocoa,
    id: 127,
    identifier: "cocoa",
    name: COCOA,
    states: {
        COCOA_SOUTH_AGE_0 = "SOUTH_AGE_0" => 0x0,
        COCOA_WEST_AGE_0 = "WEST_AGE_0" => 0x1,
        COCOA_NORTH_AGE_0 = "NORTH_AGE_0" => 0x2,
        COCOA_EAST_AGE_0 = "EAST_AGE_0" => 0x3,
        COCOA_SOUTH_AGE_1 = "SOUTH_AGE_1" => 0x4,
        COCOA_WEST_AGE_1 = "WEST_AGE_1" => 0x5,
        COCOA_NORTH_AGE_1 = "NORTH_AGE_1" => 0x6,
        COCOA_EAST_AGE_1 = "EAST_AGE_1" => 0x7,
        COCOA_SOUTH_AGE_2 = "SOUTH_AGE_2" => 0x8,
        COCOA_WEST_AGE_2 = "WEST_AGE_2" => 0x9,
        COCOA_NORTH_AGE_2 = "NORTH_AGE_2" => 0xA,
        COCOA_EAST_AGE_2 = "EAST_AGE_2" => 0xB,
    },
    default: COCOA_SOUTH_AGE_0,
    block_properties: Properties::new().with_strength(0.2, 3.0)
}

crate::impl_directional!(
    Cocoa,
    mask: 0x3,
    data: crate::block::family::horizontal_data,
    face: crate::block::family::horizontal_face
);

impl Leveled for Cocoa {
    const MAX_LEVEL: u8 = 2;

    #[inline]
    fn level(self) -> u8 {
        self.0 >> AGE_SHIFT
    }

    fn with_level(self, level: u8) -> Self {
        Self::resolve((self.0 & 0x3) | level.min(Self::MAX_LEVEL) << AGE_SHIFT)
    }
}

impl Cocoa {
    pub fn get_cocoa(face: BlockFace, age: u8) -> Self {
        Self::DEFAULT.with_facing(face).with_level(age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_and_age() {
        let pod = Cocoa::get_cocoa(BlockFace::North, 2);
        assert_eq!(pod, COCOA_NORTH_AGE_2);
        assert_eq!(pod.data(), 0xA);
        assert_eq!(pod.level(), 2);
        assert_eq!(pod.facing(), BlockFace::North);
        assert_eq!(COCOA_EAST_AGE_0.with_level(9), COCOA_EAST_AGE_2);
        assert_eq!(COCOA_EAST_AGE_1.with_facing(BlockFace::West), COCOA_WEST_AGE_1);
    }
}
