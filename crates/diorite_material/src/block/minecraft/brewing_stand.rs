use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use bitflags::bitflags;

bitflags! {
    /// Bottle slots holding a bottle.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BottleSlots: u8 {
        const EAST = 0x1;
        const SOUTH_WEST = 0x2;
        const NORTH_WEST = 0x4;
    }
}

crate::generate_block_states! {
    variant: BrewingStand,
    id: 117,
    identifier: "brewing_stand",
    name: BREWING_STAND,
    states: {
        BREWING_STAND_EMPTY = "EMPTY" => 0x0,
        BREWING_STAND_EAST = "EAST" => 0x1,
        BREWING_STAND_SOUTH_WEST = "SOUTH_WEST" => 0x2,
        BREWING_STAND_EAST_SOUTH_WEST = "EAST_SOUTH_WEST" => 0x3,
        BREWING_STAND_NORTH_WEST = "NORTH_WEST" => 0x4,
        BREWING_STAND_EAST_NORTH_WEST = "EAST_NORTH_WEST" => 0x5,
        BREWING_STAND_SOUTH_WEST_NORTH_WEST = "SOUTH_WEST_NORTH_WEST" => 0x6,
        BREWING_STAND_FULL = "FULL" => 0x7,
    },
    default: BREWING_STAND_EMPTY,
    block_properties: Properties::new().with_strength(0.5, 2.5).with_light(1)
}

impl BrewingStand {
    pub fn get_brewing_stand(bottles: BottleSlots) -> Self {
        Self::resolve(bottles.bits())
    }

    #[inline]
    pub fn bottles(self) -> BottleSlots {
        BottleSlots::from_bits_truncate(self.0)
    }

    pub fn with_bottles(self, bottles: BottleSlots) -> Self {
        Self::get_brewing_stand(bottles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottle_slots() {
        assert_eq!(BrewingStand::get_brewing_stand(BottleSlots::all()), BREWING_STAND_FULL);
        assert_eq!(
            BREWING_STAND_EAST_NORTH_WEST.bottles(),
            BottleSlots::EAST | BottleSlots::NORTH_WEST
        );
        assert_eq!(
            BREWING_STAND_FULL.with_bottles(BottleSlots::SOUTH_WEST),
            BREWING_STAND_SOUTH_WEST
        );
    }
}
