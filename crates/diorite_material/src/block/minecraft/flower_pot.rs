use crate::block::behaviour::Properties;

// Data value is the potted plant, not its block id.
crate::kinds_block! {
    variant: FlowerPot,
    id: 140,
    identifier: "flower_pot",
    name: FLOWER_POT,
    kinds: {
        EMPTY => 0,
        POPPY => 1,
        DANDELION => 2,
        OAK_SAPLING => 3,
        SPRUCE_SAPLING => 4,
        BIRCH_SAPLING => 5,
        JUNGLE_SAPLING => 6,
        RED_MUSHROOM => 7,
        BROWN_MUSHROOM => 8,
        CACTUS => 9,
        DEAD_BUSH => 10,
        FERN => 11,
        ACACIA_SAPLING => 12,
        DARK_OAK_SAPLING => 13,
    },
    block_properties: Properties::new().instant_break()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;

    #[test]
    fn named_contents() {
        assert_eq!(FlowerPot::DEFAULT, FLOWER_POT_EMPTY);
        assert_eq!(FlowerPot::by_id(9), Some(FLOWER_POT_CACTUS));
        assert_eq!(FlowerPot::by_name("dark_oak_sapling"), Some(FLOWER_POT_DARK_OAK_SAPLING));
        assert_eq!(FLOWER_POT_FERN.type_name(), "FERN");
        assert_eq!(FlowerPot::by_id(14), None);
        assert_eq!(FlowerPot::used_data_values(), 14);
    }
}
