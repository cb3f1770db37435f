use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: RedFlower,
    id: 38,
    identifier: "red_flower",
    name: RED_FLOWER,
    kinds: {
        POPPY => 0,
        BLUE_ORCHID => 1,
        ALLIUM => 2,
        AZURE_BLUET => 3,
        RED_TULIP => 4,
        ORANGE_TULIP => 5,
        WHITE_TULIP => 6,
        PINK_TULIP => 7,
        OXEYE_DAISY => 8,
    },
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
