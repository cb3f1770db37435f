use crate::block::behaviour::Properties;

crate::kinds_block! {
    variant: MonsterEgg,
    id: 97,
    identifier: "monster_egg",
    name: MONSTER_EGG,
    kinds: {
        STONE => 0,
        COBBLESTONE => 1,
        STONE_BRICK => 2,
        MOSSY_STONE_BRICK => 3,
        CRACKED_STONE_BRICK => 4,
        CHISELED_STONE_BRICK => 5,
    },
    block_properties: Properties::new().with_strength(0.75, 3.75)
}
