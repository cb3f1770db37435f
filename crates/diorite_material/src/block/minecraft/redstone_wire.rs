use crate::block::behaviour::Properties;

crate::leveled_block! {
    variant: RedstoneWire,
    id: 55,
    identifier: "redstone_wire",
    name: REDSTONE_WIRE,
    level: POWER,
    levels: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
