use crate::block::behaviour::Properties;

crate::wall_block! {
    variant: TrappedChest,
    id: 146,
    identifier: "trapped_chest",
    name: TRAPPED_CHEST,
    block_properties: Properties::new()
        .with_strength(2.5, 12.5)
        .flammable()
}
