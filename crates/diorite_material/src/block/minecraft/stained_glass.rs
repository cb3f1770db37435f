use crate::block::behaviour::Properties;

crate::colored_block! {
    variant: StainedGlass,
    id: 95,
    identifier: "stained_glass",
    name: STAINED_GLASS,
    block_properties: Properties::new().with_strength(0.3, 1.5)
}
