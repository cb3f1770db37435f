use crate::block::behaviour::Properties;

crate::colored_block! {
    variant: StainedGlassPane,
    id: 160,
    identifier: "stained_glass_pane",
    name: STAINED_GLASS_PANE,
    block_properties: Properties::new().with_strength(0.3, 1.5)
}
