use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: GlassPane,
    id: 102,
    identifier: "glass_pane",
    name: GLASS_PANE,
    block_properties: Properties::new().with_strength(0.3, 1.5)
}
