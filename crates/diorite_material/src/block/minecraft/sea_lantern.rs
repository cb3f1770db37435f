use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: SeaLantern,
    id: 169,
    identifier: "sea_lantern",
    name: SEA_LANTERN,
    block_properties: Properties::new()
        .with_strength(0.3, 1.5)
        .with_light(15)
}
