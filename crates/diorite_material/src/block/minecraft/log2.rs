use crate::block::behaviour::Properties;

crate::log_block! {
    variant: Log2,
    id: 162,
    identifier: "log2",
    name: LOG_2,
    wood_offset: 4,
    kinds: {
        ACACIA => 0,
        DARK_OAK => 1,
    },
    block_properties: Properties::new()
        .with_strength(2.0, 10.0)
        .flammable()
}
