use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Bedrock,
    id: 7,
    identifier: "bedrock",
    name: BEDROCK,
    block_properties: Properties::new().unbreakable()
}
