use crate::block::behaviour::Properties;

crate::powerable_block! {
    variant: CommandBlock,
    id: 137,
    identifier: "command_block",
    name: COMMAND,
    flag: TRIGGERED,
    block_properties: Properties::new().unbreakable()
}
