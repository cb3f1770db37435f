use crate::block::behaviour::Properties;
use crate::block::family::facing::SIX_WAY_FLAG;

crate::six_way_block! {
    variant: Dispenser,
    id: 23,
    identifier: "dispenser",
    name: DISPENSER,
    flag: TRIGGERED,
    default: NORTH,
    block_properties: Properties::new()
        .with_strength(3.5, 17.5)
        .requires_correct_tool_for_drops()
}

crate::impl_powerable_flag!(Dispenser, SIX_WAY_FLAG);
