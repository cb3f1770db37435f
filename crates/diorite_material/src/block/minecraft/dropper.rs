use crate::block::behaviour::Properties;
use crate::block::family::facing::SIX_WAY_FLAG;

crate::six_way_block! {
    variant: Dropper,
    id: 158,
    identifier: "dropper",
    name: DROPPER,
    flag: TRIGGERED,
    default: NORTH,
    block_properties: Properties::new()
        .with_strength(3.5, 17.5)
        .requires_correct_tool_for_drops()
}

crate::impl_powerable_flag!(Dropper, SIX_WAY_FLAG);
