use crate::block::behaviour::Properties;
use crate::block::family::piston::Piston;

crate::six_way_block! {
    variant: StickyPiston,
    id: 29,
    identifier: "sticky_piston",
    name: STICKY_PISTON,
    flag: EXTENDED,
    default: UP,
    block_properties: Properties::new().with_strength(0.5, 2.5)
}

impl Piston for StickyPiston {}
