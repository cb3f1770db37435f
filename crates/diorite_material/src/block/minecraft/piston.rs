use crate::block::behaviour::Properties;
use crate::block::family::piston::Piston;

crate::six_way_block! {
    variant: NormalPiston,
    id: 33,
    identifier: "piston",
    name: PISTON,
    flag: EXTENDED,
    default: UP,
    block_properties: Properties::new().with_strength(0.5, 2.5)
}

impl Piston for NormalPiston {}
