use crate::block::behaviour::Properties;
use crate::block::family::piston::PistonPart;

crate::six_way_block! {
    variant: PistonHead,
    id: 34,
    identifier: "piston_head",
    name: PISTON_HEAD,
    flag: STICKY,
    default: UP,
    block_properties: Properties::new().with_strength(0.5, 2.5)
}

impl PistonPart for PistonHead {}
