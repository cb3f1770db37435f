use crate::block::behaviour::Properties;
use crate::block::family::piston::PistonPart;

crate::six_way_block! {
    variant: MovingPiston,
    id: 36,
    identifier: "piston_extension",
    name: PISTON_MOVING_PIECE,
    flag: STICKY,
    default: UP,
    block_properties: Properties::new()
        .unbreakable()
        .no_collision()
}

impl PistonPart for MovingPiston {}
