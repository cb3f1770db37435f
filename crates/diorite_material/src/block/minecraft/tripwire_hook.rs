use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::block::family::{horizontal_data, horizontal_face};

pub const ATTACHED: u8 = 0x4;
pub const POWERED: u8 = 0x8;

crate::generate_block_states! {
    variant: TripwireHook,
    id: 131,
    identifier: "tripwire_hook",
    name: TRIPWIRE_HOOK,
    states: {
        TRIPWIRE_HOOK_SOUTH = "SOUTH" => 0x0,
        TRIPWIRE_HOOK_WEST = "WEST" => 0x1,
        TRIPWIRE_HOOK_NORTH = "NORTH" => 0x2,
        TRIPWIRE_HOOK_EAST = "EAST" => 0x3,
        TRIPWIRE_HOOK_ATTACHED_SOUTH = "ATTACHED_SOUTH" => 0x4,
        TRIPWIRE_HOOK_ATTACHED_WEST = "ATTACHED_WEST" => 0x5,
        TRIPWIRE_HOOK_ATTACHED_NORTH = "ATTACHED_NORTH" => 0x6,
        TRIPWIRE_HOOK_ATTACHED_EAST = "ATTACHED_EAST" => 0x7,
        TRIPWIRE_HOOK_POWERED_SOUTH = "POWERED_SOUTH" => 0x8,
        TRIPWIRE_HOOK_POWERED_WEST = "POWERED_WEST" => 0x9,
        TRIPWIRE_HOOK_POWERED_NORTH = "POWERED_NORTH" => 0xA,
        TRIPWIRE_HOOK_POWERED_EAST = "POWERED_EAST" => 0xB,
        TRIPWIRE_HOOK_POWERED_ATTACHED_SOUTH = "POWERED_ATTACHED_SOUTH" => 0xC,
        TRIPWIRE_HOOK_POWERED_ATTACHED_WEST = "POWERED_ATTACHED_WEST" => 0xD,
        TRIPWIRE_HOOK_POWERED_ATTACHED_NORTH = "POWERED_ATTACHED_NORTH" => 0xE,
        TRIPWIRE_HOOK_POWERED_ATTACHED_EAST = "POWERED_ATTACHED_EAST" => 0xF,
    },
    default: TRIPWIRE_HOOK_SOUTH,
    block_properties: Properties::new().no_collision()
}

crate::impl_directional!(TripwireHook, mask: 0x3, data: horizontal_data, face: horizontal_face);
crate::impl_powerable_flag!(TripwireHook, POWERED);

impl TripwireHook {
    /// Connected to a hook on the other end of a tripwire.
    #[inline]
    pub fn is_attached(self) -> bool {
        self.0 & ATTACHED != 0
    }

    pub fn with_attached(self, attached: bool) -> Self {
        Self::resolve(if attached {
            self.0 | ATTACHED
        } else {
            self.0 & !ATTACHED
        })
    }
}
