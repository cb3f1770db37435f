use crate::block::BlockVariant;
use crate::block::behaviour::Properties;

/// Set once an eye of ender has been inserted.
pub const EYE: u8 = 0x4;

crate::generate_block_states! {
    variant: EndPortalFrame,
    id: 120,
    identifier: "end_portal_frame",
    name: ENDER_PORTAL_FRAME,
    states: {
        ENDER_PORTAL_FRAME_SOUTH = "SOUTH" => 0x0,
        ENDER_PORTAL_FRAME_WEST = "WEST" => 0x1,
        ENDER_PORTAL_FRAME_NORTH = "NORTH" => 0x2,
        ENDER_PORTAL_FRAME_EAST = "EAST" => 0x3,
        ENDER_PORTAL_FRAME_EYE_SOUTH = "EYE_SOUTH" => 0x4,
        ENDER_PORTAL_FRAME_EYE_WEST = "EYE_WEST" => 0x5,
        ENDER_PORTAL_FRAME_EYE_NORTH = "EYE_NORTH" => 0x6,
        ENDER_PORTAL_FRAME_EYE_EAST = "EYE_EAST" => 0x7,
    },
    default: ENDER_PORTAL_FRAME_SOUTH,
    block_properties: Properties::new().unbreakable().with_light(1)
}

crate::impl_directional!(
    EndPortalFrame,
    mask: 0x3,
    data: crate::block::family::horizontal_data,
    face: crate::block::family::horizontal_face
);

impl EndPortalFrame {
    #[inline]
    pub fn has_eye(self) -> bool {
        self.0 & EYE != 0
    }

    pub fn with_eye(self, eye: bool) -> Self {
        Self::resolve(if eye { self.0 | EYE } else { self.0 & !EYE })
    }
}
