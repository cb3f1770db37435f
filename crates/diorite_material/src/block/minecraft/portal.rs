use crate::block::behaviour::Properties;
use crate::capability::Axial;
use crate::direction::Axis;

crate::generate_block_states! {
    variant: Portal,
    id: 90,
    identifier: "portal",
    name: PORTAL,
    states: {
        PORTAL_X = "X" => 1,
        PORTAL_Z = "Z" => 2,
    },
    default: PORTAL_X,
    block_properties: Properties::new().with_hardness(-1.0).no_collision().with_light(11)
}

impl Axial for Portal {
    fn axis(self) -> Axis {
        if self.0 == 2 { Axis::Z } else { Axis::X }
    }

    /// Portals stand upright; the vertical axis gives the default state.
    fn with_axis(self, axis: Axis) -> Self {
        match axis {
            Axis::Z => PORTAL_Z,
            _ => PORTAL_X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis() {
        assert_eq!(PORTAL_Z.axis(), Axis::Z);
        assert_eq!(PORTAL_X.with_axis(Axis::Z), PORTAL_Z);
        assert_eq!(PORTAL_Z.with_axis(Axis::Y), PORTAL_X);
        assert_eq!(PORTAL_Z.with_axis(PORTAL_Z.axis()), PORTAL_Z);
    }
}
