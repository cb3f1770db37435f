use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::direction::Axis;

crate::kinds_block! {
    variant: QuartzBlock,
    id: 155,
    identifier: "quartz_block",
    name: QUARTZ_BLOCK,
    kinds: {
        DEFAULT => 0,
        CHISELED => 1,
        PILLAR_VERTICAL => 2,
        PILLAR_EAST_WEST => 3,
        PILLAR_NORTH_SOUTH => 4,
    },
    block_properties: Properties::new().with_strength(0.8, 4.0).requires_correct_tool_for_drops()
}

impl QuartzBlock {
    /// The axis of a pillar, `None` for the other kinds.
    pub fn pillar_axis(self) -> Option<Axis> {
        match self.0 {
            2 => Some(Axis::Y),
            3 => Some(Axis::X),
            4 => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn get_pillar(axis: Axis) -> Self {
        Self::resolve(match axis {
            Axis::Y => 2,
            Axis::X => 3,
            Axis::Z => 4,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillars() {
        assert_eq!(QuartzBlock::get_pillar(Axis::Z), QUARTZ_BLOCK_PILLAR_NORTH_SOUTH);
        assert_eq!(QUARTZ_BLOCK_PILLAR_EAST_WEST.pillar_axis(), Some(Axis::X));
        assert_eq!(QUARTZ_BLOCK_CHISELED.pillar_axis(), None);
        assert_eq!(QuartzBlock::DEFAULT, QUARTZ_BLOCK_DEFAULT);
    }
}
