use serde::Serialize;

/// Physical values shared by every state of a block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Properties {
    /// Mining hardness, `-1.0` for unbreakable blocks.
    pub hardness: f32,
    pub blast_resistance: f32,
    pub light_emission: u8,
    pub is_air: bool,
    pub has_collision: bool,
    pub replaceable: bool,
    pub flammable: bool,
    pub requires_correct_tool_for_drops: bool,
}

impl Properties {
    pub const fn new() -> Self {
        Properties {
            hardness: 0.0,
            blast_resistance: 0.0,
            light_emission: 0,
            is_air: false,
            has_collision: true,
            replaceable: false,
            flammable: false,
            requires_correct_tool_for_drops: false,
        }
    }

    pub const fn with_strength(self, hardness: f32, blast_resistance: f32) -> Self {
        self.with_hardness(hardness)
            .with_blast_resistance(blast_resistance)
    }

    pub const fn with_hardness(mut self, value: f32) -> Self {
        self.hardness = value;
        self
    }

    pub const fn with_blast_resistance(mut self, value: f32) -> Self {
        self.blast_resistance = value.max(0.0);
        self
    }

    pub const fn instant_break(self) -> Self {
        self.with_hardness(0.0).with_blast_resistance(0.0)
    }

    pub const fn unbreakable(self) -> Self {
        self.with_hardness(-1.0).with_blast_resistance(18_000_000.0)
    }

    pub const fn with_light(mut self, level: u8) -> Self {
        self.light_emission = if level > 15 { 15 } else { level };
        self
    }

    pub const fn air(mut self) -> Self {
        self.is_air = true;
        self.no_collision().replaceable()
    }

    pub const fn no_collision(mut self) -> Self {
        self.has_collision = false;
        self
    }

    pub const fn replaceable(mut self) -> Self {
        self.replaceable = true;
        self
    }

    pub const fn flammable(mut self) -> Self {
        self.flammable = true;
        self
    }

    pub const fn requires_correct_tool_for_drops(mut self) -> Self {
        self.requires_correct_tool_for_drops = true;
        self
    }

    pub fn is_unbreakable(&self) -> bool {
        self.hardness < 0.0
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        const STONE: Properties = Properties::new()
            .with_strength(1.5, 30.0)
            .requires_correct_tool_for_drops();
        assert_eq!(STONE.hardness, 1.5);
        assert_eq!(STONE.blast_resistance, 30.0);
        assert!(STONE.requires_correct_tool_for_drops);
        assert!(STONE.has_collision);

        const AIR: Properties = Properties::new().air();
        assert!(AIR.is_air && AIR.replaceable && !AIR.has_collision);

        const BEDROCK: Properties = Properties::new().unbreakable();
        assert!(BEDROCK.is_unbreakable());
        assert_eq!(Properties::new().with_light(40).light_emission, 15);
    }
}
