use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TripwireFlags: u8 {
        const POWERED = 0x1;
        /// Strung in the air instead of lying on a block.
        const SUSPENDED = 0x2;
        const ATTACHED = 0x4;
        /// Cut with shears.
        const DISARMED = 0x8;
    }
}

crate::generate_block_states! {
    variant: Tripwire,
    id: 132,
    identifier: "tripwire",
    name: TRIPWIRE,
    states: {
        TRIPWIRE_DEFAULT = "DEFAULT" => 0x0,
        TRIPWIRE_POWERED = "POWERED" => 0x1,
        TRIPWIRE_SUSPENDED = "SUSPENDED" => 0x2,
        TRIPWIRE_POWERED_SUSPENDED = "POWERED_SUSPENDED" => 0x3,
        TRIPWIRE_ATTACHED = "ATTACHED" => 0x4,
        TRIPWIRE_POWERED_ATTACHED = "POWERED_ATTACHED" => 0x5,
        TRIPWIRE_SUSPENDED_ATTACHED = "SUSPENDED_ATTACHED" => 0x6,
        TRIPWIRE_POWERED_SUSPENDED_ATTACHED = "POWERED_SUSPENDED_ATTACHED" => 0x7,
        TRIPWIRE_DISARMED = "DISARMED" => 0x8,
        TRIPWIRE_POWERED_DISARMED = "POWERED_DISARMED" => 0x9,
        TRIPWIRE_SUSPENDED_DISARMED = "SUSPENDED_DISARMED" => 0xA,
        TRIPWIRE_POWERED_SUSPENDED_DISARMED = "POWERED_SUSPENDED_DISARMED" => 0xB,
        TRIPWIRE_ATTACHED_DISARMED = "ATTACHED_DISARMED" => 0xC,
        TRIPWIRE_POWERED_ATTACHED_DISARMED = "POWERED_ATTACHED_DISARMED" => 0xD,
        TRIPWIRE_SUSPENDED_ATTACHED_DISARMED = "SUSPENDED_ATTACHED_DISARMED" => 0xE,
        TRIPWIRE_POWERED_SUSPENDED_ATTACHED_DISARMED = "POWERED_SUSPENDED_ATTACHED_DISARMED" => 0xF,
    },
    default: TRIPWIRE_DEFAULT,
    block_properties: Properties::new().no_collision()
}

crate::impl_powerable_flag!(Tripwire, TripwireFlags::POWERED.bits());

impl Tripwire {
    pub fn get_tripwire(flags: TripwireFlags) -> Self {
        Self::resolve(flags.bits())
    }

    #[inline]
    pub fn flags(self) -> TripwireFlags {
        TripwireFlags::from_bits_truncate(self.0)
    }

    pub fn with_flag(self, flag: TripwireFlags, value: bool) -> Self {
        let mut flags = self.flags();
        flags.set(flag, value);
        Self::get_tripwire(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Powerable;

    #[test]
    fn flags() {
        let wire = Tripwire::get_tripwire(TripwireFlags::ATTACHED | TripwireFlags::DISARMED);
        assert_eq!(wire, TRIPWIRE_ATTACHED_DISARMED);
        assert_eq!(wire.with_powered(true), TRIPWIRE_POWERED_ATTACHED_DISARMED);
        assert_eq!(
            wire.with_flag(TripwireFlags::DISARMED, false),
            TRIPWIRE_ATTACHED
        );
        assert!(TRIPWIRE_POWERED.is_powered());
        assert_eq!(Tripwire::used_data_values(), 16);
    }
}
