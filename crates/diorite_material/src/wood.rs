use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum WoodType {
    Oak = 0,
    Spruce = 1,
    Birch = 2,
    Jungle = 3,
    Acacia = 4,
    DarkOak = 5,
}

impl WoodType {
    pub const ALL: [WoodType; 6] = [
        WoodType::Oak,
        WoodType::Spruce,
        WoodType::Birch,
        WoodType::Jungle,
        WoodType::Acacia,
        WoodType::DarkOak,
    ];

    #[inline]
    pub const fn data(self) -> u8 {
        self as u8
    }

    pub const fn from_data(data: u8) -> Option<WoodType> {
        if (data as usize) < Self::ALL.len() {
            Some(Self::ALL[data as usize])
        } else {
            None
        }
    }
}
