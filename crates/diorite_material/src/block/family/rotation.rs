use crate::direction::BlockFace;

/// Faces off the sixteen-point compass are stored as south.
pub const fn rotation_data(face: BlockFace) -> u8 {
    match face.rotation() {
        Some(rotation) => rotation,
        None => 0,
    }
}

pub const fn rotation_face(data: u8) -> BlockFace {
    BlockFace::from_rotation(data)
}

/// Standing signs and banners.
#[macro_export]
macro_rules! rotation_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        paste::paste! {
            $crate::generate_block_states! {
                variant: $variant,
                id: $id,
                identifier: $identifier,
                name: $name,
                states: {
                    [<$name _SOUTH>] = "SOUTH" => 0,
                    [<$name _SOUTH_SOUTH_WEST>] = "SOUTH_SOUTH_WEST" => 1,
                    [<$name _SOUTH_WEST>] = "SOUTH_WEST" => 2,
                    [<$name _WEST_SOUTH_WEST>] = "WEST_SOUTH_WEST" => 3,
                    [<$name _WEST>] = "WEST" => 4,
                    [<$name _WEST_NORTH_WEST>] = "WEST_NORTH_WEST" => 5,
                    [<$name _NORTH_WEST>] = "NORTH_WEST" => 6,
                    [<$name _NORTH_NORTH_WEST>] = "NORTH_NORTH_WEST" => 7,
                    [<$name _NORTH>] = "NORTH" => 8,
                    [<$name _NORTH_NORTH_EAST>] = "NORTH_NORTH_EAST" => 9,
                    [<$name _NORTH_EAST>] = "NORTH_EAST" => 10,
                    [<$name _EAST_NORTH_EAST>] = "EAST_NORTH_EAST" => 11,
                    [<$name _EAST>] = "EAST" => 12,
                    [<$name _EAST_SOUTH_EAST>] = "EAST_SOUTH_EAST" => 13,
                    [<$name _SOUTH_EAST>] = "SOUTH_EAST" => 14,
                    [<$name _SOUTH_SOUTH_EAST>] = "SOUTH_SOUTH_EAST" => 15,
                },
                default: [<$name _SOUTH>]
                $(, block_properties: $properties)?
            }

            $crate::impl_directional!(
                $variant,
                mask: 0xF,
                data: $crate::block::family::rotation::rotation_data,
                face: $crate::block::family::rotation::rotation_face
            );

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        $crate::block::family::rotation::rotation_data(face),
                    )
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use crate::block::minecraft::standing_banner::*;
    use crate::block::minecraft::standing_sign::{SIGN_POST_SOUTH, SIGN_POST_WEST_NORTH_WEST, SignPost};
    use crate::capability::Directional;

    #[test]
    fn sixteen_points() {
        for face in BlockFace::ALL {
            let sign = SignPost::get_sign_post(face);
            match face.rotation() {
                Some(rotation) => {
                    assert_eq!(sign.data(), rotation);
                    assert_eq!(sign.facing(), face);
                }
                None => assert_eq!(sign, SIGN_POST_SOUTH),
            }
        }
        assert_eq!(SIGN_POST_WEST_NORTH_WEST.data(), 5);
    }

    #[test]
    fn banner_rotation() {
        assert_eq!(
            STANDING_BANNER_SOUTH.with_facing(BlockFace::NorthEast),
            STANDING_BANNER_NORTH_EAST
        );
        assert_eq!(StandingBanner::by_name("east_south_east"), Some(STANDING_BANNER_EAST_SOUTH_EAST));
    }
}
