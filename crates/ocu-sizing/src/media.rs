//! Activated carbon quantity and bag packaging.

use ocu_core::numeric::ceil_to_step;
use ocu_core::units::{Mass, Volume, kg};
use uom::si::volume::cubic_meter;

/// Bulk packing density of the activated carbon, kg/m³.
pub const CARBON_PACKING_DENSITY_KG_M3: f64 = 500.0;

/// Media is supplied in 25 kg bags.
pub const BAG_MASS_KG: u64 = 25;

#[derive(Debug, Clone, Copy)]
pub struct MediaRequirement {
    pub media_volume: Volume,
    pub carbon_mass: Mass,
    /// Carbon mass rounded up to whole bags.
    pub packaged_mass_kg: u64,
}

pub fn size_media(media_volume: Volume) -> MediaRequirement {
    let mass_kg = media_volume.get::<cubic_meter>() * CARBON_PACKING_DENSITY_KG_M3;
    MediaRequirement {
        media_volume,
        carbon_mass: kg(mass_kg),
        packaged_mass_kg: ceil_to_step(mass_kg, BAG_MASS_KG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocu_core::units::m3;
    use uom::si::mass::kilogram;

    #[test]
    fn half_cube_is_ten_bags() {
        let media = size_media(m3(0.5));
        assert_eq!(media.carbon_mass.get::<kilogram>(), 250.0);
        assert_eq!(media.packaged_mass_kg, 250);
    }

    #[test]
    fn partial_bag_rounds_up() {
        // 0.501 m³ → 250.5 kg → 11 bags
        let media = size_media(m3(0.501));
        assert_eq!(media.packaged_mass_kg, 275);
    }

    #[test]
    fn zero_volume_needs_nothing() {
        let media = size_media(m3(0.0));
        assert_eq!(media.carbon_mass.get::<kilogram>(), 0.0);
        assert_eq!(media.packaged_mass_kg, 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use ocu_core::units::m3;
    use proptest::prelude::*;
    use uom::si::mass::kilogram;

    proptest! {
        #[test]
        fn packaged_mass_covers_carbon_mass(volume_m3 in 0.0_f64..100.0) {
            let media = size_media(m3(volume_m3));
            prop_assert_eq!(media.packaged_mass_kg % BAG_MASS_KG, 0);
            // Covering up to the dust the rounding snap absorbs
            prop_assert!(media.packaged_mass_kg as f64 >= media.carbon_mass.get::<kilogram>() - 1e-6);
        }
    }
}
