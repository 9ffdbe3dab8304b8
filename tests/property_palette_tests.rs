use kumo_charts::core::{ChartPalette, SemanticColor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn shade_lightness_stays_within_bounds(
        red in 0u8..=255,
        green in 0u8..=255,
        blue in 0u8..=255,
        index in -1_000i64..1_000,
        count in 0usize..64
    ) {
        let hex = format!("#{red:02x}{green:02x}{blue:02x}");
        let shade = ChartPalette::shade(&hex, index, count).expect("valid hex");
        prop_assert!((42..=72).contains(&shade.lightness_pct));
        prop_assert!(shade.hue <= 360);
        prop_assert!(shade.saturation_pct <= 100);
    }

    #[test]
    fn shade_is_periodic_in_index(index in -500i64..500, count in 1usize..32) {
        let base = ChartPalette::orange_shade(index, count);
        let shifted = ChartPalette::orange_shade(index + count as i64, count);
        prop_assert_eq!(base, shifted);
    }

    #[test]
    fn shades_darken_monotonically(count in 2usize..32) {
        let lightness: Vec<u8> = (0..count as i64)
            .map(|i| ChartPalette::blue_shade(i, count).lightness_pct)
            .collect();
        prop_assert!(lightness.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(lightness[0], 72);
        prop_assert_eq!(lightness[count - 1], 42);
    }

    #[test]
    fn categorical_has_period_ten(index in -10_000i64..10_000, dark in any::<bool>()) {
        prop_assert_eq!(
            ChartPalette::categorical(index, dark),
            ChartPalette::categorical(index + 10, dark)
        );
    }

    #[test]
    fn dark_semantic_appends_opacity_suffix(i in 0usize..6) {
        let color = SemanticColor::ALL[i];
        let light = ChartPalette::semantic(color, false);
        prop_assert_eq!(format!("{light}E6"), ChartPalette::semantic(color, true));
    }
}
