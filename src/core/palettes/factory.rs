use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::ramp::{
    Palette, COOL_STOPS, GRAYSCALE_STOPS, HOT_STOPS, PLASMA_STOPS, RAINBOW_STOPS, VIRIDIS_STOPS,
};

#[must_use]
pub fn palette_factory(kind: PaletteKind) -> Palette {
    let stops = match kind {
        PaletteKind::Classic | PaletteKind::Hot => HOT_STOPS,
        PaletteKind::Cool => COOL_STOPS,
        PaletteKind::Viridis => VIRIDIS_STOPS,
        PaletteKind::Plasma => PLASMA_STOPS,
        PaletteKind::Rainbow => RAINBOW_STOPS,
        PaletteKind::Grayscale => GRAYSCALE_STOPS,
    };

    Palette::new(kind, stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::colourize::ports::colour_map::ColourMap;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in PaletteKind::ALL {
            assert_eq!(palette_factory(kind).kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_palette() {
        for &kind in PaletteKind::ALL {
            let palette = palette_factory(kind);
            assert_eq!(palette.display_name(), kind.display_name());
        }
    }

    #[test]
    fn classic_uses_the_hot_ramp() {
        assert_eq!(
            palette_factory(PaletteKind::Classic).stops(),
            palette_factory(PaletteKind::Hot).stops()
        );
    }
}
