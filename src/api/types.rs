//! Shared types for the WASM API
//!
//! Result shapes returned to JavaScript.

use serde::Serialize;

use crate::models::Palette;

/// One palette entry, as listed by `paletteColors`
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub hex: &'static str,
}

impl From<Palette> for PaletteEntry {
    fn from(palette: Palette) -> Self {
        Self {
            name: palette.name(),
            hex: palette.hex(),
        }
    }
}

/// All palette entries in declaration order
pub fn palette_entries() -> Vec<PaletteEntry> {
    Palette::ALL.into_iter().map(PaletteEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_entries() {
        let entries = palette_entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], PaletteEntry { name: "yellow", hex: "#ffeaa7" });
        assert_eq!(entries[5], PaletteEntry { name: "orange", hex: "#feca57" });
    }
}
