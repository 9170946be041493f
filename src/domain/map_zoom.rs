/// Slippy-map zoom level, see https://wiki.openstreetmap.org/wiki/Zoom_levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MapZoom(u8);

impl MapZoom {
    pub const MAX: u8 = 19;
    pub const DEFAULT: Self = Self(13);

    /// Returns `None` for levels the tile servers do not provide
    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::MAX).then_some(Self(level))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for MapZoom {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::map_zoom::MapZoom;

    #[test]
    fn test_new() {
        assert_eq!(MapZoom::new(13), Some(MapZoom::DEFAULT));
        assert_eq!(MapZoom::new(19).map(|z| z.value()), Some(19));
        assert_eq!(MapZoom::new(20), None);
    }
}
