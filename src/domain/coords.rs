use serde::{Deserialize, Serialize};

/// A latitude-longitude pair, serialized as `[lat, lng]`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coords(f64, f64);

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self(lat, lng)
    }

    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::coords::Coords;

    #[test]
    fn test_serde() {
        let coords = Coords::new(50.927, -11.5);
        let json = serde_json::to_string(&coords).unwrap();
        assert_eq!(json, "[50.927,-11.5]");
        assert_eq!(serde_json::from_str::<Coords>(&json).unwrap(), coords);
    }
}
