use rust_decimal::Decimal;

/// Reference ellipsoid. Spherical projections only use its semimajor axis as the sphere radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Datum {
    semimajor: Decimal,
}

impl Datum {
    /// WGS84 ellipsoid. Its semimajor axis (6 378 137 m) is the sphere radius of Web Mercator.
    pub const WGS84: Self = Datum {
        semimajor: Decimal::from_parts(6_378_137, 0, 0, false, 0),
    };

    /// Creates a datum with the given semimajor axis in meters.
    pub fn new(semimajor: Decimal) -> Self {
        Self { semimajor }
    }

    /// Semimajor axis in meters.
    pub fn semimajor(&self) -> Decimal {
        self.semimajor
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
