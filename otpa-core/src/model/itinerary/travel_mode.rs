use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// travel modes reported on OTP itinerary legs. modes outside the common set,
/// such as `BICYCLE_RENT`, are kept by name in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TravelMode {
    Walk,
    Bicycle,
    Car,
    Tram,
    Subway,
    Rail,
    Bus,
    Ferry,
    CableCar,
    Gondola,
    Funicular,
    Airplane,
    Transit,
    Other(String),
}

impl TravelMode {
    pub const ALL: [TravelMode; 13] = [
        TravelMode::Walk,
        TravelMode::Bicycle,
        TravelMode::Car,
        TravelMode::Tram,
        TravelMode::Subway,
        TravelMode::Rail,
        TravelMode::Bus,
        TravelMode::Ferry,
        TravelMode::CableCar,
        TravelMode::Gondola,
        TravelMode::Funicular,
        TravelMode::Airplane,
        TravelMode::Transit,
    ];

    /// all modes other than walking, in reporting order
    pub fn non_walk() -> impl Iterator<Item = TravelMode> {
        Self::ALL.into_iter().filter(|m| !m.is_walk())
    }

    pub fn is_walk(&self) -> bool {
        matches!(self, TravelMode::Walk)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TravelMode::Walk => "WALK",
            TravelMode::Bicycle => "BICYCLE",
            TravelMode::Car => "CAR",
            TravelMode::Tram => "TRAM",
            TravelMode::Subway => "SUBWAY",
            TravelMode::Rail => "RAIL",
            TravelMode::Bus => "BUS",
            TravelMode::Ferry => "FERRY",
            TravelMode::CableCar => "CABLE_CAR",
            TravelMode::Gondola => "GONDOLA",
            TravelMode::Funicular => "FUNICULAR",
            TravelMode::Airplane => "AIRPLANE",
            TravelMode::Transit => "TRANSIT",
            TravelMode::Other(name) => name,
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let mode = TravelMode::ALL
            .into_iter()
            .find(|m| m.as_str() == upper)
            .unwrap_or(TravelMode::Other(upper));
        Ok(mode)
    }
}

impl From<String> for TravelMode {
    fn from(value: String) -> Self {
        match TravelMode::from_str(&value) {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl From<TravelMode> for String {
    fn from(value: TravelMode) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::TravelMode;
    use std::str::FromStr;

    #[test]
    fn test_serde_names() {
        let mode: TravelMode = serde_json::from_str("\"CABLE_CAR\"").expect("should decode");
        assert_eq!(mode, TravelMode::CableCar);
        assert_eq!(TravelMode::from_str("bus"), Ok(TravelMode::Bus));
        assert!(TravelMode::non_walk().all(|m| m != TravelMode::Walk));
        assert_eq!(TravelMode::non_walk().count(), TravelMode::ALL.len() - 1);
    }

    #[test]
    fn test_unlisted_mode_is_kept_by_name() {
        let mode: TravelMode = serde_json::from_str("\"BICYCLE_RENT\"").expect("should decode");
        assert_eq!(mode, TravelMode::Other(String::from("BICYCLE_RENT")));
        assert!(!mode.is_walk());
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"BICYCLE_RENT\"");
        // listed after the common modes when sorted
        assert!(TravelMode::Transit < mode);
    }
}
