// ABOUTME: Geographic value types for podcast:location.
// ABOUTME: RFC 5870 geo URIs and compact OpenStreetMap feature references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::scalars::finite_decimal;

/// A point on the globe, written as a `geo:` URI (RFC 5870).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Uncertainty radius in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<f64>,
}

impl Geo {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            uncertainty: None,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_uncertainty(mut self, meters: f64) -> Self {
        self.uncertainty = Some(meters);
        self
    }

    /// Renders `geo:<lat>,<lon>[,<alt>][;u=<uncertainty>]` with trailing zeros trimmed.
    /// Fails on NaN or infinite coordinates.
    pub fn to_uri(&self) -> Result<String, EncodeError> {
        const EL: &str = "podcast:location";
        let mut s = format!(
            "geo:{},{}",
            finite_decimal(EL, self.latitude)?,
            finite_decimal(EL, self.longitude)?
        );
        if let Some(alt) = self.altitude {
            s.push(',');
            s.push_str(&finite_decimal(EL, alt)?);
        }
        if let Some(u) = self.uncertainty {
            s.push_str(";u=");
            s.push_str(&finite_decimal(EL, u)?);
        }
        Ok(s)
    }
}

impl FromStr for Geo {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || EncodeError::parse(format!("not a geo URI: {:?}", s));
        let rest = s.trim().strip_prefix("geo:").ok_or_else(bad)?;

        let mut params = rest.split(';');
        let coords = params.next().ok_or_else(bad)?;
        let numbers = coords
            .split(',')
            .map(|n| n.parse::<f64>().map_err(|_| bad()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut geo = match numbers.as_slice() {
            [lat, lon] => Geo::new(*lat, *lon),
            [lat, lon, alt] => Geo::new(*lat, *lon).with_altitude(*alt),
            _ => return Err(bad()),
        };

        for param in params {
            if let Some(u) = param.strip_prefix("u=") {
                geo.uncertainty = Some(u.parse().map_err(|_| bad())?);
            }
        }
        Ok(geo)
    }
}

/// OpenStreetMap element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsmType {
    #[serde(rename = "N")]
    Node,
    #[serde(rename = "W")]
    Way,
    #[serde(rename = "R")]
    Relation,
}

impl OsmType {
    pub fn code(self) -> char {
        match self {
            OsmType::Node => 'N',
            OsmType::Way => 'W',
            OsmType::Relation => 'R',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(OsmType::Node),
            'W' => Some(OsmType::Way),
            'R' => Some(OsmType::Relation),
            _ => None,
        }
    }
}

/// An OpenStreetMap feature reference: `R148838` or `W5013364#2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Osm {
    #[serde(rename = "type")]
    pub kind: OsmType,
    pub feature_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
}

impl Osm {
    pub fn new(kind: OsmType, feature_id: u64) -> Self {
        Self {
            kind,
            feature_id,
            revision: None,
        }
    }

    pub fn with_revision(mut self, revision: u64) -> Self {
        self.revision = Some(revision);
        self
    }
}

impl fmt::Display for Osm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.code(), self.feature_id)?;
        if let Some(rev) = self.revision {
            write!(f, "#{}", rev)?;
        }
        Ok(())
    }
}

impl FromStr for Osm {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || EncodeError::parse(format!("not an OSM reference: {:?}", s));

        let mut chars = s.chars();
        let kind = chars.next().and_then(OsmType::from_code).ok_or_else(bad)?;
        let rest = chars.as_str();

        let (id, revision) = match rest.split_once('#') {
            Some((id, rev)) => (id, Some(rev.parse::<u64>().map_err(|_| bad())?)),
            None => (rest, None),
        };
        let feature_id = id.parse::<u64>().map_err(|_| bad())?;

        Ok(Osm {
            kind,
            feature_id,
            revision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_uri_strips_trailing_zeros() {
        let geo = Geo::new(39.7837304, -100.445882).with_uncertainty(3900000.0);
        assert_eq!(geo.to_uri().unwrap(), "geo:39.7837304,-100.445882;u=3900000");
    }

    #[test]
    fn test_geo_uri_with_altitude() {
        let geo = Geo::new(30.2672, -97.7431).with_altitude(150.0);
        assert_eq!(geo.to_uri().unwrap(), "geo:30.2672,-97.7431,150");
    }

    #[test]
    fn test_geo_rejects_nan() {
        let geo = Geo::new(f64::NAN, 0.0);
        assert!(geo.to_uri().is_err());
    }

    #[test]
    fn test_geo_parse() {
        let geo: Geo = "geo:39.7837304,-100.445882;u=3900000".parse().unwrap();
        assert_eq!(geo, Geo::new(39.7837304, -100.445882).with_uncertainty(3900000.0));
        assert!("39.7,-100.4".parse::<Geo>().is_err());
        assert!("geo:1".parse::<Geo>().is_err());
    }

    #[test]
    fn test_osm_display() {
        assert_eq!(Osm::new(OsmType::Relation, 148838).to_string(), "R148838");
        assert_eq!(
            Osm::new(OsmType::Way, 5013364).with_revision(2).to_string(),
            "W5013364#2"
        );
    }

    #[test]
    fn test_osm_parse() {
        assert_eq!(
            "R113314".parse::<Osm>().unwrap(),
            Osm::new(OsmType::Relation, 113314)
        );
        assert_eq!(
            "n42#7".parse::<Osm>().unwrap(),
            Osm::new(OsmType::Node, 42).with_revision(7)
        );
        assert!("X1".parse::<Osm>().is_err());
        assert!("R".parse::<Osm>().is_err());
    }
}
