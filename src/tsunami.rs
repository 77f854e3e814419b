//! Coastal risk screening for ocean impacts.
//!
//! A naive reporting aid: cities inside a fixed radius of the impact site are
//! listed nearest first, each with an arrival time at a constant wave speed.

use crate::geo::{GeoPoint, haversine_distance};

/// Cities farther than this from the impact site are not at risk (km).
pub const RISK_RADIUS_KM: f64 = 4000.0;

/// Open-ocean tsunami propagation speed (km/h).
pub const WAVE_SPEED_KPH: f64 = 800.0;

/// How many cities a report lists.
pub const REPORTED_CITIES: usize = 5;

/// A named coastal city.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoastalCity {
    pub name: &'static str,
    pub location: GeoPoint,
}

const fn city(name: &'static str, lat: f64, lng: f64) -> CoastalCity {
    CoastalCity {
        name,
        location: GeoPoint { lat, lng },
    }
}

/// Major coastal cities used for screening.
pub static COASTAL_CITIES: &[CoastalCity] = &[
    city("Tokyo", 35.6762, 139.6503),
    city("Shanghai", 31.2304, 121.4737),
    city("Hong Kong", 22.3193, 114.1694),
    city("Singapore", 1.3521, 103.8198),
    city("Mumbai", 19.0760, 72.8777),
    city("Jakarta", -6.2088, 106.8456),
    city("Manila", 14.5995, 120.9842),
    city("Sydney", -33.8688, 151.2093),
    city("Honolulu", 21.3069, -157.8583),
    city("Los Angeles", 34.0522, -118.2437),
    city("San Francisco", 37.7749, -122.4194),
    city("Vancouver", 49.2827, -123.1207),
    city("Lima", -12.0464, -77.0428),
    city("Valparaíso", -33.0472, -71.6127),
    city("Rio de Janeiro", -22.9068, -43.1729),
    city("Miami", 25.7617, -80.1918),
    city("New York", 40.7128, -74.0060),
    city("Lisbon", 38.7223, -9.1393),
    city("London", 51.5074, -0.1278),
    city("Lagos", 6.5244, 3.3792),
    city("Cape Town", -33.9249, 18.4241),
    city("Alexandria", 31.2001, 29.9187),
    city("Dubai", 25.2048, 55.2708),
    city("Auckland", -36.8485, 174.7633),
];

/// A city inside the risk radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CityRisk {
    pub city: CoastalCity,
    pub distance_km: f64,
    /// Naive wave arrival time at [`WAVE_SPEED_KPH`].
    pub travel_time_hours: f64,
}

/// Cities within [`RISK_RADIUS_KM`] of `impact`, nearest first.
pub fn cities_at_risk(impact: &GeoPoint, cities: &[CoastalCity]) -> Vec<CityRisk> {
    let mut at_risk: Vec<CityRisk> = cities
        .iter()
        .map(|city| {
            let distance_km = haversine_distance(impact, &city.location);
            CityRisk {
                city: *city,
                distance_km,
                travel_time_hours: distance_km / WAVE_SPEED_KPH,
            }
        })
        .filter(|risk| risk.distance_km < RISK_RADIUS_KM)
        .collect();

    at_risk.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    at_risk
}

/// Whether the impact hit land or water. Chosen by the user on the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImpactSurface {
    #[default]
    Land,
    Ocean,
}

/// Tsunami screening result.
#[derive(Clone, Debug, PartialEq)]
pub enum TsunamiAssessment {
    /// Land impact, no tsunami.
    LowRisk,
    /// Ocean impact. `cities` may be empty when nothing is in range.
    HighRisk { cities: Vec<CityRisk> },
}

impl TsunamiAssessment {
    /// Screen an impact against the given city table.
    pub fn assess(impact: &GeoPoint, surface: ImpactSurface, cities: &[CoastalCity]) -> Self {
        match surface {
            ImpactSurface::Land => TsunamiAssessment::LowRisk,
            ImpactSurface::Ocean => TsunamiAssessment::HighRisk {
                cities: cities_at_risk(impact, cities),
            },
        }
    }

    /// The nearest cities as shown in a report.
    pub fn top_cities(&self) -> &[CityRisk] {
        match self {
            TsunamiAssessment::LowRisk => &[],
            TsunamiAssessment::HighRisk { cities } => {
                &cities[..cities.len().min(REPORTED_CITIES)]
            }
        }
    }

    pub fn is_high_risk(&self) -> bool {
        matches!(self, TsunamiAssessment::HighRisk { .. })
    }
}
