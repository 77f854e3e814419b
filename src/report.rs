//! Post-impact report.
//!
//! Bundles what the results panel shows after an impact: the estimate, a
//! seismic comparison against well-known events, the crater circle for the
//! map and the tsunami screening.

use std::fmt;

use crate::geo::GeoPoint;
use crate::impact::ImpactEstimate;
use crate::tsunami::{COASTAL_CITIES, ImpactSurface, TsunamiAssessment};
use crate::types::ImpactScenario;

/// A historical seismic event used for scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceEvent {
    pub name: &'static str,
    pub magnitude: f64,
}

/// Reference events shown next to the simulated magnitude.
pub static REFERENCE_EVENTS: &[ReferenceEvent] = &[
    ReferenceEvent {
        name: "Tōhoku 2011",
        magnitude: 9.1,
    },
    ReferenceEvent {
        name: "San Francisco 1906",
        magnitude: 7.9,
    },
    ReferenceEvent {
        name: "Mt. St. Helens 1980",
        magnitude: 5.1,
    },
];

/// Everything shown for one impact.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactReport {
    pub scenario: ImpactScenario,
    pub estimate: ImpactEstimate,
    pub site: GeoPoint,
    pub surface: ImpactSurface,
    pub tsunami: TsunamiAssessment,
}

impl ImpactReport {
    /// Build a report, screening against the built-in city table.
    pub fn build(scenario: ImpactScenario, site: GeoPoint, surface: ImpactSurface) -> Self {
        Self {
            estimate: scenario.estimate(),
            tsunami: TsunamiAssessment::assess(&site, surface, COASTAL_CITIES),
            scenario,
            site,
            surface,
        }
    }

    /// Crater radius in meters for the map circle.
    pub fn crater_radius_m(&self) -> f64 {
        self.estimate.crater_radius_m()
    }

    /// The simulated impact followed by the reference events, for charting.
    pub fn seismic_comparison(&self) -> Vec<(&'static str, f64)> {
        std::iter::once(("Your impact", self.estimate.seismic_magnitude))
            .chain(REFERENCE_EVENTS.iter().map(|e| (e.name, e.magnitude)))
            .collect()
    }

    /// Reference events weaker than this impact.
    pub fn exceeds(&self) -> impl Iterator<Item = &'static ReferenceEvent> + '_ {
        REFERENCE_EVENTS
            .iter()
            .filter(|e| e.magnitude < self.estimate.seismic_magnitude)
    }
}

impl fmt::Display for ImpactReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Impactor: {:.0} m at {:.2} km/s",
            self.scenario.diameter_m(),
            self.scenario.velocity_kps()
        )?;
        writeln!(f, "Site: {:.2}°, {:.2}°", self.site.lat, self.site.lng)?;
        writeln!(
            f,
            "Energy: {:.3e} J ({:.2} Mt TNT)",
            self.estimate.energy_joules, self.estimate.energy_megatons
        )?;
        writeln!(f, "Crater: {:.2} km", self.estimate.crater_diameter_km)?;
        writeln!(f, "Seismic magnitude: {:.2}", self.estimate.seismic_magnitude)?;

        match &self.tsunami {
            TsunamiAssessment::LowRisk => write!(f, "Tsunami: low risk (land impact)"),
            TsunamiAssessment::HighRisk { .. } => {
                write!(f, "Tsunami: high risk (ocean impact)")?;
                let cities = self.tsunami.top_cities();
                if cities.is_empty() {
                    write!(f, "\n  no major coastal cities within range")?;
                }
                for risk in cities {
                    write!(
                        f,
                        "\n  {}: ~{:.1} h ({:.0} km)",
                        risk.city.name, risk.travel_time_hours, risk.distance_km
                    )?;
                }
                Ok(())
            }
        }
    }
}
