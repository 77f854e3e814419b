//! Preset scenario definitions.
//!
//! Sizes and speeds are rounded published estimates; they only need to be
//! plausible for teaching.

use super::Scenario;

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[
    CHELYABINSK,
    TUNGUSKA,
    APOPHIS,
    BENNU,
    CHICXULUB,
];

/// 2013 airburst over Chelyabinsk. Small, fast, mostly harmless on the ground.
pub static CHELYABINSK: Scenario = Scenario {
    id: "chelyabinsk",
    name: "Chelyabinsk 2013",
    description: "~20 m airburst at 19 km/s. Shattered windows across a city.",
    diameter_m: 20.0,
    velocity_kps: 19.0,
};

/// 1908 Tunguska event, flattened ~2000 km² of forest.
pub static TUNGUSKA: Scenario = Scenario {
    id: "tunguska",
    name: "Tunguska 1908",
    description: "~60 m body at 15 km/s. Regional devastation.",
    diameter_m: 60.0,
    velocity_kps: 15.0,
};

/// 99942 Apophis, famous for its 2029 close approach.
pub static APOPHIS: Scenario = Scenario {
    id: "apophis",
    name: "99942 Apophis",
    description: "~370 m near-Earth asteroid. Passes inside geostationary orbit in 2029.",
    diameter_m: 370.0,
    velocity_kps: 7.42,
};

/// 101955 Bennu, sampled by OSIRIS-REx.
pub static BENNU: Scenario = Scenario {
    id: "bennu",
    name: "101955 Bennu",
    description: "~490 m rubble pile with a small chance of impact late next century.",
    diameter_m: 490.0,
    velocity_kps: 12.7,
};

/// The end-Cretaceous impactor.
pub static CHICXULUB: Scenario = Scenario {
    id: "chicxulub",
    name: "Chicxulub-class",
    description: "~10 km impactor at 20 km/s. Mass extinction.",
    diameter_m: 10_000.0,
    velocity_kps: 20.0,
};
