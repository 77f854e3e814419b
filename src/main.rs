//! AstroStrike - headless impact run
//!
//! Runs one preset through the approach simulation in real time, then logs
//! the impact report (or the miss).
//!
//! Usage: `astrostrike [preset-id] [impulse] [ocean]`

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use astrostrike::collision::ImpactEvent;
use astrostrike::outcome::is_escaping;
use astrostrike::physics::{
    ActiveApproach, ApproachPlugin, ApproachSystems, DeflectionControl, IntegratorConfig,
    LoadScenario,
};
use astrostrike::report::ImpactReport;
use astrostrike::scenarios::{SCENARIOS, find_scenario};
use astrostrike::tsunami::ImpactSurface;
use astrostrike::types::{Attractor, ImpactScenario};

/// Give up on bound, non-impacting runs after this many frames.
const MAX_FRAMES: u32 = 60 * 120;

/// What this run was asked to simulate.
#[derive(Resource, Clone, Copy, Debug)]
struct RunRequest {
    scenario: ImpactScenario,
    impulse: f64,
    surface: ImpactSurface,
}

fn main() -> AppExit {
    let mut args = std::env::args().skip(1);
    let preset_id = args.next().unwrap_or_else(|| "tunguska".to_string());

    let Some(preset) = find_scenario(&preset_id) else {
        eprintln!("Unknown preset '{preset_id}'. Available:");
        for s in SCENARIOS {
            eprintln!("  {:<12} {}", s.id, s.description);
        }
        return AppExit::error();
    };
    let scenario = match preset.impact_scenario() {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("Preset '{preset_id}' is invalid: {err}");
            return AppExit::error();
        }
    };
    let impulse = match args.next().map(|s| s.parse::<f64>()) {
        None => 0.0,
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            eprintln!("Invalid impulse: {err}");
            return AppExit::error();
        }
    };
    let surface = match args.next().as_deref() {
        Some("ocean") => ImpactSurface::Ocean,
        _ => ImpactSurface::Land,
    };

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(ApproachPlugin)
        .insert_resource(RunRequest {
            scenario,
            impulse,
            surface,
        })
        .add_systems(Startup, start_run)
        .add_systems(Update, apply_requested_impulse.before(ApproachSystems))
        .add_systems(Update, finish_run.after(ApproachSystems))
        .run()
}

fn start_run(request: Res<RunRequest>, mut loads: MessageWriter<LoadScenario>) {
    let estimate = request.scenario.estimate();
    info!(
        "Estimate: {:.2} Mt, crater {:.2} km, magnitude {:.2}",
        estimate.energy_megatons, estimate.crater_diameter_km, estimate.seismic_magnitude
    );
    loads.write(LoadScenario(request.scenario));
}

/// Set the deflection once the run exists. Loading zeroes the control, so
/// this waits until after the first frame.
fn apply_requested_impulse(
    request: Res<RunRequest>,
    active: Res<ActiveApproach>,
    mut deflection: ResMut<DeflectionControl>,
    mut done: Local<bool>,
) {
    if *done || active.integrator().is_none() {
        return;
    }
    deflection.impulse = request.impulse;
    *done = true;
}

fn finish_run(
    request: Res<RunRequest>,
    active: Res<ActiveApproach>,
    attractor: Res<Attractor>,
    config: Res<IntegratorConfig>,
    mut impacts: MessageReader<ImpactEvent>,
    mut exit: MessageWriter<AppExit>,
    mut frames: Local<u32>,
) {
    if let Some(event) = impacts.read().next() {
        let report = ImpactReport::build(request.scenario, event.site(&attractor), request.surface);
        info!("\n{report}");
        exit.write(AppExit::Success);
        return;
    }

    let Some(integrator) = active.integrator() else {
        return;
    };
    let body = integrator.body();
    *frames += 1;

    if is_escaping(body.position, body.velocity, &attractor, config.distance_scale) {
        info!(
            "Miss! Closest approach {:.0} km from Earth's center",
            integrator.closest_approach().unwrap_or_default() / config.distance_scale / 1000.0
        );
        exit.write(AppExit::Success);
    } else if *frames >= MAX_FRAMES {
        warn!("No impact or escape after {} frames, stopping", *frames);
        exit.write(AppExit::Success);
    }
}
