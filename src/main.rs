//! Precision Parker entry point
//!
//! Headless driver: loads settings and levels, then plays scripted runs
//! through the simulation and reports how each one ended.

use precision_parker::level::builtin_levels;
use precision_parker::sim::{GearCommand, Outcome, Rect, Session, TickInput, tick};
use precision_parker::{Bounds, Level, LevelPack, Result, Settings, StartPose};

/// Give up on a scripted run after this many ticks
const MAX_TICKS: u64 = 5_000;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Precision Parker (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let pack = LevelPack::load(&settings.custom_levels_path)?;

    let mut levels = builtin_levels();
    levels.extend(pack.levels);
    levels.retain(|level| match level.validate() {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Skipping level {}: {}", level.id, e);
            false
        }
    });

    let start = levels
        .iter()
        .find(|l| l.id == settings.starting_level)
        .or_else(|| levels.first())
        .cloned()
        .unwrap_or_else(open_bay);

    println!("\nFull throttle into level {} ({})...", start.id, start.name);
    let mut session = Session::new(start, settings.vehicle.clone())?;
    let outcome = run_full_throttle(&mut session);
    report(&session, outcome);

    println!("\nPulling into an open bay...");
    session.load_level(open_bay())?;
    let outcome = run_park_in_bay(&mut session);
    report(&session, outcome);

    Ok(())
}

fn open_bay() -> Level {
    Level {
        id: 0,
        name: "Open Bay".to_string(),
        description: "Nothing in the way.".to_string(),
        bounds: Bounds {
            width: 600.0,
            height: 400.0,
        },
        start: StartPose {
            x: 100.0,
            y: 200.0,
            heading: 0.0,
        },
        target: Rect::new(450.0, 150.0, 100.0, 100.0),
        obstacles: Vec::new(),
    }
}

/// Drive forward at top speed until something ends the run
fn run_full_throttle(session: &mut Session) -> Outcome {
    tick(session, &TickInput::gear(GearCommand::Forward));
    let mut outcome = tick(session, &TickInput::speed(4));
    while !outcome.is_terminal() && session.ticks() < MAX_TICKS {
        outcome = tick(session, &TickInput::default());
    }
    outcome
}

/// Drive straight until the car is centered in the bay, then shift to Park
fn run_park_in_bay(session: &mut Session) -> Outcome {
    let stop_x = session.level().target.center().x;
    let mut outcome = tick(session, &TickInput::gear(GearCommand::Forward));
    while !outcome.is_terminal()
        && session.vehicle().position.x < stop_x
        && session.ticks() < MAX_TICKS
    {
        outcome = tick(session, &TickInput::default());
    }
    if outcome.is_terminal() {
        return outcome;
    }
    tick(session, &TickInput::gear(GearCommand::Park))
}

fn report(session: &Session, outcome: Outcome) {
    let vehicle = session.vehicle();
    let label = match outcome {
        Outcome::Running => "still running",
        terminal => terminal.message(),
    };
    println!(
        "  {} after {} ticks at ({:.1}, {:.1}), heading {:.1} deg",
        label,
        session.ticks(),
        vehicle.position.x,
        vehicle.position.y,
        precision_parker::to_degrees(precision_parker::normalize_angle(vehicle.heading))
    );
}
