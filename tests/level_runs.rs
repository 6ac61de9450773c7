//! Headless end-to-end runs through [`Session`].
//!
//! Covered scenarios:
//! 1. Full throttle into the middle wall of "The Basic Box" crashes on that wall.
//! 2. Driving straight into an open bay and shifting to Park wins.
//! 3. A rotated parking slot only accepts the vehicle when its rotation fits.
//! 4. Holding full lock in an empty arena circles forever without crashing.
//! 5. Reversing out of the arena crashes on the boundary alone.

use glam::Vec2;
use precision_parker::level::builtin_levels;
use precision_parker::sim::{
    CrashCause, Gear, GearCommand, Outcome, Rect, Session, TickInput, VehicleConfig, crash_cause,
    tick,
};
use precision_parker::{Bounds, Level, StartPose};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn empty_level(target: Rect) -> Level {
    Level {
        id: 1001,
        name: "Empty".to_string(),
        description: String::new(),
        bounds: Bounds {
            width: 600.0,
            height: 400.0,
        },
        start: StartPose {
            x: 100.0,
            y: 200.0,
            heading: 0.0,
        },
        target,
        obstacles: Vec::new(),
    }
}

/// Tick with no input until `stop` holds, the run ends, or `limit` ticks pass
fn run_until(session: &mut Session, limit: u64, stop: impl Fn(&Session) -> bool) -> Outcome {
    let mut outcome = session.status();
    while !outcome.is_terminal() && !stop(session) && session.ticks() < limit {
        outcome = tick(session, &TickInput::default());
    }
    outcome
}

/// Drive forward at speed level 1 until the center reaches `x`, then park
fn drive_to_and_park(session: &mut Session, x: f32) -> Outcome {
    tick(session, &TickInput::gear(GearCommand::Forward));
    let outcome = run_until(session, 5_000, |s| s.vehicle().position.x >= x);
    if outcome.is_terminal() {
        return outcome;
    }
    tick(session, &TickInput::gear(GearCommand::Park))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn full_throttle_hits_middle_wall() {
    let mut session =
        Session::new(builtin_levels().remove(0), VehicleConfig::default()).unwrap();
    tick(&mut session, &TickInput::gear(GearCommand::Forward));
    tick(&mut session, &TickInput::speed(4));

    let outcome = run_until(&mut session, 1_000, |_| false);
    assert_eq!(outcome, Outcome::Crashed);

    let cause = crash_cause(session.vehicle(), session.config(), session.level());
    assert_eq!(cause, Some(CrashCause::Obstacle(4)));
    // Front bumper only just reached the wall
    let front = session.vehicle().position.x + 23.0;
    assert!((300.0..=301.7).contains(&front), "front at {front}");
}

#[test]
fn straight_into_open_bay_wins() {
    let mut session = Session::new(
        empty_level(Rect::new(450.0, 150.0, 100.0, 100.0)),
        VehicleConfig::default(),
    )
    .unwrap();
    let outcome = drive_to_and_park(&mut session, 500.0);
    assert_eq!(outcome, Outcome::Won);
    assert_eq!(session.vehicle().gear, Gear::Park);

    // Won is terminal: more input changes nothing
    let parked = *session.vehicle();
    tick(&mut session, &TickInput::gear(GearCommand::Forward));
    assert_eq!(*session.vehicle(), parked);
    assert_eq!(session.status(), Outcome::Won);
}

#[test]
fn moving_through_bay_does_not_win() {
    let mut session = Session::new(
        empty_level(Rect::new(450.0, 150.0, 100.0, 100.0)),
        VehicleConfig::default(),
    )
    .unwrap();
    tick(&mut session, &TickInput::gear(GearCommand::Forward));
    let outcome = run_until(&mut session, 5_000, |s| s.vehicle().position.x >= 500.0);
    assert_eq!(outcome, Outcome::Running);
}

#[test]
fn rotated_slot_accepts_only_matching_orientation() {
    // 30 wide, 80 tall, centered at (330, 200)
    let upright = Rect::new(315.0, 160.0, 30.0, 80.0);

    let mut session = Session::new(empty_level(upright), VehicleConfig::default()).unwrap();
    assert_eq!(drive_to_and_park(&mut session, 330.0), Outcome::Running);

    let turned = empty_level(upright.rotated(90.0));
    let mut session = Session::new(turned, VehicleConfig::default()).unwrap();
    assert_eq!(drive_to_and_park(&mut session, 330.0), Outcome::Won);
}

#[test]
fn full_lock_circles_without_crashing() {
    let mut level = empty_level(Rect::new(0.0, 0.0, 10.0, 10.0));
    level.start = StartPose {
        x: 300.0,
        y: 200.0,
        heading: 0.0,
    };
    let mut session = Session::new(level, VehicleConfig::default()).unwrap();
    tick(&mut session, &TickInput::steer(10));
    tick(&mut session, &TickInput::gear(GearCommand::Forward));

    let outcome = run_until(&mut session, 1_000, |_| false);
    assert_eq!(outcome, Outcome::Running);

    let vehicle = session.vehicle();
    // Heading is left unwrapped and keeps growing clockwise
    assert!(vehicle.heading > std::f32::consts::TAU);
    assert!(vehicle.position.distance(Vec2::new(300.0, 200.0)) < 80.0);
}

#[test]
fn reversing_out_of_arena_crashes() {
    let mut level = empty_level(Rect::new(450.0, 150.0, 100.0, 100.0));
    level.start.x = 40.0;
    let mut session = Session::new(level, VehicleConfig::default()).unwrap();
    tick(&mut session, &TickInput::gear(GearCommand::Backward));

    let outcome = run_until(&mut session, 1_000, |_| false);
    assert_eq!(outcome, Outcome::Crashed);
    assert_eq!(
        crash_cause(session.vehicle(), session.config(), session.level()),
        Some(CrashCause::OutOfBounds)
    );
    assert!(session.vehicle().position.x < 23.0);
}
