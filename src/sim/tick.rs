//! Session driver
//!
//! Owns the vehicle state for one play session. Each [`tick`] applies the
//! discrete control inputs, advances the kinematic model once and then
//! evaluates crash/win, in that order. Timing belongs to the caller.

use super::collision::{Outcome, evaluate};
use super::kinematics::advance;
use super::state::{Gear, VehicleConfig, VehicleState};
use crate::error::Result;
use crate::level::Level;

/// Gear lever commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearCommand {
    /// Engage Drive from Park; from any other gear, shift to Park first
    Forward,
    /// Engage Reverse from Park; from any other gear, shift to Park first
    Backward,
    Park,
}

/// Control inputs for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steering steps to turn the wheel by (negative = left)
    pub steer: i32,
    /// Speed levels to shift by
    pub speed: i32,
    pub gear: Option<GearCommand>,
}

impl TickInput {
    pub fn steer(steps: i32) -> Self {
        Self {
            steer: steps,
            ..Default::default()
        }
    }

    pub fn speed(levels: i32) -> Self {
        Self {
            speed: levels,
            ..Default::default()
        }
    }

    pub fn gear(command: GearCommand) -> Self {
        Self {
            gear: Some(command),
            ..Default::default()
        }
    }
}

/// One play session on one level
#[derive(Debug, Clone)]
pub struct Session {
    level: Level,
    config: VehicleConfig,
    vehicle: VehicleState,
    status: Outcome,
    /// Ticks since the last reset
    ticks: u64,
}

impl Session {
    /// Start a session, rejecting configs and levels the model cannot run
    pub fn new(level: Level, config: VehicleConfig) -> Result<Self> {
        config.validate()?;
        level.validate()?;
        let vehicle = level.start_state();
        Ok(Self {
            level,
            config,
            vehicle,
            status: Outcome::Running,
            ticks: 0,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Back to the start pose with a clean status
    pub fn restart(&mut self) {
        log::debug!("Restarting level {}", self.level.id);
        self.vehicle = self.level.start_state();
        self.status = Outcome::Running;
        self.ticks = 0;
    }

    /// Swap in an edited or different level; always a full reset
    ///
    /// An invalid level leaves the current session untouched.
    pub fn load_level(&mut self, level: Level) -> Result<()> {
        level.validate()?;
        log::info!("Loading level {} ({})", level.id, level.name);
        self.level = level;
        self.restart();
        Ok(())
    }

    /// Apply control inputs, clamping both steering and speed level into range
    fn apply_input(&mut self, input: &TickInput) {
        let max_step = self.config.steering_steps;
        let max_level = self.config.max_speed_level().max(1);
        let vehicle = &mut self.vehicle;

        vehicle.steering_step = (vehicle.steering_step + input.steer).clamp(-max_step, max_step);
        vehicle.speed_level = (vehicle.speed_level + input.speed).clamp(1, max_level);

        let Some(command) = input.gear else {
            return;
        };
        let next_gear = match (command, vehicle.gear) {
            (GearCommand::Park, _) => Gear::Park,
            (GearCommand::Forward, Gear::Park) => Gear::Drive,
            (GearCommand::Backward, Gear::Park) => Gear::Reverse,
            (GearCommand::Forward | GearCommand::Backward, _) => Gear::Park,
        };
        if next_gear != vehicle.gear {
            log::debug!("Gear {} -> {}", vehicle.gear.as_str(), next_gear.as_str());
            vehicle.gear = next_gear;
            // Engaging a moving gear always starts at the slowest level
            if next_gear != Gear::Park {
                vehicle.speed_level = 1;
            }
        }
    }
}

/// Advance the session by one tick
///
/// Once the session has crashed or won, inputs are ignored and the vehicle
/// no longer moves until [`Session::restart`].
pub fn tick(session: &mut Session, input: &TickInput) -> Outcome {
    if session.status.is_terminal() {
        return session.status;
    }

    session.apply_input(input);
    session.vehicle = advance(&session.vehicle, &session.config);
    session.ticks += 1;

    let outcome = evaluate(&session.vehicle, &session.config, &session.level);
    if outcome.is_terminal() {
        log::info!(
            "Level {} {} after {} ticks at ({:.1}, {:.1})",
            session.level.id,
            outcome.message(),
            session.ticks,
            session.vehicle.position.x,
            session.vehicle.position.y
        );
    }
    session.status = outcome;
    outcome
}
