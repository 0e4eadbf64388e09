//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs world (sentries, projectiles), the craft,
//! the autopilot, and all session state. The host calls `tick` once per
//! rendered frame with the measured delta-time and the current input
//! snapshot; the engine clamps the delta, processes queued commands at the
//! frame boundary, runs the systems in fixed order, and returns the
//! `SessionSnapshot` to render.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyward_core::commands::{InputState, SessionCommand};
use skyward_core::components::Craft;
use skyward_core::config::SimConfig;
use skyward_core::enums::{ControlMode, SessionPhase};
use skyward_core::events::SimEvent;
use skyward_core::state::SessionSnapshot;
use skyward_core::types::SimTime;

use crate::systems;
use crate::systems::autopilot::Autopilot;
use crate::world_setup;

/// The simulation engine. Owns the world and all session state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    craft: Craft,
    autopilot: Autopilot,
    control_mode: ControlMode,
    phase: SessionPhase,
    time: SimTime,
    evade_count: u32,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SessionCommand>,
    events: Vec<SimEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    quit_requested: bool,
}

impl SimulationEngine {
    /// Create a new engine in the main menu phase.
    pub fn new(config: SimConfig) -> Self {
        let craft = spawn_craft(&config);
        let autopilot = Autopilot::new(&config.tuning);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Self {
            config,
            world: World::new(),
            craft,
            autopilot,
            control_mode: ControlMode::default(),
            phase: SessionPhase::default(),
            time: SimTime::default(),
            evade_count: 0,
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            quit_requested: false,
        }
    }

    /// Queue a session command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `frame_dt` is the host-measured elapsed time since the previous frame
    /// in seconds; it is clamped to the configured window so a degenerate
    /// delta never divides a derivative and a stall never teleports physics.
    pub fn tick(&mut self, frame_dt: f32, input: &InputState) -> SessionSnapshot {
        let dt = frame_dt.clamp(self.config.tuning.min_frame_dt, self.config.tuning.max_frame_dt);

        self.process_commands();

        if self.phase == SessionPhase::Active {
            self.run_systems(dt, input);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.craft,
            &self.time,
            self.phase,
            self.control_mode,
            self.evade_count,
            self.autopilot.diagnostic_terms(),
            events,
        )
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn control_mode(&self) -> ControlMode {
        self.control_mode
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// True after a `Quit` command; the host tears down when it sees this.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only world access (presentation/testing).
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn craft(&self) -> &Craft {
        &self.craft
    }

    /// Spawn a projectile directly (for scenario tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(&mut self, origin: Vec3, aim: Vec3) {
        world_setup::spawn_projectile(&mut self.world, origin, aim, &self.config.tuning);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single session command. Commands that do not apply to the
    /// current phase are ignored (idempotent-safe).
    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Start { autopilot } => {
                if self.phase == SessionPhase::MainMenu {
                    self.control_mode = if autopilot {
                        ControlMode::Autopilot
                    } else {
                        ControlMode::Manual
                    };
                    self.begin_session();
                    log::info!("session started ({:?})", self.control_mode);
                }
            }
            SessionCommand::TogglePause => match self.phase {
                SessionPhase::Active => self.phase = SessionPhase::Paused,
                SessionPhase::Paused => self.phase = SessionPhase::Active,
                _ => {}
            },
            SessionCommand::ToggleAutopilot => {
                if matches!(self.phase, SessionPhase::Active | SessionPhase::Paused) {
                    self.control_mode = self.control_mode.toggled();
                    // Stale integral/derivative memory from the previous
                    // authority would inject an impulse on the next frame.
                    self.autopilot.reset();
                    log::debug!("control authority now {:?}", self.control_mode);
                }
            }
            SessionCommand::Restart => {
                if matches!(
                    self.phase,
                    SessionPhase::Active | SessionPhase::Paused | SessionPhase::GameOver
                ) {
                    self.begin_session();
                    log::info!("session restarted");
                }
            }
            SessionCommand::Quit => {
                self.quit_requested = true;
            }
        }
    }

    /// Full session (re)initialization. Runs to completion inside one command
    /// drain, so no frame ever observes a partially reset world.
    fn begin_session(&mut self) {
        self.world.clear();
        self.craft = spawn_craft(&self.config);
        self.autopilot.reset();
        self.time = SimTime::default();
        self.evade_count = 0;
        self.events.clear();
        world_setup::spawn_sentries(&mut self.world, &mut self.rng, &self.config.tuning);
        self.phase = SessionPhase::Active;
    }

    /// Run all systems for one active frame, in fixed order.
    fn run_systems(&mut self, dt: f32, input: &InputState) {
        let tuning = &self.config.tuning;
        let now = self.time.elapsed_secs;
        let autopilot_active = self.control_mode.is_autopilot();

        // 1. Sentry hover animation (their offset position feeds targeting).
        systems::sentry::animate(&mut self.world, now, tuning);

        // 2. Boost reserve, then control force. Boost is a manual-mode
        //    control; the autopilot never boosts and the reserve recharges.
        systems::flight::update_boost(
            &mut self.craft,
            !autopilot_active && input.boost,
            dt,
            tuning,
        );
        let force = if autopilot_active {
            systems::autopilot::run(&mut self.autopilot, &self.world, &self.craft, now, dt, tuning)
        } else {
            systems::flight::manual_force(input, &self.craft, tuning)
        };

        // 3. Craft integration and arena bounds.
        systems::flight::integrate(&mut self.craft, force, dt, tuning);

        // 4. Sentry fire decisions, then projectile spawns.
        let requests =
            systems::sentry::run(&mut self.world, &self.craft, autopilot_active, now, tuning);
        for request in requests {
            world_setup::spawn_projectile(&mut self.world, request.origin, request.aim, tuning);
            self.events.push(SimEvent::SentryFired {
                origin: request.origin,
            });
            log::debug!("sentry fired from {:?}", request.origin);
        }

        // 5. Projectile advancement and resolution.
        let shields_down = systems::projectile::run(
            &mut self.world,
            &mut self.craft,
            dt,
            tuning,
            &mut self.evade_count,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // Edge-triggered termination: fires exactly once, after which the
        // simulation step no longer runs.
        if shields_down {
            self.phase = SessionPhase::GameOver;
            self.events.push(SimEvent::ShieldsDown);
            log::info!(
                "shields down after {:.1}s, {} evades",
                self.time.elapsed_secs,
                self.evade_count
            );
        }
    }
}

fn spawn_craft(config: &SimConfig) -> Craft {
    let [x, y, z] = config.tuning.craft_spawn;
    Craft {
        position: Vec3::new(x, y, z),
        velocity: Vec3::ZERO,
        shields: config.tuning.shield_max,
        boost_reserve: config.tuning.boost_max,
        is_boosting: false,
    }
}
