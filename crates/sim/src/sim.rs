//! Fixed-rate loop driving one combatant against a scripted opponent.

use anyhow::Result;
use arena_core::{
    AgentConfig, ArenaLayout, CombatantStatus, EntityId, GunState, LayerMask, Meter,
    PickupDescriptor, PickupKind, SightOracle, Transform, Vec3,
};
use combatant::{Command, Combatant, Event, EventBus, Frame, GoalKind, Subscription, Topic, WorldView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::opponent::{Opponent, hit_chance};
use crate::world::FlatWorld;

pub const AGENT: EntityId = EntityId(1);
pub const OPPONENT: EntityId = EntityId(2);

const AGENT_SPEED: f32 = 5.0;
const AGENT_HEALTH: f32 = 100.0;
const MAGAZINE: f32 = 40.0;
const FIRE_INTERVAL: f32 = 0.3;
const SHOT_DAMAGE: f32 = 12.0;
const SHOT_LOUDNESS: f32 = 900.0;
const RESPAWN_DELAY: f32 = 3.0;

#[derive(Clone, Debug)]
pub struct SimSettings {
    pub tick_rate: f32,
    pub seed: u64,
    pub disabled: Vec<GoalKind>,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            tick_rate: 20.0,
            seed: 0,
            disabled: Vec::new(),
        }
    }
}

/// Counters reported at the end of a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub ticks: u64,
    pub goal_switches: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub kills: u32,
    pub deaths: u32,
    pub pickups: u32,
}

/// How the host moves the agent between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Idle,
    Toward(Vec3),
    Circle { around: Vec3, direction: f32 },
}

pub struct Simulation {
    bus: EventBus,
    decisions: Subscription,
    world: FlatWorld,
    spawn_points: Vec<Vec3>,
    agent: Combatant,
    status: CombatantStatus,
    motion: Motion,
    aim: Option<Vec3>,
    next_shot: f32,
    respawn_at: f32,
    opponent: Opponent,
    rng: StdRng,
    tick: u64,
    dt: f32,
    summary: Summary,
}

impl Simulation {
    pub fn new(config: AgentConfig, layout: &ArenaLayout, settings: &SimSettings) -> Result<Self> {
        layout.validate()?;
        anyhow::ensure!(settings.tick_rate > 0.0, "tick rate must be positive");

        let bus = EventBus::new();
        let decisions = bus.subscribe(Topic::Decision);
        let world = FlatWorld::new(layout);
        let mut rng = StdRng::seed_from_u64(settings.seed);

        let spawn_points = layout.spawn_points.clone();
        let agent_spawn = spawn_points[0];
        let opponent_spawn = spawn_points[spawn_points.len() - 1];
        let mut waypoints: Vec<Vec3> = layout.regions.iter().map(|r| r.center()).collect();
        if waypoints.is_empty() {
            waypoints = spawn_points.clone();
        }

        let mut builder = Combatant::builder(AGENT)
            .config(config)
            .regions(layout.regions.clone())
            .seed(rng.r#gen());
        for kind in &settings.disabled {
            builder = builder.disable_goal(*kind);
        }
        let agent = builder.build(&bus, &world, 0.0)?;

        Ok(Self {
            bus,
            decisions,
            world,
            spawn_points,
            agent,
            status: fresh_status(agent_spawn),
            motion: Motion::Idle,
            aim: None,
            next_shot: 0.0,
            respawn_at: 0.0,
            opponent: Opponent::new(OPPONENT, opponent_spawn, waypoints),
            rng,
            tick: 0,
            dt: 1.0 / settings.tick_rate,
            summary: Summary::default(),
        })
    }

    pub fn now(&self) -> f32 {
        self.tick as f32 * self.dt
    }

    pub fn agent(&self) -> &Combatant {
        &self.agent
    }

    pub fn status(&self) -> &CombatantStatus {
        &self.status
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Runs until `duration` seconds of simulated time have passed.
    pub fn run(&mut self, duration: f32) -> Result<&Summary> {
        while self.now() < duration {
            self.step()?;
        }
        Ok(&self.summary)
    }

    pub fn step(&mut self) -> Result<()> {
        let now = self.now();
        let dt = self.dt;
        self.world.advance(now);
        self.respawn(now);

        let agent_transform = self.status.alive.then_some(self.status.transform);
        if let Some(shot) =
            self.opponent
                .step(now, dt, agent_transform.as_ref(), &self.world, &mut self.rng)
        {
            self.opponent_fired(now, shot.from, shot.hit);
        }

        let target = self.opponent.status();
        let frame = Frame {
            now,
            dt,
            status: &self.status,
            target: &target,
            world: WorldView {
                sight: &self.world,
                paths: &self.world,
                pickups: &self.world,
            },
        };
        let commands = self.agent.tick(&frame);

        if self.status.alive {
            for command in commands {
                self.apply(command);
            }
            self.move_agent(dt);
            self.fire(now);
            self.collect(now)?;
        }

        for event in self.decisions.drain() {
            if let Event::GoalChanged { .. } = event {
                self.summary.goal_switches += 1;
            }
        }
        self.tick += 1;
        self.summary.ticks = self.tick;
        Ok(())
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::MoveTo { destination } => self.motion = Motion::Toward(destination),
            Command::LookAt { position } => {
                let direction = (position - self.status.transform.position).normalize_or_zero();
                if direction != Vec3::ZERO {
                    self.status.transform.forward = direction;
                }
            }
            Command::Fire { at } => self.aim = Some(at),
            Command::CeaseFire => self.aim = None,
            Command::Strafe { around, direction } => {
                self.motion = Motion::Circle { around, direction }
            }
            Command::Stop => self.motion = Motion::Idle,
        }
    }

    fn move_agent(&mut self, dt: f32) {
        let step = self.status.speed * dt;
        let position = &mut self.status.transform.position;
        match self.motion {
            Motion::Idle => {}
            Motion::Toward(destination) => *position = position.move_towards(destination, step),
            Motion::Circle { around, direction } => {
                let side = (*position - around).normalize_or_zero().cross(Vec3::UP);
                *position += side * (step * direction);
            }
        }
    }

    fn fire(&mut self, now: f32) {
        let Some(at) = self.aim else { return };
        if now < self.next_shot {
            return;
        }
        let Some(gun) = self.status.guns.iter_mut().find(|g| g.has_ammo()) else {
            return;
        };
        gun.ammo.current -= 1.0;
        self.next_shot = now + FIRE_INTERVAL;
        self.summary.shots_fired += 1;

        let from = self.status.transform.position;
        self.bus.publish(Event::GunFired {
            shooter: AGENT,
            position: from,
            loudness: SHOT_LOUDNESS,
        });

        let target = self.opponent.transform;
        let on_target = self.opponent.alive
            && target.position.distance(at) <= 2.0
            && self
                .world
                .can_see_object(&self.status.transform, &target, LayerMask::OBSTACLES);
        if !on_target || !self.rng.gen_bool(hit_chance(from.distance(target.position))) {
            return;
        }

        self.summary.hits += 1;
        self.bus.publish(Event::DamageTaken {
            victim: OPPONENT,
            attacker: Some(AGENT),
            source: Some(from),
            amount: SHOT_DAMAGE,
        });
        if self.opponent.take_damage(SHOT_DAMAGE, now) {
            self.summary.kills += 1;
        }
    }

    fn opponent_fired(&mut self, now: f32, from: Vec3, hit: bool) {
        self.bus.publish(Event::GunFired {
            shooter: OPPONENT,
            position: from,
            loudness: SHOT_LOUDNESS,
        });
        if !hit {
            return;
        }

        self.bus.publish(Event::DamageTaken {
            victim: AGENT,
            attacker: Some(OPPONENT),
            source: Some(from),
            amount: Opponent::DAMAGE,
        });
        let health = &mut self.status.health;
        health.current = (health.current - Opponent::DAMAGE).max(0.0);
        if health.current <= 0.0 {
            self.status.alive = false;
            self.respawn_at = now + RESPAWN_DELAY;
            self.summary.deaths += 1;
            tracing::info!(entity = %AGENT, time = now, "Agent down");
        }
    }

    fn collect(&mut self, now: f32) -> Result<()> {
        let Some(pickup) = self.world.try_collect(self.status.transform.position) else {
            return Ok(());
        };
        apply_pickup(&mut self.status, &pickup);
        self.agent.on_pickup_consumed(pickup.id, now)?;
        self.summary.pickups += 1;
        tracing::info!(pickup = %pickup.id, time = now, "Agent collected pickup");
        Ok(())
    }

    fn respawn(&mut self, now: f32) {
        if !self.status.alive && now >= self.respawn_at {
            let spawn = self.random_spawn();
            self.status = fresh_status(spawn);
            self.motion = Motion::Idle;
            self.aim = None;
            self.agent.reset_beliefs();
            self.bus.publish(Event::EntitySpawned {
                entity: AGENT,
                position: spawn,
            });
        }

        if self.opponent.alive {
            return;
        }
        let spawn = self.random_spawn();
        if self.opponent.try_respawn(now, spawn) {
            self.bus.publish(Event::EntitySpawned {
                entity: OPPONENT,
                position: spawn,
            });
        }
    }

    fn random_spawn(&mut self) -> Vec3 {
        let index = self.rng.gen_range(0..self.spawn_points.len());
        self.spawn_points[index]
    }
}

fn fresh_status(spawn: Vec3) -> CombatantStatus {
    CombatantStatus {
        id: AGENT,
        transform: Transform::at(spawn),
        health: Meter::full(AGENT_HEALTH),
        guns: vec![GunState::new(Meter::full(MAGAZINE), true)],
        speed: AGENT_SPEED,
        alive: true,
    }
}

fn apply_pickup(status: &mut CombatantStatus, pickup: &PickupDescriptor) {
    match &pickup.kind {
        PickupKind::Health { amount } => {
            let health = &mut status.health;
            health.current = (health.current + amount).min(health.max);
        }
        PickupKind::Ammo { refill } => {
            for (gun, amount) in status.guns.iter_mut().zip(refill) {
                gun.ammo.current = (gun.ammo.current + amount).min(gun.ammo.max);
            }
        }
    }
}
