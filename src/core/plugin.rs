//! CorePlugin owns the logical game clock that drives scheduled gameplay callbacks.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct ClockReportTimer(Timer);

/// Game time derived from real frame deltas, scaled by a multiplier.
///
/// Respawn delays and other deferred callbacks are measured against
/// [`SimulationClock::elapsed`], never against wall time.
#[derive(Resource, Debug)]
pub struct SimulationClock {
    time_scale: f32,
    last_delta: Duration,
    elapsed: Duration,
}

impl SimulationClock {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(MIN_TIME_SCALE),
            last_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(MIN_TIME_SCALE);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Scaled delta applied by the most recent tick.
    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Total game time since startup.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn tick(&mut self, real_delta: Duration) {
        self.last_delta = real_delta.mul_f32(self.time_scale);
        self.elapsed += self.last_delta;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

/// Registers the game clock and its per-frame update.
#[derive(Debug, Clone, Copy)]
pub struct CorePlugin {
    time_scale: f32,
}

impl CorePlugin {
    #[allow(dead_code)]
    pub const fn with_time_scale(time_scale: f32) -> Self {
        Self { time_scale }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self {
            time_scale: DEFAULT_TIME_SCALE,
        }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimulationClock::new(self.time_scale))
            .add_systems(Startup, log_clock_configuration)
            .add_systems(First, advance_simulation_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(ClockReportTimer(Timer::from_seconds(
                5.0,
                TimerMode::Repeating,
            )))
            .add_systems(Update, report_simulation_clock);
        }
    }
}

fn advance_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_clock_configuration(clock: Res<SimulationClock>) {
    info!(
        "Game clock running at time scale {:.3}",
        clock.time_scale()
    );
}

#[cfg(feature = "core_debug")]
fn report_simulation_clock(
    time: Res<Time>,
    mut timer: ResMut<ClockReportTimer>,
    clock: Res<SimulationClock>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        info!(
            target: "core_debug",
            "Game time {:.2}s | scale {:.3} | last dt {:.4}s",
            clock.elapsed().as_secs_f32(),
            clock.time_scale(),
            clock.last_delta().as_secs_f32(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_ticks_accumulate_game_time() {
        let mut clock = SimulationClock::new(2.0);
        clock.tick(Duration::from_millis(500));
        clock.tick(Duration::from_millis(250));

        assert_eq!(clock.last_delta(), Duration::from_millis(500));
        assert_eq!(clock.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn time_scale_is_clamped() {
        let mut clock = SimulationClock::new(0.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);

        clock.set_time_scale(-1.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);
    }
}
