//! Scripted input for unattended sessions.

use skirmish_core::Buttons;

const SWEEP: [Buttons; 4] = [Buttons::RIGHT, Buttons::DOWN, Buttons::LEFT, Buttons::UP];

/// Deterministic button pattern: walk a square, swing often, shoot and
/// dash now and then.
#[derive(Clone, Debug)]
pub struct InputScript {
    leg: f32,
    swing_every: f32,
    shot_every: f32,
    dash_every: f32,
}

impl Default for InputScript {
    fn default() -> Self {
        Self {
            leg: 1.5,
            swing_every: 0.5,
            shot_every: 2.0,
            dash_every: 3.0,
        }
    }
}

impl InputScript {
    /// Buttons held during host frame `frame`, each frame `dt` long.
    pub fn buttons(&self, frame: u64, dt: f32) -> Buttons {
        let leg = period_index(frame, dt, self.leg) as usize % SWEEP.len();
        let mut buttons = SWEEP[leg];
        if fires(frame, dt, self.swing_every) {
            buttons |= Buttons::ATTACK;
        }
        if fires(frame, dt, self.shot_every) {
            buttons |= Buttons::SHOOT;
        }
        if fires(frame, dt, self.dash_every) {
            buttons |= Buttons::DASH;
        }
        buttons
    }
}

fn period_index(frame: u64, dt: f32, period: f32) -> u64 {
    (frame as f64 * f64::from(dt) / f64::from(period)).floor() as u64
}

/// True on the first frame of every period but the first.
fn fires(frame: u64, dt: f32, period: f32) -> bool {
    frame > 0 && period_index(frame, dt, period) != period_index(frame - 1, dt, period)
}
