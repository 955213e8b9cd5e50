use tracing::debug;

/// Fixed-timestep accumulator.
///
/// Real frame time is banked and paid out in whole simulation steps, at most
/// `max_steps` per frame; backlog beyond that is dropped so a long stall
/// cannot snowball into ever longer frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStep {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(step: f32, max_steps: u32) -> Self {
        Self {
            step,
            max_steps,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Banks `real_dt` and returns how many steps to simulate now.
    pub fn advance(&mut self, real_dt: f32) -> u32 {
        self.accumulator += real_dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if self.accumulator >= self.step {
            debug!(dropped = self.accumulator, "simulation backlog dropped");
            self.accumulator %= self.step;
        }
        steps
    }

    /// Fraction of a step left in the bank, for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}
