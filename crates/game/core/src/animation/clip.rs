use crate::env::FrameRect;

/// Static description of one sprite-sheet animation.
///
/// Frames are laid out left to right on a single row starting at
/// (`origin_x`, `origin_y`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClipSpec {
    pub texture: String,
    pub frames: u32,
    /// Seconds per frame.
    pub frame_time: f32,
    pub looping: bool,
    pub frame_width: u32,
    pub frame_height: u32,
    pub origin_x: u32,
    pub origin_y: u32,
}

impl Default for ClipSpec {
    fn default() -> Self {
        Self {
            texture: String::new(),
            frames: 1,
            frame_time: 0.1,
            looping: true,
            frame_width: 32,
            frame_height: 32,
            origin_x: 0,
            origin_y: 0,
        }
    }
}

impl ClipSpec {
    pub fn new(texture: impl Into<String>, frames: u32, frame_time: f32, looping: bool) -> Self {
        Self {
            texture: texture.into(),
            frames,
            frame_time,
            looping,
            ..Self::default()
        }
    }

    pub fn frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    pub fn row(mut self, origin_y: u32) -> Self {
        self.origin_y = origin_y;
        self
    }

    /// Total playback time of one pass.
    pub fn duration(&self) -> f32 {
        self.frames as f32 * self.frame_time
    }
}

/// Playback state of one clip.
#[derive(Clone, Debug, PartialEq)]
pub struct Clip {
    spec: ClipSpec,
    frame: u32,
    elapsed: f32,
    finished: bool,
}

impl Clip {
    pub fn new(spec: ClipSpec) -> Self {
        Self {
            spec,
            frame: 0,
            elapsed: 0.0,
            finished: false,
        }
    }

    pub fn spec(&self) -> &ClipSpec {
        &self.spec
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Latched once a non-looping clip reaches its last frame.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.elapsed = 0.0;
        self.finished = false;
    }

    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        let frames = self.spec.frames.max(1);
        if self.spec.frame_time <= 0.0 {
            self.frame = frames - 1;
            self.finished = !self.spec.looping;
            return;
        }

        self.elapsed += dt;
        while self.elapsed >= self.spec.frame_time {
            self.elapsed -= self.spec.frame_time;
            self.frame += 1;
            if self.frame >= frames {
                if self.spec.looping {
                    self.frame = 0;
                } else {
                    self.frame = frames - 1;
                    self.finished = true;
                    self.elapsed = 0.0;
                    return;
                }
            }
        }
    }

    pub fn frame_rect(&self) -> FrameRect {
        FrameRect {
            x: self.spec.origin_x + self.frame * self.spec.frame_width,
            y: self.spec.origin_y,
            width: self.spec.frame_width,
            height: self.spec.frame_height,
        }
    }
}
