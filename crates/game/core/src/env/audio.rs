use super::SoundHandle;

/// Fire-and-forget sound playback.
pub trait AudioSink {
    fn play(&mut self, sound: SoundHandle, volume: f32);
}

/// Discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _sound: SoundHandle, _volume: f32) {}
}

/// Records cues, for hosts that mix audio themselves and for tests.
#[derive(Clone, Debug, Default)]
pub struct AudioLog {
    pub played: Vec<(SoundHandle, f32)>,
}

impl AudioSink for AudioLog {
    fn play(&mut self, sound: SoundHandle, volume: f32) {
        self.played.push((sound, volume));
    }
}
