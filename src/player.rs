/// Contract the transport controls are written against. The real product
/// would put a decoding pipeline behind this; the studio ships a simulated
/// surface that only tracks transport state.
pub trait VideoSurface {
    fn play(&mut self);
    fn pause(&mut self);
    fn is_playing(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
    fn is_muted(&self) -> bool;
    /// Volume as a fraction. Values outside [0, 1] are clamped.
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPlayer {
    playing: bool,
    muted: bool,
    volume: f32,
    position_secs: f64,
}

impl Default for SimulatedPlayer {
    fn default() -> Self {
        Self {
            playing: false,
            muted: false,
            volume: 0.5,
            position_secs: 0.0,
        }
    }
}

impl SimulatedPlayer {
    /// Advance the playback clock. No-op while paused.
    pub fn tick(&mut self, dt_secs: f32) {
        if self.playing && dt_secs > 0.0 {
            self.position_secs += f64::from(dt_secs);
        }
    }

    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    pub fn timecode(&self) -> String {
        let total = self.position_secs as u64;
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}

impl VideoSurface for SimulatedPlayer {
    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }
}
