use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Last stream URL entered in the header field. Restored on start; the
    /// URL itself is never dialled.
    #[serde(default)]
    pub stream_url: String,
    /// Playback volume in percent, 0-100.
    #[serde(default = "default_volume")]
    pub volume: u8,
    #[serde(default)]
    pub muted: bool,
    /// Start playback as soon as the window opens.
    #[serde(default)]
    pub autoplay: bool,
    /// When disabled the compositor skips overlay rendering entirely.
    #[serde(default = "default_overlay_enabled")]
    pub overlay_enabled: bool,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Last known window size. If absent, a default size is used.
    #[serde(default)]
    pub window_size: Option<(i32, i32)>,
}

fn default_volume() -> u8 {
    50
}

fn default_overlay_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stream_url: String::new(),
            volume: default_volume(),
            muted: false,
            autoplay: false,
            overlay_enabled: true,
            debug_logging: false,
            window_size: Some((1100, 700)),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Volume as the fraction the playback surface expects.
    pub fn volume_fraction(&self) -> f32 {
        f32::from(self.volume.min(100)) / 100.0
    }
}
