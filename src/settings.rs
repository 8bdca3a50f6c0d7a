use serde::{Deserialize, Serialize};

/// How the drawing key activates drawing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawActivation {
    /// Drawing stays on only while the key is held down.
    Hold,
    /// Each press flips drawing mode.
    Toggle,
}

impl Default for DrawActivation {
    fn default() -> Self {
        DrawActivation::Hold
    }
}

impl std::fmt::Display for DrawActivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawActivation::Hold => write!(f, "Hold"),
            DrawActivation::Toggle => write!(f, "Toggle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingSettings {
    #[serde(default)]
    pub activation: DrawActivation,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: [u8; 4],
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            activation: DrawActivation::default(),
            stroke_width: default_stroke_width(),
            stroke_color: default_stroke_color(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives a copy of the log output.
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub drawing: DrawingSettings,
    /// JSON file with already-parsed player snapshots per tick.
    #[serde(default)]
    pub players_file: Option<String>,
    /// Last window size. If absent, a default size is used.
    #[serde(default = "default_window_size")]
    pub window_size: Option<(f32, f32)>,
}

fn default_stroke_width() -> f32 {
    3.0
}

fn default_stroke_color() -> [u8; 4] {
    [255, 221, 0, 255]
}

fn default_window_size() -> Option<(f32, f32)> {
    Some((1280.0, 720.0))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            drawing: DrawingSettings::default(),
            players_file: None,
            window_size: default_window_size(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn drawing_activation(&self) -> DrawActivation {
        self.drawing.activation
    }
}
