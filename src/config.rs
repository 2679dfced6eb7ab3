use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub randomize: RandomizeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_size")]
    pub size: i32,
    #[serde(default = "default_hex_radius")]
    pub hex_radius: f32,
}

#[derive(Debug, Deserialize)]
pub struct RandomizeConfig {
    #[serde(default = "default_obstacle_chance")]
    pub obstacle_chance: f32,
    #[serde(default = "default_weight_min")]
    pub weight_min: f32,
    #[serde(default = "default_weight_max")]
    pub weight_max: f32,
    #[serde(default = "default_size_min")]
    pub size_min: i32,
    #[serde(default = "default_size_max")]
    pub size_max: i32,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_action_log")]
    pub enable_action_log: bool,
    #[serde(default = "default_action_log_path")]
    pub action_log_path: String,
}

// Default values
fn default_size() -> i32 { 10 }
fn default_hex_radius() -> f32 { 100.0 }
fn default_obstacle_chance() -> f32 { 0.3 }
fn default_weight_min() -> f32 { 1.0 }
fn default_weight_max() -> f32 { 5.0 }
fn default_size_min() -> i32 { 4 }
fn default_size_max() -> i32 { 10 }
fn default_enable_action_log() -> bool { true }
fn default_action_log_path() -> String { "action_log.json".to_string() }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            hex_radius: default_hex_radius(),
        }
    }
}

impl Default for RandomizeConfig {
    fn default() -> Self {
        Self {
            obstacle_chance: default_obstacle_chance(),
            weight_min: default_weight_min(),
            weight_max: default_weight_max(),
            size_min: default_size_min(),
            size_max: default_size_max(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_action_log: default_enable_action_log(),
            action_log_path: default_action_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            randomize: RandomizeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from config.toml, or use defaults if file doesn't exist
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file, or use defaults on any failure
    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from {}", path);
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path, e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No {} found, using default configuration", path);
                Config::default()
            }
        }
    }

    /// Bounds checks for the values the grid and the randomizers assume
    pub fn validate(&self) -> Result<(), String> {
        if self.grid.size <= 0 {
            return Err(format!("grid.size must be positive, got {}", self.grid.size));
        }
        if self.grid.hex_radius <= 0.0 {
            return Err(format!(
                "grid.hex_radius must be positive, got {}",
                self.grid.hex_radius
            ));
        }
        if !(0.0..=1.0).contains(&self.randomize.obstacle_chance) {
            return Err(format!(
                "randomize.obstacle_chance must be within [0, 1], got {}",
                self.randomize.obstacle_chance
            ));
        }
        if self.randomize.weight_min <= 0.0 {
            return Err(format!(
                "randomize.weight_min must be positive, got {}",
                self.randomize.weight_min
            ));
        }
        if self.randomize.weight_max < self.randomize.weight_min {
            return Err(format!(
                "randomize.weight_max must be at least weight_min, got {} < {}",
                self.randomize.weight_max, self.randomize.weight_min
            ));
        }
        if self.randomize.size_min < 2 {
            return Err(format!(
                "randomize.size_min must be at least 2, got {}",
                self.randomize.size_min
            ));
        }
        if self.randomize.size_max < self.randomize.size_min {
            return Err(format!(
                "randomize.size_max must be at least size_min, got {} < {}",
                self.randomize.size_max, self.randomize.size_min
            ));
        }
        Ok(())
    }
}
