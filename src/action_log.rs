use std::time::Instant;
use serde::{Serialize, Deserialize};

/// Action phase - whether the action is starting or finishing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ActionPhase {
    Start,
    Finish,
}

/// Grid operations worth journaling
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Action {
    /// Full rebuild at the given size
    Regenerate { size: i32 },
    /// Obstacle flag edit on one tile
    SetObstacle { instance_index: i32, obstacle: bool },
    /// Weight edit on one tile
    SetWeight { instance_index: i32, weight: f32 },
    /// Obstacle scatter across the whole grid
    RandomizeObstacles { chance: f32 },
    /// Fresh weights for every tile
    RandomizeWeights,
    /// Scenario roll: new size plus start and goal pick
    RandomizeScenario { size: i32, start_index: i32, goal_index: i32 },
    /// Path query between two tiles; path_len 0 means no path
    FindPath { start_index: i32, goal_index: i32, path_len: usize },
}

/// Logged action with timestamp and phase
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    /// The action
    pub action: Action,
    /// Whether this is the start or finish of the action
    pub phase: ActionPhase,
}

/// Action logger
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an action with current timestamp and phase
    pub fn log(&mut self, action: Action, phase: ActionPhase) {
        let elapsed = self.start_time.elapsed();
        let timestamp_ms = elapsed.as_millis() as u64;

        self.actions.push(LoggedAction {
            timestamp_ms,
            action,
            phase,
        });
    }

    /// Log the start of an action
    pub fn log_start(&mut self, action: Action) {
        self.log(action, ActionPhase::Start);
    }

    /// Log the finish of an action
    pub fn log_finish(&mut self, action: Action) {
        self.log(action, ActionPhase::Finish);
    }

    /// Get all logged actions
    pub fn get_actions(&self) -> &Vec<LoggedAction> {
        &self.actions
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.actions)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Action Log ({} events) ===", self.actions.len());
        for (i, logged) in self.actions.iter().enumerate() {
            let phase_str = match logged.phase {
                ActionPhase::Start => "START ",
                ActionPhase::Finish => "FINISH",
            };
            println!("[{:6}ms] #{:3} {} {:?}", logged.timestamp_ms, i + 1, phase_str, logged.action);
        }
        println!("=== End of Log ===\n");
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut rebuilds = 0;
        let mut obstacle_edits = 0;
        let mut weight_edits = 0;
        let mut randomize_passes = 0;
        let mut path_queries = 0;
        let mut paths_found = 0;

        // Only count finish events to get actual completed action counts
        for logged in &self.actions {
            if matches!(logged.phase, ActionPhase::Finish) {
                match &logged.action {
                    Action::Regenerate { .. } => rebuilds += 1,
                    Action::SetObstacle { .. } => obstacle_edits += 1,
                    Action::SetWeight { .. } => weight_edits += 1,
                    Action::RandomizeObstacles { .. }
                    | Action::RandomizeWeights
                    | Action::RandomizeScenario { .. } => randomize_passes += 1,
                    Action::FindPath { path_len, .. } => {
                        path_queries += 1;
                        if *path_len > 0 {
                            paths_found += 1;
                        }
                    }
                }
            }
        }

        let duration = if let Some(last) = self.actions.last() {
            last.timestamp_ms
        } else {
            0
        };

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Grid: {} rebuilds, {} obstacle edits, {} weight edits, {} randomize passes\n\
             Pathfinding: {} queries, {} paths found",
            duration,
            self.actions.len(),
            rebuilds,
            obstacle_edits,
            weight_edits,
            randomize_passes,
            path_queries,
            paths_found
        )
    }
}
