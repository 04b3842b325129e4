//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use combatant::GoalKind;

/// Headless arena match: one AI combatant against a scripted opponent
#[derive(Parser, Debug)]
#[command(name = "arena-sim")]
#[command(about = "Run the combatant decision core in a headless arena", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Agent tuning file (TOML); defaults apply when omitted
    #[arg(long, env = "ARENA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Arena layout file (RON)
    #[arg(long, env = "ARENA_LAYOUT", default_value = "assets/arenas/courtyard.ron")]
    pub arena: PathBuf,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    pub duration: f32,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 20.0)]
    pub tick_rate: f32,

    /// Seed for every random decision in the run
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Also write logs to `<DIR>/arena-sim.log`
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Goal to disable (repeatable), e.g. `--disable fight`
    #[arg(long = "disable", value_name = "GOAL", value_parser = parse_goal)]
    pub disabled: Vec<GoalKind>,
}

fn parse_goal(name: &str) -> Result<GoalKind, String> {
    GoalKind::parse(name).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_disables() {
        let cli = Cli::try_parse_from([
            "arena-sim",
            "--arena",
            "a.ron",
            "--disable",
            "fight",
            "--disable",
            "look_for_pickups",
        ])
        .unwrap();
        assert_eq!(cli.disabled, vec![GoalKind::Fight, GoalKind::LookForPickups]);
        assert_eq!(cli.duration, 60.0);
    }

    #[test]
    fn rejects_unknown_goal() {
        let result = Cli::try_parse_from(["arena-sim", "--arena", "a.ron", "--disable", "dance"]);
        assert!(result.is_err());
    }
}
