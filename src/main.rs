use std::collections::HashSet;
use std::env;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use hexpath::action_log::{Action, ActionLog};
use hexpath::config::Config;
use hexpath::pathfinding::{find_path, format_path, path_cost};
use hexpath::randomize::{randomize_scenario, Scenario};
use hexpath::Grid;

/// ASCII sketch of the grid with the found path overlaid.
/// Odd rows are indented to hint at the stagger.
fn sketch(grid: &Grid, scenario: &Scenario, path: &[hexpath::PathStep]) -> String {
    let on_path: HashSet<i32> = path.iter().map(|step| step.instance_index).collect();
    let mut out = String::new();

    for y in 0..grid.size {
        if y % 2 == 1 {
            out.push(' ');
        }
        for x in 0..grid.size {
            let index = match grid.index_at(x, y) {
                Some(index) => index,
                None => continue,
            };
            let tile = match grid.tile(index) {
                Some(tile) => tile,
                None => continue,
            };
            let symbol = if index == scenario.start_index {
                'S'
            } else if index == scenario.goal_index {
                'G'
            } else if tile.is_obstacle {
                '#'
            } else if on_path.contains(&index) {
                '*'
            } else {
                '.'
            };
            out.push(symbol);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn main() {
    // Usage: hexpath [seed]
    // Without a seed every run rolls a different scenario.
    let args: Vec<String> = env::args().collect();
    let mut rng = if args.len() > 1 {
        match args[1].parse::<u64>() {
            Ok(seed) => StdRng::seed_from_u64(seed),
            Err(_) => {
                eprintln!("Usage: {} [seed]", args[0]);
                process::exit(1);
            }
        }
    } else {
        StdRng::from_entropy()
    };

    let config = Config::load();
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    }

    let mut log = ActionLog::new();

    log.log_start(Action::Regenerate { size: config.grid.size });
    let mut grid = match Grid::generate(config.grid.size, config.grid.hex_radius, &mut rng) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to generate grid: {}", e);
            process::exit(1);
        }
    };
    log.log_finish(Action::Regenerate { size: config.grid.size });

    let center = grid.center();
    println!(
        "Generated {}x{} grid ({} tiles), center at ({:.1}, {:.1})",
        grid.size,
        grid.size,
        grid.tile_count(),
        center.x,
        center.y
    );

    let scenario = match randomize_scenario(&mut grid, &mut rng, &config.randomize) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Failed to roll scenario: {}", e);
            process::exit(1);
        }
    };
    log.log_finish(Action::RandomizeScenario {
        size: grid.size,
        start_index: scenario.start_index,
        goal_index: scenario.goal_index,
    });
    println!(
        "Scenario: {}x{} grid, start {} -> goal {}",
        grid.size, grid.size, scenario.start_index, scenario.goal_index
    );

    let path = find_path(&mut grid, scenario.start_index, scenario.goal_index);
    log.log_finish(Action::FindPath {
        start_index: scenario.start_index,
        goal_index: scenario.goal_index,
        path_len: path.len(),
    });

    if path.is_empty() {
        println!("No path between {} and {}", scenario.start_index, scenario.goal_index);
    } else {
        println!("Path ({} tiles): {}", path.len(), format_path(&path));
        println!("Weighted cost: {:.1}", path_cost(&grid, &path));
    }
    println!("\n{}", sketch(&grid, &scenario, &path));

    if config.logging.enable_action_log {
        if let Err(e) = log.save_to_file(&config.logging.action_log_path) {
            eprintln!("Failed to save action log: {}", e);
        } else {
            println!("Action log saved to {}", config.logging.action_log_path);
        }
    }
    println!("{}", log.summary());
}
