// src/cli/handlers.rs
use crate::config::Config;
use crate::error::ShortpathError;
use crate::exit::ShortpathExit;
use crate::input::{self, Query, BUILTIN_DESTINATION, BUILTIN_SOURCE};
use crate::report::{self, console};
use crate::solver::{self, Solution};
use anyhow::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Handles the demo command: the built-in table, `node0` to `node5`.
///
/// With `json`, the state and route are emitted as one object.
///
/// # Errors
/// Returns error if the search or JSON rendering fails.
pub fn handle_demo(config: &Config, json: bool) -> Result<ShortpathExit> {
    let edges = input::builtin_records()?;
    let solution = solver::solve(&edges, BUILTIN_SOURCE, BUILTIN_DESTINATION, config.strategy)?;
    if json {
        let dump =
            report::render_solution_json(&solution.graph, &solution.state, &solution.route)?;
        println!("{dump}");
    } else {
        console::print_state(&solution.graph, &solution.state, &config.render);
        console::print_route(&solution.route, &config.render);
    }
    Ok(ShortpathExit::Success)
}

/// Handles the dump command.
///
/// # Errors
/// Returns error if input cannot be read or parsed, or a query label is unknown.
pub fn handle_dump(config: &Config, file: Option<&Path>, json: bool) -> Result<ShortpathExit> {
    let solution = solve_input(config, file)?;
    print_state(&solution, config, json)?;
    Ok(ShortpathExit::Success)
}

/// Handles the route command. Unreachable destinations still exit 0.
///
/// # Errors
/// Returns error if input cannot be read or parsed, or a query label is unknown.
pub fn handle_route(config: &Config, file: Option<&Path>) -> Result<ShortpathExit> {
    let solution = solve_input(config, file)?;
    console::print_route(&solution.route, &config.render);
    Ok(ShortpathExit::Success)
}

fn solve_input(config: &Config, file: Option<&Path>) -> Result<Solution> {
    let text = read_input(file)?;
    let query = Query::parse(&text, &config.delimiters)?;
    Ok(solver::solve_query(&query, config.strategy)?)
}

fn print_state(solution: &Solution, config: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", report::render_state_json(&solution.graph, &solution.state)?);
    } else {
        console::print_state(&solution.graph, &solution.state, &config.render);
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| ShortpathError::Io {
                source,
                path: path.to_path_buf(),
            })?;
            Ok(text)
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(ShortpathError::from)?;
            Ok(buf)
        }
    }
}
