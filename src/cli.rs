//! Command-line driver: read an instance, solve it, write the solution.

use crate::constants::DEFAULT_SEED;
use crate::instance::Instance;
use crate::planner::PlannerBuilder;
use crate::point::Point;
use crate::solution::Solution;
use crate::solver::SolverVariant;
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

fn parse_variant(s: &str) -> Result<SolverVariant, String> {
    s.parse::<SolverVariant>().map_err(|e| e.to_string())
}

/// Place signal towers covering every city of an instance.
#[derive(Parser, Debug)]
#[command(name = "tower-planner", version)]
pub struct Cli {
    /// Instance file to read. Use - for stdin.
    pub input: String,

    /// Solver to run: naive, simple-greedy, forreal or minnie.
    #[arg(long, value_parser = parse_variant)]
    pub solver: SolverVariant,

    /// Output file. Use - for stdout.
    #[arg(default_value = "-")]
    pub output: String,

    /// Seed for randomised tie-breaking (minnie).
    #[arg(long, env = "TOWER_PLANNER_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write a JSON report instead of the solution text format.
    #[arg(long)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

#[derive(Serialize)]
struct SolutionReport<'a> {
    solver: SolverVariant,
    penalty: f64,
    towers: &'a [Point],
}

pub fn read_input(path: &str) -> Result<String> {
    let mut text = String::new();
    if path == "-" {
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read instance from stdin")?;
    } else {
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut text))
            .with_context(|| format!("Failed to read instance from {}", path))?;
    }
    Ok(text)
}

pub fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file =
            File::create(path).with_context(|| format!("Failed to create output {}", path))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

pub fn write_solution<W: Write>(
    solution: &Solution,
    solver: SolverVariant,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        let report = SolutionReport {
            solver,
            penalty: solution.penalty(),
            towers: &solution.towers,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        solution.serialize(out)?;
    }
    Ok(())
}

/// Run the driver and return the solution it wrote.
pub fn run(cli: Cli) -> Result<Solution> {
    let text = read_input(&cli.input)?;
    let instance = Instance::parse(&text)
        .with_context(|| format!("Failed to parse instance {}", cli.input))?;

    let planner = PlannerBuilder::new()
        .variant(cli.solver)
        .seed(cli.seed)
        .build();
    let solution = planner.solve(&instance)?;

    if !solution.valid() {
        bail!(
            "Solver '{}' produced an invalid solution for {}",
            cli.solver,
            cli.input
        );
    }

    info!("Penalty: {}", solution.penalty());

    let mut out = open_output(&cli.output)?;
    write_solution(&solution, cli.solver, cli.json, &mut out)?;
    out.flush()
        .with_context(|| format!("Failed to write solution to {}", cli.output))?;

    Ok(solution)
}
