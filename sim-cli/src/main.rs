//! A command-line driver for the example circuits in `sim-cells`.
//!
//! Builds one of a handful of worked circuits, drives its inputs from the command line, ticks
//! the simulator once, and prints the resolved outputs. The `profile` subcommand instead builds
//! a long inverter chain and reports wall-clock time over many ticks, standing in for the
//! original project's `cProfile`-wrapped driver script.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use sim_cells::{FullAdder, HalfAdder, NotGate, SrLatch};
use sim_core::{LogicValue, Simulator};

/// Drive and inspect the example circuits in `sim-cells`.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Drive a two-input half adder and print its sum and carry.
    HalfAdder {
        #[arg(value_enum)]
        a: Bit,
        #[arg(value_enum)]
        b: Bit,
    },
    /// Drive a three-input full adder and print its sum and carry.
    FullAdder {
        #[arg(value_enum)]
        a: Bit,
        #[arg(value_enum)]
        b: Bit,
        #[arg(value_enum, name = "carry-in")]
        carry_in: Bit,
    },
    /// Drive an SR latch through a set then a reset and print the output after each tick.
    SrLatch,
    /// Build a chain of `stages` inverters, tick it a handful of times, and report how long the
    /// solver took.
    Profile {
        /// Number of inverter stages in the chain.
        #[arg(long, default_value_t = 1000)]
        stages: usize,
        /// Number of ticks to run for timing purposes.
        #[arg(long, default_value_t = 1)]
        iterations: usize,
    },
}

/// A two-valued input, the only kind a CLI user can sensibly set directly; `X`/`Z` are states
/// the simulator produces, not ones a caller drives in.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Bit {
    #[value(name = "0")]
    Zero,
    #[value(name = "1")]
    One,
}

impl From<Bit> for LogicValue {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => LogicValue::Zero,
            Bit::One => LogicValue::One,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::HalfAdder { a, b } => run_half_adder(a.into(), b.into()),
        Command::FullAdder { a, b, carry_in } => run_full_adder(a.into(), b.into(), carry_in.into()),
        Command::SrLatch => run_sr_latch(),
        Command::Profile { stages, iterations } => run_profile(stages, iterations),
    }
}

fn run_half_adder(a: LogicValue, b: LogicValue) -> Result<()> {
    let mut sim = Simulator::new();
    let adder = HalfAdder::new(&mut sim).context("building half adder")?;
    let in_a = sim.create_input().context("allocating input a")?;
    let in_b = sim.create_input().context("allocating input b")?;
    sim.connect(in_a.node(), adder.a)?;
    sim.connect(in_b.node(), adder.b)?;
    sim.build_topology().context("freezing topology")?;

    sim.input_set(in_a, a)?;
    sim.input_set(in_b, b)?;
    let outcome = sim.tick().context("ticking half adder")?;
    info!("half adder settled: {outcome:?}");

    println!(
        "sum = {}, carry = {}",
        sim.node_resolved_value(adder.sum)?,
        sim.node_resolved_value(adder.carry)?
    );
    Ok(())
}

fn run_full_adder(a: LogicValue, b: LogicValue, carry_in: LogicValue) -> Result<()> {
    let mut sim = Simulator::new();
    let adder = FullAdder::new(&mut sim).context("building full adder")?;
    let in_a = sim.create_input().context("allocating input a")?;
    let in_b = sim.create_input().context("allocating input b")?;
    let in_carry = sim.create_input().context("allocating carry-in input")?;
    sim.connect(in_a.node(), adder.a)?;
    sim.connect(in_b.node(), adder.b)?;
    sim.connect(in_carry.node(), adder.carry_in)?;
    sim.build_topology().context("freezing topology")?;

    sim.input_set(in_a, a)?;
    sim.input_set(in_b, b)?;
    sim.input_set(in_carry, carry_in)?;
    let outcome = sim.tick().context("ticking full adder")?;
    info!("full adder settled: {outcome:?}");

    println!(
        "sum = {}, carry = {}",
        sim.node_resolved_value(adder.sum)?,
        sim.node_resolved_value(adder.carry)?
    );
    Ok(())
}

fn run_sr_latch() -> Result<()> {
    let mut sim = Simulator::new();
    let latch = SrLatch::new(&mut sim).context("building SR latch")?;
    let set = sim.create_input().context("allocating set input")?;
    let reset = sim.create_input().context("allocating reset input")?;
    sim.connect(set.node(), latch.set)?;
    sim.connect(reset.node(), latch.reset)?;
    sim.build_topology().context("freezing topology")?;

    sim.input_set(set, LogicValue::One)?;
    sim.input_set(reset, LogicValue::Zero)?;
    sim.tick().context("ticking set")?;
    println!("after set:   output = {}", sim.node_resolved_value(latch.output)?);

    sim.input_set(set, LogicValue::Zero)?;
    sim.tick().context("ticking with set released")?;
    println!(
        "after releasing set (floats, does not hold): output = {}",
        sim.node_resolved_value(latch.output)?
    );

    sim.input_set(reset, LogicValue::One)?;
    sim.tick().context("ticking reset")?;
    println!("after reset: output = {}", sim.node_resolved_value(latch.output)?);

    Ok(())
}

fn run_profile(stages: usize, iterations: usize) -> Result<()> {
    let mut sim = Simulator::new();
    let input = sim.create_input().context("allocating chain input")?;
    let probe = sim.create_probe().context("allocating chain probe")?;

    let mut previous = input.node();
    for _ in 0..stages {
        let gate = NotGate::new(&mut sim).context("building inverter stage")?;
        sim.connect(previous, gate.input)?;
        previous = gate.output;
    }
    sim.connect(previous, probe.node())?;
    sim.build_topology().context("freezing topology")?;

    let started = Instant::now();
    for _ in 0..iterations {
        sim.input_set(input, LogicValue::One)?;
        sim.tick().context("ticking with input = 1")?;
        sim.input_set(input, LogicValue::Zero)?;
        sim.tick().context("ticking with input = 0")?;
    }
    let elapsed = started.elapsed();

    sim.input_set(input, LogicValue::One)?;
    sim.tick()?;
    println!("input = 1 -> output = {}", sim.probe_sample(probe)?);
    sim.input_set(input, LogicValue::Zero)?;
    sim.tick()?;
    println!("input = 0 -> output = {}", sim.probe_sample(probe)?);

    println!(
        "{stages} stages, {iterations} iteration(s) of 2 ticks each: {elapsed:?} total, {:?} per tick",
        elapsed / (2 * iterations.max(1) as u32)
    );
    Ok(())
}
