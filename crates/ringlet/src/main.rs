//! Ringlet CLI - console front end for the polynomial and recursion crates

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ringlet::core::{NodePool, PoolConfig};
use ringlet::poly::{self, CircularPoly, ReadError, Tokens};
use ringlet::recursion::{ackermann_iterative, ackermann_recursive, for_each_subset, format_subset};

/// Sparse polynomials over a recycling node pool
#[derive(Parser, Debug)]
#[command(name = "ringlet", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read two linked-list polynomials (n c1 e1 ... cn en) from stdin and
    /// print their sum, difference, product and p1(x)
    Poly {
        /// Point at which p1 is evaluated
        #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
        at: f64,

        /// Sort, merge and drop zero terms on input instead of keeping it verbatim
        #[arg(long)]
        normalize: bool,

        /// Node slots to reserve in the pool up front
        #[arg(long, default_value_t = PoolConfig::DEFAULT_CAPACITY)]
        pool_capacity: usize,
    },

    /// Read two term-array polynomials from stdin and print their sum,
    /// product and values at x
    ArrayPoly {
        /// Point at which both polynomials are evaluated
        #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
        at: f64,
    },

    /// Compute the Ackermann function A(m, n)
    Ackermann {
        /// First argument
        m: u64,

        /// Second argument
        n: u64,

        /// Which implementation to run
        #[arg(long, value_enum, default_value_t = Method::Both)]
        method: Method,
    },

    /// Print every subset of the given items
    Powerset {
        /// Elements of the set
        items: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Direct recursion
    Recursive,
    /// Explicit stack
    Iterative,
    /// Run both and print both results
    Both,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_poly(at: f64, normalize: bool, pool_capacity: usize) -> Result<()> {
    let pool = NodePool::with_config(PoolConfig {
        initial_capacity: pool_capacity,
    });
    let mut tokens = Tokens::from_reader(io::stdin().lock()).context("failed to read stdin")?;

    let read: for<'p> fn(&'p NodePool, &mut Tokens) -> Result<CircularPoly<'p>, ReadError> =
        if normalize { poly::read } else { poly::read_raw };
    let p1 = read(&pool, &mut tokens).context("failed to read p1")?;
    let p2 = read(&pool, &mut tokens).context("failed to read p2")?;
    info!(p1 = p1.len(), p2 = p2.len(), normalize, "read polynomials");

    let mut out = io::stdout().lock();
    writeln!(out, "p1 = {p1}")?;
    writeln!(out, "p2 = {p2}")?;
    writeln!(out, "p1 + p2 = {}", &p1 + &p2)?;
    writeln!(out, "p1 - p2 = {}", &p1 - &p2)?;
    writeln!(out, "p1 * p2 = {}", &p1 * &p2)?;
    writeln!(out, "p1({at}) = {}", p1.evaluate(at))?;

    let stats = pool.stats();
    debug!(
        nodes = pool.node_count(),
        free = pool.free_len(),
        acquired = stats.acquired,
        reused = stats.reused,
        "pool statistics"
    );
    Ok(())
}

fn run_array_poly(at: f64) -> Result<()> {
    let mut tokens = Tokens::from_reader(io::stdin().lock()).context("failed to read stdin")?;
    let p1 = poly::read_array(&mut tokens).context("failed to read p1")?;
    let p2 = poly::read_array(&mut tokens).context("failed to read p2")?;

    let mut out = io::stdout().lock();
    writeln!(out, "p1(x) = {p1}")?;
    writeln!(out, "p2(x) = {p2}")?;
    writeln!(out, "p1 + p2 = {}", p1.add(&p2))?;
    writeln!(out, "p1 * p2 = {}", p1.mul(&p2))?;
    writeln!(out, "p1({at}) = {}", p1.eval(at))?;
    writeln!(out, "p2({at}) = {}", p2.eval(at))?;
    Ok(())
}

fn run_ackermann(m: u64, n: u64, method: Method) -> Result<()> {
    debug!(m, n, ?method, "computing ackermann");

    let mut out = io::stdout().lock();
    match method {
        Method::Recursive => writeln!(out, "recursive = {}", ackermann_recursive(m, n))?,
        Method::Iterative => writeln!(out, "iterative = {}", ackermann_iterative(m, n))?,
        Method::Both => {
            let recursive = ackermann_recursive(m, n);
            let iterative = ackermann_iterative(m, n);
            writeln!(out, "recursive = {recursive}, iterative = {iterative}")?;
        }
    }
    Ok(())
}

fn run_powerset(items: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut result = Ok(());
    for_each_subset(items, |subset| {
        if result.is_ok() {
            result = writeln!(out, "{}", format_subset(subset));
        }
    });
    Ok(result?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Poly {
            at,
            normalize,
            pool_capacity,
        } => run_poly(at, normalize, pool_capacity),
        Command::ArrayPoly { at } => run_array_poly(at),
        Command::Ackermann { m, n, method } => run_ackermann(m, n, method),
        Command::Powerset { items } => run_powerset(&items),
    }
}
