//! Command-line front-end for the multiplication benchmark.
//!
//! ```text
//! matbench <size> <workers> [backend] [kernel] [--seed N]
//! ```
//!
//! Fills A and B randomly, dispatches the partitioned multiply on the chosen
//! backend, prints the elapsed wall-clock microseconds, and for small
//! dimensions pretty-prints the matrices and verifies the product.

use std::env;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use matbench::arena::Arena;
use matbench::backend::BackendKind;
use matbench::error::Result;
use matbench::kernel::Kernel;
use matbench::matrix::{print_matrix, random_fill, transpose};
use matbench::timer::Stopwatch;
use matbench::verify::verify;
use matbench::DISPLAY_MAX;

struct Config {
    d: usize,
    workers: usize,
    backend: BackendKind,
    kernel: Kernel,
    seed: Option<u64>,
}

fn usage() {
    println!("\nUse: matbench <size> <workers> [backend] [kernel] [--seed N]");
    println!("\tsize:    dimension of the square matrices (NxN), >= 1");
    println!("\tworkers: number of parallel workers, >= 1");
    println!("\tbackend: threads (default) | process | rayon");
    println!("\tkernel:  direct (default) | transposed");
    println!("\t--seed:  fixed RNG seed for reproducible fills\n");
}

fn parse_args(args: &[String]) -> Option<Config> {
    let mut positional = Vec::new();
    let mut seed = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--seed" {
            seed = Some(iter.next()?.parse::<u64>().ok()?);
        } else {
            positional.push(arg.as_str());
        }
    }

    if positional.len() < 2 || positional.len() > 4 {
        return None;
    }

    let d = positional[0].parse::<usize>().ok().filter(|&d| d > 0)?;
    let workers = positional[1].parse::<usize>().ok().filter(|&w| w > 0)?;
    let backend = match positional.get(2) {
        Some(s) => s.parse::<BackendKind>().ok()?,
        None => BackendKind::Threads,
    };
    let kernel = match positional.get(3) {
        Some(s) => s.parse::<Kernel>().ok()?,
        None => Kernel::Direct,
    };

    Some(Config {
        d,
        workers,
        backend,
        kernel,
        seed,
    })
}

fn run(cfg: &Config) -> Result<()> {
    let d = cfg.d;
    let sharing = cfg.backend.sharing();

    let mut a = Arena::new(d * d, sharing)?;
    let mut b = Arena::new(d * d, sharing)?;
    let mut c = Arena::new(d * d, sharing)?;

    let mut rng = match cfg.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    random_fill(a.as_mut_slice(), b.as_mut_slice(), &mut rng);
    print_matrix(a.as_slice(), d);
    print_matrix(b.as_slice(), d);

    // Bᵀ is materialized once before dispatch; B itself is never mutated.
    let bt = match cfg.kernel {
        Kernel::Transposed => {
            let mut bt = Arena::new(d * d, sharing)?;
            transpose(b.as_slice(), bt.as_mut_slice(), d);
            Some(bt)
        }
        Kernel::Direct => None,
    };
    let operand = match &bt {
        Some(bt) => bt.as_slice(),
        None => b.as_slice(),
    };

    let sw = Stopwatch::start();
    cfg.backend
        .execute(a.as_slice(), operand, c.as_mut_slice(), d, cfg.workers, cfg.kernel)?;
    // 9-column microsecond figure, one per line, for easy aggregation.
    println!("{:9}", sw.elapsed_micros());

    print_matrix(c.as_slice(), d);

    // Verification always runs against the original B, never Bᵀ.
    if d < DISPLAY_MAX {
        if verify(a.as_slice(), b.as_slice(), c.as_slice(), d) {
            println!("\n[OK] verification: product is correct");
        } else {
            println!("\n[ERROR] verification: product is incorrect");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(cfg) = parse_args(&args) else {
        usage();
        return ExitCode::SUCCESS;
    };

    match run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("matbench: {}", e);
            ExitCode::from(1)
        }
    }
}
