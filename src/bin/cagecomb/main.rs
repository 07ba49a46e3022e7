#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::fmt::Display;

use anyhow::Result;
use cagecomb::{
    boxes, diagnostics, l_shape_summary, l_shapes, line, prime_factors, products, range, sums,
    Value,
};
use itertools::Itertools;
use log::LevelFilter;

use crate::options::{Command, Digest, Options};

mod options;

fn main() -> Result<()> {
    let options = Options::from_args()?;
    let mut logger = env_logger::Builder::from_default_env();
    if options.trace() {
        logger.filter_module("cagecomb", LevelFilter::Trace);
    }
    logger.init();
    diagnostics::init(options.trace());
    run(options.into_command());
    Ok(())
}

fn run(command: Command) {
    match command {
        Command::Range { n, base, excluded } => {
            println!("{}", join(range(n, base, &excluded)));
        }
        Command::Line {
            pool,
            width,
            filter,
            digest,
        } => {
            let candidates: Vec<_> = line(pool, width, &filter).collect();
            print_candidates(&candidates, digest);
        }
        Command::LShape {
            pool,
            width,
            extra,
            no_double,
            filter,
            summary,
        } => {
            if summary {
                let summary = l_shape_summary(pool, width, extra, &no_double, &filter);
                println!("line:  {}", join(summary.line_values));
                println!("extra: {}", join(summary.extra_values));
            } else {
                let mut count = 0;
                for shape in l_shapes(pool, width, extra, &no_double, &filter) {
                    println!("{} | {}", join(&shape.line), shape.extra);
                    count += 1;
                }
                println!("{} found", count);
            }
        }
        Command::Box {
            pool,
            no_double,
            filter,
            digest,
        } => {
            let candidates: Vec<_> = boxes(pool, &no_double, &filter).collect();
            print_candidates(&candidates, digest);
        }
        Command::Factor { n } => {
            println!("{}: {}", n, join(prime_factors(n)));
        }
    }
}

fn print_candidates<T: AsRef<[Value]>>(candidates: &[T], digest: Digest) {
    if digest.any() {
        if digest.sums {
            println!("sums:     {}", join(sums(candidates)));
        }
        if digest.products {
            println!("products: {}", join(products(candidates)));
        }
        return;
    }
    for candidate in candidates {
        println!("{}", join(candidate.as_ref()));
    }
    println!("{} found", candidates.len());
}

fn join<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    values.into_iter().join(" ")
}
