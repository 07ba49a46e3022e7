use anyhow::{anyhow, Context, Result};
use cagecomb::parse::{parse_filter, parse_pool, parse_range_bound, parse_values};
use cagecomb::{Base, CageFilter, Pool, Value};
use clap::ArgMatches;

pub(crate) struct Options {
    trace: bool,
    command: Command,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let (name, sub_matches) = matches.subcommand();
        let trace = matches.is_present("trace")
            || sub_matches.map_or(false, |m| m.is_present("trace"));
        let command = match (name, sub_matches) {
            ("range", Some(m)) => Command::Range {
                n: range_bound_arg(m)?,
                base: if m.is_present("zero") {
                    Base::Zero
                } else {
                    Base::One
                },
                excluded: values_arg(m, "exclude")?,
            },
            ("line", Some(m)) => Command::Line {
                pool: pool_arg(m, "pool")?,
                width: width_arg(m)?,
                filter: filter_args(m)?,
                digest: Digest::from_matches(m),
            },
            ("lshape", Some(m)) => Command::LShape {
                pool: pool_arg(m, "pool")?,
                width: width_arg(m)?,
                extra: match m.value_of("extra") {
                    Some(_) => Some(pool_arg(m, "extra")?),
                    None => None,
                },
                no_double: values_arg(m, "no_double")?,
                filter: filter_args(m)?,
                summary: m.is_present("summary"),
            },
            ("box", Some(m)) => Command::Box {
                pool: pool_arg(m, "pool")?,
                no_double: values_arg(m, "no_double")?,
                filter: filter_args(m)?,
                digest: Digest::from_matches(m),
            },
            ("factor", Some(m)) => Command::Factor {
                n: value_arg(m, "n")?,
            },
            (name, _) => return Err(anyhow!("unknown command \"{}\"", name)),
        };
        Ok(Self { trace, command })
    }

    pub fn trace(&self) -> bool {
        self.trace
    }

    pub fn into_command(self) -> Command {
        self.command
    }
}

pub(crate) enum Command {
    Range {
        n: Value,
        base: Base,
        excluded: Vec<Value>,
    },
    Line {
        pool: Pool,
        width: usize,
        filter: CageFilter,
        digest: Digest,
    },
    LShape {
        pool: Pool,
        width: usize,
        extra: Option<Pool>,
        no_double: Vec<Value>,
        filter: CageFilter,
        summary: bool,
    },
    Box {
        pool: Pool,
        no_double: Vec<Value>,
        filter: CageFilter,
        digest: Digest,
    },
    Factor {
        n: Value,
    },
}

/// Print digests instead of every candidate
#[derive(Clone, Copy)]
pub(crate) struct Digest {
    pub sums: bool,
    pub products: bool,
}

impl Digest {
    fn from_matches(matches: &ArgMatches<'_>) -> Self {
        Self {
            sums: matches.is_present("sums"),
            products: matches.is_present("products"),
        }
    }

    pub fn any(self) -> bool {
        self.sums || self.products
    }
}

fn value_arg(matches: &ArgMatches<'_>, name: &str) -> Result<Value> {
    let s = matches.value_of(name).unwrap_or_default();
    s.trim()
        .parse()
        .with_context(|| format!("invalid number \"{}\"", s))
}

fn range_bound_arg(matches: &ArgMatches<'_>) -> Result<Value> {
    let s = matches.value_of("n").unwrap_or_default();
    parse_range_bound(s).with_context(|| format!("invalid range bound \"{}\"", s))
}

fn width_arg(matches: &ArgMatches<'_>) -> Result<usize> {
    let s = matches.value_of("width").unwrap_or_default();
    s.trim()
        .parse()
        .with_context(|| format!("invalid width \"{}\"", s))
}

fn values_arg(matches: &ArgMatches<'_>, name: &str) -> Result<Vec<Value>> {
    let s = matches.value_of(name).unwrap_or_default();
    parse_values(s).with_context(|| format!("invalid list \"{}\"", s))
}

fn pool_arg(matches: &ArgMatches<'_>, name: &str) -> Result<Pool> {
    let s = matches.value_of(name).unwrap_or_default();
    parse_pool(s).with_context(|| format!("invalid pool \"{}\"", s))
}

fn filter_args(matches: &ArgMatches<'_>) -> Result<CageFilter> {
    let mut filter = CageFilter::new();
    if let Some(s) = matches.value_of("adds_to") {
        let spec = parse_filter(s).with_context(|| format!("invalid sum \"{}\"", s))?;
        filter = filter.adds_to(spec);
    }
    if let Some(s) = matches.value_of("mult_to") {
        let spec = parse_filter(s).with_context(|| format!("invalid product \"{}\"", s))?;
        filter = filter.mult_to(spec);
    }
    Ok(filter)
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, SubCommand};

    let pool = || {
        Arg::with_name("pool")
            .required(true)
            .value_name("POOL")
            .help("cell values: \"9\" for 1 to 9, \"9/2,5\" for 1 to 9 except 2 and 5, or a list like \"1,3,4\"")
    };
    let width = || {
        Arg::with_name("width")
            .required(true)
            .value_name("WIDTH")
            .help("the number of cells in the shape")
    };
    let adds_to = || {
        Arg::with_name("adds_to")
            .short("a")
            .long("adds-to")
            .takes_value(true)
            .value_name("FILTER")
            .help("the sum of the shape: \"14\", \"12,14\", \"atmost:36\", \"div:150\" or \"any\"")
    };
    let mult_to = || {
        Arg::with_name("mult_to")
            .short("m")
            .long("mult-to")
            .takes_value(true)
            .value_name("FILTER")
            .help("the product of the shape, in the same forms as --adds-to")
    };
    let no_double = || {
        Arg::with_name("no_double")
            .short("d")
            .long("no-double")
            .takes_value(true)
            .value_name("LIST")
            .help("values that may not appear twice in the shape")
    };
    let sums = || {
        Arg::with_name("sums")
            .long("sums")
            .help("print the distinct sums instead of each candidate")
    };
    let products = || {
        Arg::with_name("products")
            .long("products")
            .help("print the distinct products instead of each candidate")
    };

    App::new("cagecomb")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("List candidate values for KenKen cages")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("trace")
                .long("trace")
                .global(true)
                .help("log each generation step"),
        )
        .subcommand(
            SubCommand::with_name("range")
                .about("list the numbers from 1 (or 0) to N")
                .arg(Arg::with_name("n").required(true).value_name("N"))
                .arg(
                    Arg::with_name("zero")
                        .short("z")
                        .long("zero")
                        .help("start at 0 instead of 1"),
                )
                .arg(
                    Arg::with_name("exclude")
                        .short("x")
                        .long("exclude")
                        .takes_value(true)
                        .value_name("LIST")
                        .help("values to leave out"),
                ),
        )
        .subcommand(
            SubCommand::with_name("line")
                .about("list the possible contents of colinear cells")
                .arg(pool())
                .arg(width())
                .arg(adds_to())
                .arg(mult_to())
                .arg(sums())
                .arg(products()),
        )
        .subcommand(
            SubCommand::with_name("lshape")
                .about("list the possible contents of a line of WIDTH - 1 cells plus one cell off the line")
                .arg(pool())
                .arg(width())
                .arg(
                    Arg::with_name("extra")
                        .short("e")
                        .long("extra")
                        .takes_value(true)
                        .value_name("POOL")
                        .help("values of the cell off the line, if different from POOL"),
                )
                .arg(no_double())
                .arg(adds_to())
                .arg(mult_to())
                .arg(
                    Arg::with_name("summary")
                        .short("s")
                        .long("summary")
                        .help("print only the values possible in the line and in the extra cell"),
                ),
        )
        .subcommand(
            SubCommand::with_name("box")
                .about("list the possible contents of a 2x2 box")
                .arg(pool())
                .arg(no_double())
                .arg(adds_to())
                .arg(mult_to())
                .arg(sums())
                .arg(products()),
        )
        .subcommand(
            SubCommand::with_name("factor")
                .about("list the prime factors of N")
                .arg(Arg::with_name("n").required(true).value_name("N")),
        )
}
