use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ProblemsCommand,
    SolveCommand,
};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use exaf::{
    aa::{AAFramework, LabelType},
    io::InstanceReader,
    solvers::{EnumerationOptions, EnumerationStrategy},
};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};
use strum::IntoEnumIterator;

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Exaf, an exhaustive reasoner for the complete and stable semantics of abstract argumentation frameworks.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF")
        .required(true)
}

pub(crate) const ARG_STRICT: &str = "STRICT";

pub(crate) fn strict_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_STRICT)
        .long("strict")
        .takes_value(false)
        .help("reject frameworks in which attacks involve undeclared arguments")
}

pub(crate) const ARG_STRATEGY: &str = "STRATEGY";
pub(crate) const ARG_THREADS: &str = "THREADS";

pub(crate) fn enumeration_args() -> Vec<Arg<'static, 'static>> {
    let strategy_names = EnumerationStrategy::iter()
        .map(|s| s.into())
        .collect::<Vec<&'static str>>();
    let default_strategy: &'static str = EnumerationStrategy::default().into();
    vec![
        Arg::with_name(ARG_STRATEGY)
            .long("strategy")
            .empty_values(false)
            .multiple(false)
            .possible_values(&strategy_names)
            .default_value(default_strategy)
            .help("the way candidate sets of arguments are enumerated"),
        Arg::with_name(ARG_THREADS)
            .long("threads")
            .empty_values(false)
            .multiple(false)
            .default_value("1")
            .help("the number of threads used to check the candidate sets"),
    ]
}

pub(crate) fn read_enumeration_options(arg_matches: &ArgMatches<'_>) -> Result<EnumerationOptions> {
    let strategy = match arg_matches.value_of(ARG_STRATEGY) {
        Some(s) => EnumerationStrategy::try_from(s)?,
        None => EnumerationStrategy::default(),
    };
    let n_threads = match arg_matches.value_of(ARG_THREADS) {
        Some(s) => s
            .parse::<usize>()
            .with_context(|| format!("while parsing the number of threads {:?}", s))?,
        None => 1,
    };
    if n_threads == 0 {
        return Err(anyhow!("the number of threads must be at least 1"));
    }
    info!(
        "enumerating with strategy {} on {} thread(s)",
        strategy.as_ref(),
        n_threads
    );
    Ok(EnumerationOptions {
        strategy,
        n_threads,
    })
}

pub(crate) fn read_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
    strict: bool,
) -> Result<AAFramework<T>>
where
    T: LabelType,
{
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let file = File::open(&canonicalized)
        .with_context(|| format!("while opening file {:?}", canonicalized))?;
    let mut file_reader = BufReader::new(file);
    let af = reader
        .read(&mut file_reader)
        .with_context(|| format!("while reading file {:?}", canonicalized))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    let n_undeclared = af.argument_set().n_undeclared();
    if n_undeclared > 0 {
        if strict {
            af.check_attacks_declared()
                .context("the framework was rejected in strict mode")?;
        }
        warn!(
            "{} argument(s) are referenced by attacks without being declared",
            n_undeclared
        );
    }
    Ok(af)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
