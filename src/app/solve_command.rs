use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use exaf::{
    aa::{self, AAFramework, AcceptanceMode, Semantics},
    io::{AspartixReader, AspartixWriter, InstanceReader, ResponseWriter},
    solvers::{AcceptanceQueryEvaluator, EnumerationOptions},
};
use log::{info, warn};

const CMD_NAME: &str = "solve";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARG: &str = "ARG";
const ARG_CERTIFICATE: &str = "CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .help("the problem to solve (see the problems command)")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument (for DC/DS queries)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_CERTIFICATE)
                    .long("with-certificate")
                    .takes_value(false)
                    .help("give a witness or a counterexample extension for acceptance queries"),
            )
            .args(&common::enumeration_args())
            .arg(common::strict_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let (query, semantics) = aa::read_problem_string(
            arg_matches
                .value_of(ARG_PROBLEM)
                .ok_or_else(|| anyhow!("missing problem"))?,
        )?;
        let options = common::read_enumeration_options(arg_matches)?;
        let mut reader = AspartixReader::default();
        let strict = arg_matches.is_present(common::ARG_STRICT);
        let af = common::read_file_path(file, &mut reader, strict)?;
        let arg = arg_matches.value_of(ARG_ARG).map(str::trim);
        let mode = match query.acceptance_mode() {
            Some(m) => m,
            None => {
                if arg.is_some() {
                    warn!(
                        "unexpected argument on the command line (useless for query {})",
                        query.as_ref()
                    );
                }
                return enumerate_extensions(&af, semantics, options);
            }
        };
        let arg = arg.ok_or_else(|| {
            anyhow!(
                "missing argument on the command line (required for query {})",
                query.as_ref()
            )
        })?;
        if let Err(e) = reader.read_arg_from_str(&af, arg) {
            if strict {
                return Err(e.context("while parsing the argument passed to the command line"));
            }
            warn!("{}; it cannot be accepted", e);
        }
        let with_certificate = arg_matches.is_present(ARG_CERTIFICATE);
        check_acceptance(&af, semantics, mode, arg, options, with_certificate)
    }
}

fn enumerate_extensions(
    af: &AAFramework<String>,
    semantics: Semantics,
    options: EnumerationOptions,
) -> Result<()> {
    let mut evaluator = AcceptanceQueryEvaluator::new_with_options(af, options);
    let extensions = evaluator.extensions(semantics).to_arguments(af);
    info!(
        "found {} extension(s) for semantics {}",
        extensions.len(),
        semantics.as_ref()
    );
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    writer.write_extensions(&mut out, &extensions)
}

fn check_acceptance(
    af: &AAFramework<String>,
    semantics: Semantics,
    mode: AcceptanceMode,
    arg: &str,
    options: EnumerationOptions,
    with_certificate: bool,
) -> Result<()> {
    let mut evaluator = AcceptanceQueryEvaluator::new_with_options(af, options);
    let (acceptance_status, certificate) =
        evaluator.accepts_with_certificate(&arg.to_string(), semantics, mode);
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    writer.write_acceptance_status(&mut out, acceptance_status)?;
    if with_certificate {
        match certificate {
            Some(c) => writer.write_single_extension(&mut out, &c)?,
            None => info!("no certificate for this answer"),
        }
    }
    Ok(())
}
