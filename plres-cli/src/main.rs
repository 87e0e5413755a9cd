mod os_signal_termination;
mod result;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clause_format::writer::TraceWriter;
use log::error;
use log::info;
use log::warn;
use log::Level;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use plres_core::convert_case::Case;
use plres_core::encoding::ClauseEncoder;
use plres_core::encoding::ClauseSet;
use plres_core::input::parse_clauses;
use plres_core::statistics::configure_statistic_logging;
use plres_core::statistics::log_statistic;
use plres_core::statistics::should_log_statistics;
use plres_core::termination::Combinator;
use plres_core::termination::PivotBudget;
use plres_core::termination::TimeBudget;
use plres_core::ResolutionEngine;
use plres_core::SaturationOptions;
use result::PlresError;
use result::PlresResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The file containing the axioms, one clause per line. Use '-' to read from stdin.
    ///
    /// A clause is a list of literals separated by '|'. A literal is an atom name, optionally
    /// preceded by '~' for negation. Everything after '#' is a comment.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// A file with the clauses of the negated conjecture, in the same format as the axioms.
    ///
    /// The conjecture clauses are added after the axioms.
    #[arg(long = "conjectures", verbatim_doc_comment)]
    conjectures_path: Option<PathBuf>,

    /// Enables log message output from the prover.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Only print the verdict, not the derivation trace.
    ///
    /// Possible values: bool
    #[arg(long = "silent", verbatim_doc_comment)]
    silent: bool,

    /// Log the statistics of the saturation run after the verdict.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// Keep resolvents which are subsumed by a clause that was derived earlier.
    ///
    /// Possible values: bool
    #[arg(long = "no-forward-subsumption", verbatim_doc_comment)]
    no_forward_subsumption: bool,

    /// Do not mask the clauses which are subsumed by a newly derived resolvent.
    ///
    /// Possible values: bool
    #[arg(long = "no-backward-subsumption", verbatim_doc_comment)]
    no_backward_subsumption: bool,

    /// The time budget for the prover, in milliseconds. When it runs out the verdict is
    /// 'UNKNOWN'.
    ///
    /// Possible values: u64
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The maximum number of pivot clauses which are processed before giving up.
    ///
    /// Possible values: u64
    #[arg(long = "pivot-limit", verbatim_doc_comment)]
    pivot_limit: Option<u64>,

    /// If `--verbose` is enabled then this option removes the timestamp information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-timestamp", verbatim_doc_comment)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled then this option removes the call site information from the log
    /// messages. The call site is the file and line from which the message originated.
    ///
    /// Possible values: bool
    #[arg(long = "omit-call-site", verbatim_doc_comment)]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("c STAT", Some(Case::Snake), None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> PlresResult<()> {
    let args = Args::parse();

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    )?;

    if plres_core::asserts::PLRES_ASSERT_LEVEL_DEFINITION
        >= plres_core::asserts::PLRES_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the plres assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            plres_core::asserts::PLRES_ASSERT_LEVEL_DEFINITION
        );
    }

    let mut encoder = ClauseEncoder::default();
    let axioms = read_clauses(&args.instance_path, &mut encoder)?;
    let conjectures = match args.conjectures_path.as_ref() {
        Some(path) => read_clauses(path, &mut encoder)?,
        None => ClauseSet::default(),
    };
    info!(
        "Read {} axioms and {} conjecture clauses over {} atoms",
        axioms.len(),
        conjectures.len(),
        encoder.atoms().len()
    );

    let options = SaturationOptions {
        forward_subsumption: !args.no_forward_subsumption,
        backward_subsumption: !args.no_backward_subsumption,
    };
    let engine = ResolutionEngine::new(axioms, conjectures, options);

    let time_budget = args
        .time_limit
        .map(|millis| TimeBudget::starting_now(Duration::from_millis(millis)));
    let pivot_budget = args.pivot_limit.map(PivotBudget::new);
    let mut termination = Combinator::new(
        OsSignal::install()?,
        Combinator::new(time_budget, pivot_budget),
    );

    let derivation = engine.saturate(&mut termination);

    let mut writer = TraceWriter::new(std::io::stdout());
    if !args.silent {
        for step in derivation.proof_state.trace_steps(&encoder) {
            writer.write_step(&step)?;
        }
    }
    writer.write_conclusion(derivation.outcome.into())?;
    writer.flush()?;

    if should_log_statistics() {
        log_statistic("atoms", encoder.atoms().len());
        log_statistic("nodes", derivation.proof_state.len());
        derivation.statistics.log();
    }

    Ok(())
}

/// Parse the clauses in `path` with `encoder`. The path `-` stands for stdin.
fn read_clauses(path: &Path, encoder: &mut ClauseEncoder) -> PlresResult<ClauseSet> {
    if path == Path::new("-") {
        return Ok(parse_clauses(std::io::stdin().lock(), encoder)?);
    }

    let file = File::open(path).map_err(|error| PlresError::cannot_open(path, error))?;
    Ok(parse_clauses(file, encoder)?)
}
