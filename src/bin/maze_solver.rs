use clap::Parser;
use maze_search::report::{render, ReportFormat};
use maze_search::search::{
    search_engines::{SearchEngineName, SearchOutcome},
    validate, HeuristicName, Problem, Verbosity,
};
use maze_search::solver::solve;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Parser)]
#[command(version)]
/// Find a path through a maze with UCS, IDS, GBFS and A*.
struct Cli {
    #[arg(help = "The problem file")]
    problem: PathBuf,
    #[arg(
        help = "Also write the reports to this file",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    output: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engines to run, in order. Defaults to all of them",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_names: Vec<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The heuristic used by GBFS and A*",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Manhattan
    )]
    heuristic_name: HeuristicName,
    #[arg(
        value_enum,
        help = "The report format",
        short = 'f',
        long = "format",
        id = "FORMAT",
        default_value_t = ReportFormat::Text
    )]
    format: ReportFormat,
    #[arg(help = "Check every path found against the problem", long = "validate")]
    validate: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let problem = Problem::from_path(&cli.problem)?;
    info!(
        size = problem.size(),
        listed_states = problem.num_listed_states(),
        goal_state = problem.goal_state(),
        "problem loaded"
    );

    let engines = if cli.search_engine_names.is_empty() {
        SearchEngineName::all().collect()
    } else {
        cli.search_engine_names.clone()
    };
    let heuristic = cli.heuristic_name.create();

    let mut results: Vec<(SearchEngineName, SearchOutcome)> = vec![];
    for engine in engines {
        if engine.uses_heuristic() {
            debug!(%engine, heuristic = ?cli.heuristic_name, "searching with heuristic");
        }
        let outcome = solve(&problem, engine, heuristic.as_ref())?;
        match outcome.path() {
            Some(path) => {
                info!(%engine, path_length = path.len(), "path found");
                if cli.validate {
                    match validate(path, &problem) {
                        Ok(()) => info!(%engine, "path is valid"),
                        Err(e) => warn!(%engine, "path is invalid: {}", e),
                    }
                }
            }
            None => info!(%engine, "no path found"),
        }
        results.push((engine, outcome));
    }

    let rendered = render(&results, cli.format);
    println!("{}", rendered);
    if let Some(output) = &cli.output {
        std::fs::write(output, &rendered)?;
        info!(output = %output.display(), "reports written");
    }

    Ok(())
}
