use agglomerative::{load_records, parse_target, Agglomerator, ClusteringError, MergeParams};
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

/// Groups the points of FILENAME into N clusters by single linkage.
#[derive(Parser)]
#[clap(version, about)]
struct Opts {
    /// Input file: a `count=<N>` line followed by `<id> <x> <y>` lines
    filename: String,

    /// Final count of clusters
    #[clap(default_value = "1", allow_negative_numbers = true)]
    n: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(opts: &Opts) -> Result<(), ClusteringError> {
    let target = parse_target(&opts.n)?;
    let records = load_records::<f32, _>(&opts.filename)?;
    log::info!("Loaded {} records from {}", records.len(), opts.filename);

    let params = MergeParams::builder().target_clusters(target).build();
    let clusters = Agglomerator::new(&records, params).cluster()?;
    print!("{clusters}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
