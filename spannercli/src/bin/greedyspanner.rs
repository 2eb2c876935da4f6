//! Builds the greedy t-spanner of a point set and reports its edges and dilation.
//!
//! Points come either from a csv file (header `label,x,y`) or are drawn uniformly in a unit square.
//!
//! usage : greedyspanner --points towns.csv --stretch 1.2
//!         greedyspanner --random 200 --seed 117 --stretch 1.5

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use anyhow::anyhow;
use clap::{Arg, ArgAction, ArgMatches, Command};
use cpu_time::ProcessTime;

use greedyspanner::prelude::*;
use spannercli::io::load_points;

/// where points come from
enum PointSource {
    Csv(PathBuf),
    Random { nb_points: usize, seed: u64 },
}

struct CliParams {
    source: PointSource,
    spanner: SpannerParams,
    quiet: bool,
}

fn parse_cmd(matches: &ArgMatches) -> anyhow::Result<CliParams> {
    //
    let source = match (
        matches.get_one::<String>("points"),
        matches.get_one::<usize>("random"),
    ) {
        (Some(path), None) => PointSource::Csv(PathBuf::from(path)),
        (None, Some(nb_points)) => PointSource::Random {
            nb_points: *nb_points,
            seed: *matches.get_one::<u64>("seed").unwrap_or(&117),
        },
        _ => return Err(anyhow!("exactly one of --points and --random must be given")),
    };
    let default = SpannerParams::default();
    let stretch = *matches
        .get_one::<f64>("stretch")
        .unwrap_or(&default.get_stretch());
    let tolerance = *matches
        .get_one::<f64>("tolerance")
        .unwrap_or(&default.get_tolerance());
    let spanner = SpannerParams::new(stretch, tolerance);
    spanner.check()?;
    //
    Ok(CliParams {
        source,
        spanner,
        quiet: matches.get_flag("quiet"),
    })
} // end of parse_cmd

pub fn main() -> anyhow::Result<()> {
    //
    let _ = env_logger::builder().try_init();
    //
    log::info!("\n\n running greedyspanner");
    //
    let matches = Command::new("greedyspanner")
        .arg_required_else_help(true)
        .arg(
            Arg::new("points")
                .long("points")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .conflicts_with("random")
                .help("csv file with header label,x,y"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("number of points drawn uniformly in unit square"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u64))
                .requires("random")
                .help("seed of random generator, default 117"),
        )
        .arg(
            Arg::new("stretch")
                .short('t')
                .long("stretch")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(f64))
                .help("stretch factor t > 1, default 1.2"),
        )
        .arg(
            Arg::new("tolerance")
                .long("tolerance")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(f64))
                .help("relative tolerance on stretch test, default 1.e-9"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("do not print edge list"),
        )
        .get_matches();
    //
    let params = parse_cmd(&matches)?;
    let points = match &params.source {
        PointSource::Csv(path) => load_points(path)?,
        PointSource::Random { nb_points, seed } => uniform_points::<f64>(*nb_points, 1., *seed)?,
    };
    //
    let cpu_start = ProcessTime::now();
    let sys_now = SystemTime::now();
    //
    let mut builder = GreedySpanner::new(params.spanner);
    let spanner = builder.build(&points)?;
    //
    if !params.quiet {
        for edge in spanner.edges() {
            println!("{} -- {} : {:.6e}", edge.first, edge.second, edge.weight);
        }
    }
    let report = DilationReport::compute(&points, &spanner)?;
    println!(
        "\n nb points : {}, nb edges : {}, total weight : {:.5e}",
        spanner.get_nb_nodes(),
        spanner.get_nb_edges(),
        spanner.get_total_weight()
    );
    println!(
        " stretch asked : {:.3e}, dilation : {:.5e} between {:?}",
        params.spanner.get_stretch(),
        report.get_dilation(),
        report.get_worst_pair()
    );
    if let Some(median) = report.get_stretch_quantile(0.5) {
        println!(" median stretch : {:.5e}", median);
    }
    //
    let cpu_time: Duration = cpu_start.elapsed();
    println!(
        "  sys time(ms) {:?} cpu time(ms) {:?}",
        sys_now.elapsed()?.as_millis(),
        cpu_time.as_millis()
    );
    //
    Ok(())
} // end of main
