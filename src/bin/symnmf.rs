//! an executable computing one stage of the SymNMF pipeline on a csv file of points
//! example usage:
//! symnmf 3 symnmf "points.csv"
//! symnmf 3 norm "points.csv"
//! symnmf 2 symnmf "points.csv" --iter 500 --eps 1.0e-6 --seed 17
//!
//!  goal is one of sym, ddg, norm or symnmf. The number of clusters k is used only by symnmf.
//!  The matrix is printed on stdout, entries with 4 decimals separated by comma.


use anyhow::{anyhow, Context};
use clap::{Arg, ArgMatches, Command};

use symnmf::prelude::*;


fn parse_params(matches : &ArgMatches) -> anyhow::Result<SymNmfParams> {
    log::debug!("in parse_params");
    let mut params = SymNmfParams::default();
    //
    if let Some(str) = matches.value_of("iter") {
        let res = str.parse::<usize>();
        match res {
            Ok(val) => { params.max_iter = val; },
            _              => { return Err(anyhow!("could not parse iter")); },
        }
    }
    if let Some(str) = matches.value_of("eps") {
        let res = str.parse::<f64>();
        match res {
            Ok(val) => { params.epsil = val; },
            _            => { return Err(anyhow!("could not parse eps")); },
        }
    }
    if let Some(str) = matches.value_of("seed") {
        let res = str.parse::<u64>();
        match res {
            Ok(val) => { params = params.with_seed(val); },
            _            => { return Err(anyhow!("could not parse seed")); },
        }
    }
    params.check()?;
    Ok(params)
} // end of parse_params


fn run(matches : &ArgMatches) -> anyhow::Result<()> {
    let k = matches.value_of("k").ok_or_else(|| anyhow!("no k"))?
        .parse::<usize>().context("could not parse k")?;
    let goal = matches.value_of("goal").ok_or_else(|| anyhow!("no goal"))?
        .parse::<Goal>()?;
    let fname = matches.value_of("file").ok_or_else(|| anyhow!("no input file"))?;
    log::info!("k : {}, goal : {:?}, input file : {:?}", k, goal, fname);
    let params = parse_params(matches)?;
    //
    let vectors = load_vectors(std::path::Path::new(fname))?;
    let mat = run_goal(goal, &vectors, k, &params)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_matrix(&mat, &mut handle)?;
    Ok(())
} // end of run


pub fn main() {
    //
    symnmf::ensure_log();
    log::info!("logger initialized");
    //
    let matches = Command::new("symnmf")
        .arg_required_else_help(true)
        .arg(Arg::new("k")
            .required(true)
            .index(1)
            .help("number of clusters"))
        .arg(Arg::new("goal")
            .required(true)
            .index(2)
            .help("sym, ddg, norm or symnmf"))
        .arg(Arg::new("file")
            .required(true)
            .index(3)
            .help("expecting a csv file, one point by line"))
        .arg(Arg::new("iter")
            .long("iter")
            .takes_value(true)
            .required(false)
            .help("maximum number of iterations, default 300"))
        .arg(Arg::new("eps")
            .long("eps")
            .takes_value(true)
            .required(false)
            .help("convergence threshold, default 1.0e-4"))
        .arg(Arg::new("seed")
            .long("seed")
            .takes_value(true)
            .required(false)
            .help("seed of initial association matrix, default 1234"))
    .get_matches();
    //
    if let Err(e) = run(&matches) {
        log::error!("error : {:?}", e);
        println!("An Error Has Occurred");
        std::process::exit(1);
    }
}  // end of main
