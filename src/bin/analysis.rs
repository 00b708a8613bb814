//! an executable comparing SymNMF and k-means clusterings of a csv file of points by their silhouette score
//! example usage:
//! analysis 3 "points.csv"
//!
//! prints
//! nmf: 0.xxxx
//! kmeans: 0.xxxx


use anyhow::{anyhow, Context};
use clap::{Arg, ArgMatches, Command};

use symnmf::prelude::*;


fn run(matches : &ArgMatches) -> anyhow::Result<ClusteringScores> {
    let k = matches.value_of("k").ok_or_else(|| anyhow!("no k"))?
        .parse::<usize>().context("could not parse k")?;
    let fname = matches.value_of("file").ok_or_else(|| anyhow!("no input file"))?;
    log::info!("k : {}, input file : {:?}", k, fname);
    //
    let vectors = load_vectors(std::path::Path::new(fname))?;
    let scores = compare_scores(&vectors, k, &SymNmfParams::default())?;
    Ok(scores)
} // end of run


pub fn main() {
    //
    symnmf::ensure_log();
    //
    let matches = Command::new("analysis")
        .arg_required_else_help(true)
        .arg(Arg::new("k")
            .required(true)
            .index(1)
            .help("number of clusters"))
        .arg(Arg::new("file")
            .required(true)
            .index(2)
            .help("expecting a csv file, one point by line"))
    .get_matches();
    //
    match run(&matches) {
        Ok(scores) => {
            println!("nmf: {:.4}", scores.nmf);
            println!("kmeans: {:.4}", scores.kmeans);
        }
        Err(e) => {
            log::error!("error : {:?}", e);
            println!("An Error Has Occurred");
            std::process::exit(1);
        }
    }
}  // end of main
