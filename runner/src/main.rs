extern crate mst_algorithm;

use mst_algorithm::ingest::raw_weights_from_lines;
use mst_algorithm::{compute_mst, ingest_weights, Algorithm, MstError, EDGES};
use std::fs::OpenOptions;
use std::io::{self, Error, ErrorKind, Write};
use std::time::Instant;

const USAGE: &str = "usage: runner <weights-file> [kruskal|prim|both] [summary.csv]";

fn invalid_data(e: MstError) -> Error {
    Error::new(ErrorKind::InvalidData, e)
}

fn selected_algorithms(name: Option<&str>) -> Result<Vec<Algorithm>, MstError> {
    match name {
        None | Some("both") => Ok(vec![Algorithm::Kruskal, Algorithm::Prim]),
        Some(name) => Ok(vec![name.parse()?]),
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(weights_path) = args.first() else {
        eprintln!("{USAGE}");
        return Err(Error::new(ErrorKind::InvalidInput, "missing weights file"));
    };
    let algorithms = selected_algorithms(args.get(1).map(String::as_str)).map_err(invalid_data)?;

    let text = std::fs::read_to_string(weights_path)?;
    let raw = raw_weights_from_lines(&text).map_err(invalid_data)?;
    let weights = ingest_weights(&raw).map_err(invalid_data)?;
    log::info!("loaded {} edge weights from {weights_path}", raw.len());
    for edge in EDGES {
        log::debug!("{edge} = {}", weights.get(edge));
    }

    let mut summary = match args.get(2) {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            if file.metadata()?.len() == 0 {
                writeln!(file, "Algorithm\tEdges\tTotalWeight\tTime(s)")?;
            }
            Some(file)
        }
        None => None,
    };

    for algorithm in algorithms {
        let now = Instant::now();
        let result = compute_mst(&weights, Some(algorithm)).map_err(invalid_data)?;
        let elapsed = now.elapsed();

        println!("{result}");
        println!();

        if let Some(file) = summary.as_mut() {
            let edges: Vec<String> = result
                .highlighted_edge_ids
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(
                file,
                "{}\t{}\t{}\t{:.10}",
                algorithm,
                edges.join(","),
                result.total_weight,
                elapsed.as_secs_f64()
            )?;
        }
    }
    Ok(())
}
