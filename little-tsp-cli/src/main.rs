use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use little_tsp::{Cost, CostMatrix, Edge, Graph, GraphParams, TotalCost, Vertex};
use serde::Serialize;
use serde_json::{Map, Value};
use std::{collections::BTreeSet, fs, io::Read};

fn cli() -> Command {
    Command::new("little-tsp")
        .about("Builds and reduces cost matrices for Little's branch and bound")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generates a random asymmetric instance")
                .arg(arg!(<SEED> "Seed value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(<NUM_VERTICES> "Number of vertices")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--params [PARAMS] "Graph parameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("reduce")
                .about("Reduces the cost matrix of one search node")
                .arg(
                    arg!(<GRAPH> "Graph json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--include <EDGE> "Edge 'u,v' committed to the tour")
                        .required(false)
                        .action(ArgAction::Append)
                        .value_parser(parse_edge),
                )
                .arg(
                    arg!(--exclude <EDGE> "Edge 'u,v' forbidden from the tour")
                        .required(false)
                        .action(ArgAction::Append)
                        .value_parser(parse_edge),
                ),
        )
}

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            *sub_m.get_one::<usize>("NUM_VERTICES").unwrap(),
            sub_m.get_one::<String>("params").cloned(),
        ),
        Some(("reduce", sub_m)) => reduce(
            sub_m.get_one::<String>("GRAPH").unwrap().clone(),
            edges(sub_m, "include"),
            edges(sub_m, "exclude"),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_edge(s: &str) -> Result<Edge> {
    s.parse::<Edge>()
}

fn edges(sub_m: &ArgMatches, id: &str) -> Vec<Edge> {
    sub_m
        .get_many::<Edge>(id)
        .map(|values| values.copied().collect())
        .unwrap_or_default()
}

pub fn generate(seed: u64, num_vertices: usize, params: Option<String>) -> Result<()> {
    let hyperparameters = match params {
        Some(params) => Some(load_json::<Map<String, Value>>(&params)?),
        None => None,
    };
    let params = GraphParams::from_hyperparameters(num_vertices, &hyperparameters)?;

    let mut seed_bytes = [0u8; 32];
    seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
    let graph = Graph::generate_instance(&seed_bytes, &params)?;

    println!("{}", serde_json::to_string(&graph)?);
    Ok(())
}

#[derive(Serialize)]
struct ReductionReport {
    lower_bound: TotalCost,
    rows: Vec<Vertex>,
    columns: Vec<Vertex>,
    costs: Vec<Vec<Option<Cost>>>,
}

pub fn reduce(graph: String, include: Vec<Edge>, exclude: Vec<Edge>) -> Result<()> {
    let graph = load_json::<Graph>(&graph)?;
    log::debug!(
        "loaded graph with {} vertices, {} included and {} excluded edges",
        graph.num_vertices(),
        include.len(),
        exclude.len()
    );
    let (lower_bound, cost_matrix) = node_bound(&graph, &include, &exclude)?;

    let report = ReductionReport {
        lower_bound,
        rows: cost_matrix.row_vertices().to_vec(),
        columns: cost_matrix.column_vertices().to_vec(),
        costs: cost_matrix.to_rows(),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

/// Lower bound of the node committed to `include`: included arcs are paid for
/// in full, the reduced matrix bounds the rest. Repeated edges count once.
fn node_bound(
    graph: &Graph,
    include: &[Edge],
    exclude: &[Edge],
) -> Result<(TotalCost, CostMatrix)> {
    let include: Vec<Edge> = include
        .iter()
        .copied()
        .collect::<BTreeSet<Edge>>()
        .into_iter()
        .collect();
    let mut cost_matrix = CostMatrix::new(graph, &include, exclude)?;
    let mut lower_bound = cost_matrix.reduce()?;
    for edge in &include {
        lower_bound += graph
            .cost(edge.origin, edge.destination)
            .ok_or_else(|| anyhow!("Included edge {} is a self-loop", edge))?
            as TotalCost;
    }
    Ok((lower_bound, cost_matrix))
}

fn load_json<T: serde::de::DeserializeOwned>(input: &str) -> Result<T> {
    let json = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        buffer
    } else if input.ends_with(".json") {
        fs::read_to_string(input).map_err(|e| anyhow!("Failed to read file {}: {}", input, e))?
    } else {
        input.to_string()
    };

    serde_json::from_str::<T>(&json).map_err(|e| anyhow!("Failed to parse json: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        Graph::new(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_node_bound_counts_included_edge_once() {
        let graph = sample_graph();
        let include = [Edge::new(0, 1)];
        let (once, _) = node_bound(&graph, &include, &[]).unwrap();
        let (twice, cost_matrix) =
            node_bound(&graph, &[Edge::new(0, 1), Edge::new(0, 1)], &[]).unwrap();

        assert_eq!(once, 10 + 70);
        assert_eq!(twice, once);
        assert_eq!(cost_matrix.num_rows(), 3);
    }

    #[test]
    fn test_node_bound_rejects_self_loop() {
        assert!(node_bound(&sample_graph(), &[Edge::new(2, 2)], &[]).is_err());
    }
}
