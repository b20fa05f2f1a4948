use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use waynet_core::{shortest_path, Graph, NodeId};
use waynet_formats::{convert_osm_to_poly, load_osm, load_poly};

/// Road network graphs with shortest-path routing
#[derive(Parser, Debug)]
#[command(name = "waynet")]
#[command(about = "Road network graphs with shortest-path routing", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an OSM XML extract into the vertex/edge text format
    Convert {
        /// Path to the .osm input
        input: PathBuf,

        /// Output path; defaults to the input with a .poly extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute the shortest path between two nodes of a graph file
    Route {
        /// Path to a .poly or .osm graph file
        graph: PathBuf,

        /// Start node id
        #[arg(long)]
        from: NodeId,

        /// Target node id
        #[arg(long)]
        to: NodeId,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the vertex and edge counts of a graph file
    Info {
        /// Path to a .poly or .osm graph file
        graph: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Convert { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("poly"));
            info!("Converting {} to {}", input.display(), output.display());
            convert_osm_to_poly(&input, &output)?;
            println!("Wrote {}", output.display());
        }
        Command::Route { graph, from, to, json } => {
            let graph = load_graph(&graph)?;
            let result = shortest_path(&graph, from, to);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_reachable() {
                let hops: Vec<String> = result.path.iter().map(ToString::to_string).collect();
                println!("path: {}", hops.join(" -> "));
                println!("cost: {:.3}", result.total_cost);
                println!(
                    "explored {} nodes in {:.3} ms",
                    result.nodes_explored,
                    result.elapsed.as_secs_f64() * 1000.0
                );
            } else {
                println!("no path from {} to {}", from, to);
            }
        }
        Command::Info { graph } => {
            let graph = load_graph(&graph)?;
            println!(
                "{} vertices, {} edges",
                graph.vertex_count(),
                graph.edge_count()
            );
        }
    }

    Ok(())
}

fn load_graph(path: &Path) -> anyhow::Result<Graph> {
    let graph = match path.extension().and_then(|ext| ext.to_str()) {
        Some("osm") | Some("xml") => load_osm(path)?,
        _ => load_poly(path)?,
    };
    info!(
        "Loaded {}: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
