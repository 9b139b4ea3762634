use clap::{Args, Parser, Subcommand};
use forcetrace::{
    animate, barycenter,
    force::{self, HookeCoulombParams, LogSpringParams},
    graph::{EdgeListGraph, Graph},
    solver::QrSolver,
};
use rand::Rng;
use std::io;
use std::path::{Path, PathBuf};

/// Forcetrace: graph layout engines with an animated trace
#[derive(Parser, Debug)]
#[command(
    name = "forcetrace",
    about = "Lay out undirected graphs and export the layout process as animated frames",
    version,
    propagate_version = true,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the logarithmic spring model from a random placement
    LogSpring(LogSpringArgs),
    /// Run the parametrized Hooke/Coulomb spring model
    Spring(SpringArgs),
    /// Relax free vertices toward the barycenter of their neighbors
    Barycenter(BarycenterArgs),
    /// Solve the barycenter layout exactly with a QR solve
    BarycenterExact(BarycenterExactArgs),
}

#[derive(Args, Debug, Clone)]
struct CanvasArgs {
    /// Canvas width in layout units
    #[arg(long, default_value_t = 500.0)]
    width: f64,
    /// Output image width in pixels
    #[arg(long, default_value_t = 800)]
    img_width: u32,
    /// Output image height in pixels
    #[arg(long, default_value_t = 800)]
    img_height: u32,
}

#[derive(Args, Debug)]
struct LogSpringArgs {
    /// Path to the input edge-list file (one "u v" pair per line)
    #[arg(short, long, value_name = "EDGE_LIST")]
    input: PathBuf,
    /// RNG seed for the initial placement (drawn from the thread RNG if absent)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Path to the output GIF
    #[arg(short, long, value_name = "GIF", default_value = "layout.gif")]
    output: PathBuf,
    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Args, Debug)]
struct SpringArgs {
    /// Path to the input edge-list file (one "u v" pair per line)
    #[arg(short, long, value_name = "EDGE_LIST")]
    input: PathBuf,
    /// Natural edge length
    #[arg(long, default_value_t = 100.0)]
    luv: f64,
    /// Spring constant
    #[arg(long, default_value_t = 0.1)]
    kuv1: f64,
    /// Repulsion constant
    #[arg(long, default_value_t = 100.0)]
    kuv2: f64,
    /// RNG seed for the initial placement (drawn from the thread RNG if absent)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Path to the output GIF
    #[arg(short, long, value_name = "GIF", default_value = "layout.gif")]
    output: PathBuf,
    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Args, Debug)]
struct BarycenterArgs {
    /// Path to the input edge-list file (one "u v" pair per line)
    #[arg(short, long, value_name = "EDGE_LIST")]
    input: PathBuf,
    /// Number of vertices pinned to the boundary polygon
    #[arg(long, value_name = "COUNT")]
    fixed: usize,
    /// Relaxation pass cap (0 removes the cap)
    #[arg(long, default_value_t = 10000)]
    max_passes: usize,
    /// Path to the output GIF
    #[arg(short, long, value_name = "GIF", default_value = "layout.gif")]
    output: PathBuf,
    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Args, Debug)]
struct BarycenterExactArgs {
    /// Path to the input edge-list file (one "u v" pair per line)
    #[arg(short, long, value_name = "EDGE_LIST")]
    input: PathBuf,
    /// Number of vertices pinned to the boundary polygon
    #[arg(long, value_name = "COUNT")]
    fixed: usize,
    /// Path to the output image for the final layout
    #[arg(short, long, value_name = "IMAGE", default_value = "layout.png")]
    output: PathBuf,
    /// Directory for the CSV dump of the solved system
    #[arg(long, value_name = "DIR")]
    dump: Option<PathBuf>,
    /// Print the coefficient matrix as a terminal heatmap
    #[arg(long, default_value_t = false)]
    viz: bool,
    #[command(flatten)]
    canvas: CanvasArgs,
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => s,
        None => {
            let s: u64 = rand::thread_rng().gen();
            println!("Seed: {} (pass --seed {} to reproduce this run)", s, s);
            s
        }
    }
}

fn load_graph(path: &Path) -> io::Result<EdgeListGraph> {
    let graph = EdgeListGraph::from_path(path)?;
    println!(
        "Loaded graph with {} vertices and {} edges.",
        graph.vertex_count(),
        graph.edges().len()
    );
    Ok(graph)
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::LogSpring(args) => {
            let LogSpringArgs {
                input,
                seed,
                output,
                canvas,
            } = args;
            let graph = load_graph(&input)?;
            let frames = force::log_spring_layout(
                &graph,
                LogSpringParams::default(),
                resolve_seed(seed),
            );
            if let Err(err) = animate::write_gif(&frames, &output, canvas.img_width, canvas.img_height)
            {
                eprintln!("[log-spring error] {}", err);
                std::process::exit(1);
            }
            println!("✅ Wrote {} frames to {}", frames.len(), output.display());
        }
        Command::Spring(args) => {
            let SpringArgs {
                input,
                luv,
                kuv1,
                kuv2,
                seed,
                output,
                canvas,
            } = args;
            let graph = load_graph(&input)?;
            let params = HookeCoulombParams { luv, kuv1, kuv2 };
            match force::hooke_coulomb_layout(&graph, params, resolve_seed(seed)) {
                Ok(frames) => {
                    if let Err(err) =
                        animate::write_gif(&frames, &output, canvas.img_width, canvas.img_height)
                    {
                        eprintln!("[spring error] {}", err);
                        std::process::exit(1);
                    }
                    println!("✅ Wrote {} frames to {}", frames.len(), output.display());
                }
                Err(err) => {
                    eprintln!("[spring error] {}", err);
                    std::process::exit(1);
                }
            }
        }
        Command::Barycenter(args) => {
            let BarycenterArgs {
                input,
                fixed,
                max_passes,
                output,
                canvas,
            } = args;
            let graph = load_graph(&input)?;
            let cap = if max_passes == 0 {
                None
            } else {
                Some(max_passes)
            };
            let frames = barycenter::barycenter_layout(&graph, fixed, canvas.width, cap);
            if let Err(err) = animate::write_gif(&frames, &output, canvas.img_width, canvas.img_height)
            {
                eprintln!("[barycenter error] {}", err);
                std::process::exit(1);
            }
            println!("✅ Wrote {} frames to {}", frames.len(), output.display());
        }
        Command::BarycenterExact(args) => {
            let BarycenterExactArgs {
                input,
                fixed,
                output,
                dump,
                viz,
                canvas,
            } = args;
            let graph = load_graph(&input)?;
            match barycenter::barycenter_layout_exact(&graph, fixed, canvas.width, &QrSolver) {
                Ok(solution) => {
                    if viz {
                        println!("Coefficient matrix:");
                        barycenter::print_matrix_heatmap(&solution.matrix.view());
                    }
                    if let Some(dir) = dump {
                        solution.save_csv_dir(&dir)?;
                        println!("✅ System dumped to {}", dir.display());
                    }
                    if let Err(err) =
                        animate::write_image(&solution.frame, &output, canvas.img_width, canvas.img_height)
                    {
                        eprintln!("[barycenter-exact error] {}", err);
                        std::process::exit(1);
                    }
                    println!("✅ Wrote final layout to {}", output.display());
                }
                Err(err) => {
                    eprintln!("[barycenter-exact error] {}", err);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
