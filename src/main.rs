use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;

use mazegen::{
    cells::Edge,
    errors::*,
    generators,
    maze::Maze,
    ppm,
    renderers::{self, RenderOptions},
    topology,
    units::SideLength,
};
use rand::{SeedableRng, XorShiftRng};

const USAGE: &str = "Mazegen

Usage:
    mazegen_driver -h | --help
    mazegen_driver [<size>] [<filename>] [--seed=<n>] [--text]

Options:
    -h --help    Show this screen.
    --seed=<n>   Fix the random number generator seed, making the maze reproducible.
    --text       Also print the maze to stdout as ascii art.
";

const DEFAULT_SIDE_LENGTH: usize = 50;
const DEFAULT_IMAGE_FILE: &str = "output.ppm";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    arg_size: Option<usize>,
    arg_filename: Option<String>,
    flag_seed: Option<u32>,
    flag_text: bool,
}

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let size = SideLength(args.arg_size.unwrap_or(DEFAULT_SIDE_LENGTH));
    let file_name = args.arg_filename
        .unwrap_or_else(|| DEFAULT_IMAGE_FILE.to_owned());

    let edges = generate(size, args.flag_seed)?;
    info!("generated a {0}x{0} maze with {1} carved passages",
          size.0,
          edges.len());
    debug_assert!(topology::is_spanning_tree(&edges, size));

    let maze = Maze::new(size, edges);
    if args.flag_text {
        println!("{}", maze);
    }

    let image = renderers::rasterize(maze.edges(), size, &RenderOptions::default());
    ppm::save_ppm(&image, &file_name)?;
    info!("saved maze image to {}", file_name);

    Ok(())
}

fn generate(size: SideLength, seed: Option<u32>) -> Result<Vec<Edge>> {
    match seed {
        Some(seed) => generators::frontier_growth(size, &mut seeded_rng(seed)),
        None => generators::generate_maze(size),
    }
}

fn seeded_rng(seed: u32) -> XorShiftRng {
    // XorShift must not be seeded with all zeroes.
    XorShiftRng::from_seed([seed | 1,
                            seed ^ 0x9e3779b9,
                            seed.wrapping_add(0x7f4a7c15),
                            seed.rotate_left(16)])
}
