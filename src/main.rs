use clap::{Parser, Subcommand};
use polyraster::contour::{cleaned_raster, extract_polygon};
use polyraster::desc::{ExtractJob, parse_points_json, read_text};
use polyraster::geom::V3d;
use polyraster::im::ascii::{bin_im_with_contour_to_ascii, debug_print_bin_im};
use polyraster::report::geometry_data_as_text;
use polyraster::simplify::simplify_polygon;
use polyraster::trace::boundary;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Raster contour extraction and polygon simplification")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace a binary raster into a simplified world-space polygon.
    Extract {
        /// Job description (JSON).
        job: PathBuf,

        /// Print every intermediate raster.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simplify a point list read from a JSON file of `[x, y, z]` triples.
    Simplify {
        points: PathBuf,

        /// Distance threshold, in the points' units.
        /// Negative keeps every point.
        #[arg(short, long, allow_negative_numbers = true)]
        epsilon: f64,

        /// Treat the points as a closed polygon when reporting lengths and area.
        #[arg(long)]
        closed: bool,
    },
}

fn print_points(points: &[V3d]) {
    for (i, p) in points.iter().enumerate() {
        println!("  {i:4}: {:.3} {:.3} {:.3}", p.x, p.y, p.z);
    }
}

fn run_extract(job_path: &Path, verbose: bool) -> polyraster::Result<()> {
    let job = ExtractJob::load(job_path)?;
    let base_dir = job_path.parent().unwrap_or(Path::new("."));
    let im = job.raster(base_dir)?;

    if verbose {
        debug_print_bin_im("input", &im);
        let cleaned = cleaned_raster(&im, &job.params);
        debug_print_bin_im("cleaned", &cleaned);
        println!("contour:");
        print!("{}", bin_im_with_contour_to_ascii(&cleaned, &boundary(&cleaned)));
    }

    let poly = extract_polygon(&im, &job.grid, &job.params);
    if poly.is_empty() {
        println!("No foreground left after cleaning; no polygon.");
        return Ok(());
    }

    println!(
        "Points: {} traced, {} after simplification (epsilon {})",
        poly.raw_point_count,
        poly.points.len(),
        job.params.epsilon
    );
    print_points(&poly.points);
    println!("{}", geometry_data_as_text(&poly.points, job.params.close_polygon));
    Ok(())
}

fn run_simplify(points_path: &Path, epsilon: f64, closed: bool) -> polyraster::Result<()> {
    let mut points = parse_points_json(&read_text(points_path)?)?;
    let before = points.len();
    simplify_polygon(&mut points, epsilon);

    println!("Points: {before} before, {} after simplification (epsilon {epsilon})", points.len());
    print_points(&points);
    println!("{}", geometry_data_as_text(&points, closed));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Extract { job, verbose } => run_extract(job, *verbose),
        Command::Simplify {
            points,
            epsilon,
            closed,
        } => run_simplify(points, *epsilon, *closed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
