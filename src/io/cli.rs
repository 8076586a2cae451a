//! Command-line interface for repeated, timed maze generation

use crate::algorithm::{
    Algorithm, PartitionReport, PartitionedGenerator, RandomSource, Seed, StitchPolicy,
    entropy_seed, generate,
};
use crate::analysis::{check, check_verbose};
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_EDGE_WIDTH, DEFAULT_FOREGROUND, DEFAULT_LENGTH,
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_OUTPUT_STEM, DEFAULT_REPEAT, DEFAULT_STEP, DEFAULT_WIDTH,
    PNG_EXTENSION,
};
use crate::io::csv::{TimingCsv, TimingRecord};
use crate::io::error::Result;
use crate::io::image::{RenderStyle, export_grid_as_png};
use crate::io::progress::RunProgress;
use crate::spatial::Grid;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "mazebuilder")]
#[command(
    author,
    version,
    about = "Generate perfect mazes from randomized spanning trees"
)]
/// Command-line arguments for the maze generation tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Algorithm used to carve the maze
    #[arg(short, long, value_enum, default_value_t = Algorithm::LoopErasedWalk)]
    pub algo: Algorithm,

    /// Random seed for reproducible generation (default: OS entropy)
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<Seed>,

    /// Reuse the same seed for every repeated run
    #[arg(short, long)]
    pub keep_seed: bool,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i64,

    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    pub length: i64,

    /// File stem of rendered mazes (extension is added)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_STEM)]
    pub output: String,

    /// Directory receiving rendered mazes
    #[arg(long, default_value = DEFAULT_OUTPUT_DIRECTORY)]
    pub output_dir: PathBuf,

    /// Skip PNG rendering
    #[arg(short, long)]
    pub no_png: bool,

    /// Wall luminance: 0 black, 65 dark grey, 135 light grey, 255 white
    #[arg(long, default_value_t = DEFAULT_FOREGROUND)]
    pub foreground: u8,

    /// Background: 0 transparent, 65 light grey, 135 dark grey, 255 black
    #[arg(long, default_value_t = DEFAULT_BACKGROUND)]
    pub background: u8,

    /// Pixels along each side of a cell
    #[arg(short, long, default_value_t = DEFAULT_EDGE_WIDTH)]
    pub edge_width: u32,

    /// Write per-run timing rows to this CSV file (disables PNG output)
    #[arg(short, long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Verify connectivity after each run
    #[arg(short, long)]
    pub test: bool,

    /// Generate partitions in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel generation
    #[arg(long, default_value_t = default_worker_count())]
    pub num_cores: usize,

    /// Carve this many openings per partition boundary (braided maze)
    #[arg(short, long, value_name = "OPENINGS", requires = "parallel")]
    pub braid: Option<usize>,

    /// Verify and report every unreachable neighbour pair
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Number of generation runs
    #[arg(short, long, default_value_t = DEFAULT_REPEAT)]
    pub repeat: usize,

    /// Rows added per run
    #[arg(long, default_value_t = DEFAULT_STEP, allow_negative_numbers = true)]
    pub len_step: i64,

    /// Columns added per run
    #[arg(long, default_value_t = DEFAULT_STEP, allow_negative_numbers = true)]
    pub wid_step: i64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn default_worker_count() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}

impl Cli {
    /// Check if mazes should be verified after generation
    pub const fn should_verify(&self) -> bool {
        self.test || self.verbose || self.csv.is_some()
    }

    /// Check if mazes should be rendered to PNG
    pub const fn should_export_png(&self) -> bool {
        !self.no_png && self.csv.is_none()
    }

    /// Stitch policy for parallel generation
    pub fn stitch_policy(&self) -> StitchPolicy {
        self.braid
            .map_or(StitchPolicy::Perfect, |openings| StitchPolicy::Braided {
                openings,
            })
    }

    /// Rendering options taken from the flags
    pub const fn render_style(&self) -> RenderStyle {
        RenderStyle {
            edge_width: self.edge_width,
            foreground: self.foreground,
            background: self.background,
        }
    }

    /// Requested (length, width) for a zero-based run index
    pub fn dimensions(&self, run: usize) -> (i64, i64) {
        let run = i64::try_from(run).unwrap_or(i64::MAX);
        (
            self.length
                .saturating_add(run.saturating_mul(self.len_step)),
            self.width.saturating_add(run.saturating_mul(self.wid_step)),
        )
    }

    /// Image path for a zero-based run index
    pub fn output_path(&self, run: usize) -> PathBuf {
        let name = if self.repeat > 1 {
            format!("{}_{run}.{PNG_EXTENSION}", self.output)
        } else {
            format!("{}.{PNG_EXTENSION}", self.output)
        };
        self.output_dir.join(name)
    }
}

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Seed the maze was generated from
    pub seed: Seed,
    /// Number of rows
    pub length: usize,
    /// Number of columns
    pub width: usize,
    /// Wall-clock generation time
    pub elapsed: Duration,
    /// Verification outcome, when verification ran
    pub passed: Option<bool>,
    /// Rendered image, when one was written
    pub image: Option<PathBuf>,
    /// Partition details, for parallel runs
    pub partitions: Option<PartitionReport>,
}

/// Orchestrates repeated generation runs with timing and output
pub struct RunProcessor {
    cli: Cli,
    seed: Seed,
    progress: RunProgress,
}

impl RunProcessor {
    /// Create a processor, drawing a seed from OS entropy if none was given
    pub fn new(cli: Cli) -> Self {
        let seed = cli.seed.unwrap_or_else(entropy_seed);
        let progress = RunProgress::new(cli.repeat, cli.quiet);

        Self {
            cli,
            seed,
            progress,
        }
    }

    /// Seed the next run will use
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Execute every requested run
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is invalid, generation fails, or an
    /// image or CSV cannot be written
    pub fn process(&mut self) -> Result<Vec<RunSummary>> {
        let mut csv = self.cli.csv.as_deref().map(TimingCsv::create).transpose()?;
        if let Some(ref csv) = csv {
            tracing::info!(path = %csv.path().display(), "recording run timings");
        }
        let mut summaries = Vec::with_capacity(self.cli.repeat);

        for run in 0..self.cli.repeat {
            let summary = self.process_run(run)?;

            if let Some(ref mut csv) = csv {
                csv.append(&TimingRecord {
                    seed: summary.seed,
                    length: summary.length,
                    width: summary.width,
                    elapsed: summary.elapsed,
                    passed: summary.passed.unwrap_or(false),
                })?;
            }
            summaries.push(summary);

            if !self.cli.keep_seed {
                self.seed = entropy_seed();
            }
        }

        tracing::debug!(completed = self.progress.completed(), "all runs processed");
        self.progress.finish();
        Ok(summaries)
    }

    fn process_run(&self, run: usize) -> Result<RunSummary> {
        let (length, width) = self.cli.dimensions(run);
        self.progress.start_run(self.cli.algo, length, width);

        let mut grid = Grid::new(length, width)?;

        // Timing covers generation only
        let start_time = Instant::now();
        let partitions = if self.cli.parallel {
            let generator = PartitionedGenerator::new(self.cli.algo, self.cli.num_cores)
                .with_stitch_policy(self.cli.stitch_policy());
            Some(generator.generate(&mut grid, self.seed)?)
        } else {
            generate(&mut grid, self.cli.algo, self.seed)?;
            None
        };
        let elapsed = start_time.elapsed();

        tracing::info!(
            run,
            seed = self.seed,
            length = grid.length(),
            width = grid.width(),
            algorithm = %self.cli.algo,
            elapsed_ns = elapsed.as_nanos() as u64,
            "generated maze"
        );

        let passed = self.cli.should_verify().then(|| self.verify(&grid));

        let image = if self.cli.should_export_png() {
            let path = self.cli.output_path(run);
            export_grid_as_png(&grid, self.cli.render_style(), &path)?;
            Some(path)
        } else {
            None
        };

        self.progress.complete_run(elapsed);

        Ok(RunSummary {
            seed: self.seed,
            length: grid.length(),
            width: grid.width(),
            elapsed,
            passed,
            image,
            partitions,
        })
    }

    // The start cell is drawn from the run's seed
    fn verify(&self, grid: &Grid) -> bool {
        let mut rng = RandomSource::new(self.seed);
        let start = grid.cell_at(rng.index(grid.cell_count()));

        if !self.cli.verbose {
            return check(grid, start);
        }

        let report = check_verbose(grid, start);
        for (reached, unreached) in &report.unreachable_pairs {
            tracing::warn!(%reached, %unreached, "neighbour unreachable from start");
        }
        tracing::info!(
            %start,
            reached = report.reached,
            total = report.total,
            connected = report.connected,
            "verification finished"
        );
        report.connected
    }
}
