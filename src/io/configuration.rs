//! Engine constants and runtime configuration defaults

// Maze dimensions
/// Default number of rows
pub const DEFAULT_LENGTH: i64 = 50;
/// Default number of columns
pub const DEFAULT_WIDTH: i64 = 50;

// Repeated trials
/// Default number of generation runs
pub const DEFAULT_REPEAT: usize = 1;
/// Default growth of each dimension between runs
pub const DEFAULT_STEP: i64 = 0;

// Reserved so stitching never shares a stream with a partition index
/// Child stream index used for boundary stitching
pub const STITCH_STREAM: u64 = u64::MAX;

// Rendering
/// Pixels along each side of a cell
pub const DEFAULT_EDGE_WIDTH: u32 = 12;
/// Smallest edge width that leaves room for a passage between walls
pub const MIN_EDGE_WIDTH: u32 = 2;
/// Wall luminance (0 black, 255 white)
pub const DEFAULT_FOREGROUND: u8 = 0;
/// Background opacity over black (0 transparent, 255 black)
pub const DEFAULT_BACKGROUND: u8 = 0;

// Output settings
/// Directory that receives rendered mazes
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "output";
/// File stem for rendered mazes
pub const DEFAULT_OUTPUT_STEM: &str = "maze";
/// Extension of rendered mazes
pub const PNG_EXTENSION: &str = "png";
/// Header row of the timing CSV
pub const CSV_HEADER: &str = "Seed,Length,Width,Time(ns),Passed Verification";

// Logging
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "mazebuilder=info";
/// Filter used when `RUST_LOG` is unset and debug output is requested
pub const DEBUG_LOG_FILTER: &str = "mazebuilder=debug";

// Progress bar display settings
/// Width of the run progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
