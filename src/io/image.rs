//! PNG rendering of finished mazes
//!
//! Each cell covers `edge_width` pixels per side. Closed edges and the outer
//! border are drawn as one-pixel foreground lines; everything else is
//! background.

use std::path::Path;

use image::{GrayAlphaImage, LumaA};
use num_traits::ToPrimitive;

use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_EDGE_WIDTH, DEFAULT_FOREGROUND, MIN_EDGE_WIDTH,
};
use crate::io::error::{MazeError, Result, file_system, invalid_parameter};
use crate::spatial::{Direction, Grid};

/// Pixel layout and shades for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Pixels along each side of a cell
    pub edge_width: u32,
    /// Wall luminance, opaque (0 black, 255 white)
    pub foreground: u8,
    /// Background opacity over black (0 transparent, 255 black)
    pub background: u8,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            edge_width: DEFAULT_EDGE_WIDTH,
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl RenderStyle {
    const fn wall(self) -> LumaA<u8> {
        LumaA([self.foreground, u8::MAX])
    }

    const fn floor(self) -> LumaA<u8> {
        LumaA([0, self.background])
    }
}

/// Render a grid into a grey+alpha image
///
/// # Errors
///
/// Returns `InvalidParameter` if the edge width is below the minimum or the
/// image would exceed `u32` pixel dimensions
pub fn render_grid(grid: &Grid, style: RenderStyle) -> Result<GrayAlphaImage> {
    if style.edge_width < MIN_EDGE_WIDTH {
        return Err(invalid_parameter(
            "edge_width",
            &style.edge_width,
            &format!("must be at least {MIN_EDGE_WIDTH}"),
        ));
    }

    let edge = style.edge_width;
    let rows = pixel_extent(grid.length(), edge)?;
    let cols = pixel_extent(grid.width(), edge)?;
    let mut img = GrayAlphaImage::from_pixel(cols + 1, rows + 1, style.floor());
    let wall = style.wall();

    for cell in grid.cells() {
        let Some(passages) = grid.passages(cell) else {
            continue;
        };
        // Bounded by the extents checked above
        let top = cell.row as u32 * edge;
        let left = cell.col as u32 * edge;

        if !passages.is_open(Direction::North) {
            for x in left..=left + edge {
                img.put_pixel(x, top, wall);
            }
        }
        if !passages.is_open(Direction::West) {
            for y in top..=top + edge {
                img.put_pixel(left, y, wall);
            }
        }
    }

    // South and east borders are never open
    for x in 0..=cols {
        img.put_pixel(x, rows, wall);
    }
    for y in 0..=rows {
        img.put_pixel(cols, y, wall);
    }

    Ok(img)
}

fn pixel_extent(cells: usize, edge: u32) -> Result<u32> {
    cells
        .to_u32()
        .and_then(|cells| cells.checked_mul(edge))
        .and_then(|pixels| pixels.checked_add(1).map(|_| pixels))
        .ok_or_else(|| invalid_parameter("edge_width", &edge, &"rendered maze is too large"))
}

/// Render a grid and save it as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_grid`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, style: RenderStyle, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, style)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), "exported maze image");
    Ok(())
}
