//! PNG occupancy loading and two-color piece export

use crate::io::configuration::{
    MAX_GRID_DIMENSION, OCCUPANCY_LUMA_THRESHOLD, OPAQUE_ALPHA_THRESHOLD, PRIMARY_PIECE_COLOR,
    SECONDARY_PIECE_COLOR,
};
use crate::io::error::{CutError, Result};
use crate::spatial::board::{Board, Cell};
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

// Integer Rec. 601 luma approximation, enough to separate ink from paper
const fn luminance(red: u8, green: u8, blue: u8) -> u8 {
    let weighted = 299 * red as u32 + 587 * green as u32 + 114 * blue as u32;
    (weighted / 1000) as u8
}

/// Load a PNG into a binary occupancy grid
///
/// A pixel counts as filled when it is opaque and dark, so shapes drawn in
/// ink on a white or transparent background load directly. The result is
/// indexed `(row, column)` matching the board layout.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded as an image, or if the
/// image is empty or larger than [`MAX_GRID_DIMENSION`] on either side.
pub fn load_occupancy<P: AsRef<Path>>(path: P) -> Result<Array2<u8>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| CutError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgba = img.to_rgba8();

    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    if width == 0 || height == 0 || width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(CutError::InvalidTarget {
            reason: format!("image size {width}x{height} is outside the supported range"),
        });
    }

    let mut occupancy = Array2::zeros((height, width));
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [red, green, blue, alpha] = pixel.0;
        if alpha >= OPAQUE_ALPHA_THRESHOLD && luminance(red, green, blue) <= OCCUPANCY_LUMA_THRESHOLD
        {
            if let Some(cell) = occupancy.get_mut((y as usize, x as usize)) {
                *cell = 1;
            }
        }
    }

    Ok(occupancy)
}

/// Build a board from a loaded occupancy grid
///
/// # Errors
///
/// Returns [`CutError::InvalidDimensions`] for a zero-width grid; grids
/// produced by [`load_occupancy`] always pass.
pub fn board_from_occupancy(occupancy: &Array2<u8>) -> Result<Board> {
    let values: Vec<u8> = occupancy.iter().copied().collect();
    Board::from_values(&values, occupancy.ncols())
}

/// Export a board as a PNG with the two pieces in distinct colors
///
/// Empty cells are transparent and pixels align one-to-one with the cells of
/// the input, so input and output can be compared position by position.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and saved.
pub fn export_board<P: AsRef<Path>>(board: &Board, output_path: P) -> Result<()> {
    let mut img = ImageBuffer::new(board.width() as u32, board.height() as u32);

    for (index, cell) in board.cells().iter().enumerate() {
        let x = (index % board.width()) as u32;
        let y = (index / board.width()) as u32;
        let color = match cell {
            Cell::Empty => Rgba([0, 0, 0, 0]),
            Cell::Primary => Rgba(PRIMARY_PIECE_COLOR),
            Cell::Secondary => Rgba(SECONDARY_PIECE_COLOR),
        };
        img.put_pixel(x, y, color);
    }

    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| CutError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
