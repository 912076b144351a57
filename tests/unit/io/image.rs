//! Tests for PNG occupancy loading and two-color export

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, Rgba, RgbaImage};
    use mirrorcut::io::configuration::{PRIMARY_PIECE_COLOR, SECONDARY_PIECE_COLOR};
    use mirrorcut::io::image::{board_from_occupancy, export_board, load_occupancy};
    use mirrorcut::spatial::board::Board;
    use std::path::Path;

    // Black ink on a transparent background, one pixel per cell
    fn shape_image(values: &[u8], width: u32) -> RgbaImage {
        let height = values.len() as u32 / width;
        ImageBuffer::from_fn(width, height, |x, y| {
            let index = (y * width + x) as usize;
            if values.get(index) == Some(&1) {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    fn save_shape(values: &[u8], width: u32, path: &Path) {
        let image = shape_image(values, width);
        assert!(image.save(path).is_ok(), "failed to save test fixture");
    }

    // Tests dark opaque pixels load as filled cells and the rest as empty
    // Verified by inverting the luminance threshold
    #[test]
    fn test_load_occupancy_classifies_pixels() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("tempdir should be creatable");
        };
        let path = dir.path().join("shape.png");
        let values = [0, 1, 1, 1, 1, 1, 0, 1];
        save_shape(&values, 4, &path);

        let Ok(occupancy) = load_occupancy(&path) else {
            unreachable!("fixture image should load");
        };

        assert_eq!(occupancy.dim(), (2, 4));
        let loaded: Vec<u8> = occupancy.iter().copied().collect();
        assert_eq!(loaded, values);
    }

    // Tests a loaded grid builds a board with matching dimensions
    // Verified by transposing rows and columns during the flatten
    #[test]
    fn test_board_from_occupancy_keeps_the_layout() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("tempdir should be creatable");
        };
        let path = dir.path().join("shape.png");
        let values = [1, 1, 0, 0, 1, 1];
        save_shape(&values, 3, &path);

        let Ok(occupancy) = load_occupancy(&path) else {
            unreachable!("fixture image should load");
        };
        let Ok(board) = board_from_occupancy(&occupancy) else {
            unreachable!("loaded grids have valid dimensions");
        };

        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.values(), values);
    }

    // Tests the export colors the two pieces and keeps pixels cell-aligned
    // Verified by cropping the output to the filled bounding box
    #[test]
    fn test_export_board_colors_the_pieces() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("tempdir should be creatable");
        };
        let path = dir.path().join("pieces.png");
        let Ok(board) = Board::from_values(&[1_u8, 1, 2, 2], 4) else {
            unreachable!("fixture has valid dimensions");
        };

        assert!(export_board(&board, &path).is_ok());

        let Ok(exported) = image::open(&path) else {
            unreachable!("exported image should reload");
        };
        let pixels = exported.to_rgba8();
        assert_eq!(pixels.dimensions(), (4, 1));
        assert_eq!(pixels.get_pixel(0, 0).0, PRIMARY_PIECE_COLOR);
        assert_eq!(pixels.get_pixel(1, 0).0, PRIMARY_PIECE_COLOR);
        assert_eq!(pixels.get_pixel(2, 0).0, SECONDARY_PIECE_COLOR);
        assert_eq!(pixels.get_pixel(3, 0).0, SECONDARY_PIECE_COLOR);
    }

    // Tests empty cells export as fully transparent pixels
    // Verified by exporting empty cells in the background color
    #[test]
    fn test_export_board_leaves_empty_cells_transparent() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("tempdir should be creatable");
        };
        let path = dir.path().join("sparse.png");
        let Ok(board) = Board::from_values(&[0_u8, 1, 2, 0], 2) else {
            unreachable!("fixture has valid dimensions");
        };

        assert!(export_board(&board, &path).is_ok());

        let Ok(exported) = image::open(&path) else {
            unreachable!("exported image should reload");
        };
        let pixels = exported.to_rgba8();
        assert_eq!(pixels.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(pixels.get_pixel(1, 1).0, [0, 0, 0, 0]);
    }

    // Tests loading a missing file surfaces an image load error
    // Verified by mapping decode failures to the target variant
    #[test]
    fn test_load_occupancy_reports_missing_files() {
        let result = load_occupancy(Path::new("/nonexistent/shape.png"));
        assert!(matches!(result, Err(mirrorcut::CutError::ImageLoad { .. })));
    }
}
