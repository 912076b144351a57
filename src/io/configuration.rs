//! Cutting constants and PNG workflow defaults

/// Quarter-turn orientations tried during the congruence search (0°, 90°, 180°)
pub const QUARTER_TURN_TRIALS: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension in cells
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Pixel classification for loaded shape images
/// Luminance at or below which an opaque pixel counts as filled
pub const OCCUPANCY_LUMA_THRESHOLD: u8 = 127;
/// Alpha at or above which a pixel counts as opaque
pub const OPAQUE_ALPHA_THRESHOLD: u8 = 128;

// Export colors for the two pieces; empty cells stay transparent
/// RGBA fill for cells of the piece that keeps its label
pub const PRIMARY_PIECE_COLOR: [u8; 4] = [31, 119, 180, 255];
/// RGBA fill for cells relabeled to the mirrored piece
pub const SECONDARY_PIECE_COLOR: [u8; 4] = [255, 127, 14, 255];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_cut";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
