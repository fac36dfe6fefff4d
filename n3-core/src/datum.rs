//! Datum correction models
//!
//! The receiver reports height above its own geoid model. Local survey
//! heights (Ordnance Datum Newlyn here) sit on a slightly different
//! surface, so the OSDN windows add an offset: either one constant for the
//! whole coverage region, or a value interpolated from a coarse grid.

use crate::gps::Position;

/// Latitude/longitude bounding box, inclusive on all edges
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub south_deg: f64,
    pub north_deg: f64,
    pub west_deg: f64,
    pub east_deg: f64,
}

impl Region {
    pub fn contains(&self, pos: Position) -> bool {
        pos.lat_deg >= self.south_deg
            && pos.lat_deg <= self.north_deg
            && pos.lon_deg >= self.west_deg
            && pos.lon_deg <= self.east_deg
    }
}

/// Single offset applied everywhere inside a region
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedDatum {
    /// Added to the receiver altitude (m)
    pub offset_m: f64,
    pub region: Region,
}

impl FixedDatum {
    /// Offset at `pos`, or `None` outside the coverage region
    pub fn correction(&self, pos: Position) -> Option<f64> {
        self.region.contains(pos).then_some(self.offset_m)
    }
}

/// Regular lat/lon grid of offsets
///
/// `offsets_m` is row-major starting at the south-west corner: row 0 is the
/// southernmost latitude, column 0 the westernmost longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatumGrid<'a> {
    /// South-west corner
    pub origin: Position,
    /// Spacing between nodes in both axes (degrees)
    pub step_deg: f64,
    pub cols: usize,
    pub rows: usize,
    pub offsets_m: &'a [f32],
}

impl<'a> DatumGrid<'a> {
    fn node(&self, col: usize, row: usize) -> f64 {
        f64::from(self.offsets_m[row * self.cols + col])
    }

    /// Check the table shape matches its declared dimensions
    pub fn is_well_formed(&self) -> bool {
        self.cols >= 2
            && self.rows >= 2
            && self.step_deg > 0.0
            && self.offsets_m.len() == self.cols * self.rows
    }

    /// Bilinearly interpolated offset at `pos`
    ///
    /// Returns `None` outside the grid or if the table is malformed.
    pub fn interpolate(&self, pos: Position) -> Option<f64> {
        if !self.is_well_formed() {
            return None;
        }

        let x = (pos.lon_deg - self.origin.lon_deg) / self.step_deg;
        let y = (pos.lat_deg - self.origin.lat_deg) / self.step_deg;
        let max_x = (self.cols - 1) as f64;
        let max_y = (self.rows - 1) as f64;
        if !(0.0..=max_x).contains(&x) || !(0.0..=max_y).contains(&y) {
            return None;
        }

        // Non-negative here, so truncation is floor. The far edge belongs to
        // the last cell.
        let col = (x as usize).min(self.cols - 2);
        let row = (y as usize).min(self.rows - 2);
        let fx = x - col as f64;
        let fy = y - row as f64;

        let south = self.node(col, row) * (1.0 - fx) + self.node(col + 1, row) * fx;
        let north = self.node(col, row + 1) * (1.0 - fx) + self.node(col + 1, row + 1) * fx;
        Some(south * (1.0 - fy) + north * fy)
    }
}

/// Great Britain mainland and islands
pub const GB_REGION: Region = Region {
    south_deg: 49.8,
    north_deg: 60.9,
    west_deg: -8.7,
    east_deg: 1.8,
};

/// Mean ODN correction over Great Britain
pub const GB_FIXED: FixedDatum = FixedDatum {
    offset_m: -0.5,
    region: GB_REGION,
};

const GB_GRID_OFFSETS: [f32; 16] = [
    // 50N
    -0.2, -0.4, -0.5, -0.6, //
    // 53N
    -0.3, -0.5, -0.6, -0.8, //
    // 56N
    -0.4, -0.5, -0.7, -0.9, //
    // 59N
    -0.5, -0.6, -0.8, -1.0,
];

/// Coarse 3 degree ODN correction grid for Great Britain
pub const GB_GRID: DatumGrid<'static> = DatumGrid {
    origin: Position::new(50.0, -7.0),
    step_deg: 3.0,
    cols: 4,
    rows: 4,
    offsets_m: &GB_GRID_OFFSETS,
};
