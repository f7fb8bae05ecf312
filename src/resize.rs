//! Aspect-corrected resizing to the character grid.

use crate::{AsciifyError, Result};
use image::{ImageBuffer, Pixel};

type Buffer<P> = ImageBuffer<P, Vec<u8>>;

/// Largest grid [`grid_rows`] will accept, in character cells.
pub const MAX_GRID_CELLS: u64 = 1 << 24;

/// Rows needed for `cols` characters over a `width`×`height` source.
///
/// Character cells are taller than wide, so the pixel aspect ratio is
/// divided by `vertical_scale`. Never less than one row, and never more
/// than [`MAX_GRID_CELLS`] cells in total.
pub fn grid_rows(width: u32, height: u32, cols: u32, vertical_scale: f32) -> Result<u32> {
    if width == 0 || height == 0 {
        return Err(AsciifyError::InvalidDimensions { width, height });
    }
    if cols == 0 {
        return Err(AsciifyError::InvalidWidth);
    }
    if !vertical_scale.is_finite() || vertical_scale <= 0.0 {
        return Err(AsciifyError::InvalidParameter { name: "vertical_scale", value: vertical_scale });
    }
    let ratio = height as f64 / width as f64;
    let rows = (cols as f64 * ratio / vertical_scale as f64).round().max(1.0);
    if cols as f64 * rows > MAX_GRID_CELLS as f64 {
        return Err(AsciifyError::GridTooLarge { cols, rows, max: MAX_GRID_CELLS });
    }
    Ok(rows as u32)
}

/// Resize to `cols` wide with the row count from [`grid_rows`].
pub fn resize<P: Pixel<Subpixel = u8>>(image: &Buffer<P>, cols: u32, vertical_scale: f32) -> Result<Buffer<P>> {
    let rows = grid_rows(image.width(), image.height(), cols, vertical_scale)?;
    Ok(GridSampler::new(image, cols, rows).resample())
}

/// Splits an image into a `cols`×`rows` grid and area-averages each cell.
pub struct GridSampler<'a, P: Pixel<Subpixel = u8>> {
    image: &'a Buffer<P>,
    cols: u32,
    rows: u32,
    cell_w: f64,
    cell_h: f64,
}

impl<'a, P: Pixel<Subpixel = u8>> GridSampler<'a, P> {
    pub fn new(image: &'a Buffer<P>, cols: u32, rows: u32) -> Self {
        let cell_w = image.width() as f64 / cols as f64;
        let cell_h = image.height() as f64 / rows as f64;
        Self { image, cols, rows, cell_w, cell_h }
    }

    pub fn resample(&self) -> Buffer<P> {
        ImageBuffer::from_fn(self.cols, self.rows, |x, y| self.sample(x, y))
    }

    /// Average of the source pixels under cell (col, row), each weighted
    /// by the fraction of it the cell covers.
    pub fn sample(&self, col: u32, row: u32) -> P {
        let xs = coverage(col, self.cell_w, self.image.width());
        let ys = coverage(row, self.cell_h, self.image.height());

        let mut sums = [0f64; 4];
        let mut total = 0.0;
        for &(y, wy) in &ys {
            for &(x, wx) in &xs {
                let w = wx * wy;
                total += w;
                for (sum, &c) in sums.iter_mut().zip(self.image.get_pixel(x, y).channels()) {
                    *sum += c as f64 * w;
                }
            }
        }

        let channels = P::CHANNEL_COUNT as usize;
        let mut avg = [0u8; 4];
        for (a, s) in avg.iter_mut().zip(sums).take(channels) {
            *a = (s / total).round().clamp(0.0, 255.0) as u8;
        }
        *P::from_slice(&avg[..channels])
    }
}

/// Source pixels overlapped by cell `index` along one axis, with the
/// overlap length of each. Never empty for an in-range index.
fn coverage(index: u32, cell: f64, limit: u32) -> Vec<(u32, f64)> {
    let start = index as f64 * cell;
    let end = ((index + 1) as f64 * cell).min(limit as f64);
    let first = (start.floor() as u32).min(limit - 1);
    let last = (end.ceil() as u32).clamp(first + 1, limit);

    let spans: Vec<(u32, f64)> = (first..last)
        .map(|i| {
            let overlap = end.min(i as f64 + 1.0) - start.max(i as f64);
            (i, overlap)
        })
        .filter(|&(_, w)| w > 0.0)
        .collect();
    if spans.is_empty() {
        vec![(first, 1.0)]
    } else {
        spans
    }
}
