//! Uncompressed 24-bit BMP output.
//!
//! Layout: a 14-byte file header, a 40-byte `BITMAPINFOHEADER`, then pixel
//! rows from the bottom of the image up, each stored as BGR triples and
//! padded to a multiple of four bytes. All integers are little-endian.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::GridError;
use crate::grid::Grid;

/// Offset of the pixel data: file header plus DIB header.
pub const PIXEL_DATA_OFFSET: u32 = 54;

const DIB_HEADER_SIZE: u32 = 40;
/// 72 DPI.
const PIXELS_PER_METER: i32 = 2835;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Bytes per stored pixel row of an image `width` pixels wide.
pub fn row_stride(width: u32) -> u32 {
    (width * 3 + 3) & !3
}

impl<T> Grid<T> {
    /// Writes the grid as a BMP image, one `scale × scale` block per node.
    ///
    /// # Errors
    ///
    /// * [`GridError::InvalidInput`] if `scale` is zero or the image would be
    ///   too large for the format
    /// * [`GridError::Io`] if writing fails
    pub fn write_bitmap<W, F>(&self, mut out: W, scale: u32, mut color: F) -> Result<(), GridError>
    where
        W: Write,
        F: FnMut(&T) -> Rgb,
    {
        if scale == 0 {
            return Err(GridError::InvalidInput("bitmap scale must be at least 1".to_string()));
        }
        let too_large = || {
            GridError::InvalidInput(format!(
                "{}x{} grid at scale {} does not fit in a bitmap",
                self.width(),
                self.height(),
                scale
            ))
        };
        let width = u32::try_from(self.width())
            .ok()
            .and_then(|w| w.checked_mul(scale))
            .filter(|&w| w <= i32::MAX as u32 / 3)
            .ok_or_else(too_large)?;
        let height = u32::try_from(self.height())
            .ok()
            .and_then(|h| h.checked_mul(scale))
            .filter(|&h| h <= i32::MAX as u32)
            .ok_or_else(too_large)?;
        let stride = row_stride(width);
        let image_size = stride.checked_mul(height).ok_or_else(too_large)?;
        let file_size = image_size
            .checked_add(PIXEL_DATA_OFFSET)
            .ok_or_else(too_large)?;

        // file header
        out.write_all(b"BM")?;
        out.write_all(&file_size.to_le_bytes())?;
        out.write_all(&0u16.to_le_bytes())?;
        out.write_all(&0u16.to_le_bytes())?;
        out.write_all(&PIXEL_DATA_OFFSET.to_le_bytes())?;

        // DIB header
        out.write_all(&DIB_HEADER_SIZE.to_le_bytes())?;
        out.write_all(&(width as i32).to_le_bytes())?;
        out.write_all(&(height as i32).to_le_bytes())?;
        out.write_all(&1u16.to_le_bytes())?;
        out.write_all(&24u16.to_le_bytes())?;
        out.write_all(&0u32.to_le_bytes())?;
        out.write_all(&image_size.to_le_bytes())?;
        out.write_all(&PIXELS_PER_METER.to_le_bytes())?;
        out.write_all(&PIXELS_PER_METER.to_le_bytes())?;
        out.write_all(&0u32.to_le_bytes())?;
        out.write_all(&0u32.to_le_bytes())?;

        let mut row = vec![0u8; stride as usize];
        for grid_row in self.rows().collect::<Vec<_>>().into_iter().rev() {
            row.fill(0);
            let pixels = grid_row
                .iter()
                .flat_map(|node| std::iter::repeat_n(color(node.value()), scale as usize));
            for (pixel, Rgb { r, g, b }) in row.chunks_exact_mut(3).zip(pixels) {
                pixel.copy_from_slice(&[b, g, r]);
            }
            for _ in 0..scale {
                out.write_all(&row)?;
            }
        }
        out.flush()?;

        log::debug!(
            "wrote {}x{} bitmap ({} bytes)",
            width,
            height,
            file_size
        );
        Ok(())
    }

    /// [`Grid::write_bitmap`] into a new file at `path`.
    pub fn save_bitmap<P, F>(&self, path: P, scale: u32, color: F) -> Result<(), GridError>
    where
        P: AsRef<Path>,
        F: FnMut(&T) -> Rgb,
    {
        let file = File::create(path)?;
        self.write_bitmap(BufWriter::new(file), scale, color)
    }
}
