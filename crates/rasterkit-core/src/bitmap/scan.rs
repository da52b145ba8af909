//! Rectangle scanning.
//!
//! A scan walks the half-open rectangle `[x, x+w) × [y, y+h)` row by row,
//! top to bottom and left to right, handing the visitor each pixel's
//! coordinates and its byte offset in the buffer.
//!
//! The rectangle is checked against the bitmap before the first visit, so a
//! scan either touches every requested pixel or none of them.

use super::types::{Bitmap, BitmapError, CHANNELS};

impl Bitmap {
    /// Check that a rectangle lies inside the bitmap.
    ///
    /// Empty rectangles are accepted as long as their origin is within
    /// `[0, width] × [0, height]`.
    pub fn check_region(&self, x: u32, y: u32, w: u32, h: u32) -> Result<(), BitmapError> {
        let fits_x = x.checked_add(w).is_some_and(|end| end <= self.width());
        let fits_y = y.checked_add(h).is_some_and(|end| end <= self.height());
        if fits_x && fits_y {
            Ok(())
        } else {
            Err(BitmapError::OutOfBounds {
                x,
                y,
                width: w,
                height: h,
                bitmap_width: self.width(),
                bitmap_height: self.height(),
            })
        }
    }

    /// Visit every pixel of a rectangle, read-only.
    ///
    /// `visit` receives `(x, y, offset)` where `offset` is the index of the
    /// pixel's red byte in [`Bitmap::data`].
    ///
    /// # Errors
    ///
    /// Returns `BitmapError::OutOfBounds` without visiting anything if the
    /// rectangle is not fully inside the bitmap.
    pub fn scan<F>(&self, x: u32, y: u32, w: u32, h: u32, mut visit: F) -> Result<(), BitmapError>
    where
        F: FnMut(u32, u32, usize),
    {
        self.check_region(x, y, w, h)?;
        for py in y..y + h {
            for px in x..x + w {
                visit(px, py, self.offset_of(px, py));
            }
        }
        Ok(())
    }

    /// Visit every pixel of a rectangle with write access to the buffer.
    ///
    /// `visit` receives the whole pixel buffer plus `(x, y, offset)`. The
    /// buffer is a slice, so the visitor can rewrite pixels but cannot
    /// resize the bitmap mid-scan.
    ///
    /// # Errors
    ///
    /// Returns `BitmapError::OutOfBounds` without visiting anything if the
    /// rectangle is not fully inside the bitmap.
    pub fn scan_mut<F>(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        mut visit: F,
    ) -> Result<(), BitmapError>
    where
        F: FnMut(&mut [u8], u32, u32, usize),
    {
        self.check_region(x, y, w, h)?;
        for py in y..y + h {
            for px in x..x + w {
                let offset = self.offset_of(px, py);
                visit(self.data_mut(), px, py, offset);
            }
        }
        Ok(())
    }

    /// Visit the whole bitmap with write access.
    pub fn scan_all_mut<F>(&mut self, visit: F)
    where
        F: FnMut(&mut [u8], u32, u32, usize),
    {
        let (w, h) = self.dimensions();
        // The full rectangle always fits.
        let _ = self.scan_mut(0, 0, w, h, visit);
    }

    // Computed from the current width on every call.
    #[inline]
    fn offset_of(&self, x: u32, y: u32) -> usize {
        (self.width() as usize * y as usize + x as usize) * CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order_is_row_major() {
        let bmp = Bitmap::new(3, 2).unwrap();
        let mut visited = Vec::new();
        bmp.scan(0, 0, 3, 2, |x, y, idx| visited.push((x, y, idx)))
            .unwrap();

        assert_eq!(
            visited,
            vec![
                (0, 0, 0),
                (1, 0, 4),
                (2, 0, 8),
                (0, 1, 12),
                (1, 1, 16),
                (2, 1, 20),
            ]
        );
    }

    #[test]
    fn test_scan_sub_rectangle() {
        let bmp = Bitmap::new(4, 4).unwrap();
        let mut visited = Vec::new();
        bmp.scan(1, 2, 2, 1, |x, y, idx| visited.push((x, y, idx)))
            .unwrap();

        assert_eq!(visited, vec![(1, 2, 36), (2, 2, 40)]);
    }

    #[test]
    fn test_scan_out_of_bounds_visits_nothing() {
        let bmp = Bitmap::new(4, 4).unwrap();
        let mut count = 0;
        let result = bmp.scan(2, 2, 3, 1, |_, _, _| count += 1);

        assert!(matches!(result, Err(BitmapError::OutOfBounds { .. })));
        assert_eq!(count, 0);
    }

    #[test]
    fn test_scan_overflowing_region_rejected() {
        let bmp = Bitmap::new(4, 4).unwrap();
        let result = bmp.scan(u32::MAX, 0, 2, 1, |_, _, _| {});
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_empty_region() {
        let bmp = Bitmap::new(4, 4).unwrap();
        let mut count = 0;
        bmp.scan(4, 4, 0, 0, |_, _, _| count += 1).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_scan_mut_writes_through() {
        let mut bmp = Bitmap::new(2, 2).unwrap();
        bmp.scan_mut(1, 0, 1, 2, |data, _, _, idx| data[idx] = 200)
            .unwrap();

        assert_eq!(bmp.get_pixel(1, 0), Some([200, 0, 0, 0]));
        assert_eq!(bmp.get_pixel(1, 1), Some([200, 0, 0, 0]));
        assert_eq!(bmp.get_pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_scan_all_mut_covers_every_pixel() {
        let mut bmp = Bitmap::new(5, 3).unwrap();
        let mut count = 0;
        bmp.scan_all_mut(|data, _, _, idx| {
            data[idx + 3] = 255;
            count += 1;
        });
        assert_eq!(count, 15);
        assert!(bmp.data().chunks_exact(4).all(|px| px[3] == 255));
    }
}
