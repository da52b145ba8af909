//! Colour filters: invert, greyscale and sepia.
//!
//! All three rewrite R, G and B of every pixel and leave alpha alone.

use crate::bitmap::Bitmap;

/// Invert the colour channels.
///
/// Formula: `channel = 255 - channel` for R, G and B.
pub fn apply_invert(bitmap: &mut Bitmap) {
    bitmap.scan_all_mut(|data, _, _, idx| {
        data[idx] = 255 - data[idx];
        data[idx + 1] = 255 - data[idx + 1];
        data[idx + 2] = 255 - data[idx + 2];
    });
}

/// Remove colour by averaging the channels.
///
/// Formula: `R = G = B = floor((R + G + B) / 3)`
pub fn apply_greyscale(bitmap: &mut Bitmap) {
    bitmap.scan_all_mut(|data, _, _, idx| {
        let sum = data[idx] as u16 + data[idx + 1] as u16 + data[idx + 2] as u16;
        let grey = (sum / 3) as u8;
        data[idx] = grey;
        data[idx + 1] = grey;
        data[idx + 2] = grey;
    });
}

/// Apply a sepia tone.
///
/// The channels are updated one after another, and later rows of the
/// matrix see the already toned values:
/// ```text
/// R' = 0.393 R  + 0.769 G  + 0.189 B
/// G' = 0.349 R' + 0.686 G  + 0.168 B
/// B' = 0.272 R' + 0.534 G' + 0.131 B
/// ```
/// Results above 255 clamp to 255; fractions are truncated.
pub fn apply_sepia(bitmap: &mut Bitmap) {
    bitmap.scan_all_mut(|data, _, _, idx| {
        let (r, g, b) = sepia_tone(data[idx], data[idx + 1], data[idx + 2]);
        data[idx] = r;
        data[idx + 1] = g;
        data[idx + 2] = b;
    });
}

#[inline]
fn sepia_tone(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let r = r * 0.393 + g * 0.769 + b * 0.189;
    let g = r * 0.349 + g * 0.686 + b * 0.168;
    let b = r * 0.272 + g * 0.534 + b * 0.131;
    (clamp_channel(r), clamp_channel(g), clamp_channel(b))
}

/// Clamp above at 255 and truncate toward zero.
#[inline]
fn clamp_channel(v: f64) -> u8 {
    v.min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_white_to_black() {
        let mut bmp = Bitmap::filled(4, 4, [255, 255, 255, 255]).unwrap();
        apply_invert(&mut bmp);
        assert!(bmp
            .data()
            .chunks_exact(4)
            .all(|px| *px == [0, 0, 0, 255]));
    }

    #[test]
    fn test_invert_keeps_alpha() {
        let mut bmp = Bitmap::filled(1, 1, [10, 100, 200, 77]).unwrap();
        apply_invert(&mut bmp);
        assert_eq!(bmp.data(), &[245, 155, 55, 77]);
    }

    #[test]
    fn test_invert_twice_restores() {
        let data: Vec<u8> = (0..64).map(|i| (i * 7) as u8).collect();
        let mut bmp = Bitmap::from_raw(4, 4, data).unwrap();
        let original = bmp.clone();
        apply_invert(&mut bmp);
        apply_invert(&mut bmp);
        assert_eq!(bmp, original);
    }

    #[test]
    fn test_greyscale_floor_average() {
        let mut bmp = Bitmap::filled(1, 1, [30, 60, 90, 255]).unwrap();
        apply_greyscale(&mut bmp);
        assert_eq!(bmp.data(), &[60, 60, 60, 255]);
    }

    #[test]
    fn test_greyscale_rounds_down() {
        // (1 + 1 + 0) / 3 = 0.67 -> 0
        let mut bmp = Bitmap::filled(1, 1, [1, 1, 0, 9]).unwrap();
        apply_greyscale(&mut bmp);
        assert_eq!(bmp.data(), &[0, 0, 0, 9]);
    }

    #[test]
    fn test_greyscale_white_stays_white() {
        let mut bmp = Bitmap::filled(2, 2, [255, 255, 255, 255]).unwrap();
        apply_greyscale(&mut bmp);
        assert!(bmp.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_sepia_black_stays_black() {
        assert_eq!(sepia_tone(0, 0, 0), (0, 0, 0));
    }

    #[test]
    fn test_sepia_clamps_white() {
        assert_eq!(sepia_tone(255, 255, 255), (255, 255, 255));
    }

    #[test]
    fn test_sepia_uses_updated_channels() {
        // R' = 0.393 * 100 = 39.3
        // G' = 0.349 * 39.3 = 13.7157
        // B' = 0.272 * 39.3 + 0.534 * 13.7157 = 18.01...
        assert_eq!(sepia_tone(100, 0, 0), (39, 13, 18));
    }

    #[test]
    fn test_sepia_keeps_alpha() {
        let mut bmp = Bitmap::filled(2, 1, [50, 50, 50, 128]).unwrap();
        apply_sepia(&mut bmp);
        assert!(bmp.data().chunks_exact(4).all(|px| px[3] == 128));
    }
}
