//! Dimension rounding and the scale-factor math shared by the fit strategies.

use crate::types::RoundingMultiple;

/// Smallest multiple of `multiple` that is `>= value`. Exact multiples come
/// back unchanged; the result never rounds below `value`.
pub fn round_up_to_multiple(value: usize, multiple: u32) -> usize {
    let m = multiple as usize;
    value.div_ceil(m) * m
}

/// Target dimensions for a source image: each axis rounded up independently.
pub fn target_dimensions(
    src_w: usize,
    src_h: usize,
    multiple: RoundingMultiple,
) -> (usize, usize) {
    let m = multiple.value();
    (round_up_to_multiple(src_w, m), round_up_to_multiple(src_h, m))
}

/// Uniform scale that fits the source entirely inside the target box.
pub fn fit_scale(src_w: usize, src_h: usize, target_w: usize, target_h: usize) -> f64 {
    (target_w as f64 / src_w as f64).min(target_h as f64 / src_h as f64)
}

/// Uniform scale that makes the source cover the entire target box.
pub fn cover_scale(src_w: usize, src_h: usize, target_w: usize, target_h: usize) -> f64 {
    (target_w as f64 / src_w as f64).max(target_h as f64 / src_h as f64)
}

/// Scaled dimensions, rounded to the nearest pixel with a floor of 1 per axis.
pub fn scaled_dimensions(src_w: usize, src_h: usize, scale: f64) -> (usize, usize) {
    let w = (src_w as f64 * scale).round() as usize;
    let h = (src_h as f64 * scale).round() as usize;
    (w.max(1), h.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALLOWED_MULTIPLES;

    #[test]
    fn round_up_bounds() {
        for &m in ALLOWED_MULTIPLES {
            for d in 1..=(3 * m as usize + 1) {
                let r = round_up_to_multiple(d, m);
                assert_eq!(r % m as usize, 0, "d={d} m={m}");
                assert!(r >= d, "d={d} m={m}");
                assert!(r < d + m as usize, "d={d} m={m} not tightest");
            }
        }
    }

    #[test]
    fn exact_multiples_are_untouched() {
        assert_eq!(round_up_to_multiple(64, 16), 64);
        assert_eq!(round_up_to_multiple(28, 14), 28);
    }

    #[test]
    fn target_for_100x50_at_16() {
        assert_eq!(
            target_dimensions(100, 50, RoundingMultiple::M16),
            (112, 64)
        );
    }

    #[test]
    fn fit_and_cover_scales_for_100x50() {
        let s_fit = fit_scale(100, 50, 112, 64);
        assert!((s_fit - 1.12).abs() < 1e-12);
        assert_eq!(scaled_dimensions(100, 50, s_fit), (112, 56));

        let s_cover = cover_scale(100, 50, 112, 64);
        assert!((s_cover - 1.28).abs() < 1e-12);
        assert_eq!(scaled_dimensions(100, 50, s_cover), (128, 64));
    }

    #[test]
    fn scaled_dimensions_floor_at_one() {
        assert_eq!(scaled_dimensions(100, 1, 0.001), (1, 1));
    }
}
