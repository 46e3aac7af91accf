//! Longest-side scale planning.
//!
//! Pure dimension math shared by the detection proxy (shrink before
//! running the face detector) and the gallery renditions (large/medium/
//! small sizes). Never upscales.

use super::SquareError;

/// Target dimensions plus the factor that maps bounded coordinates back to
/// the original image.
///
/// `factor = original long side / bounded long side`, so a box found on
/// the scaled-down image is multiplied by `factor` to land on the
/// original. `factor == 1.0` exactly when no scaling occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePlan {
    pub target_width: u32,
    pub target_height: u32,
    pub factor: f64,
}

impl ScalePlan {
    /// Whether this plan actually shrinks the image.
    pub fn scales(&self) -> bool {
        self.factor > 1.0
    }
}

/// Plan a downscale so the longest side does not exceed `bound`.
///
/// Images already within the bound keep their dimensions and get
/// `factor = 1.0`. Otherwise the longer side becomes exactly `bound` and
/// the shorter side shrinks proportionally, truncated to whole pixels.
/// Zero dimensions and a zero bound are invalid.
pub fn plan_scale(width: u32, height: u32, bound: u32) -> Result<ScalePlan, SquareError> {
    if width == 0 || height == 0 || bound == 0 {
        return Err(SquareError::InvalidDimension { width, height });
    }

    if width <= bound && height <= bound {
        return Ok(ScalePlan {
            target_width: width,
            target_height: height,
            factor: 1.0,
        });
    }

    // Integer arithmetic keeps exact ratios exact (960·150/960 is 150,
    // never 149) while still truncating genuine fractions.
    let shrunk = |side: u32, long: u32| (side as u64 * bound as u64 / long as u64) as u32;

    let plan = if width > height {
        ScalePlan {
            target_width: bound,
            target_height: shrunk(height, width),
            factor: width as f64 / bound as f64,
        }
    } else {
        ScalePlan {
            target_width: shrunk(width, height),
            target_height: bound,
            factor: height as f64 / bound as f64,
        }
    };

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_bound_keeps_dimensions() {
        let plan = plan_scale(400, 300, 600).unwrap();
        assert_eq!(plan.target_width, 400);
        assert_eq!(plan.target_height, 300);
        assert_eq!(plan.factor, 1.0);
        assert!(!plan.scales());
    }

    #[test]
    fn exactly_at_bound_keeps_dimensions() {
        let plan = plan_scale(600, 600, 600).unwrap();
        assert_eq!(plan.factor, 1.0);
    }

    #[test]
    fn landscape_scales_longer_side_to_bound() {
        let plan = plan_scale(1200, 800, 600).unwrap();
        assert_eq!(plan.target_width, 600);
        assert_eq!(plan.target_height, 400);
        assert_eq!(plan.factor, 2.0);
        assert!(plan.scales());
    }

    #[test]
    fn portrait_scales_longer_side_to_bound() {
        let plan = plan_scale(800, 1200, 600).unwrap();
        assert_eq!(plan.target_width, 400);
        assert_eq!(plan.target_height, 600);
        assert_eq!(plan.factor, 2.0);
    }

    #[test]
    fn short_side_truncates() {
        // factor = 1000 / 600; 333 / factor = 199.8 → 199
        let plan = plan_scale(1000, 333, 600).unwrap();
        assert_eq!(plan.target_width, 600);
        assert_eq!(plan.target_height, 199);
    }

    #[test]
    fn scales_when_only_one_side_exceeds() {
        let plan = plan_scale(800, 500, 600).unwrap();
        assert_eq!(plan.target_width, 600);
        assert_eq!(plan.target_height, 375);
    }

    #[test]
    fn square_input_scales_to_square() {
        let plan = plan_scale(960, 960, 150).unwrap();
        assert_eq!(plan.target_width, 150);
        assert_eq!(plan.target_height, 150);
    }

    #[test]
    fn zero_width_is_invalid() {
        let result = plan_scale(0, 100, 600);
        assert!(matches!(
            result,
            Err(SquareError::InvalidDimension { width: 0, height: 100 })
        ));
    }

    #[test]
    fn zero_height_is_invalid() {
        assert!(plan_scale(100, 0, 600).is_err());
    }

    #[test]
    fn zero_bound_is_invalid() {
        assert!(plan_scale(100, 100, 0).is_err());
    }
}
