/// Convert HSL to linear RGB. Hue wraps, so h=1.0 equals h=0.0.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = (h.rem_euclid(1.0)) * 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = l - c * 0.5;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_to_rgb_red() {
        let rgb = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!(rgb[1].abs() < 0.01);
        assert!(rgb[2].abs() < 0.01);
    }

    #[test]
    fn test_hsl_to_rgb_green() {
        let rgb = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
        assert!(rgb[0].abs() < 0.01);
        assert!((rgb[1] - 1.0).abs() < 0.01);
        assert!(rgb[2].abs() < 0.01);
    }

    #[test]
    fn test_hsl_to_rgb_blue() {
        let rgb = hsl_to_rgb(2.0 / 3.0, 1.0, 0.5);
        assert!(rgb[0].abs() < 0.01);
        assert!(rgb[1].abs() < 0.01);
        assert!((rgb[2] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_hsl_to_rgb_white() {
        let rgb = hsl_to_rgb(0.0, 1.0, 1.0);
        for channel in rgb {
            assert!((channel - 1.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_hsl_to_rgb_gray_ignores_hue() {
        let a = hsl_to_rgb(0.1, 0.0, 0.5);
        let b = hsl_to_rgb(0.7, 0.0, 0.5);
        for i in 0..3 {
            assert!((a[i] - 0.5).abs() < 0.01);
            assert!((a[i] - b[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hsl_to_rgb_hue_wraps() {
        let a = hsl_to_rgb(0.25, 1.0, 0.5);
        let b = hsl_to_rgb(1.25, 1.0, 0.5);
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5);
        }
    }
}
