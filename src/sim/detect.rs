use num_complex::Complex64;

/// Decision sign for one axis. Policy: the boundary value 0.0 maps to +1
/// regardless of its sign bit, so slicing never depends on a numeric
/// library's signum convention.
fn axis_sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Nearest-point QPSK slicing: independent sign decision per axis, each
/// axis's decision boundary at zero.
pub fn slice_symbol(received: Complex64) -> Complex64 {
    Complex64::new(axis_sign(received.re), axis_sign(received.im))
}

/// Count the positions where the sliced received value differs from the
/// transmitted symbol. A mismatch on either axis, or both, counts once.
pub fn frame_errors(transmitted: &[Complex64], received: &[Complex64]) -> usize {
    transmitted
        .iter()
        .zip(received.iter())
        .filter(|(s, w)| slice_symbol(**w) != **s)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn slices_to_the_nearest_quadrant() {
        assert_eq!(slice_symbol(c(0.3, 1.7)), c(1.0, 1.0));
        assert_eq!(slice_symbol(c(-2.1, 0.4)), c(-1.0, 1.0));
        assert_eq!(slice_symbol(c(-0.2, -0.9)), c(-1.0, -1.0));
        assert_eq!(slice_symbol(c(1.4, -0.1)), c(1.0, -1.0));
    }

    #[test]
    fn zero_slices_to_plus_one_on_both_zero_signs() {
        assert_eq!(slice_symbol(c(0.0, 0.0)), c(1.0, 1.0));
        assert_eq!(slice_symbol(c(-0.0, -0.0)), c(1.0, 1.0));
        assert_eq!(slice_symbol(c(0.0, -0.0)), c(1.0, 1.0));
    }

    #[test]
    fn counts_each_errored_position_once() {
        let tx = vec![c(1.0, 1.0), c(-1.0, 1.0), c(1.0, -1.0), c(-1.0, -1.0)];
        let rx = vec![
            c(0.9, 1.1),   // clean
            c(0.8, 1.2),   // real axis wrong: one error
            c(-1.1, 0.7),  // both axes wrong: still one error
            c(-0.6, -0.5), // clean
        ];
        assert_eq!(frame_errors(&tx, &rx), 2);
    }

    #[test]
    fn identical_frames_have_zero_errors() {
        let tx = vec![c(1.0, -1.0); 16];
        assert_eq!(frame_errors(&tx, &tx), 0);
    }
}
