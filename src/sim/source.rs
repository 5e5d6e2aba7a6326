use num_complex::Complex64;
use rand::Rng;

fn coin<R: Rng>(rng: &mut R) -> f64 {
    if rng.random::<bool>() { 1.0 } else { -1.0 }
}

/// Generate the N×N transmitted symbol matrix; row = frame.
///
/// Real and imaginary axes are independent fair coin flips onto {-1, +1},
/// so all four QPSK points are equally likely and the two axes carry
/// independent bits. The detector relies on that axis independence.
pub fn symbol_matrix<R: Rng>(n: usize, rng: &mut R) -> Vec<Vec<Complex64>> {
    (0..n)
        .map(|_| {
            (0..n)
                .map(|_| Complex64::new(coin(rng), coin(rng)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn axes_are_exactly_plus_or_minus_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let matrix = symbol_matrix(16, &mut rng);
        assert_eq!(matrix.len(), 16);
        for row in &matrix {
            assert_eq!(row.len(), 16);
            for s in row {
                assert!(s.re == 1.0 || s.re == -1.0, "re = {}", s.re);
                assert!(s.im == 1.0 || s.im == -1.0, "im = {}", s.im);
            }
        }
    }

    #[test]
    fn all_four_constellation_points_occur() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let matrix = symbol_matrix(32, &mut rng);
        let mut seen = [false; 4];
        for s in matrix.iter().flatten() {
            let idx = (if s.re > 0.0 { 0 } else { 1 }) + (if s.im > 0.0 { 0 } else { 2 });
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn point_frequencies_are_roughly_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let matrix = symbol_matrix(64, &mut rng);
        let total = 64 * 64;
        let mut counts = [0usize; 4];
        for s in matrix.iter().flatten() {
            let idx = (if s.re > 0.0 { 0 } else { 1 }) + (if s.im > 0.0 { 0 } else { 2 });
            counts[idx] += 1;
        }
        for &c in &counts {
            let fraction = c as f64 / total as f64;
            assert!(
                (fraction - 0.25).abs() < 0.05,
                "point fraction {} should be near 0.25",
                fraction
            );
        }
    }

    #[test]
    fn same_seed_same_matrix() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(symbol_matrix(8, &mut rng1), symbol_matrix(8, &mut rng2));
    }
}
