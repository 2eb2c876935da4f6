//! random point sets for tests and benchmarks

use num_traits::Float;
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;

use crate::error::Result;
use crate::point::PointSet;

/// generates nb_points uniformly in the square [0, side)x[0, side). Points are labelled p0, p1, ...
/// The generator is seeded so a given (nb_points, side, seed) always gives the same set.
pub fn uniform_points<F>(nb_points: usize, side: f64, seed: u64) -> Result<PointSet<F>>
where
    F: Float + std::fmt::Debug,
{
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut points = PointSet::<F>::with_capacity(nb_points);
    for i in 0..nb_points {
        let x = side * rng.random::<f64>();
        let y = side * rng.random::<f64>();
        // a non representable coordinate will be rejected by insert as non finite
        let position = [
            F::from(x).unwrap_or_else(F::nan),
            F::from(y).unwrap_or_else(F::nan),
        ];
        points.insert(format!("p{}", i), position)?;
    }
    log::debug!("generated {} uniform points, side : {:.3e}, seed : {}", nb_points, side, seed);
    Ok(points)
} // end of uniform_points

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_uniform_points() {
        let p1 = uniform_points::<f64>(30, 2., 4664397).unwrap();
        let p2 = uniform_points::<f64>(30, 2., 4664397).unwrap();
        assert_eq!(p1.len(), 30);
        assert_eq!(p1.get_label(29), Some("p29"));
        for ((l1, x1), (l2, x2)) in p1.iter().zip(p2.iter()) {
            assert_eq!(l1, l2);
            assert_eq!(x1, x2);
            assert!(x1[0] >= 0. && x1[0] < 2. && x1[1] >= 0. && x1[1] < 2.);
        }
        let p3 = uniform_points::<f32>(30, 2., 1).unwrap();
        assert_ne!(p3.get_position("p0").map(|p| p[0] as f64), p1.get_position("p0").map(|p| p[0]));
        //
        assert!(uniform_points::<f64>(3, f64::NAN, 1).is_err());
    }
} // end of mod tests
