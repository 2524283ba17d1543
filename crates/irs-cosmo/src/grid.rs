use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::require_finite;

/// `n` evenly spaced samples from `start` to `end`, both endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>, IrsError> {
    require_finite("start", start)?;
    require_finite("end", end)?;
    match n {
        0 => Err(IrsError::Config(ErrorInfo::new(
            "empty-grid",
            "a grid needs at least one point",
        ))),
        1 => Ok(vec![start]),
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|idx| start + step * idx as f64).collect();
            points[n - 1] = end;
            Ok(points)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let grid = linspace(0.5, 25.0, 200).expect("grid");
        assert_eq!(grid.len(), 200);
        assert_eq!(grid[0], 0.5);
        assert_eq!(grid[199], 25.0);
    }

    #[test]
    fn single_point_grid_is_the_start() {
        assert_eq!(linspace(3.0, 9.0, 1).expect("grid"), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_err());
    }
}
