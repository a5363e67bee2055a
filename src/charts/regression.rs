use serde::{Deserialize, Serialize};

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// `None` with fewer than two points or when every x is the same.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        let n = xs.len().min(ys.len());
        if n < 2 {
            return None;
        }
        let nf = n as f64;
        let mean_x = xs[..n].iter().sum::<f64>() / nf;
        let mean_y = ys[..n].iter().sum::<f64>() / nf;

        let (mut sxy, mut sxx) = (0.0, 0.0);
        for (x, y) in xs[..n].iter().zip(&ys[..n]) {
            let dx = x - mean_x;
            sxy += dx * (y - mean_y);
            sxx += dx * dx;
        }
        if sxx.abs() < f64::EPSILON {
            return None;
        }
        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Two points spanning `[min(xs), max(xs)]`, for drawing the line.
    pub fn segment(&self, xs: &[f64]) -> Option<[(f64, f64); 2]> {
        let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !lo.is_finite() || !hi.is_finite() {
            return None;
        }
        Some([(lo, self.predict(lo)), (hi, self.predict(hi))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_line() {
        let xs = [0.1, 0.2, 0.3, 0.4];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 0.05).collect();
        let fit = LinearFit::fit(&xs, &ys).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-9);
        assert!((fit.intercept - 0.05).abs() < 1e-9);

        let [(x0, y0), (x1, y1)] = fit.segment(&xs).unwrap();
        assert_eq!((x0, x1), (0.1, 0.4));
        assert!((y0 - 0.25).abs() < 1e-9);
        assert!((y1 - 0.85).abs() < 1e-9);
    }

    #[test]
    fn noisy_points() {
        // symmetric noise around y = x
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [1.5, 1.5, 3.5, 3.5];
        let fit = LinearFit::fit(&xs, &ys).unwrap();
        assert!((fit.slope - 0.8).abs() < 1e-9);
        assert!((fit.intercept - 0.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(LinearFit::fit(&[1.0], &[2.0]).is_none());
        assert!(LinearFit::fit(&[0.3, 0.3, 0.3], &[0.1, 0.2, 0.3]).is_none());
        assert!(LinearFit { slope: 1.0, intercept: 0.0 }.segment(&[]).is_none());
    }
}
