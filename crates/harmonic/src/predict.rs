//! Tidal prediction from a fitted harmonic model.

use std::f64::consts::PI;

use tracing::debug;

use crate::design::design_matrix;
use crate::fit::HarmonicFit;

impl HarmonicFit {
    /// Reconstructs the predicted tide for hourly samples t = 0..n-1.
    ///
    /// Rebuilds the same design-matrix structure used by the fit and
    /// evaluates `X·β + intercept`. `n` may differ from the fitting length,
    /// which extrapolates the astronomical signal beyond the record. Pure
    /// and deterministic.
    pub fn predict(&self, n: usize) -> Vec<f64> {
        debug!(n, k = self.n_constituents(), "reconstructing tidal signal");
        let x = design_matrix(n, self.frequencies());
        let coefficients = self.coefficients();
        let intercept = self.intercept();

        let mut predicted = Vec::with_capacity(n);
        for t in 0..n {
            let mut value = intercept * x[(t, 0)];
            for (j, &c) in coefficients.iter().enumerate() {
                value += c * x[(t, 1 + j)];
            }
            predicted.push(value);
        }
        predicted
    }

    /// Isolated series of a single constituent for t = 0..n-1.
    ///
    /// Evaluates only the chosen constituent's cosine/sine pair plus an
    /// even share `intercept / K` of the intercept. The even split is a
    /// display convention for per-constituent plots, not a true additive
    /// decomposition of the signal.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn constituent_contribution(&self, index: usize, n: usize) -> Vec<f64> {
        let k = self.n_constituents();
        assert!(
            index < k,
            "constituent index {index} out of range (model has {k})"
        );

        let freq = self.frequencies()[index];
        let cos_coef = self.cosine_coef(index);
        let sin_coef = self.sine_coef(index);
        let intercept_share = self.intercept() / k as f64;

        (0..n)
            .map(|t| {
                let arg = 2.0 * PI * freq * t as f64;
                cos_coef * arg.cos() + sin_coef * arg.sin() + intercept_share
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use tethys_constituents::by_name;

    use crate::fit::fit;

    #[test]
    fn predict_length_matches_request() {
        let f = by_name("M2").unwrap().frequency();
        let values: Vec<f64> = (0..200)
            .map(|t| (2.0 * PI * f * t as f64).sin())
            .collect();
        let model = fit(&values, &[by_name("M2").unwrap()]).unwrap();
        assert_eq!(model.predict(200).len(), 200);
        assert_eq!(model.predict(500).len(), 500);
        assert_eq!(model.predict(0).len(), 0);
    }

    #[test]
    fn predict_reproduces_pure_tide() {
        let f = by_name("M2").unwrap().frequency();
        let values: Vec<f64> = (0..1000)
            .map(|t| 1.2 + 3.0 * (2.0 * PI * f * t as f64).sin())
            .collect();
        let model = fit(&values, &[by_name("M2").unwrap()]).unwrap();
        let predicted = model.predict(1000);
        for (obs, pred) in values.iter().zip(predicted.iter()) {
            assert_relative_eq!(obs, pred, epsilon = 1e-6);
        }
    }

    #[test]
    fn predict_extrapolates_periodically() {
        // A pure constituent repeats; extrapolated samples continue the wave.
        let f = by_name("S2").unwrap().frequency();
        let values: Vec<f64> = (0..480)
            .map(|t| 2.0 * (2.0 * PI * f * t as f64).cos())
            .collect();
        let model = fit(&values, &[by_name("S2").unwrap()]).unwrap();
        let predicted = model.predict(600);
        // S2 has an exactly 12-hour period
        for t in 480..600 {
            assert_relative_eq!(predicted[t], predicted[t - 12], epsilon = 1e-8);
        }
    }

    #[test]
    fn r_squared_round_trips_through_predict() {
        let f = by_name("M2").unwrap().frequency();
        let values: Vec<f64> = (0..800)
            .map(|t| {
                let tf = t as f64;
                2.0 * (2.0 * PI * f * tf).sin() + 0.3 * (0.01 * tf).sin()
            })
            .collect();
        let model = fit(&values, &[by_name("M2").unwrap()]).unwrap();
        let predicted = model.predict(values.len());
        let r2 = tethys_stats::r_squared(&values, &predicted);
        assert_relative_eq!(r2, model.r_squared(), epsilon = 1e-12);
    }

    #[test]
    fn contribution_uses_even_intercept_share() {
        let f = by_name("M2").unwrap().frequency();
        let values: Vec<f64> = (0..1000)
            .map(|t| 5.0 + 2.0 * (2.0 * PI * f * t as f64).sin())
            .collect();
        let model = fit(
            &values,
            &[by_name("M2").unwrap(), by_name("S2").unwrap()],
        )
        .unwrap();

        // With two constituents, each contribution carries intercept / 2.
        let contribution = model.constituent_contribution(0, 100);
        let expected_share = model.intercept() / 2.0;
        let cos0 = model.cosine_coef(0);
        assert_relative_eq!(contribution[0], cos0 + expected_share, epsilon = 1e-10);
    }

    #[test]
    fn summing_every_contribution_recovers_full_prediction() {
        // Each contribution carries its own column pair plus intercept / K,
        // so the sum over all K constituents equals the full prediction.
        // Any single contribution, by contrast, is a display convention and
        // not that constituent's exact share of the signal.
        let f = by_name("M2").unwrap().frequency();
        let values: Vec<f64> = (0..600)
            .map(|t| 5.0 + 2.0 * (2.0 * PI * f * t as f64).sin())
            .collect();
        let model = fit(
            &values,
            &[by_name("M2").unwrap(), by_name("S2").unwrap()],
        )
        .unwrap();

        let full = model.predict(50);
        let summed: Vec<f64> = (0..50)
            .map(|t| {
                model.constituent_contribution(0, 50)[t]
                    + model.constituent_contribution(1, 50)[t]
            })
            .collect();
        // Both count the intercept exactly once, so here they do agree.
        for (a, b) in full.iter().zip(summed.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-8);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn contribution_index_out_of_range_panics() {
        let f = by_name("M2").unwrap().frequency();
        let values: Vec<f64> = (0..100)
            .map(|t| (2.0 * PI * f * t as f64).sin())
            .collect();
        let model = fit(&values, &[by_name("M2").unwrap()]).unwrap();
        model.constituent_contribution(1, 10);
    }
}
