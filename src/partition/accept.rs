use serde::{Deserialize, Serialize};

/// Probability that a region stops growing this round, given its unit count and weight.
///
/// Values outside `[0, 1]` are allowed: anything `<= 0` never stops, anything `>= 1` always stops.
pub trait Acceptance {
    fn stop_probability(&self, size: usize, weight: f64) -> f64;
}

impl<F> Acceptance for F where F: Fn(usize, f64) -> f64 {
    #[inline]
    fn stop_probability(&self, size: usize, weight: f64) -> f64 { self(size, weight) }
}

/// A power scale with a piecewise-linear (polylinear) domain and range.
///
/// The input and every domain stop are raised to `exponent` (keeping sign) before
/// interpolating, so with `exponent = 2` the output grows quadratically between stops.
/// Without `clamp`, inputs beyond the domain extrapolate along the outer segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowScale {
    pub exponent: f64,
    pub domain: Vec<f64>,
    pub range: Vec<f64>,
    #[serde(default)]
    pub clamp: bool,
}

impl PowScale {
    pub fn new(exponent: f64, domain: Vec<f64>, range: Vec<f64>) -> Self {
        assert!(domain.len() >= 2, "domain must have at least two stops");
        assert!(domain.len() == range.len(), "domain and range must have the same length");
        Self { exponent, domain, range, clamp: false }
    }

    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    #[inline]
    fn transform(&self, x: f64) -> f64 { x.signum() * x.abs().powf(self.exponent) }

    /// Map an input value through the scale.
    pub fn apply(&self, x: f64) -> f64 {
        let n = self.domain.len().min(self.range.len());
        if n < 2 { return self.range.first().copied().unwrap_or(0.0) }

        let (lo, hi) = (self.domain[0], self.domain[n - 1]);
        let x = if self.clamp { x.clamp(lo.min(hi), lo.max(hi)) } else { x };
        let tx = self.transform(x);

        // Segment whose right stop is the first one above x, limited to the outer segments.
        let i = self.domain[1..n - 1].iter()
            .take_while(|&&d| self.transform(d) <= tx)
            .count();

        let (d0, d1) = (self.transform(self.domain[i]), self.transform(self.domain[i + 1]));
        let (r0, r1) = (self.range[i], self.range[i + 1]);
        let t = if d1 == d0 { 0.0 } else { (tx - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }
}

/// Stop probability averaged from a unit-count scale and a population scale.
///
/// Regions with more units or more people are progressively more likely to stop,
/// which keeps grown regions roughly balanced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaledAcceptance {
    pub count: PowScale,
    pub population: PowScale,
}

impl Default for ScaledAcceptance {
    fn default() -> Self {
        Self {
            count: PowScale::new(2.0, vec![3.0, 10.0, 300.0], vec![0.0, 0.001, 1.0]),
            population: PowScale::new(2.0, vec![1e5, 10e6], vec![0.0, 1.0]).clamped(),
        }
    }
}

impl Acceptance for ScaledAcceptance {
    fn stop_probability(&self, size: usize, weight: f64) -> f64 {
        (self.count.apply(size as f64) + self.population.apply(weight)) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[test]
    fn closures_are_acceptance_functions() {
        let never = |_: usize, _: f64| 0.0;
        assert_eq!(never.stop_probability(10, 1e6), 0.0);

        let by_size = |size: usize, _: f64| size as f64 / 10.0;
        assert_eq!(by_size.stop_probability(5, 0.0), 0.5);
    }

    #[test]
    fn pow_scale_interpolates_squared_values() {
        let scale = PowScale::new(2.0, vec![0.0, 10.0], vec![0.0, 1.0]);
        assert!(close(scale.apply(0.0), 0.0));
        assert!(close(scale.apply(5.0), 0.25));
        assert!(close(scale.apply(10.0), 1.0));
    }

    #[test]
    fn pow_scale_is_polylinear() {
        let scale = PowScale::new(2.0, vec![3.0, 10.0, 300.0], vec![0.0, 0.001, 1.0]);
        assert!(close(scale.apply(3.0), 0.0));
        assert!(close(scale.apply(10.0), 0.001));
        assert!(close(scale.apply(300.0), 1.0));

        // Second segment: (x² - 100) / (90000 - 100) of the way from 0.001 to 1.
        let expected = 0.001 + (150.0f64.powi(2) - 100.0) / (90_000.0 - 100.0) * 0.999;
        assert!(close(scale.apply(150.0), expected));
    }

    #[test]
    fn unclamped_scale_extrapolates() {
        let scale = PowScale::new(2.0, vec![3.0, 10.0, 300.0], vec![0.0, 0.001, 1.0]);
        assert!(scale.apply(1.0) < 0.0);
        assert!(scale.apply(400.0) > 1.0);
    }

    #[test]
    fn clamped_scale_stays_in_range() {
        let scale = PowScale::new(2.0, vec![1e5, 10e6], vec![0.0, 1.0]).clamped();
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(1e9), 1.0);
    }

    #[test]
    fn default_acceptance_grows_with_size_and_population() {
        let accept = ScaledAcceptance::default();
        let small = accept.stop_probability(5, 50_000.0);
        let large = accept.stop_probability(200, 8e6);
        assert!(small < 0.01);
        assert!(large > small);
        assert!(accept.stop_probability(300, 10e6) > 0.999);
    }

    #[test]
    fn scales_deserialize_from_json() {
        let json = r#"{"exponent": 2, "domain": [0, 10], "range": [0, 1]}"#;
        let scale: PowScale = serde_json::from_str(json).unwrap();
        assert_eq!(scale, PowScale::new(2.0, vec![0.0, 10.0], vec![0.0, 1.0]));
    }
}
