//! Significance testing for comparing two retrieval runs.
//!
//! The paired t-test takes per-query scores (for example reciprocal ranks)
//! of two systems over the same queries and reports the p-value of the
//! difference in means.

use std::f64::consts::PI;

/// Number of tails of a significance test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tails {
    /// One-tailed: the first sample is hypothesised to be larger.
    One,
    /// Two-tailed: the samples are hypothesised to differ.
    Two,
}

/// Degrees of freedom at which [`t_cdf`] switches to the asymptotic series.
const ASYMPTOTIC_CUTOFF: u32 = 1000;

/// Cumulative distribution function of the standard normal distribution.
///
/// Abramowitz and Stegun 26.2.17; absolute error below `7.5e-8`.
pub fn normal_cdf(x: f64) -> f64 {
    const B1: f64 = 0.319_381_530;
    const B2: f64 = -0.356_563_782;
    const B3: f64 = 1.781_477_937;
    const B4: f64 = -1.821_255_978;
    const B5: f64 = 1.330_274_429;
    const P: f64 = 0.231_641_9;
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_43;

    let z = x.abs();
    let t = 1.0 / (1.0 + P * z);
    let poly = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    let upper = INV_SQRT_2PI * (-0.5 * z * z).exp() * poly;

    if x < 0.0 {
        upper
    } else {
        1.0 - upper
    }
}

/// Cumulative distribution function of Student's t with `nu` degrees of
/// freedom.
///
/// Exact finite sum below 1000 degrees of freedom (AMS 55, 26.7.3 and
/// 26.7.4), otherwise a truncated asymptotic expansion around the normal.
pub fn t_cdf(x: f64, nu: u32) -> f64 {
    let dnu = f64::from(nu);

    // Far tails: more than 3000 (nu < 10) or 150 (nu >= 10) standard
    // deviations from the mean.
    if nu > 2 {
        let z = x / (dnu / (dnu - 2.0)).sqrt();
        let limit = if nu < 10 { 3000.0 } else { 150.0 };
        if z < -limit {
            return 0.0;
        }
        if z > limit {
            return 1.0;
        }
    }

    if nu < ASYMPTOTIC_CUTOFF {
        let csq = dnu / (x * x + dnu);
        let c = csq.sqrt();
        let s = x / (x * x + dnu).sqrt();
        let odd = nu % 2 == 1;

        let (mut sum, mut term, first) = if odd {
            (if nu == 1 { 0.0 } else { c }, c, 3)
        } else {
            (1.0, 1.0, 2)
        };

        let mut i = first;
        while i + 2 <= nu {
            let ai = f64::from(i);
            term *= ((ai - 1.0) / ai) * csq;
            sum += term;
            i += 2;
        }

        sum *= s;
        if odd {
            sum = (2.0 / PI) * ((x / dnu.sqrt()).atan() + sum);
        }
        return 0.5 + sum / 2.0;
    }

    const B11: f64 = 0.25;
    const B21: f64 = 0.010_416_666_666_67;
    const B31: f64 = 0.002_604_166_666_67;
    const DCONST: f64 = 0.398_942_280_4;

    let d1 = x;
    let d3 = x.powi(3);
    let d5 = x.powi(5);
    let d7 = x.powi(7);
    let d9 = x.powi(9);
    let d11 = x.powi(11);

    let term1 = B11 * (d3 + d1) / dnu;
    let term2 = B21 * (3.0 * d7 - 7.0 * d5 - 5.0 * d3 - 3.0 * d1) / dnu.powi(2);
    let term3 = B31 * (d11 - 11.0 * d9 + 14.0 * d7 + 6.0 * d5 - 3.0 * d3 - 15.0 * d1)
        / dnu.powi(3);

    normal_cdf(x) - DCONST * (-x * x / 2.0).exp() * (term1 + term2 + term3)
}

/// p-value of the paired t-test of `one` against `two`.
///
/// Returns 1.0 (no evidence of a difference) when the samples differ in
/// length or hold fewer than two pairs.
pub fn ttest_paired(one: &[f64], two: &[f64], tails: Tails) -> f64 {
    let samples = one.len();
    if samples != two.len() || samples <= 1 {
        return 1.0;
    }

    let differences: Vec<f64> = one.iter().zip(two).map(|(a, b)| a - b).collect();
    let n = samples as f64;
    let mean = differences.iter().sum::<f64>() / n;

    let degrees_of_freedom = samples - 1;
    let variance = differences
        .iter()
        .map(|d| (d - mean) * (d - mean))
        .sum::<f64>()
        / degrees_of_freedom as f64;
    let standard_error = variance.abs().sqrt() / n.sqrt();

    let t = mean / standard_error;
    let nu = u32::try_from(degrees_of_freedom).unwrap_or(u32::MAX);
    let p = 1.0 - t_cdf(t, nu);

    match tails {
        Tails::One => p,
        Tails::Two => p * 2.0,
    }
}
