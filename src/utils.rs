//! Shared rounding, normalization and number-formatting helpers.
use log::warn;

#[inline]
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

/// Round to a number of decimal digits, or pass the value through
/// untouched when no precision is given.
///
/// Implemented for both scalars and score vectors, so cutoffs and
/// leaf values go through the same helper.
pub trait MaybeRound {
    fn maybe_round(self, precision: Option<i32>) -> Self;
}

impl MaybeRound for f64 {
    fn maybe_round(self, precision: Option<i32>) -> Self {
        match precision {
            Some(p) => precision_round(self, p),
            None => self,
        }
    }
}

impl MaybeRound for Vec<f64> {
    fn maybe_round(self, precision: Option<i32>) -> Self {
        match precision {
            Some(p) => self.into_iter().map(|v| precision_round(v, p)).collect(),
            None => self,
        }
    }
}

/// L1-normalize a score vector, so that its entries sum to one.
///
/// A vector summing to zero is returned unchanged, there is nothing
/// meaningful to scale it by.
pub fn normalize_l1(v: &[f64]) -> Vec<f64> {
    let sum: f64 = v.iter().sum();
    if sum == 0.0 {
        warn!("score vector sums to zero, skipping normalization");
        return v.to_vec();
    }
    v.iter().map(|x| x / sum).collect()
}

/// Format a float keeping the decimal point: `0.0` rather than `0`.
pub fn fmt_float(v: f64) -> String {
    format!("{:?}", v)
}

/// Format a score vector as `[a, b, c]`.
pub fn fmt_scores(v: &[f64]) -> String {
    let mut res = String::from("[");
    if let Some(last) = v.len().checked_sub(1) {
        for n in &v[..last] {
            res.push_str(fmt_float(*n).as_str());
            res.push_str(", ");
        }
        res.push_str(fmt_float(v[last]).as_str());
    }
    res.push(']');
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round() {
        assert_eq!(0.3, precision_round(0.3333, 1));
        assert_eq!(0.2343, precision_round(0.2343123123123, 4));
    }

    #[test]
    fn test_maybe_round_scalar() {
        assert_eq!(0.917, 0.9166666.maybe_round(Some(3)));
        assert_eq!(0.9166666, 0.9166666.maybe_round(None));
    }

    #[test]
    fn test_maybe_round_vector() {
        let v = vec![0.0, 0.9166666, 0.0833333];
        assert_eq!(vec![0.0, 0.917, 0.083], v.clone().maybe_round(Some(3)));
        assert_eq!(v, v.clone().maybe_round(None));
    }

    #[test]
    fn test_normalize_l1() {
        let normed = normalize_l1(&[0.0, 33.0, 3.0]);
        let total: f64 = normed.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(normed[0], 0.0);
        assert!((normed[1] - 33.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_l1_zero_sum() {
        assert_eq!(vec![0.0, 0.0, 0.0], normalize_l1(&[0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_fmt_float() {
        assert_eq!("0.0", fmt_float(0.0));
        assert_eq!("1.0", fmt_float(1.0));
        assert_eq!("4.95", fmt_float(4.95));
    }

    #[test]
    fn test_fmt_scores() {
        assert_eq!("[1.0, 0.0, 0.0]", fmt_scores(&[1.0, 0.0, 0.0]));
        assert_eq!("[0.5]", fmt_scores(&[0.5]));
        assert_eq!("[]", fmt_scores(&[]));
    }
}
