use crate::types::{AlignedPoint, CorrelationResult, NotComputable};

/// Pearson correlation of two equally long series.
///
/// Fewer than two pairs yields `InsufficientData`; a constant (or non-finite)
/// series yields `ZeroVariance`. A computed value is clamped to `[-1, 1]`.
/// Symmetric in its arguments. Only the common prefix is used if the lengths
/// differ.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> CorrelationResult {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return CorrelationResult::NotComputable(NotComputable::InsufficientData { points: n });
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    if is_constant(xs) || is_constant(ys) {
        return CorrelationResult::NotComputable(NotComputable::ZeroVariance);
    }

    let nf = n as f64;
    let mean_x = xs.iter().sum::<f64>() / nf;
    let mean_y = ys.iter().sum::<f64>() / nf;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if sxx == 0.0 || syy == 0.0 || !denom.is_finite() {
        return CorrelationResult::NotComputable(NotComputable::ZeroVariance);
    }
    let r = sxy / denom;
    if !r.is_finite() {
        return CorrelationResult::NotComputable(NotComputable::ZeroVariance);
    }
    CorrelationResult::Value(r.clamp(-1.0, 1.0))
}

/// Correlate the sentiment and close columns of an aligned series.
#[must_use]
pub fn correlate(points: &[AlignedPoint]) -> CorrelationResult {
    let (sentiment, close): (Vec<f64>, Vec<f64>) =
        points.iter().map(|p| (p.sentiment, p.close)).unzip();
    pearson(&sentiment, &close)
}

fn is_constant(xs: &[f64]) -> bool {
    xs.windows(2).all(|w| w[0] == w[1])
}
