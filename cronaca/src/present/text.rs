/// Marker appended to labels that had to be cut.
pub const PLACEHOLDER: &str = "...";

const BAR: char = '#';

/// Collapse whitespace and fit `text` into `width` characters.
///
/// Text that already fits is returned with its whitespace collapsed. Longer
/// text is cut at the last word boundary that leaves room for `...`. When not
/// even the first word fits, the label is the placeholder alone. The result
/// never exceeds `width` characters as long as `width` can hold the placeholder.
#[must_use]
pub fn shorten(text: &str, width: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed = words.join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(PLACEHOLDER.len());
    let mut out = String::new();
    let mut used = 0_usize;
    for w in &words {
        let n = w.chars().count();
        let need = if out.is_empty() { n } else { n + 1 };
        if used + need > budget {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(w);
        used += need;
    }
    out.push_str(PLACEHOLDER);
    out
}

/// Two-sided bar for a score in `[-1, 1]` around a `|` axis.
///
/// Negative scores grow left of the axis, zero and positive scores right of
/// it. The output is always `2 * half + 1` characters wide.
#[must_use]
pub fn signed_bar(score: f64, half: usize) -> String {
    let n = cells(score.abs().min(1.0), half);
    if score < 0.0 {
        format!("{:>half$}|{}", BAR.to_string().repeat(n), " ".repeat(half))
    } else {
        format!("{}|{:<half$}", " ".repeat(half), BAR.to_string().repeat(n))
    }
}

/// Bar for `value` scaled between `min` and `max`, at least one cell long.
///
/// A flat range draws every value at half width.
#[must_use]
pub fn level_bar(value: f64, min: f64, max: f64, width: usize) -> String {
    let span = max - min;
    let frac = if span > 0.0 && span.is_finite() {
        ((value - min) / span).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let n = cells(frac, width.saturating_sub(1)) + 1;
    BAR.to_string().repeat(n.min(width.max(1)))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn cells(frac: f64, width: usize) -> usize {
    if !frac.is_finite() {
        return 0;
    }
    ((frac * width as f64).round() as usize).min(width)
}
