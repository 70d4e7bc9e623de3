//! Display formatting helpers shared by the result components.

/// Format a probability fraction as a whole percentage, e.g. "60%".
pub fn percent(probability: f64) -> String {
    format!("{:.0}%", probability * 100.0)
}

/// Format an optional acreage, using an em dash for absent values.
pub fn acres(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 100.0 => format!("{:.0}", v),
        Some(v) => format!("{:.1}", v),
        None => "\u{2014}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_whole() {
        assert_eq!(percent(0.6), "60%");
        assert_eq!(percent(0.254), "25%");
        assert_eq!(percent(1.0), "100%");
    }

    #[test]
    fn acres_precision_depends_on_magnitude() {
        assert_eq!(acres(Some(3807.0)), "3807");
        assert_eq!(acres(Some(12.34)), "12.3");
        assert_eq!(acres(None), "\u{2014}");
    }
}
