//! Inline style rebuild for `scale`

/// Build the style attribute for a scaled element: a leading
/// `transform:scale(<factor>);` followed by every existing declaration
/// except `transform`, each written as `name:value;`.
pub fn scaled_style(factor: f64, existing: &[(String, String)]) -> String {
    let mut style = format!("transform:scale({});", format_factor(factor));
    for (name, value) in existing {
        if name.eq_ignore_ascii_case("transform") {
            continue;
        }
        style.push_str(name);
        style.push(':');
        style.push_str(value);
        style.push(';');
    }
    style
}

/// Shortest decimal that round-trips, spelled the way script number
/// formatting does (`2` not `2.0`, `Infinity` not `inf`, `1e-7` and `1e+21`
/// outside `[1e-6, 1e21)`).
pub fn format_factor(factor: f64) -> String {
    if factor.is_nan() {
        "NaN".to_string()
    } else if factor.is_infinite() {
        let sign = if factor < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else if factor == 0.0 {
        // Also folds -0
        "0".to_string()
    } else if factor.abs() < 1e-6 || factor.abs() >= 1e21 {
        let formatted = format!("{factor:e}");
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        }
    } else {
        factor.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prepends_transform() {
        let style = scaled_style(1.25, &decls(&[("color", "red")]));
        assert_eq!(style, "transform:scale(1.25);color:red;");
    }

    #[test]
    fn test_replaces_existing_transform() {
        let existing = decls(&[("transform", "rotate(45deg)"), ("width", "10px")]);
        let style = scaled_style(2.0, &existing);
        assert_eq!(style, "transform:scale(2);width:10px;");
        assert_eq!(style.matches("transform").count(), 1);
    }

    #[test]
    fn test_empty_style() {
        assert_eq!(scaled_style(0.5, &[]), "transform:scale(0.5);");
    }

    #[test]
    fn test_format_factor() {
        assert_eq!(format_factor(1.0), "1");
        assert_eq!(format_factor(-0.0), "0");
        assert_eq!(format_factor(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_factor(f64::INFINITY), "Infinity");
        assert_eq!(format_factor(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_factor(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_factor_exponent_range() {
        assert_eq!(format_factor(1e-7), "1e-7");
        assert_eq!(format_factor(-2.5e-8), "-2.5e-8");
        assert_eq!(format_factor(0.000001), "0.000001");
        assert_eq!(format_factor(1e20), "100000000000000000000");
        assert_eq!(format_factor(1e21), "1e+21");
        assert_eq!(format_factor(1.5e300), "1.5e+300");
    }
}
