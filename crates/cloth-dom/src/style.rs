//! Inline style declarations
//!
//! The `style` attribute parsed into an ordered list of property/value
//! pairs, the shape `element.style` exposes.

/// Parsed inline style of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssStyleDeclaration {
    declarations: Vec<(String, String)>,
}

impl CssStyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value.
    ///
    /// Property names are lowercased. Declarations with an empty name or value
    /// are dropped; a repeated property keeps its last value, positioned at
    /// its last occurrence.
    pub fn parse(style: &str) -> Self {
        let mut declarations: Vec<(String, String)> = Vec::new();
        for decl in split_declarations(style) {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            let name = name.to_ascii_lowercase();
            declarations.retain(|(n, _)| *n != name);
            declarations.push((name, value.to_string()));
        }
        Self { declarations }
    }

    /// Number of declared properties
    pub fn length(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Property name at `index`
    pub fn item(&self, index: usize) -> Option<&str> {
        self.declarations.get(index).map(|(n, _)| n.as_str())
    }

    /// Value of a property
    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set a property in place, or append it. An empty value removes it.
    pub fn set_property(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.remove_property(name);
            return;
        }
        match self
            .declarations
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value.to_string(),
            None => self
                .declarations
                .push((name.trim().to_ascii_lowercase(), value.to_string())),
        }
    }

    /// Remove a property, returning its old value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let index = self
            .declarations
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(self.declarations.remove(index).1)
    }

    /// Iterate over `(property, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialize as `name: value;` pairs separated by spaces
    pub fn css_text(&self) -> String {
        self.iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split on `;` outside of quotes and parentheses, so values such as
/// `url("a;b")` survive.
fn split_declarations(style: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in style.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' | '\'' => match quote {
                Some(q) if q == c => quote = None,
                None => quote = Some(c),
                _ => {}
            },
            '(' if quote.is_none() => depth += 1,
            ')' if quote.is_none() => depth = depth.saturating_sub(1),
            ';' if quote.is_none() && depth == 0 => {
                out.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&style[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let style = CssStyleDeclaration::parse("color: red; margin:10px;");
        assert_eq!(style.length(), 2);
        assert_eq!(style.item(0), Some("color"));
        assert_eq!(style.get_property_value("margin"), Some("10px"));
    }

    #[test]
    fn test_parse_skips_empty_and_malformed() {
        let style = CssStyleDeclaration::parse(";;color:;: red; width 10px; height: 2px");
        assert_eq!(style.iter().collect::<Vec<_>>(), vec![("height", "2px")]);
    }

    #[test]
    fn test_duplicate_keeps_last() {
        let style = CssStyleDeclaration::parse("color: red; width: 1px; COLOR: blue");
        assert_eq!(
            style.iter().collect::<Vec<_>>(),
            vec![("width", "1px"), ("color", "blue")]
        );
    }

    #[test]
    fn test_semicolon_inside_url() {
        let style = CssStyleDeclaration::parse("background: url(\"a;b.png\"); color: red");
        assert_eq!(style.length(), 2);
        assert_eq!(style.get_property_value("background"), Some("url(\"a;b.png\")"));
    }

    #[test]
    fn test_set_and_remove() {
        let mut style = CssStyleDeclaration::parse("color: red; width: 1px");
        style.set_property("color", "green");
        style.set_property("height", "3px");
        assert_eq!(style.css_text(), "color: green; width: 1px; height: 3px;");

        assert_eq!(style.remove_property("width").as_deref(), Some("1px"));
        style.set_property("height", "");
        assert_eq!(style.css_text(), "color: green;");
    }
}
