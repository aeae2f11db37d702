//! Form control values
//!
//! The scalar `value` of an element: what a script reads and writes through
//! `element.value`.

use crate::{DomError, DomResult, DomTree, NodeId};

/// Element kinds with a built-in value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControl {
    Input,
    TextArea,
    Select,
}

impl FormControl {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "input" => Some(Self::Input),
            "textarea" => Some(Self::TextArea),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

impl DomTree {
    /// Current value of an element.
    ///
    /// Form controls always have a value (possibly empty). Any other element
    /// only has one after `set_value` stored it there.
    pub fn value(&self, id: NodeId) -> Option<String> {
        let element = self.get(id)?.as_element()?;
        if let Some(value) = &element.value {
            return Some(value.clone());
        }
        match FormControl::from_tag(&element.tag)? {
            FormControl::Input => Some(element.get_attr("value").unwrap_or_default().to_string()),
            FormControl::TextArea => Some(self.text_content(id)),
            FormControl::Select => Some(self.default_select_value(id).unwrap_or_default()),
        }
    }

    /// Overwrite the value of an element.
    ///
    /// A `select` only accepts the value of one of its options; anything
    /// else leaves it with an empty value.
    pub fn set_value(&mut self, id: NodeId, value: &str) -> DomResult<()> {
        let is_select = self.tag_name(id).ok_or(DomError::NotAnElement)? == "select";
        let stored = if is_select && !self.options(id).any(|(_, v)| v == value) {
            String::new()
        } else {
            value.to_string()
        };
        let element = self
            .get_mut(id)
            .and_then(|n| n.as_element_mut())
            .ok_or(DomError::NotAnElement)?;
        element.value = Some(stored);
        Ok(())
    }

    /// `(option node, option value)` pairs of a select, in tree order
    fn options(&self, select: NodeId) -> impl Iterator<Item = (NodeId, String)> + '_ {
        self.descendants(select).filter_map(move |(id, node)| {
            let element = node.as_element()?;
            if !element.is("option") {
                return None;
            }
            let value = match element.get_attr("value") {
                Some(v) => v.to_string(),
                None => collapse_whitespace(&self.text_content(id)),
            };
            Some((id, value))
        })
    }

    fn default_select_value(&self, select: NodeId) -> Option<String> {
        let mut first = None;
        for (id, value) in self.options(select) {
            let selected = self
                .get(id)
                .and_then(|n| n.as_element())
                .is_some_and(|e| e.attrs.has_attribute("selected"));
            if selected {
                return Some(value);
            }
            first.get_or_insert(value);
        }
        first
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_with(tree: &mut DomTree, options: &[(Option<&str>, &str, bool)]) -> NodeId {
        let select = tree.create_element("select");
        for (value, label, selected) in options {
            let option = tree.create_element("option");
            let element = tree.get_mut(option).unwrap().as_element_mut().unwrap();
            if let Some(v) = value {
                element.set_attr("value", v).unwrap();
            }
            if *selected {
                element.set_attr("selected", "").unwrap();
            }
            let text = tree.create_text(label);
            tree.append_child(option, text).unwrap();
            tree.append_child(select, option).unwrap();
        }
        select
    }

    #[test]
    fn test_input_value_defaults_to_attribute() {
        let mut tree = DomTree::new();
        let input = tree.create_element("input");
        assert_eq!(tree.value(input).as_deref(), Some(""));

        tree.get_mut(input).unwrap().as_element_mut().unwrap().set_attr("value", "Login").unwrap();
        assert_eq!(tree.value(input).as_deref(), Some("Login"));

        tree.set_value(input, "typed").unwrap();
        assert_eq!(tree.value(input).as_deref(), Some("typed"));
    }

    #[test]
    fn test_textarea_value_defaults_to_text() {
        let mut tree = DomTree::new();
        let area = tree.create_element("textarea");
        let text = tree.create_text("draft");
        tree.append_child(area, text).unwrap();
        assert_eq!(tree.value(area).as_deref(), Some("draft"));
    }

    #[test]
    fn test_plain_element_has_no_value_until_written() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        assert_eq!(tree.value(div), None);
        tree.set_value(div, "42").unwrap();
        assert_eq!(tree.value(div).as_deref(), Some("42"));
    }

    #[test]
    fn test_select_value() {
        let mut tree = DomTree::new();
        let select = select_with(
            &mut tree,
            &[(Some("a"), "A", false), (None, "  Bee  ", true), (Some("c"), "C", false)],
        );
        assert_eq!(tree.value(select).as_deref(), Some("Bee"));

        tree.set_value(select, "c").unwrap();
        assert_eq!(tree.value(select).as_deref(), Some("c"));

        tree.set_value(select, "zzz").unwrap();
        assert_eq!(tree.value(select).as_deref(), Some(""));
    }

    #[test]
    fn test_value_on_text_node_rejected() {
        let mut tree = DomTree::new();
        let text = tree.create_text("t");
        assert_eq!(tree.value(text), None);
        assert_eq!(tree.set_value(text, "x"), Err(DomError::NotAnElement));
    }
}
