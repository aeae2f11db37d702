//! Façade tests against a scripted host
//!
//! The host records every call so the tests can check what the façade asks
//! of a document, independent of the in-memory implementation.

use cloth::{
    AppendOutcome, Cloth, Content, DocumentHost, FallbackRoot, FocusAction, HostError, HostResult,
    Lookup, Placement,
};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct FakeElement {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<usize>,
    value: Option<String>,
}

#[derive(Debug, Default)]
struct ScriptedHost {
    elements: Vec<FakeElement>,
    body: Option<usize>,
    /// Parents that refuse new children
    locked: Vec<usize>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedHost {
    fn loaded() -> Self {
        let mut host = Self::default();
        host.elements.push(FakeElement {
            tag: "body".into(),
            ..Default::default()
        });
        host.body = Some(0);
        host
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn attr(&self, element: usize, name: &str) -> Option<&str> {
        self.elements[element]
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl DocumentHost for ScriptedHost {
    type Handle = usize;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.record(format!("lookup {id}"));
        (0..self.elements.len()).find(|&e| self.attr(e, "id") == Some(id))
    }

    fn create_element(&mut self, element_type: &str) -> usize {
        self.record(format!("create {element_type}"));
        self.elements.push(FakeElement {
            tag: element_type.into(),
            ..Default::default()
        });
        self.elements.len() - 1
    }

    fn set_attribute(&mut self, element: usize, name: &str, value: &str) -> HostResult<()> {
        self.record(format!("set {name}"));
        if name.starts_with("on") {
            return Err(HostError::Other(format!("event handler {name} refused")));
        }
        let attrs = &mut self.elements[element].attrs;
        match attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.into(),
            None => attrs.push((name.into(), value.into())),
        }
        Ok(())
    }

    fn root_container(&self, _root: FallbackRoot) -> Option<usize> {
        self.body
    }

    fn append_child(&mut self, parent: usize, child: usize) -> HostResult<()> {
        if self.locked.contains(&parent) {
            return Err(HostError::Other("locked".into()));
        }
        self.elements[parent].children.push(child);
        Ok(())
    }

    fn prepend_child(&mut self, parent: usize, child: usize) -> HostResult<()> {
        if self.locked.contains(&parent) {
            return Err(HostError::Other("locked".into()));
        }
        self.elements[parent].children.insert(0, child);
        Ok(())
    }

    fn remove(&mut self, element: usize) -> HostResult<()> {
        for e in &mut self.elements {
            e.children.retain(|&c| c != element);
        }
        self.elements[element].attrs.clear();
        Ok(())
    }

    fn value(&self, element: usize) -> Option<String> {
        self.elements[element].value.clone()
    }

    fn set_value(&mut self, element: usize, value: &str) -> HostResult<()> {
        self.elements[element].value = Some(value.into());
        Ok(())
    }

    fn inner_html(&self, element: usize) -> String {
        format!("<{} children={}>", self.elements[element].tag, self.elements[element].children.len())
    }

    fn set_inner_html(&mut self, _element: usize, _markup: &str) -> HostResult<()> {
        Err(HostError::Other("markup not supported".into()))
    }

    fn focus(&mut self, element: usize) -> HostResult<bool> {
        self.record(format!("focus {element}"));
        Ok(true)
    }

    fn blur(&mut self, element: usize) -> bool {
        self.record(format!("blur {element}"));
        true
    }

    fn inline_style(&self, element: usize) -> HostResult<Vec<(String, String)>> {
        Ok(self
            .attr(element, "style")
            .map(|s| {
                s.split(';')
                    .filter_map(|d| d.split_once(':'))
                    .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[test]
fn test_every_call_looks_up_again() {
    let mut cloth = Cloth::new(ScriptedHost::loaded());
    cloth.append("body", "input", [("id", "i")], Placement::Append);

    cloth.adjust("i", "a", Content::Value);
    cloth.adjust("i", "b", Content::Value);
    cloth.retrieve("i", Content::Value);

    assert_eq!(cloth.host().count("lookup i"), 3);
}

#[test]
fn test_refused_attributes_are_skipped() {
    let mut cloth = Cloth::new(ScriptedHost::loaded());
    let outcome = cloth.append(
        "body",
        "button",
        [("id", "b"), ("onclick", "evil()"), ("class", "primary")],
        Placement::Append,
    );

    let host = cloth.host();
    assert_eq!(host.count("set "), 3);
    assert_eq!(host.attr(outcome.handle(), "class"), Some("primary"));
    assert_eq!(host.attr(outcome.handle(), "onclick"), None);
}

#[test]
fn test_locked_parent_rejects() {
    let mut host = ScriptedHost::loaded();
    host.elements.push(FakeElement {
        tag: "div".into(),
        attrs: vec![("id".into(), "locked".into())],
        ..Default::default()
    });
    host.locked.push(1);

    let mut cloth = Cloth::new(host);
    let outcome = cloth.append("locked", "span", [("id", "s")], Placement::Prepend);

    assert!(matches!(outcome, AppendOutcome::Rejected(_)));
    assert!(!outcome.is_attached());
    assert!(cloth.host().elements[1].children.is_empty());
}

#[test]
fn test_unloaded_host_reports_unavailable_root() {
    let mut cloth = Cloth::new(ScriptedHost::default());
    let outcome = cloth.append("anything", "div", [("id", "d")], Placement::Append);

    assert!(matches!(outcome, AppendOutcome::FallbackRootUnavailable(0)));
    // The element was still created and configured
    assert_eq!(cloth.host().count("create div"), 1);
    assert_eq!(cloth.host().attr(0, "id"), Some("d"));
}

#[test]
fn test_scale_writes_style_once() {
    let mut cloth = Cloth::new(ScriptedHost::loaded());
    cloth.append("body", "div", [("id", "x"), ("style", "color:red;transform:none")], Placement::Append);
    let before = cloth.host().count("set style");

    cloth.scale("x", 1.25);

    let host = cloth.host();
    assert_eq!(host.count("set style"), before + 1);
    let x = host.elements.len() - 1;
    assert_eq!(host.attr(x, "style"), Some("transform:scale(1.25);color:red;"));
}

#[test]
fn test_markup_write_failure_still_found() {
    let mut cloth = Cloth::new(ScriptedHost::loaded());
    cloth.append("body", "div", [("id", "d")], Placement::Append);

    assert_eq!(cloth.adjust("d", "<b></b>", Content::Markup), Lookup::Found);
    assert_eq!(cloth.retrieve("d", Content::Markup).as_deref(), Some("<div children=0>"));
}

#[test]
fn test_focus_routes_to_host() {
    let mut cloth = Cloth::new(ScriptedHost::loaded());
    let outcome = cloth.append("body", "input", [("id", "f")], Placement::Append);

    cloth.focus("f", FocusAction::Focus);
    cloth.focus("f", FocusAction::Blur);

    let host = cloth.host();
    assert_eq!(host.count(&format!("focus {}", outcome.handle())), 1);
    assert_eq!(host.count(&format!("blur {}", outcome.handle())), 1);
}

#[test]
fn test_remove_routes_to_host() {
    let mut cloth = Cloth::new(ScriptedHost::loaded());
    cloth.append("body", "p", [("id", "p")], Placement::Append);

    assert_eq!(cloth.remove("p"), Lookup::Found);
    assert_eq!(cloth.remove("p"), Lookup::NotFound);
    assert!(cloth.host().elements[0].children.is_empty());
}
