//! Element façade
//!
//! Each operation resolves its element by id on the bound host, performs a
//! single mutation or read, and returns. Nothing is remembered between
//! calls apart from the host binding and the configuration.

use crate::{
    ClothConfig, Content, DocumentHost, FocusAction, MissingElementLog, Placement, scaled_style,
};

/// What `append` did with the element it created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome<H> {
    /// Inserted under the element named by the parent id
    InsertedIntoParent(H),
    /// The parent id resolved to nothing; inserted into the fallback root
    InsertedIntoFallbackRoot(H),
    /// Neither the parent nor a fallback root exists yet (the document has
    /// not loaded). The element was created but left detached.
    FallbackRootUnavailable(H),
    /// The host refused to insert under the existing parent; the element
    /// was left detached
    Rejected(H),
}

impl<H: Copy> AppendOutcome<H> {
    /// The created element, attached or not
    pub fn handle(&self) -> H {
        match *self {
            Self::InsertedIntoParent(h)
            | Self::InsertedIntoFallbackRoot(h)
            | Self::FallbackRootUnavailable(h)
            | Self::Rejected(h) => h,
        }
    }

    /// Whether the element ended up in the document
    pub fn is_attached(&self) -> bool {
        matches!(
            self,
            Self::InsertedIntoParent(_) | Self::InsertedIntoFallbackRoot(_)
        )
    }
}

/// Whether the element id of a mutating call resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found,
    NotFound,
}

impl Lookup {
    pub fn is_found(self) -> bool {
        self == Self::Found
    }
}

/// Element façade bound to one document host
#[derive(Debug)]
pub struct Cloth<H: DocumentHost> {
    host: H,
    config: ClothConfig,
}

impl<H: DocumentHost> Cloth<H> {
    /// Bind a façade to `host` with the default configuration
    pub fn new(host: H) -> Self {
        Self::with_config(host, ClothConfig::default())
    }

    /// Bind a façade to `host`
    pub fn with_config(host: H, config: ClothConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    /// Release the host
    pub fn into_inner(self) -> H {
        self.host
    }

    /// Create an `element_type` element carrying `attrs` and insert it under
    /// the element with id `parent_id`.
    ///
    /// If `parent_id` resolves to nothing, the element goes into the
    /// configured fallback root instead. If that does not exist either, the
    /// element stays detached and a warning is logged. The new element's own
    /// id is not checked for uniqueness.
    pub fn append<I, K, V>(
        &mut self,
        parent_id: &str,
        element_type: &str,
        attrs: I,
        placement: Placement,
    ) -> AppendOutcome<H::Handle>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let parent = self.host.element_by_id(parent_id);
        let element = self.host.create_element(element_type);
        self.set_attributes(element, attrs);

        if let Some(parent) = parent {
            return match self.insert(parent, element, placement) {
                Ok(()) => {
                    tracing::debug!("append: <{}> {:?} into #{}", element_type, element, parent_id);
                    AppendOutcome::InsertedIntoParent(element)
                }
                Err(err) => {
                    tracing::warn!("append: #{} refused <{}>: {}", parent_id, element_type, err);
                    AppendOutcome::Rejected(element)
                }
            };
        }

        let fallback = self.config.fallback_root;
        let Some(root) = self.host.root_container(fallback) else {
            tracing::warn!(
                "append: no #{} and no {} to fall back to; check that the document loads before appending",
                parent_id,
                fallback
            );
            return AppendOutcome::FallbackRootUnavailable(element);
        };
        match self.insert(root, element, placement) {
            Ok(()) => {
                tracing::debug!("append: <{}> {:?} into {}", element_type, element, fallback);
                AppendOutcome::InsertedIntoFallbackRoot(element)
            }
            Err(err) => {
                tracing::warn!("append: {} unavailable: {}", fallback, err);
                AppendOutcome::FallbackRootUnavailable(element)
            }
        }
    }

    /// Detach the element with id `element_id` from its parent
    pub fn remove(&mut self, element_id: &str) -> Lookup {
        let Some(element) = self.resolve("remove", element_id) else {
            return Lookup::NotFound;
        };
        match self.host.remove(element) {
            Ok(()) => tracing::debug!("remove: #{}", element_id),
            Err(err) => tracing::warn!("remove: #{} could not be detached: {}", element_id, err),
        }
        Lookup::Found
    }

    /// Read the scalar value or the markup content of an element.
    ///
    /// `None` when the element does not exist or has no scalar value.
    pub fn retrieve(&self, element_id: &str, content: Content) -> Option<String> {
        let element = self.resolve("retrieve", element_id)?;
        match content {
            Content::Value => self.host.value(element),
            Content::Markup => Some(self.host.inner_html(element)),
        }
    }

    /// Overwrite the scalar value or the markup content of an element
    pub fn adjust(&mut self, element_id: &str, value: impl ToString, content: Content) -> Lookup {
        let Some(element) = self.resolve("adjust", element_id) else {
            return Lookup::NotFound;
        };
        let value = value.to_string();
        let written = match content {
            Content::Value => self.host.set_value(element, &value),
            Content::Markup => self.host.set_inner_html(element, &value),
        };
        match written {
            Ok(()) => tracing::debug!("adjust: #{} {:?} updated", element_id, content),
            Err(err) => tracing::warn!("adjust: #{} left unchanged: {}", element_id, err),
        }
        Lookup::Found
    }

    /// Give focus to an element, or take it away
    pub fn focus(&mut self, element_id: &str, action: FocusAction) -> Lookup {
        let Some(element) = self.resolve("focus", element_id) else {
            return Lookup::NotFound;
        };
        match action {
            FocusAction::Focus => match self.host.focus(element) {
                Ok(true) => tracing::debug!("focus: #{} focused", element_id),
                Ok(false) => tracing::debug!("focus: #{} is not focusable", element_id),
                Err(err) => tracing::warn!("focus: #{}: {}", element_id, err),
            },
            FocusAction::Blur => {
                let released = self.host.blur(element);
                tracing::debug!("focus: #{} blurred (held focus: {})", element_id, released);
            }
        }
        Lookup::Found
    }

    /// Scale an element with a CSS transform, keeping the rest of its
    /// inline style. Any previous `transform` declaration is replaced.
    pub fn scale(&mut self, element_id: &str, factor: f64) -> Lookup {
        let Some(element) = self.resolve("scale", element_id) else {
            return Lookup::NotFound;
        };
        let existing = match self.host.inline_style(element) {
            Ok(existing) => existing,
            Err(err) => {
                tracing::warn!("scale: cannot read style of #{}: {}", element_id, err);
                return Lookup::Found;
            }
        };
        let style = scaled_style(factor, &existing);
        tracing::debug!("scale: #{} style={:?}", element_id, style);
        self.set_attributes(element, [("style", style)]);
        Lookup::Found
    }

    /// Copy attribute pairs onto an element; names the host rejects are skipped
    fn set_attributes<I, K, V>(&mut self, element: H::Handle, attrs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in attrs {
            let name = name.as_ref();
            if let Err(err) = self.host.set_attribute(element, name, value.as_ref()) {
                tracing::debug!("Ignoring attribute {:?} on {:?}: {}", name, element, err);
            }
        }
    }

    fn insert(
        &mut self,
        parent: H::Handle,
        element: H::Handle,
        placement: Placement,
    ) -> crate::HostResult<()> {
        match placement {
            Placement::Append => self.host.append_child(parent, element),
            Placement::Prepend => self.host.prepend_child(parent, element),
        }
    }

    fn resolve(&self, operation: &str, element_id: &str) -> Option<H::Handle> {
        let element = self.host.element_by_id(element_id);
        if element.is_none() {
            match self.config.missing_element {
                MissingElementLog::Ignore => {}
                MissingElementLog::Debug => {
                    tracing::debug!("{}: no element #{}", operation, element_id)
                }
                MissingElementLog::Warn => {
                    tracing::warn!("{}: no element #{}", operation, element_id)
                }
            }
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    #[test]
    fn test_append_outcome_accessors() {
        let attached: AppendOutcome<u32> = AppendOutcome::InsertedIntoFallbackRoot(7);
        let detached: AppendOutcome<u32> = AppendOutcome::FallbackRootUnavailable(8);
        assert_eq!(attached.handle(), 7);
        assert!(attached.is_attached());
        assert_eq!(detached.handle(), 8);
        assert!(!detached.is_attached());
    }

    #[test]
    fn test_borrowed_host() {
        let mut doc = Document::new();
        {
            let mut cloth = Cloth::new(&mut doc);
            cloth.append("nowhere", "p", [("id", "p1")], Placement::Append);
        }
        assert!(doc.get_element_by_id("p1").is_some());
    }
}
