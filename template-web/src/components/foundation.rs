pub use web_sys::MouseEvent;
pub use yew::function_component;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

use yew::virtual_dom::{ApplyAttributeAs, VNode};

/// Attributes forwarded untouched onto a rendered container.
///
/// Order is preserved; inserting a name that is already present replaces its
/// value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtraAttrs(Vec<(AttrValue, AttrValue)>);

impl ExtraAttrs {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<AttrValue>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing.as_str() == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttrValue, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ExtraAttrs
where
    K: Into<AttrValue>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

/// Base tokens first, caller classes after.
#[must_use]
pub fn class_list<'a>(base: impl IntoIterator<Item = &'a str>, extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(item.to_string());
    }
    classes.push(extra.clone());
    classes
}

/// Apply `extra` on top of the attributes an element already carries.
///
/// Only element nodes have attributes; anything else is returned as is.
#[must_use]
pub fn merge_attrs(node: Html, extra: &ExtraAttrs) -> Html {
    if extra.is_empty() {
        return node;
    }
    match node {
        VNode::VTag(mut tag) => {
            let attributes = tag.attributes.get_mut_index_map();
            for (name, value) in extra.iter() {
                attributes.insert(name.clone(), (value.clone(), ApplyAttributeAs::Attribute));
            }
            VNode::VTag(tag)
        }
        other => other,
    }
}
