use std::collections::HashMap;

use crate::models::Card;

/// Text input element exposing its current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// Element that holds the cards rendered by the latest cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    children: Vec<Card>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[Card] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn append_child(&mut self, card: Card) {
        self.children.push(card);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Input(TextInput),
    Container(Container),
}

/// In-memory page holding the elements a recommendation cycle works on
///
/// Elements are addressed by stable ids. The page is handed to the requester
/// explicitly behind a `tokio::sync::RwLock`; there is no process-wide document.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a text input with an initial value
    pub fn with_input(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        let mut input = TextInput::default();
        input.set_value(value);
        self.elements.insert(id.into(), Element::Input(input));
        self
    }

    /// Adds (or replaces) an empty container
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.elements
            .insert(id.clone(), Element::Container(Container::new(id)));
        self
    }

    /// Current value of the input with this id
    ///
    /// `None` when no element has the id or the element is not an input.
    pub fn input_value(&self, id: &str) -> Option<&str> {
        match self.elements.get(id) {
            Some(Element::Input(input)) => Some(input.value()),
            _ => None,
        }
    }

    pub fn input_mut(&mut self, id: &str) -> Option<&mut TextInput> {
        match self.elements.get_mut(id) {
            Some(Element::Input(input)) => Some(input),
            _ => None,
        }
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        match self.elements.get(id) {
            Some(Element::Container(container)) => Some(container),
            _ => None,
        }
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        match self.elements.get_mut(id) {
            Some(Element::Container(container)) => Some(container),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> Card {
        Card {
            image_src: format!("{}.jpg", title),
            image_alt: title.to_string(),
            heading: title.to_string(),
        }
    }

    #[test]
    fn test_input_lookup_and_update() {
        let mut page = Page::new().with_input("movieInput", "Heat");
        assert_eq!(page.input_value("movieInput"), Some("Heat"));

        page.input_mut("movieInput").unwrap().set_value("Ronin");
        assert_eq!(page.input_value("movieInput"), Some("Ronin"));
    }

    #[test]
    fn test_lookup_checks_element_kind() {
        let page = Page::new()
            .with_input("movieInput", "Heat")
            .with_container("recommendations");

        assert!(page.input_value("recommendations").is_none());
        assert!(page.container("movieInput").is_none());
        assert!(page.input_value("missing").is_none());
        assert!(page.container("missing").is_none());
    }

    #[test]
    fn test_container_clear_and_append() {
        let mut page = Page::new().with_container("recommendations");
        let container = page.container_mut("recommendations").unwrap();

        container.append_child(card("Heat"));
        container.append_child(card("Ronin"));
        assert_eq!(container.len(), 2);
        assert_eq!(container.children()[1].heading, "Ronin");

        container.clear_children();
        assert!(container.is_empty());
        assert_eq!(container.id(), "recommendations");
    }
}
