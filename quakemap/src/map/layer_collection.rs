use std::ops::Index;

use crate::layer::Layer;

/// Collection of layers with their visibility.
///
/// The set of layers is fixed when the collection is created. Layers can only be shown or
/// hidden, keeping their place in the collection.
#[derive(Debug, Clone)]
pub struct LayerCollection<L>(Vec<LayerEntry<L>>);

#[derive(Debug, Clone)]
struct LayerEntry<L> {
    layer: L,
    is_hidden: bool,
}

impl<L: Layer> LayerCollection<L> {
    /// Returns the number of layers in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection has no layers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the layer at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&L> {
        self.0.get(index).map(|entry| &entry.layer)
    }

    /// Index of the layer with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|entry| entry.layer.name() == name)
    }

    /// Returns the layer with the given name.
    pub fn by_name(&self, name: &str) -> Option<&L> {
        self.position(name).and_then(|index| self.get(index))
    }

    /// Iterates over all layers in order.
    pub fn iter(&self) -> impl Iterator<Item = &L> + '_ {
        self.0.iter().map(|entry| &entry.layer)
    }

    /// Iterates over the layers not marked as hidden.
    pub fn iter_visible(&self) -> impl Iterator<Item = &L> + '_ {
        self.0
            .iter()
            .filter(|entry| !entry.is_hidden)
            .map(|entry| &entry.layer)
    }

    /// Hides the layer at `index`. Does nothing if the index is out of bounds.
    pub fn hide(&mut self, index: usize) {
        if let Some(entry) = self.0.get_mut(index) {
            entry.is_hidden = true;
        }
    }

    /// Shows the layer at `index`. Does nothing if the index is out of bounds.
    pub fn show(&mut self, index: usize) {
        if let Some(entry) = self.0.get_mut(index) {
            entry.is_hidden = false;
        }
    }

    /// Hides all layers for which the predicate returns true.
    pub fn hide_by<F>(&mut self, mut f: F)
    where
        F: FnMut(&L) -> bool,
    {
        for entry in &mut self.0 {
            if f(&entry.layer) {
                entry.is_hidden = true;
            }
        }
    }

    /// Shows all layers for which the predicate returns true.
    pub fn show_by<F>(&mut self, mut f: F)
    where
        F: FnMut(&L) -> bool,
    {
        for entry in &mut self.0 {
            if f(&entry.layer) {
                entry.is_hidden = false;
            }
        }
    }

    /// Shows the layer at `index` and hides all others.
    pub fn show_only(&mut self, index: usize) {
        for (i, entry) in self.0.iter_mut().enumerate() {
            entry.is_hidden = i != index;
        }
    }

    /// Returns true if the layer at `index` exists and is not hidden.
    pub fn is_visible(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|entry| !entry.is_hidden)
    }
}

impl<L> Index<usize> for LayerCollection<L> {
    type Output = L;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index].layer
    }
}

impl<L> From<Vec<L>> for LayerCollection<L> {
    fn from(value: Vec<L>) -> Self {
        Self(
            value
                .into_iter()
                .map(|layer| LayerEntry {
                    layer,
                    is_hidden: false,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestLayer(&'static str);

    impl Layer for TestLayer {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn collection() -> LayerCollection<TestLayer> {
        LayerCollection::from(vec![
            TestLayer("Layer A"),
            TestLayer("Layer B"),
            TestLayer("Layer C"),
        ])
    }

    #[test]
    fn layers_are_visible_by_default() {
        let collection = collection();
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.iter_visible().count(), 3);
        assert_eq!(collection[1], TestLayer("Layer B"));
    }

    #[test]
    fn hide_and_show_keep_order() {
        let mut collection = collection();
        collection.hide(0);
        collection.hide_by(|layer| layer.0.ends_with('C'));

        let visible: Vec<_> = collection.iter_visible().collect();
        assert_eq!(visible, [&TestLayer("Layer B")]);
        assert_eq!(collection.iter().count(), 3);

        collection.show_by(|_| true);
        assert!(collection.is_visible(0));
        assert!(collection.is_visible(2));
    }

    #[test]
    fn show_only_hides_others() {
        let mut collection = collection();
        collection.show_only(2);
        assert!(!collection.is_visible(0));
        assert!(!collection.is_visible(1));
        assert!(collection.is_visible(2));
    }

    #[test]
    fn lookup_by_name() {
        let collection = collection();
        assert_eq!(collection.position("Layer C"), Some(2));
        assert_eq!(collection.by_name("Layer D"), None);
        assert!(!collection.is_visible(10));
    }
}
