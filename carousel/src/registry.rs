use alloc::vec::Vec;

/// An item with the width it measured at when it was added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide<K> {
    pub item: K,
    /// Margin-inclusive width in whole pixels.
    pub width: i64,
}

/// Ordered slide items and their aggregate width.
///
/// Insertion order is display order. The registry never touches positioning state.
#[derive(Clone, Debug)]
pub struct ItemRegistry<K> {
    slides: Vec<Slide<K>>,
    total_width: i64,
}

impl<K> Default for ItemRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ItemRegistry<K> {
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            total_width: 0,
        }
    }

    /// Appends an item. Duplicates are not rejected.
    pub fn add(&mut self, item: K, width: i64) -> &K {
        let width = width.max(0);
        self.total_width = self.total_width.saturating_add(width);
        let index = self.slides.len();
        self.slides.push(Slide { item, width });
        &self.slides[index].item
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = (K, i64)>) {
        self.slides.extend(items.into_iter().map(|(item, width)| Slide {
            item,
            width: width.max(0),
        }));
        self.recompute_total();
    }

    pub fn total_width(&self) -> i64 {
        self.total_width
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide<K>] {
        &self.slides
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.slides.iter().map(|s| &s.item)
    }

    fn recompute_total(&mut self) {
        self.total_width = self
            .slides
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.width));
    }
}

impl<K: PartialEq> ItemRegistry<K> {
    pub fn position(&self, item: &K) -> Option<usize> {
        self.slides.iter().position(|s| &s.item == item)
    }

    /// Removes the first occurrence of `item`.
    ///
    /// Returns the removed slide, or `None` (and leaves the registry untouched) when absent.
    pub fn remove(&mut self, item: &K) -> Option<Slide<K>> {
        let index = self.position(item)?;
        let slide = self.slides.remove(index);
        self.total_width = self.total_width.saturating_sub(slide.width).max(0);
        Some(slide)
    }
}
