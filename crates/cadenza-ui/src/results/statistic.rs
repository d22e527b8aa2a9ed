use crate::widget::{Element, Widget};

/// A named, lazily-constructed statistics display unit.
///
/// The factory runs only when the panel actually attaches the item, on the
/// UI thread; the flag says whether the item is meaningless without hit
/// events (timing distribution graphs and the like).
pub struct StatisticItem {
    pub name: String,
    pub requires_hit_events: bool,
    factory: Box<dyn FnOnce() -> Element + Send>,
}

impl StatisticItem {
    pub fn new(
        name: impl Into<String>,
        requires_hit_events: bool,
        factory: impl FnOnce() -> Element + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            requires_hit_events,
            factory: Box::new(factory),
        }
    }

    /// Runs the deferred factory, consuming the item.
    pub fn build(self) -> Element {
        (self.factory)()
    }
}

impl std::fmt::Debug for StatisticItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticItem")
            .field("name", &self.name)
            .field("requires_hit_events", &self.requires_hit_events)
            .finish_non_exhaustive()
    }
}

/// Stock label/value leaf for simple numeric statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDisplay {
    pub label: String,
    pub value: String,
}

impl ValueDisplay {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Widget for ValueDisplay {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_is_deferred_until_build() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let item = StatisticItem::new("accuracy", false, move || {
            flag.store(true, Ordering::Release);
            Element::new(ValueDisplay::new("accuracy", "98.21%"))
        });

        assert!(!ran.load(Ordering::Acquire));
        let _element = item.build();
        assert!(ran.load(Ordering::Acquire));
    }
}
