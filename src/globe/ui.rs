use std::collections::BTreeMap;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum UiPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Placed by the component itself rather than in a corner.
    Manual,
}

/// Named widgets laid out in the corners of the globe view.
#[derive(Debug, Default)]
pub struct ViewUi {
    components: BTreeMap<UiPosition, Vec<String>>,
}

impl ViewUi {
    /// The widgets a fresh globe view starts with.
    pub fn with_defaults() -> Self {
        let mut ui = ViewUi::default();
        ui.add("zoom", UiPosition::TopLeft);
        ui.add("navigation-toggle", UiPosition::TopLeft);
        ui.add("compass", UiPosition::TopLeft);
        ui.add("attribution", UiPosition::Manual);
        ui
    }

    pub fn add(&mut self, component: &str, position: UiPosition) {
        self.remove(component);
        self.components.entry(position).or_default().push(component.to_string());
    }

    /// Removes a component wherever it is, returns `false` if it was not there.
    pub fn remove(&mut self, component: &str) -> bool {
        let mut removed = false;
        for components in self.components.values_mut() {
            let before = components.len();
            components.retain(|c| c != component);
            removed |= components.len() != before;
        }

        if removed {
            debug!("🧩 Removed UI component '{}'", component);
        }
        removed
    }

    #[cfg(test)]
    pub fn components_at(&self, position: UiPosition) -> &[String] {
        self.components.get(&position).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn position_of(&self, component: &str) -> Option<UiPosition> {
        self.components
            .iter()
            .find(|(_, components)| components.iter().any(|c| c == component))
            .map(|(position, _)| *position)
    }
}
