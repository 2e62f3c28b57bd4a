use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Stationary,
    Kitchenware,
    Appliance,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 3] = [
        Category::Stationary,
        Category::Kitchenware,
        Category::Appliance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Stationary => "Stationary",
            Category::Kitchenware => "Kitchenware",
            Category::Appliance => "Appliance",
        }
    }

    /// Fixed icon shown in place of the label.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Stationary => "✒",
            Category::Kitchenware => "🍴",
            Category::Appliance => "🔌",
        }
    }

    /// Looks up a category by its exact label. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
