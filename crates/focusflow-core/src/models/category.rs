//! Category model definition.

use serde::{Deserialize, Serialize};

/// Identifier of a category within a registry.
pub type CategoryId = u64;

/// Color given to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3b82f6";

/// A named, colored grouping of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier for the category
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Display color, e.g. `#3b82f6`
    pub color: String,

    /// Position of the category. New categories always start at 0; only an
    /// explicit reorder assigns other values.
    pub order: u32,
}
