//! Task categories

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of task kinds the user can pick from.
///
/// A category exists solely so that the task list can display an icon next to each
/// task. Which icon asset (or glyph) a variant maps to is resolved entirely within
/// the presentation layer; this crate never touches image files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Shopping,
    Study,
    Exercise,
}

impl Category {
    /// Every category, in the order a picker widget should offer them
    pub const ALL: [Category; 3] = [Category::Shopping, Category::Study, Category::Exercise];
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Shopping => "Shopping",
            Category::Study => "Study",
            Category::Exercise => "Exercise",
        };
        write!(f, "{}", name)
    }
}

/// The error returned when a string does not name any of the fixed categories
#[derive(Debug, Clone, PartialEq, Error)]
#[error("'{0}' does not name a task category")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parses the exact strings a single-choice widget displays (see [`Display`](Category#impl-Display-for-Category))
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Shopping" => Ok(Category::Shopping),
            "Study" => Ok(Category::Study),
            "Exercise" => Ok(Category::Exercise),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
