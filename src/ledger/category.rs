use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidInput;

/// Categorises expense entries for filtering and reporting.
///
/// The set is closed. `Others` doubles as the fallback bucket: an unknown
/// category string loaded from storage folds into it instead of rejecting
/// the whole payload.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    Others,
}

impl Category {
    /// Every recognized category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::Others,
    ];

    /// Canonical name, as written to the persistence slot.
    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Others => "Others",
        }
    }

    /// Icon shown next to the category by rendering layers.
    pub fn emoji(self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Travel => "✈️",
            Category::Shopping => "🛍️",
            Category::Bills => "💡",
            Category::Others => "📦",
        }
    }

    /// Stable style hook for rendering layers.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Food => "cat-food",
            Category::Travel => "cat-travel",
            Category::Shopping => "cat-shopping",
            Category::Bills => "cat-bills",
            Category::Others => "cat-others",
        }
    }
}

impl FromStr for Category {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| InvalidInput::UnknownCategory(raw.to_string()))
    }
}

// Wire tolerance: storage payloads written with an extended category set
// still load, folding unrecognized names into the fallback bucket.
impl From<String> for Category {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or(Category::Others)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Restricts which entries are visible to summary queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = InvalidInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        raw.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| InvalidInput::UnknownFilter(raw.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => f.write_str(category.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_presentation_entries() {
        for category in Category::ALL {
            assert!(!category.name().is_empty());
            assert!(!category.emoji().is_empty());
            assert!(category.css_class().starts_with("cat-"));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" BILLS ".parse::<Category>().unwrap(), Category::Bills);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "groceries".parse::<Category>().unwrap_err();
        assert_eq!(err, InvalidInput::UnknownCategory("groceries".into()));
    }

    #[test]
    fn unknown_wire_name_folds_into_fallback_bucket() {
        assert_eq!(Category::from("Crypto".to_string()), Category::Others);
    }

    #[test]
    fn filter_parses_all_and_categories() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Travel".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Travel)
        );
        assert!(matches!(
            "nope".parse::<CategoryFilter>(),
            Err(InvalidInput::UnknownFilter(_))
        ));
    }

    #[test]
    fn filter_matches_respects_selection() {
        assert!(CategoryFilter::All.matches(Category::Bills));
        assert!(CategoryFilter::Only(Category::Food).matches(Category::Food));
        assert!(!CategoryFilter::Only(Category::Food).matches(Category::Travel));
    }
}
