//! The fixed set of categories shared by the transaction form, the filters and the reports.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// What a transaction was for.
///
/// The set is closed: forms, filters, aggregation and CSV export all use this
/// type, so a category cannot exist in one place and not another.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Entertainment,
    Health,
    Shopping,
    Utilities,
    Salary,
    Freelance,
    Investment,
}

impl Category {
    /// Every category, in the order they are listed in select menus.
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Entertainment,
        Category::Health,
        Category::Shopping,
        Category::Utilities,
        Category::Salary,
        Category::Freelance,
        Category::Investment,
    ];

    /// The category name as it appears in forms, query strings and CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investment => "Investment",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, category::Category};

    #[test]
    fn parses_every_category_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert_eq!(
            "Pets".parse::<Category>(),
            Err(Error::InvalidCategory("Pets".to_owned()))
        );
    }

    #[test]
    fn category_names_are_case_sensitive() {
        assert!("food".parse::<Category>().is_err());
    }
}
