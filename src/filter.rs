// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{EntryType, Typed};
use std::str::FromStr;

/// Type selector used by the history and category views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, t: EntryType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => t == EntryType::Income,
            TypeFilter::Expense => t == EntryType::Expense,
        }
    }
}

impl From<EntryType> for TypeFilter {
    fn from(t: EntryType) -> Self {
        match t {
            EntryType::Income => TypeFilter::Income,
            EntryType::Expense => TypeFilter::Expense,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        s.parse::<EntryType>()
            .map(TypeFilter::from)
            .map_err(|_| anyhow::anyhow!("Invalid filter '{}', expected all|income|expense", s))
    }
}

/// Keeps the items matching `filter`, in their original order.
pub fn filter_by_type<T: Typed + Clone>(items: &[T], filter: TypeFilter) -> Vec<T> {
    items
        .iter()
        .filter(|i| filter.matches(i.entry_type()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn cat(id: &str, t: EntryType) -> Category {
        Category {
            id: id.into(),
            name: format!("cat-{}", id),
            r#type: t,
        }
    }

    fn sample() -> Vec<Category> {
        vec![
            cat("1", EntryType::Expense),
            cat("2", EntryType::Income),
            cat("3", EntryType::Expense),
            cat("4", EntryType::Income),
            cat("5", EntryType::Expense),
        ]
    }

    #[test]
    fn all_is_identity() {
        let items = sample();
        assert_eq!(filter_by_type(&items, TypeFilter::All), items);
    }

    #[test]
    fn income_and_expense_partition_input() {
        let items = sample();
        let inc = filter_by_type(&items, TypeFilter::Income);
        let exp = filter_by_type(&items, TypeFilter::Expense);
        assert_eq!(inc.len() + exp.len(), items.len());
        assert!(inc.iter().all(|c| !exp.iter().any(|e| e.id == c.id)));
        let ids: Vec<_> = exp.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "5"]);
    }

    #[test]
    fn parses_selector() {
        assert_eq!("All".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!("income".parse::<TypeFilter>().unwrap(), TypeFilter::Income);
        assert!("both".parse::<TypeFilter>().is_err());
    }
}
