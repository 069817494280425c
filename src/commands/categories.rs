// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::commands::Snapshot;
use crate::error::ValidationError;
use crate::filter::filter_by_type;
use crate::models::{Category, EntryType, NewCategory};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(api: &dyn FinanceApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind: EntryType = sub.get_one::<String>("type").unwrap().parse()?;
            let created = create(api, name, kind)?;
            println!("Category added successfully: {} ({})", created.name, created.r#type);
        }
        Some(("list", sub)) => {
            let kind: EntryType = sub.get_one::<String>("type").unwrap().parse()?;
            let cats = fetch(api, kind);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
                if cats.is_empty() {
                    println!("No Categories In List");
                } else {
                    let data = cats
                        .into_iter()
                        .map(|c| vec![c.name, c.r#type.to_string(), c.id])
                        .collect();
                    println!("{}", pretty_table(&["Category", "Type", "Id"], data));
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Categories of one type. A failed request is logged and yields an empty list.
pub fn fetch(api: &dyn FinanceApi, kind: EntryType) -> Vec<Category> {
    let mut cats = Snapshot::default();
    cats.refresh("categories", || api.categories_by_type(kind));
    filter_by_type(cats.items(), kind.into())
}

/// Creates a category after trimming its name; a blank name never reaches the backend.
pub fn create(api: &dyn FinanceApi, name: &str, kind: EntryType) -> Result<Category> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyCategoryName.into());
    }
    let body = NewCategory {
        name: name.to_string(),
        r#type: kind,
    };
    api.create_category(&body).map_err(|e| {
        let msg = e
            .server_message()
            .unwrap_or("Cannot create new category")
            .to_string();
        anyhow::Error::new(e).context(msg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{NewTransaction, Transaction};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Rejecting {
        posted: RefCell<Vec<NewCategory>>,
        message: Option<String>,
    }

    impl FinanceApi for Rejecting {
        fn categories_by_type(&self, _t: EntryType) -> Result<Vec<Category>, ApiError> {
            Ok(Vec::new())
        }
        fn create_category(&self, body: &NewCategory) -> Result<Category, ApiError> {
            self.posted.borrow_mut().push(body.clone());
            Err(ApiError::Status {
                url: "http://x/categories".into(),
                status: 409,
                message: self.message.clone(),
            })
        }
        fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
            Ok(Vec::new())
        }
        fn create_transaction(&self, _b: &NewTransaction) -> Result<Transaction, ApiError> {
            unreachable!()
        }
    }

    #[test]
    fn blank_name_is_rejected_locally() {
        let api = Rejecting::default();
        let err = create(&api, "   ", EntryType::Income).unwrap_err();
        assert_eq!(err.to_string(), "Please enter category's name");
        assert!(api.posted.borrow().is_empty());
    }

    #[test]
    fn server_message_is_surfaced() {
        let api = Rejecting {
            message: Some("Category already exists".into()),
            ..Default::default()
        };
        let err = create(&api, "  Food ", EntryType::Expense).unwrap_err();
        assert_eq!(err.to_string(), "Category already exists");
        assert_eq!(api.posted.borrow()[0].name, "Food");

        let api = Rejecting::default();
        let err = create(&api, "Food", EntryType::Expense).unwrap_err();
        assert_eq!(err.to_string(), "Cannot create new category");
    }
}
