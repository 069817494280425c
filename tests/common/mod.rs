// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use cashclip::api::FinanceApi;
use cashclip::error::ApiError;
use cashclip::models::{Category, EntryType, NewCategory, NewTransaction, Transaction};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::cell::RefCell;

/// In-memory backend. `offline` makes every call fail like an unreachable server.
#[derive(Default)]
pub struct FakeApi {
    pub categories: Vec<Category>,
    pub transactions: RefCell<Vec<Transaction>>,
    pub posted: RefCell<Vec<NewTransaction>>,
    pub offline: bool,
}

fn down(path: &str) -> ApiError {
    ApiError::Status {
        url: format!("http://fake/{}", path),
        status: 503,
        message: None,
    }
}

impl FinanceApi for FakeApi {
    fn categories_by_type(&self, t: EntryType) -> Result<Vec<Category>, ApiError> {
        if self.offline {
            return Err(down("categories/by-type"));
        }
        Ok(self
            .categories
            .iter()
            .filter(|c| c.r#type == t)
            .cloned()
            .collect())
    }

    fn create_category(&self, body: &NewCategory) -> Result<Category, ApiError> {
        if self.offline {
            return Err(down("categories"));
        }
        Ok(Category {
            id: format!("c{}", self.categories.len() + 1),
            name: body.name.clone(),
            r#type: body.r#type,
        })
    }

    fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        if self.offline {
            return Err(down("transactions"));
        }
        Ok(self.transactions.borrow().clone())
    }

    fn create_transaction(&self, body: &NewTransaction) -> Result<Transaction, ApiError> {
        if self.offline {
            return Err(down("transactions"));
        }
        self.posted.borrow_mut().push(body.clone());
        let t = Transaction {
            id: format!("t{}", self.transactions.borrow().len() + 1),
            amount: body.amount,
            note: Some(body.note.clone()),
            r#type: body.r#type,
            category_id: Some(body.category_id.clone()),
            created_at: Utc::now(),
        };
        self.transactions.borrow_mut().push(t.clone());
        Ok(t)
    }
}

pub fn category(id: &str, name: &str, t: EntryType) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        r#type: t,
    }
}

pub fn tx(id: &str, amount: i64, t: EntryType, date: (i32, u32, u32)) -> Transaction {
    Transaction {
        id: id.into(),
        amount: Decimal::new(amount, 0),
        note: None,
        r#type: t,
        category_id: None,
        created_at: Utc.with_ymd_and_hms(date.0, date.1, date.2, 9, 0, 0).unwrap(),
    }
}

pub fn sample_api() -> FakeApi {
    FakeApi {
        categories: vec![
            category("e1", "Food", EntryType::Expense),
            category("e2", "Rent", EntryType::Expense),
            category("i1", "Salary", EntryType::Income),
        ],
        transactions: RefCell::new(vec![
            tx("a", 100, EntryType::Income, (2024, 1, 15)),
            tx("b", 40, EntryType::Expense, (2024, 1, 20)),
            tx("c", 200, EntryType::Income, (2023, 5, 1)),
        ]),
        ..Default::default()
    }
}
