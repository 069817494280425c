// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether money comes in or goes out. Categories and transactions both carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "Income",
            EntryType::Expense => "Expense",
        }
    }

    /// Display sign: expenses are shown negative, income positive.
    pub fn sign(&self) -> char {
        match self {
            EntryType::Income => '+',
            EntryType::Expense => '-',
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(EntryType::Income),
            "expense" => Ok(EntryType::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid type '{}', expected income|expense",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub r#type: EntryType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub note: Option<String>,
    pub r#type: EntryType,
    #[serde(default)]
    pub category_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// The note, or `None` when it is missing or blank.
    pub fn note_text(&self) -> Option<&str> {
        self.note.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    /// Amount prefixed with the sign of its type, e.g. `-40.00`.
    pub fn signed_amount(&self) -> String {
        format!("{}{:.2}", self.r#type.sign(), self.amount)
    }
}

/// Body of `POST /categories`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub r#type: EntryType,
}

/// Body of `POST /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub note: String,
    pub category_id: String,
    pub r#type: EntryType,
}

/// Anything that can be filtered by income/expense.
pub trait Typed {
    fn entry_type(&self) -> EntryType;
}

impl Typed for Category {
    fn entry_type(&self) -> EntryType {
        self.r#type
    }
}

impl Typed for Transaction {
    fn entry_type(&self) -> EntryType {
        self.r#type
    }
}
