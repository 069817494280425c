// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::commands::Snapshot;
use crate::error::ValidationError;
use crate::filter::{filter_by_type, TypeFilter};
use crate::models::{Category, EntryType, NewTransaction, Transaction};
use crate::utils::{fmt_date, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

pub fn handle(api: &dyn FinanceApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(api, sub)?,
        Some(("list", sub)) => list(api, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(api: &dyn FinanceApi, sub: &clap::ArgMatches) -> Result<()> {
    let saved = add_transaction(api, sub)?;
    info!(id = %saved.id, "transaction created");
    println!("Transaction saved successfully!");

    let mut history = Snapshot::default();
    history.refresh("transactions", || api.transactions());
    print_history(history.items());
    Ok(())
}

/// Validates the form, picks the category and posts the transaction.
pub fn add_transaction(api: &dyn FinanceApi, sub: &clap::ArgMatches) -> Result<Transaction> {
    let kind: EntryType = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = sub.get_one::<String>("amount").unwrap();
    let category = sub.get_one::<String>("category").map(|s| s.as_str());
    let note = sub.get_one::<String>("note").map(|s| s.as_str()).unwrap_or("");

    let mut categories = Snapshot::default();
    categories.refresh("categories", || api.categories_by_type(kind));
    let choices = filter_by_type(categories.items(), kind.into());

    let body = new_transaction(amount, kind, category, note, &choices)?;
    api.create_transaction(&body)
        .context("Could not save transaction")
}

/// Builds the POST body. `categories` are the choices for `kind`; without an explicit
/// selection the first one is used.
pub fn new_transaction(
    amount: &str,
    kind: EntryType,
    category: Option<&str>,
    note: &str,
    categories: &[Category],
) -> Result<NewTransaction, ValidationError> {
    if amount.trim().is_empty() {
        return Err(ValidationError::MissingAmountOrCategory);
    }
    let amount =
        parse_decimal(amount).map_err(|_| ValidationError::InvalidAmount(amount.to_string()))?;

    let chosen = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(sel) => categories
            .iter()
            .find(|c| c.id == sel || c.name.eq_ignore_ascii_case(sel))
            .ok_or_else(|| ValidationError::UnknownCategory(sel.to_string()))?,
        None => categories
            .first()
            .ok_or(ValidationError::MissingAmountOrCategory)?,
    };

    Ok(NewTransaction {
        amount,
        note: note.to_string(),
        category_id: chosen.id.clone(),
        r#type: kind,
    })
}

fn list(api: &dyn FinanceApi, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter: TypeFilter = sub.get_one::<String>("type").unwrap().parse()?;

    let mut history = Snapshot::default();
    history.refresh("transactions", || api.transactions());
    let shown = filter_by_type(history.items(), filter);
    if !maybe_print_json(json_flag, jsonl_flag, &shown)? {
        print_history(&shown);
    }
    Ok(())
}

fn print_history(txs: &[Transaction]) {
    let rows = history_rows(txs, TypeFilter::All);
    if rows.is_empty() {
        println!("No transactions yet");
        return;
    }
    let data: Vec<Vec<String>> = rows
        .into_iter()
        .map(|r| vec![r.date, r.r#type, r.note, r.amount])
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Type", "Note", "Amount"], data)
    );
}

#[derive(Debug, Serialize, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub r#type: String,
    pub note: String,
    pub amount: String,
}

pub fn history_rows(txs: &[Transaction], filter: TypeFilter) -> Vec<HistoryRow> {
    filter_by_type(txs, filter)
        .iter()
        .map(|t| HistoryRow {
            date: fmt_date(&t.created_at),
            r#type: t.r#type.to_string(),
            note: t.note_text().unwrap_or("(no note)").to_string(),
            amount: t.signed_amount(),
        })
        .collect()
}
