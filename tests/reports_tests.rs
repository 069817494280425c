// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use cashclip::commands::{categories, dashboard, reports};
use cashclip::models::EntryType;
use cashclip::stats::ExpenseRatio;
use common::{sample_api, tx, FakeApi};
use rust_decimal::Decimal;

#[test]
fn year_stats_buckets_target_year_only() {
    let api = sample_api();
    let stats = reports::year_stats(&api, 2024, 1);
    assert_eq!(stats.months.len(), 12);
    assert_eq!(stats.months[0].income, Decimal::new(100, 0));
    assert_eq!(stats.months[0].expense, Decimal::new(40, 0));
    assert!(stats.months[1..]
        .iter()
        .all(|b| b.income.is_zero() && b.expense.is_zero()));
    assert_eq!(stats.current_month_saved, Decimal::new(60, 0));

    let older = reports::year_stats(&api, 2023, 5);
    assert_eq!(older.months[4].income, Decimal::new(200, 0));
    assert_eq!(older.current_month_saved, Decimal::new(200, 0));
}

#[test]
fn stats_serialize_for_json_output() {
    let api = sample_api();
    let v = serde_json::to_value(reports::year_stats(&api, 2024, 3)).unwrap();
    assert_eq!(v["year"], 2024);
    assert_eq!(v["months"][0]["label"], "Jan");
    assert_eq!(v["months"].as_array().unwrap().len(), 12);
}

#[test]
fn overview_totals_and_ratio() {
    let api = sample_api();
    api.transactions
        .borrow_mut()
        .push(tx("d", 60, EntryType::Expense, (2024, 2, 1)));
    let o = dashboard::overview(&api);
    assert_eq!(o.summary.total_income, Decimal::new(300, 0));
    assert_eq!(o.summary.total_expense, Decimal::new(100, 0));
    assert_eq!(o.summary.balance, Decimal::new(200, 0));
    assert_eq!(o.expense_ratio, ExpenseRatio::Percent(25));
}

#[test]
fn unreachable_backend_renders_empty_views() {
    let api = FakeApi {
        offline: true,
        ..sample_api()
    };
    let o = dashboard::overview(&api);
    assert!(o.summary.balance.is_zero());
    assert_eq!(o.expense_ratio, ExpenseRatio::NoData);

    let stats = reports::year_stats(&api, 2024, 1);
    assert!(stats.current_month_saved.is_zero());

    assert!(categories::fetch(&api, EntryType::Expense).is_empty());
}

#[test]
fn category_fetch_keeps_only_requested_type() {
    let api = sample_api();
    let names: Vec<_> = categories::fetch(&api, EntryType::Expense)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Food", "Rent"]);

    let created = categories::create(&api, " Bonus ", EntryType::Income).unwrap();
    assert_eq!(created.name, "Bonus");
    assert_eq!(created.r#type, EntryType::Income);
}
