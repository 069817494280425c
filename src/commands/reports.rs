// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::commands::Snapshot;
use crate::stats::{axis_label, month_saved, monthly_buckets, MonthlyBucket};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{Datelike, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

const BAR_WIDTH: u32 = 40;

#[derive(Debug, Serialize)]
pub struct YearStats {
    pub year: i32,
    pub months: Vec<MonthlyBucket>,
    pub current_month_saved: Decimal,
}

pub fn year_stats(api: &dyn FinanceApi, year: i32, month: u32) -> YearStats {
    let mut txs = Snapshot::default();
    txs.refresh("transactions", || api.transactions());
    let months = monthly_buckets(txs.items(), year);
    let current_month_saved = month_saved(&months, month).unwrap_or_default();
    YearStats {
        year,
        months,
        current_month_saved,
    }
}

pub fn handle(api: &dyn FinanceApi, m: &clap::ArgMatches) -> Result<()> {
    let today = Utc::now().date_naive();
    let year = m.get_one::<i32>("year").copied().unwrap_or(today.year());
    let stats = year_stats(api, year, today.month());

    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &stats)? {
        return Ok(());
    }

    println!("Monthly Statistics - Year {}", stats.year);
    let rows: Vec<Vec<String>> = stats
        .months
        .iter()
        .map(|b| {
            vec![
                b.label.to_string(),
                fmt_money(&b.income),
                fmt_money(&b.expense),
                fmt_money(&b.saved()),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expense", "Saved"], rows)
    );
    if m.get_flag("chart") {
        print!("{}", render_chart(&stats.months));
    }
    println!(
        "Current Month Summary - Total Saved: {}",
        fmt_money(&stats.current_month_saved)
    );
    Ok(())
}

fn bar(value: Decimal, max: Decimal, fill: char) -> String {
    if value <= Decimal::ZERO {
        return String::new();
    }
    let len = (value / max * Decimal::from(BAR_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
        .max(1);
    std::iter::repeat(fill).take(len).collect()
}

/// Two bars per month, income (`#`) above expense (`=`), scaled to the largest value.
pub fn render_chart(buckets: &[MonthlyBucket]) -> String {
    let max = buckets
        .iter()
        .flat_map(|b| [b.income, b.expense])
        .max()
        .unwrap_or_default();
    if max <= Decimal::ZERO {
        return "No Data\n".to_string();
    }

    let mut out = format!("0 .. {}   # Income   = Expense\n", axis_label(max));
    for b in buckets {
        out.push_str(&format!("{:<3} | {}\n", b.label, bar(b.income, max, '#')));
        out.push_str(&format!("    | {}\n", bar(b.expense, max, '=')));
    }
    out
}
