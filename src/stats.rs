// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Totals and per-month sums over already fetched transactions.

use crate::models::{EntryType, Transaction};
use chrono::Datelike;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BalanceSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

impl BalanceSummary {
    pub fn from_transactions(txs: &[Transaction]) -> Self {
        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        for t in txs {
            match t.r#type {
                EntryType::Income => total_income = total_income.saturating_add(t.amount),
                EntryType::Expense => total_expense = total_expense.saturating_add(t.amount),
            }
        }
        BalanceSummary {
            total_income,
            total_expense,
            balance: total_income.saturating_sub(total_expense),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub label: &'static str,
    pub income: Decimal,
    pub expense: Decimal,
}

impl MonthlyBucket {
    pub fn saved(&self) -> Decimal {
        self.income.saturating_sub(self.expense)
    }
}

/// Sums income and expense per calendar month (UTC) of `year`, January first.
/// Transactions dated in any other year are ignored. Sums saturate at the
/// `Decimal` bounds.
pub fn monthly_buckets(txs: &[Transaction], year: i32) -> Vec<MonthlyBucket> {
    let mut buckets: Vec<MonthlyBucket> = MONTH_LABELS
        .iter()
        .map(|&label| MonthlyBucket {
            label,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        })
        .collect();

    for t in txs {
        if t.created_at.year() != year {
            continue;
        }
        let b = &mut buckets[t.created_at.month0() as usize];
        match t.r#type {
            EntryType::Income => b.income = b.income.saturating_add(t.amount),
            EntryType::Expense => b.expense = b.expense.saturating_add(t.amount),
        }
    }
    buckets
}

/// Saved amount (income minus expense) for `month` in 1..=12.
pub fn month_saved(buckets: &[MonthlyBucket], month: u32) -> Option<Decimal> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    buckets.get(idx).map(MonthlyBucket::saved)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "percent")]
pub enum ExpenseRatio {
    /// Both totals are zero.
    NoData,
    /// Rounded share of expense in income plus expense; negative amounts can push it
    /// below 0 or above 100.
    Percent(i64),
    /// Income and expense cancel out (or the percent does not fit), so there is no share.
    Undefined,
}

pub fn expense_ratio(summary: &BalanceSummary) -> ExpenseRatio {
    if summary.total_income.is_zero() && summary.total_expense.is_zero() {
        return ExpenseRatio::NoData;
    }
    let total = match summary.total_income.checked_add(summary.total_expense) {
        Some(t) if !t.is_zero() => t,
        _ => return ExpenseRatio::Undefined,
    };
    summary
        .total_expense
        .checked_div(total)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|p| p.to_i64())
        .map_or(ExpenseRatio::Undefined, ExpenseRatio::Percent)
}

pub fn ratio_label(ratio: ExpenseRatio) -> String {
    match ratio {
        ExpenseRatio::Percent(p) => format!("{}% Exp", p),
        ExpenseRatio::NoData => "No Data".to_string(),
        ExpenseRatio::Undefined => "n/a".to_string(),
    }
}

/// Compact axis label: `1500` becomes `1.5k`, smaller values are printed as is.
pub fn axis_label(value: Decimal) -> String {
    if value >= Decimal::ONE_THOUSAND {
        format!("{}k", (value / Decimal::ONE_THOUSAND).normalize())
    } else {
        value.normalize().to_string()
    }
}
