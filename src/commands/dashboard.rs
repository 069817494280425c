// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::commands::Snapshot;
use crate::stats::{expense_ratio, ratio_label, BalanceSummary, ExpenseRatio};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct Overview {
    #[serde(flatten)]
    pub summary: BalanceSummary,
    pub expense_ratio: ExpenseRatio,
}

pub fn overview(api: &dyn FinanceApi) -> Overview {
    let mut txs = Snapshot::default();
    txs.refresh("transactions", || api.transactions());
    let summary = BalanceSummary::from_transactions(txs.items());
    Overview {
        summary,
        expense_ratio: expense_ratio(&summary),
    }
}

pub fn handle(api: &dyn FinanceApi, m: &clap::ArgMatches) -> Result<()> {
    let o = overview(api);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &o)? {
        return Ok(());
    }
    let s = &o.summary;
    let rows = vec![
        vec!["Total Balance".to_string(), fmt_money(&s.balance)],
        vec!["Income".to_string(), format!("+{}", fmt_money(&s.total_income))],
        vec!["Expense".to_string(), format!("-{}", fmt_money(&s.total_expense))],
        vec!["Income vs Expense".to_string(), ratio_label(o.expense_ratio)],
    ];
    println!("{}", pretty_table(&["Financial Overview", ""], rows));
    Ok(())
}
