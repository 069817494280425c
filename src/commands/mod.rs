// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod dashboard;
pub mod reports;
pub mod settings;
pub mod transactions;

use crate::error::ApiError;
use tracing::error;

/// Last successfully fetched copy of a remote collection.
///
/// A failed refresh is logged and leaves the previous items in place, so a view
/// always renders something consistent, even if stale.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    items: Vec<T>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Snapshot { items: Vec::new() }
    }
}

impl<T> Snapshot<T> {
    pub fn refresh<F>(&mut self, what: &str, fetch: F) -> bool
    where
        F: FnOnce() -> Result<Vec<T>, ApiError>,
    {
        match fetch() {
            Ok(items) => {
                self.items = items;
                true
            }
            Err(e) => {
                error!(error = %e, "could not load {}", what);
                false
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_refresh_keeps_previous_items() {
        let mut s = Snapshot::default();
        assert!(s.refresh("numbers", || Ok(vec![1, 2, 3])));
        let failed = s.refresh("numbers", || {
            Err(ApiError::Status {
                url: "http://x".into(),
                status: 500,
                message: None,
            })
        });
        assert!(!failed);
        assert_eq!(s.items(), &[1, 2, 3]);
    }
}
