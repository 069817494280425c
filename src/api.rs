// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Access to the remote finance backend.

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{Category, EntryType, NewCategory, NewTransaction, Transaction};
use crate::utils::http_client;
use anyhow::Result;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// The four calls the client makes against the backend.
pub trait FinanceApi {
    fn categories_by_type(&self, t: EntryType) -> Result<Vec<Category>, ApiError>;
    fn create_category(&self, body: &NewCategory) -> Result<Category, ApiError>;
    fn transactions(&self) -> Result<Vec<Transaction>, ApiError>;
    fn create_transaction(&self, body: &NewTransaction) -> Result<Transaction, ApiError>;
}

pub struct HttpBackend {
    client: Client,
    config: Config,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let client = http_client(Duration::from_secs(config.timeout_secs))?;
        Ok(HttpBackend {
            client,
            config: config.clone(),
        })
    }

    fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let url = self.config.endpoint(path);
        debug!(%url, ?query, "GET");
        let body = send(&url, self.client.get(&url).query(query))?;
        decode_list(&url, &body)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        debug!(%url, "POST");
        let text = send(&url, self.client.post(&url).json(body))?;
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { url, source })
    }
}

impl FinanceApi for HttpBackend {
    fn categories_by_type(&self, t: EntryType) -> Result<Vec<Category>, ApiError> {
        self.get_list("categories/by-type", &[("type", t.as_str())])
    }

    fn create_category(&self, body: &NewCategory) -> Result<Category, ApiError> {
        self.post("categories", body)
    }

    fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_list("transactions", &[])
    }

    fn create_transaction(&self, body: &NewTransaction) -> Result<Transaction, ApiError> {
        self.post("transactions", body)
    }
}

fn send(url: &str, req: RequestBuilder) -> Result<String, ApiError> {
    let transport = |source| ApiError::Transport {
        url: url.to_string(),
        source,
    };
    let resp = req.send().map_err(transport)?;
    let status = resp.status();
    let text = resp.text().map_err(transport)?;
    if !status.is_success() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message: error_message(&text),
        });
    }
    Ok(text)
}

/// Pulls `message` out of a JSON error body such as `{"message": "Category exists"}`.
pub fn error_message(body: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(body).ok()?;
    v.get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
}

/// Decodes a JSON array, dropping (and logging) elements that do not fit `T`.
pub fn decode_list<T: DeserializeOwned>(url: &str, body: &str) -> Result<Vec<T>, ApiError> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })?;
    let mut out = Vec::with_capacity(raw.len());
    for item in raw {
        match serde_json::from_value::<T>(item) {
            Ok(v) => out.push(v),
            Err(e) => warn!(%url, error = %e, "skipping malformed record"),
        }
    }
    Ok(out)
}
