// src/bin/verify.rs

use anyhow::{Context, Result};
use geovis::verify::check_payload;
use reqwest::blocking::Client;
use serde_json::Value;
use std::{env, process::ExitCode};
use url::Url;

const DEFAULT_URL: &str = "http://127.0.0.1:5000/restaurants";
const URL_VAR: &str = "GEOVIS_VERIFY_URL";

fn run() -> Result<bool> {
    // 1) Endpoint: first argument, then env, then the local default
    let raw = env::args()
        .nth(1)
        .or_else(|| env::var(URL_VAR).ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    let url = Url::parse(&raw).with_context(|| format!("invalid endpoint URL '{}'", raw))?;

    // 2) Fetch
    let resp = Client::new()
        .get(url.clone())
        .send()
        .with_context(|| format!("GET {}", url))?;
    let status = resp.status();
    if !status.is_success() {
        println!("Failed: HTTP {}", status);
        println!("{}", resp.text().unwrap_or_default());
        return Ok(false);
    }
    let body: Value = resp
        .json()
        .with_context(|| format!("decoding JSON from {}", url))?;

    // 3) Check integrity
    let report = match check_payload(&body) {
        Ok(report) => report,
        Err(e) => {
            println!("Failed: {}", e);
            return Ok(false);
        }
    };
    println!("Success! Loaded {} records in split format.", report.records);

    for p in &report.problems {
        println!("Record {} has {}: {}", p.index, p.reason, p.row);
    }
    if report.is_clean() {
        println!("Data integrity check passed: all records have valid coordinates.");
    } else {
        println!("Data integrity check FAILED.");
    }
    Ok(report.is_clean())
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            println!("Verification script failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
