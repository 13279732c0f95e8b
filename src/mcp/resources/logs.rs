//! Log file resources for the support endpoint.
//!
//! Both resources return the raw log text prefixed with a metadata header
//! describing the file on disk and when it was read.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use regex::Regex;

use super::{ResourceContent, ResourceDescriptor, ResourceTemplate};
use crate::db::AppState;

pub const APP_LOG_URI: &str = "file:///logs/app.log";
pub const CUSTOMER_LOG_TEMPLATE: &str = "file:///logs/customer_{customer_id}.log";

const CUSTOMER_LOG_PREFIX: &str = "file:///logs/customer_";
const CUSTOMER_LOG_SUFFIX: &str = ".log";

lazy_static! {
    // Customer ids go straight into a filename; only alphanumerics,
    // '_' and '-' are accepted, at most 20 characters.
    static ref CUSTOMER_ID: Regex = Regex::new("^[A-Za-z0-9_-]{1,20}$").unwrap();
}

pub fn app_log_descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        uri: APP_LOG_URI.to_string(),
        name: "app_logs".to_string(),
        description: Some("TechNova Application Logs".to_string()),
        mime_type: "text/plain".to_string(),
    }
}

pub fn customer_log_template() -> ResourceTemplate {
    ResourceTemplate {
        uri_template: CUSTOMER_LOG_TEMPLATE.to_string(),
        name: "customer_logs".to_string(),
        description: Some("Activity logs specific to a customer".to_string()),
        mime_type: "text/plain".to_string(),
    }
}

/// Extract the customer id from a customer log URI, if it is one.
pub fn parse_customer_log_uri(uri: &str) -> Option<String> {
    uri.strip_prefix(CUSTOMER_LOG_PREFIX)?
        .strip_suffix(CUSTOMER_LOG_SUFFIX)
        .map(|id| id.to_string())
}

pub fn read_app_log(state: &AppState) -> Result<ResourceContent, String> {
    let path = state.logs_dir.join("app.log");
    let content = fs::read_to_string(&path)
        .map_err(|err| format!("Error reading application logs: {}", err))?;

    if content.trim().is_empty() {
        return Ok(text_content(
            APP_LOG_URI,
            "# TechNova Application Logs\n# Log file is empty\n".to_string(),
        ));
    }

    let header = metadata_header("TechNova Application Logs", &path)
        .map_err(|err| format!("Error reading application logs: {}", err))?;

    Ok(text_content(APP_LOG_URI, format!("{}{}", header, content)))
}

pub fn read_customer_log(state: &AppState, customer_id: &str) -> Result<ResourceContent, String> {
    if !CUSTOMER_ID.is_match(customer_id) {
        return Err(format!("Invalid customer ID format: {}", customer_id));
    }

    let path = state.logs_dir.join(format!("customer_{}.log", customer_id));
    let uri = format!("{}{}{}", CUSTOMER_LOG_PREFIX, customer_id, CUSTOMER_LOG_SUFFIX);

    let content = fs::read_to_string(&path)
        .map_err(|err| format!("Error reading customer logs for {}: {}", customer_id, err))?;

    if content.trim().is_empty() {
        return Ok(text_content(
            &uri,
            format!(
                "# Customer {} Activity Log\n# Log file exists but is empty\n",
                customer_id
            ),
        ));
    }

    let title = format!("Customer {} Activity Log", customer_id);
    let header = metadata_header(&title, &path)
        .map_err(|err| format!("Error reading customer logs for {}: {}", customer_id, err))?;

    Ok(text_content(&uri, format!("{}{}", header, content)))
}

fn text_content(uri: &str, text: String) -> ResourceContent {
    ResourceContent {
        uri: uri.to_string(),
        mime_type: "text/plain".to_string(),
        text,
    }
}

fn metadata_header(title: &str, path: &Path) -> std::io::Result<String> {
    let metadata = fs::metadata(path)?;
    let modified: DateTime<Local> = metadata.modified()?.into();

    Ok(format!(
        "# {}\n# File: {}\n# Size: {} bytes\n# Last Modified: {}\n# Retrieved: {}\n\n",
        title,
        path.display(),
        group_thousands(metadata.len()),
        modified.format("%Y-%m-%dT%H:%M:%S%.6f"),
        Local::now().format("%Y-%m-%dT%H:%M:%S%.6f"),
    ))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
