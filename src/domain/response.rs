//! Extraction of the generated field value from raw model output.
//!
//! Policies:
//! - `none`: the raw content is returned unchanged.
//! - `xml`: content of the first `<field>…</field>` element, trimmed, with a
//!   CDATA wrapper removed or the predefined entities unescaped. A missing
//!   element is an error.
//! - `json`: the reply, or failing that its fenced code block, must be one JSON
//!   object holding the field key. Strings come back verbatim, numbers and
//!   booleans as text; anything else is an error.
//!
//! Parse failures never fall back to the raw content.

use serde_json::Value;

use crate::domain::{AppError, OutputFormat};

/// Extract the value of `target_field` from `raw` according to `format`.
pub fn parse_response(raw: &str, format: OutputFormat, target_field: &str) -> Result<String, AppError> {
    match format {
        OutputFormat::None => Ok(raw.to_string()),
        OutputFormat::Xml => parse_xml(raw, target_field),
        OutputFormat::Json => parse_json(raw, target_field),
    }
}

fn parse_xml(raw: &str, tag: &str) -> Result<String, AppError> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let start = raw.find(&open).ok_or_else(|| {
        AppError::response_parse(OutputFormat::Xml, format!("no <{tag}> element in response"))
    })? + open.len();
    let end = raw[start..].find(&close).map(|offset| start + offset).ok_or_else(|| {
        AppError::response_parse(OutputFormat::Xml, format!("<{tag}> element is not closed"))
    })?;

    let inner = raw[start..end].trim();
    if let Some(cdata) = inner.strip_prefix("<![CDATA[").and_then(|rest| rest.strip_suffix("]]>")) {
        return Ok(cdata.trim().to_string());
    }
    Ok(unescape_xml(inner))
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn parse_json(raw: &str, key: &str) -> Result<String, AppError> {
    let value: Value = serde_json::from_str::<Value>(raw.trim())
        .or_else(|_| serde_json::from_str(unwrap_code_fence(raw)))
        .map_err(|err| AppError::response_parse(OutputFormat::Json, err.to_string()))?;

    let Value::Object(object) = value else {
        return Err(AppError::response_parse(OutputFormat::Json, "response is not a JSON object"));
    };

    match object.get(key) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(scalar.to_string()),
        Some(_) => Err(AppError::response_parse(
            OutputFormat::Json,
            format!("value of \"{key}\" is not text"),
        )),
        None => {
            Err(AppError::response_parse(OutputFormat::Json, format!("missing key \"{key}\"")))
        }
    }
}

/// Body of the first ``` fenced block, or the trimmed input when there is none.
fn unwrap_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };
    let after_fence = &trimmed[open + 3..];
    // Skip the info string (`json`, `xml`, ...) on the opening line.
    let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(after_fence.len());
    let body = &after_fence[body_start..];
    match body.find("```") {
        Some(close) => body[..close].trim(),
        None => trimmed,
    }
}
