//! Field extraction for raw JSON request bodies.
//!
//! `FieldReader` walks the fields a resource recognizes, normalizes string values by
//! trimming surrounding whitespace, and records every problem it finds instead of stopping
//! at the first one. Fields the resource does not ask for are never looked at, which is how
//! unrecognized fields get discarded.

use serde_json::{Map, Value};
use url::Url;

use crate::server::error::validation::{FieldError, FieldIssue, ValidationErrors};

pub struct FieldReader<'a> {
    body: Option<&'a Map<String, Value>>,
    recognized: Vec<&'static str>,
    supplied: usize,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    /// Creates a reader over a request body.
    ///
    /// A body that is not a JSON object is treated as carrying no fields at all.
    pub fn new(body: &'a Value) -> Self {
        Self {
            body: body.as_object(),
            recognized: Vec::new(),
            supplied: 0,
            errors: Vec::new(),
        }
    }

    /// Reads a field that must be present as a non-empty string.
    pub fn required_string(&mut self, field: &'static str) -> Option<String> {
        self.recognized.push(field);
        let value = self.read_string(field, true)?;
        self.supplied += 1;
        Some(value)
    }

    /// Reads a field that may be absent.
    ///
    /// An empty or whitespace-only string counts as absent; any other non-string value is
    /// rejected.
    pub fn optional_string(&mut self, field: &'static str) -> Option<String> {
        self.recognized.push(field);
        let value = self.read_string(field, false)?;
        self.supplied += 1;
        Some(value)
    }

    /// Reads a required field holding an absolute http(s) URL.
    pub fn required_url(&mut self, field: &'static str) -> Option<String> {
        self.recognized.push(field);
        let value = self.read_string(field, true)?;
        let url = self.check_url(field, value)?;
        self.supplied += 1;
        Some(url)
    }

    /// Reads an optional field holding an absolute http(s) URL; blank counts as absent.
    pub fn optional_url(&mut self, field: &'static str) -> Option<String> {
        self.recognized.push(field);
        let value = self.read_string(field, false)?;
        let url = self.check_url(field, value)?;
        self.supplied += 1;
        Some(url)
    }

    /// Completes a create validation.
    ///
    /// # Arguments
    /// - `value` - The fully assembled parameters, `None` if any required field was rejected
    ///
    /// # Returns
    /// - `Ok(T)` - Every required field was present and valid
    /// - `Err(ValidationErrors)` - Every missing or invalid field
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationErrors::invalid_fields(self.errors)),
        }
    }

    /// Completes an update validation.
    ///
    /// # Arguments
    /// - `param` - Partial parameters holding whichever fields were supplied
    ///
    /// # Returns
    /// - `Ok(T)` - At least one recognized field was supplied and all supplied fields are valid
    /// - `Err(ValidationErrors)` - A supplied field is invalid, or no recognized field was supplied
    pub fn finish_update<T>(self, param: T) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(ValidationErrors::invalid_fields(self.errors));
        }
        if self.supplied == 0 {
            return Err(ValidationErrors::nothing_to_update(&self.recognized));
        }

        Ok(param)
    }

    fn read_string(&mut self, field: &'static str, required: bool) -> Option<String> {
        let value = self
            .body
            .and_then(|body| body.get(field))
            .filter(|value| !value.is_null());

        let Some(value) = value else {
            if required {
                self.reject(field, FieldIssue::Missing);
            }
            return None;
        };

        let Some(raw) = value.as_str() else {
            self.reject(field, FieldIssue::NotAString);
            return None;
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if required {
                self.reject(field, FieldIssue::Empty);
            }
            return None;
        }

        Some(trimmed.to_string())
    }

    fn check_url(&mut self, field: &'static str, value: String) -> Option<String> {
        match Url::parse(&value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Some(value),
            _ => {
                self.reject(field, FieldIssue::InvalidUrl);
                None
            }
        }
    }

    fn reject(&mut self, field: &'static str, issue: FieldIssue) {
        self.errors.push(FieldError { field, issue });
    }
}
