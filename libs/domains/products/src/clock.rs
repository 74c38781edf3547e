//! Ingestion timestamp sources.

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use std::fmt::Debug;

use crate::error::{ProductError, ProductResult};

/// Day/month/year with a 24-hour time, e.g. `7/3/2025, 14:05:09`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-d/%-m/%Y, %H:%M:%S";

/// Produces the `ingestion_timestamp` stamped on new products.
pub trait IngestionClock: Send + Sync + Debug {
    fn timestamp(&self) -> String;
}

/// Local wall clock rendered with a strftime pattern.
#[derive(Debug, Clone)]
pub struct SystemClock {
    format: String,
}

impl SystemClock {
    /// Fails with [`ProductError::Internal`] when `format` has an invalid specifier.
    pub fn new(format: impl Into<String>) -> ProductResult<Self> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(ProductError::Internal(format!(
                "invalid timestamp format: {format}"
            )));
        }
        Ok(Self { format })
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl IngestionClock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format(&self.format).to_string()
    }
}

/// Clock that always returns the same text. Used by tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl IngestionClock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_has_date_and_time() {
        let stamp = SystemClock::default().timestamp();
        let (date, time) = stamp.split_once(", ").unwrap();

        assert_eq!(date.split('/').count(), 3);
        assert_eq!(time.split(':').count(), 3);
    }

    #[test]
    fn test_custom_format() {
        let clock = SystemClock::new("%Y").unwrap();
        assert_eq!(clock.timestamp().len(), 4);
    }

    #[test]
    fn test_rejects_invalid_format() {
        let result = SystemClock::new("%Y/%");
        assert!(matches!(result, Err(ProductError::Internal(_))));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new("1/1/2025, 00:00:00");
        assert_eq!(clock.timestamp(), "1/1/2025, 00:00:00");
        assert_eq!(clock.timestamp(), clock.timestamp());
    }
}
