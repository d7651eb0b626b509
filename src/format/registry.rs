//! Formatter registry: maps format names to formatter factories.

use crate::core::error::{TableError, TableResult};
use crate::format::config::FormatConfig;
use crate::format::decorators::{ColumnFormatter, UpperHeaders};
use crate::format::formatter::TableFormatter;
use indexmap::IndexMap;
use std::sync::Arc;

/// Factory function for creating formatter instances.
pub type FormatterFactory = Arc<dyn Fn() -> Box<dyn TableFormatter> + Send + Sync>;

/// Registry for all available output formats.
///
/// Names are kept in registration order. Every lookup builds a fresh
/// formatter instance.
#[derive(Clone)]
pub struct FormatterRegistry {
    factories: IndexMap<String, FormatterFactory>,
}

impl FormatterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in formatters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::format::builtin::register_all(&mut registry);
        registry
    }

    /// Register a formatter under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn TableFormatter> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Check if a format is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered format names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|s| s.as_str())
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no formats are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Remove a format.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.factories.shift_remove(name).is_some()
    }

    /// Create a base formatter by name.
    pub fn create(&self, name: &str) -> TableResult<Box<dyn TableFormatter>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| TableError::UnsupportedFormatter {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            })
    }

    /// Build a formatter from a configuration.
    ///
    /// The base formatter is wrapped with column formats first (when a
    /// non-empty list is given) and then with upper-case headers (when
    /// enabled).
    pub fn build(&self, config: &FormatConfig) -> TableResult<Box<dyn TableFormatter>> {
        let mut formatter = self.create(&config.format)?;

        if let Some(formats) = config.column_formats.as_deref().filter(|f| !f.is_empty()) {
            formatter = Box::new(ColumnFormatter::new(formatter, formats)?);
        }
        if config.upper_headers {
            formatter = Box::new(UpperHeaders::new(formatter));
        }

        log::debug!(
            "built {} formatter (column formats: {}, upper headers: {})",
            config.format,
            config.column_formats.as_ref().map_or(0, Vec::len),
            config.upper_headers
        );

        Ok(formatter)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Build a formatter from a configuration using the built-in formats.
pub fn create_formatter(config: &FormatConfig) -> TableResult<Box<dyn TableFormatter>> {
    FormatterRegistry::with_builtins().build(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Value;
    use crate::format::builtin::CsvTableFormatter;

    #[test]
    fn test_builtins_registered_in_order() {
        let registry = FormatterRegistry::with_builtins();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["text", "csv", "html"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.create("html").unwrap().name(), "html");
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatterRegistry::with_builtins();
        match registry.create("xml") {
            Err(TableError::UnsupportedFormatter { name, available }) => {
                assert_eq!(name, "xml");
                assert_eq!(available, vec!["text", "csv", "html"]);
            }
            _ => panic!("expected UnsupportedFormatter"),
        }
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = FormatterRegistry::new();
        assert!(registry.is_empty());
        registry.register("comma", || Box::new(CsvTableFormatter));
        assert!(registry.contains("comma"));
        assert!(registry.unregister("comma"));
        assert!(!registry.contains("comma"));
    }

    #[test]
    fn test_build_applies_decorators() {
        let config = FormatConfig {
            format: "csv".to_string(),
            column_formats: Some(vec!["%s".into(), "%d".into(), "%0.2f".into()]),
            upper_headers: true,
        };
        let formatter = create_formatter(&config).unwrap();

        let mut out = Vec::new();
        formatter
            .headings(&mut out, &["name".to_string(), "shares".to_string(), "price".to_string()])
            .unwrap();
        formatter
            .row(&mut out, &[Value::from("GOOG"), Value::Integer(100), Value::Float(490.1)])
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NAME,SHARES,PRICE\nGOOG,100,490.10\n"
        );
    }

    #[test]
    fn test_build_plain() {
        let formatter = create_formatter(&FormatConfig::default()).unwrap();
        assert_eq!(formatter.name(), "text");
    }
}
