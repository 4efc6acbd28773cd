//! Scalar and list field flattening.

use super::patterns::strip_disambiguator;

/// A raw field value that can be flattened into a single display string.
pub trait FieldValue {
    /// Flatten the value; `None` when nothing is left.
    fn flatten(&self, separator: &str) -> Option<String>;
}

impl FieldValue for str {
    fn flatten(&self, _separator: &str) -> Option<String> {
        non_empty(strip_disambiguator(self))
    }
}

impl FieldValue for String {
    fn flatten(&self, separator: &str) -> Option<String> {
        self.as_str().flatten(separator)
    }
}

impl FieldValue for [String] {
    fn flatten(&self, separator: &str) -> Option<String> {
        non_empty(self.join(separator).trim().to_string())
    }
}

impl FieldValue for Vec<String> {
    fn flatten(&self, separator: &str) -> Option<String> {
        self.as_slice().flatten(separator)
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Option<&T> {
    fn flatten(&self, separator: &str) -> Option<String> {
        self.and_then(|value| value.flatten(separator))
    }
}

/// Normalize a field: lists are joined with `separator` and trimmed, strings
/// lose their " (N)" disambiguator. Empty results are absent.
pub fn normalize_field<V: FieldValue + ?Sized>(value: &V, separator: &str) -> Option<String> {
    value.flatten(separator)
}

/// Normalize a single string field.
pub fn normalize_str(value: &str) -> Option<String> {
    value.flatten("")
}

/// Extract `key` from every element, strip disambiguators, join with
/// `separator` and trim. Elements without the key leave an empty slot.
pub fn normalize_nested_field<T, F>(list: &[T], key: F, separator: &str) -> Option<String>
where
    F: Fn(&T) -> &str,
{
    if list.is_empty() {
        return None;
    }

    let joined = list
        .iter()
        .map(|item| strip_disambiguator(key(item)))
        .collect::<Vec<_>>()
        .join(separator);

    non_empty(joined.trim().to_string())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogEntry;

    #[test]
    fn test_normalize_string() {
        assert_eq!(normalize_str("Warp Records (2)"), Some("Warp Records".to_string()));
        assert_eq!(normalize_str("UK"), Some("UK".to_string()));
        assert_eq!(normalize_str(""), None);
    }

    #[test]
    fn test_normalize_list() {
        let genres = vec!["Electronic".to_string(), "Jazz".to_string()];
        assert_eq!(
            normalize_field(&genres, "\\\\"),
            Some("Electronic\\\\Jazz".to_string())
        );
        assert_eq!(normalize_field(&Vec::<String>::new(), ","), None);

        // List elements keep their suffixes.
        let styles = vec!["Style (2)".to_string()];
        assert_eq!(normalize_field(&styles, ","), Some("Style (2)".to_string()));
    }

    #[test]
    fn test_normalize_optional() {
        let absent: Option<&str> = None;
        assert_eq!(normalize_field(&absent, ","), None);
        assert_eq!(normalize_field(&Some("Foo (3)"), ","), Some("Foo".to_string()));
    }

    #[test]
    fn test_normalize_nested_field() {
        let labels = vec![
            CatalogEntry::new("Warp Records (2)", "WARP 1"),
            CatalogEntry::new("Sheffield Sounds", ""),
        ];
        assert_eq!(
            normalize_nested_field(&labels, |l| l.name.as_str(), "\\\\"),
            Some("Warp Records\\\\Sheffield Sounds".to_string())
        );
        assert_eq!(
            normalize_nested_field(&labels, |l| l.catno.as_str(), ", "),
            Some("WARP 1,".to_string())
        );

        let empty: Vec<CatalogEntry> = Vec::new();
        assert_eq!(normalize_nested_field(&empty, |l| l.name.as_str(), ","), None);
    }
}
