//! Query-parameter parsing shared by the list endpoints.
//!
//! Policy:
//! - absent or blank parameter: no filtering
//! - enumerated parameter with an unknown code: matches nothing
//! - boolean parameter: "true" (any case) is true, every other value is false

use std::str::FromStr;

/// Parsed form of an enumerated query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFilter<T> {
    Any,
    Only(T),
    /// A value was supplied that is not a known code
    Nothing,
}

impl<T: FromStr + Copy> EnumFilter<T> {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => EnumFilter::Any,
            Some(code) => code.parse().map_or(EnumFilter::Nothing, EnumFilter::Only),
        }
    }

    /// Value to bind in a `($n IS NULL OR col = $n)` clause
    pub fn value(&self) -> Option<T> {
        match self {
            EnumFilter::Only(v) => Some(*v),
            _ => None,
        }
    }

    pub fn matches_nothing(&self) -> bool {
        matches!(self, EnumFilter::Nothing)
    }
}

impl<T> Default for EnumFilter<T> {
    fn default() -> Self {
        EnumFilter::Any
    }
}

/// Parse a boolean query flag; `None` means the filter is not applied
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.eq_ignore_ascii_case("true"))
}

/// `ILIKE` pattern for a free-text admin search; `None` when the term is blank
pub fn search_pattern(term: Option<&str>) -> Option<String> {
    let term = term.map(str::trim).filter(|s| !s.is_empty())?;
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Some(format!("%{}%", escaped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::region::Region;

    #[test]
    fn test_enum_filter_absent_or_blank() {
        assert_eq!(EnumFilter::<Region>::parse(None), EnumFilter::Any);
        assert_eq!(EnumFilter::<Region>::parse(Some("  ")), EnumFilter::Any);
    }

    #[test]
    fn test_enum_filter_known_and_unknown() {
        let known = EnumFilter::<Region>::parse(Some("manzini"));
        assert_eq!(known, EnumFilter::Only(Region::Manzini));
        assert_eq!(known.value(), Some(Region::Manzini));

        let unknown = EnumFilter::<Region>::parse(Some("atlantis"));
        assert!(unknown.matches_nothing());
        assert_eq!(unknown.value(), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(None), None);
        assert_eq!(parse_flag(Some("")), None);
        assert_eq!(parse_flag(Some("true")), Some(true));
        assert_eq!(parse_flag(Some("TRUE")), Some(true));
        assert_eq!(parse_flag(Some("false")), Some(false));
        assert_eq!(parse_flag(Some("yes")), Some(false));
        assert_eq!(parse_flag(Some("1")), Some(false));
    }

    #[test]
    fn test_search_pattern() {
        assert_eq!(search_pattern(None), None);
        assert_eq!(search_pattern(Some("   ")), None);
        assert_eq!(search_pattern(Some(" manzini ")), Some("%manzini%".to_string()));
        assert_eq!(search_pattern(Some("50%_off")), Some("%50\\%\\_off%".to_string()));
    }
}
