//! Post query parameters and their validated form.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

/// Ordering on `published_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ContentError::invalid_filter(format!(
                "unknown sort order '{other}', expected 'asc' or 'desc'"
            ))),
        }
    }
}

/// Caller-supplied query parameters for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFilters {
    /// Case-insensitive substring matched against title and excerpt.
    pub search: Option<String>,
    pub year: Option<i32>,
    /// 0-indexed month (January = 0). Only valid together with `year`.
    pub month: Option<u32>,
    #[serde(default)]
    pub sort_order: SortOrder,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PostFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Validate the filters and apply defaults.
    ///
    /// A `month` without a `year` is rejected rather than ignored, as is a
    /// year whose range cannot be represented as a UTC timestamp.
    pub fn resolve(&self) -> Result<ResolvedQuery, ContentError> {
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let calendar = match (self.year, self.month) {
            (None, None) => None,
            (None, Some(month)) => {
                return Err(ContentError::invalid_filter(format!(
                    "month {month} given without a year"
                )));
            }
            (Some(year), month) => {
                if let Some(month) = month
                    && month > 11
                {
                    return Err(ContentError::invalid_filter(format!(
                        "month must be between 0 and 11, got {month}"
                    )));
                }
                let calendar = CalendarFilter { year, month };
                calendar.range()?;
                Some(calendar)
            }
        };

        let page = self.page.unwrap_or(DEFAULT_PAGE);
        if page == 0 {
            return Err(ContentError::invalid_filter("page is 1-based"));
        }

        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(ContentError::invalid_filter(format!(
                "perPage must be between 1 and {MAX_PER_PAGE}, got {per_page}"
            )));
        }

        Ok(ResolvedQuery {
            search,
            calendar,
            sort_order: self.sort_order,
            page,
            per_page,
        })
    }
}

/// Calendar restriction on `published_at` (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFilter {
    pub year: i32,
    /// 0-indexed month, already checked to be `<= 11`.
    pub month: Option<u32>,
}

impl CalendarFilter {
    /// Half-open `[start, end)` range covered by this filter.
    pub fn range(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), ContentError> {
        let (start, end) = match self.month {
            Some(11) => (month_start(self.year, 12)?, month_start(self.year + 1, 1)?),
            Some(m) => (month_start(self.year, m + 1)?, month_start(self.year, m + 2)?),
            None => (month_start(self.year, 1)?, month_start(self.year + 1, 1)?),
        };
        Ok((start, end))
    }
}

fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>, ContentError> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| ContentError::invalid_filter(format!("year {year} is out of range")))
}

/// Filters after validation, with defaults applied and the needle lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub search: Option<String>,
    pub calendar: Option<CalendarFilter>,
    pub sort_order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

impl ResolvedQuery {
    /// Number of matching items skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.per_page as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = PostFilters::new().resolve().unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 10);
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.search, None);
        assert_eq!(query.calendar, None);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_month_without_year_is_rejected() {
        let err = PostFilters::new().month(2).resolve().unwrap_err();
        assert!(matches!(err, ContentError::InvalidFilter(_)));
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        let err = PostFilters::new().year(2024).month(12).resolve().unwrap_err();
        assert!(matches!(err, ContentError::InvalidFilter(_)));
    }

    #[test]
    fn test_unrepresentable_year_is_rejected() {
        let err = PostFilters::new().year(300_000).resolve().unwrap_err();
        assert!(matches!(err, ContentError::InvalidFilter(_)));

        let err = PostFilters::new().year(-300_000).month(0).resolve().unwrap_err();
        assert!(matches!(err, ContentError::InvalidFilter(_)));

        assert!(PostFilters::new().year(1).month(0).resolve().is_ok());
    }

    #[test]
    fn test_zero_page_and_per_page_are_rejected() {
        assert!(PostFilters::new().page(0).resolve().is_err());
        assert!(PostFilters::new().per_page(0).resolve().is_err());
        assert!(PostFilters::new().per_page(MAX_PER_PAGE + 1).resolve().is_err());
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let query = PostFilters::new().search("   ").resolve().unwrap();
        assert_eq!(query.search, None);

        let query = PostFilters::new().search("  RuSt ").resolve().unwrap();
        assert_eq!(query.search.as_deref(), Some("rust"));
    }

    #[test]
    fn test_offset() {
        let query = PostFilters::new().page(3).per_page(10).resolve().unwrap();
        assert_eq!(query.offset(), 20);
    }

    #[test]
    fn test_calendar_ranges() {
        let december = CalendarFilter {
            year: 2023,
            month: Some(11),
        };
        let (start, end) = december.range().unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let march = CalendarFilter {
            year: 2024,
            month: Some(2),
        };
        let (start, end) = march.range().unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());

        let whole_year = CalendarFilter {
            year: 2024,
            month: None,
        };
        let (start, end) = whole_year.range().unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
