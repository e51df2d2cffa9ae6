//! Seeded media catalog rendered by the listing page

use chrono::{DateTime, TimeZone, Utc};
use tablesort_core::{SortValue, SortableRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub title: String,
    pub year: u32,
    pub rating: Option<f32>,
    pub added: DateTime<Utc>,
}

impl MediaItem {
    pub fn new(title: &str, year: u32, rating: Option<f32>, added: DateTime<Utc>) -> Self {
        Self {
            title: title.to_string(),
            year,
            rating,
            added,
        }
    }
}

impl SortableRecord for MediaItem {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "title" => SortValue::from(self.title.as_str()),
            "year" => SortValue::from(self.year),
            "rating" => SortValue::from(self.rating),
            "added" => SortValue::from(self.added),
            _ => SortValue::Missing,
        }
    }
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Demo catalog, stored out of order.
pub fn demo_catalog() -> Vec<MediaItem> {
    vec![
        MediaItem::new("Stalker", 1979, Some(8.1), day(2024, 3, 2)),
        MediaItem::new("Alien", 1979, Some(8.5), day(2024, 1, 15)),
        MediaItem::new("Paprika", 2006, Some(7.7), day(2024, 5, 20)),
        MediaItem::new("Brazil", 1985, None, day(2024, 2, 8)),
        MediaItem::new("Heat", 1995, Some(8.3), day(2023, 12, 1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablesort_core::{FieldOrder, Orderable};

    fn titles(items: &[MediaItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_unrated_items_sort_last() {
        let by_rating = demo_catalog().order_by(&[FieldOrder::desc("rating")]);
        assert_eq!(
            titles(&by_rating),
            vec!["Alien", "Heat", "Stalker", "Paprika", "Brazil"]
        );
    }

    #[test]
    fn test_year_then_title() {
        let ordered = demo_catalog().order_by(&[FieldOrder::asc("year"), FieldOrder::asc("title")]);
        assert_eq!(
            titles(&ordered),
            vec!["Alien", "Stalker", "Brazil", "Heat", "Paprika"]
        );
    }
}
