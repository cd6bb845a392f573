/// Turning raw history entries into display items
use crate::domain::hostname;
use crate::error::RecoveryError;
use crate::history::{NormalizedItem, RawHistoryEntry};
use crate::suspension::resolve_page;
use crate::visit_time::{format_visit_time, TimeDisplay};
use chrono::{DateTime, TimeZone};
use std::collections::HashSet;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeReport {
    pub items: Vec<NormalizedItem>,
    /// Entries dropped because their URL or timestamp could not be read
    pub skipped: usize,
}

/// Drop entries identical in every field (keep first occurrence)
pub fn dedupe(entries: &[RawHistoryEntry]) -> Vec<RawHistoryEntry> {
    let mut seen = HashSet::new();

    entries
        .iter()
        .filter(|entry| {
            seen.insert((
                entry.id.as_str(),
                entry.url.as_str(),
                entry.title.as_str(),
                entry.last_visit_time.to_bits(),
                entry.visit_count,
            ))
        })
        .cloned()
        .collect()
}

pub fn visits_text(visits: u32) -> String {
    format!("{} visit{}", visits, if visits != 1 { "s" } else { "" })
}

/// Normalize a single entry
pub fn normalize_entry<Tz>(entry: &RawHistoryEntry, now: &DateTime<Tz>) -> Result<NormalizedItem, RecoveryError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let page = resolve_page(&entry.url, &entry.title)?;
    let domain = hostname(&page.url)?;
    let date_time = format_visit_time(entry.last_visit_time, TimeDisplay::Absolute, now)?;
    let relative_time = format_visit_time(entry.last_visit_time, TimeDisplay::Relative, now)?;
    let date = date_time.chars().take(10).collect();

    Ok(NormalizedItem {
        domain,
        title: page.title,
        url: page.url,
        visits: entry.visit_count,
        visits_text: visits_text(entry.visit_count),
        date_time,
        date,
        relative_time,
        time: entry.last_visit_time,
    })
}

/// Dedupe and normalize entries, keeping provider order.
///
/// Entries that fail to normalize are skipped and logged; the rest of the
/// batch is still returned.
pub fn normalize_entries<Tz>(entries: &[RawHistoryEntry], now: &DateTime<Tz>) -> NormalizeReport
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let unique = dedupe(entries);
    let mut items = Vec::with_capacity(unique.len());
    let mut skipped = 0;

    for entry in &unique {
        match normalize_entry(entry, now) {
            Ok(item) => items.push(item),
            Err(e) => {
                log::warn!("Skipping history entry {}: {}", entry.id, e);
                skipped += 1;
            }
        }
    }

    if entries.len() != unique.len() {
        log::debug!("Removed {} duplicate history entries", entries.len() - unique.len());
    }

    NormalizeReport { items, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suspension::SUSPENDED_PAGE_URL;
    use chrono::Utc;

    const NOW_MS: f64 = 1_730_111_400_000.0; // 2024-10-28 10:30:00 UTC

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 28, 10, 30, 0).unwrap()
    }

    fn entry(id: &str, url: &str, title: &str, visits: u32) -> RawHistoryEntry {
        RawHistoryEntry::new(id, url, title, NOW_MS - 3.0 * 3_600_000.0, visits)
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let entries = vec![
            entry("1", "https://a.com", "A", 1),
            entry("2", "https://b.com", "B", 1),
            entry("1", "https://a.com", "A", 1), // duplicate
            entry("3", "https://c.com", "C", 1),
            entry("2", "https://b.com", "B", 1), // duplicate
        ];

        let unique = dedupe(&entries);

        let ids: Vec<&str> = unique.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_dedupe_requires_full_equality() {
        let entries = vec![
            entry("1", "https://a.com", "A", 1),
            entry("1", "https://a.com", "A", 2),
            entry("1", "https://a.com", "A again", 1),
        ];

        assert_eq!(dedupe(&entries).len(), 3);
    }

    #[test]
    fn test_visits_text() {
        assert_eq!(visits_text(0), "0 visits");
        assert_eq!(visits_text(1), "1 visit");
        assert_eq!(visits_text(2), "2 visits");
        assert_eq!(visits_text(15), "15 visits");
    }

    #[test]
    fn test_normalize_suspended_entry() {
        let url = format!("{}#ttl=Foo&pos=0&uri=https%3A%2F%2Fexample.com", SUSPENDED_PAGE_URL);

        let item = normalize_entry(&entry("1", &url, "Suspended", 1), &now()).unwrap();

        assert_eq!(item.title, "Foo");
        assert_eq!(item.url, "https://example.com");
        assert_eq!(item.domain, "example.com");
        assert_eq!(item.visits, 1);
        assert_eq!(item.visits_text, "1 visit");
        assert_eq!(item.date_time, "2024-10-28 07:30:00");
        assert_eq!(item.date, "2024-10-28");
        assert_eq!(item.relative_time, "3 hours ago");
        assert_eq!(item.time, NOW_MS - 3.0 * 3_600_000.0);
    }

    #[test]
    fn test_normalize_pass_through() {
        let raw = entry("1", "https://www.github.com/rust-lang", "Rust", 4);

        let item = normalize_entry(&raw, &now()).unwrap();

        assert_eq!(item.title, raw.title);
        assert_eq!(item.url, raw.url);
        assert_eq!(item.domain, "www.github.com");
        assert_eq!(item.visits_text, "4 visits");
    }

    #[test]
    fn test_normalize_recovers_file_uri() {
        let url = format!("{}#ttl=Report&pos=0&uri=file:///home/u/report.pdf", SUSPENDED_PAGE_URL);

        let report = normalize_entries(&[entry("1", &url, "Suspended", 2)], &now());

        assert_eq!(report.skipped, 0);
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].title, "Report");
        assert_eq!(report.items[0].url, "file:///home/u/report.pdf");
        assert_eq!(report.items[0].domain, "");
    }

    #[test]
    fn test_normalize_skips_malformed_records() {
        let entries = vec![
            entry("1", "https://a.com", "A", 1),
            entry("2", "not a url", "Broken", 1),
            entry("3", &format!("{}#uri=nope", SUSPENDED_PAGE_URL), "Broken too", 1),
            entry("4", "https://b.com", "B", 1),
        ];

        let report = normalize_entries(&entries, &now());

        assert_eq!(report.skipped, 2);
        let titles: Vec<&str> = report.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_normalize_preserves_provider_order() {
        let entries = vec![
            entry("1", "https://z.com", "Z", 1),
            entry("2", "https://a.com", "A", 9),
            entry("1", "https://z.com", "Z", 1),
            entry("3", "https://m.com", "M", 3),
        ];

        let report = normalize_entries(&entries, &now());

        let titles: Vec<&str> = report.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Z", "A", "M"]);
        assert_eq!(report.skipped, 0);
    }
}
