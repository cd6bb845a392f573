/// View derivation: sorting, grouping, and display columns

use crate::history::NormalizedItem;
use crate::options::{GroupBy, OptionsState, SortBy};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A bucket of items sharing a domain or date
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub title: String,
    /// `time` of the first item placed in the group
    pub time: f64,
    /// `visits` of the first item placed in the group
    pub visits: u32,
    pub items: Vec<NormalizedItem>,
}

/// Groups in order of first appearance
pub type GroupedView = Vec<Group>;

fn compare(a: &NormalizedItem, b: &NormalizedItem, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Date => b
            .date
            .cmp(&a.date)
            .then_with(|| b.time.partial_cmp(&a.time).unwrap_or(Ordering::Equal)),
        // Browser string order: UTF-16 code units, not UTF-8 bytes
        SortBy::Title => a.title.encode_utf16().cmp(b.title.encode_utf16()),
        SortBy::Visits => b.visits.cmp(&a.visits),
    }
}

/// Sort items for display
///
/// Date and visits sort newest/most first, title sorts A→Z. The sort is
/// stable, so ties keep their input order.
pub fn sort_items(items: &[NormalizedItem], sort_by: SortBy) -> Vec<NormalizedItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare(a, b, sort_by));
    sorted
}

pub fn group_key(item: &NormalizedItem, group_by: GroupBy) -> &str {
    match group_by {
        GroupBy::Domain => &item.domain,
        GroupBy::Date => &item.date,
    }
}

/// Fold sorted items into groups, keeping first-appearance order
pub fn group_items(sorted: &[NormalizedItem], group_by: GroupBy) -> GroupedView {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: GroupedView = Vec::new();

    for item in sorted {
        let key = group_key(item, group_by);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                title: key.to_string(),
                time: item.time,
                visits: item.visits,
                items: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].items.push(item.clone());
    }

    groups
}

/// Sorted and grouped items for the current options
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub sorted: Vec<NormalizedItem>,
    pub grouped: GroupedView,
}

pub fn derive_view(items: &[NormalizedItem], options: &OptionsState) -> DerivedView {
    let sorted = sort_items(items, options.sort_by);
    let grouped = group_items(&sorted, options.group_by);
    DerivedView { sorted, grouped }
}

/// Relative or absolute visit time, per the relative-time toggle
pub fn time_label(item: &NormalizedItem, relative: bool) -> &str {
    if relative {
        &item.relative_time
    } else {
        &item.date_time
    }
}

/// Header of the table's last column
pub fn metric_header(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::Visits => "Visits",
        _ => "Date",
    }
}

/// Value of the table's last column
pub fn metric_value(item: &NormalizedItem, options: &OptionsState) -> String {
    match options.sort_by {
        SortBy::Visits => item.visits.to_string(),
        _ => time_label(item, options.relative_time).to_string(),
    }
}
