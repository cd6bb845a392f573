/// User-selectable view options, persisted between sessions
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Clipboard export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Grouped HTML with headings and links
    #[default]
    All,
    /// Plain title/URL pairs
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Domain,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Title,
    Visits,
}

/// Every option the recovery page exposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsState {
    pub format: Format,
    pub mode: ViewMode,
    pub group_by: GroupBy,
    pub sort_by: SortBy,
    pub relative_time: bool,
}

impl Default for OptionsState {
    fn default() -> Self {
        OptionsState {
            format: Format::All,
            mode: ViewMode::List,
            group_by: GroupBy::Domain,
            sort_by: SortBy::Date,
            relative_time: true,
        }
    }
}

/// A single user edit to the options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionChange {
    Format(Format),
    Mode(ViewMode),
    GroupBy(GroupBy),
    SortBy(SortBy),
    RelativeTime(bool),
}

impl OptionsState {
    pub fn apply(&mut self, change: OptionChange) {
        match change {
            OptionChange::Format(format) => self.format = format,
            OptionChange::Mode(mode) => self.mode = mode,
            OptionChange::GroupBy(group_by) => self.group_by = group_by,
            OptionChange::SortBy(sort_by) => self.sort_by = sort_by,
            OptionChange::RelativeTime(relative) => self.relative_time = relative,
        }
    }

    /// Grouping only applies to the list view
    pub fn grouping_enabled(&self) -> bool {
        self.mode == ViewMode::List
    }
}

/// Select-box values share the persisted lowercase spelling
macro_rules! option_str {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    other => Err(format!("Unknown {} value: {}", stringify!($ty), other)),
                }
            }
        }
    };
}

option_str!(Format { All => "all", Text => "text" });
option_str!(ViewMode { List => "list", Table => "table" });
option_str!(GroupBy { Domain => "domain", Date => "date" });
option_str!(SortBy { Date => "date", Title => "title", Visits => "visits" });

impl OptionChange {
    /// Build a change from a form control's `name` and `value`
    pub fn from_field(name: &str, value: &str) -> Result<Self, String> {
        Ok(match name {
            "format" => OptionChange::Format(value.parse()?),
            "mode" => OptionChange::Mode(value.parse()?),
            "groupBy" => OptionChange::GroupBy(value.parse()?),
            "sortBy" => OptionChange::SortBy(value.parse()?),
            "relativeTime" => OptionChange::RelativeTime(
                value.parse().map_err(|_| format!("Unknown relativeTime value: {}", value))?,
            ),
            other => return Err(format!("Unknown option: {}", other)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = OptionsState::default();

        assert_eq!(options.format, Format::All);
        assert_eq!(options.mode, ViewMode::List);
        assert_eq!(options.group_by, GroupBy::Domain);
        assert_eq!(options.sort_by, SortBy::Date);
        assert!(options.relative_time);
    }

    #[test]
    fn test_serialization_matches_stored_shape() {
        let options = OptionsState {
            format: Format::Text,
            mode: ViewMode::Table,
            group_by: GroupBy::Date,
            sort_by: SortBy::Visits,
            relative_time: false,
        };

        let json = serde_json::to_string(&options).unwrap();

        assert_eq!(
            json,
            r#"{"format":"text","mode":"table","groupBy":"date","sortBy":"visits","relativeTime":false}"#
        );
        assert_eq!(serde_json::from_str::<OptionsState>(&json).unwrap(), options);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options: OptionsState = serde_json::from_str(r#"{"sortBy":"title"}"#).unwrap();

        assert_eq!(options.sort_by, SortBy::Title);
        assert_eq!(options.group_by, GroupBy::Domain);
        assert!(options.relative_time);
    }

    #[test]
    fn test_apply_changes() {
        let mut options = OptionsState::default();

        options.apply(OptionChange::Mode(ViewMode::Table));
        options.apply(OptionChange::RelativeTime(false));

        assert_eq!(options.mode, ViewMode::Table);
        assert!(!options.relative_time);
        assert!(!options.grouping_enabled());
    }

    #[test]
    fn test_from_field() {
        assert_eq!(OptionChange::from_field("sortBy", "visits"), Ok(OptionChange::SortBy(SortBy::Visits)));
        assert_eq!(OptionChange::from_field("groupBy", "date"), Ok(OptionChange::GroupBy(GroupBy::Date)));
        assert_eq!(OptionChange::from_field("relativeTime", "false"), Ok(OptionChange::RelativeTime(false)));
        assert!(OptionChange::from_field("sortBy", "size").is_err());
        assert!(OptionChange::from_field("theme", "dark").is_err());
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for sort_by in SortBy::ALL {
            assert_eq!(sort_by.as_str().parse::<SortBy>(), Ok(*sort_by));
        }
    }
}
