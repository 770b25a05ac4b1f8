use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};

/// Direction in which the popular listing is sorted by rating.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Order {
    #[strum(serialize = "asc")]
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[strum(serialize = "desc")]
    #[serde(rename = "desc")]
    Descending,
}

impl Order {
    /// Read the `sort` query parameter. Only the exact `asc`/`desc` spellings are
    /// recognised; anything else means descending.
    pub fn from_query(sort: Option<&str>) -> Self {
        match sort {
            None => Order::default(),
            Some(value) => Order::from_str(value).unwrap_or_else(|_| {
                warn!("Unknown sort order '{}', falling back to desc", value);
                Order::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        assert_eq!(Order::from_query(None), Order::Descending);
        assert_eq!(Order::from_query(Some("asc")), Order::Ascending);
        assert_eq!(Order::from_query(Some("desc")), Order::Descending);
        assert_eq!(Order::from_query(Some("rating")), Order::Descending);
        assert_eq!(Order::from_query(Some("")), Order::Descending);
    }

    #[test]
    fn test_from_query_is_case_sensitive() {
        assert_eq!(Order::from_query(Some("ASC")), Order::Descending);
        assert_eq!(Order::from_query(Some("Asc")), Order::Descending);
    }

    #[test]
    fn test_display() {
        assert_eq!(Order::Ascending.to_string(), "asc");
        assert_eq!(Order::Descending.as_ref(), "desc");
    }
}
