// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt::{self, Display};

/// How to look up users or movies. `Name` is the email for users and the
/// title for movies, `Custom` targets any other searchable column.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SearchBy {
    Id(String),
    Name(String),
    Custom(String, String),
}

impl SearchBy {
    pub fn id(id: &str) -> Self {
        Self::Id(id.into())
    }

    pub fn name(name: &str) -> Self {
        Self::Name(name.into())
    }

    pub fn custom(key: &str, val: &str) -> Self {
        Self::Custom(key.into(), val.into())
    }

    /// Build a search from a field name as typed on the command line
    pub fn by_field(field: &str, val: &str) -> Self {
        match field {
            "id" => Self::id(val),
            "name" | "email" | "title" => Self::name(val),
            other => Self::custom(other, val),
        }
    }
}

impl Display for SearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBy::Id(id) => write!(f, "id({})", id),
            SearchBy::Name(name) => write!(f, "name({})", name),
            SearchBy::Custom(key, val) => write!(f, "{}({})", key, val),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_field_aliases() {
        assert_eq!(SearchBy::by_field("id", "3"), SearchBy::id("3"));
        assert_eq!(SearchBy::by_field("email", "a@b.c"), SearchBy::name("a@b.c"));
        assert_eq!(SearchBy::by_field("title", "Heat"), SearchBy::name("Heat"));
        assert_eq!(
            SearchBy::by_field("zipcode", "94110"),
            SearchBy::custom("zipcode", "94110")
        );
    }

    #[test]
    fn display() {
        assert_eq!(SearchBy::id("3").to_string(), "id(3)");
        assert_eq!(SearchBy::custom("age", "24").to_string(), "age(24)");
    }
}
