// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::schema::users;
use controller::Entity;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

// To query data from the database
#[derive(Debug, Clone, Identifiable, Queryable, Default, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub zipcode: Option<String>,
}

impl Entity for User {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    // The password never leaves the store
    fn get_data(&self) -> BTreeMap<String, String> {
        let mut data = BTreeMap::new();

        if let Some(email) = &self.email {
            data.insert("email".into(), email.clone());
        }

        if let Some(age) = self.age {
            data.insert("age".into(), age.to_string());
        }

        if let Some(zipcode) = &self.zipcode {
            data.insert("zipcode".into(), zipcode.clone());
        }

        data
    }
}

impl Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<User user_id={} email={}>",
            self.id,
            self.email.as_deref().unwrap_or("None")
        )
    }
}

// To insert a new user into the database
#[derive(Debug, Clone, Default, Insertable)]
#[table_name = "users"]
pub struct NewUser<'a> {
    pub email: Option<&'a str>,
    pub password: Option<&'a str>,
    pub age: Option<i32>,
    pub zipcode: Option<&'a str>,
}

// Users loaded from a dataset keep their original ids
#[derive(Debug, Clone, Insertable)]
#[table_name = "users"]
pub struct SeededUser<'a> {
    pub id: i32,
    pub age: Option<i32>,
    pub zipcode: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_email() {
        let user = User {
            id: 3,
            ..Default::default()
        };

        assert_eq!(user.to_string(), "<User user_id=3 email=None>");
    }

    #[test]
    fn data_hides_password() {
        let user = User {
            id: 1,
            email: Some("ana@example.com".into()),
            password: Some("hunter2".into()),
            age: Some(30),
            zipcode: None,
        };

        let data = user.get_data();
        assert_eq!(data.len(), 2);
        assert_eq!(data["email"], "ana@example.com");
        assert_eq!(data["age"], "30");
        assert!(!data.contains_key("password"));
    }
}
