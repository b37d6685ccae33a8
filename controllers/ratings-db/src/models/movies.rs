use crate::schema::movies;
use chrono::NaiveDateTime;
use common_macros::b_tree_map;
use controller::Entity;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Identifiable, Queryable, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_date: NaiveDateTime,
    pub imdb_url: String,
}

impl Entity for Movie {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_data(&self) -> BTreeMap<String, String> {
        b_tree_map! {
            "title".into() => self.title.clone(),
            "release_date".into() => self.release_date.format("%Y-%m-%d").to_string(),
            "imdb_url".into() => self.imdb_url.clone(),
        }
    }
}

impl Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Movie movie_id={} title={} release date={}>",
            self.id, self.title, self.release_date
        )
    }
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "movies"]
pub struct NewMovie<'a> {
    pub title: &'a str,
    pub release_date: NaiveDateTime,
    pub imdb_url: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[table_name = "movies"]
pub struct SeededMovie {
    pub id: i32,
    pub title: String,
    pub release_date: NaiveDateTime,
    pub imdb_url: String,
}
