// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

//! Loaders for the MovieLens 100k files: `u.user`, `u.item` and `u.data`.
//!
//! The files are latin-1 encoded, so every field is decoded lossily.

use crate::models::{movies::SeededMovie, ratings::NewRating, users::SeededUser};
use crate::schema::{movies, ratings, users};
use anyhow::{Context, Error};
use chrono::{NaiveDate, NaiveDateTime};
use csv::ByteRecord;
use diesel::sqlite::SqliteConnection;
use diesel::{insert_into, prelude::*};
use indicatif::ProgressIterator;
use std::collections::HashSet;
use std::io::Read;
use thiserror::Error as DError;

const CHUNK_SIZE: usize = 10_000;

#[derive(Debug, Clone, Eq, PartialEq, DError)]
pub enum SeedError {
    #[error("Missing field {0} on record {1}")]
    MissingField(usize, u64),
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct LoadSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Drop the trailing ` (YYYY)` MovieLens appends to titles
pub fn strip_year(title: &str) -> &str {
    let title = title.trim();

    match title.rfind(" (") {
        Some(pos)
            if title.len() - pos == 7
                && title.ends_with(')')
                && title
                    .get(pos + 2..pos + 6)
                    .map_or(false, |year| year.chars().all(|c| c.is_ascii_digit())) =>
        {
            &title[..pos]
        }
        _ => title,
    }
}

/// Parse release dates like `01-Jan-1995`
pub fn parse_release_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(raw.trim(), "%d-%b-%Y")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn read_records<R: Read>(reader: R, delimiter: u8) -> Vec<ByteRecord> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    csv.byte_records()
        .filter_map(|record| match record {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping unreadable record: {}", e);
                None
            }
        })
        .collect()
}

fn field(record: &ByteRecord, idx: usize) -> Result<String, SeedError> {
    let line = record.position().map_or(0, |pos| pos.line());
    let raw = record.get(idx).ok_or(SeedError::MissingField(idx, line))?;

    Ok(String::from_utf8_lossy(raw).trim().to_string())
}

fn optional<T: std::str::FromStr>(raw: &str) -> Option<T> {
    if raw.is_empty() {
        None
    } else {
        raw.parse().ok()
    }
}

/// Load `id|age|gender|occupation|zipcode` records
pub fn load_users<R: Read>(conn: &SqliteConnection, reader: R) -> Result<LoadSummary, Error> {
    let records = read_records(reader, b'|');
    let mut rows = Vec::with_capacity(records.len());

    for record in records.iter().progress() {
        let id: i32 = field(record, 0)?
            .parse()
            .with_context(|| format!("invalid user id in {:?}", record))?;
        let age: Option<i32> = optional(&field(record, 1)?);
        let zipcode = field(record, 4)?;

        rows.push((id, age, zipcode));
    }

    let users: Vec<_> = rows
        .iter()
        .map(|(id, age, zipcode)| SeededUser {
            id: *id,
            age: *age,
            zipcode: if zipcode.is_empty() {
                None
            } else {
                Some(zipcode.as_str())
            },
        })
        .collect();

    conn.transaction::<_, Error, _>(|| {
        for chunk in users.chunks(CHUNK_SIZE) {
            insert_into(users::table).values(chunk).execute(conn)?;
        }

        Ok(())
    })?;

    log::info!("Loaded {} users", users.len());
    Ok(LoadSummary {
        inserted: users.len(),
        skipped: 0,
    })
}

/// Load `id|title|release date|video release|imdb url|genres...` records,
/// movies without a release date are skipped
pub fn load_movies<R: Read>(conn: &SqliteConnection, reader: R) -> Result<LoadSummary, Error> {
    let records = read_records(reader, b'|');
    let mut movies = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records.iter().progress() {
        let id: i32 = field(record, 0)?
            .parse()
            .with_context(|| format!("invalid movie id in {:?}", record))?;
        let title = field(record, 1)?;

        let release_date = match parse_release_date(&field(record, 2)?) {
            Some(date) => date,
            None => {
                log::warn!("Skipping movie({}) '{}' without release date", id, title);
                skipped += 1;
                continue;
            }
        };

        movies.push(SeededMovie {
            id,
            title: strip_year(&title).to_string(),
            release_date,
            imdb_url: field(record, 4)?,
        });
    }

    conn.transaction::<_, Error, _>(|| {
        for chunk in movies.chunks(CHUNK_SIZE) {
            insert_into(movies::table).values(chunk).execute(conn)?;
        }

        Ok(())
    })?;

    log::info!("Loaded {} movies, skipped {}", movies.len(), skipped);
    Ok(LoadSummary {
        inserted: movies.len(),
        skipped,
    })
}

/// Load tab separated `user movie score timestamp` records, ratings for
/// users or movies not in the database are skipped
pub fn load_ratings<R: Read>(conn: &SqliteConnection, reader: R) -> Result<LoadSummary, Error> {
    let known_users: HashSet<i32> = users::table
        .select(users::id)
        .load::<i32>(conn)?
        .into_iter()
        .collect();
    let known_movies: HashSet<i32> = movies::table
        .select(movies::id)
        .load::<i32>(conn)?
        .into_iter()
        .collect();

    let records = read_records(reader, b'\t');
    let mut ratings = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records.iter().progress() {
        let user_id: i32 = field(record, 0)?
            .parse()
            .with_context(|| format!("invalid user id in {:?}", record))?;
        let movie_id: i32 = field(record, 1)?
            .parse()
            .with_context(|| format!("invalid movie id in {:?}", record))?;
        let score: i32 = field(record, 2)?
            .parse()
            .with_context(|| format!("invalid score in {:?}", record))?;

        if !known_users.contains(&user_id) || !known_movies.contains(&movie_id) {
            skipped += 1;
            continue;
        }

        ratings.push(NewRating {
            movie_id,
            user_id,
            score,
        });
    }

    log::info!("Pushing ratings by chunks");
    conn.transaction::<_, Error, _>(|| {
        for chunk in ratings.chunks(CHUNK_SIZE).progress() {
            insert_into(ratings::table).values(chunk).execute(conn)?;
        }

        Ok(())
    })?;

    log::info!("Loaded {} ratings, skipped {}", ratings.len(), skipped);
    Ok(LoadSummary {
        inserted: ratings.len(),
        skipped,
    })
}
