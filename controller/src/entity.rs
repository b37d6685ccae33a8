// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use prettytable::{cell, format::consts::FORMAT_NO_LINESEP, row, table, Table};
use std::collections::BTreeMap;
use std::fmt::Display;

pub trait Entity {
    type Id;

    fn get_id(&self) -> Self::Id;

    /// Displayable fields besides the id, keyed by column name
    fn get_data(&self) -> BTreeMap<String, String> {
        Default::default()
    }
}

pub trait ToTable {
    fn to_table(&self) -> Table;
}

impl<I: Display, E: Entity<Id = I>> ToTable for E {
    fn to_table(&self) -> Table {
        let mut table = table![["id", self.get_id()]];

        for (key, val) in self.get_data() {
            table.add_row(row![key, val]);
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}

impl<I: Display, S: Display> ToTable for [(I, S)] {
    fn to_table(&self) -> Table {
        let mut table = table![["movie", "score"]];

        for (movie, score) in self {
            table.add_row(row![movie, score]);
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}
