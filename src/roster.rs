use std::collections::BTreeSet;

use crate::error::SelectionError;

/// Literal tokens recognized in the consideration column.
const FAVORED: &str = "True";
const UNFAVORED: &str = "False";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub favored: bool,
}

/// A validated participant list, partitioned by consideration.
#[derive(Clone, Debug)]
pub struct Roster {
    entries: Vec<Participant>,
}

impl Roster {
    /// Validate an (N, 2) table of (name, consideration) cells. Checks run in
    /// a fixed order and the first failure wins: table shape, consideration
    /// values against the {"True", "False"} literal set, name uniqueness.
    pub fn parse(rows: &[Vec<String>]) -> Result<Self, SelectionError> {
        if rows.is_empty() {
            return Err(SelectionError::Shape { rows: 0, width: 0 });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != 2) {
            return Err(SelectionError::Shape {
                rows: rows.len(),
                width: row.len(),
            });
        }

        let distinct: BTreeSet<&str> = rows.iter().map(|row| row[1].as_str()).collect();
        if distinct.len() > 2 {
            return Err(SelectionError::TooManyCategories(
                distinct.into_iter().map(str::to_string).collect(),
            ));
        }
        let invalid: Vec<String> = distinct
            .iter()
            .filter(|value| **value != FAVORED && **value != UNFAVORED)
            .map(|value| value.to_string())
            .collect();
        if !invalid.is_empty() {
            return Err(SelectionError::InvalidCategory(invalid));
        }

        let mut seen = BTreeSet::new();
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            if !seen.insert(row[0].as_str()) {
                return Err(SelectionError::DuplicateName(row[0].clone()));
            }
            entries.push(Participant {
                name: row[0].clone(),
                favored: row[1] == FAVORED,
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Participant] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn favored_count(&self) -> usize {
        self.entries.iter().filter(|p| p.favored).count()
    }

    pub fn unfavored_count(&self) -> usize {
        self.len() - self.favored_count()
    }
}
