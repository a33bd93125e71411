use serde::{Deserialize, Serialize};

use crate::types::CityQuery;

/// Ordered list of city queries for a render pass. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityList {
    cities: Vec<CityQuery>,
}

impl CityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append trimmed user input. Blank input is ignored and returns `None`.
    pub fn add(&mut self, input: &str) -> Option<&CityQuery> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.cities.push(CityQuery::new(trimmed));
        self.cities.last()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityQuery> {
        self.cities.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CityList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for input in iter {
            list.add(input.as_ref());
        }
        list
    }
}

impl<'a> IntoIterator for &'a CityList {
    type Item = &'a CityQuery;
    type IntoIter = std::slice::Iter<'a, CityQuery>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}
