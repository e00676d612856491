mod model;
mod parser;

pub use model::{BaseElementRecord, ElementLookup};

use super::traits::ElementSource;
use crate::domain::{AtomError, TableResult};
use globset::{GlobBuilder, GlobMatcher};
use std::collections::HashMap;
use std::path::Path;

use parser::{parse_table_json, read_table_file, validate_records};

pub(crate) const BUNDLED_TABLE_JSON: &str = include_str!("../../../data/elements.json");
pub(crate) const BUNDLED_TABLE_ORIGIN: &str = "bundled";

/// Periodic table ordered by atomic number with name, symbol and proton indexes.
#[derive(Debug, Clone)]
pub struct ElementTable {
    records: Vec<BaseElementRecord>,
    by_name: HashMap<String, usize>,
    by_symbol: HashMap<String, usize>,
    by_protons: HashMap<u32, usize>,
}

impl ElementTable {
    pub fn bundled() -> TableResult<Self> {
        Self::from_json_str(BUNDLED_TABLE_JSON, BUNDLED_TABLE_ORIGIN)
    }

    pub fn from_json_str(source: &str, origin: &str) -> TableResult<Self> {
        Ok(Self::index(parse_table_json(source, origin)?))
    }

    pub fn from_json_path(path: &Path) -> TableResult<Self> {
        Ok(Self::index(read_table_file(path)?))
    }

    pub fn from_records(records: Vec<BaseElementRecord>) -> TableResult<Self> {
        validate_records(&records, "in-memory")?;
        Ok(Self::index(records))
    }

    fn index(mut records: Vec<BaseElementRecord>) -> Self {
        records.sort_by_key(|record| record.protons);

        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_symbol = HashMap::with_capacity(records.len());
        let mut by_protons = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            by_name.insert(record.name.clone(), index);
            by_symbol.insert(record.symbol.to_ascii_lowercase(), index);
            by_protons.insert(record.protons, index);
        }

        Self {
            records,
            by_name,
            by_symbol,
            by_protons,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BaseElementRecord> {
        self.records.iter()
    }

    pub fn first(&self) -> Option<&BaseElementRecord> {
        self.records.first()
    }

    pub fn by_name(&self, name: &str) -> Option<&BaseElementRecord> {
        self.by_name.get(name).map(|index| &self.records[*index])
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&BaseElementRecord> {
        self.by_symbol
            .get(&symbol.trim().to_ascii_lowercase())
            .map(|index| &self.records[*index])
    }

    pub fn by_protons(&self, protons: u32) -> Option<&BaseElementRecord> {
        self.by_protons.get(&protons).map(|index| &self.records[*index])
    }

    /// Resolves user input: exact name, then symbol, then case-insensitive name.
    pub fn find(&self, query: &str) -> Option<&BaseElementRecord> {
        let query = query.trim();
        self.by_name(query)
            .or_else(|| self.by_symbol(query))
            .or_else(|| {
                self.records
                    .iter()
                    .find(|record| record.name.eq_ignore_ascii_case(query))
            })
    }

    /// Case-insensitive substring search over names and symbols in table order.
    /// A blank term matches every record.
    pub fn search(&self, term: &str) -> Vec<&BaseElementRecord> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&needle)
                    || record.symbol.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Records whose name or symbol matches a case-insensitive glob.
    pub fn matching(&self, pattern: &str) -> TableResult<Vec<&BaseElementRecord>> {
        let matcher = compile_glob(pattern)?;
        Ok(self
            .records
            .iter()
            .filter(|record| matcher.is_match(&record.name) || matcher.is_match(&record.symbol))
            .collect())
    }

    /// Next record after `name`, wrapping to the first. Unknown names start
    /// from the beginning.
    pub fn next_after(&self, name: &str) -> Option<&BaseElementRecord> {
        if self.records.is_empty() {
            return None;
        }
        let next = match self.by_name.get(name) {
            Some(index) => (index + 1) % self.records.len(),
            None => 0,
        };
        self.records.get(next)
    }

    /// Previous record before `name`, wrapping to the last. Unknown names
    /// start from the end and yield the last record; the web selector lands
    /// on the second-to-last one there instead.
    pub fn previous_before(&self, name: &str) -> Option<&BaseElementRecord> {
        let count = self.records.len();
        if count == 0 {
            return None;
        }
        let previous = match self.by_name.get(name) {
            Some(index) => (index + count - 1) % count,
            None => count - 1,
        };
        self.records.get(previous)
    }

    /// Heaviest record with at most `protons` protons, else the first record.
    pub fn reset_target(&self, protons: u32) -> Option<&BaseElementRecord> {
        self.records
            .iter()
            .rev()
            .find(|record| record.protons <= protons)
            .or_else(|| self.records.first())
    }

    /// Lookup by atomic number that falls back to a placeholder.
    pub fn lookup_protons(&self, protons: u32) -> ElementLookup<'_> {
        match self.by_protons(protons) {
            Some(record) => ElementLookup::Found(record),
            None => ElementLookup::Substituted(BaseElementRecord::placeholder(protons)),
        }
    }
}

impl ElementSource for ElementTable {
    fn element_by_name(&self, name: &str) -> Option<&BaseElementRecord> {
        self.by_name(name)
    }

    fn element_by_protons(&self, protons: u32) -> Option<&BaseElementRecord> {
        self.by_protons(protons)
    }
}

fn compile_glob(pattern: &str) -> TableResult<GlobMatcher> {
    GlobBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|error| {
            AtomError::input_validation(
                "INPUT.TABLE_PATTERN",
                format!("invalid element pattern '{}': {}", pattern, error),
            )
        })
}
