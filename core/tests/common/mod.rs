// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use catalog_query::{FilterInput, ProductFilter, SqlValue, Statement};
use once_cell::sync::Lazy;
use tracing::Level;

// --- Input helpers ---

/// Builds a `FilterInput` from `(name, value)` pairs using the query-string names.
pub fn filter_input(pairs: &[(&str, &str)]) -> FilterInput {
  let mut input = FilterInput::default();
  for (name, value) in pairs {
    let slot = match *name {
      "kategorija" => &mut input.category,
      "brend" => &mut input.brand,
      "spol" => &mut input.gender,
      "boja" => &mut input.color,
      "velicina" => &mut input.size,
      "dostupnost" => &mut input.availability,
      "pretraga" => &mut input.search,
      "page" => &mut input.page,
      "limit" => &mut input.limit,
      other => panic!("unknown filter name {}", other),
    };
    *slot = Some(value.to_string());
  }
  input
}

pub fn select_for(pairs: &[(&str, &str)]) -> Statement {
  Statement::select_products(&ProductFilter::from_input(&filter_input(pairs)))
}

/// Conditions appended after the `WHERE 1=1` base predicate.
pub fn and_clauses(statement: &Statement) -> Vec<String> {
  let sql = statement.sql();
  let tail = sql
    .split_once("WHERE 1=1")
    .map(|(_, tail)| tail)
    .expect("select statement has a base predicate");
  let tail = tail.split(" LIMIT ").next().unwrap_or(tail);
  tail
    .split(" AND ")
    .map(str::trim)
    .filter(|clause| !clause.is_empty())
    .map(str::to_string)
    .collect()
}

pub fn text(value: &str) -> SqlValue {
  SqlValue::Text(value.to_string())
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
