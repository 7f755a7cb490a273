// catalog_query/src/filter.rs

//! Coercion of raw, optional request inputs into a typed `ProductFilter`.
//!
//! An absent input never constrains the result. Empty strings count as absent
//! for every filter except availability, whose mere presence activates it.

/// Raw filter inputs exactly as they arrive in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
  pub category: Option<String>,
  pub brand: Option<String>,
  pub gender: Option<String>,
  pub color: Option<String>,
  pub size: Option<String>,
  pub availability: Option<String>,
  pub search: Option<String>,
  pub page: Option<String>,
  pub limit: Option<String>,
}

/// Category filter, dispatched on whether the raw value is numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
  Id(i64),
  /// Lower-cased category name.
  Name(String),
}

impl CategoryFilter {
  /// Any finite number is an id, truncated to its leading integer part
  /// (`"3.5"` is id 3). A category whose name is itself numeric can't be
  /// selected by name.
  pub fn parse(raw: &str) -> Self {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
      Ok(number) if number.is_finite() => {
        CategoryFilter::Id(leading_integer(trimmed).unwrap_or(number.trunc() as i64))
      }
      _ => CategoryFilter::Name(raw.to_lowercase()),
    }
  }
}

/// Optional sign followed by the leading run of digits, e.g. `"-12.7e1"` -> -12.
fn leading_integer(raw: &str) -> Option<i64> {
  let unsigned = raw.trim_start_matches(['+', '-']);
  let sign_len = raw.len() - unsigned.len();
  let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
  if digits == 0 || sign_len > 1 {
    return None;
  }
  raw[..sign_len + digits].parse::<i64>().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  pub limit: i64,
  pub offset: i64,
}

impl Pagination {
  /// Both `page` and `limit` must be positive integers, otherwise no pagination.
  pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Option<Self> {
    let page = parse_positive(page?)?;
    let limit = parse_positive(limit?)?;
    let offset = (page - 1).checked_mul(limit)?;
    Some(Self { limit, offset })
  }
}

fn parse_positive(raw: &str) -> Option<i64> {
  raw.trim().parse::<i64>().ok().filter(|value| *value > 0)
}

fn present(raw: &Option<String>) -> Option<&str> {
  raw.as_deref().filter(|value| !value.is_empty())
}

/// Sanitized filter: string values are lower-cased, availability is a bool,
/// search is already wrapped in `%` wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
  pub category: Option<CategoryFilter>,
  pub brand: Option<String>,
  pub gender: Option<String>,
  pub color: Option<String>,
  pub size: Option<String>,
  pub availability: Option<bool>,
  pub search: Option<String>,
  pub pagination: Option<Pagination>,
}

impl ProductFilter {
  pub fn from_input(input: &FilterInput) -> Self {
    let lowered = |raw: &Option<String>| present(raw).map(str::to_lowercase);

    Self {
      category: present(&input.category).map(CategoryFilter::parse),
      brand: lowered(&input.brand),
      gender: lowered(&input.gender),
      color: lowered(&input.color),
      size: lowered(&input.size),
      availability: input.availability.as_deref().map(|value| value == "true"),
      search: input
        .search
        .as_deref()
        .filter(|term| !term.trim().is_empty())
        .map(|term| format!("%{}%", term.to_lowercase())),
      pagination: Pagination::from_raw(input.page.as_deref(), input.limit.as_deref()),
    }
  }

  /// Number of `AND` clauses this filter contributes.
  pub fn active_filter_count(&self) -> usize {
    [
      self.category.is_some(),
      self.brand.is_some(),
      self.gender.is_some(),
      self.color.is_some(),
      self.size.is_some(),
      self.availability.is_some(),
      self.search.is_some(),
    ]
    .iter()
    .filter(|present| **present)
    .count()
  }
}

impl From<&FilterInput> for ProductFilter {
  fn from(input: &FilterInput) -> Self {
    ProductFilter::from_input(input)
  }
}
