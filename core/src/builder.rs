// catalog_query/src/builder.rs

//! Predicate assembly for the filtered product query.
//!
//! A `Predicate` carries its SQL fragment together with the values for every
//! placeholder in that fragment, so appending a predicate to a statement can't
//! put the SQL and the parameter list out of step.

use crate::filter::{CategoryFilter, ProductFilter};
use crate::value::SqlValue;

/// Product columns plus the joined category name, in `Product` field order.
pub const PRODUCT_COLUMNS: &str = "p.id, p.name, p.description, p.price, p.category_id, p.size, p.gender, \
   p.color, p.brand, p.availability, p.image_url, c.name AS category_name";

/// `products` left-joined to `categories`, so orphaned products still show up.
pub(crate) const PRODUCT_SOURCE: &str = "FROM products p LEFT JOIN categories c ON p.category_id = c.id";

/// One `AND <condition>` clause with its bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
  condition: &'static str,
  params: Vec<SqlValue>,
}

impl Predicate {
  fn new(condition: &'static str, params: Vec<SqlValue>) -> Self {
    debug_assert_eq!(
      condition.matches('?').count(),
      params.len(),
      "placeholder count must match bound values for '{}'",
      condition
    );
    Self { condition, params }
  }

  fn equals_lowered(column_expr: &'static str, value: &str) -> Self {
    Predicate::new(column_expr, vec![SqlValue::text(value)])
  }

  pub fn condition(&self) -> &'static str {
    self.condition
  }

  pub fn params(&self) -> &[SqlValue] {
    &self.params
  }

  pub(crate) fn into_parts(self) -> (&'static str, Vec<SqlValue>) {
    (self.condition, self.params)
  }
}

impl ProductFilter {
  /// Predicates for every present filter, in the fixed order
  /// category, brand, gender, color, size, availability, search.
  pub fn predicates(&self) -> Vec<Predicate> {
    let category = self.category.as_ref().map(|category| match category {
      CategoryFilter::Id(id) => Predicate::new("p.category_id = ?", vec![SqlValue::Int(*id)]),
      CategoryFilter::Name(name) => Predicate::equals_lowered("LOWER(c.name) = ?", name),
    });
    let brand = self.brand.as_deref().map(|v| Predicate::equals_lowered("LOWER(p.brand) = ?", v));
    let gender = self.gender.as_deref().map(|v| Predicate::equals_lowered("LOWER(p.gender) = ?", v));
    let color = self.color.as_deref().map(|v| Predicate::equals_lowered("LOWER(p.color) = ?", v));
    let size = self.size.as_deref().map(|v| Predicate::equals_lowered("LOWER(p.size) = ?", v));
    let availability = self
      .availability
      .map(|available| Predicate::new("p.availability = ?", vec![SqlValue::Bool(available)]));
    let search = self.search.as_deref().map(|term| {
      Predicate::new(
        "(LOWER(p.name) LIKE ? OR LOWER(p.description) LIKE ?)",
        vec![SqlValue::text(term), SqlValue::text(term)],
      )
    });

    [category, brand, gender, color, size, availability, search]
      .into_iter()
      .flatten()
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::filter::FilterInput;

  #[test]
  fn no_filters_yield_no_predicates() {
    assert!(ProductFilter::default().predicates().is_empty());
  }

  #[test]
  fn predicates_follow_fixed_order_regardless_of_input() {
    let filter = ProductFilter::from_input(&FilterInput {
      search: Some("fins".to_string()),
      size: Some("M".to_string()),
      category: Some("Shoes".to_string()),
      availability: Some("true".to_string()),
      ..FilterInput::default()
    });

    let conditions: Vec<&str> = filter.predicates().iter().map(Predicate::condition).collect();
    assert_eq!(
      conditions,
      vec![
        "LOWER(c.name) = ?",
        "LOWER(p.size) = ?",
        "p.availability = ?",
        "(LOWER(p.name) LIKE ? OR LOWER(p.description) LIKE ?)",
      ]
    );
  }

  #[test]
  fn search_binds_the_same_term_twice() {
    let filter = ProductFilter {
      search: Some("%blue%".to_string()),
      ..ProductFilter::default()
    };
    let predicates = filter.predicates();
    assert_eq!(predicates.len(), 1);
    assert_eq!(
      predicates[0].params(),
      &[SqlValue::text("%blue%"), SqlValue::text("%blue%")]
    );
  }

  #[test]
  fn category_id_binds_an_integer() {
    let filter = ProductFilter {
      category: Some(CategoryFilter::Id(3)),
      ..ProductFilter::default()
    };
    let predicates = filter.predicates();
    assert_eq!(predicates[0].condition(), "p.category_id = ?");
    assert_eq!(predicates[0].params(), &[SqlValue::Int(3)]);
  }
}
