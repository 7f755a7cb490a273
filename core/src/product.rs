// catalog_query/src/product.rs

use rust_decimal::Decimal;
use std::fmt;

use crate::error::{QueryError, QueryResult};

/// A validated product id taken from a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(i64);

impl ProductId {
  pub fn parse(raw: &str) -> QueryResult<Self> {
    raw
      .trim()
      .parse::<i64>()
      .map(ProductId)
      .map_err(|_| QueryError::InvalidId { raw: raw.to_string() })
  }

  pub fn get(self) -> i64 {
    self.0
  }
}

impl From<i64> for ProductId {
  fn from(id: i64) -> Self {
    ProductId(id)
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Unvalidated creation input. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<Decimal>,
  pub category_id: Option<i64>,
  pub size: Option<String>,
  pub gender: Option<String>,
  pub color: Option<String>,
  pub brand: Option<String>,
  pub availability: bool,
  pub image_url: Option<String>,
}

/// A product ready to insert: the four required fields are present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub category_id: i64,
  pub size: Option<String>,
  pub gender: Option<String>,
  pub color: Option<String>,
  pub brand: Option<String>,
  pub availability: bool,
  pub image_url: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

impl NewProduct {
  /// Empty strings count as missing for required fields; empty optional
  /// strings become `None`. Numeric fields are only checked for presence:
  /// whether a zero counts as missing depends on how it was sent, which the
  /// caller decides when building the draft.
  pub fn validate(draft: ProductDraft) -> QueryResult<Self> {
    let name = non_empty(draft.name);
    let description = non_empty(draft.description);
    let price = draft.price;
    let category_id = draft.category_id;

    match (name, description, price, category_id) {
      (Some(name), Some(description), Some(price), Some(category_id)) => Ok(Self {
        name,
        description,
        price,
        category_id,
        size: non_empty(draft.size),
        gender: non_empty(draft.gender),
        color: non_empty(draft.color),
        brand: non_empty(draft.brand),
        availability: draft.availability,
        image_url: non_empty(draft.image_url),
      }),
      (name, description, price, category_id) => {
        let fields = [
          ("name", name.is_none()),
          ("description", description.is_none()),
          ("price", price.is_none()),
          ("category_id", category_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect();
        Err(QueryError::MissingRequiredFields { fields })
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  fn complete_draft() -> ProductDraft {
    ProductDraft {
      name: Some("Racing Goggles".to_string()),
      description: Some("Anti-fog lenses".to_string()),
      price: Some(Decimal::from_str("24.90").unwrap()),
      category_id: Some(2),
      ..ProductDraft::default()
    }
  }

  #[test]
  fn parses_integer_ids() {
    assert_eq!(ProductId::parse("42").unwrap().get(), 42);
    assert_eq!(ProductId::parse("-1").unwrap().get(), -1);
  }

  #[test]
  fn rejects_non_integer_ids() {
    for raw in ["abc", "", "1.5", "12abc"] {
      assert_eq!(
        ProductId::parse(raw),
        Err(QueryError::InvalidId { raw: raw.to_string() })
      );
    }
  }

  #[test]
  fn complete_draft_validates() {
    let product = NewProduct::validate(complete_draft()).unwrap();
    assert_eq!(product.name, "Racing Goggles");
    assert_eq!(product.category_id, 2);
    assert!(!product.availability);
    assert_eq!(product.size, None);
  }

  #[test]
  fn missing_price_is_reported() {
    let draft = ProductDraft {
      price: None,
      ..complete_draft()
    };
    assert_eq!(
      NewProduct::validate(draft),
      Err(QueryError::MissingRequiredFields { fields: vec!["price"] })
    );
  }

  #[test]
  fn empty_and_absent_required_values_count_as_missing() {
    let draft = ProductDraft {
      name: Some(String::new()),
      price: None,
      category_id: None,
      ..complete_draft()
    };
    assert_eq!(
      NewProduct::validate(draft),
      Err(QueryError::MissingRequiredFields {
        fields: vec!["name", "price", "category_id"]
      })
    );
  }

  #[test]
  fn present_zero_price_is_accepted() {
    let draft = ProductDraft {
      price: Some(Decimal::ZERO),
      ..complete_draft()
    };
    assert_eq!(NewProduct::validate(draft).unwrap().price, Decimal::ZERO);
  }

  #[test]
  fn empty_optional_strings_become_none() {
    let draft = ProductDraft {
      size: Some(String::new()),
      brand: Some("Speedo".to_string()),
      image_url: Some(String::new()),
      ..complete_draft()
    };
    let product = NewProduct::validate(draft).unwrap();
    assert_eq!(product.size, None);
    assert_eq!(product.brand.as_deref(), Some("Speedo"));
    assert_eq!(product.image_url, None);
  }
}
