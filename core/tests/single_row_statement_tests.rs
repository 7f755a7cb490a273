// tests/single_row_statement_tests.rs
mod common;
use catalog_query::{NewProduct, ProductDraft, ProductId, QueryError, SqlValue, Statement};
use common::*;
use rust_decimal::Decimal;

fn draft() -> ProductDraft {
  ProductDraft {
    name: Some("Blue Fins".to_string()),
    description: Some("Short training fins".to_string()),
    price: Some(Decimal::new(3999, 2)),
    category_id: Some(4),
    ..ProductDraft::default()
  }
}

#[test]
fn lookup_binds_the_id() {
  let statement = Statement::find_product(ProductId::parse("17").unwrap());
  assert!(statement.sql().ends_with("WHERE p.id = ?"));
  assert!(statement.sql().contains("LEFT JOIN categories"));
  assert_eq!(statement.params(), &[SqlValue::Int(17)]);
}

#[test]
fn delete_binds_the_id() {
  let statement = Statement::delete_product(ProductId::from(9));
  assert_eq!(statement.sql(), "DELETE FROM products WHERE id = ?");
  assert_eq!(statement.params(), &[SqlValue::Int(9)]);
}

#[test]
fn invalid_id_never_produces_a_statement() {
  let result = ProductId::parse("abc").map(Statement::find_product);
  assert_eq!(result, Err(QueryError::InvalidId { raw: "abc".to_string() }));
}

#[test]
fn insert_binds_all_columns_in_schema_order() {
  let product = NewProduct::validate(ProductDraft {
    size: Some("L".to_string()),
    brand: Some("Arena".to_string()),
    availability: true,
    ..draft()
  })
  .unwrap();
  let statement = Statement::insert_product(&product);

  assert!(statement
    .sql()
    .contains("(name, description, price, category_id, size, gender, color, brand, availability, image_url)"));
  assert_eq!(statement.placeholder_count(), 10);
  assert_eq!(
    statement.params(),
    &[
      text("Blue Fins"),
      text("Short training fins"),
      SqlValue::Decimal(Decimal::new(3999, 2)),
      SqlValue::Int(4),
      text("L"),
      SqlValue::Null,
      SqlValue::Null,
      text("Arena"),
      SqlValue::Bool(true),
      SqlValue::Null,
    ]
  );
}

#[test]
fn missing_price_is_rejected_before_any_statement_exists() {
  let result = NewProduct::validate(ProductDraft { price: None, ..draft() });
  match result {
    Err(QueryError::MissingRequiredFields { fields }) => assert_eq!(fields, vec!["price"]),
    other => panic!("Expected MissingRequiredFields, got {:?}", other),
  }
}
