// catalog_query/src/statement.rs

use tracing::{event, Level};

use crate::builder::{Predicate, PRODUCT_COLUMNS, PRODUCT_SOURCE};
use crate::filter::{Pagination, ProductFilter};
use crate::product::{NewProduct, ProductId};
use crate::value::SqlValue;

/// SQL text with positional placeholders and the values bound to them, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
  sql: String,
  params: Vec<SqlValue>,
}

impl Statement {
  fn new(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
    Self { sql: sql.into(), params }
  }

  pub fn sql(&self) -> &str {
    &self.sql
  }

  pub fn params(&self) -> &[SqlValue] {
    &self.params
  }

  pub fn into_parts(self) -> (String, Vec<SqlValue>) {
    (self.sql, self.params)
  }

  fn and(mut self, predicate: Predicate) -> Self {
    let (condition, params) = predicate.into_parts();
    self.sql.push_str(" AND ");
    self.sql.push_str(condition);
    self.params.extend(params);
    self
  }

  fn paginate(mut self, pagination: Pagination) -> Self {
    self.sql.push_str(" LIMIT ? OFFSET ?");
    self.params.push(SqlValue::Int(pagination.limit));
    self.params.push(SqlValue::Int(pagination.offset));
    self
  }

  /// Filtered product listing. `WHERE 1=1` lets every predicate be appended
  /// as `AND ...`; pagination, when active, is always the last clause.
  pub fn select_products(filter: &ProductFilter) -> Self {
    let base = Statement::new(format!("SELECT {} {} WHERE 1=1", PRODUCT_COLUMNS, PRODUCT_SOURCE), Vec::new());
    let filtered = filter.predicates().into_iter().fold(base, Statement::and);
    let statement = match filter.pagination {
      Some(pagination) => filtered.paginate(pagination),
      None => filtered,
    };
    event!(
      Level::TRACE,
      filters = filter.active_filter_count(),
      params = statement.params.len(),
      "Built product select statement"
    );
    statement
  }

  pub fn find_product(id: ProductId) -> Self {
    Statement::new(
      format!("SELECT {} {} WHERE p.id = ?", PRODUCT_COLUMNS, PRODUCT_SOURCE),
      vec![SqlValue::Int(id.get())],
    )
  }

  /// Insert binding the ten writable columns in schema order.
  pub fn insert_product(product: &NewProduct) -> Self {
    Statement::new(
      "INSERT INTO products \
       (name, description, price, category_id, size, gender, color, brand, availability, image_url) \
       VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
      vec![
        SqlValue::text(product.name.as_str()),
        SqlValue::text(product.description.as_str()),
        SqlValue::Decimal(product.price),
        SqlValue::Int(product.category_id),
        SqlValue::nullable_text(product.size.as_deref()),
        SqlValue::nullable_text(product.gender.as_deref()),
        SqlValue::nullable_text(product.color.as_deref()),
        SqlValue::nullable_text(product.brand.as_deref()),
        SqlValue::Bool(product.availability),
        SqlValue::nullable_text(product.image_url.as_deref()),
      ],
    )
  }

  pub fn delete_product(id: ProductId) -> Self {
    Statement::new("DELETE FROM products WHERE id = ?", vec![SqlValue::Int(id.get())])
  }

  /// Number of `?` placeholders in the SQL text.
  pub fn placeholder_count(&self) -> usize {
    self.sql.matches('?').count()
  }
}
