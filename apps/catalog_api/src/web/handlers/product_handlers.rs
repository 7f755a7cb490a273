// apps/catalog_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog_query::{FilterInput, NewProduct, ProductDraft, ProductFilter, ProductId};
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Number, Value};
use std::str::FromStr;
use tracing::{error, info, instrument, warn};

use crate::db::products;
use crate::errors::{AppError, NOT_FOUND_MESSAGE};
use crate::models::Product;
use crate::state::AppState;

// --- Request DTOs ---

/// Query-string filters. Every field is optional and kept as raw text;
/// coercion happens in `ProductFilter::from_input`.
#[derive(Deserialize, Debug, Default)]
pub struct ListProductsQuery {
  pub kategorija: Option<String>,
  pub brend: Option<String>,
  pub spol: Option<String>,
  pub boja: Option<String>,
  pub velicina: Option<String>,
  pub pretraga: Option<String>,
  pub dostupnost: Option<String>,
  pub page: Option<String>,
  pub limit: Option<String>,
}

impl From<ListProductsQuery> for FilterInput {
  fn from(query: ListProductsQuery) -> Self {
    FilterInput {
      category: query.kategorija,
      brand: query.brend,
      gender: query.spol,
      color: query.boja,
      size: query.velicina,
      availability: query.dostupnost,
      search: query.pretraga,
      page: query.page,
      limit: query.limit,
    }
  }
}

#[derive(Deserialize, Debug, Default)]
pub struct CreateProductPayload {
  pub naziv: Option<String>,
  pub opis: Option<String>,
  #[serde(default, deserialize_with = "truthy_decimal")]
  pub cijena: Option<Decimal>,
  #[serde(default, deserialize_with = "truthy_integer")]
  pub kategorija_id: Option<i64>,
  pub velicina: Option<String>,
  pub spol: Option<String>,
  pub boja: Option<String>,
  pub brend: Option<String>,
  /// Any JSON value; coerced by truthiness.
  pub dostupnost: Option<Value>,
  #[serde(rename = "slikaUrl", alias = "imageUrl")]
  pub slika_url: Option<String>,
}

/// Numeric body fields may arrive as JSON numbers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
  Number(Number),
  Text(String),
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
  Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)).ok()
}

// A numeric zero is falsy and reads as missing; the string "0" is truthy and kept.
fn truthy_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
  match Option::<NumberOrText>::deserialize(deserializer)? {
    None => Ok(None),
    Some(NumberOrText::Number(n)) => {
      let price = parse_decimal(&n.to_string()).ok_or_else(|| D::Error::custom(format!("invalid price {}", n)))?;
      Ok((!price.is_zero()).then_some(price))
    }
    Some(NumberOrText::Text(s)) if s.is_empty() => Ok(None),
    Some(NumberOrText::Text(s)) => parse_decimal(s.trim())
      .map(Some)
      .ok_or_else(|| D::Error::custom(format!("invalid price '{}'", s))),
  }
}

fn truthy_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
  match Option::<NumberOrText>::deserialize(deserializer)? {
    None => Ok(None),
    Some(NumberOrText::Number(n)) => {
      let id = n
        .as_i64()
        .or_else(|| n.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0).map(|f| f as i64))
        .ok_or_else(|| D::Error::custom(format!("invalid integer {}", n)))?;
      Ok((id != 0).then_some(id))
    }
    Some(NumberOrText::Text(s)) if s.is_empty() => Ok(None),
    Some(NumberOrText::Text(s)) => s
      .trim()
      .parse::<i64>()
      .map(Some)
      .map_err(|_| D::Error::custom(format!("invalid integer '{}'", s))),
  }
}

/// `null`, `false`, `0` and `""` are false; everything else is true.
pub fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

impl From<CreateProductPayload> for ProductDraft {
  fn from(payload: CreateProductPayload) -> Self {
    ProductDraft {
      name: payload.naziv,
      description: payload.opis,
      price: payload.cijena,
      category_id: payload.kategorija_id,
      size: payload.velicina,
      gender: payload.spol,
      color: payload.boja,
      brand: payload.brend,
      availability: payload.dostupnost.as_ref().map_or(false, is_truthy),
      image_url: payload.slika_url,
    }
  }
}

fn found_or_not_found(product: Option<Product>, product_id: ProductId) -> Result<Product, AppError> {
  product.ok_or_else(|| {
    warn!("Product with ID {} not found.", product_id);
    AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
  })
}

// Zero affected rows means there was nothing with that id.
fn deleted_or_not_found(deleted: bool, product_id: ProductId) -> Result<(), AppError> {
  if deleted {
    Ok(())
  } else {
    warn!("Product with ID {} not found for deletion.", product_id);
    Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
  }
}

// --- Handler Implementations ---

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let filter = ProductFilter::from_input(&FilterInput::from(query_params.into_inner()));
  info!(
    filters = filter.active_filter_count(),
    paginated = filter.pagination.is_some(),
    "Listing products."
  );

  let products = products::list_products(&app_state.db_pool, &filter).await.map_err(|e| {
    error!("Failed to fetch products from database: {}", e);
    AppError::Sqlx(e)
  })?;

  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(raw_id = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  // Validated before the pool is touched.
  let product_id = ProductId::parse(&path.into_inner())?;

  let product = products::find_product(&app_state.db_pool, product_id).await.map_err(|e| {
    error!("Database error while fetching product {}: {}", product_id, e);
    AppError::Sqlx(e)
  })?;

  let product = found_or_not_found(product, product_id)?;
  info!("Product {} fetched successfully.", product_id);
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product = NewProduct::validate(ProductDraft::from(payload.into_inner()))?;

  let id = products::insert_product(&app_state.db_pool, &product).await.map_err(|e| {
    error!("Failed to insert product '{}': {}", product.name, e);
    AppError::Sqlx(e)
  })?;

  info!(product_id = id, "Product created.");
  Ok(HttpResponse::Created().json(json!({
      "message": "Proizvod uspješno dodan.",
      "id": id,
      "imageUrl": product.image_url
  })))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(raw_id = %path.as_str()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId::parse(&path.into_inner())?;

  let deleted = products::delete_product(&app_state.db_pool, product_id).await.map_err(|e| {
    error!("Failed to delete product {}: {}", product_id, e);
    AppError::Sqlx(e)
  })?;

  deleted_or_not_found(deleted, product_id)?;

  info!("Product {} deleted.", product_id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Proizvod je obrisan" })))
}
