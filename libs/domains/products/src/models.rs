use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::error::{ProductError, ProductResult};

pub const NAME_REQUIRED: &str = "name required";
pub const PRICE_NOT_POSITIVE: &str = "price must be a positive number";
pub const DESCRIPTION_TOO_SHORT: &str = "description too short";
pub const AVAILABLE_NOT_BOOLEAN: &str = "available must be a boolean";

/// Order in which field rules are reported; the first failing field wins.
const FIELD_ORDER: [&str; 3] = ["name", "price", "description"];

/// Product entity as held in the catalog.
///
/// Seed files written with the legacy Spanish keys (`nombre`, `precio`,
/// `descripcion`, `disponible`, `fecha_ingreso`) deserialize through aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Repository-assigned identifier, never reused
    pub id: u64,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "precio")]
    pub price: f64,
    #[serde(alias = "descripcion")]
    pub description: String,
    #[serde(alias = "disponible", default = "default_available")]
    pub available: bool,
    /// Set once when the product enters the catalog
    #[serde(alias = "fecha_ingreso", default)]
    pub ingestion_timestamp: String,
}

/// Request body for `POST /productos`.
///
/// Fields are kept as raw JSON so type mismatches surface as the same
/// client-facing messages as missing or out-of-range values.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[serde(alias = "nombre")]
    #[schema(value_type = String, example = "Mouse")]
    pub name: Option<Value>,
    #[serde(alias = "precio")]
    #[schema(value_type = f64, example = 19.99)]
    pub price: Option<Value>,
    #[serde(alias = "descripcion")]
    #[schema(value_type = String, example = "Wireless optical mouse")]
    pub description: Option<Value>,
    /// Defaults to `true` when absent or not a boolean
    #[serde(alias = "disponible")]
    #[schema(value_type = Option<bool>)]
    pub available: Option<Value>,
}

/// Request body for `PUT /productos/{id}`. Every field is required.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[serde(alias = "nombre")]
    #[schema(value_type = String)]
    pub name: Option<Value>,
    #[serde(alias = "precio")]
    #[schema(value_type = f64)]
    pub price: Option<Value>,
    #[serde(alias = "descripcion")]
    #[schema(value_type = String)]
    pub description: Option<Value>,
    #[serde(alias = "disponible")]
    #[schema(value_type = bool)]
    pub available: Option<Value>,
}

/// Typed, checked product fields handed to the repository.
///
/// Values that had the wrong JSON type are coerced to something that fails
/// the matching rule, so the rule's message is what the client sees.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ProductFields {
    #[validate(length(min = 1, message = "name required"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "price must be a positive number"))]
    pub price: f64,
    #[validate(length(min = 10, message = "description too short"))]
    pub description: String,
    pub available: bool,
}

/// Response body for a successful update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductUpdated {
    pub message: String,
    pub product: Product,
}

/// Response body for a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDeleted {
    pub message: String,
    pub deleted_id: u64,
}

fn default_available() -> bool {
    true
}

fn text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

fn price(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(0.0)
}

impl CreateProduct {
    /// Convenience constructor used by tests and internal callers.
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            price: Some(Value::from(price)),
            description: Some(Value::String(description.into())),
            available: None,
        }
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(Value::Bool(available));
        self
    }

    /// Check the payload and turn it into [`ProductFields`].
    ///
    /// The description is measured and stored as sent, untrimmed.
    pub fn into_fields(self) -> ProductResult<ProductFields> {
        let fields = ProductFields {
            name: text(self.name.as_ref()).unwrap_or_default().trim().to_string(),
            price: price(self.price.as_ref()),
            description: text(self.description.as_ref())
                .unwrap_or_default()
                .to_string(),
            available: self
                .available
                .as_ref()
                .and_then(Value::as_bool)
                .unwrap_or(true),
        };

        fields.check()?;
        Ok(fields)
    }
}

impl UpdateProduct {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            price: Some(Value::from(price)),
            description: Some(Value::String(description.into())),
            available: Some(Value::Bool(available)),
        }
    }

    /// Check the payload and turn it into [`ProductFields`].
    ///
    /// Unlike create, the description is trimmed before its length is checked.
    /// `available` must be a real boolean and is checked last.
    pub fn into_fields(self) -> ProductResult<ProductFields> {
        let available = self.available.as_ref().and_then(Value::as_bool);
        let fields = ProductFields {
            name: text(self.name.as_ref()).unwrap_or_default().trim().to_string(),
            price: price(self.price.as_ref()),
            description: text(self.description.as_ref())
                .unwrap_or_default()
                .trim()
                .to_string(),
            available: available.unwrap_or_default(),
        };

        fields.check()?;
        if available.is_none() {
            return Err(ProductError::InvalidInput(AVAILABLE_NOT_BOOLEAN.to_string()));
        }
        Ok(fields)
    }
}

impl ProductFields {
    /// Run the field rules and report the first failing one.
    pub fn check(&self) -> ProductResult<()> {
        self.validate()
            .map_err(|errors| ProductError::InvalidInput(first_violation(&errors)))
    }
}

fn first_violation(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    FIELD_ORDER
        .iter()
        .find_map(|field| field_errors.get(*field))
        .and_then(|errs| errs.first())
        .and_then(|err| err.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| errors.to_string())
}

impl Product {
    /// Build a catalog entry from checked fields.
    pub fn new(id: u64, fields: ProductFields, ingestion_timestamp: String) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            description: fields.description,
            available: fields.available,
            ingestion_timestamp,
        }
    }

    /// Replace every mutable field, keeping `id` and `ingestion_timestamp`.
    pub fn apply_update(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.description = fields.description;
        self.available = fields.available;
    }
}
