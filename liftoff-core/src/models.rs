//! Record shapes for the three backend collections.
//!
//! Wire field names are fixed by the backend and partly Portuguese
//! (`categoria`, `email_fornecedor`, `valor`...); Rust-side names stay
//! English with `serde(rename)` pinning the wire spelling. Enumerated fields
//! are closed sets on input (the backend validates them too) but are kept as
//! plain strings on responses so an unexpected value still renders.

use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::client::Resource;
use crate::table::Tabular;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ProductCategory {
    #[serde(rename = "Eletrônico")]
    Eletronico,
    #[serde(rename = "Eletrodoméstico")]
    Eletrodomestico,
    #[serde(rename = "Móveis")]
    Moveis,
    #[serde(rename = "Roupas")]
    Roupas,
    #[serde(rename = "Calçados")]
    Calcados,
}

impl ProductCategory {
    /// Spelling the backend expects in request bodies.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Eletronico => "Eletrônico",
            Self::Eletrodomestico => "Eletrodoméstico",
            Self::Moveis => "Móveis",
            Self::Roupas => "Roupas",
            Self::Calcados => "Calçados",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    #[serde(rename = "Masculino")]
    Masculino,
    #[serde(rename = "Feminino")]
    Feminino,
    #[serde(rename = "Prefiro não dizer")]
    PrefiroNaoDizer,
}

impl Gender {
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Masculino => "Masculino",
            Self::Feminino => "Feminino",
            Self::PrefiroNaoDizer => "Prefiro não dizer",
        }
    }
}

/// Catalog of sellable plans; the sales records reference them by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SaleProduct {
    #[serde(rename = "ZapFlow com Gemini")]
    ZapflowGemini,
    #[serde(rename = "ZapFlow com chatGPT")]
    ZapflowChatgpt,
    #[serde(rename = "ZapFlow com Llama3.0")]
    ZapflowLlama,
}

impl SaleProduct {
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::ZapflowGemini => "ZapFlow com Gemini",
            Self::ZapflowChatgpt => "ZapFlow com chatGPT",
            Self::ZapflowLlama => "ZapFlow com Llama3.0",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "email_fornecedor")]
    pub supplier_email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: ProductCategory,
    #[serde(rename = "email_fornecedor")]
    pub supplier_email: String,
}

impl Resource for Product {
    const PATH: &'static str = "products";
    type Create = NewProduct;
}

impl Tabular for Product {
    fn columns() -> &'static [&'static str] {
        &["id", "name", "description", "price", "categoria", "email_fornecedor", "created_at"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            format!("{:.2}", self.price),
            self.category.clone(),
            self.supplier_email.clone(),
            self.created_at.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub hire_date: NaiveDate,
    pub department_id: i64,
    pub job_title: String,
    pub location: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub nationality: String,
    pub start_date: NaiveDate,
    pub salary: f64,
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub hire_date: NaiveDate,
    pub department_id: i64,
    pub job_title: String,
    pub location: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub nationality: String,
    pub start_date: NaiveDate,
    pub salary: f64,
}

impl Resource for Employee {
    const PATH: &'static str = "employees";
    type Create = NewEmployee;
}

impl Tabular for Employee {
    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "first_name",
            "last_name",
            "email",
            "phone_number",
            "hire_date",
            "department_id",
            "job_title",
            "location",
            "birth_date",
            "gender",
            "nationality",
            "start_date",
            "salary",
            "termination_date",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone_number.clone(),
            self.hire_date.to_string(),
            self.department_id.to_string(),
            self.job_title.clone(),
            self.location.clone(),
            self.birth_date.to_string(),
            self.gender.clone(),
            self.nationality.clone(),
            self.start_date.to_string(),
            format!("{:.2}", self.salary),
            self.termination_date.map(|d| d.to_string()).unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub email: String,
    /// Zone-less moment of sale; the backend stores it verbatim.
    #[serde(rename = "data")]
    pub sold_at: NaiveDateTime,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "produto")]
    pub product: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSale {
    pub email: String,
    #[serde(rename = "data")]
    pub sold_at: NaiveDateTime,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "produto")]
    pub product: SaleProduct,
}

impl Resource for Sale {
    const PATH: &'static str = "sales";
    type Create = NewSale;
}

impl Tabular for Sale {
    fn columns() -> &'static [&'static str] {
        &["id", "email", "data", "valor", "quantidade", "produto", "created_at"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.email.clone(),
            self.sold_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            format!("{:.2}", self.value),
            self.quantity.to_string(),
            self.product.clone(),
            self.created_at.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_product_uses_backend_field_names() {
        let body = NewProduct {
            name: "Widget".into(),
            description: "A widget".into(),
            price: 19.9,
            category: ProductCategory::Moveis,
            supplier_email: "supplier@example.com".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "name": "Widget",
                "description": "A widget",
                "price": 19.9,
                "categoria": "Móveis",
                "email_fornecedor": "supplier@example.com",
            })
        );
    }

    #[test]
    fn new_sale_serializes_zoneless_timestamp() {
        let sold_at = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let body = NewSale {
            email: "seller@example.com".into(),
            sold_at,
            value: 150.0,
            quantity: 2,
            product: SaleProduct::ZapflowGemini,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["data"], json!("2024-03-01T09:00:00"));
        assert_eq!(value["produto"], json!("ZapFlow com Gemini"));
        assert_eq!(value["quantidade"], json!(2));
    }

    #[test]
    fn product_response_accepts_unknown_category_spelling() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Widget",
            "description": "",
            "price": 10.0,
            "categoria": "Descontinuado",
            "email_fornecedor": "s@example.com",
            "created_at": "2024-03-01T09:00:00",
        }))
        .unwrap();
        assert_eq!(product.category, "Descontinuado");
        assert_eq!(product.created_at.as_deref(), Some("2024-03-01T09:00:00"));
    }

    #[test]
    fn wire_names_match_backend_catalog() {
        assert_eq!(ProductCategory::Eletronico.wire_name(), "Eletrônico");
        assert_eq!(Gender::PrefiroNaoDizer.wire_name(), "Prefiro não dizer");
        assert_eq!(SaleProduct::ZapflowLlama.wire_name(), "ZapFlow com Llama3.0");
    }
}
