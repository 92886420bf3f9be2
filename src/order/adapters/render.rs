//! Plain document renderer for printing an order.

use chrono::{DateTime, Utc};
use minijinja::Environment;
use serde_json::{Map, Value, json};

use crate::order::{
    domain::Order,
    ports::{OrderRenderer, RenderError},
};

const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

const ORDER_DOCUMENT_TEMPLATE: &str = "\
Order {{ number }}
Customer: {{ customer }}
Address: {{ address }}
Tenant: {{ tenant }}
Phone: {{ phone }}
Email: {{ email }}
Problem:
{{ problem }}
Status: {{ status }}
Importance: {{ importance }}
Created: {{ created_at }}
{% if appointment %}Appointment: {{ appointment }}
{% endif %}{% if attachments %}Files:
{% for file in attachments %}- {{ file }}
{% endfor %}{% endif %}{% if comments %}Comments:
{% for comment in comments %}{{ comment.author }} - {{ comment.created_at }}
{{ comment.text }}
{% endfor %}{% endif %}";

/// Renders an order as an unstyled text document using a `minijinja`
/// template.
#[derive(Debug, Clone)]
pub struct PlainDocumentRenderer {
    template: String,
}

impl PlainDocumentRenderer {
    /// Creates a renderer with the built-in document template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: ORDER_DOCUMENT_TEMPLATE.to_owned(),
        }
    }

    /// Creates a renderer with a custom template.
    ///
    /// The template sees the same context as the built-in one.
    #[must_use]
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Default for PlainDocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRenderer for PlainDocumentRenderer {
    fn render(&self, order: &Order) -> Result<String, RenderError> {
        let environment = Environment::new();
        environment
            .render_str(&self.template, build_document_context(order))
            .map_err(|error| RenderError(error.to_string()))
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

fn build_document_context(order: &Order) -> Map<String, Value> {
    let comments: Vec<Value> = order
        .comments()
        .iter()
        .map(|comment| {
            json!({
                "author": comment.author(),
                "text": comment.text(),
                "created_at": format_timestamp(comment.created_at()),
            })
        })
        .collect();

    let mut context = Map::new();
    context.insert("number".to_owned(), json!(order.number().to_string()));
    context.insert("customer".to_owned(), json!(order.customer()));
    context.insert("address".to_owned(), json!(order.address()));
    context.insert("tenant".to_owned(), json!(order.tenant()));
    context.insert("phone".to_owned(), json!(order.phone()));
    context.insert("email".to_owned(), json!(order.email()));
    context.insert("problem".to_owned(), json!(order.problem()));
    context.insert("status".to_owned(), json!(order.status().label()));
    context.insert("importance".to_owned(), json!(order.importance().as_str()));
    context.insert(
        "created_at".to_owned(),
        json!(format_timestamp(order.created_at())),
    );
    context.insert(
        "appointment".to_owned(),
        order
            .appointment()
            .map_or(Value::Null, |appointment| json!(format_timestamp(appointment))),
    );
    context.insert("attachments".to_owned(), json!(order.attachments()));
    context.insert("comments".to_owned(), Value::Array(comments));
    context
}
