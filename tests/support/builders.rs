// tests/support/builders.rs
use serde_json::{Value, json};

/// Paragraph long enough to pass the content length check.
pub fn long_content(topic: &str) -> String {
    format!(
        "<h2>{topic}</h2><p>{}</p>",
        "Accessible interfaces work for everyone who visits them. ".repeat(4)
    )
}

/// JSON body for `POST /api/posts` / `PUT /api/posts/{slug}`.
pub struct PostBodyBuilder {
    body: Value,
}

impl PostBodyBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            body: json!({
                "title": title,
                "content": long_content(title),
                "author_name": "Sarah Johnson",
                "tags": ["accessibility", "testing"],
                "category": "Accessibility",
                "featured": false,
                "published": true
            }),
        }
    }

    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.body[key] = value;
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        if let Some(map) = self.body.as_object_mut() {
            map.remove(key);
        }
        self
    }

    pub fn draft(self) -> Self {
        self.set("published", Value::Bool(false))
    }

    pub fn featured(self) -> Self {
        self.set("featured", Value::Bool(true))
    }

    pub fn build(self) -> Value {
        self.body
    }
}
