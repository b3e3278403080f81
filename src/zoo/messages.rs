use serde_json::{json, Value};

use super::domain::{types::ViableEnclosure, EvaluationError};

pub type Evaluation = Result<Vec<ViableEnclosure>, EvaluationError>;

#[derive(Debug, PartialEq)]
pub struct Request {
    pub species: String,
    pub quantity: Value,
}

impl Request {
    /// The quantity is kept raw so that the evaluator decides whether it is valid.
    pub fn from_json(val: &Value) -> Option<Self> {
        let species = val["species"].as_str()?;
        let quantity = val.get("quantity")?.clone();
        Some(Request {
            species: species.to_string(),
            quantity,
        })
    }

    #[cfg(test)]
    pub fn to_json(&self) -> Value {
        json!({"species": self.species, "quantity": self.quantity})
    }
}

/// One human readable line per viable enclosure, or the error message.
pub fn format_lines(evaluation: &Evaluation) -> Vec<String> {
    match evaluation {
        Ok(viable) => viable.iter().map(ViableEnclosure::to_string).collect(),
        Err(e) => vec![e.to_string()],
    }
}

pub fn to_json(evaluation: &Evaluation) -> Value {
    match evaluation {
        Ok(_) => json!({"viableEnclosures": format_lines(evaluation)}),
        Err(e) => json!({"error": e.to_string()}),
    }
}

pub fn malformed_request() -> Value {
    json!({"error": "malformed request"})
}
