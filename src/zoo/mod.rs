use log::debug;
use serde_json::Value;

use crate::zoo::{
    adapter::static_tables::{StaticTables, TableError},
    domain::Evaluator,
    port::tables::ReferenceTables,
};

pub mod adapter;
pub mod domain;
pub mod messages;
pub mod port;

pub fn default_evaluator() -> Result<Evaluator<StaticTables>, TableError> {
    Ok(Evaluator::new(StaticTables::zoo_default()?))
}

/// Answers one JSON request line with one JSON response.
pub fn handle_line<Tables: ReferenceTables>(evaluator: &Evaluator<Tables>, line: &str) -> Value {
    let request = serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|val| messages::Request::from_json(&val));

    let Some(request) = request else {
        debug!("malformed request: {line}");
        return messages::malformed_request();
    };

    let evaluation = evaluator.evaluate_json(&request.species, &request.quantity);
    messages::to_json(&evaluation)
}
