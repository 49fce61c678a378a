use serde_json::Value;

use crate::types::{Action, TestCase};

/// Wire names accepted as action keys. A step whose key is not in this
/// list is rejected before payload decoding so the caller gets the
/// offending name back, not a serde variant error.
const KNOWN_ACTIONS: [&str; 11] = [
    "SET_SPEED",
    "APPLY_BRAKE",
    "ACC_ON",
    "ACC_OFF",
    "LANE_CHANGE_LEFT",
    "LANE_CHANGE_RIGHT",
    "INDICATOR_LEFT",
    "INDICATOR_RIGHT",
    "DISABLE_RADAR",
    "DISABLE_CAMERA",
    "DISABLE_LIDAR",
];

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Suite document has no 'tests' array")]
    MissingTests,

    #[error("Unsupported test case shape at index {index}: expected an object with a 'steps' array")]
    UnsupportedCase { index: usize },

    #[error("Test case '{case}' step {index}: expected exactly one action key, found {found}")]
    MalformedStep {
        case: String,
        index: usize,
        found: usize,
    },

    #[error("Test case '{case}' step {index}: unknown action '{action}'")]
    UnknownAction {
        case: String,
        index: usize,
        action: String,
    },

    #[error("Test case '{case}' step {index}: invalid parameters for '{action}': {source}")]
    InvalidParams {
        case: String,
        index: usize,
        action: String,
        source: serde_json::Error,
    },
}

/// Parse a suite document of the form
/// `{"tests": [{"id": "t01", "steps": [{"SET_SPEED": {"value": 80}}, ...]}, ...]}`.
///
/// Malformed input is fatal: there is no safe default reading of a step
/// with zero or multiple action keys. A case without an `id` gets a
/// generated `case_<n>` identifier (1-based).
pub fn parse_suite(json: &str) -> Result<Vec<TestCase>, ParseError> {
    let doc: Value = serde_json::from_str(json)?;
    let tests = doc
        .get("tests")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingTests)?;

    let mut cases = Vec::with_capacity(tests.len());
    for (idx, raw_case) in tests.iter().enumerate() {
        cases.push(parse_case(idx, raw_case)?);
    }
    Ok(cases)
}

fn parse_case(index: usize, raw: &Value) -> Result<TestCase, ParseError> {
    let obj = raw
        .as_object()
        .ok_or(ParseError::UnsupportedCase { index })?;

    let id = match obj.get("id").and_then(Value::as_str) {
        Some(id) => id.to_string(),
        None => format!("case_{}", index + 1),
    };

    let raw_steps = obj
        .get("steps")
        .and_then(Value::as_array)
        .ok_or(ParseError::UnsupportedCase { index })?;

    let mut steps = Vec::with_capacity(raw_steps.len());
    for (step_idx, raw_step) in raw_steps.iter().enumerate() {
        steps.push(parse_step(&id, step_idx, raw_step)?);
    }

    Ok(TestCase { id, steps })
}

/// Decode one step from its wire form, enforcing the single-action-key
/// shape before handing the object to serde.
pub fn parse_step(case: &str, index: usize, raw: &Value) -> Result<Action, ParseError> {
    let obj = raw.as_object().ok_or_else(|| ParseError::MalformedStep {
        case: case.to_string(),
        index,
        found: 0,
    })?;

    if obj.len() != 1 {
        return Err(ParseError::MalformedStep {
            case: case.to_string(),
            index,
            found: obj.len(),
        });
    }

    let action_key = obj.keys().next().expect("single key checked above");
    if !KNOWN_ACTIONS.contains(&action_key.as_str()) {
        return Err(ParseError::UnknownAction {
            case: case.to_string(),
            index,
            action: action_key.clone(),
        });
    }

    serde_json::from_value(raw.clone()).map_err(|source| ParseError::InvalidParams {
        case: case.to_string(),
        index,
        action: action_key.clone(),
        source,
    })
}
