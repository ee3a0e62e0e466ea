//! JSON output formatting for repflow.

use serde::Serialize;
use serde_json::json;

use crate::error::RepflowError;
use crate::plan::ExerciseSpec;

/// Format any serializable value as pretty JSON.
///
/// # Errors
///
/// Returns `RepflowError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RepflowError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format the exercise plan as JSON.
///
/// # Errors
///
/// Returns `RepflowError::Json` if serialization fails.
pub fn format_plan_json(plan: &[ExerciseSpec], source: &str) -> Result<String, RepflowError> {
    let output = json!({
        "source": source,
        "count": plan.len(),
        "exercises": plan
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::default_plan;

    #[test]
    fn test_format_plan_json() {
        let plan = default_plan();
        let output = format_plan_json(&plan, "default").unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["source"], "default");
        assert_eq!(parsed["count"], plan.len());
        assert_eq!(parsed["exercises"][0]["name"], "Jumping Jacks");
        assert_eq!(parsed["exercises"][0]["section"], "warmup");
    }
}
