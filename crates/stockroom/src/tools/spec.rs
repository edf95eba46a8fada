//! Structured tool descriptions with usage guidance.
//!
//! `ToolSpec` replaces free-form description strings with a purpose line
//! plus optional when-to-use guidance, examples and an output format. The
//! inventory tools rely on it to tell the agent, for instance, that
//! `add_item` expects `get_latest_id() + 1` as the new id.

use crate::ToolDef;

/// A structured tool specification.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool name (unique within a ToolSet).
    pub name: String,
    /// One-sentence purpose, e.g. "Search for items in the inventory".
    pub purpose: String,
    pub when_to_use: Option<String>,
    pub when_not_to_use: Option<String>,
    /// JSON Schema of the arguments object.
    pub parameters: serde_json::Value,
    /// `(call, result)` pairs.
    pub examples: Vec<(String, String)>,
    pub output_format: Option<String>,
}

impl ToolSpec {
    /// Start a spec with the two fields every tool needs.
    pub fn builder(name: impl Into<String>, purpose: impl Into<String>) -> ToolSpecBuilder {
        ToolSpecBuilder {
            spec: ToolSpec {
                name: name.into(),
                purpose: purpose.into(),
                when_to_use: None,
                when_not_to_use: None,
                parameters: serde_json::json!({"type": "object", "properties": {}}),
                examples: Vec::new(),
                output_format: None,
            },
        }
    }

    /// Render the rich description string sent to callers.
    pub fn to_description(&self) -> String {
        let mut desc = self.purpose.clone();
        if let Some(when) = &self.when_to_use {
            desc.push_str(&format!("\nWhen to use: {when}"));
        }
        if let Some(when_not) = &self.when_not_to_use {
            desc.push_str(&format!("\nWhen NOT to use: {when_not}"));
        }
        if !self.examples.is_empty() {
            desc.push_str("\nExamples:");
            for (call, result) in &self.examples {
                desc.push_str(&format!("\n  - {call} → {result}"));
            }
        }
        if let Some(format) = &self.output_format {
            desc.push_str(&format!("\nOutput format: {format}"));
        }
        desc
    }

    pub fn to_tool_def(&self) -> ToolDef {
        ToolDef::new(
            self.name.clone(),
            self.to_description(),
            self.parameters.clone(),
        )
    }
}

/// Builder for [`ToolSpec`].
pub struct ToolSpecBuilder {
    spec: ToolSpec,
}

impl ToolSpecBuilder {
    pub fn when_to_use(mut self, when: impl Into<String>) -> Self {
        self.spec.when_to_use = Some(when.into());
        self
    }

    pub fn when_not_to_use(mut self, when_not: impl Into<String>) -> Self {
        self.spec.when_not_to_use = Some(when_not.into());
        self
    }

    pub fn parameters(mut self, params: serde_json::Value) -> Self {
        self.spec.parameters = params;
        self
    }

    /// Derive the parameter schema from the Rust argument type, so schema and
    /// deserialization can never diverge.
    pub fn parameters_for<T: schemars::JsonSchema>(self) -> Self {
        self.parameters(crate::json_schema_for::<T>())
    }

    pub fn example(mut self, call: impl Into<String>, result: impl Into<String>) -> Self {
        self.spec.examples.push((call.into(), result.into()));
        self
    }

    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.spec.output_format = Some(format.into());
        self
    }

    /// Finish as a [`ToolDef`].
    pub fn to_tool_def(self) -> ToolDef {
        self.spec.to_tool_def()
    }
}
