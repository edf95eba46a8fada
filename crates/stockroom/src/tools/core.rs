//! Tool abstraction for agent function-calling.
//!
//! The [`Tool`] trait defines the interface that every tool implements: a
//! static API definition (name, description, JSON schema) and an async
//! `execute` method. Tools are collected into a [`ToolSet`] which handles
//! dispatch, argument validation, timeouts and result truncation.

use crate::ToolDef;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// Maximum size (in bytes) for tool output before truncation.
pub const DEFAULT_MAX_RESULT_BYTES: usize = 30_000;

/// Default timeout for tool execution.
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(30);

/// Prefix shared by every error result.
pub const ERROR_PREFIX: &str = "Error:";

/// Boxed future returned by [`Tool::execute`].
pub type ToolFuture<'a> = Pin<Box<dyn Future<Output = String> + Send + 'a>>;

// ── Tool trait ─────────────────────────────────────────────────────

/// A tool that a calling agent can invoke by name.
///
/// Implementors provide:
/// - A static definition ([`Tool::definition`]) with the tool's name,
///   description, and JSON Schema parameters.
/// - An async [`Tool::execute`] method that receives the raw JSON arguments
///   string and returns a result string.
///
/// # Example
///
/// ```ignore
/// struct GetAllItems { store: Arc<InventoryStore> }
///
/// impl Tool for GetAllItems {
///     fn definition(&self) -> ToolDef { /* ... */ }
///
///     fn execute(&self, _arguments: &str) -> ToolFuture<'_> {
///         let items = self.store.all_items();
///         Box::pin(async move { to_json_result(&items) })
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// The tool definition advertised to callers.
    fn definition(&self) -> ToolDef;

    /// Execute the tool with the given raw JSON arguments string.
    ///
    /// Failures are returned as `"Error: ..."` strings rather than panicking;
    /// the caller receives the string as the tool result either way.
    fn execute(&self, arguments: &str) -> ToolFuture<'_>;

    /// The tool's name (delegates to the definition).
    fn name(&self) -> String {
        self.definition().function.name.clone()
    }

    /// Whether this tool changes inventory state. Defaults to `false`.
    fn is_mutation(&self) -> bool {
        false
    }

    /// Whether [`ToolSet`] may cut long results to its byte limit. Tools
    /// whose result is only meaningful whole (a JSON listing) return `false`.
    fn truncatable(&self) -> bool {
        true
    }
}

// ── ToolSet ────────────────────────────────────────────────────────

/// A collection of tools that can be dispatched by name.
///
/// # Example
///
/// ```ignore
/// let tools = ToolSet::new()
///     .with_max_result_bytes(15_000)
///     .with_arg_validation(true)
///     .with_default_timeout(Some(Duration::from_secs(10)))
///     .with_inventory_tools(store);
///
/// let defs = tools.definitions();
/// let result = tools.execute("update_stock", r#"{"item_id": 5, "new_stock": 20}"#).await;
/// ```
pub struct ToolSet {
    tools: BTreeMap<String, Box<dyn Tool>>,
    max_result_bytes: usize,
    /// Validate arguments against each tool's JSON Schema before execution.
    validate_args: bool,
    /// `None` disables timeouts.
    default_timeout: Option<Duration>,
}

impl fmt::Debug for ToolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSet")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .field("max_result_bytes", &self.max_result_bytes)
            .field("validate_args", &self.validate_args)
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

impl ToolSet {
    /// Create an empty tool set.
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
            max_result_bytes: DEFAULT_MAX_RESULT_BYTES,
            validate_args: false,
            default_timeout: None,
        }
    }

    /// Set the maximum result size in bytes before truncation.
    pub fn with_max_result_bytes(mut self, max: usize) -> Self {
        self.max_result_bytes = max;
        self
    }

    /// Enable JSON Schema argument validation before tool execution.
    pub fn with_arg_validation(mut self, enabled: bool) -> Self {
        self.validate_args = enabled;
        self
    }

    /// Set a timeout applied to every tool execution. `None` disables it.
    pub fn with_default_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name();
        debug!("Registering tool {name}");
        self.tools.insert(name, Box::new(tool));
    }

    /// Register a tool (builder pattern).
    pub fn with(mut self, tool: impl Tool + 'static) -> Self {
        self.register(tool);
        self
    }

    /// All tool definitions, ordered by name.
    pub fn definitions(&self) -> Vec<ToolDef> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Whether the named tool mutates inventory state.
    pub fn is_mutation_tool(&self, name: &str) -> bool {
        self.tools.get(name).is_some_and(|t| t.is_mutation())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool call by name, with optional validation, timeout and
    /// truncation.
    ///
    /// An empty `arguments` string means `{}`. Returns the result string
    /// (truncated only for [truncatable](Tool::truncatable) tools), or an
    /// error string if the tool is unknown, the arguments fail validation, or
    /// the call times out.
    pub async fn execute(&self, name: &str, arguments: &str) -> String {
        let tool = match self.tools.get(name) {
            Some(t) => t,
            None => return format!("{ERROR_PREFIX} unknown tool '{name}'"),
        };
        let arguments = or_empty_object(arguments);

        if self.validate_args
            && let Err(error) = validate_tool_arguments(tool.as_ref(), arguments)
        {
            warn!("Rejected arguments for {name}");
            return error;
        }

        log_tool_call(name, arguments, tool.is_mutation());
        let start = Instant::now();

        let result = if let Some(limit) = self.default_timeout {
            match tokio::time::timeout(limit, tool.execute(arguments)).await {
                Ok(r) => r,
                Err(_) => {
                    info!(
                        "Tool {name} timed out after {:.1}s",
                        start.elapsed().as_secs_f64()
                    );
                    format!(
                        "{ERROR_PREFIX} tool '{name}' timed out after {:.0} seconds.",
                        limit.as_secs_f64()
                    )
                }
            }
        } else {
            tool.execute(arguments).await
        };

        debug!(
            "Tool {name} completed in {:.0}ms ({} bytes)",
            start.elapsed().as_secs_f64() * 1000.0,
            result.len()
        );
        if is_error_result(&result) {
            warn!("Tool {name} returned an error: {result}");
        } else {
            trace!("Tool {name} result: {result}");
        }

        if tool.truncatable() {
            truncate_result(result, self.max_result_bytes)
        } else {
            result
        }
    }
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::new()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// Check `arguments` against the JSON Schema in the tool's definition.
///
/// The error lists every violation as `<path>: <message>`, one per line.
pub fn validate_tool_arguments(tool: &dyn Tool, arguments: &str) -> Result<(), String> {
    let name = tool.name();
    let value: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| format!("{ERROR_PREFIX} arguments for '{name}' are not valid JSON: {e}"))?;

    let schema = tool.definition().function.parameters;
    // A schema the validator cannot compile is a tool bug, not a caller error.
    let Ok(validator) = jsonschema::validator_for(&schema) else {
        warn!("Skipping validation for {name}: parameter schema does not compile");
        return Ok(());
    };

    let violations: Vec<String> = validator
        .iter_errors(&value)
        .map(|e| {
            let path = e.instance_path().to_string();
            let path = if path.is_empty() { "/".to_string() } else { path };
            format!("  {path}: {e}")
        })
        .collect();
    if violations.is_empty() {
        return Ok(());
    }
    Err(format!(
        "{ERROR_PREFIX} arguments for '{name}' do not match its parameter schema:\n{}",
        violations.join("\n")
    ))
}

fn or_empty_object(arguments: &str) -> &str {
    if arguments.trim().is_empty() {
        "{}"
    } else {
        arguments
    }
}

/// Log a tool call at INFO level with a truncated preview of arguments.
pub fn log_tool_call(name: &str, arguments: &str, mutation: bool) {
    let args_preview: String = arguments.chars().take(120).collect();
    info!(
        "[tool] {}({args_preview}{}){}",
        name,
        if arguments.chars().count() > 120 { "..." } else { "" },
        if mutation { " [mutation]" } else { "" }
    );
    trace!("[tool] {name} arguments: {arguments}");
}

/// Truncate a string to at most `max` bytes (on a char boundary), appending
/// a notice if trimmed.
pub fn truncate_result(s: String, max: usize) -> String {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!(
        "{}...\n[truncated: {} bytes total]",
        s.get(..end).unwrap_or_default(),
        s.len()
    )
}

/// Whether a tool result string reports a failure.
pub fn is_error_result(result: &str) -> bool {
    result.starts_with(ERROR_PREFIX)
}

/// Parse raw JSON arguments into a typed struct.
///
/// Returns a formatted error string suitable for returning directly from
/// [`Tool::execute`].
pub fn parse_tool_args<T: serde::de::DeserializeOwned>(arguments: &str) -> Result<T, String> {
    serde_json::from_str(or_empty_object(arguments)).map_err(|e| {
        format!(
            "{ERROR_PREFIX} invalid tool arguments: {e}. \
             Please provide valid JSON matching the tool's parameter schema."
        )
    })
}

/// Serialize a tool's return value as JSON text.
pub fn to_json_result<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| format!("{ERROR_PREFIX} failed to serialize result: {e}"))
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    impl Tool for EchoTool {
        fn definition(&self) -> ToolDef {
            ToolDef::new(
                "echo",
                "Echo the input",
                serde_json::json!({
                    "type": "object",
                    "properties": { "text": { "type": "string" } },
                    "required": ["text"]
                }),
            )
        }

        fn execute(&self, arguments: &str) -> ToolFuture<'_> {
            #[derive(serde::Deserialize)]
            struct Args {
                text: String,
            }
            let result = match parse_tool_args::<Args>(arguments) {
                Ok(args) => args.text,
                Err(e) => e,
            };
            Box::pin(async move { result })
        }
    }

    struct SlowTool;

    impl Tool for SlowTool {
        fn definition(&self) -> ToolDef {
            ToolDef::new(
                "slow",
                "Sleeps",
                serde_json::json!({"type": "object", "properties": {}}),
            )
        }

        fn execute(&self, _arguments: &str) -> ToolFuture<'_> {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done".to_string()
            })
        }

        fn is_mutation(&self) -> bool {
            true
        }
    }

    /// Returns `[0, 1, ..]` and must not be truncated.
    struct ListTool(u32);

    impl Tool for ListTool {
        fn definition(&self) -> ToolDef {
            ToolDef::new(
                "list",
                "Lists numbers",
                serde_json::json!({"type": "object", "properties": {}}),
            )
        }

        fn execute(&self, _arguments: &str) -> ToolFuture<'_> {
            let result = to_json_result(&(0..self.0).collect::<Vec<_>>());
            Box::pin(async move { result })
        }

        fn truncatable(&self) -> bool {
            false
        }
    }

    #[test]
    fn tool_name_from_definition() {
        assert_eq!(EchoTool.name(), "echo");
    }

    #[test]
    fn toolset_register_and_definitions() {
        let set = ToolSet::new().with(SlowTool).with(EchoTool);
        assert_eq!(set.len(), 2);
        let names: Vec<String> = set
            .definitions()
            .iter()
            .map(|d| d.function.name.clone())
            .collect();
        assert_eq!(names, ["echo", "slow"]);
        assert!(set.contains("echo"));
        assert!(set.is_mutation_tool("slow"));
        assert!(!set.is_mutation_tool("echo"));
        assert!(!set.is_mutation_tool("missing"));
    }

    #[tokio::test]
    async fn toolset_execute_known_tool() {
        let set = ToolSet::new().with(EchoTool);
        assert_eq!(set.execute("echo", r#"{"text": "hello"}"#).await, "hello");
    }

    #[tokio::test]
    async fn toolset_execute_unknown_tool() {
        let set = ToolSet::new().with(EchoTool);
        let result = set.execute("nonexistent", "{}").await;
        assert!(is_error_result(&result));
        assert!(result.contains("unknown tool"));
    }

    #[tokio::test]
    async fn toolset_validates_arguments_when_enabled() {
        let set = ToolSet::new().with_arg_validation(true).with(EchoTool);
        let result = set.execute("echo", r#"{"text": 5}"#).await;
        assert!(result.contains("do not match its parameter schema"));
        assert!(result.contains("/text:"));

        let result = set.execute("echo", "not json").await;
        assert!(result.contains("not valid JSON"));
    }

    #[tokio::test]
    async fn toolset_treats_empty_arguments_as_empty_object() {
        let set = ToolSet::new().with_arg_validation(true).with(ListTool(1));
        assert_eq!(set.execute("list", "").await, "[0]");
        assert_eq!(set.execute("list", "  ").await, "[0]");

        // Required fields are still enforced.
        let set = ToolSet::new().with_arg_validation(true).with(EchoTool);
        let result = set.execute("echo", "").await;
        assert!(result.contains("\"text\" is a required property"), "{result}");
    }

    #[tokio::test]
    async fn toolset_never_truncates_whole_results() {
        let set = ToolSet::new().with_max_result_bytes(10).with(ListTool(500));
        let result = set.execute("list", "{}").await;
        let parsed: Vec<u32> = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed.len(), 500);
    }

    #[tokio::test]
    async fn toolset_times_out_slow_tools() {
        let set = ToolSet::new()
            .with_default_timeout(Some(Duration::from_millis(20)))
            .with(SlowTool);
        let result = set.execute("slow", "{}").await;
        assert!(result.contains("timed out"));
    }

    #[tokio::test]
    async fn toolset_truncates_long_results() {
        let set = ToolSet::new().with_max_result_bytes(3).with(EchoTool);
        let result = set.execute("echo", r#"{"text": "abcdef"}"#).await;
        assert!(result.starts_with("abc..."));
        assert!(result.contains("[truncated: 6 bytes total]"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let result = truncate_result("✅✅".into(), 4);
        assert!(result.starts_with("✅..."));
    }

    #[test]
    fn truncate_short_unchanged() {
        assert_eq!(truncate_result("hello".into(), 100), "hello");
    }

    #[test]
    fn parse_tool_args_accepts_empty_body() {
        #[derive(serde::Deserialize)]
        struct NoArgs {}
        assert!(parse_tool_args::<NoArgs>("").is_ok());
        assert!(parse_tool_args::<NoArgs>("[").is_err());
    }
}
