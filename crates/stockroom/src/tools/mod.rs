//! Tool abstractions and the inventory tool set.
//!
//! Every operation a calling agent can perform is a [`Tool`] implementor.
//! Tools are collected into a [`ToolSet`] which handles dispatch, argument
//! validation, timeouts and truncation.
//!
//! # Submodules
//!
//! - [`core`] — [`Tool`] trait, [`ToolSet`], argument/result helpers.
//! - [`spec`] — [`ToolSpec`](spec::ToolSpec) builder for structured descriptions.
//! - [`inventory`] — the five inventory tools and [`InventoryToolsExt`].
//! - [`names`] — canonical tool and prompt names.

pub mod core;
pub mod inventory;
pub mod names;
pub mod spec;

pub use self::core::{
    DEFAULT_MAX_RESULT_BYTES, DEFAULT_TOOL_TIMEOUT, ERROR_PREFIX, Tool, ToolFuture, ToolSet,
    is_error_result, parse_tool_args, to_json_result, truncate_result, validate_tool_arguments,
};
pub use inventory::{
    AddItem, GetAllItems, GetLatestId, InventoryToolsExt, SearchItems, UpdateStock,
};
