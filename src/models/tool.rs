//! Tool model and related types.
//!
//! This module defines the [`Tool`] struct and the closed [`ToolCategory`] enum
//! for representing rentable items.

use serde::{Deserialize, Serialize};

/// The class a rentable tool belongs to.
///
/// Each category maps to exactly one charge policy in the policy table.
///
/// # Example
///
/// ```
/// use tool_rental::models::ToolCategory;
///
/// assert_eq!(ToolCategory::Jackhammer.to_string(), "Jackhammer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    /// Ladders.
    Ladder,
    /// Chainsaws.
    Chainsaw,
    /// Jackhammers.
    Jackhammer,
}

impl ToolCategory {
    /// All categories, in declaration order.
    pub const ALL: [ToolCategory; 3] = [
        ToolCategory::Ladder,
        ToolCategory::Chainsaw,
        ToolCategory::Jackhammer,
    ];
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolCategory::Ladder => write!(f, "Ladder"),
            ToolCategory::Chainsaw => write!(f, "Chainsaw"),
            ToolCategory::Jackhammer => write!(f, "Jackhammer"),
        }
    }
}

/// A single rentable tool.
///
/// # Example
///
/// ```
/// use tool_rental::models::{Tool, ToolCategory};
///
/// let tool = Tool {
///     code: "LADW".to_string(),
///     category: ToolCategory::Ladder,
///     brand: "Werner".to_string(),
/// };
/// assert_eq!(tool.category, ToolCategory::Ladder);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique tool code (e.g., "LADW").
    pub code: String,
    /// The category that decides the charge policy.
    pub category: ToolCategory,
    /// The manufacturer brand.
    pub brand: String,
}
