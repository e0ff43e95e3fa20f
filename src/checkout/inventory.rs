//! The rentable tool inventory.

use std::collections::HashMap;

use crate::error::{RentalError, RentalResult};
use crate::models::{Tool, ToolCategory};

/// Immutable mapping from tool code to tool.
///
/// Built once and handed to the checkout orchestrator; lookups never
/// mutate it, so it can be shared freely between threads.
///
/// # Example
///
/// ```
/// use tool_rental::checkout::Inventory;
/// use tool_rental::models::ToolCategory;
///
/// let inventory = Inventory::standard();
/// let tool = inventory.resolve_tool("JAKR").unwrap();
/// assert_eq!(tool.category, ToolCategory::Jackhammer);
/// assert_eq!(tool.brand, "Ridgid");
/// assert!(inventory.resolve_tool("NOPE").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    tools: HashMap<String, Tool>,
}

impl Inventory {
    /// Builds an inventory from a list of tools.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::DuplicateToolCode`] if two tools share a code.
    pub fn new(tools: impl IntoIterator<Item = Tool>) -> RentalResult<Self> {
        let mut by_code = HashMap::new();

        for tool in tools {
            if by_code.contains_key(&tool.code) {
                return Err(RentalError::DuplicateToolCode { code: tool.code });
            }
            by_code.insert(tool.code.clone(), tool);
        }

        Ok(Self { tools: by_code })
    }

    /// The standard stock of the rental store.
    pub fn standard() -> Self {
        let tools = [
            ("CHNS", ToolCategory::Chainsaw, "Stihl"),
            ("LADW", ToolCategory::Ladder, "Werner"),
            ("JAKD", ToolCategory::Jackhammer, "DeWalt"),
            ("JAKR", ToolCategory::Jackhammer, "Ridgid"),
        ]
        .into_iter()
        .map(|(code, category, brand)| {
            let tool = Tool {
                code: code.to_string(),
                category,
                brand: brand.to_string(),
            };
            (code.to_string(), tool)
        })
        .collect();

        Self { tools }
    }

    /// Resolves a tool by its code.
    pub fn resolve_tool(&self, code: &str) -> Option<&Tool> {
        self.tools.get(code)
    }

    /// All registered tool codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the inventory holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
