//! Placed blocks and their opaque parameter payloads

use crate::cell::Cell;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Type tag identifying what a placed block does
///
/// Tags are lowercase strings ("wire", "director", ...). The set is open:
/// the registry decides which tags have step handlers, and a tag with no
/// handler simply fizzles the run when the cursor lands on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockType(String);

impl BlockType {
    /// Creates a block type tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BlockType {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for BlockType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Opaque per-block configuration payload
///
/// Parameters are plain key/value data so that documents produced by the
/// external serializer round-trip without loss, including keys this
/// codebase has never heard of. Typed getters are conveniences: a missing
/// key or a value of the wrong shape reads as `None` and the caller falls
/// back to its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockParams(BTreeMap<String, Value>);

impl BlockParams {
    /// Creates an empty parameter payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, builder-style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Sets a parameter in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Reads a signed integer parameter
    ///
    /// Fractional values are floored, so documents hand-edited with
    /// float amounts still read as whole steps.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.floor() as i64)),
            _ => None,
        }
    }

    /// Reads an unsigned integer parameter
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get_i64(key).and_then(|v| u64::try_from(v).ok())
    }

    /// Reads a boolean parameter
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key)?.as_bool()
    }

    /// Reads a string parameter
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// Returns true when no parameters are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A block placed on the grid
///
/// Blocks are owned by the grid store; the engine and step handlers only
/// read them. Presentation concerns (textures, context menus, facing
/// rotations) live entirely outside this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Type tag resolved against the registry
    pub block_type: BlockType,
    /// Grid cell this block occupies
    pub cell: Cell,
    /// Opaque per-type configuration
    #[serde(default)]
    pub params: BlockParams,
}

impl Block {
    /// Creates a block with no parameters
    pub fn new(block_type: impl Into<BlockType>, cell: Cell) -> Self {
        Self {
            block_type: block_type.into(),
            cell,
            params: BlockParams::new(),
        }
    }

    /// Creates a block with the given parameters
    pub fn with_params(
        block_type: impl Into<BlockType>,
        cell: Cell,
        params: BlockParams,
    ) -> Self {
        Self {
            block_type: block_type.into(),
            cell,
            params,
        }
    }
}
