//! Block registry: type tag to step handler

use crate::{block_types, checkpoint, director, empty, random_direction, tape_ops, wait, wire};
use block_contract::{RegistryLookup, StepHandler};
use std::collections::HashMap;
use thiserror::Error;

/// Error types for registry operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A handler is already registered for this tag
    #[error("block type already registered: {0}")]
    AlreadyRegistered(String),
}

/// Registry mapping block type tags to their step handlers
///
/// The engine consumes this through [`RegistryLookup`]; anything beyond
/// lookup (registration, the built-in set) is host-side configuration.
/// Handlers are stateless, so one registry serves any number of runs.
#[derive(Default)]
pub struct BlockRegistry {
    handlers: HashMap<String, Box<dyn StepHandler>>,
}

impl BlockRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the full built-in block set
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let entries: Vec<(&str, Box<dyn StepHandler>)> = vec![
            (block_types::WIRE, Box::new(wire::Wire)),
            (block_types::DIRECTOR, Box::new(director::Director)),
            (
                block_types::RANDOM_DIRECTION,
                Box::new(random_direction::RandomDirection),
            ),
            (block_types::WAIT, Box::new(wait::Wait)),
            (block_types::CHECKPOINT, Box::new(checkpoint::Checkpoint)),
            (
                block_types::RETURN_CHECKPOINT,
                Box::new(checkpoint::ReturnCheckpoint),
            ),
            (block_types::INCREASE, Box::new(tape_ops::Increase)),
            (block_types::DECREASE, Box::new(tape_ops::Decrease)),
            (block_types::NEXT, Box::new(tape_ops::Next)),
            (block_types::PREVIOUS, Box::new(tape_ops::Previous)),
            (block_types::POP, Box::new(tape_ops::Pop)),
            (block_types::JUMP_TO, Box::new(tape_ops::JumpTo)),
            (block_types::EMPTY, Box::new(empty::Empty)),
        ];
        for (tag, handler) in entries {
            // The built-in set has no duplicates
            registry
                .register(tag, handler)
                .expect("built-in block set registers cleanly");
        }
        registry
    }

    /// Registers a handler for a type tag
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        handler: Box<dyn StepHandler>,
    ) -> Result<(), RegistryError> {
        let tag = tag.into();
        if self.handlers.contains_key(&tag) {
            return Err(RegistryError::AlreadyRegistered(tag));
        }
        self.handlers.insert(tag, handler);
        Ok(())
    }

    /// Returns the number of registered types
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true when no types are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns the registered type tags
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl RegistryLookup for BlockRegistry {
    fn handler(&self, block_type: &str) -> Option<&dyn StepHandler> {
        self.handlers.get(block_type).map(Box::as_ref)
    }
}
