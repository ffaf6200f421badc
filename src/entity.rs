//! The in-memory document model: entities and their attributes.
//!
//! A document is a single rooted tree of [`Entity`] nodes. Each entity owns
//! its attributes and children exclusively — this is a tree, not a graph;
//! there is no shared ownership and no back-reference, which the plain
//! owned-`Vec` representation makes structurally impossible. The order of
//! attributes and of children is semantically significant and is preserved
//! exactly across a round trip.

use crate::types::AttributeType;
use crate::value::Value;

/// A named tree node owning ordered attributes and ordered child entities.
///
/// ```rust
/// use mug::{Attribute, AttributeType, Entity};
///
/// let mut root = Entity::new("scene");
/// let mut mesh = Entity::new("mesh");
/// mesh.attributes.push(Attribute::new("lod", AttributeType::U8, 2u8.into()));
/// root.children.push(mesh);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    /// Entity name.
    pub name: String,
    /// Ordered attribute list.
    pub attributes: Vec<Attribute>,
    /// Ordered child list.
    pub children: Vec<Entity>,
}

impl Entity {
    /// Creates an entity with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the first attribute with the given name, if any.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Returns the first child with the given name, if any.
    pub fn child(&self, name: &str) -> Option<&Entity> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// A named, typed value attached to an entity.
///
/// The codec trusts the writer: `value`'s shape is only checked against
/// `ty` at encode time, not at construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Declared type tag.
    pub ty: AttributeType,
    /// Attribute value.
    pub value: Value,
}

impl Attribute {
    /// Creates an attribute.
    pub fn new(name: impl Into<String>, ty: AttributeType, value: Value) -> Self {
        Self {
            name: name.into(),
            ty,
            value,
        }
    }
}
