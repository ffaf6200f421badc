//! Tools for inspecting the structure of a MUG document.
//! Useful for debugging writers and for sizing documents before encoding.

use std::fmt;

use crate::entity::Entity;
use crate::format::MAGIC_BYTES;
use crate::types::Arity;
use crate::value::value_encoded_len;
use crate::varuint::varuint_len;

/// A structural report of a document tree.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DocumentReport {
    /// Total number of entities, root included.
    pub entity_count: u64,
    /// Total number of attributes across all entities.
    pub attribute_count: u64,
    /// Deepest nesting level, with the root at depth 0.
    pub max_depth: usize,
    /// Exact encoded size of the document in bytes, magic included.
    pub encoded_size: u64,
    /// The hierarchical tree of entities.
    pub tree: EntityInfo,
}

/// Metadata for a single entity in the tree.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityInfo {
    /// Entity name.
    pub name: String,
    /// Number of attributes on this entity.
    pub attribute_count: usize,
    /// Exact encoded size of this entity record, children included.
    pub encoded_size: u64,
    /// Per-arity-class attribute tally: (scalars, fixed vectors, arrays).
    pub arity_tally: (usize, usize, usize),
    /// Child nodes.
    pub children: Vec<EntityInfo>,
}

/// The MUG document inspector.
#[derive(Debug)]
pub struct MugInspector;

impl MugInspector {
    /// Analyzes a document tree and returns a structural report.
    ///
    /// The reported sizes are exact: encoding the same tree produces a
    /// byte stream of precisely `encoded_size` bytes.
    pub fn inspect(root: &Entity) -> DocumentReport {
        let tree = Self::inspect_entity(root);
        let (entities, attributes, depth) = Self::tally(root, 0);
        DocumentReport {
            entity_count: entities,
            attribute_count: attributes,
            max_depth: depth,
            encoded_size: MAGIC_BYTES.len() as u64 + tree.encoded_size,
            tree,
        }
    }

    fn inspect_entity(entity: &Entity) -> EntityInfo {
        let mut size = string_len(&entity.name) + varuint_len(entity.attributes.len() as u64);
        let mut tally = (0, 0, 0);
        for attribute in &entity.attributes {
            size += string_len(&attribute.name);
            size += 1; // type tag
            size += value_encoded_len(attribute.ty, &attribute.value);
            match attribute.ty.arity() {
                Arity::Fixed(1) => tally.0 += 1,
                Arity::Fixed(_) => tally.1 += 1,
                Arity::Array => tally.2 += 1,
            }
        }
        size += varuint_len(entity.children.len() as u64);

        let children: Vec<EntityInfo> = entity.children.iter().map(Self::inspect_entity).collect();
        let child_size: u64 = children.iter().map(|c| c.encoded_size).sum();

        EntityInfo {
            name: entity.name.clone(),
            attribute_count: entity.attributes.len(),
            encoded_size: size as u64 + child_size,
            arity_tally: tally,
            children,
        }
    }

    fn tally(entity: &Entity, depth: usize) -> (u64, u64, usize) {
        let mut entities = 1;
        let mut attributes = entity.attributes.len() as u64;
        let mut max_depth = depth;
        for child in &entity.children {
            let (e, a, d) = Self::tally(child, depth + 1);
            entities += e;
            attributes += a;
            max_depth = max_depth.max(d);
        }
        (entities, attributes, max_depth)
    }
}

/// Encoded size of a scalar-string field.
fn string_len(s: &str) -> usize {
    varuint_len(s.len() as u64) + s.len()
}

impl fmt::Display for DocumentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== MUG DOCUMENT REPORT ===")?;
        writeln!(f, "Entities:     {}", self.entity_count)?;
        writeln!(f, "Attributes:   {}", self.attribute_count)?;
        writeln!(f, "Max depth:    {}", self.max_depth)?;
        writeln!(f, "Encoded size: {} bytes", self.encoded_size)?;
        writeln!(f, "\n[TREE LAYOUT]")?;
        self.tree.fmt_recursive(f, "", true)
    }
}

impl EntityInfo {
    fn fmt_recursive(
        &self,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let connector = if is_last { "└── " } else { "├── " };
        let child_prefix = if is_last { "    " } else { "│   " };
        let (scalars, vectors, arrays) = self.arity_tally;

        writeln!(
            f,
            "{}{}{} | {}b | attrs: {} ({} scalar, {} vector, {} array) | children: {}",
            prefix,
            connector,
            self.name,
            self.encoded_size,
            self.attribute_count,
            scalars,
            vectors,
            arrays,
            self.children.len()
        )?;

        for (i, child) in self.children.iter().enumerate() {
            let is_last_child = i == self.children.len() - 1;
            child.fmt_recursive(f, &format!("{prefix}{child_prefix}"), is_last_child)?;
        }
        Ok(())
    }
}
