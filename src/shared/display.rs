//! Presentation labels for entity fields.
//!
//! Each entity declares a static mapping from its serialized field name to
//! the label a UI-generation layer should render for that field. The mapping
//! carries no runtime behaviour of its own; it is read by the metadata
//! endpoints and by anything else that renders forms.

use std::collections::BTreeMap;

use serde::Serialize;

/// Display data for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDisplay {
    /// Human-facing label, e.g. "Category Name"
    pub display_label: &'static str,
}

impl FieldDisplay {
    pub const fn label(display_label: &'static str) -> Self {
        Self { display_label }
    }
}

/// Field-name -> display mapping for one entity
#[derive(Debug, Clone, Copy)]
pub struct DisplayMetadata {
    entity: &'static str,
    fields: &'static [(&'static str, FieldDisplay)],
}

impl DisplayMetadata {
    pub const fn new(entity: &'static str, fields: &'static [(&'static str, FieldDisplay)]) -> Self {
        Self { entity, fields }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Configured label for `field`, if one exists
    pub fn label_for(&self, field: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, display)| display.display_label)
    }

    /// Label to render for `field`; the field name itself when unlabeled
    pub fn display_name<'a>(&self, field: &'a str) -> &'a str {
        self.label_for(field).unwrap_or(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, FieldDisplay)> + '_ {
        self.fields.iter().copied()
    }

    pub fn to_map(&self) -> BTreeMap<&'static str, FieldDisplay> {
        self.fields().collect()
    }
}
