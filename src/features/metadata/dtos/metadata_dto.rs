use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::display::{DisplayMetadata, FieldDisplay};

/// Display data for one field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldDisplayDto {
    #[schema(example = "Category Name")]
    pub display_label: String,
}

/// Display metadata for one entity, keyed by serialized field name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntityDisplayDto {
    #[schema(example = "category")]
    pub entity: String,
    pub fields: BTreeMap<String, FieldDisplayDto>,
}

impl From<FieldDisplay> for FieldDisplayDto {
    fn from(display: FieldDisplay) -> Self {
        Self {
            display_label: display.display_label.to_string(),
        }
    }
}

impl From<DisplayMetadata> for EntityDisplayDto {
    fn from(metadata: DisplayMetadata) -> Self {
        Self {
            entity: metadata.entity().to_string(),
            fields: metadata
                .to_map()
                .into_iter()
                .map(|(name, display)| (name.to_string(), display.into()))
                .collect(),
        }
    }
}
