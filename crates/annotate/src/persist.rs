use std::collections::BTreeMap;
use std::sync::Arc;

use foundation::geo::GeoPoint;
use scene::GeometryContainer;
use serde::{Deserialize, Serialize};
use symbology::Style;

use crate::place::{BuildContext, PlaceLabel};

/// Record type tag for place labels.
pub const PLACE_TYPE: &str = "place";

/// Persisted form of a place label.
///
/// `icon` carries the image's source URI when known, else its logical
/// name; images the style resolves by URL travel inside `style` instead
/// and the field is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug)]
pub enum PersistError {
    MissingTypeTag,
    UnknownType(String),
    Malformed(serde_json::Error),
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::MissingTypeTag => write!(f, "annotation record has no type tag"),
            PersistError::UnknownType(tag) => write!(f, "no factory for annotation type {tag:?}"),
            PersistError::Malformed(source) => write!(f, "malformed annotation record: {source}"),
        }
    }
}

impl std::error::Error for PersistError {}

/// Anything the generic annotation loader can reconstruct and re-save.
pub trait AnnotationNode {
    fn type_tag(&self) -> &'static str;
    fn container(&self) -> &GeometryContainer;
    fn to_value(&self) -> Result<serde_json::Value, PersistError>;
}

impl AnnotationNode for PlaceLabel {
    fn type_tag(&self) -> &'static str {
        PLACE_TYPE
    }

    fn container(&self) -> &GeometryContainer {
        PlaceLabel::container(self)
    }

    fn to_value(&self) -> Result<serde_json::Value, PersistError> {
        serde_json::to_value(self.to_record()).map_err(PersistError::Malformed)
    }
}

pub type AnnotationFactory =
    fn(&serde_json::Value, GeoPoint, &mut BuildContext<'_>) -> Result<Box<dyn AnnotationNode>, PersistError>;

/// Maps record type tags to constructors so a generic loader can rebuild
/// annotations without knowing their concrete types.
#[derive(Default)]
pub struct AnnotationRegistry {
    factories: BTreeMap<String, AnnotationFactory>,
}

impl AnnotationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the annotation kinds this crate ships.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(PLACE_TYPE, place_factory);
        registry
    }

    pub fn register(&mut self, tag: impl Into<String>, factory: AnnotationFactory) {
        self.factories.insert(tag.into(), factory);
    }

    pub fn create(
        &self,
        value: &serde_json::Value,
        position: GeoPoint,
        ctx: &mut BuildContext<'_>,
    ) -> Result<Box<dyn AnnotationNode>, PersistError> {
        let tag = value
            .get("type")
            .and_then(|tag| tag.as_str())
            .ok_or(PersistError::MissingTypeTag)?;
        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| PersistError::UnknownType(tag.to_string()))?;
        factory(value, position, ctx)
    }
}

fn place_factory(
    value: &serde_json::Value,
    position: GeoPoint,
    ctx: &mut BuildContext<'_>,
) -> Result<Box<dyn AnnotationNode>, PersistError> {
    let record: PlaceRecord =
        serde_json::from_value(value.clone()).map_err(PersistError::Malformed)?;
    Ok(Box::new(PlaceLabel::from_record(&record, position, ctx)))
}

impl PlaceLabel {
    pub fn to_record(&self) -> PlaceRecord {
        let icon = self.image().and_then(|image| {
            if !image.file_name.is_empty() {
                Some(image.file_name.clone())
            } else if !image.name.is_empty() {
                Some(image.name.clone())
            } else {
                None
            }
        });
        PlaceRecord {
            kind: PLACE_TYPE.to_string(),
            text: self.text().to_string(),
            style: self.style().clone(),
            icon,
        }
    }

    /// Reconstruct from a record. A present `icon` URI resolves through the
    /// asset loader and the image is tagged with that URI as its file name,
    /// so a later save reproduces the same field. A failed resolve degrades
    /// to an icon-less label.
    pub fn from_record(
        record: &PlaceRecord,
        position: GeoPoint,
        ctx: &mut BuildContext<'_>,
    ) -> PlaceLabel {
        let image = record.icon.as_ref().and_then(|uri| {
            match ctx.assets.resolve(uri, None) {
                Ok(image) => {
                    if image.file_name == *uri {
                        Some(image)
                    } else {
                        Some(Arc::new(image.as_ref().clone().with_file_name(uri.clone())))
                    }
                }
                Err(err) => {
                    tracing::warn!("icon from record unavailable: {err}");
                    None
                }
            }
        });

        PlaceLabel::build(
            position,
            image,
            record.text.clone(),
            record.style.clone(),
            None,
            ctx,
        )
    }
}
