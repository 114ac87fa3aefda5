//! Saving and loading the sky as part of a scene description.
//!
//! Loading is lenient: any field that is missing or has the wrong type falls back to its default,
//! it never fails the whole load.

use crate::core::targets::PERSIST;
use crate::core::types::{Channel, Colour, Number};
use crate::sky::error::DocumentError;
use crate::sky::{Sky, DEFAULT_INTENSITY};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, trace};

pub const SKYMAP_FILE_NAME: &str = "skymapFileName";
pub const SKY_YAW: &str = "skyYaw";
pub const SKY_MIRRORED: &str = "skyMirrored";
pub const SKY_LIGHT: &str = "skyLight";
pub const GROUND_COLOUR: &str = "groundColor";
const CHANNELS: [&str; 3] = ["red", "green", "blue"];

/// A structured key/value document that scene settings are persisted into
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkyDocument {
    root: Map<String, Value>,
}

impl SkyDocument {
    pub fn new() -> Self { Self::default() }

    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(root) => Ok(Self { root }),
            other => Err(DocumentError::NotAnObject {
                found: value_kind(&other),
            }),
        }
    }

    pub fn to_json_string(&self) -> Result<String, DocumentError> { Ok(serde_json::to_string_pretty(&self.root)?) }

    pub fn get(&self, key: &str) -> Option<&Value> { self.root.get(key) }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) { self.root.insert(key.to_owned(), value.into()); }

    pub fn contains(&self, key: &str) -> bool { self.root.contains_key(key) }

    fn get_str(&self, key: &str) -> Option<&str> { self.get(key).and_then(Value::as_str) }

    fn get_number(&self, key: &str) -> Option<Number> { self.get(key).and_then(Value::as_f64) }

    /// Booleans may also be stored as numbers, where anything non-zero is `true`
    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|n| n != 0.),
            _ => None,
        }
    }

    fn get_object(&self, key: &str) -> Option<&Map<String, Value>> { self.get(key).and_then(Value::as_object) }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Sky {
    /// Loads the sky description from a scene document, then refreshes the scene
    pub fn load(&mut self, doc: &SkyDocument) {
        if let Some(file_name) = doc.get_str(SKYMAP_FILE_NAME).filter(|name| !name.is_empty()) {
            // Already logged, a missing skymap shouldn't stop the rest of the scene from loading
            if let Err(err) = self.load_skymap_logged(Path::new(file_name)) {
                debug!(target: PERSIST, %err, "continuing sky load without skymap");
            }
        }
        if let Some(rotation) = doc.get_number(SKY_YAW) {
            self.rotation = rotation;
        }
        self.mirrored = doc.get_bool(SKY_MIRRORED).unwrap_or(true);
        self.light = doc.get_number(SKY_LIGHT).unwrap_or(DEFAULT_INTENSITY);

        if let Some(colour) = doc.get_object(GROUND_COLOUR) {
            let channel = |name: &str| colour.get(name).and_then(Value::as_f64).unwrap_or(1.) as Channel;
            self.ground_colour = Colour::from(CHANNELS.map(channel));
        }

        trace!(target: PERSIST, sky = ?self, "loaded sky");
        self.scene.refresh();
    }

    /// Saves the sky description into a scene document.
    ///
    /// The skymap file name is only written while a skymap is actually loaded.
    pub fn save(&self, doc: &mut SkyDocument) {
        if self.skymap.is_some() {
            doc.insert(SKYMAP_FILE_NAME, self.skymap_file_name.as_str());
        }
        doc.insert(SKY_YAW, self.rotation);
        doc.insert(SKY_MIRRORED, self.mirrored);
        doc.insert(SKY_LIGHT, self.light);

        let colour = CHANNELS
            .into_iter()
            .zip(self.ground_colour)
            .map(|(name, c)| (name.to_owned(), Value::from(c as Number)))
            .collect::<Map<_, _>>();
        doc.insert(GROUND_COLOUR, colour);
    }
}
