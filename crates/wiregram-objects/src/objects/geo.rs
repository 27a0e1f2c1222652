//! Location-based entities.

use serde::Serialize;
use serde_json::Value;

use crate::error::ObjectError;
use crate::object::{ObjectSchema, Relation, ResponseObject};

pub static LOCATION_SCHEMA: ObjectSchema = ObjectSchema::new("Location", &[]);

static VENUE_RELATIONS: [Relation; 1] = [Relation::new("location", &LOCATION_SCHEMA)];
pub static VENUE_SCHEMA: ObjectSchema = ObjectSchema::new("Venue", &VENUE_RELATIONS);

/// A point on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location(ResponseObject);

impl Location {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&LOCATION_SCHEMA, data))
    }

    pub fn longitude(&self) -> Result<f64, ObjectError> {
        self.0.f64_field("longitude")
    }

    pub fn latitude(&self) -> Result<f64, ObjectError> {
        self.0.f64_field("latitude")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Location {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

/// A venue: a location with a name and address attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue(ResponseObject);

impl Venue {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&VENUE_SCHEMA, data))
    }

    pub fn location(&self) -> Result<Location, ObjectError> {
        self.0.object_field("location").map(Location::from)
    }

    pub fn title(&self) -> Result<String, ObjectError> {
        self.0.str_field("title")
    }

    pub fn address(&self) -> Result<String, ObjectError> {
        self.0.str_field("address")
    }

    pub fn foursquare_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("foursquare_id")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Venue {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}
