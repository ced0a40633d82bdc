use crate::loc;
use crate::ResponsePath;

/// Where in the response the value being coerced lives.
///
/// Every coercer receives a [`ResolutionInfo`] even when coercion succeeds so
/// that a failure anywhere in the chain can be attributed to a response path
/// and to the source locations of the field occurrence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolutionInfo {
    pub field_name: String,
    pub locations: Vec<loc::Position>,
    pub parent_type_name: String,
    pub path: ResponsePath,
}
impl ResolutionInfo {
    /// Describes the occurrence of `parent_type_name.field_name`, rooted at a
    /// path containing just the field name.
    pub fn new(
        parent_type_name: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        let field_name = field_name.into();
        Self {
            path: ResponsePath::new().child_field(field_name.as_str()),
            field_name,
            locations: vec![],
            parent_type_name: parent_type_name.into(),
        }
    }

    pub fn with_location(mut self, location: loc::Position) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_path(mut self, path: ResponsePath) -> Self {
        self.path = path;
        self
    }

    /// The info for the element at `index` of the list currently being
    /// coerced.
    pub fn with_index(&self, index: usize) -> Self {
        Self {
            field_name: self.field_name.clone(),
            locations: self.locations.clone(),
            parent_type_name: self.parent_type_name.clone(),
            path: self.path.child_index(index),
        }
    }

    /// The info for a named entry (e.g. an input object field) nested under
    /// the value currently being coerced.
    pub fn with_field(&self, field_name: &str) -> Self {
        Self {
            field_name: self.field_name.clone(),
            locations: self.locations.clone(),
            parent_type_name: self.parent_type_name.clone(),
            path: self.path.child_field(field_name),
        }
    }
}
