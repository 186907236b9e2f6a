//! Named string properties over widget state.
//!
//! A [`Property`] converts one widget field to and from its string form.
//! Properties for a widget type are collected in a [`PropertySet`], which
//! looks them up by name and can snapshot or apply a whole
//! [`PropertySheet`].

pub mod helper;
mod sheet;

pub use sheet::PropertySheet;

use std::fmt;

/// Errors raised by property access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// No property with the given name is registered.
    UnknownProperty(String),
    /// A property with the given name is already registered.
    DuplicateProperty(String),
    /// A value could not be converted for a property.
    InvalidValue {
        property: String,
        value: String,
        reason: String,
    },
    /// A property sheet could not be encoded or decoded.
    Sheet(String),
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty(name) => write!(f, "there is no property named '{name}'"),
            Self::DuplicateProperty(name) => {
                write!(f, "a property named '{name}' is already registered")
            }
            Self::InvalidValue {
                property,
                value,
                reason,
            } => write!(f, "invalid value '{value}' for property '{property}': {reason}"),
            Self::Sheet(msg) => write!(f, "property sheet error: {msg}"),
        }
    }
}

impl std::error::Error for PropertyError {}

/// A named accessor for one field of a widget of type `W`.
pub trait Property<W>: Send + Sync {
    fn name(&self) -> &str;

    /// Human readable description.
    fn help(&self) -> &str;

    /// String form of the value a fresh widget has.
    fn default_value(&self) -> &str;

    /// Current value as a string.
    fn get(&self, widget: &W) -> String;

    /// Parse `value` and store it in the widget.
    fn set(&self, widget: &mut W, value: &str) -> Result<(), PropertyError>;

    /// Whether the widget currently holds the default value.
    fn is_default(&self, widget: &W) -> bool {
        self.get(widget) == self.default_value()
    }
}

/// Ordered collection of the properties of one widget type.
pub struct PropertySet<W> {
    properties: Vec<Box<dyn Property<W>>>,
}

impl<W> Default for PropertySet<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> PropertySet<W> {
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Register a property. Names must be unique within the set.
    pub fn add(&mut self, property: impl Property<W> + 'static) -> Result<(), PropertyError> {
        if self.is_property_present(property.name()) {
            return Err(PropertyError::DuplicateProperty(property.name().to_string()));
        }
        self.properties.push(Box::new(property));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn is_property_present(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Property names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name())
    }

    pub fn property(&self, name: &str) -> Option<&dyn Property<W>> {
        self.properties
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    fn require(&self, name: &str) -> Result<&dyn Property<W>, PropertyError> {
        self.property(name)
            .ok_or_else(|| PropertyError::UnknownProperty(name.to_string()))
    }

    pub fn get_property(&self, widget: &W, name: &str) -> Result<String, PropertyError> {
        Ok(self.require(name)?.get(widget))
    }

    pub fn set_property(&self, widget: &mut W, name: &str, value: &str) -> Result<(), PropertyError> {
        log::trace!("PropertySet: {name} = '{value}'");
        self.require(name)?.set(widget, value)
    }

    pub fn is_property_default(&self, widget: &W, name: &str) -> Result<bool, PropertyError> {
        Ok(self.require(name)?.is_default(widget))
    }

    pub fn property_help(&self, name: &str) -> Result<&str, PropertyError> {
        Ok(self.require(name)?.help())
    }

    /// Snapshot the widget's property values.
    ///
    /// With `non_default_only`, properties holding their default are skipped.
    pub fn export_sheet(&self, widget: &W, non_default_only: bool) -> PropertySheet {
        let mut sheet = PropertySheet::new();
        for property in &self.properties {
            if non_default_only && property.is_default(widget) {
                continue;
            }
            sheet.insert(property.name(), property.get(widget));
        }
        sheet
    }

    /// Set every property named in `sheet`.
    ///
    /// Stops at the first unknown property or invalid value; properties
    /// applied before it keep their new values.
    pub fn apply_sheet(&self, widget: &mut W, sheet: &PropertySheet) -> Result<(), PropertyError> {
        for (name, value) in sheet.iter() {
            self.set_property(widget, name, value)?;
        }
        Ok(())
    }
}

impl<W> fmt::Debug for PropertySet<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
