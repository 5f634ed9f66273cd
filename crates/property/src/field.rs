//! Form field view models.

use crate::property::{MutableProperty, Observable, Property};
use crate::validating::ValidatingProperty;

/// One input of a form: an id, a hint, the validated value and its
/// error state.
#[derive(Debug, Clone)]
pub struct Field {
    id: usize,
    hint: Property<Option<String>>,
    property: ValidatingProperty,
    has_errors: Property<bool>,
    error_message: Property<Option<String>>,
}

impl Field {
    /// A field with a fixed hint.
    ///
    /// Errors stay hidden until the first edit: `has_errors` starts `false`
    /// and follows the property from its next decision on.
    pub fn new(id: usize, hint: Option<&str>, property: ValidatingProperty) -> Self {
        let has_errors = Property::initial_then(false, &property.has_errors());
        let error_message = Property::initial_then(None, &property.error_message());
        Self {
            id,
            hint: Property::constant(hint.map(str::to_string)),
            property,
            has_errors,
            error_message,
        }
    }

    /// A field whose hint can change. Errors are shown immediately.
    pub fn with_hint(
        id: usize,
        hint: &MutableProperty<Option<String>>,
        property: ValidatingProperty,
    ) -> Self {
        Self {
            id,
            hint: Property::capturing(hint),
            has_errors: property.has_errors(),
            error_message: property.error_message(),
            property,
        }
    }

    pub const fn id(&self) -> usize {
        self.id
    }

    pub fn hint(&self) -> &Property<Option<String>> {
        &self.hint
    }

    pub fn property(&self) -> &ValidatingProperty {
        &self.property
    }

    pub fn has_errors(&self) -> &Property<bool> {
        &self.has_errors
    }

    pub fn error_message(&self) -> &Property<Option<String>> {
        &self.error_message
    }

    /// Proposes a value for the field. See [`ValidatingProperty::set`].
    pub fn edit(&self, value: Option<String>) {
        self.property.set(value);
    }

    /// The stored value.
    pub fn value(&self) -> Option<String> {
        self.property.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use verity_validator::rules::required;

    fn required_property() -> ValidatingProperty {
        ValidatingProperty::new(None, required().tag("name"))
    }

    #[test]
    fn errors_hidden_until_first_edit() {
        let field = Field::new(0, Some("name"), required_property());
        assert!(field.property().has_errors().value());
        assert!(!field.has_errors().value());
        assert_eq!(field.error_message().value(), None);

        field.edit(Some(String::new()));
        assert!(field.has_errors().value());
        assert_eq!(
            field.error_message().value(),
            Some("[name] is required".to_string())
        );

        field.edit(Some("Ada".into()));
        assert!(!field.has_errors().value());
        assert_eq!(field.value(), Some("Ada".to_string()));
    }

    #[test]
    fn mutable_hint_shows_errors_immediately() {
        let hint = MutableProperty::new(Some("first".to_string()));
        let field = Field::with_hint(3, &hint, required_property());
        assert_eq!(field.id(), 3);
        assert!(field.has_errors().value());

        hint.set(Some("second".into()));
        assert_eq!(field.hint().value(), Some("second".to_string()));
    }
}
