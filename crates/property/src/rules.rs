//! Rules that compare against another property's current value.

use verity_validator::rules::{EqualsWith, Rule, equals_with, watch_equals_with};

use crate::property::Observable;

/// Equality with the value `property` holds at validation time, or
/// `default` while it is empty.
pub fn equals<P>(
    property: &P,
    default: impl Into<String>,
) -> Rule<EqualsWith<impl Fn() -> Option<String> + Send + Sync + 'static>>
where
    P: Observable<Value = Option<String>>,
{
    let source = property.as_property();
    equals_with(move || source.value(), default)
}

/// Like [`equals`], reporting `WatchEquals`.
///
/// Pair it with [`ValidatingProperty::revalidate_when`] so the field is
/// checked again when the watched property changes.
///
/// [`ValidatingProperty::revalidate_when`]: crate::ValidatingProperty::revalidate_when
pub fn watch_equals<P>(
    property: &P,
    default: impl Into<String>,
) -> Rule<EqualsWith<impl Fn() -> Option<String> + Send + Sync + 'static>>
where
    P: Observable<Value = Option<String>>,
{
    let source = property.as_property();
    watch_equals_with(move || source.value(), default)
}
