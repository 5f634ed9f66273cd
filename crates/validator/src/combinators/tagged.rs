//! Re-tagging the errors of another validator.

use crate::foundation::{Decision, Validate};

/// Replaces the field tag on every error the inner validator emits.
///
/// Useful for validators built elsewhere (closures, configuration) that
/// have no tag builder of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged<V> {
    inner: V,
    tag: String,
}

impl<V> Tagged<V> {
    /// Wraps `inner`, tagging its errors with `tag`.
    pub fn new(inner: V, tag: impl Into<String>) -> Self {
        Self {
            inner,
            tag: tag.into(),
        }
    }

    /// The tag applied to errors.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns a reference to the wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for Tagged<V> {
    fn validate(&self, input: Option<&str>) -> Decision {
        self.inner
            .validate(input)
            .map_error(|error| error.with_tag(self.tag.clone()))
    }
}
