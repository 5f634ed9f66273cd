//! Boolean and numeric rules.

use crate::foundation::ValidationError;
use crate::primitives;

crate::rule! {
    /// `"true"` or `"false"`, in any ASCII case.
    pub IsBool;
    check(value) { primitives::is_bool(value) }
    error(tag) { ValidationError::IsBool { tag } }
    fn is_bool();
}

crate::rule! {
    pub IsTrue;
    check(value) { primitives::is_true(value) }
    error(tag) { ValidationError::IsTrue { tag } }
    fn is_true();
}

crate::rule! {
    pub IsFalse;
    check(value) { primitives::is_false(value) }
    error(tag) { ValidationError::IsFalse { tag } }
    fn is_false();
}

crate::rule! {
    pub IsInt;
    check(value) { primitives::is_int(value) }
    error(tag) { ValidationError::IsInt { tag } }
    fn is_int();
}

crate::rule! {
    /// A decimal number. The empty string passes.
    pub IsFloat;
    check(value) { primitives::is_float(value) }
    error(tag) { ValidationError::IsFloat { tag } }
    fn is_float();
}

crate::rule! {
    /// Digits with an optional sign; leading zeros allowed.
    pub IsNumeric;
    check(value) { primitives::is_numeric(value) }
    error(tag) { ValidationError::IsNumeric { tag } }
    fn is_numeric();
}

crate::rule! {
    pub IsHexadecimal;
    check(value) { primitives::is_hexadecimal(value) }
    error(tag) { ValidationError::IsHexadecimal { tag } }
    fn is_hexadecimal();
}

crate::rule! {
    pub IsHexColor;
    check(value) { primitives::is_hex_color(value) }
    error(tag) { ValidationError::IsHexColor { tag } }
    fn is_hex_color();
}
