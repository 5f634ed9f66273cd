//! Locale-specific formats: phone numbers and postal codes.
//!
//! Both tables are plain enums generated by [`locale_table!`], one regex per
//! variant, compiled lazily on first use. Variants parse from their code
//! (`el-GR`, `el_GR`, `BE`, `be`) and serialize back to the hyphenated form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A locale or country code that no table entry matches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{code}`")]
pub struct UnknownLocale {
    /// Which table was searched.
    pub kind: &'static str,
    /// The code as given.
    pub code: String,
}

macro_rules! locale_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, $pattern:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(non_camel_case_types)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every entry, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// The hyphenated code.
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// The source of the regex this entry matches with.
            #[must_use]
            pub const fn pattern(self) -> &'static str {
                match self {
                    $( $name::$variant => $pattern, )+
                }
            }

            /// `value` matches this entry's format.
            #[must_use]
            pub fn is_match(self, value: &str) -> bool {
                static TABLE: ::std::sync::LazyLock<Vec<::regex::Regex>> =
                    ::std::sync::LazyLock::new(|| {
                        $name::ALL
                            .iter()
                            .map(|entry| {
                                ::regex::Regex::new(entry.pattern())
                                    .expect(concat!(stringify!($name), " table regex compiles"))
                            })
                            .collect()
                    });
                TABLE[self as usize].is_match(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLocale;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().replace('_', "-");
                $name::ALL
                    .iter()
                    .copied()
                    .find(|entry| entry.code().eq_ignore_ascii_case(&normalized))
                    .ok_or_else(|| UnknownLocale {
                        kind: $kind,
                        code: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = String::deserialize(deserializer)?;
                code.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

locale_table! {
    /// Locales with a known mobile or landline phone number format.
    pub enum Phone ("phone locale") {
        ar_AE => "ar-AE", r"^((\+?971)|0)?5[024568]\d{7}$";
        ar_DZ => "ar-DZ", r"^(\+?213|0)(5|6|7)\d{8}$";
        ar_EG => "ar-EG", r"^((\+?20)|0)?1[012]\d{8}$";
        ar_JO => "ar-JO", r"^(\+?962|0)?7[789]\d{7}$";
        ar_SA => "ar-SA", r"^((\+?966)|0)?5\d{8}$";
        ar_SY => "ar-SY", r"^((\+?963)|0)?9\d{8}$";
        cs_CZ => "cs-CZ", r"^(\+?420)? ?[1-9][0-9]{2} ?[0-9]{3} ?[0-9]{3}$";
        da_DK => "da-DK", r"^(\+?45)?\s?\d{2}\s?\d{2}\s?\d{2}\s?\d{2}$";
        de_DE => "de-DE", r"^(\+?49[ .\-])?(\([0-9]{1,6}\))?([0-9 .\-/]{3,20})((x|ext|extension) ?[0-9]{1,4})?$";
        el_GR => "el-GR", r"^(\+?30)?(2\d{9}|69\d{8})$";
        en_AU => "en-AU", r"^(\+?61|0)4\d{8}$";
        en_GB => "en-GB", r"^(\+?44|0)7\d{9}$";
        en_HK => "en-HK", r"^(\+?852-?)?[456789]\d{3}-?\d{4}$";
        en_IN => "en-IN", r"^(\+?91|0)?[6789]\d{9}$";
        en_NZ => "en-NZ", r"^(\+?64|0)2\d{7,9}$";
        en_US => "en-US", r"^(\+?1)?[2-9]\d{2}[2-9]\d{6}$";
        en_ZA => "en-ZA", r"^(\+?27|0)\d{9}$";
        en_ZM => "en-ZM", r"^(\+?26)?09[567]\d{7}$";
        es_ES => "es-ES", r"^(\+?34)?(6\d|7[1234])\d{7}$";
        fi_FI => "fi-FI", r"^(\+?358|0)\s?(4[012456]?|50)\s?(\d\s?){4,8}\d$";
        fr_FR => "fr-FR", r"^(\+?33|0)[67]\d{8}$";
        he_IL => "he-IL", r"^(\+972|0)([23489]|5[0248]|77)[1-9]\d{6}$";
        hu_HU => "hu-HU", r"^(\+?36)(20|30|70)\d{7}$";
        it_IT => "it-IT", r"^(\+?39)?\s?3\d{2} ?\d{6,7}$";
        ja_JP => "ja-JP", r"^(\+?81|0)\d{1,4}[ \-]?\d{1,4}[ \-]?\d{4}$";
        ms_MY => "ms-MY", r"^(\+?6?01)(([145][\-\s]?\d{7,8})|([236789][\s\-]?\d{7}))$";
        nb_NO => "nb-NO", r"^(\+?47)?[49]\d{7}$";
        nl_BE => "nl-BE", r"^((\+|00)32|0)[1-35-9]\d{7,8}$";
        /// Belgian mobile numbers, which start with `4` after the trunk prefix.
        nl_BE_mobile => "nl-BE-mobile", r"^((\+|00)32|0)4\d{9}$";
        nl_NL => "nl-NL", r"^((\+|00)31|0)[1-9]\d{8}$";
        nn_NO => "nn-NO", r"^(\+?47)?[49]\d{7}$";
        pl_PL => "pl-PL", r"^(\+?48)? ?[5-8]\d ?\d{3} ?\d{2} ?\d{2}$";
        pt_BR => "pt-BR", r"^(\+?55|0)-?[1-9]{2}-?[2-9]\d{3,4}-?\d{4}$";
        pt_PT => "pt-PT", r"^(\+?351)?9[1236]\d{7}$";
        ru_RU => "ru-RU", r"^(\+?7|8)?9\d{9}$";
        sr_RS => "sr-RS", r"^(\+3816|06)[- \d]{5,9}$";
        tr_TR => "tr-TR", r"^(\+?90|0)?5\d{9}$";
        vi_VN => "vi-VN", r"^(\+?84|0)?(1(2\d|6[2-9]|88|99)|9[0-46-9])\d{7}$";
        zh_CN => "zh-CN", r"^(\+?0?86-?)?1[345789]\d{9}$";
        zh_TW => "zh-TW", r"^(\+?886-?|0)?9\d{8}$";
    }
}

locale_table! {
    /// Countries with a known postal code format.
    pub enum PostalCode ("postal code country") {
        AT => "AT", r"^\d{4}$";
        AU => "AU", r"^\d{4}$";
        BE => "BE", r"^\d{4}$";
        CA => "CA", r"(?i)^[ABCEGHJKLMNPRSTVXY]\d[ABCEGHJ-NPRSTV-Z][\s\-]?\d[ABCEGHJ-NPRSTV-Z]\d$";
        CH => "CH", r"^\d{4}$";
        CZ => "CZ", r"^\d{3}\s?\d{2}$";
        DE => "DE", r"^\d{5}$";
        DK => "DK", r"^\d{4}$";
        DZ => "DZ", r"^\d{5}$";
        ES => "ES", r"^\d{5}$";
        FI => "FI", r"^\d{5}$";
        FR => "FR", r"^\d{2}\s?\d{3}$";
        GB => "GB", r"(?i)^(gir\s?0aa|[a-z]{1,2}\d[\da-z]?\s?(\d[a-z]{2})?)$";
        GR => "GR", r"^\d{3}\s?\d{2}$";
        IL => "IL", r"^\d{5}$";
        IN => "IN", r"^[1-9]\d{5}$";
        IS => "IS", r"^\d{3}$";
        IT => "IT", r"^\d{5}$";
        JP => "JP", r"^\d{3}-\d{4}$";
        KE => "KE", r"^\d{5}$";
        LI => "LI", r"^(948[5-9]|949[0-7])$";
        MX => "MX", r"^\d{5}$";
        NL => "NL", r"(?i)^\d{4}\s?[a-z]{2}$";
        NO => "NO", r"^\d{4}$";
        PL => "PL", r"^\d{2}-\d{3}$";
        PT => "PT", r"^\d{4}-\d{3}$";
        RO => "RO", r"^\d{6}$";
        RU => "RU", r"^\d{6}$";
        SA => "SA", r"^\d{5}$";
        SE => "SE", r"^\d{3}\s?\d{2}$";
        TW => "TW", r"^\d{3}(\d{2})?$";
        US => "US", r"^\d{5}(-\d{4})?$";
        ZA => "ZA", r"^\d{4}$";
        ZM => "ZM", r"^\d{5}$";
    }
}

/// `value` is a phone number in `locale`.
#[must_use]
pub fn is_phone(value: &str, locale: Phone) -> bool {
    locale.is_match(value)
}

/// `value` is a postal code in `country`.
#[must_use]
pub fn is_postal_code(value: &str, country: PostalCode) -> bool {
    country.is_match(value)
}
