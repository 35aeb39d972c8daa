//! Identifier value objects.
//!
//! Clients, channels and languages are all referenced by plain strings in
//! fixtures and on the command line. Wrapping them keeps a channel id from
//! ever being passed where a client id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier.
            ///
            /// # Panics
            /// Panics if the value is blank (use `try_new` for fallible).
            pub fn new(value: impl Into<String>) -> Self {
                let value = value.into();
                assert!(
                    !value.trim().is_empty(),
                    concat!(stringify!($name), " cannot be blank")
                );
                Self(value.trim().to_owned())
            }

            /// Fallible constructor.
            pub fn try_new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::InvalidValue {
                        field: $field,
                        reason: "cannot be blank".into(),
                    });
                }
                Ok(Self(trimmed.to_owned()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl TryFrom<&str> for $name {
            type Error = DomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::try_new(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a notification client.
    ClientId,
    "client"
);

string_id!(
    /// Identifier of a notification channel (e.g. `email`, `sms`).
    ChannelId,
    "channel"
);

string_id!(
    /// Language code. Case is preserved: `en` and `en-US` are distinct.
    LangCode,
    "lang"
);

impl LangCode {
    /// Language used when a template does not name one.
    pub fn default_lang() -> Self {
        Self("en".to_owned())
    }
}

impl Default for LangCode {
    fn default() -> Self {
        Self::default_lang()
    }
}

/// Identity assigned to a template when it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(Uuid);

impl TemplateId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidValue {
                field: "template id",
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_trim_whitespace() {
        assert_eq!(ClientId::new("  manager-1 ").as_str(), "manager-1");
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert!(ChannelId::try_new("   ").is_err());
        assert!("".parse::<LangCode>().is_err());
        assert!(ClientId::try_from(" ").is_err());
    }

    #[test]
    fn borrowed_str_converts_fallibly() {
        assert_eq!(ClientId::try_from(" client-a ").unwrap(), "client-a");
        assert!(matches!(
            LangCode::try_from(""),
            Err(DomainError::InvalidValue { .. })
        ));
    }

    #[test]
    #[should_panic]
    fn new_panics_on_blank() {
        ClientId::new("");
    }

    #[test]
    fn lang_code_keeps_case() {
        assert_ne!(LangCode::new("en"), LangCode::new("en-US"));
        assert_eq!(LangCode::default(), "en");
    }

    #[test]
    fn template_id_parses_uuid() {
        let id = TemplateId::generate();
        assert_eq!(id.to_string().parse::<TemplateId>().unwrap(), id);
        assert!("not-a-uuid".parse::<TemplateId>().is_err());
    }
}
