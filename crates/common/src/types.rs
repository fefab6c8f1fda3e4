use uuid::Uuid;

/// Generates a fresh identifier string (UUID v4, hyphenated).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Declares a string-backed entity identifier.
///
/// Each identifier is its own type so that a customer id cannot be passed
/// where a product id is expected. Identifiers coming from storage or tests
/// (`"123"`) are accepted as-is; [`generate_id`] is only used by `new()`.
///
/// The invoking crate must depend on `serde`.
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self($crate::generate_id())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    entity_id!(
        /// Identifier used only by these tests.
        SampleId
    );

    #[test]
    fn new_creates_unique_ids() {
        let id1 = SampleId::new();
        let id2 = SampleId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn generated_id_is_a_uuid() {
        let id = SampleId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn from_str_preserves_value() {
        let id = SampleId::from("123");
        assert_eq!(id.as_str(), "123");
        assert_eq!(id.to_string(), "123");
        assert_eq!(String::from(id), "123");
    }

    #[test]
    fn blank_detection() {
        assert!(SampleId::from("").is_blank());
        assert!(SampleId::from("   ").is_blank());
        assert!(!SampleId::from("a").is_blank());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = SampleId::from("329");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"329\"");
        let deserialized: SampleId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
