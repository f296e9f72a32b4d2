/// Define a string-valued S3 enum.
///
/// Every enum gets an `Unknown(String)` arm so values added to the service after this
/// model was written still round-trip. The first listed value is the default.
macro_rules! s3_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                #[doc = concat!("`", $value, "`")]
                $variant,
            )+
            /// A value not known to this model.
            Unknown(String),
        }

        impl $name {
            /// All known wire values.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Returns the wire value of this variant.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(s) => s,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from(Self::VALUES[0])
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }
    };
}

/// Implement [`crate::output::S3Output`] for structs with a `response_metadata` field.
macro_rules! impl_s3_output {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $crate::output::S3Output for $name {
                fn response_metadata(&self) -> &$crate::error::ResponseMetadata {
                    &self.response_metadata
                }

                fn set_response_metadata(&mut self, metadata: $crate::error::ResponseMetadata) {
                    self.response_metadata = metadata;
                }
            }
        )+
    };
}
