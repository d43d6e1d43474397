//! Generation options.
//!
//! One options value is supplied per generation request; there is no
//! process-wide configuration beyond the default-header constant.

/// Header emitted when no custom header text is configured.
pub const DEFAULT_HEADER: &str = "// Type declarations for the grammar's rules";

/// Options controlling naming and rendering of the emitted declarations.
///
/// With the `serde` feature the struct deserializes from the camelCase JSON
/// option shape (`doNotCamelCaseTypes`, `customHeader`, `captureFallbackType`),
/// with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GenOptions {
    /// Use raw rule names as declaration identifiers instead of converting
    /// them to upper camel case.
    pub do_not_camel_case_types: bool,

    /// Header text emitted verbatim at the top of the output. `None` uses
    /// [`DEFAULT_HEADER`].
    pub custom_header: Option<String>,

    /// Type text used for sequence and capture bodies, whose result shape
    /// cannot be derived structurally. `None` uses the built-in default, an
    /// array of the single-character match type (`string[]`).
    pub capture_fallback_type: Option<String>,
}

impl GenOptions {
    /// The header text to emit.
    pub fn header(&self) -> &str {
        self.custom_header.as_deref().unwrap_or(DEFAULT_HEADER)
    }
}
