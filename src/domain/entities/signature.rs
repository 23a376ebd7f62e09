//! Signature entity
//!
//! A signature is the byte pattern (header, optional footer, size cap) that
//! identifies one recoverable file type. It is the unit the scan engine
//! searches for.

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Errors raised when a signature definition is malformed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Signature '{name}' has an empty header")]
    EmptyHeader { name: String },

    #[error("Signature '{name}': max size {max_size} must exceed header length {header_len}")]
    MaxSizeTooSmall {
        name: String,
        max_size: u64,
        header_len: usize,
    },

    #[error("Signature '{name}' has an empty extension")]
    EmptyExtension { name: String },
}

/// A file signature used for carving
///
/// Built-in signatures borrow `'static` byte literals; signatures built at
/// runtime own their bytes. Both share the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: Cow<'static, str>,
    extension: Cow<'static, str>,
    header: Cow<'static, [u8]>,
    footer: Option<Cow<'static, [u8]>>,
    max_size: u64,
    description: Option<Cow<'static, str>>,
}

impl Signature {
    /// Creates a signature without a footer
    ///
    /// Fails if the header or extension is empty, or if `max_size` does not
    /// exceed the header length.
    pub fn new(
        name: impl Into<String>,
        extension: impl Into<String>,
        header: impl Into<Vec<u8>>,
        max_size: u64,
    ) -> Result<Self, SignatureError> {
        let name = name.into();
        let extension = extension.into();
        let header = header.into();

        if header.is_empty() {
            return Err(SignatureError::EmptyHeader { name });
        }
        if extension.is_empty() {
            return Err(SignatureError::EmptyExtension { name });
        }
        if max_size <= header.len() as u64 {
            return Err(SignatureError::MaxSizeTooSmall {
                name,
                max_size,
                header_len: header.len(),
            });
        }

        Ok(Self {
            name: Cow::Owned(name),
            extension: Cow::Owned(extension),
            header: Cow::Owned(header),
            footer: None,
            max_size,
            description: None,
        })
    }

    /// Compile-time constructor for the built-in catalog
    ///
    /// Callers are responsible for the header/size invariant; the catalog
    /// tests check every built-in entry.
    pub(crate) const fn builtin(
        name: &'static str,
        extension: &'static str,
        header: &'static [u8],
        footer: Option<&'static [u8]>,
        max_size: u64,
        description: Option<&'static str>,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            extension: Cow::Borrowed(extension),
            header: Cow::Borrowed(header),
            footer: match footer {
                Some(bytes) => Some(Cow::Borrowed(bytes)),
                None => None,
            },
            max_size,
            description: match description {
                Some(text) => Some(Cow::Borrowed(text)),
                None => None,
            },
        }
    }

    /// Sets the footer. An empty footer means "no footer".
    pub fn with_footer(mut self, footer: impl Into<Vec<u8>>) -> Self {
        let footer = footer.into();
        self.footer = if footer.is_empty() {
            None
        } else {
            Some(Cow::Owned(footer))
        };
        self
    }

    /// Sets the free-text description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Cow::Owned(description.into()));
        self
    }

    /// Human-readable type label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output filename suffix, without the dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn footer(&self) -> Option<&[u8]> {
        self.footer.as_deref()
    }

    /// Extent cap applied past the end of the header when no footer closes the match
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Description if present, otherwise the type name
    pub fn label(&self) -> &str {
        self.description().unwrap_or_else(|| self.name())
    }

    /// Checks the header/size invariant
    pub fn validate(&self) -> Result<(), SignatureError> {
        if self.header.is_empty() {
            return Err(SignatureError::EmptyHeader {
                name: self.name.to_string(),
            });
        }
        if self.extension.is_empty() {
            return Err(SignatureError::EmptyExtension {
                name: self.name.to_string(),
            });
        }
        if self.max_size <= self.header.len() as u64 {
            return Err(SignatureError::MaxSizeTooSmall {
                name: self.name.to_string(),
                max_size: self.max_size,
                header_len: self.header.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (.{})", self.name, self.extension)
    }
}
