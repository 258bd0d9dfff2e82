//! Container image metadata carried by catalog entries.

use serde::{Deserialize, Serialize};

/// Bytes per mebibyte, used for the human-readable size label.
const BYTES_PER_MIB: u128 = 1024 * 1024;

/// OCI image an agent is distributed as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    repository: String,
    tag: String,
    digest: String,
    #[serde(rename = "size")]
    size_bytes: u64,
}

impl ImageReference {
    /// Creates an image reference.
    #[must_use]
    pub fn new(
        repository: impl Into<String>,
        tag: impl Into<String>,
        digest: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            repository: repository.into(),
            tag: tag.into(),
            digest: digest.into(),
            size_bytes,
        }
    }

    /// Returns the image repository (e.g. `ghcr.io/acme/documentation-agent`).
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the image tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the content digest.
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Returns the compressed image size in bytes.
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Returns the pullable `repository:tag` reference.
    #[must_use]
    pub fn oci_reference(&self) -> String {
        format!("{}:{}", self.repository, self.tag)
    }

    /// Returns the size in mebibytes with one decimal, e.g. `"50.0 MB"`.
    ///
    /// Rounds half up to the nearest tenth.
    #[must_use]
    pub fn display_size(&self) -> String {
        let scaled = u128::from(self.size_bytes) * 10 + BYTES_PER_MIB.div_euclid(2);
        let tenths = scaled.div_euclid(BYTES_PER_MIB);
        format!("{}.{} MB", tenths.div_euclid(10), tenths.rem_euclid(10))
    }
}
