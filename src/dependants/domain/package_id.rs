use crate::shared::error::DependantsError;
use crate::shared::Result;

/// Maximum length for NuGet package ids
const MAX_PACKAGE_ID_LENGTH: usize = 100;

/// NewType wrapper for the target package id with validation
///
/// The id is embedded inside an OData `$filter` string literal, so the
/// character set is restricted to what NuGet itself accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            return Err(Self::invalid(id, "Package id cannot be empty"));
        }

        if id.len() > MAX_PACKAGE_ID_LENGTH {
            let reason = format!(
                "Package id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_PACKAGE_ID_LENGTH
            );
            return Err(Self::invalid(id, &reason));
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
        {
            return Err(Self::invalid(
                id,
                "Package id contains invalid characters. Only letters, digits, dots, hyphens and underscores are allowed.",
            ));
        }

        Ok(Self(id))
    }

    fn invalid(id: String, reason: &str) -> anyhow::Error {
        DependantsError::InvalidPackageId {
            id,
            reason: reason.to_string(),
        }
        .into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
