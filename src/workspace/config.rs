//! Behaviour knobs for the workspace.

/// Default logical folder for uploaded attachments.
pub const DEFAULT_UPLOAD_PREFIX: &str = "orders";

/// Workspace configuration.
///
/// ```
/// use workboard::workspace::WorkspaceConfig;
///
/// let config = WorkspaceConfig::default().with_upload_prefix("tickets");
/// assert_eq!(config.upload_prefix(), "tickets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    upload_prefix: String,
}

impl WorkspaceConfig {
    /// Sets the logical folder attachments are uploaded into.
    #[must_use]
    pub fn with_upload_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.upload_prefix = prefix.into();
        self
    }

    /// Returns the logical folder attachments are uploaded into.
    #[must_use]
    pub fn upload_prefix(&self) -> &str {
        &self.upload_prefix
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            upload_prefix: DEFAULT_UPLOAD_PREFIX.to_owned(),
        }
    }
}
