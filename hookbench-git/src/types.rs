//! Value types for git operations

/// Committer identity written to a repository's local config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub name: &'static str,
    pub email: &'static str,
}

/// Identity used for every harness workspace.
///
/// Constant so runs never depend on the caller's git configuration.
pub const SYNTHETIC_IDENTITY: Identity = Identity {
    name: "Test User",
    email: "test@example.com",
};

/// Raw diff text captured after the hooks ran
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSnapshot {
    /// `git diff --cached`
    pub staged: String,
    /// `git diff`
    pub unstaged: String,
}

impl DiffSnapshot {
    pub fn has_staged(&self) -> bool {
        !self.staged.trim().is_empty()
    }

    pub fn has_unstaged(&self) -> bool {
        !self.unstaged.trim().is_empty()
    }
}
