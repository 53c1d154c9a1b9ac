use std::fmt;

/// The two independently tracked snapshot streams of one inventory run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotKind {
    /// Inventory listing captured from standard output
    Primary,
    /// Diagnostic text captured from standard error
    Secondary,
}

impl SnapshotKind {
    /// Processing order within a run
    pub const ALL: [SnapshotKind; 2] = [SnapshotKind::Primary, SnapshotKind::Secondary];

    /// File extension of retained snapshots of this kind
    pub fn extension(self) -> &'static str {
        match self {
            SnapshotKind::Primary => "txt",
            SnapshotKind::Secondary => "err",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SnapshotKind::Primary => "primary",
            SnapshotKind::Secondary => "secondary",
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
