// src/watch/ops.rs

//! Mapping between CLI operation flags and `notify` event kinds.

use std::fmt;

use notify::EventKind;
use notify::event::ModifyKind;

use crate::cli::CliArgs;

/// One of the five categories of filesystem change the tool can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Write,
    Create,
    Chmod,
    Remove,
    Rename,
}

impl OperationKind {
    /// All kinds, in the order the event loop checks them.
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Write,
        OperationKind::Create,
        OperationKind::Chmod,
        OperationKind::Remove,
        OperationKind::Rename,
    ];

    /// Whether a notification of the given kind counts as this operation.
    ///
    /// `Modify(Any)` and `Modify(Other)` are coarse "content changed" reports
    /// from backends that cannot be more precise, so they count as writes.
    /// Access events and the top-level catch-all kinds map to no operation.
    pub fn matches(&self, kind: &EventKind) -> bool {
        match self {
            OperationKind::Write => matches!(
                kind,
                EventKind::Modify(ModifyKind::Data(_))
                    | EventKind::Modify(ModifyKind::Any)
                    | EventKind::Modify(ModifyKind::Other)
            ),
            OperationKind::Create => matches!(kind, EventKind::Create(_)),
            OperationKind::Chmod => matches!(kind, EventKind::Modify(ModifyKind::Metadata(_))),
            OperationKind::Remove => matches!(kind, EventKind::Remove(_)),
            OperationKind::Rename => matches!(kind, EventKind::Modify(ModifyKind::Name(_))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Write => "write",
            OperationKind::Create => "create",
            OperationKind::Chmod => "chmod",
            OperationKind::Remove => "remove",
            OperationKind::Rename => "rename",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which operation kinds the user asked to watch. Fixed at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationSet {
    write: bool,
    create: bool,
    chmod: bool,
    remove: bool,
    rename: bool,
}

impl OperationSet {
    /// Build the set from the five CLI flags.
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            write: args.write,
            create: args.create,
            chmod: args.chmod,
            remove: args.remove,
            rename: args.rename,
        }
    }

    /// Set with exactly the given kinds enabled.
    pub fn from_kinds(kinds: &[OperationKind]) -> Self {
        let mut set = Self::default();
        for op in kinds {
            match op {
                OperationKind::Write => set.write = true,
                OperationKind::Create => set.create = true,
                OperationKind::Chmod => set.chmod = true,
                OperationKind::Remove => set.remove = true,
                OperationKind::Rename => set.rename = true,
            }
        }
        set
    }

    pub fn contains(&self, op: OperationKind) -> bool {
        match op {
            OperationKind::Write => self.write,
            OperationKind::Create => self.create,
            OperationKind::Chmod => self.chmod,
            OperationKind::Remove => self.remove,
            OperationKind::Rename => self.rename,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.write || self.create || self.chmod || self.remove || self.rename)
    }
}
