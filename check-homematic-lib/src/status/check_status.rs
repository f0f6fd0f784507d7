use strum::{Display, EnumIter};

/// The health verdict of a check.
///
/// Exit codes and merge precedence are two separate mappings: the exit codes are
/// fixed by the monitoring plugin interface, while merging ranks `Unknown` between
/// `Warning` and `Critical`. There is no `Ord` impl; rank with [`Status::severity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// The process exit code reported to the monitoring system.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// Rank used when combining statuses; higher wins.
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Unknown => 2,
            Self::Critical => 3,
        }
    }

    /// Combine two statuses, keeping the more severe one.
    #[must_use]
    pub const fn merge(self, incoming: Self) -> Self {
        if incoming.severity() > self.severity() { incoming } else { self }
    }

    /// Map a boolean condition to a status: `on_true` when the flag is set, `Ok` otherwise.
    #[must_use]
    pub const fn from_condition(flag: bool, on_true: Self) -> Self {
        if flag { on_true } else { Self::Ok }
    }

    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}
