//! Command handlers for the `wn` binary.

pub mod analyze;
pub mod stats;

use std::fmt;

use clap::ValueEnum;
use wikinet_core::GroupMode;

/// CLI surface for the grouping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GroupByArg {
    /// Group by page: contributors become nodes.
    #[default]
    Users,
    /// Group by contributor: pages become nodes.
    Pages,
}

impl From<GroupByArg> for GroupMode {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::Users => Self::Users,
            GroupByArg::Pages => Self::Pages,
        }
    }
}

// clap needs Display to render the default value in --help.
impl fmt::Display for GroupByArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(GroupMode::from(*self).as_str())
    }
}
