use clap::{Args, Subcommand};
use fbl_core::enums::TitleOrder;

use crate::cli::subcommands::{FeedbackCommands, LabelCommands, TagCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Feedback listing and export.
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },
    /// Tags on feedback comments.
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },
    /// API-side labels.
    Label {
        #[command(subcommand)]
        action: LabelCommands,
    },
    /// Node ids the reviewer watches.
    Watched(WatchedArgs),
}

#[derive(Clone, Debug, Args)]
pub struct WatchedArgs {
    /// Flag id (defaults to cms.flag_id).
    #[arg(long)]
    pub flag_id: Option<String>,
    /// Title order: asc or desc.
    #[arg(long, default_value = "asc")]
    pub order: TitleOrder,
}
