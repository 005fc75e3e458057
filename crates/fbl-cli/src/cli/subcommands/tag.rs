use clap::Subcommand;

/// Tag commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TagCommands {
    /// List the tag catalog.
    List,
    /// Tag a feedback comment.
    Add { comment_id: u64, tag_id: u64 },
    /// Remove a tag assignment from a feedback comment.
    Remove {
        comment_id: u64,
        tag_id: u64,
        /// Assignment id shown on the tag chip.
        assignment_id: u64,
    },
}
