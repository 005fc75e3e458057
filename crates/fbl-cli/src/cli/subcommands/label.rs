use clap::Subcommand;

/// Label commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LabelCommands {
    /// List labels.
    List,
}
