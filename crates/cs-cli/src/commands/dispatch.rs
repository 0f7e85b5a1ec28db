use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Reconcile(args) => commands::reconcile::handle(&args, ctx, flags),
        Commands::Classify(args) => commands::classify::handle(&args, ctx, flags),
        Commands::Run(args) => commands::run::handle(&args, ctx, flags),
        Commands::Exceptions { action } => commands::exceptions::handle(&action, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
