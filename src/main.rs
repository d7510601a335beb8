//! CohortDesk entry point.

mod bootstrap;
mod cli;
mod commands;
mod context;

use clap::Parser;
use tracing::error;

use cd_app::usecases::SessionGuard;
use cd_core::error::ApiError;

use cli::{
    Cli, ClientsCommand, CohortsCommand, Command, DocumentsCommand, NotificationsCommand,
    ProgressCommand,
};
use context::AppContext;

#[tokio::main]
async fn main() {
    bootstrap::init_tracing();
    let cli = Cli::parse();

    let ctx = match context::build().await {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("failed to initialize: {e:#}");
            std::process::exit(1);
        }
    };

    if !ctx.has_session && !matches!(cli.command, Command::Login { .. }) {
        tracing::debug!("no stored session; requests will go out unauthenticated");
    }

    if let Err(e) = dispatch(&ctx, cli.command).await {
        // An expired session terminates globally: clear the token and point
        // the operator back at login instead of echoing a bare 401.
        if let Some(api_error) = e.downcast_ref::<ApiError>() {
            let guard = SessionGuard::new(ctx.deps.token_store.clone());
            if guard.intercept(api_error).await {
                eprintln!("Session expired. Run `cohortdesk login` to sign in again.");
                std::process::exit(1);
            }
            if api_error.is_transient() {
                eprintln!("Error: {api_error}");
                eprintln!("This looks temporary; retry the command.");
                std::process::exit(1);
            }
        }
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn dispatch(ctx: &AppContext, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => commands::auth::login(ctx, email, password).await,
        Command::Logout => commands::auth::logout(ctx).await,
        Command::Me => commands::auth::me(ctx).await,

        Command::Progress { command } => match command {
            ProgressCommand::Show => commands::progress::show(ctx).await,
            ProgressCommand::Goto { step } => commands::progress::goto(ctx, step).await,
            ProgressCommand::Complete { step } => commands::progress::complete(ctx, step).await,
        },

        Command::Clients { command } => match command {
            ClientsCommand::List {
                page,
                per_page,
                search,
            } => commands::clients::list(ctx, page, per_page, search).await,
            ClientsCommand::Get { id } => commands::clients::get(ctx, id).await,
            ClientsCommand::Add(fields) => commands::clients::add(ctx, fields).await,
            ClientsCommand::Update { id, fields } => {
                commands::clients::update(ctx, id, fields).await
            }
            ClientsCommand::Remove { id } => commands::clients::remove(ctx, id).await,
            ClientsCommand::Import { file } => commands::clients::import(ctx, file).await,
        },

        Command::Cohorts { command } => match command {
            CohortsCommand::List => commands::cohorts::list(ctx).await,
            CohortsCommand::Add {
                name,
                starts_on,
                capacity,
            } => commands::cohorts::add(ctx, name, starts_on, capacity).await,
            CohortsCommand::Update {
                id,
                name,
                starts_on,
                capacity,
            } => commands::cohorts::update(ctx, id, name, starts_on, capacity).await,
            CohortsCommand::Remove { id } => commands::cohorts::remove(ctx, id).await,
            CohortsCommand::Assign { id, clients } => {
                commands::cohorts::assign(ctx, id, clients).await
            }
        },

        Command::Documents { command } => match command {
            DocumentsCommand::Upload { file, kind } => {
                commands::documents::upload(ctx, file, kind).await
            }
            DocumentsCommand::List => commands::documents::list(ctx).await,
            DocumentsCommand::Preview { id, out } => {
                commands::documents::preview(ctx, id, out).await
            }
        },

        Command::Notifications { command } => match command {
            NotificationsCommand::List => commands::notifications::list(ctx).await,
            NotificationsCommand::Read { id } => commands::notifications::read(ctx, id).await,
            NotificationsCommand::Broadcast {
                title,
                message,
                kind,
                cohort,
                client,
                action_link,
            } => {
                commands::notifications::broadcast(
                    ctx,
                    title,
                    message,
                    kind,
                    cohort,
                    client,
                    action_link,
                )
                .await
            }
        },
    }
}
