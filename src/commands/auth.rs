use cd_app::usecases::{Login, Logout};
use cd_core::account::Credentials;
use cd_core::onboarding::{compute_progress, reconcile};

use crate::context::AppContext;

pub async fn login(ctx: &AppContext, email: String, password: String) -> anyhow::Result<()> {
    let login = Login::new(ctx.deps.account.clone(), ctx.deps.token_store.clone());
    let profile = login.execute(&Credentials { email, password }).await?;
    println!("Signed in as {} <{}>", profile.name, profile.email);
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> anyhow::Result<()> {
    Logout::new(ctx.deps.token_store.clone()).execute().await?;
    println!("Signed out");
    Ok(())
}

pub async fn me(ctx: &AppContext) -> anyhow::Result<()> {
    let profile = ctx.deps.account.fetch_profile().await?;
    let progress = compute_progress(&reconcile(profile.documents));
    println!("{} <{}>  role: {}", profile.name, profile.email, profile.role);
    println!(
        "Onboarding: {}% complete, step {}",
        progress.percent_complete, progress.current_step
    );
    Ok(())
}
