use cd_app::usecases::onboarding::ProgressDto;
use cd_app::usecases::ProgressSession;

use crate::context::AppContext;

fn print_progress(view: &ProgressDto) {
    println!("{}% complete, step {}", view.percent_complete, view.current_step);
    for step in &view.steps {
        let mark = if step.completed { "x" } else { " " };
        let here = if step.current { "  <- current" } else { "" };
        println!("  [{mark}] {} {}{}", step.ordinal, step.title, here);
    }
}

pub async fn show(ctx: &AppContext) -> anyhow::Result<()> {
    let session = ProgressSession::load(ctx.deps.account.clone()).await?;
    print_progress(&session.view());
    Ok(())
}

pub async fn goto(ctx: &AppContext, step: u8) -> anyhow::Result<()> {
    let mut session = ProgressSession::load(ctx.deps.account.clone()).await?;
    let change = session.request_step(step).await?;

    if change.admitted_step != step {
        println!("Step {step} is not reachable yet, back to step {}", change.admitted_step);
    } else if change.synthesized {
        println!("Admitted to step {step}; earlier milestones were marked complete");
    } else {
        println!("On step {step}");
    }
    print_progress(&change.progress);
    Ok(())
}

pub async fn complete(ctx: &AppContext, step: u8) -> anyhow::Result<()> {
    let mut session = ProgressSession::load(ctx.deps.account.clone()).await?;
    session.record_milestone(step).await?;
    print_progress(&session.view());
    Ok(())
}
