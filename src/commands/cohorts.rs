use anyhow::Context;
use chrono::NaiveDate;

use cd_app::usecases::cohorts::{
    AssignClients, CreateCohort, DeleteCohort, ListCohorts, UpdateCohort,
};
use cd_core::cohort::{Cohort, CohortDraft, CohortUpdate};

use crate::context::AppContext;

fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date {value:?}, expected YYYY-MM-DD"))
}

fn print_cohort(cohort: &Cohort) {
    let starts = cohort
        .starts_on
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".into());
    let seats = cohort
        .seats_left()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "unlimited".into());
    println!(
        "{}  {}  starts: {}  members: {}  seats left: {}",
        cohort.id, cohort.name, starts, cohort.client_count, seats
    );
}

pub async fn list(ctx: &AppContext) -> anyhow::Result<()> {
    let cohorts = ListCohorts::new(ctx.deps.cohorts.clone()).execute().await?;
    for cohort in &cohorts {
        print_cohort(cohort);
    }
    println!("{} cohort(s)", cohorts.len());
    Ok(())
}

pub async fn add(
    ctx: &AppContext,
    name: String,
    starts_on: Option<String>,
    capacity: Option<u32>,
) -> anyhow::Result<()> {
    let draft = CohortDraft {
        name,
        starts_on: starts_on.as_deref().map(parse_date).transpose()?,
        capacity,
    };
    let cohort = CreateCohort::new(ctx.deps.cohorts.clone()).execute(&draft).await?;
    print_cohort(&cohort);
    Ok(())
}

pub async fn update(
    ctx: &AppContext,
    id: String,
    name: Option<String>,
    starts_on: Option<String>,
    capacity: Option<u32>,
) -> anyhow::Result<()> {
    let update = CohortUpdate {
        name,
        starts_on: starts_on.as_deref().map(parse_date).transpose()?,
        capacity,
    };
    let cohort = UpdateCohort::new(ctx.deps.cohorts.clone())
        .execute(&id, &update)
        .await?;
    print_cohort(&cohort);
    Ok(())
}

pub async fn remove(ctx: &AppContext, id: String) -> anyhow::Result<()> {
    DeleteCohort::new(ctx.deps.cohorts.clone()).execute(&id).await?;
    println!("Deleted {id}");
    Ok(())
}

pub async fn assign(ctx: &AppContext, id: String, clients: Vec<String>) -> anyhow::Result<()> {
    let cohort = AssignClients::new(ctx.deps.cohorts.clone())
        .execute(&id, &clients)
        .await?;
    print_cohort(&cohort);
    Ok(())
}
