use cd_app::usecases::clients::{
    CreateClient, DeleteClient, GetClient, ListClients, UpdateClient,
};
use cd_app::usecases::ImportClients;
use cd_core::client::{ClientDraft, ClientRecord, ClientStatus, ClientUpdate};
use cd_core::page::PageRequest;
use std::path::PathBuf;

use crate::cli::{ClientFields, ClientUpdateFields, StatusArg};
use crate::context::AppContext;

impl From<StatusArg> for ClientStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => ClientStatus::Pending,
            StatusArg::Active => ClientStatus::Active,
            StatusArg::Archived => ClientStatus::Archived,
        }
    }
}

fn print_client(record: &ClientRecord) {
    let cohort = record.cohort_id.as_deref().unwrap_or("-");
    println!(
        "{}  {}  <{}>  cohort: {}  status: {:?}",
        record.id,
        record.full_name(),
        record.email,
        cohort,
        record.status
    );
}

pub async fn list(
    ctx: &AppContext,
    page: u32,
    per_page: Option<u32>,
    search: Option<String>,
) -> anyhow::Result<()> {
    let request = PageRequest {
        page,
        per_page: per_page.unwrap_or(ctx.settings.per_page),
        search,
    };
    let result = ListClients::new(ctx.deps.clients.clone()).execute(&request).await?;

    for record in &result.items {
        print_client(record);
    }
    println!(
        "page {}/{}: {} client(s) total",
        result.page,
        result.total_pages(),
        result.total
    );
    Ok(())
}

pub async fn get(ctx: &AppContext, id: String) -> anyhow::Result<()> {
    let record = GetClient::new(ctx.deps.clients.clone()).execute(&id).await?;
    print_client(&record);
    Ok(())
}

pub async fn add(ctx: &AppContext, fields: ClientFields) -> anyhow::Result<()> {
    let draft = ClientDraft {
        first_name: fields.first_name,
        last_name: fields.last_name,
        email: fields.email,
        phone: fields.phone,
        cohort_id: fields.cohort,
    };
    let record = CreateClient::new(ctx.deps.clients.clone()).execute(&draft).await?;
    print_client(&record);
    Ok(())
}

pub async fn update(ctx: &AppContext, id: String, fields: ClientUpdateFields) -> anyhow::Result<()> {
    let update = ClientUpdate {
        first_name: fields.first_name,
        last_name: fields.last_name,
        email: fields.email,
        phone: fields.phone,
        cohort_id: fields.cohort,
        status: fields.status.map(Into::into),
    };
    let record = UpdateClient::new(ctx.deps.clients.clone())
        .execute(&id, &update)
        .await?;
    print_client(&record);
    Ok(())
}

pub async fn remove(ctx: &AppContext, id: String) -> anyhow::Result<()> {
    DeleteClient::new(ctx.deps.clients.clone()).execute(&id).await?;
    println!("Deleted {id}");
    Ok(())
}

pub async fn import(ctx: &AppContext, file: PathBuf) -> anyhow::Result<()> {
    let import = ImportClients::new(
        ctx.deps.tabular.clone(),
        ctx.deps.clients.clone(),
        ctx.settings.import.max_rows,
    );
    let report = import.execute(&file).await?;

    println!("Imported {} client(s)", report.created.len());
    for issue in &report.skipped {
        println!("  row {}: skipped ({})", issue.row, issue.reason);
    }
    for issue in &report.failed {
        println!("  row {}: rejected ({})", issue.row, issue.reason);
    }
    if report.truncated > 0 {
        println!("  {} row(s) beyond the configured cap were ignored", report.truncated);
    }
    Ok(())
}
