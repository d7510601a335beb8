use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;

use cd_app::usecases::documents::{ListDocuments, PreviewDocument, UploadDocument};
use cd_app::usecases::ProgressSession;
use cd_core::document::{DocumentKind, DocumentUpload};

use crate::cli::DocumentKindArg;
use crate::context::AppContext;

impl From<DocumentKindArg> for DocumentKind {
    fn from(arg: DocumentKindArg) -> Self {
        match arg {
            DocumentKindArg::Identity => DocumentKind::IdentityDocument,
            DocumentKindArg::Participation => DocumentKind::ParticipationContract,
            DocumentKindArg::Consulting => DocumentKind::ConsultingContract,
            DocumentKindArg::Authority => DocumentKind::AuthorityDocument,
        }
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

pub async fn upload(ctx: &AppContext, file: PathBuf, kind: DocumentKindArg) -> anyhow::Result<()> {
    let bytes = fs::read(&file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    let upload = DocumentUpload {
        kind: kind.into(),
        content_type: content_type_for(&file).to_string(),
        file_name,
        bytes,
    };

    let mut session = ProgressSession::load(ctx.deps.account.clone()).await?;
    let outcome = UploadDocument::new(ctx.deps.documents.clone())
        .execute(&upload, &mut session)
        .await?;

    println!(
        "Stored {} as {} ({} bytes)",
        outcome.document.file_name, outcome.document.id, outcome.document.size
    );
    println!(
        "Onboarding: {}% complete, step {}",
        outcome.progress.percent_complete, outcome.progress.current_step
    );
    Ok(())
}

pub async fn list(ctx: &AppContext) -> anyhow::Result<()> {
    let documents = ListDocuments::new(ctx.deps.documents.clone()).execute().await?;
    for document in &documents {
        let uploaded = document
            .uploaded_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "-".into());
        println!(
            "{}  {:?}  {}  {} bytes  {}",
            document.id, document.kind, document.file_name, document.size, uploaded
        );
    }
    println!("{} document(s)", documents.len());
    Ok(())
}

pub async fn preview(ctx: &AppContext, id: String, out: Option<PathBuf>) -> anyhow::Result<()> {
    let bytes = PreviewDocument::new(ctx.deps.documents.clone()).execute(&id).await?;
    match out {
        Some(path) => {
            fs::write(&path, &bytes)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => println!("{} bytes available for {id}", bytes.len()),
    }
    Ok(())
}
