use cd_app::usecases::notifications::{
    BroadcastNotification, ListNotifications, MarkNotificationRead,
};
use cd_core::notification::{BroadcastAudience, BroadcastDraft, NotificationKind};

use crate::cli::NotificationKindArg;
use crate::context::AppContext;

impl From<NotificationKindArg> for NotificationKind {
    fn from(arg: NotificationKindArg) -> Self {
        match arg {
            NotificationKindArg::Info => NotificationKind::Info,
            NotificationKindArg::Reminder => NotificationKind::Reminder,
            NotificationKindArg::Warning => NotificationKind::Warning,
        }
    }
}

pub async fn list(ctx: &AppContext) -> anyhow::Result<()> {
    let notifications = ListNotifications::new(ctx.deps.notifications.clone())
        .execute()
        .await?;
    for notification in &notifications {
        let marker = if notification.read { " " } else { "*" };
        println!(
            "{marker} {}  [{:?}] {}: {}",
            notification.id, notification.kind, notification.title, notification.message
        );
    }
    println!("{} notification(s)", notifications.len());
    Ok(())
}

pub async fn read(ctx: &AppContext, id: String) -> anyhow::Result<()> {
    MarkNotificationRead::new(ctx.deps.notifications.clone())
        .execute(&id)
        .await?;
    println!("Marked {id} as read");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn broadcast(
    ctx: &AppContext,
    title: String,
    message: String,
    kind: NotificationKindArg,
    cohort: Option<String>,
    client: Option<String>,
    action_link: Option<String>,
) -> anyhow::Result<()> {
    let audience = match (cohort, client) {
        (Some(id), _) => BroadcastAudience::Cohort(id),
        (None, Some(id)) => BroadcastAudience::Client(id),
        (None, None) => BroadcastAudience::All,
    };
    let draft = BroadcastDraft {
        title,
        message,
        kind: kind.into(),
        audience,
        action_link,
    };
    let created = BroadcastNotification::new(ctx.deps.notifications.clone())
        .execute(&draft)
        .await?;
    println!("Broadcast {} published", created.id);
    Ok(())
}
