use common::error::{AppError, Res};
use db::{dtos::lead::LeadCreateRequest, models::lead::SilverLead};
use mailer::Mailer;
use sqlx::PgPool;

use crate::dtos::referral::LeadRequest;

/// Stores a marketing lead and pings the admin mailbox. The email is
/// fire-and-forget; a delivery failure never loses the lead.
pub async fn capture_lead(pool: &PgPool, mailer: Mailer, req: LeadRequest) -> Res<SilverLead> {
    let full_name = req.full_name.trim().to_string();
    let email = req.email.trim().to_lowercase();
    if full_name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if !email.contains('@') {
        return Err(AppError::BadRequest(
            "A valid email address is required".to_string(),
        ));
    }

    let lead = db::lead::insert_lead(
        pool,
        LeadCreateRequest {
            full_name,
            email,
            phone: req.phone,
            city: req.city,
            message: req.message,
            source: req.source,
            referral_code: req.referral_code.map(|c| c.trim().to_uppercase()),
        },
    )
    .await?;

    let subject = format!("New lead: {}", lead.full_name);
    let body = format!(
        "{} <{}> left their details on the {} form.",
        lead.full_name,
        lead.email,
        lead.source.as_deref().unwrap_or("website"),
    );
    mailer::spawn_mail("admin lead notification", async move {
        mailer.send_admin_notification(&subject, &body).await
    });

    Ok(lead)
}
