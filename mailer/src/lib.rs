use common::{
    env_config::Config,
    error::{AppError, Res},
};
use serde_json::json;

/// Client for the hosted email functions. Templating is owned by the
/// functions themselves; this side only posts the payload.
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    base_url: String,
    service_token: String,
    admin_email: String,
}

impl Mailer {
    pub fn from_config(config: &Config) -> Self {
        Mailer {
            client: reqwest::Client::new(),
            base_url: config.email_function_url.trim_end_matches('/').to_string(),
            service_token: config.email_service_token.clone(),
            admin_email: config.admin_email.clone(),
        }
    }

    pub async fn send_welcome_email(&self, to: &str, first_name: &str) -> Res<()> {
        self.invoke(
            "send-welcome-email",
            json!({ "to": to, "first_name": first_name }),
        )
        .await
    }

    pub async fn send_match_email(&self, to: &str, counterpart_name: &str) -> Res<()> {
        self.invoke(
            "send-match-email",
            json!({ "to": to, "match_name": counterpart_name }),
        )
        .await
    }

    pub async fn send_admin_notification(&self, subject: &str, body: &str) -> Res<()> {
        self.invoke(
            "send-admin-notification",
            json!({ "to": self.admin_email, "subject": subject, "body": body }),
        )
        .await
    }

    async fn invoke(&self, function: &str, payload: serde_json::Value) -> Res<()> {
        let url = format!("{}/{}", self.base_url, function);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_token)
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::Internal(format!(
                "Email function {} returned error status: {}",
                function,
                response.status()
            )))
        }
    }
}

/// Email delivery never blocks or fails the triggering request; failures
/// are logged and dropped.
pub fn spawn_mail<F>(label: &'static str, fut: F)
where
    F: std::future::Future<Output = Res<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = fut.await {
            log::warn!("Failed to send {}: {}", label, e);
        }
    });
}
