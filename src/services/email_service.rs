// services/email_service.rs

use log::{error, info};
use std::time::Duration;

use crate::config::AppConfig;
use crate::models::contact::ContactMessage;

const MAILGUN_API_BASE: &str = "https://api.mailgun.net/v3";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends notification emails through the Mailgun HTTP API.
///
/// Delivery is best-effort: `send` reports success as a bool and never
/// returns an error, so callers cannot accidentally fail a request on a
/// broken email provider.
#[derive(Clone)]
pub struct EmailService {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    domain: String,
    sender: String,
}

impl EmailService {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_base: MAILGUN_API_BASE.to_string(),
            api_key: config.mailgun_api_key.clone(),
            domain: config.mailgun_domain.clone(),
            sender: config.sender_email.clone(),
        })
    }

    /// Attempts a single send; true only on HTTP 200 from the provider.
    /// Network errors, timeouts and non-200 responses are logged and
    /// reported as failure.
    pub async fn send(&self, to: &str, subject: &str, text: &str, html: Option<&str>) -> bool {
        let url = format!("{}/{}/messages", self.api_base, self.domain);
        let from = format!("Portfolio Contact <{}>", self.sender);

        let mut params = vec![
            ("from", from.as_str()),
            ("to", to),
            ("subject", subject),
            ("text", text),
        ];
        if let Some(html) = html {
            params.push(("html", html));
        }

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .form(&params)
            .send()
            .await;

        match response {
            Ok(response) if response.status().as_u16() == 200 => {
                info!("Email sent successfully to {}", to);
                true
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                error!("Failed to send email: {} - {}", status, body);
                false
            }
            Err(e) => {
                error!("Error sending email: {}", e);
                false
            }
        }
    }
}

/// Plain-text rendering of the notification for a new submission
pub fn notification_text(record: &ContactMessage) -> String {
    format!(
        "New contact form submission from your portfolio website:\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Subject: {}\n\
         \n\
         Message:\n\
         {}\n\
         \n\
         ---\n\
         Received at: {}\n",
        record.name,
        record.email,
        record.subject,
        record.message,
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// HTML rendering of the notification for a new submission
pub fn notification_html(record: &ContactMessage) -> String {
    format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f9f9f9;">
        <h2 style="color: #2c3e50; border-bottom: 3px solid #e74c3c; padding-bottom: 10px;">
            New Contact Form Submission
        </h2>

        <div style="background-color: white; padding: 20px; border-radius: 5px; margin-top: 20px;">
            <p style="margin: 10px 0;"><strong>Name:</strong> {name}</p>
            <p style="margin: 10px 0;"><strong>Email:</strong>
                <a href="mailto:{email}" style="color: #3498db;">{email}</a>
            </p>
            <p style="margin: 10px 0;"><strong>Subject:</strong> {subject}</p>

            <div style="margin-top: 20px; padding: 15px; background-color: #ecf0f1; border-left: 4px solid #3498db; border-radius: 3px;">
                <p style="margin: 0;"><strong>Message:</strong></p>
                <p style="margin: 10px 0 0 0; white-space: pre-wrap;">{message}</p>
            </div>
        </div>

        <p style="margin-top: 20px; font-size: 12px; color: #7f8c8d;">
            Received at: {received_at}
        </p>
    </div>
</body>
</html>"#,
        name = record.name,
        email = record.email,
        subject = record.subject,
        message = record.message,
        received_at = record.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::ContactMessageCreate;

    fn sample_record() -> ContactMessage {
        ContactMessage::new(ContactMessageCreate {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Line1\nLine2".to_string(),
        })
    }

    #[test]
    fn text_body_embeds_all_fields_and_line_breaks() {
        let record = sample_record();
        let text = notification_text(&record);

        assert!(text.contains("Name: Ada"));
        assert!(text.contains("Email: ada@example.com"));
        assert!(text.contains("Subject: Hello"));
        assert!(text.contains("Line1\nLine2"));
        assert!(text.contains(&record.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()));
    }

    #[test]
    fn html_body_embeds_fields_and_mailto_link() {
        let record = sample_record();
        let html = notification_html(&record);

        assert!(html.contains("<strong>Name:</strong> Ada"));
        assert!(html.contains(r#"<a href="mailto:ada@example.com""#));
        assert!(html.contains("<strong>Subject:</strong> Hello"));
        assert!(html.contains("Line1\nLine2"));
    }

    #[tokio::test]
    async fn send_reports_failure_when_provider_is_unreachable() {
        let service = EmailService {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(2))
                .build()
                .unwrap(),
            api_base: "http://127.0.0.1:9".to_string(),
            api_key: "key".to_string(),
            domain: "example.test".to_string(),
            sender: "noreply@example.test".to_string(),
        };

        assert!(!service.send("to@example.test", "subject", "body", None).await);
    }
}
