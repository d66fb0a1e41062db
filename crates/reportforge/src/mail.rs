//! SMTP delivery of the rendered report.

use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

use crate::prelude::*;

/// SMTP delivery settings, resolved once at CLI parse time and passed in by
/// value.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub sender: String,
    pub password: String,
}

/// Build the outgoing message with the report attached.
pub fn build_message(
    config: &SmtpConfig,
    to: &str,
    subject: &str,
    body: &str,
    attachment_name: &str,
    attachment: Vec<u8>,
) -> Result<Message> {
    let content_type = ContentType::parse("application/pdf")
        .map_err(|e| eyre!("invalid attachment content type: {}", e))?;

    Message::builder()
        .from(config
            .sender
            .parse()
            .map_err(|e| eyre!("invalid sender address '{}': {}", config.sender, e))?)
        .to(to
            .parse()
            .map_err(|e| eyre!("invalid recipient address '{}': {}", to, e))?)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body.to_string()))
                .singlepart(
                    Attachment::new(attachment_name.to_string()).body(attachment, content_type),
                ),
        )
        .map_err(|e| eyre!("failed to build message: {}", e))
}

/// Send the rendered report as an attachment over authenticated SMTP with
/// STARTTLS.
pub fn send_report(
    config: &SmtpConfig,
    to: &str,
    subject: &str,
    body: &str,
    attachment_path: &Path,
) -> Result<()> {
    let bytes = std::fs::read(attachment_path)
        .wrap_err_with(|| f!("failed to read attachment {}", attachment_path.display()))?;
    let filename = attachment_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("report.pdf")
        .to_string();

    let message = build_message(config, to, subject, body, &filename, bytes)?;

    let mailer = SmtpTransport::starttls_relay(&config.server)
        .map_err(|e| eyre!("failed to configure SMTP relay: {}", e))?
        .port(config.port)
        .credentials(Credentials::new(
            config.sender.clone(),
            config.password.clone(),
        ))
        .build();

    mailer
        .send(&message)
        .map_err(|e| eyre!("failed to send email: {}", e))?;

    log::info!("Email sent to {}", to);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_config() -> SmtpConfig {
        SmtpConfig {
            server: "smtp.example.com".to_string(),
            port: 587,
            sender: "sender@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_build_message_with_attachment() {
        let message = build_message(
            &fixture_config(),
            "to@example.com",
            "Automated Research Report",
            "Please find the report attached.",
            "final_report.pdf",
            b"%PDF-1.5 fake".to_vec(),
        )
        .unwrap();

        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("Subject: Automated Research Report"));
        assert!(formatted.contains("application/pdf"));
        assert!(formatted.contains("final_report.pdf"));
    }

    #[test]
    fn test_build_message_rejects_invalid_recipient() {
        let result = build_message(
            &fixture_config(),
            "not-an-address",
            "subject",
            "body",
            "report.pdf",
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_send_report_fails_on_missing_attachment() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.pdf");
        let result = send_report(
            &fixture_config(),
            "to@example.com",
            "subject",
            "body",
            &missing,
        );
        assert!(result.is_err());
    }
}
