//! Offer-letter dispatch: template rendering plus outbound delivery.

use staffly_application::{DeliveryReport, EmailSender, OutboundEmail};
use staffly_domain::{Applicant, Job};
use tracing::info;

use crate::document_templates::offer_letter_html;

/// Renders the offer letter for an applicant and hands it to the email
/// sender, returning the structured delivery report.
pub async fn send_offer_letter(
    sender: &dyn EmailSender,
    applicant: &Applicant,
    job: &Job,
) -> DeliveryReport {
    let html_body = offer_letter_html(applicant, job);

    let report = sender
        .send(OutboundEmail {
            to: applicant.email.clone(),
            from: None,
            subject: format!("Your offer for {}", job.title),
            html_body,
        })
        .await;

    info!(
        applicant = applicant.name.as_str(),
        job = job.title.as_str(),
        success = report.success,
        "offer letter dispatched"
    );

    report
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use staffly_application::{DeliveryReport, EmailSender, OutboundEmail};
    use staffly_domain::{Applicant, Job};
    use tokio::sync::Mutex;

    use crate::console_email_sender::ConsoleEmailSender;

    use super::send_offer_letter;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<OutboundEmail>>,
        reject: bool,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send(&self, email: OutboundEmail) -> DeliveryReport {
            let to = email.to.clone();
            self.sent.lock().await.push(email);

            if self.reject {
                DeliveryReport::failed("mailbox unavailable")
            } else {
                DeliveryReport::delivered(format!("sent to {to}"))
            }
        }
    }

    fn fixtures() -> (Applicant, Job) {
        let applicant = Applicant::seed()
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("applicant seed"));
        let job = Job::seed()
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("job seed"));
        (applicant, job)
    }

    #[tokio::test]
    async fn dispatch_addresses_the_applicant_with_the_rendered_letter() {
        let sender = RecordingSender::default();
        let (applicant, job) = fixtures();

        let report = send_offer_letter(&sender, &applicant, &job).await;
        assert!(report.success);

        let sent = sender.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, applicant.email);
        assert!(sent[0].subject.contains(job.title.as_str()));
        assert!(sent[0].html_body.contains("Offer of Employment"));
    }

    #[tokio::test]
    async fn sender_failure_surfaces_as_a_failure_report() {
        let sender = RecordingSender {
            reject: true,
            ..RecordingSender::default()
        };
        let (applicant, job) = fixtures();

        let report = send_offer_letter(&sender, &applicant, &job).await;
        assert!(!report.success);
        assert_eq!(report.message, "mailbox unavailable");
    }

    #[tokio::test]
    async fn console_sender_integrates_end_to_end() {
        let (applicant, job) = fixtures();
        let report = send_offer_letter(&ConsoleEmailSender::new(), &applicant, &job).await;
        assert!(report.success);
    }
}
