//! Document templates: pure functions from records to HTML strings.

use staffly_domain::{Applicant, Job, Reimbursement};

fn euros(amount_cents: i64) -> String {
    format!("€{}.{:02}", amount_cents / 100, (amount_cents % 100).abs())
}

/// Renders the offer letter for an applicant and the job they applied to.
#[must_use]
pub fn offer_letter_html(applicant: &Applicant, job: &Job) -> String {
    format!(
        "<html><body style=\"font-family: Georgia, serif;\">\
         <h1>Offer of Employment</h1>\
         <p>Dear {name},</p>\
         <p>We are delighted to offer you the position of <strong>{title}</strong> \
         in our {department} department, based in {location} ({employment_type}).</p>\
         <p>Your yearly salary will be {salary}.</p>\
         <p>We look forward to welcoming you to the team.</p>\
         <p>Warm regards,<br/>People Operations</p>\
         </body></html>",
        name = applicant.name,
        title = job.title,
        department = job.department,
        location = job.location,
        employment_type = job.employment_type,
        salary = euros(applicant.expected_salary_cents),
    )
}

/// Renders the interview invitation for an applicant.
#[must_use]
pub fn interview_invitation_html(applicant: &Applicant, job: &Job) -> String {
    format!(
        "<html><body style=\"font-family: Georgia, serif;\">\
         <h1>Interview Invitation</h1>\
         <p>Dear {name},</p>\
         <p>Thank you for applying for the <strong>{title}</strong> position on \
         {applied_on}. We would like to invite you to an interview with the \
         {department} team.</p>\
         <p>Please reply with your availability for the coming week.</p>\
         <p>Kind regards,<br/>People Operations</p>\
         </body></html>",
        name = applicant.name,
        title = job.title,
        applied_on = applicant.applied_on.format("%-d %B %Y"),
        department = job.department,
    )
}

/// Renders the payout statement for a reimbursement claim.
#[must_use]
pub fn reimbursement_statement_html(claim: &Reimbursement) -> String {
    format!(
        "<html><body style=\"font-family: Georgia, serif;\">\
         <h1>Reimbursement Statement</h1>\
         <p>Employee: {employee}</p>\
         <p>Category: {category}</p>\
         <p>Amount: {amount}</p>\
         <p>Submitted: {submitted_on}</p>\
         <p>Status: {status}</p>\
         <p>Note: {note}</p>\
         </body></html>",
        employee = claim.employee,
        category = claim.category,
        amount = euros(claim.amount_cents),
        submitted_on = claim.submitted_on.format("%-d %B %Y"),
        status = claim.status.as_str(),
        note = claim.note,
    )
}
