//! HTML bodies for the two contact emails.
//!
//! Every value that came from the form is escaped before interpolation.
//! The acknowledgment shows catalog labels for project type and budget.
//! Dates come from the stored row's `created_at`, rendered in UTC.

use std::fmt::Write as _;

use folio_core::catalog::{budget_label, project_type_label};
use folio_db::models::contact_submission::ContactSubmission;

use crate::config::{NotifierSettings, Signature};
use crate::mailer::OutgoingEmail;

/// Subject of the acknowledgment sent to the submitter.
pub const ACKNOWLEDGMENT_SUBJECT: &str = "✅ Votre demande a bien été reçue";

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Lead notification for the site owner: every submitted field, verbatim,
/// plus the id.
pub fn operator_notification(
    submission: &ContactSubmission,
    settings: &NotifierSettings,
) -> OutgoingEmail {
    let first_name = escape_html(&submission.first_name);
    let last_name = escape_html(&submission.last_name);
    let email = escape_html(&submission.email);
    let phone = escape_html(&submission.phone);
    let project_type = escape_html(&submission.project_type);
    let budget = escape_html(&submission.budget);
    let message = escape_html(&submission.message);
    let submitted_at = submission.created_at.format("%d/%m/%Y %H:%M:%S UTC");

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">Nouvelle demande de contact</h2>
  <div style="background: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="margin-top: 0;">Informations du client</h3>
    <p><strong>Nom :</strong> {first_name} {last_name}</p>
    <p><strong>Email :</strong> <a href="mailto:{email}">{email}</a></p>
    <p><strong>Téléphone :</strong> <a href="tel:{phone}">{phone}</a></p>
  </div>
  <div style="background: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="margin-top: 0;">Détails du projet</h3>
    <p><strong>Type de projet :</strong> {project_type}</p>
    <p><strong>Budget :</strong> {budget}</p>
    <p><strong>Message :</strong></p>
    <p style="white-space: pre-wrap;">{message}</p>
  </div>
  <p style="color: #6b7280; font-size: 14px;">
    ID de soumission : {id}<br>
    Date : {submitted_at}
  </p>
</div>"#,
        id = submission.id,
    );

    OutgoingEmail {
        from: settings.from_address.clone(),
        to: settings.operator_address.clone(),
        subject: format!(
            "🚀 Nouveau contact : {} {}",
            submission.first_name, submission.last_name
        ),
        html,
    }
}

/// Acknowledgment for the submitter: project type, budget, date, site link.
pub fn submitter_acknowledgment(
    submission: &ContactSubmission,
    settings: &NotifierSettings,
) -> OutgoingEmail {
    let first_name = escape_html(&submission.first_name);
    let project_type = escape_html(project_type_label(&submission.project_type));
    let budget = escape_html(budget_label(&submission.budget));
    let submitted_on = submission.created_at.format("%d/%m/%Y");
    let site_url = escape_html(&settings.site_url);
    let signature = render_signature(&settings.signature);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">Bonjour {first_name},</h2>
  <p>Merci d'avoir pris contact avec moi ! J'ai bien reçu votre demande concernant votre projet <strong>{project_type}</strong>.</p>
  <div style="background: #f0fdf4; border-left: 4px solid #10b981; padding: 20px; margin: 20px 0;">
    <p style="margin: 0;"><strong>✓ Votre demande est en cours de traitement</strong></p>
    <p style="margin: 10px 0 0 0;">Je reviendrai vers vous sous 24h avec une réponse détaillée.</p>
  </div>
  <h3>Récapitulatif de votre demande :</h3>
  <ul style="list-style: none; padding: 0;">
    <li>📋 <strong>Type de projet :</strong> {project_type}</li>
    <li>💰 <strong>Budget :</strong> {budget}</li>
    <li>📅 <strong>Date de soumission :</strong> {submitted_on}</li>
  </ul>
  <p>En attendant, n'hésitez pas à consulter mes réalisations sur mon portfolio :</p>
  <p><a href="{site_url}" style="color: #2563eb;">Voir mes projets</a></p>{signature}
</div>"#
    );

    OutgoingEmail {
        from: settings.from_address.clone(),
        to: submission.email.clone(),
        subject: ACKNOWLEDGMENT_SUBJECT.to_string(),
        html,
    }
}

fn render_signature(signature: &Signature) -> String {
    if signature.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();
    if let Some(name) = &signature.name {
        lines.push(format!("<strong>{}</strong>", escape_html(name)));
    }
    if let Some(title) = &signature.title {
        lines.push(escape_html(title));
    }
    if let Some(email) = &signature.email {
        lines.push(format!("📧 {}", escape_html(email)));
    }
    if let Some(phone) = &signature.phone {
        lines.push(format!("📱 {}", escape_html(phone)));
    }

    let mut out = String::from(
        "\n  <hr style=\"border: none; border-top: 1px solid #e5e7eb; margin: 30px 0;\">\n  \
         <p style=\"color: #6b7280; font-size: 14px;\">\n",
    );
    let _ = writeln!(out, "    {}", lines.join("<br>\n    "));
    out.push_str("  </p>");
    out
}
