//! Server-side HTML rendering of the verification states.
//!
//! Three mutually exclusive views: a loading indicator, a generic failure
//! message, and the full success projection. Markup is deliberately minimal;
//! everything interpolated from a record is HTML-escaped.

use credo_types::Timestamp;
use credo_verify::{CertificateDisplay, VerificationState};

/// Render any verification state. Total over the enum, so the rendering
/// contract lives in one place.
pub fn render(state: &VerificationState) -> String {
    match state {
        VerificationState::Pending => render_pending(),
        VerificationState::InvalidRequest | VerificationState::Unverified => {
            // failure_message is Some for both failure variants
            render_failure(state.failure_message().unwrap_or_default())
        }
        VerificationState::Verified(display) => render_verified(display),
    }
}

/// The loading view, shown while a lookup is unresolved.
pub fn render_pending() -> String {
    page(
        "Verifying certificate...",
        r#"<div class="card center">
      <div class="spinner"></div>
      <p>Verifying certificate...</p>
    </div>"#
            .to_string(),
    )
}

/// The failure view. Generic text only; no detail on the cause.
pub fn render_failure(message: &str) -> String {
    page(
        "Verification Failed",
        format!(
            r#"<div class="card center">
      <div class="badge failed">&#10007;</div>
      <h2>Verification Failed</h2>
      <p>{}</p>
    </div>"#,
            escape_html(message)
        ),
    )
}

/// The success view: the full display projection, and nothing else.
pub fn render_verified(display: &CertificateDisplay) -> String {
    let control_number = match &display.control_number {
        Some(number) => format!(
            r#"<div class="field mono">
        <label>Control Number</label>
        <p>{}</p>
      </div>"#,
            escape_html(number)
        ),
        None => String::new(),
    };

    page(
        "Certificate Verified",
        format!(
            r#"<div class="card">
      <div class="badge verified">&#10003; Certified</div>
      <h1>Certificate Verified</h1>
      <p class="subtitle">&#10003; Authentic and Valid</p>
      <div class="field prominent">
        <label>Awarded To</label>
        <p>{recipient}</p>
      </div>
      <div class="field">
        <label>Training Program</label>
        <p>{training}</p>
      </div>
      <div class="grid">
        <div class="field">
          <label>Training Period</label>
          <p>{period}</p>
        </div>
        <div class="field">
          <label>Date Awarded</label>
          <p>{awarded}</p>
        </div>
        <div class="field">
          <label>Issued Date</label>
          <p>{issued}</p>
        </div>
      </div>
      {control_number}
      <div class="footer">
        <p>&#10003; This certificate has been verified and is legitimate</p>
        <p class="mono">Certificate ID: {certificate_id}</p>
      </div>
    </div>
    <p class="timestamp">Verified on {verified_on}</p>"#,
            recipient = escape_html(&display.recipient_name),
            training = escape_html(&display.training_label),
            period = escape_html(&display.training_period),
            awarded = escape_html(&display.award_date),
            issued = escape_html(&display.issued_on),
            control_number = control_number,
            certificate_id = escape_html(&display.certificate_id),
            verified_on = Timestamp::now().to_display_date(),
        ),
    )
}

/// The landing page: how to verify a certificate.
pub fn render_landing() -> String {
    page(
        "Certificate Verification",
        r#"<div class="card center">
      <h1>Certificate Verification</h1>
      <p>Scan the QR code on your certificate to verify its authenticity.</p>
      <div class="field">
        <label>How it works</label>
        <ol>
          <li>Open your certificate PDF</li>
          <li>Scan the QR code with your phone camera</li>
          <li>Verify the certificate details</li>
        </ol>
      </div>
    </div>"#
            .to_string(),
    )
}

fn page(title: &str, body: String) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: system-ui, sans-serif; background: #f8fafc; margin: 0;
           min-height: 100vh; display: flex; flex-direction: column;
           align-items: center; justify-content: center; padding: 1rem; }}
    .card {{ background: #fff; border-radius: 12px; max-width: 44rem; width: 100%;
            padding: 2rem; box-shadow: 0 10px 25px rgba(15, 23, 42, .1); }}
    .center {{ text-align: center; }}
    .badge {{ font-weight: 700; margin-bottom: 1rem; }}
    .badge.verified {{ color: #16a34a; }}
    .badge.failed {{ color: #dc2626; }}
    .subtitle {{ color: #16a34a; font-weight: 600; }}
    .field {{ margin-top: 1.25rem; }}
    .field label {{ display: block; font-size: .7rem; font-weight: 700;
                   text-transform: uppercase; letter-spacing: .05em; color: #64748b; }}
    .field p {{ margin: .25rem 0 0; font-weight: 600; color: #0f172a; }}
    .field.prominent p {{ font-size: 1.75rem; }}
    .grid {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }}
    .mono p {{ font-family: ui-monospace, monospace; }}
    .footer {{ margin-top: 2rem; border-top: 2px solid #f1f5f9; padding-top: 1rem;
              text-align: center; color: #166534; }}
    .footer .mono {{ color: #64748b; font-size: .75rem; }}
    .timestamp {{ color: #94a3b8; font-size: .75rem; margin-top: 1rem; }}
    .spinner {{ width: 3rem; height: 3rem; margin: 0 auto 1rem;
               border: 3px solid #e2e8f0; border-bottom-color: #2563eb;
               border-radius: 50%; animation: spin 1s linear infinite; }}
    @keyframes spin {{ to {{ transform: rotate(360deg); }} }}
  </style>
</head>
<body>
  {body}
</body>
</html>
"#
    )
}

/// Minimal HTML escaping for interpolated record fields.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
