//! Pre-rendered email bodies. Plain `format!` strings parameterized by
//! submission fields; no templating engine.

use crate::validate::WaitlistSubmission;

pub fn welcome_email(submission: &WaitlistSubmission) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>WELCOME TO THE FUTURE OF DINING</title>
</head>
<body style="font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; line-height: 1.6; color: #2D333B; margin: 0; padding: 0; background-color: #F6F9FC;">
  <table cellpadding="0" cellspacing="0" border="0" width="100%" style="background: #F6F9FC; padding: 40px 15px;">
    <tr>
      <td align="center" valign="top">
        <table cellpadding="0" cellspacing="0" border="0" width="650" style="background-color: #FFFFFF; border-radius: 12px; overflow: hidden; margin: 0 auto;">
          <tr>
            <td align="center" style="background-color: #0F1218; padding: 60px 30px 50px; text-align: center;">
              <h1 style="margin: 0 0 20px 0; color: #FFFFFF; font-size: 42px; font-weight: 800; line-height: 1.2;">THE FUTURE OF DINING<br>HAS ARRIVED</h1>
              <div style="color: rgba(255, 255, 255, 0.85); font-size: 18px;">Transforming restaurants with autonomous AI. Your competitive advantage starts now.</div>
            </td>
          </tr>
          <tr>
            <td style="padding: 50px 30px;">
              <div style="margin-bottom: 30px; font-size: 20px;">
                Hello <span style="color: #FF5A22; font-weight: bold;">{owner_name}</span>,<br>
                Welcome to the AI revolution.
              </div>
              <p style="margin-bottom: 15px;"><strong>{restaurant_name}</strong> is now on the BalaBite waitlist. You secured your spot ahead of the launch, and our team will reach out with early-access details for the {location} area.</p>
              <p style="margin-bottom: 15px;">Until then, nothing is needed from you. We'll be in touch.</p>
              <p style="margin-top: 40px; color: #6B7280; font-size: 14px;">— The BalaBite AI team</p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"#,
        owner_name = submission.owner_name,
        restaurant_name = submission.restaurant_name,
        location = submission.location,
    )
}

pub fn admin_notification(submission: &WaitlistSubmission, submission_id: &str) -> String {
    let message = if submission.message.is_empty() {
        "(none)"
    } else {
        submission.message.as_str()
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>New Waitlist Signup</title>
</head>
<body style="font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; color: #2D333B; margin: 0; padding: 24px; background-color: #F6F9FC;">
  <h2 style="margin-top: 0;">New Waitlist Signup: {restaurant_name}</h2>
  <p style="color: #6B7280;">Submission <code>{submission_id}</code></p>
  <table cellpadding="6" cellspacing="0" border="0" style="background-color: #FFFFFF; border-radius: 8px; padding: 12px;">
    <tr><td style="font-weight: bold;">Restaurant</td><td>{restaurant_name}</td></tr>
    <tr><td style="font-weight: bold;">Owner</td><td>{owner_name}</td></tr>
    <tr><td style="font-weight: bold;">Email</td><td>{email}</td></tr>
    <tr><td style="font-weight: bold;">Phone</td><td>{phone}</td></tr>
    <tr><td style="font-weight: bold;">Type</td><td>{restaurant_type}</td></tr>
    <tr><td style="font-weight: bold;">Location</td><td>{location}</td></tr>
    <tr><td style="font-weight: bold;">Message</td><td>{message}</td></tr>
  </table>
</body>
</html>
"#,
        restaurant_name = submission.restaurant_name,
        submission_id = submission_id,
        owner_name = submission.owner_name,
        email = submission.email,
        phone = submission.phone,
        restaurant_type = submission.restaurant_type,
        location = submission.location,
        message = message,
    )
}
