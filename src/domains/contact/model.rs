use std::fmt;

use lettre::message::Mailbox;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::email::OutboundMessage;

/// One submitted form field. Any JSON value is accepted; an absent key is
/// kept distinct from an explicit `null` so both render the way a browser
/// client would expect.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormField {
  #[default]
  Missing,
  Present(Value),
}

impl FormField {
  pub fn is_missing(&self) -> bool {
    matches!(self, FormField::Missing)
  }
}

impl From<&str> for FormField {
  fn from(value: &str) -> Self {
    FormField::Present(Value::String(value.to_string()))
  }
}

impl fmt::Display for FormField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FormField::Missing => f.write_str("undefined"),
      FormField::Present(Value::String(text)) => f.write_str(text),
      FormField::Present(other) => write!(f, "{}", other),
    }
  }
}

impl<'de> Deserialize<'de> for FormField {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    Value::deserialize(deserializer).map(FormField::Present)
  }
}

impl Serialize for FormField {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      FormField::Missing => serializer.serialize_unit(),
      FormField::Present(value) => value.serialize(serializer),
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
  #[serde(default, skip_serializing_if = "FormField::is_missing")]
  pub first_name: FormField,
  #[serde(default, skip_serializing_if = "FormField::is_missing")]
  pub last_name: FormField,
  #[serde(default, skip_serializing_if = "FormField::is_missing")]
  pub company: FormField,
  #[serde(default, skip_serializing_if = "FormField::is_missing")]
  pub email: FormField,
  #[serde(default, skip_serializing_if = "FormField::is_missing")]
  pub phone_number: FormField,
  #[serde(default, skip_serializing_if = "FormField::is_missing")]
  pub country: FormField,
  #[serde(default, skip_serializing_if = "FormField::is_missing")]
  pub message: FormField,
}

impl ContactSubmission {
  pub fn subject(&self) -> String {
    format!(
      "New Contact Form Submission from {} {}",
      self.first_name, self.last_name
    )
  }

  pub fn body(&self) -> String {
    format!(
      "\nName: {} {}\nCompany: {}\nEmail: {}\nPhone: {} ({})\n\nMessage:\n{}\n    ",
      self.first_name, self.last_name, self.company, self.email, self.phone_number, self.country, self.message
    )
  }

  /// The submitted address, when it can be used as a sender. Anything else
  /// leaves the transport to send as its own account.
  pub fn sender(&self) -> Option<String> {
    match &self.email {
      FormField::Present(Value::String(email)) if email.parse::<Mailbox>().is_ok() => Some(email.clone()),
      _ => None,
    }
  }

  pub fn into_message(self, recipient: &str) -> OutboundMessage {
    OutboundMessage::new(
      self.sender(),
      recipient.to_string(),
      self.subject(),
      self.body(),
    )
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendEmailResponse {
  pub message: String,
}

impl SendEmailResponse {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}
