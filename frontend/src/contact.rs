use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        match key {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "company" => Some(Field::Company),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Company => "Company",
            Field::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Text shown under the input, e.g. "Email should be an email".
    pub fn display(&self) -> String {
        format!("{} {}", self.field.label(), self.message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company: String,
    pub message: String,
}

impl ContactMessage {
    /// Required inputs left blank, in form order.
    pub fn missing_required(&self) -> Vec<FieldError> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| FieldError::new(field, "is required"))
        .collect()
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("could not encode the message: {0}")]
    Encode(String),
    #[error("could not reach the form service: {0}")]
    Network(String),
    #[error("the form service rejected the message")]
    Rejected {
        fields: Vec<FieldError>,
        general: Option<String>,
    },
}

#[derive(Deserialize, Default)]
struct ServiceErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<ServiceError>,
}

#[derive(Deserialize)]
struct ServiceError {
    #[serde(default)]
    field: Option<String>,
    message: String,
}

/// Splits a form service error body into per-field errors and whatever is
/// left over for the whole form.
pub fn decode_rejection(body: &str) -> SubmitError {
    let parsed: ServiceErrorBody = serde_json::from_str(body).unwrap_or_default();
    let mut fields = Vec::new();
    let mut general = Vec::new();

    for error in parsed.errors {
        match error.field.as_deref().and_then(Field::from_key) {
            Some(field) => fields.push(FieldError::new(field, error.message)),
            None => general.push(error.message),
        }
    }
    if general.is_empty() {
        if let Some(error) = parsed.error {
            if fields.is_empty() {
                general.push(error);
            }
        }
    }
    if fields.is_empty() && general.is_empty() {
        general.push("Something went wrong, please try again.".to_string());
    }

    SubmitError::Rejected {
        fields,
        general: (!general.is_empty()).then(|| general.join(" ")),
    }
}

pub async fn submit(message: &ContactMessage) -> Result<(), SubmitError> {
    let endpoint = config::form_endpoint();
    gloo_console::log!("Submitting contact form to", endpoint.clone());

    let request = Request::post(&endpoint)
        .header("Accept", "application/json")
        .json(message)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    gloo_console::warn!("Form service answered", response.status());
    let body = response.text().await.unwrap_or_default();
    Err(decode_rejection(&body))
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed {
        fields: Vec<FieldError>,
        general: Option<String>,
    },
}

impl FormStatus {
    /// Status after checking the required inputs, before any request.
    pub fn begin(message: &ContactMessage) -> FormStatus {
        let missing = message.missing_required();
        if missing.is_empty() {
            FormStatus::Submitting
        } else {
            FormStatus::Failed {
                fields: missing,
                general: None,
            }
        }
    }

    pub fn settle(result: Result<(), SubmitError>) -> FormStatus {
        match result {
            Ok(()) => FormStatus::Succeeded,
            Err(SubmitError::Rejected { fields, general }) => FormStatus::Failed { fields, general },
            Err(other) => FormStatus::Failed {
                fields: Vec::new(),
                general: Some(other.to_string()),
            },
        }
    }

    pub fn error_for(&self, field: Field) -> Option<String> {
        match self {
            FormStatus::Failed { fields, .. } => fields
                .iter()
                .find(|e| e.field == field)
                .map(FieldError::display),
            _ => None,
        }
    }

    pub fn general_error(&self) -> Option<&str> {
        match self {
            FormStatus::Failed { general, .. } => general.as_deref(),
            _ => None,
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let message = use_state(ContactMessage::default);
    let status = use_state(|| FormStatus::Idle);

    let on_input = |field: Field| {
        let message = message.clone();
        move |value: String| {
            let mut next = (*message).clone();
            next.set(field, value);
            message.set(next);
        }
    };

    let input_handler = |field: Field| {
        let update = on_input(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let textarea_handler = {
        let update = on_input(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let onsubmit = {
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Submitting {
                return;
            }
            let next = FormStatus::begin(&message);
            let ready = next == FormStatus::Submitting;
            status.set(next);
            if !ready {
                return;
            }

            let payload = (*message).clone();
            let status = status.clone();
            spawn_local(async move {
                let result = submit(&payload).await;
                if let Err(e) = &result {
                    log::warn!("Contact form not delivered: {}", e);
                }
                status.set(FormStatus::settle(result));
            });
        })
    };

    if *status == FormStatus::Succeeded {
        return html! {
            <div class="contact-form contact-success glass">
                <h3>{"Message sent!"}</h3>
                <p>{"Thanks for reaching out. We'll get back to you shortly."}</p>
            </div>
        };
    }

    let field_error = |field: Field| match status.error_for(field) {
        Some(text) => html! { <p class="form-error">{text}</p> },
        None => html! {},
    };
    let submitting = *status == FormStatus::Submitting;

    html! {
        <form class="contact-form glass" {onsubmit} novalidate={true}>
            <div class="form-group">
                <input
                    type="text"
                    name={Field::Name.key()}
                    placeholder="Your Name"
                    class="form-input glass"
                    required={true}
                    value={message.name.clone()}
                    oninput={input_handler(Field::Name)}
                />
                { field_error(Field::Name) }
            </div>
            <div class="form-group">
                <input
                    type="email"
                    name={Field::Email.key()}
                    placeholder="Email Address"
                    class="form-input glass"
                    required={true}
                    value={message.email.clone()}
                    oninput={input_handler(Field::Email)}
                />
                { field_error(Field::Email) }
            </div>
            <div class="form-group">
                <input
                    type="text"
                    name={Field::Company.key()}
                    placeholder="Company"
                    class="form-input glass"
                    value={message.company.clone()}
                    oninput={input_handler(Field::Company)}
                />
                { field_error(Field::Company) }
            </div>
            <div class="form-group">
                <textarea
                    name={Field::Message.key()}
                    placeholder="What's on your mind?"
                    class="form-textarea glass"
                    rows="4"
                    required={true}
                    value={message.message.clone()}
                    oninput={textarea_handler}
                />
                { field_error(Field::Message) }
            </div>
            if let Some(general) = status.general_error() {
                <p class="form-error form-error--general">{general}</p>
            }
            <Button
                variant={ButtonVariant::Primary}
                size={ButtonSize::Md}
                button_type="submit"
                disabled={submitting}
            >
                { if submitting { "Sending..." } else { "Send Message" } }
            </Button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn complete_message_goes_to_submitting() {
        assert_eq!(FormStatus::begin(&filled()), FormStatus::Submitting);
    }

    #[test]
    fn missing_email_is_named_and_not_succeeded() {
        let message = ContactMessage {
            email: "   ".into(),
            ..filled()
        };
        let status = FormStatus::begin(&message);
        assert_ne!(status, FormStatus::Succeeded);
        assert_ne!(status, FormStatus::Submitting);
        assert_eq!(status.error_for(Field::Email).as_deref(), Some("Email is required"));
        assert_eq!(status.error_for(Field::Name), None);
    }

    #[test]
    fn company_is_optional() {
        assert!(filled().missing_required().is_empty());
        let all_blank = ContactMessage::default().missing_required();
        let fields: Vec<Field> = all_blank.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn service_field_errors_surface_per_field() {
        let body = r#"{"error":"Validation errors","errors":[{"code":"REQUIRED_FIELD_MISSING","field":"name","message":"is required"},{"code":"TYPE_EMAIL","field":"email","message":"should be an email"}]}"#;
        let status = FormStatus::settle(Err(decode_rejection(body)));
        assert_eq!(status.error_for(Field::Name).as_deref(), Some("Name is required"));
        assert_eq!(status.error_for(Field::Email).as_deref(), Some("Email should be an email"));
        assert_eq!(status.general_error(), None);
    }

    #[test]
    fn unknown_fields_and_garbage_become_general_errors() {
        let body = r#"{"errors":[{"message":"Form not found"}]}"#;
        let status = FormStatus::settle(Err(decode_rejection(body)));
        assert_eq!(status.general_error(), Some("Form not found"));

        let status = FormStatus::settle(Err(decode_rejection("<html>502</html>")));
        assert!(status.general_error().is_some());

        let status = FormStatus::settle(Err(SubmitError::Network("offline".into())));
        assert_eq!(
            status.general_error(),
            Some("could not reach the form service: offline")
        );
    }

    #[test]
    fn success_settles_to_succeeded() {
        assert_eq!(FormStatus::settle(Ok(())), FormStatus::Succeeded);
    }

    #[test]
    fn payload_omits_blank_company() {
        let json = serde_json::to_value(filled()).unwrap();
        assert!(json.get("company").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }
}
