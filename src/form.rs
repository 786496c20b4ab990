use gloo_net::http::Request;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your phone number")]
    MissingPhone,
    #[error("Request failed: {0}")]
    Network(String),
    #[error("We couldn't register your request, please try again or call us")]
    Rejected,
    #[error("Unexpected response from form service: {0}")]
    InvalidResponse(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum PreferredTime {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "morning")]
    Morning,
    #[serde(rename = "afternoon")]
    Afternoon,
    #[serde(rename = "evening")]
    Evening,
}

impl PreferredTime {
    pub const ALL: [PreferredTime; 4] = [
        PreferredTime::Unset,
        PreferredTime::Morning,
        PreferredTime::Afternoon,
        PreferredTime::Evening,
    ];

    pub fn value(self) -> &'static str {
        match self {
            PreferredTime::Unset => "",
            PreferredTime::Morning => "morning",
            PreferredTime::Afternoon => "afternoon",
            PreferredTime::Evening => "evening",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PreferredTime::Unset => "Choose a time",
            PreferredTime::Morning => "Morning (9AM - 12PM)",
            PreferredTime::Afternoon => "Afternoon (12PM - 4PM)",
            PreferredTime::Evening => "Evening (4PM - 6PM)",
        }
    }

    pub fn from_value(value: &str) -> Self {
        PreferredTime::ALL
            .into_iter()
            .find(|t| t.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackRequest {
    pub name: String,
    pub phone: String,
    pub preferred_time: PreferredTime,
    pub message: String,
}

impl CallbackRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.phone.trim().is_empty() {
            return Err(FormError::MissingPhone);
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FormError),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

fn interpret_response(body: &str) -> Result<(), FormError> {
    let parsed: SubmitResponse =
        serde_json::from_str(body).map_err(|e| FormError::InvalidResponse(e.to_string()))?;
    if parsed.success {
        Ok(())
    } else {
        Err(FormError::Rejected)
    }
}

// Body is JSON but sent as a urlencoded form to avoid a CORS preflight.
pub async fn submit(endpoint: &str, request: &CallbackRequest) -> Result<(), FormError> {
    request.validate()?;

    let payload =
        serde_json::to_string(request).map_err(|e| FormError::InvalidResponse(e.to_string()))?;
    debug!("Submitting callback request for {}", request.name.trim());

    let response = Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(payload)
        .send()
        .await
        .map_err(|e| FormError::Network(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| FormError::Network(e.to_string()))?;

    interpret_response(&body)?;
    info!("Callback request accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, phone: &str) -> CallbackRequest {
        CallbackRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn name_and_phone_are_required() {
        assert_eq!(request("", "9876543210").validate(), Err(FormError::MissingName));
        assert_eq!(request("   ", "9876543210").validate(), Err(FormError::MissingName));
        assert_eq!(request("Roli", "").validate(), Err(FormError::MissingPhone));
        assert_eq!(request("Roli", " \t").validate(), Err(FormError::MissingPhone));
        assert_eq!(request("Roli", "9876543210").validate(), Ok(()));
    }

    #[test]
    fn payload_uses_service_field_names() {
        let value = serde_json::to_value(request("Roli", "9876543210")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Roli",
                "phone": "9876543210",
                "preferredTime": "",
                "message": "",
            })
        );

        let full = CallbackRequest {
            preferred_time: PreferredTime::Evening,
            message: "Property dispute".to_string(),
            ..request("Roli", "9876543210")
        };
        let value = serde_json::to_value(full).unwrap();
        assert_eq!(value["preferredTime"], "evening");
        assert_eq!(value["message"], "Property dispute");
    }

    #[test]
    fn preferred_time_parses_select_values() {
        for time in PreferredTime::ALL {
            assert_eq!(PreferredTime::from_value(time.value()), time);
        }
        assert_eq!(PreferredTime::from_value("midnight"), PreferredTime::Unset);
    }

    #[test]
    fn service_response_is_interpreted() {
        assert_eq!(interpret_response(r#"{"success":true}"#), Ok(()));
        assert_eq!(interpret_response(r#"{"success":false}"#), Err(FormError::Rejected));
        assert_eq!(interpret_response(r#"{"result":"error"}"#), Err(FormError::Rejected));
        assert!(matches!(
            interpret_response("<html>quota exceeded</html>"),
            Err(FormError::InvalidResponse(_))
        ));
    }

    #[test]
    fn submit_status_reports_progress() {
        assert!(SubmitStatus::Submitting.is_submitting());
        assert!(!SubmitStatus::default().is_submitting());
        assert!(!SubmitStatus::Failed(FormError::Rejected).is_submitting());
    }
}
