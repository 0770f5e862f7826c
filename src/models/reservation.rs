use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/reservation/send`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the backend sends alongside a non-2xx status.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_keys_in_form_order() {
        let request = ReservationRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "07123456789".to_string(),
            date: "2030-01-01".to_string(),
            time: "19:00".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"firstName":"Jane","lastName":"Doe","email":"jane@x.com","phone":"07123456789","date":"2030-01-01","time":"19:00"}"#
        );
    }

    #[test]
    fn response_message_is_optional() {
        let empty: ReservationResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message, None);

        let booked: ReservationResponse = serde_json::from_str(r#"{"message":"Booked","id":7}"#).unwrap();
        assert_eq!(booked.message.as_deref(), Some("Booked"));
    }
}
