// src/bridge.rs
//
// Page -> host messages. The page posts JSON strings tagged by `type`:
//   {"type":"ATTENDANCE_DATA","data":[{course,marked,present,absent,percentage}...]}
//   {"type":"SAVE_CREDENTIALS","username":"...","password":"..."}

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Credentials, ScrapedRow};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BridgeMessage {
    #[serde(rename = "ATTENDANCE_DATA")]
    AttendanceData { data: Vec<ScrapedRow> },

    #[serde(rename = "SAVE_CREDENTIALS")]
    SaveCredentials { username: String, password: String },
}

impl BridgeMessage {
    pub fn decode(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn credentials(creds: &Credentials) -> Self {
        BridgeMessage::SaveCredentials {
            username: creds.username.clone(),
            password: creds.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_attendance_payload_from_page() {
        let raw = r#"{"type":"ATTENDANCE_DATA","data":[
            {"course":"Math","marked":"20","present":"18","absent":"2","percentage":"90"}]}"#;
        let msg = BridgeMessage::decode(raw).unwrap();
        assert_eq!(
            msg,
            BridgeMessage::AttendanceData {
                data: vec![ScrapedRow {
                    course: s!("Math"),
                    marked: s!("20"),
                    present: s!("18"),
                    absent: s!("2"),
                    percentage: s!("90"),
                }]
            }
        );
    }

    #[test]
    fn encodes_with_type_tag() {
        let msg = BridgeMessage::credentials(&Credentials::new("u", "p"));
        let raw = msg.encode().unwrap();
        assert_eq!(raw, r#"{"type":"SAVE_CREDENTIALS","username":"u","password":"p"}"#);
        assert_eq!(BridgeMessage::decode(&raw).unwrap(), msg);
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert!(BridgeMessage::decode(r#"{"type":"PING"}"#).is_err());
        assert!(BridgeMessage::decode("not json").is_err());
    }
}
