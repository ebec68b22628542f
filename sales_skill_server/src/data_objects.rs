//! The Alexa request and response envelopes.
//!
//! Only the fields the skill actually reads are modelled on the way in. Everything else Alexa sends (session,
//! context, device info) is ignored.
use sales_engine::{SkillRequest, SkillResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ALEXA_RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlexaRequest {
    #[serde(default)]
    pub version: Option<String>,
    pub request: AlexaRequestBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaRequestBody {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub intent: Option<AlexaIntent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlexaIntent {
    pub name: String,
}

impl From<&AlexaRequest> for SkillRequest {
    fn from(req: &AlexaRequest) -> Self {
        let intent_name = req.request.intent.as_ref().map(|i| i.name.clone());
        SkillRequest::new(req.request.request_type.clone(), intent_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaResponse {
    pub version: String,
    pub session_attributes: Map<String, Value>,
    pub response: AlexaResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaResponseBody {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub ssml: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

impl From<SkillResponse> for AlexaResponse {
    fn from(res: SkillResponse) -> Self {
        let body = AlexaResponseBody {
            output_speech: OutputSpeech { speech_type: "SSML".into(), ssml: res.spoken_text },
            card: Card { card_type: "Simple".into(), title: res.title, content: res.display_text },
            should_end_session: res.end_session,
        };
        Self { version: ALEXA_RESPONSE_VERSION.into(), session_attributes: Map::new(), response: body }
    }
}
