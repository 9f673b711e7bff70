use serde::Deserialize;

use crate::model::template::MemeTemplate;

/// Response envelope of `GET /get_memes` on the template listing API.
///
/// `success` defaults to true so payloads that omit it still decode.
#[derive(Deserialize, Debug)]
pub struct GetMemesResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<MemesData>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct MemesData {
    pub memes: Vec<MemeTemplate>,
}

fn default_success() -> bool {
    true
}

impl GetMemesResponse {
    /// Unwraps the template list, or explains why the payload carries none.
    pub fn into_templates(self) -> Result<Vec<MemeTemplate>, String> {
        if !self.success {
            return Err(self
                .error_message
                .unwrap_or_else(|| "API reported failure".to_string()));
        }
        self.data
            .map(|data| data.memes)
            .ok_or_else(|| "response has no data".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_payload() {
        let body = r#"{
            "success": true,
            "data": { "memes": [
                { "id": "181913649", "name": "Drake Hotline Bling",
                  "url": "https://i.imgflip.com/30b1gx.jpg",
                  "width": 1200, "height": 1200, "box_count": 2, "captions": 1 },
                { "url": "https://i.imgflip.com/1bij.jpg" }
            ] }
        }"#;
        let response: GetMemesResponse = serde_json::from_str(body).unwrap();
        let templates = response.into_templates().unwrap();

        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name.as_deref(), Some("Drake Hotline Bling"));
        assert_eq!(templates[0].box_count, Some(2));
        assert_eq!(templates[1], MemeTemplate::from_url("https://i.imgflip.com/1bij.jpg"));
    }

    #[test]
    fn failure_payload_yields_error() {
        let body = r#"{ "success": false, "error_message": "rate limited" }"#;
        let response: GetMemesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_templates(), Err("rate limited".to_string()));
    }

    #[test]
    fn missing_data_yields_error() {
        let response: GetMemesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_templates().is_err());
    }

    #[test]
    fn template_without_url_is_rejected() {
        let body = r#"{ "data": { "memes": [ { "name": "no url" } ] } }"#;
        assert!(serde_json::from_str::<GetMemesResponse>(body).is_err());
    }
}
