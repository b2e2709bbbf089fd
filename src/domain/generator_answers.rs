use serde::Serialize;

/// Answer set passed to `create-nuxt-app --answers`.
///
/// Field order is the serialization order, and the generator reads it as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorAnswers {
    pub name: String,
    pub language: String,
    pub pm: String,
    pub ui: String,
    pub target: String,
    pub features: Vec<String>,
    pub linter: Vec<String>,
    pub test: String,
    pub mode: String,
    pub dev_tools: Vec<String>,
}

impl Default for GeneratorAnswers {
    fn default() -> Self {
        Self {
            name: "my-app".into(),
            language: "js".into(),
            pm: "npm".into(),
            ui: "none".into(),
            target: "server".into(),
            features: Vec::new(),
            linter: Vec::new(),
            test: "none".into(),
            mode: "universal".into(),
            dev_tools: Vec::new(),
        }
    }
}

impl GeneratorAnswers {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
