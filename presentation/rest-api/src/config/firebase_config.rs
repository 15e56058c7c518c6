use anyhow::Context;

#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let project_id =
            std::env::var("FIREBASE_PROJECT_ID").context("FIREBASE_PROJECT_ID must be set")?;
        Ok(Self { project_id })
    }

    /// Issuer every Firebase ID token of this project carries.
    pub fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_issuer_from_project_id() {
        let config = FirebaseConfig {
            project_id: "pantry-app".to_string(),
        };

        assert_eq!(config.issuer(), "https://securetoken.google.com/pantry-app");
    }
}
