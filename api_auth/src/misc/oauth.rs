use common::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    pub fn from_str(value: &str) -> Result<Self, AppError> {
        match value.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "facebook" => Ok(OAuthProvider::Facebook),
            other => Err(AppError::BadRequest(format!(
                "Unsupported OAuth provider: {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
        }
    }

    pub fn get_scopes(&self) -> Vec<&'static str> {
        match self {
            OAuthProvider::Google => vec!["openid", "email", "profile"],
            OAuthProvider::Facebook => vec!["email", "public_profile"],
        }
    }
}
