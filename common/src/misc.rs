use crate::error::AppError;

#[derive(PartialEq)]
pub enum UserVerificationOrigin {
    Email,
    OAuth,
}
impl ToString for UserVerificationOrigin {
    fn to_string(&self) -> String {
        match self {
            UserVerificationOrigin::Email => "email".to_string(),
            UserVerificationOrigin::OAuth => "oauth".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Tenant,
    Owner,
    Host,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tenant => "tenant",
            Role::Owner => "owner",
            Role::Host => "host",
            Role::Admin => "admin",
        }
    }

    pub fn from_str(value: &str) -> Result<Self, AppError> {
        match value.to_lowercase().as_str() {
            "tenant" => Ok(Role::Tenant),
            "owner" => Ok(Role::Owner),
            "host" => Ok(Role::Host),
            "admin" => Ok(Role::Admin),
            other => Err(AppError::BadRequest(format!("Unknown role: {}", other))),
        }
    }

    /// Roles that publish rooms (their onboarding requires a listing).
    pub fn offers_rooms(&self) -> bool {
        matches!(self, Role::Owner | Role::Host)
    }
}

/// Noise tolerance categories as the product presents them (Spanish UI).
/// English aliases are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseLevel {
    Bajo,
    Medio,
    Alto,
}

impl NoiseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseLevel::Bajo => "bajo",
            NoiseLevel::Medio => "medio",
            NoiseLevel::Alto => "alto",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "bajo" | "low" => Some(NoiseLevel::Bajo),
            "medio" | "medium" => Some(NoiseLevel::Medio),
            "alto" | "high" => Some(NoiseLevel::Alto),
            _ => None,
        }
    }

    /// Position on the ordinal scale, used for adjacency scoring.
    pub fn rank(&self) -> i32 {
        match self {
            NoiseLevel::Bajo => 0,
            NoiseLevel::Medio => 1,
            NoiseLevel::Alto => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_levels_parse_both_languages() {
        assert_eq!(NoiseLevel::parse("Bajo"), Some(NoiseLevel::Bajo));
        assert_eq!(NoiseLevel::parse("  MEDIUM "), Some(NoiseLevel::Medio));
        assert_eq!(NoiseLevel::parse("alto"), Some(NoiseLevel::Alto));
        assert_eq!(NoiseLevel::parse("loud"), None);
    }

    #[test]
    fn roles_round_trip() {
        for role in [Role::Tenant, Role::Owner, Role::Host, Role::Admin] {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
        assert!(Role::from_str("landlord").is_err());
    }
}
