use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in minutes. `None` is the legacy non-expiring mode,
    /// selected with `JWT_TTL_MINUTES=0`.
    pub ttl_minutes: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    pub api_url: String,
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Exact origins allowed for CORS. Empty list means permissive.
    pub allowed_origins: Vec<String>,
    pub jwt: JwtConfig,
    pub lookup: LookupConfig,
}

fn parse_ttl_minutes(raw: Option<String>) -> Option<i64> {
    match raw.and_then(|v| v.parse::<i64>().ok()) {
        Some(0) => None,
        Some(m) => Some(m),
        None => Some(60),
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|o| o.trim().trim_end_matches('/').to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_minutes: parse_ttl_minutes(std::env::var("JWT_TTL_MINUTES").ok()),
        };
        let lookup = LookupConfig {
            api_url: std::env::var("PHONE_API_URL")
                .unwrap_or_else(|_| "https://momosv3.apimienphi.com/api/checkMomoUser".into()),
            access_token: std::env::var("PHONE_API_TOKEN").unwrap_or_default(),
        };
        Ok(Self {
            database_url,
            allowed_origins,
            jwt,
            lookup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_defaults_to_an_hour() {
        assert_eq!(parse_ttl_minutes(None), Some(60));
        assert_eq!(parse_ttl_minutes(Some("garbage".into())), Some(60));
    }

    #[test]
    fn ttl_zero_selects_non_expiring_mode() {
        assert_eq!(parse_ttl_minutes(Some("0".into())), None);
        assert_eq!(parse_ttl_minutes(Some("15".into())), Some(15));
    }
}
