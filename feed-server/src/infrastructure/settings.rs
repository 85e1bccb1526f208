use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) database_url: String,
    pub(crate) secret_key: String,
    pub(crate) jwt_ttl_seconds: i64,
    pub(crate) http_addr: String,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) log_level: String,
    pub(crate) database_max_connections: u32,
    pub(crate) database_acquire_timeout_secs: u64,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let database_url = get_required("DATABASE_URL").context("DATABASE_URL is required")?;
        let secret_key = get_required("SECRET_KEY").context("SECRET_KEY is required")?;
        validate_secret_key(&secret_key)?;

        let jwt_ttl_seconds: i64 = std::env::var("JWT_TTL_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .context("Failed to parse JWT_TTL_SECONDS, expecting integer")?;

        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let cors_origins =
            parse_cors_origins(std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let database_max_connections = parse_u32_env("DATABASE_MAX_CONNECTIONS", 16)?;
        let database_acquire_timeout_secs = parse_u64_env("DATABASE_ACQUIRE_TIMEOUT_SECS", 5)?;

        Ok(Self {
            database_url,
            secret_key,
            jwt_ttl_seconds,
            http_addr,
            cors_origins,
            log_level,
            database_max_connections,
            database_acquire_timeout_secs,
        })
    }
}

fn get_required(key: &str) -> Result<String> {
    let value = std::env::var(key)?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn validate_secret_key(secret_key: &str) -> Result<()> {
    if secret_key.chars().count() < 32 {
        return Err(anyhow!("SECRET_KEY must be at least 32 characters"));
    }
    Ok(())
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_u32_env(key: &str, default: u32) -> Result<u32> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u32>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{parse_cors_origins, validate_secret_key};

    #[test]
    fn secret_key_must_be_long_enough() {
        assert!(validate_secret_key("too-short").is_err());
        assert!(validate_secret_key("0123456789abcdef0123456789abcdef").is_ok());
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let origins =
            parse_cors_origins(" http://localhost:8000 , ,http://127.0.0.1:8000".to_string());
        assert_eq!(origins, vec![
            "http://localhost:8000".to_string(),
            "http://127.0.0.1:8000".to_string()
        ]);
    }
}
