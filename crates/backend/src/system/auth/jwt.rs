use anyhow::{Context, Result};
use chrono::Utc;
use contracts::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;

/// Generate JWT access token with 24 hours lifetime
pub fn generate_access_token(
    secret: &str,
    admin_id: &str,
    email: &str,
    name: &str,
) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: admin_id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        exp,
        iat,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")?;

    Ok(token)
}

/// Validate JWT token and extract claims
pub fn validate_token(secret: &str, token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate a cryptographically secure JWT secret (256 bits)
pub fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let secret = generate_jwt_secret();
        let token =
            generate_access_token(&secret, "admin", "admin@hiveauth.local", "Admin").unwrap();
        let claims = validate_token(&secret, &token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.email, "admin@hiveauth.local");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token =
            generate_access_token("secret-a", "admin", "admin@hiveauth.local", "Admin").unwrap();
        assert!(validate_token("secret-b", &token).is_err());
    }
}
