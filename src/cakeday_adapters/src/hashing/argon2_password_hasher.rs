use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use cakeday_core::{HashedPassword, Password, PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};

/// Prefixes of bcrypt digests written by earlier deployments.
const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Argon2id hasher. Work runs on the blocking pool so a slow hash never holds
/// up other requests.
///
/// Stored bcrypt digests are still accepted on verify; new hashes are always
/// Argon2id.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
    dummy_hash: HashedPassword,
}

impl Argon2PasswordHasher {
    /// Builds the hasher and computes its dummy hash with the same parameters,
    /// so this costs one hash.
    pub fn new(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordHasherError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

        // The hashed secret is random and discarded.
        let decoy = SaltString::generate(rand_core::OsRng);
        let dummy_hash = hash_with(&params, decoy.as_str().as_bytes())
            .map_err(PasswordHasherError::UnexpectedError)?;

        Ok(Self { params, dummy_hash })
    }
}

fn hash_with(params: &Params, password: &[u8]) -> Result<HashedPassword, String> {
    let salt: SaltString = SaltString::generate(rand_core::OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
        .hash_password(password, &salt)
        .map(|h| HashedPassword::new(Secret::new(h.to_string())))
        .map_err(|e| e.to_string())
}

fn verify_with(password: &[u8], expected: &str) -> Result<bool, String> {
    if BCRYPT_PREFIXES
        .iter()
        .any(|prefix| expected.starts_with(prefix))
    {
        return bcrypt::verify(password, expected).map_err(|e| e.to_string());
    }

    let expected_hash = PasswordHash::new(expected).map_err(|e| e.to_string())?;

    // Cost parameters are read from the stored hash itself.
    match Argon2::default().verify_password(password, &expected_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.to_string()),
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params.clone();
        let password = password.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span
                .in_scope(move || hash_with(&params, password.as_ref().expose_secret().as_bytes()))
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

        result.map_err(PasswordHasherError::UnexpectedError)
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        expected: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let password = password.clone();
        let expected = expected.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                verify_with(
                    password.as_ref().expose_secret().as_bytes(),
                    expected.as_ref().expose_secret(),
                )
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

        result.map_err(PasswordHasherError::UnexpectedError)
    }

    fn dummy_hash(&self) -> HashedPassword {
        self.dummy_hash.clone()
    }
}
