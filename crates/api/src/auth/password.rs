//! Argon2id password hashing and verification for the admin account.
//!
//! The admin password is never stored in source or config in plaintext:
//! `ADMIN_PASSWORD_HASH` holds a PHC string produced by [`hash_password`],
//! printed by `virasat-api --hash-password [PASSWORD]`.

use std::io::BufRead;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Run `--hash-password`: hash `arg`, or the first line of `input` when no
/// password was given on the command line.
pub fn hash_password_command(
    arg: Option<String>,
    mut input: impl BufRead,
) -> Result<String, String> {
    let password = match arg {
        Some(password) => password,
        None => {
            let mut line = String::new();
            input
                .read_line(&mut line)
                .map_err(|e| format!("Failed to read password: {e}"))?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };
    if password.is_empty() {
        return Err("Password must not be empty".to_string());
    }
    hash_password(&password).map_err(|e| format!("Password hashing failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");

        let verified =
            verify_password("correct-horse-battery-staple", &hash).expect("verify should succeed");
        assert!(verified);
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").expect("hashing should succeed");
        let verified = verify_password("wrong-password", &hash).expect("verify should succeed");
        assert!(!verified);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_hash_command_takes_argument() {
        let hash = hash_password_command(Some("from-arg".into()), &b"ignored\n"[..]).unwrap();
        assert!(verify_password("from-arg", &hash).unwrap());
    }

    #[test]
    fn test_hash_command_reads_stdin_line() {
        let hash = hash_password_command(None, &b"from-stdin\r\nsecond line\n"[..]).unwrap();
        assert!(verify_password("from-stdin", &hash).unwrap());
    }

    #[test]
    fn test_hash_command_rejects_empty_password() {
        assert!(hash_password_command(None, &b"\n"[..]).is_err());
        assert!(hash_password_command(Some(String::new()), &b""[..]).is_err());
    }
}
