//! Auth API
//!
//! Sign-in and sign-up are the writers of the credential store: both
//! exchange user credentials for a token and persist it, so every
//! later gateway request goes out authenticated. Sign-out clears it.

use serde::Serialize;
use shared::{LoginResponse, Usuario};

use crate::{ClientResult, Gateway};

/// Auth operations against the café service
#[derive(Debug, Clone)]
pub struct AuthApi {
    gateway: Gateway,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    correo: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    nombre: &'a str,
    correo: &'a str,
    password: &'a str,
}

impl AuthApi {
    /// Create the auth API over an existing gateway
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Login with email and password; persists the returned token
    pub async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Usuario> {
        let request = LoginRequest {
            correo: email,
            password,
        };
        let response: LoginResponse = self.gateway.post("auth/login", &request).await?;
        self.gateway.store().save(&response.token)?;
        Ok(response.usuario)
    }

    /// Register a new account; persists the returned token
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> ClientResult<Usuario> {
        let request = RegisterRequest {
            nombre: name,
            correo: email,
            password,
        };
        let response: LoginResponse = self.gateway.post("usuarios", &request).await?;
        self.gateway.store().save(&response.token)?;
        Ok(response.usuario)
    }

    /// Clear the stored token
    pub fn sign_out(&self) -> ClientResult<()> {
        self.gateway.store().clear()?;
        Ok(())
    }
}
