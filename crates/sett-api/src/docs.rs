#![allow(clippy::needless_for_each)]

use anyhow::Result;
use serde_json::to_string_pretty;
use std::path::PathBuf;
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::Server;
use utoipauto::utoipauto;

/// Every documented route is served under `/v1`.
pub struct VersionPrefix;

impl Modify for VersionPrefix {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.servers = Some(vec![Server::new("/v1")]);
    }
}

#[utoipauto(paths = "./crates/sett-api/src/")]
#[derive(OpenApi)]
#[openapi(
    modifiers(&VersionPrefix),
    tags(
        (name = "sett_bin", description = "Sett account api"),
        (name = "User", description = "User account endpoints"),
        (name = "Setts", description = "Sett registry endpoints")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn generate_openapi_json(output_path: PathBuf) -> Result<()> {
        let openapi = Self::openapi();
        let json = to_string_pretty(&openapi)?;

        let file_path = output_path.join("openapi.json");

        tracing::info!("Saving OpenAPI specs to {}...", file_path.display());

        std::fs::write(&file_path, json)?;
        tracing::info!("OpenAPI specs saved!");
        Ok(())
    }
}
