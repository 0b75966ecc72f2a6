//! # Resource Builder
//!
//! Assembles desired apps and secrets from raw inputs.

use crate::constants::{
    DEFAULT_APP_STATUS, INPUT_APP_NAME, INPUT_COMMENT, INPUT_ENV, INPUT_RSP_HEADERS,
    INPUT_SECRETS, INPUT_SECRET_NAME, INPUT_SECRET_SLOTS, INPUT_SECRET_VALUE,
};
use crate::inputs::InputSource;
use crate::parser::{parse_dictionary, parse_secret_refs, resolve_slots};
use crate::resource::{AppResource, SecretResource};
use crate::warnings::Warnings;
use tracing::debug;

/// Build the desired app from inputs
///
/// The binary id is left unset; it is known only after the artifact is
/// uploaded or matched against the remote app.
pub fn build_app_resource(inputs: &impl InputSource, warnings: &mut Warnings) -> AppResource {
    let resource = AppResource {
        name: inputs.get(INPUT_APP_NAME),
        comment: inputs.get(INPUT_COMMENT),
        status: DEFAULT_APP_STATUS,
        env: parse_dictionary(INPUT_ENV, &inputs.get(INPUT_ENV), warnings),
        rsp_headers: parse_dictionary(INPUT_RSP_HEADERS, &inputs.get(INPUT_RSP_HEADERS), warnings),
        secrets: parse_secret_refs(&inputs.get(INPUT_SECRETS), warnings),
        binary: None,
    };
    debug!(
        "Built app \"{}\": {} env vars, {} response headers, {} secrets",
        resource.name,
        resource.env.len(),
        resource.rsp_headers.len(),
        resource.secrets.len()
    );
    resource
}

/// Build the desired secret from inputs
pub fn build_secret_resource(inputs: &impl InputSource, warnings: &mut Warnings) -> SecretResource {
    let resource = SecretResource {
        name: inputs.get(INPUT_SECRET_NAME),
        comment: inputs.get(INPUT_COMMENT),
        secret_slots: resolve_slots(
            &inputs.get(INPUT_SECRET_SLOTS),
            &inputs.get(INPUT_SECRET_VALUE),
            warnings,
        ),
    };
    debug!(
        "Built secret \"{}\" with {} slot(s)",
        resource.name,
        resource.secret_slots.len()
    );
    resource
}
