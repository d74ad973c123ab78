use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::error::{ClientError, ClientResult};

/// Versioned payload of one completed command. `ok` is always true here;
/// failures travel as [`FailureEnvelope`] instead, so consumers can branch
/// on the flag without inspecting the rest.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: String,
    pub version: String,
    pub data: Value,
}

impl SuccessEnvelope {
    /// Stamps command output with the command name and crate version. The
    /// only failure mode is data that cannot serialize, which is a bug in
    /// the calling command rather than user input.
    pub fn for_command<T>(command: &str, data: T) -> ClientResult<Self>
    where
        T: Serialize,
    {
        let data = serde_json::to_value(data)
            .map_err(|err| ClientError::internal_serialization(&err.to_string()))?;

        Ok(Self {
            ok: true,
            command: command.to_string(),
            version: API_VERSION.to_string(),
            data,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    pub ok: bool,
    pub error: ErrorBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

impl From<&ClientError> for FailureEnvelope {
    fn from(error: &ClientError) -> Self {
        Self {
            ok: false,
            error: ErrorBody {
                code: error.code.clone(),
                message: error.message.clone(),
                recovery_steps: error.recovery_steps.clone(),
            },
            data: error.data.clone(),
        }
    }
}
