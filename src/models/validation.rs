use crate::error::DispatchError;

/// Blank tokens are rejected. Accepted tokens are returned exactly as given.
pub fn validate_fcm_token(token: Option<&str>, from_sample: bool) -> Result<&str, DispatchError> {
    match token {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ if from_sample => Err(DispatchError::MissingArgument(
            "--token é obrigatório mesmo com --from-sample".to_string(),
        )),
        _ => Err(DispatchError::MissingArgument(format!(
            "--token é obrigatório (ou use --from-sample para ler do {})",
            crate::models::sample::SAMPLE_FILE
        ))),
    }
}
