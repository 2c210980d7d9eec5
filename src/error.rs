use std::{io, path::PathBuf};

use thiserror::Error;

/// Every way a single dispatch can fail. All of them end the invocation.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Erro: {0}")]
    MissingArgument(String),

    #[error("erro ao ler {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("erro ao parsear JSON: {0}")]
    FileParse(#[from] serde_json::Error),

    /// `path` is `None` when neither `--credentials` nor the environment
    /// named a key file.
    #[error("erro nas credenciais do Firebase: {reason}")]
    Credentials {
        reason: String,
        path: Option<PathBuf>,
    },

    #[error("erro ao inicializar Firebase: {0}")]
    ClientInit(String),

    #[error("erro ao enviar notificação: {0:#}")]
    Send(anyhow::Error),
}

impl DispatchError {
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Operator guidance printed under the error line, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DispatchError::MissingArgument(_) => Some(
                "Uso: send_test_notification --token SEU_TOKEN [--from-sample]\n\
                 Execute com --help para ver todas as opções",
            ),
            DispatchError::Credentials { path: None, .. } => Some(
                "Configure a variável de ambiente:\n  \
                 export GOOGLE_APPLICATION_CREDENTIALS=\"/path/to/serviceAccountKey.json\"\n\
                 Ou use --credentials para especificar o arquivo",
            ),
            DispatchError::Credentials { path: Some(_), .. }
            | DispatchError::ClientInit(_) => Some(
                "Certifique-se de que:\n\
                 1. Você baixou o arquivo de credenciais do Firebase Console\n\
                 2. O arquivo de credenciais está no caminho correto",
            ),
            _ => None,
        }
    }
}
