//! # Configuração dos Taggers
//!
//! Os parâmetros de conexão são structs `serde` com valores padrão, para que a
//! aplicação possa carregá-los de qualquer formato (TOML, JSON...). O cliente
//! em si não lê arquivos nem variáveis de ambiente.
//!
//! | Campo              | Padrão              | Usado por        |
//! |--------------------|---------------------|------------------|
//! | `host`             | `localhost`         | ambos            |
//! | `port`             | `1234`              | ambos            |
//! | `output_format`    | `inlineXML`         | ambos            |
//! | `timeout`          | nenhum              | ambos            |
//! | `receive`          | `single_read`       | `SocketNer`      |
//! | `location`         | `/stanford-ner/ner` | `HttpNer`        |
//! | `classifier`       | nenhum              | `HttpNer`        |
//! | `preserve_spacing` | `true`              | `HttpNer`        |

use std::time::Duration;

use ner_core::OutputFormat;
use serde::Deserialize;

use crate::{DEFAULT_HOST, DEFAULT_LOCATION, DEFAULT_PORT};

/// Estratégia de leitura da resposta no transporte TCP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiveMode {
    /// Uma única chamada de leitura com buffer de `10 × tamanho do pedido`.
    /// Respostas maiores que o que o SO entrega de uma vez são truncadas.
    #[default]
    SingleRead,
    /// Lê até o servidor fechar a conexão (EOF).
    UntilEof,
}

/// Parâmetros comuns aos dois transportes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    pub host: String,
    pub port: u16,
    pub output_format: OutputFormat,
    /// Limite para conexão + troca. `None` usa o comportamento do transporte (sem limite).
    #[serde(with = "millis", rename = "timeout_ms")]
    pub timeout: Option<Duration>,
    pub receive: ReceiveMode,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            output_format: OutputFormat::default(),
            timeout: None,
            receive: ReceiveMode::default(),
        }
    }
}

impl TaggerConfig {
    pub fn new(host: impl Into<String>, port: u16, output_format: OutputFormat) -> Self {
        Self {
            host: host.into(),
            port,
            output_format,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_receive(mut self, receive: ReceiveMode) -> Self {
        self.receive = receive;
        self
    }

    /// Endereço `host:port` usado em logs e erros.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parâmetros do transporte HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(flatten)]
    pub tagger: TaggerConfig,
    /// Caminho do POST no servidor.
    pub location: String,
    /// Classificador nomeado; o parâmetro só é enviado quando presente.
    pub classifier: Option<String>,
    pub preserve_spacing: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            tagger: TaggerConfig::default(),
            location: DEFAULT_LOCATION.to_string(),
            classifier: None,
            preserve_spacing: true,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TaggerConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 1234);
        assert_eq!(config.output_format, OutputFormat::InlineXml);
        assert_eq!(config.timeout, None);
        assert_eq!(config.receive, ReceiveMode::SingleRead);

        let http = HttpConfig::default();
        assert_eq!(http.location, "/stanford-ner/ner");
        assert_eq!(http.classifier, None);
        assert!(http.preserve_spacing);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: HttpConfig = serde_json::from_str(
            r#"{"host": "tagger.local", "output_format": "slashTags", "timeout_ms": 1500,
                "classifier": "english.all.3class.distsim.crf.ser.gz"}"#,
        )
        .unwrap();
        assert_eq!(config.tagger.host, "tagger.local");
        assert_eq!(config.tagger.port, 1234);
        assert_eq!(config.tagger.output_format, OutputFormat::SlashTags);
        assert_eq!(config.tagger.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(
            config.classifier.as_deref(),
            Some("english.all.3class.distsim.crf.ser.gz")
        );
        assert!(config.preserve_spacing);
    }

    #[test]
    fn test_deserialize_rejects_bad_format() {
        let result = serde_json::from_str::<TaggerConfig>(r#"{"output_format": "html"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_receive_mode_names() {
        let config: TaggerConfig = serde_json::from_str(r#"{"receive": "until_eof"}"#).unwrap();
        assert_eq!(config.receive, ReceiveMode::UntilEof);
    }
}
