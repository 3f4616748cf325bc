//! # Tagger HTTP
//!
//! Envia o texto como formulário URL-encoded num único `POST`:
//!
//! | Campo             | Valor                                   |
//! |-------------------|-----------------------------------------|
//! | `input`           | texto sanitizado (termina em `\n`)      |
//! | `outputFormat`    | `slashTags`, `xml` ou `inlineXML`       |
//! | `preserveSpacing` | `true` / `false`                        |
//! | `classifier`      | somente quando configurado              |
//!
//! Cabeçalhos: `Content-Type: application/x-www-form-urlencoded` e
//! `Accept: text/plain`. Falhas são registradas e devolvidas ao chamador,
//! sem nova tentativa.

use ner_core::{sanitize, OutputFormat};
use tracing::{error, warn};

use crate::config::{HttpConfig, TaggerConfig};
use crate::connection::{bounded, http_connection};
use crate::error::{Error, Result};
use crate::Ner;

/// Stanford NER via HTTP.
///
/// Só respostas `2xx` são devolvidas como texto marcado. Qualquer outro
/// status vira [`Error::Status`] com o corpo recebido, em vez de ser
/// interpretado como tags.
#[derive(Debug, Clone, Default)]
pub struct HttpNer {
    config: HttpConfig,
}

impl HttpNer {
    /// Cria o tagger validando o formato de saída antes de qualquer acesso à rede.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        location: impl Into<String>,
        classifier: Option<String>,
        output_format: &str,
        preserve_spacing: bool,
    ) -> Result<Self> {
        let output_format: OutputFormat = output_format.parse()?;
        Ok(Self::from_config(HttpConfig {
            tagger: TaggerConfig::new(host, port, output_format),
            location: location.into(),
            classifier,
            preserve_spacing,
        }))
    }

    pub fn from_config(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub fn output_format(&self) -> OutputFormat {
        self.config.tagger.output_format
    }

    /// Campos do formulário. `preserveSpacing` vai como `true`/`false` em
    /// minúsculas; o servidor aceita booleanos sem diferenciar caixa.
    fn form_params(&self, input: String) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("input", input),
            ("outputFormat", self.config.tagger.output_format.to_string()),
            ("preserveSpacing", self.config.preserve_spacing.to_string()),
        ];
        if let Some(classifier) = &self.config.classifier {
            params.push(("classifier", classifier.clone()));
        }
        params
    }

    /// Faz o `POST` e devolve o corpo da resposta sem decodificar.
    pub async fn post_raw(&self, text: &str) -> Result<Vec<u8>> {
        let params = self.form_params(sanitize(text));
        let tagger = &self.config.tagger;

        bounded(tagger.timeout, async {
            let conn = http_connection(&tagger.host, tagger.port).await?;
            let response = conn
                .post_form(&self.config.location, &params)
                .await
                .inspect_err(|e| error!("Failed to post HTTP request to {}: {}", conn.addr(), e))?;

            let status = response.status();
            let body = response.bytes().await.map_err(|e| {
                error!("Failed to read HTTP response from {}: {}", conn.addr(), e);
                Error::Http(e)
            })?;

            if !status.is_success() {
                warn!("{} answered {} for {}", conn.addr(), status, self.config.location);
                return Err(Error::Status {
                    status,
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
            }
            Ok(body.to_vec())
        })
        .await
    }
}

impl Ner for HttpNer {
    async fn tag_text(&self, text: &str) -> Result<String> {
        let body = self.post_raw(text).await?;
        Ok(String::from_utf8(body)?)
    }
}
