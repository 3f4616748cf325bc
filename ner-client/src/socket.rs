//! Tagger sobre socket TCP simples.
//!
//! Protocolo: o cliente escreve o texto sanitizado em UTF-8, terminado em
//! `\n`, e lê a resposta marcada no formato configurado no servidor. Não há
//! enquadramento além disso.

use ner_core::{sanitize, OutputFormat};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

use crate::config::{ReceiveMode, TaggerConfig};
use crate::connection::{bounded, tcpip4_socket};
use crate::error::Result;
use crate::Ner;

/// Fator aplicado ao tamanho do pedido para dimensionar o buffer de resposta.
const RESPONSE_BUFFER_FACTOR: usize = 10;

/// Stanford NER via socket TCP/IP.
#[derive(Debug, Clone, Default)]
pub struct SocketNer {
    config: TaggerConfig,
}

impl SocketNer {
    /// Cria o tagger validando o formato de saída antes de qualquer acesso à rede.
    pub fn new(host: impl Into<String>, port: u16, output_format: &str) -> Result<Self> {
        let output_format: OutputFormat = output_format.parse()?;
        Ok(Self::from_config(TaggerConfig::new(host, port, output_format)))
    }

    pub fn from_config(config: TaggerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    pub fn output_format(&self) -> OutputFormat {
        self.config.output_format
    }

    /// Uma conexão, uma escrita, uma leitura (ou leitura até EOF).
    /// O stream é fechado ao sair desta função, com ou sem erro.
    async fn exchange(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let mut stream = tcpip4_socket(&self.config.host, self.config.port).await?;
        stream.write_all(payload).await?;

        let mut buf = vec![0u8; RESPONSE_BUFFER_FACTOR * payload.len()];
        match self.config.receive {
            ReceiveMode::SingleRead => {
                let n = stream.read(&mut buf).await?;
                buf.truncate(n);
            }
            ReceiveMode::UntilEof => {
                buf.clear();
                stream.read_to_end(&mut buf).await?;
            }
        }

        debug!(
            "Exchanged {} bytes out / {} bytes in with {}",
            payload.len(),
            buf.len(),
            self.config.addr()
        );
        Ok(buf)
    }
}

impl Ner for SocketNer {
    async fn tag_text(&self, text: &str) -> Result<String> {
        let payload = sanitize(text).into_bytes();
        let response = bounded(self.config.timeout, self.exchange(&payload)).await?;
        Ok(String::from_utf8(response)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::Error;
    use crate::test_support::{fake_tagger, init_logs};
    use ner_core::ConfigError;

    fn tagger(port: u16) -> SocketNer {
        SocketNer::new("127.0.0.1", port, "slashTags").unwrap()
    }

    #[test]
    fn test_invalid_format_fails_before_network() {
        // Porta 1 nunca é contatada: a validação vem antes
        let err = SocketNer::new("127.0.0.1", 1, "json").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidOutputFormat(ref f)) if f == "json"
        ));
    }

    #[test]
    fn test_defaults() {
        let ner = SocketNer::default();
        assert_eq!(ner.config().host, "localhost");
        assert_eq!(ner.config().port, 1234);
        assert_eq!(ner.output_format(), OutputFormat::InlineXml);
    }

    #[tokio::test]
    async fn test_sends_sanitized_text() {
        init_logs();
        let (port, server) = fake_tagger(Some(b"John/B-PERS Smith/I-PERS\n".to_vec())).await;

        let tagged = tagger(port).tag_text("John\tSmith\r\n").await.unwrap();
        assert_eq!(tagged, "John/B-PERS Smith/I-PERS\n");

        let exchange = server.await.unwrap();
        assert_eq!(exchange.request, b"JohnSmith\n");
        assert!(exchange.closed_by_client);
    }

    #[tokio::test]
    async fn test_get_entities_over_socket() {
        init_logs();
        let reply = "John/B-PERS Smith/I-PERS works/O at/O Acme/B-ORG\n";
        let (port, server) = fake_tagger(Some(reply.as_bytes().to_vec())).await;

        let entities = tagger(port)
            .get_entities("John Smith works at Acme")
            .await
            .unwrap();
        assert_eq!(entities.persons(), ["John Smith"]);
        assert!(entities.locations().is_empty());
        assert_eq!(entities.organizations(), ["Acme"]);

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_tagged_text_and_tokens() {
        init_logs();
        let reply = b"U.S./B-LOC is/O big/O\n".to_vec();

        let (port, server) = fake_tagger(Some(reply.clone())).await;
        let tagged = tagger(port).get_tagged_text("U.S. is big").await.unwrap();
        assert_eq!(tagged, "U.S./B-LOC is/O big/O\n");
        server.await.unwrap();

        let (port, server) = fake_tagger(Some(reply)).await;
        let tokens = tagger(port).get_tagged_tokens("U.S. is big").await.unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "U.S.");
        assert_eq!(tokens[0].tag, ner_core::Tag::Begin(ner_core::EntityCategory::Loc));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_single_read_is_bounded_by_buffer() {
        init_logs();
        // Pedido "a\n" → buffer de 20 bytes; a resposta tem 100
        let (port, server) = fake_tagger(Some(vec![b'x'; 100])).await;

        let tagged = tagger(port).tag_text("a").await.unwrap();
        assert!(!tagged.is_empty());
        assert!(tagged.len() <= 20, "leu {} bytes", tagged.len());

        assert!(server.await.unwrap().closed_by_client);
    }

    #[tokio::test]
    async fn test_until_eof_reads_everything() {
        init_logs();
        let (port, server) = fake_tagger(Some(vec![b'x'; 100])).await;

        let config = TaggerConfig::new("127.0.0.1", port, OutputFormat::SlashTags)
            .with_receive(ReceiveMode::UntilEof);
        let tagged = SocketNer::from_config(config).tag_text("a").await.unwrap();
        assert_eq!(tagged.len(), 100);

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_error() {
        init_logs();
        let (port, server) = fake_tagger(Some(vec![0xff, 0xfe, b'\n'])).await;

        let err = tagger(port).tag_text("abc").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(server.await.unwrap().closed_by_client);
    }

    #[tokio::test]
    async fn test_timeout_closes_connection() {
        init_logs();
        // Servidor nunca responde
        let (port, server) = fake_tagger(None).await;

        let config = TaggerConfig::new("127.0.0.1", port, OutputFormat::SlashTags)
            .with_timeout(Duration::from_millis(100));
        let err = SocketNer::from_config(config).tag_text("hello").await.unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));

        let exchange = server.await.unwrap();
        assert_eq!(exchange.request, b"hello\n");
        assert!(exchange.closed_by_client);
    }

    #[tokio::test]
    async fn test_parse_error_propagates() {
        init_logs();
        let (port, server) = fake_tagger(Some(b"Smith/I-PERS\n".to_vec())).await;

        let err = tagger(port).get_entities("Smith").await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_refused_connection() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = tagger(port).tag_text("hi").await.unwrap_err();
        assert!(matches!(err, Error::Connection { .. }));
    }
}
