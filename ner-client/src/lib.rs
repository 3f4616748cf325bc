//! # ner-client — Cliente para Servidores de Marcação NER
//!
//! Envia texto bruto a um servidor NER no estilo Stanford NER e interpreta a
//! resposta marcada. Há dois transportes:
//!
//! - **[`SocketNer`]**: socket TCP cru; envia o texto terminado em `\n` e lê a resposta.
//! - **[`HttpNer`]**: `POST` com formulário URL-encoded para um caminho configurado.
//!
//! Ambos implementam o trait [`Ner`], cujo único método obrigatório é
//! [`Ner::tag_text`]. A extração de entidades ([`Ner::get_entities`]) é comum
//! aos dois e vem do `ner-core`.
//!
//! Cada chamada abre uma conexão, faz uma única troca e fecha a conexão. Não
//! há pool, retry nem estado compartilhado entre chamadas.
//!
//! # Uso
//!
//! ```no_run
//! use ner_client::{Ner, SocketNer};
//!
//! # async fn run() -> ner_client::Result<()> {
//! let tagger = SocketNer::new("localhost", 9191, "slashTags")?;
//! let entities = tagger.get_entities("John Smith works at Acme").await?;
//! for person in entities.persons() {
//!     println!("{person}");
//! }
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use ner_core::{extract_entities, tagged_tokens, Entities, TaggedToken};

pub mod config;
pub mod connection;
pub mod error;
pub mod http;
pub mod socket;

pub use config::{HttpConfig, ReceiveMode, TaggerConfig};
pub use connection::{http_connection, tcpip4_socket, HttpConnection};
pub use error::{Error, Result};
pub use http::HttpNer;
pub use ner_core::{EntityCategory, OutputFormat};
pub use socket::SocketNer;

/// Host padrão do servidor
pub const DEFAULT_HOST: &str = "localhost";

/// Porta padrão do servidor
pub const DEFAULT_PORT: u16 = 1234;

/// Caminho padrão do servlet HTTP
pub const DEFAULT_LOCATION: &str = "/stanford-ner/ner";

/// Um tagger NER remoto.
///
/// Implementações só precisam fornecer [`tag_text`](Ner::tag_text); os demais
/// métodos interpretam a resposta no formato `slashTags`.
pub trait Ner: Sync {
    /// Envia `text` ao servidor e devolve o texto marcado.
    fn tag_text(&self, text: &str) -> impl Future<Output = Result<String>> + Send;

    /// Mesmo que [`tag_text`](Ner::tag_text).
    fn get_tagged_text(&self, text: &str) -> impl Future<Output = Result<String>> + Send {
        self.tag_text(text)
    }

    /// Marca `text` e devolve os tokens `texto/TAG` já parseados.
    fn get_tagged_tokens(&self, text: &str) -> impl Future<Output = Result<Vec<TaggedToken>>> + Send {
        async move {
            let tagged = self.tag_text(text).await?;
            Ok(tagged_tokens(&tagged)?)
        }
    }

    /// Marca `text` e agrupa as entidades em `PERS`, `LOC` e `ORG`.
    fn get_entities(&self, text: &str) -> impl Future<Output = Result<Entities>> + Send {
        async move {
            let tagged = self.tag_text(text).await?;
            Ok(extract_entities(&tagged)?)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    pub fn init_logs() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// O que o servidor falso observou numa conexão.
    pub struct Exchange {
        pub request: Vec<u8>,
        /// O cliente fechou a conexão depois da resposta.
        pub closed_by_client: bool,
    }

    /// Servidor TCP de uma conexão: lê até `\n`, responde `reply` (se houver)
    /// e espera o cliente fechar.
    pub async fn fake_tagger(reply: Option<Vec<u8>>) -> (u16, JoinHandle<Exchange>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.ends_with(b"\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            if let Some(reply) = reply {
                socket.write_all(&reply).await.unwrap();
                // O cliente pode já ter fechado após uma leitura parcial
                let _ = socket.shutdown().await;
            }

            let drained = tokio::time::timeout(std::time::Duration::from_secs(5), async {
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(_) => continue,
                    }
                }
            })
            .await;

            Exchange {
                request,
                closed_by_client: drained.is_ok(),
            }
        });

        (port, handle)
    }
}
