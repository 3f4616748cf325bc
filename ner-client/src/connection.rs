//! # Conexões com Escopo
//!
//! Helpers que abrem a conexão com o servidor de marcação. O fechamento é
//! garantido por posse: o [`TcpStream`] e o [`HttpConnection`] são liberados
//! no `Drop`, seja no retorno normal, num `?` de erro ou quando o timeout
//! descarta o future.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use reqwest::header::ACCEPT;
use tokio::net::{lookup_host, TcpStream};
use tracing::debug;

use crate::error::{Error, Result};

/// Abre um socket TCP/IPv4 conectado a `host:port`.
///
/// Apenas endereços IPv4 resolvidos são tentados, na ordem do resolvedor.
/// DNS sem resposta, ausência de IPv4 e conexão recusada viram
/// [`Error::Connection`].
pub async fn tcpip4_socket(host: &str, port: u16) -> Result<TcpStream> {
    let addr = format!("{host}:{port}");
    let candidates: Vec<SocketAddr> = lookup_host((host, port))
        .await
        .map_err(|source| Error::Connection {
            addr: addr.clone(),
            source,
        })?
        .filter(SocketAddr::is_ipv4)
        .collect();

    let mut last_err = io::Error::new(io::ErrorKind::AddrNotAvailable, "no IPv4 address for host");
    for candidate in candidates {
        match TcpStream::connect(candidate).await {
            Ok(stream) => {
                debug!("Connected to {} ({})", addr, candidate);
                return Ok(stream);
            }
            Err(e) => last_err = e,
        }
    }

    Err(Error::Connection {
        addr,
        source: last_err,
    })
}

/// Conexão HTTP com um servidor `host:port`.
///
/// O pool de conexões ociosas fica desativado, então nenhum socket sobrevive
/// ao fim da requisição nem ao `Drop` deste valor.
#[derive(Debug)]
pub struct HttpConnection {
    client: reqwest::Client,
    base_url: String,
    addr: String,
}

/// Prepara uma conexão HTTP com `host:port` sem fazer nenhuma requisição.
///
/// O nome é resolvido aqui para que falhas de DNS apareçam como
/// [`Error::Connection`] antes do envio.
pub async fn http_connection(host: &str, port: u16) -> Result<HttpConnection> {
    let addr = format!("{host}:{port}");
    lookup_host((host, port))
        .await
        .map_err(|source| Error::Connection {
            addr: addr.clone(),
            source,
        })?;

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()?;

    Ok(HttpConnection {
        client,
        base_url: format!("http://{addr}"),
        addr,
    })
}

impl HttpConnection {
    /// Envia um único `POST` com corpo `application/x-www-form-urlencoded`
    /// e `Accept: text/plain`.
    pub async fn post_form(&self, location: &str, params: &[(&str, String)]) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, location);
        debug!("POST {} ({} fields)", url, params.len());

        self.client
            .post(url)
            .header(ACCEPT, "text/plain")
            .form(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::Connection {
                        addr: self.addr.clone(),
                        source: io::Error::other(e),
                    }
                } else {
                    Error::Http(e)
                }
            })
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}

/// Limita a duração de `fut`. Com `None` espera indefinidamente.
pub(crate) async fn bounded<T, F>(timeout: Option<Duration>, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| Error::Timeout(limit))?,
        None => fut.await,
    }
}
