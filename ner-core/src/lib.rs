//! # ner-core — Interpretação de Respostas de Servidores NER
//!
//! Este crate contém a parte síncrona e sem I/O do cliente NER: tudo o que
//! acontece antes de o texto ir para a rede e depois de a resposta voltar.
//! O transporte (TCP e HTTP) fica no crate `ner-client`.
//!
//! ## Fluxo
//!
//! 1.  **Sanitização** ([`sanitize()`]): remove `\f \n \r \t \v` e garante um `\n` final,
//!     exigido pelo protocolo orientado a linhas do servidor.
//! 2.  **Formato** ([`format`]): o cliente pede `slashTags`, `xml` ou `inlineXML`.
//! 3.  **Tokens marcados** ([`tagger`]): cada unidade `texto/TAG` vira um [`TaggedToken`].
//! 4.  **Entidades** ([`entities`]): as tags BIO são agrupadas em [`Entities`]
//!     (`PERS`, `LOC`, `ORG`).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use ner_core::{extract_entities, sanitize};
//!
//! assert_eq!(sanitize("John\tSmith\n"), "JohnSmith\n");
//!
//! let entities = extract_entities("John/B-PERS Smith/I-PERS works/O at/O Acme/B-ORG").unwrap();
//! assert_eq!(entities.persons(), ["John Smith"]);
//! assert_eq!(entities.organizations(), ["Acme"]);
//! ```

pub mod entities;
pub mod error;
pub mod format;
pub mod sanitize;
pub mod tagger;

pub use entities::{extract_entities, Entities};
pub use error::{ConfigError, ParseError};
pub use format::OutputFormat;
pub use sanitize::sanitize;
pub use tagger::{tagged_tokens, EntityCategory, Tag, TaggedToken};
