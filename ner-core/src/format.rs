//! # Formatos de Saída do Servidor
//!
//! O servidor de marcação devolve o texto anotado em um de três formatos:
//!
//! | Nome no protocolo | Exemplo                                   |
//! |-------------------|-------------------------------------------|
//! | `slashTags`       | `John/B-PERS Smith/I-PERS works/O`        |
//! | `xml`             | `<wi num="0" entity="B-PERS">John</wi>`   |
//! | `inlineXML`       | `<PERS>John Smith</PERS> works`           |
//!
//! Apenas `slashTags` é interpretado por [`crate::entities::extract_entities`];
//! os demais são repassados como texto bruto.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Formato de saída solicitado ao servidor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "slashTags")]
    SlashTags,
    #[serde(rename = "xml")]
    Xml,
    #[serde(rename = "inlineXML")]
    InlineXml,
}

impl OutputFormat {
    /// Todos os formatos aceitos, na ordem do protocolo.
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::SlashTags,
        OutputFormat::Xml,
        OutputFormat::InlineXml,
    ];

    /// Nome usado no parâmetro `outputFormat`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::SlashTags => "slashTags",
            OutputFormat::Xml => "xml",
            OutputFormat::InlineXml => "inlineXML",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::InlineXml
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidOutputFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
