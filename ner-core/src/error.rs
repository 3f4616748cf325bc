//! Erros de configuração e de parsing do `ner-core`.

/// Configuração inválida, detectada antes de qualquer acesso à rede.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Output format {0} is invalid.")]
    InvalidOutputFormat(String),
}

/// Falhas ao interpretar a resposta marcada do servidor.
///
/// O cliente confia no formato emitido pelo servidor e não tenta corrigir
/// nada: o primeiro token malformado aborta a extração inteira.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A tag não se divide em exatamente duas partes `BASE-TIPO`.
    #[error("malformed tag {tag:?} in token {token:?}")]
    MalformedTag { token: String, tag: String },

    /// Tipo de entidade fora de `PERS`, `LOC` e `ORG`.
    #[error("unknown entity type {0:?}")]
    UnknownEntityType(String),

    /// `I-X` apareceu antes de qualquer `B-X`.
    #[error("inside tag for {category} with no preceding begin tag (token {token:?})")]
    DanglingInside { category: String, token: String },
}
