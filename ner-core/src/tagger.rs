//! # Esquema de Tags BIO e Tipos de Entidade
//!
//! Define o esquema de anotação **BIO** (Beginning-Inside-Outside) usado pelo
//! servidor no formato `slashTags`, onde cada token chega como `texto/TAG`.
//!
//! ## Categorias de Entidades
//!
//! | Rótulo | Significado         | Exemplos                     |
//! |--------|---------------------|------------------------------|
//! | PERS   | Pessoa              | John Smith, Machado de Assis |
//! | LOC    | Local/Geográfico    | U.S., São Paulo              |
//! | ORG    | Organização         | Acme, Petrobras              |
//! | O      | Fora de entidade    | (qualquer palavra comum)     |
//!
//! ## Esquema BIO
//!
//! - `B-TIPO`: Begin — primeiro token de uma entidade
//! - `I-TIPO`: Inside — tokens seguintes da mesma entidade
//! - `O`: Outside — não pertence a nenhuma entidade

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Categorias de entidade aceitas na resposta do servidor.
///
/// Qualquer outro tipo em uma tag `B-`/`I-` é rejeitado com
/// [`ParseError::UnknownEntityType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    /// **Pessoa**. Ex: "John Smith".
    #[serde(rename = "PERS")]
    Pers,
    /// **Localização**. Ex: "U.S.".
    #[serde(rename = "LOC")]
    Loc,
    /// **Organização**. Ex: "Acme".
    #[serde(rename = "ORG")]
    Org,
}

impl EntityCategory {
    pub const ALL: [EntityCategory; 3] = [EntityCategory::Pers, EntityCategory::Loc, EntityCategory::Org];

    /// Rótulo da categoria no protocolo
    pub fn name(&self) -> &'static str {
        match self {
            EntityCategory::Pers => "PERS",
            EntityCategory::Loc => "LOC",
            EntityCategory::Org => "ORG",
        }
    }

    /// Tenta parsear a partir do rótulo (ex: "PERS" → Some(Pers))
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "PERS" => Some(EntityCategory::Pers),
            "LOC" => Some(EntityCategory::Loc),
            "ORG" => Some(EntityCategory::Org),
            _ => None,
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tag BIO lida de um token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// **Begin**: inicia uma entidade. Ex: **John**/B-PERS Smith/I-PERS.
    Begin(EntityCategory),
    /// **Inside**: continua a entidade mais recente da mesma categoria.
    Inside(EntityCategory),
    /// **Outside**: o token não faz parte de nenhuma entidade.
    Outside,
    /// Par `BASE-TIPO` bem formado cuja base não é `B` nem `I` (ex: `E-PERS`).
    /// A extração ignora estes tokens sem validar o tipo.
    Other { base: String, kind: String },
}

impl Tag {
    /// Parseia uma tag a partir do texto (ex: "B-PERS" → Begin(Pers)).
    ///
    /// - `O` → [`Tag::Outside`]
    /// - qualquer coisa que não se divida em exatamente duas partes por `-`
    ///   → [`ParseError::MalformedTag`]
    /// - base `B`/`I` com tipo desconhecido → [`ParseError::UnknownEntityType`]
    pub fn parse(label: &str) -> Result<Self, ParseError> {
        if label == "O" {
            return Ok(Tag::Outside);
        }
        let parts: Vec<&str> = label.split('-').collect();
        let [base, kind] = parts.as_slice() else {
            return Err(ParseError::MalformedTag {
                token: label.to_string(),
                tag: label.to_string(),
            });
        };
        let category = || {
            EntityCategory::from_label(kind).ok_or_else(|| ParseError::UnknownEntityType(kind.to_string()))
        };
        match *base {
            "B" => Ok(Tag::Begin(category()?)),
            "I" => Ok(Tag::Inside(category()?)),
            _ => Ok(Tag::Other {
                base: base.to_string(),
                kind: kind.to_string(),
            }),
        }
    }

    /// Representação textual da tag (ex: "B-PERS", "I-ORG", "O")
    pub fn label(&self) -> String {
        match self {
            Tag::Begin(cat) => format!("B-{}", cat.name()),
            Tag::Inside(cat) => format!("I-{}", cat.name()),
            Tag::Outside => "O".to_string(),
            Tag::Other { base, kind } => format!("{base}-{kind}"),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Um token da resposta com sua tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Texto de superfície: tudo antes da última `/`.
    pub text: String,
    pub tag: Tag,
}

impl TaggedToken {
    /// Divide uma unidade `texto/TAG` na **última** `/`.
    ///
    /// Barras dentro do texto são preservadas: `a/b/B-LOC` → ("a/b", B-LOC).
    /// Sem nenhuma `/`, a unidade inteira é tratada como tag e o texto fica vazio.
    pub fn parse(unit: &str) -> Result<Self, ParseError> {
        let (text, label) = unit.rsplit_once('/').unwrap_or(("", unit));
        let tag = Tag::parse(label).map_err(|e| match e {
            ParseError::MalformedTag { tag, .. } => ParseError::MalformedTag {
                token: unit.to_string(),
                tag,
            },
            other => other,
        })?;
        Ok(Self {
            text: text.to_string(),
            tag,
        })
    }
}

/// Separadores entre tokens: espaço em branco Unicode mais os separadores
/// de informação `\x1c`..=`\x1f`, que o servidor também trata como quebra.
pub fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Unidades `texto/TAG` da resposta, sem parsear.
pub fn units(tagged_text: &str) -> impl Iterator<Item = &str> {
    tagged_text.split(is_token_separator).filter(|u| !u.is_empty())
}

/// Quebra a resposta `slashTags` em tokens marcados.
///
/// O primeiro token inválido interrompe o processamento.
pub fn tagged_tokens(tagged_text: &str) -> Result<Vec<TaggedToken>, ParseError> {
    units(tagged_text).map(TaggedToken::parse).collect()
}
