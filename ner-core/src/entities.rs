//! # Extração de Entidades
//!
//! Converte a resposta `slashTags` do servidor em listas de entidades
//! agrupadas por categoria.
//!
//! ## Algoritmo
//! 1. Percorre a resposta token a token (`texto/TAG`), parseando cada um na vez.
//! 2. `O` é ignorado.
//! 3. `B-X` abre uma nova entidade em `X`.
//! 4. `I-X` estende a **última** entidade aberta de `X`, mesmo que ela não
//!    seja vizinha do token atual (não há verificação de contiguidade).
//! 5. Cada lista é deduplicada e ordenada.
//!
//! ## Exemplo
//! `John/B-PERS Smith/I-PERS works/O at/O Acme/B-ORG`
//! → `{PERS: ["John Smith"], LOC: [], ORG: ["Acme"]}`

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::ParseError;
use crate::tagger::{units, EntityCategory, Tag, TaggedToken};

/// Entidades encontradas, agrupadas por categoria.
///
/// Sempre contém exatamente as chaves `PERS`, `LOC` e `ORG`, mesmo vazias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Entities {
    groups: BTreeMap<EntityCategory, Vec<String>>,
}

impl Entities {
    fn seeded() -> Self {
        Self {
            groups: EntityCategory::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    /// Entidades de uma categoria, em ordem lexicográfica.
    pub fn get(&self, category: EntityCategory) -> &[String] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn persons(&self) -> &[String] {
        self.get(EntityCategory::Pers)
    }

    pub fn locations(&self) -> &[String] {
        self.get(EntityCategory::Loc)
    }

    pub fn organizations(&self) -> &[String] {
        self.get(EntityCategory::Org)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityCategory, &[String])> {
        self.groups.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    /// Número total de entidades distintas em todas as categorias.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Default for Entities {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Extrai as entidades de uma resposta no formato `slashTags`.
///
/// Falha no primeiro token inválido, sem devolver resultado parcial:
/// - tag malformada → [`ParseError::MalformedTag`]
/// - tipo fora de `PERS`/`LOC`/`ORG` → [`ParseError::UnknownEntityType`]
/// - `I-X` sem `B-X` anterior → [`ParseError::DanglingInside`]
pub fn extract_entities(tagged_text: &str) -> Result<Entities, ParseError> {
    let mut result = Entities::seeded();

    for unit in units(tagged_text) {
        let token = TaggedToken::parse(unit)?;
        match token.tag {
            Tag::Begin(cat) => result.groups.entry(cat).or_default().push(token.text),
            Tag::Inside(cat) => {
                let current = result
                    .groups
                    .get_mut(&cat)
                    .and_then(|list| list.last_mut())
                    .ok_or_else(|| ParseError::DanglingInside {
                        category: cat.name().to_string(),
                        token: token.text.clone(),
                    })?;
                current.push(' ');
                current.push_str(&token.text);
            }
            Tag::Outside | Tag::Other { .. } => {}
        }
    }

    for list in result.groups.values_mut() {
        let unique: BTreeSet<String> = std::mem::take(list).into_iter().collect();
        *list = unique.into_iter().collect();
    }

    Ok(result)
}
