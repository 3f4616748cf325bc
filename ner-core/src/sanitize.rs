//! Preparação do texto para o protocolo orientado a linhas do servidor.

/// Caracteres de controle removidos antes do envio.
pub const STRIPPED_CHARS: [char; 5] = ['\x0c', '\n', '\r', '\t', '\x0b'];

/// Remove `\f \n \r \t \v` e acrescenta exatamente um `\n` final.
///
/// Os caracteres são apagados, não trocados por espaço, então palavras
/// vizinhas podem se juntar (`"a\tb"` vira `"ab\n"`).
pub fn sanitize(text: &str) -> String {
    let mut out: String = text.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    out.push('\n');
    out
}
