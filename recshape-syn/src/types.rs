use std::fmt::{self, Display};

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use recshape::TypeExpr;

/// A Rust type, kept as normalized source text.
///
/// Two types are equal when they are written the same way; no aliases or paths
/// are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SynType(String);

impl SynType {
    pub fn from_tokens(tokens: impl ToTokens) -> Self {
        SynType(render(tokens.to_token_stream()))
    }

    pub fn unit() -> Self {
        SynType("()".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SynType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TypeExpr for SynType {
    fn is_void(&self) -> bool {
        self.0 == "()"
    }
}

/// Token streams print with a space between every token; drop the ones rustfmt would.
fn render(tokens: TokenStream) -> String {
    let raw = tokens.to_string();
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let glued_to_prev = out.chars().last().is_some_and(|p| "<([&:".contains(p));
            let glued_to_next = chars.get(i + 1).is_some_and(|n| "<>,)]:;(".contains(*n));
            if glued_to_prev || glued_to_next {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Where a declaration lives in the parsed source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceSite {
    /// Path of the item, e.g. `geo::Point::x`.
    pub item: String,
    pub line: usize,
    /// 1-based.
    pub column: usize,
}

impl SourceSite {
    pub(crate) fn new(item: String, span: Span) -> Self {
        let start = span.start();
        SourceSite {
            item,
            line: start.line,
            column: start.column + 1,
        }
    }
}

impl Display for SourceSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.item, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(source: &str) -> String {
        let parsed: syn::Type = syn::parse_str(source).unwrap();
        SynType::from_tokens(parsed).0
    }

    #[test]
    fn test_rendering_is_compact() {
        assert_eq!(ty("Vec<String>"), "Vec<String>");
        assert_eq!(ty("Option<Vec<u8>>"), "Option<Vec<u8>>");
        assert_eq!(ty("HashMap<K, V>"), "HashMap<K, V>");
        assert_eq!(ty("&'a str"), "&'a str");
        assert_eq!(ty("&mut T"), "&mut T");
        assert_eq!(ty("std::vec::Vec<i32>"), "std::vec::Vec<i32>");
        assert_eq!(ty("[u8; 4]"), "[u8; 4]");
        assert_eq!(ty("Box<dyn Error + Send>"), "Box<dyn Error + Send>");
    }

    #[test]
    fn test_unit_is_void() {
        assert!(SynType::from_tokens(syn::parse_str::<syn::Type>("()").unwrap()).is_void());
        assert!(!SynType::from_tokens(syn::parse_str::<syn::Type>("u8").unwrap()).is_void());
    }
}
