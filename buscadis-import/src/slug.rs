//! URL slugs and publication paths.

use buscadis_catalog::Category;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 80;

/// Convert a title to a URL-safe slug.
///
/// Lowercases, drops punctuation, folds Spanish accents to ASCII and joins words
/// with single hyphens. The result is at most [`MAX_SLUG_LEN`] characters.
pub fn slugify(title: &str) -> String {
    let folded: String = title
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                Some(c)
            } else {
                fold_accent(c)
            }
        })
        .collect();

    let mut slug = String::with_capacity(folded.len());
    for word in folded.split_whitespace() {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }

    // Words are joined only between non-empty parts, so there is no leading
    // or trailing hyphen to trim. Output is ASCII; byte and char lengths agree.
    slug.truncate(MAX_SLUG_LEN);
    slug
}

fn fold_accent(c: char) -> Option<char> {
    match c {
        'á' | 'à' | 'ä' | 'â' => Some('a'),
        'é' | 'è' | 'ë' | 'ê' => Some('e'),
        'í' | 'ì' | 'ï' | 'î' => Some('i'),
        'ó' | 'ò' | 'ö' | 'ô' => Some('o'),
        'ú' | 'ù' | 'ü' | 'û' => Some('u'),
        'ñ' => Some('n'),
        _ => None,
    }
}

/// Compose `/{category}/{subcategory}[/{subsubcategory}]/{shortId}-{slug}`.
///
/// A missing subcategory becomes `general`.
pub fn url_path(
    category: Category,
    subcategory: Option<&str>,
    subsubcategory: Option<&str>,
    short_id: &str,
    slug: &str,
) -> String {
    let mut path = format!("/{}/{}", category.name(), subcategory.unwrap_or("general"));
    if let Some(subsub) = subsubcategory {
        path.push('/');
        path.push_str(subsub);
    }
    path.push_str(&format!("/{short_id}-{slug}"));
    path
}
