use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Lowercase ASCII slugs; non-ASCII letters are transliterated
/// ("Dünya" -> "dunya") and separator runs collapse to one `-`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
