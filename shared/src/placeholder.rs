/// Inline SVG shown in place of an image that failed to load: a grey square
/// reading "Imagem não encontrada".
pub const BROKEN_IMAGE_PLACEHOLDER: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMzAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMzAwIiBoZWlnaHQ9IjMwMCIgZmlsbD0iIzMzMzMzMyIvPjx0ZXh0IHg9IjE1MCIgeT0iMTUwIiBmb250LWZhbWlseT0iQXJpYWwsIHNhbnMtc2VyaWYiIGZvbnQtc2l6ZT0iMTgiIGZpbGw9IiM5OTk5OTkiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5JbWFnZW0gbsOjbyBlbmNvbnRyYWRhPC90ZXh0Pjwvc3ZnPg==";

/// Source to switch a broken image to, or `None` when it already shows the
/// placeholder (a failing placeholder must not loop).
pub fn fallback_source(current_src: &str) -> Option<&'static str> {
    (current_src != BROKEN_IMAGE_PLACEHOLDER).then_some(BROKEN_IMAGE_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_image_gets_placeholder_once() {
        assert_eq!(
            fallback_source("https://example.com/missing.jpg"),
            Some(BROKEN_IMAGE_PLACEHOLDER)
        );
        assert_eq!(fallback_source(BROKEN_IMAGE_PLACEHOLDER), None);
    }
}
