// src/ports/html.rs
use std::collections::BTreeMap;

use html_escape::encode_text;

use crate::domain::Flashcard;
use crate::util::text::preprocess;

/// Renders decks and single cards as standalone HTML pages that delegate math
/// typesetting to KaTeX's auto-render extension.
///
/// The generated page carries the full renderer contract: the delimiter table
/// (`$$`/display, `\[\]`/display, `$`/inline), `throwOnError: false` so
/// malformed input shows as raw text instead of breaking the page, and the
/// macro map as a JS object.
#[derive(Debug)]
pub struct HtmlPresenter {
    katex_base: String,
}

impl HtmlPresenter {
    pub fn new(katex_base: impl Into<String>) -> Self {
        Self {
            katex_base: katex_base.into(),
        }
    }

    /// The `<head>` assets plus the auto-render invocation.
    ///
    /// Card text is authored markup and passes through unescaped, exactly as
    /// the macro map does; only the page chrome (titles, tag lines) gets
    /// escaped.
    fn katex_setup(&self, macros: &BTreeMap<String, String>) -> String {
        // BTreeMap serializes to a plain JSON object, which is valid JS.
        let macros_json =
            serde_json::to_string(macros).unwrap_or_else(|_| "{}".to_string());

        format!(
            r#"    <link rel="stylesheet" href="{base}/katex.min.css">
    <script defer src="{base}/katex.min.js"></script>
    <script defer src="{base}/contrib/auto-render.min.js"></script>
    <script>
        document.addEventListener("DOMContentLoaded", function() {{
            renderMathInElement(document.body, {{
                delimiters: [
                    {{ left: "$$", right: "$$", display: true }},
                    {{ left: "\\[", right: "\\]", display: true }},
                    {{ left: "$", right: "$", display: false }}
                ],
                throwOnError: false,
                macros: {macros_json}
            }});
        }});
    </script>"#,
            base = self.katex_base,
            macros_json = macros_json
        )
    }

    fn tags_line(tags: &[String]) -> String {
        if tags.is_empty() {
            "None".to_string()
        } else {
            encode_text(&tags.join(", ")).into_owned()
        }
    }

    /// Render the card list page: one row per card, front and back side by
    /// side, with deck index and tags in the header.
    pub fn render_deck(
        &self,
        title: &str,
        cards: &[(usize, &Flashcard)],
        macros: &BTreeMap<String, String>,
    ) -> String {
        let mut card_sections = String::new();
        for (index, card) in cards {
            card_sections.push_str(&format!(
                r#"        <div class="card">
            <div class="card-header">
                <span class="card-index">#{index}</span>
                <span class="tags">Tags: {tags}</span>
            </div>
            <div class="card-sides">
                <div class="side">{front}</div>
                <div class="side">{back}</div>
            </div>
        </div>
"#,
                index = index,
                tags = Self::tags_line(&card.tags),
                front = preprocess(&card.front),
                back = preprocess(&card.back),
            ));
        }
        if cards.is_empty() {
            card_sections.push_str("        <p>No flashcards available.</p>\n");
        }

        self.page(title, &card_sections, macros)
    }

    /// Render a single card with labeled front and back.
    pub fn render_card(
        &self,
        index: usize,
        card: &Flashcard,
        macros: &BTreeMap<String, String>,
    ) -> String {
        let body = format!(
            r#"        <div class="card">
            <div class="card-header">
                <span class="card-index">#{index}</span>
                <span class="tags">Tags: {tags}</span>
            </div>
            <h2>Front</h2>
            <div class="side">{front}</div>
            <h2>Back</h2>
            <div class="side">{back}</div>
        </div>
"#,
            index = index,
            tags = Self::tags_line(&card.tags),
            front = preprocess(&card.front),
            back = preprocess(&card.back),
        );

        self.page(&format!("Card #{index}"), &body, macros)
    }

    fn page(&self, title: &str, body: &str, macros: &BTreeMap<String, String>) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
{katex_setup}
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 900px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            padding: 1.5rem;
            margin-bottom: 1rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .card-header {{
            display: flex;
            justify-content: space-between;
            margin-bottom: 0.5rem;
            color: #666;
            font-size: 0.9em;
        }}
        .card-sides {{
            display: flex;
            gap: 1rem;
        }}
        .side {{
            flex: 1;
            white-space: pre-wrap;
            text-align: left;
        }}
        .tags {{
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            font-size: 0.9em;
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
{body}
</body>
</html>"#,
            title = encode_text(title),
            katex_setup = self.katex_setup(macros),
            body = body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_KATEX_BASE;

    fn presenter() -> HtmlPresenter {
        HtmlPresenter::new(DEFAULT_KATEX_BASE)
    }

    fn sample_macros() -> BTreeMap<String, String> {
        let mut macros = BTreeMap::new();
        macros.insert(r"\C".to_string(), r"\mathbb{C}".to_string());
        macros
    }

    #[test]
    fn given_deck_page_when_rendering_then_contains_delimiter_contract() {
        let card = Flashcard::new("Q", "A");
        let html = presenter().render_deck("Deck", &[(0, &card)], &sample_macros());

        assert!(html.contains(r#"{ left: "$$", right: "$$", display: true }"#));
        assert!(html.contains(r#"{ left: "\\[", right: "\\]", display: true }"#));
        assert!(html.contains(r#"{ left: "$", right: "$", display: false }"#));
        assert!(html.contains("throwOnError: false"));
    }

    #[test]
    fn given_macros_when_rendering_then_embedded_as_js_object() {
        let card = Flashcard::new("Q", "A");
        let html = presenter().render_deck("Deck", &[(0, &card)], &sample_macros());

        assert!(html.contains(r#"macros: {"\\C":"\\mathbb{C}"}"#));
    }

    #[test]
    fn given_card_with_shorthand_when_rendering_then_text_is_preprocessed() {
        let card = Flashcard::new("line one//line two", "inline $x^2$");
        let html = presenter().render_card(0, &card, &BTreeMap::new());

        assert!(html.contains("line one\nline two"));
        assert!(html.contains(r"$\displaystyle x^2$"));
    }

    #[test]
    fn given_untagged_card_when_rendering_then_tags_show_none() {
        let card = Flashcard::new("Q", "A");
        let html = presenter().render_card(3, &card, &BTreeMap::new());

        assert!(html.contains("Tags: None"));
        assert!(html.contains("#3"));
    }

    #[test]
    fn given_tags_with_markup_when_rendering_then_escaped() {
        let card = Flashcard::new("Q", "A").with_tags(vec!["<set&theory>".to_string()]);
        let html = presenter().render_card(0, &card, &BTreeMap::new());

        assert!(html.contains("&lt;set&amp;theory&gt;"));
    }

    #[test]
    fn given_empty_deck_when_rendering_then_placeholder_shown() {
        let html = presenter().render_deck("Deck", &[], &BTreeMap::new());

        assert!(html.contains("No flashcards available."));
    }

    #[test]
    fn given_katex_base_when_rendering_then_assets_loaded_from_it() {
        let presenter = HtmlPresenter::new("file:///opt/katex");
        let html = presenter.render_deck("Deck", &[], &BTreeMap::new());

        assert!(html.contains(r#"href="file:///opt/katex/katex.min.css""#));
        assert!(html.contains(r#"src="file:///opt/katex/contrib/auto-render.min.js""#));
    }
}
