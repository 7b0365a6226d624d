use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

const THEME: &str = "InspiredGitHub";

static HIGHLIGHTER: LazyLock<PulldownHighlighter> = LazyLock::new(PulldownHighlighter::new);

pub struct PulldownHighlighter {
    syntaxset: SyntaxSet,
    themeset: ThemeSet,
}

impl PulldownHighlighter {
    pub fn new() -> PulldownHighlighter {
        PulldownHighlighter {
            syntaxset: SyntaxSet::load_defaults_newlines(),
            themeset: ThemeSet::load_defaults(),
        }
    }

    fn theme(&self) -> Option<&Theme> {
        self.themeset.themes.get(THEME)
    }

    /// Fenced blocks tagged `jsx`/`tsx` fall back to plain JavaScript, which the
    /// default syntax set knows.
    fn syntax_for(&self, lang: &str) -> &SyntaxReference {
        let token = match lang {
            "jsx" | "tsx" | "ts" | "typescript" => "js",
            other => other,
        };
        self.syntaxset
            .find_syntax_by_token(token)
            .unwrap_or_else(|| self.syntaxset.find_syntax_plain_text())
    }

    /// Replace every code block in `events` with a pre-rendered HTML block.
    ///
    /// A block that fails to highlight is emitted as escaped plain text.
    pub fn highlight<'a, It>(&self, events: It) -> Vec<Event<'a>>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let mut code_lang: Option<String> = None;
        let mut to_highlight = String::new();
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_lang = Some(match kind {
                        CodeBlockKind::Fenced(lang) => lang.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    });
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_lang.take().unwrap_or_default();
                    let syntax = self.syntax_for(&lang);
                    let html = self
                        .theme()
                        .and_then(|theme| {
                            highlighted_html_for_string(
                                &to_highlight,
                                &self.syntaxset,
                                syntax,
                                theme,
                            )
                            .ok()
                        })
                        .unwrap_or_else(|| {
                            log::warn!("couldn't highlight {lang} block, emitting plain text");
                            let mut escaped = String::from("<pre><code>");
                            pulldown_cmark::html::push_html(
                                &mut escaped,
                                std::iter::once(Event::Text(CowStr::from(to_highlight.clone()))),
                            );
                            escaped.push_str("</code></pre>");
                            escaped
                        });
                    to_highlight.clear();
                    out_events.push(Event::Html(CowStr::from(html)));
                }
                Event::Text(t) if code_lang.is_some() => to_highlight.push_str(&t),
                e => out_events.push(e),
            }
        }

        out_events
    }
}

/// Render a markdown document to HTML with highlighted code blocks.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());
    let events = HIGHLIGHTER.highlight(parser);
    let mut html_output = String::with_capacity(markdown.len() * 2);
    pulldown_cmark::html::push_html(&mut html_output, events.into_iter());
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let html = render_markdown("# Title\n\nSome *text* here.\n\n## Section\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
        assert!(html.contains("<h2>Section</h2>"));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = render_markdown("```js\nconst a = 1;\n```\n");
        // syntect emits inline-styled spans inside its own <pre>
        assert!(html.contains("<pre style="));
        assert!(html.contains("<span"));
        assert!(!html.contains("<code class=\"language-js\">"));
    }

    #[test]
    fn test_unknown_language_still_renders() {
        let html = render_markdown("```nosuchlang\nx <y> z\n```\n");
        assert!(html.contains("<pre"));
        assert!(html.contains("&lt;y&gt;"));
    }

    #[test]
    fn test_jsx_maps_to_javascript() {
        let h = PulldownHighlighter::new();
        assert_eq!(h.syntax_for("jsx").name, "JavaScript");
        assert_eq!(h.syntax_for("").name, "Plain Text");
    }
}
