use crate::domain::model::Anchor;
use crate::domain::ports::RenderSurface;
use crate::utils::error::{Result, SiteError};
use std::collections::HashMap;

/// Render surface backed by an HTML shell with `{{PLACEHOLDER}}` anchors.
///
/// Writes accumulate per anchor and only touch the shell in the final
/// [`render`](ShellSurface::render) pass, so rewriting an anchor replaces its
/// content instead of consuming the placeholder. Anchors the shell does not
/// carry reject writes with `MissingTarget`.
pub struct ShellSurface {
    shell: String,
    content: HashMap<Anchor, String>,
}

impl ShellSurface {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            content: HashMap::new(),
        }
    }

    fn token(anchor: Anchor) -> &'static str {
        match anchor {
            Anchor::Quote => "{{QUOTE}}",
            Anchor::ProductGrid => "{{PRODUCTS}}",
            Anchor::Year => "{{YEAR}}",
            Anchor::Date => "{{DATE}}",
        }
    }

    fn ensure_anchor(&self, anchor: Anchor) -> Result<()> {
        if self.shell.contains(Self::token(anchor)) {
            Ok(())
        } else {
            Err(SiteError::MissingTarget {
                anchor: anchor.to_string(),
            })
        }
    }

    /// Substitute all anchors into the shell. Anchors nothing wrote to
    /// render as empty sections.
    pub fn render(&self) -> String {
        let mut html = self.shell.clone();
        for anchor in Anchor::ALL {
            let content = self.content.get(&anchor).map(String::as_str).unwrap_or("");
            html = html.replace(Self::token(anchor), content);
        }
        html
    }
}

impl RenderSurface for ShellSurface {
    fn write_text(&mut self, anchor: Anchor, text: &str) -> Result<()> {
        self.ensure_anchor(anchor)?;
        self.content.insert(anchor, escape_text(text));
        Ok(())
    }

    fn write_html(&mut self, anchor: Anchor, html: &str) -> Result<()> {
        self.ensure_anchor(anchor)?;
        self.content.insert(anchor, html.to_string());
        Ok(())
    }

    fn clear(&mut self, anchor: Anchor) -> Result<()> {
        self.ensure_anchor(anchor)?;
        self.content.remove(&anchor);
        Ok(())
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}
