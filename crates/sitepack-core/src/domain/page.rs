//! The standalone page template.
//!
//! The page never runs the aggregated code. Its bootstrap script swaps the
//! loading placeholder for instructions on producing a real bundle with an
//! external build tool.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::{AggregatedDocument, EmitMode, error::DomainError};

pub const DEFAULT_TITLE: &str = "Windows XP & LimeWire Simulator Pro v2.7";

/// `id` of the element the application mounts into.
pub const MOUNT_ID: &str = "root";

/// `id` of the inert block holding the aggregated source in embed mode.
pub const EMBED_ID: &str = "aggregated-source";

const MODULE_CDN: &str = "https://esm.sh/";

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// An ES module the browser fetches at runtime through the import map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinnedModule {
    pub name: &'static str,
    pub version: &'static str,
}

impl PinnedModule {
    pub fn url(&self) -> String {
        format!("{MODULE_CDN}{}@{}", self.name, self.version)
    }
}

/// UI framework, its DOM renderer, icon set, generative-AI client.
pub const PINNED_MODULES: [PinnedModule; 4] = [
    PinnedModule {
        name: "react",
        version: "19.2.3",
    },
    PinnedModule {
        name: "react-dom",
        version: "19.2.3",
    },
    PinnedModule {
        name: "lucide-react",
        version: "0.562.0",
    },
    PinnedModule {
        name: "@google/genai",
        version: "1.34.0",
    },
];

/// `</script` ends the element; `<!--` can put the parser in a state where
/// even the real end tag no longer does.
static SCRIPT_BREAKOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</script|<!--").expect("valid script pattern"));

const STYLESHEET: &str = r#"  <style>
    @import url('https://fonts.googleapis.com/css2?family=Verdana:wght@400;700&display=swap');
    body {
      font-family: 'Verdana', sans-serif;
      background-color: #2b4f6b;
      overflow: hidden;
      user-select: none;
    }
    .win-shadow {
      box-shadow: 4px 4px 15px rgba(0,0,0,0.5), inset 1px 1px 0 rgba(255,255,255,0.2);
    }
    .scrollbar-retro::-webkit-scrollbar {
      width: 16px;
      height: 16px;
    }
    .scrollbar-retro::-webkit-scrollbar-track {
      background: #e0e0e0;
      border-left: 1px solid #808080;
    }
    .scrollbar-retro::-webkit-scrollbar-thumb {
      background: #c0c0c0;
      border: 2px solid #e0e0e0;
      border-right-color: #404040;
      border-bottom-color: #404040;
    }
    body::after {
      content: " ";
      display: block;
      position: absolute;
      top: 0;
      left: 0;
      bottom: 0;
      right: 0;
      background: linear-gradient(rgba(18, 16, 16, 0) 50%, rgba(0, 0, 0, 0.1) 50%),
                  linear-gradient(90deg, rgba(255, 0, 0, 0.03), rgba(0, 255, 0, 0.01), rgba(0, 0, 255, 0.03));
      z-index: 999999;
      background-size: 100% 3px, 3px 100%;
      pointer-events: none;
      opacity: 0.15;
    }
    ::selection {
      background: #000080;
      color: white;
    }
    @keyframes slideUp {
      from { transform: translateY(100%); }
      to { transform: translateY(0); }
    }
    .animate-slide-up {
      animation: slideUp 0.15s ease-out;
    }
  </style>
"#;

const LOADING_PLACEHOLDER: &str = r#"  <div id="loading" style="position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); color: white; font-size: 18px; text-align: center;">
    <div>Loading Windows XP Simulator...</div>
    <div style="font-size: 12px; margin-top: 10px; opacity: 0.7;">This may take a moment on first load</div>
  </div>
"#;

const BOOTSTRAP_SCRIPT: &str = r#"  <script type="module">
    // This page is a shell. The application modules are not bundled into it;
    // producing a self-contained file needs an external bundler (Vite,
    // webpack, esbuild) followed by `sitepack inline`.
    const code = 'background: rgba(0,0,0,0.3); padding: 2px 6px; border-radius: 3px;';
    document.getElementById('loading').innerHTML = `
      <div style="max-width: 500px;">
        <h2 style="margin-bottom: 20px;">To create a standalone HTML file:</h2>
        <ol style="text-align: left; line-height: 1.8;">
          <li>Install dependencies: <code style="${code}">npm install</code></li>
          <li>Build the project: <code style="${code}">npm run build</code></li>
          <li>Copy the contents of <code style="${code}">dist/index.html</code> and <code style="${code}">dist/assets/*.js</code></li>
          <li>Inline the JavaScript into the HTML file (<code style="${code}">sitepack inline</code>)</li>
        </ol>
        <p style="margin-top: 20px; font-size: 11px; opacity: 0.8;">
          Alternatively, use a bundler like esbuild or webpack to create a single bundle.
        </p>
      </div>
    `;
  </script>
"#;

#[derive(Serialize)]
struct ImportMap {
    imports: BTreeMap<&'static str, String>,
}

/// Fixed HTML shell around the optional embedded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    title: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl PageTemplate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// JSON body of the `<script type="importmap">` element.
    pub fn import_map_json(&self) -> Result<String, DomainError> {
        let map = ImportMap {
            imports: PINNED_MODULES.iter().map(|m| (m.name, m.url())).collect(),
        };
        serde_json::to_string_pretty(&map).map_err(|e| DomainError::PageRender(e.to_string()))
    }

    /// Render the full page. `document` is only consulted in [`EmitMode::Embed`].
    pub fn render(
        &self,
        mode: EmitMode,
        document: &AggregatedDocument,
    ) -> Result<String, DomainError> {
        let import_map = self.import_map_json()?;

        let mut html = String::with_capacity(8 * 1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\" />\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", escape_html(&self.title)));
        html.push_str(&format!("  <script src=\"{TAILWIND_CDN}\"></script>\n"));
        html.push_str(STYLESHEET);
        html.push_str("  <script type=\"importmap\">\n");
        for line in import_map.lines() {
            html.push_str("  ");
            html.push_str(line);
            html.push('\n');
        }
        html.push_str("  </script>\n</head>\n<body>\n");
        html.push_str(&format!("  <div id=\"{MOUNT_ID}\"></div>\n"));
        html.push_str(LOADING_PLACEHOLDER);

        if mode == EmitMode::Embed {
            html.push_str(&format!(
                "  <script type=\"text/plain\" id=\"{EMBED_ID}\">\n{}\n  </script>\n",
                escape_script_body(&document.render())
            ));
        }

        html.push_str(BOOTSTRAP_SCRIPT);
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

/// Keep embedded text from closing its `<script>` element early or from
/// swallowing the elements after it.
pub fn escape_script_body(text: &str) -> String {
    SCRIPT_BREAKOUT
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let found = &caps[0];
            match found.strip_prefix("</") {
                Some(rest) => format!("<\\/{rest}"),
                None => "<\\!--".to_string(),
            }
        })
        .into_owned()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
