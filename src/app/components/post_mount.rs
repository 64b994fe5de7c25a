use dioxus::prelude::*;

/// Text input that takes focus as soon as it is mounted
#[component]
pub fn AutoFocusInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")]
    input_type: &'static str,
    #[props(default = "")]
    placeholder: &'static str,
) -> Element {
    rsx! {
        input {
            class: "c-input",
            r#type: input_type,
            placeholder: placeholder,
            value: "{value}",
            onmounted: move |evt| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("Auto-focus failed: {:?}", e);
                }
            },
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}

/// highlight.js bundle, loaded once by the layout
pub const HIGHLIGHT_SCRIPT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";
pub const HIGHLIGHT_THEME_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github-dark.min.css";

/// Attempts (100 ms apart) to wait for highlight.js on first render
const HIGHLIGHT_RETRIES: u32 = 50;

/// Build the script filling and highlighting a `<code>` element.
///
/// The layout loads highlight.js asynchronously, so the first render may run
/// before `window.hljs` exists; the script retries until it does.
fn highlight_script(element_id: &str, code: &str) -> String {
    // serde_json produces a valid, escaped JS string literal
    let literal = serde_json::to_string(code).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
        (function() {{
            const el = document.getElementById('{element_id}');
            if (!el) return false;
            el.textContent = {literal};
            el.removeAttribute('data-highlighted');
            let attempts = {HIGHLIGHT_RETRIES};
            const highlight = () => {{
                if (window.hljs) {{
                    window.hljs.highlightElement(el);
                }} else if (attempts-- > 0) {{
                    setTimeout(highlight, 100);
                }}
            }};
            highlight();
            return true;
        }})()
        "#
    )
}

/// Code block highlighted after every render.
///
/// The `<code>` element is left empty in the virtual DOM; its content is set by
/// the post-render script so the highlighter's markup never conflicts with diffing.
#[component]
pub fn HighlightedCode(
    code: String,
    #[props(default = "json")]
    language: &'static str,
) -> Element {
    let element_id = use_hook(|| format!("code-{}", uuid::Uuid::new_v4().simple()));

    let effect_id = element_id.clone();
    use_effect(use_reactive((&code,), move |(code,)| {
        let script = highlight_script(&effect_id, &code);
        spawn(async move {
            if let Err(e) = document::eval(&script).await {
                tracing::warn!(error = ?e, "Code highlighting script failed");
            }
        });
    }));

    rsx! {
        pre { class: "c-code",
            code { id: "{element_id}", class: "language-{language}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_script_escapes_code() {
        let script = highlight_script("code-1", "{\"key\": \"it's\"}\n</script>");

        assert!(script.contains("getElementById('code-1')"));
        assert!(script.contains(r#"el.textContent = "{\"key\": \"it's\"}\n</script>";"#));
    }

    #[test]
    fn test_highlight_script_waits_for_library() {
        let script = highlight_script("code-2", "{}");

        assert!(script.contains("window.hljs.highlightElement(el)"));
        assert!(script.contains("setTimeout(highlight, 100)"));
        assert!(script.contains("let attempts = 50;"));
        assert!(HIGHLIGHT_SCRIPT_URL.ends_with("/highlight.min.js"));
    }
}
