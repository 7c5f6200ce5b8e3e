// fragment.rs — Markup fragment generation for one project card.
//
// Deterministic: the same record and asset address always produce the
// same bytes, so a card can be regenerated and compared. The fragment is
// self-contained carousel-card markup matching the site's structure, led
// by an uppercased comment marker naming the project.

/// Escape a value for use in HTML text or double-quoted attribute position.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Uppercased comment marker, with `--` runs broken so a hostile name
/// cannot terminate the comment early.
fn comment_marker(name: &str) -> String {
    name.to_uppercase().replace("--", "- -")
}

/// Generate the markup fragment for one project.
///
/// `image_url` is the resolved public address of the uploaded asset;
/// `None` produces a card with no image reference at all.
pub fn project_card(name: &str, link: &str, image_url: Option<&str>) -> String {
    let image_line = match image_url {
        Some(url) => format!("\n                        <img src=\"{}\" alt=\"\">", escape_html(url)),
        None => String::new(),
    };

    format!(
        r#"
                <!--{marker}-->
                <div class="card">
                    <div class="box">{image_line}
                        <div class="text">{name}</div>
                        <p><a target="_blank" href="{link}">
                             <br><u class="underline">Click here to see!</u></a></p>
                    </div>
                </div>
"#,
        marker = comment_marker(name),
        image_line = image_line,
        name = escape_html(name),
        link = escape_html(link),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_contains_name_and_link_literally() {
        let card = project_card("Foo", "https://x", None);
        assert!(card.contains(">Foo<"));
        assert!(card.contains("href=\"https://x\""));
    }

    #[test]
    fn card_without_image_has_no_image_reference() {
        let card = project_card("Foo", "https://x", None);
        assert!(!card.contains("<img"));
        assert!(!card.contains("src="));
    }

    #[test]
    fn card_with_image_references_the_resolved_address() {
        let url = "https://raw.githubusercontent.com/rabia/portfolio/main/images/1-shot.png";
        let card = project_card("Foo", "https://x", Some(url));
        assert!(card.contains(&format!("<img src=\"{url}\"")));
    }

    #[test]
    fn comment_marker_is_uppercased() {
        let card = project_card("weather app", "https://x", None);
        assert!(card.contains("<!--WEATHER APP-->"));
    }

    #[test]
    fn markup_significant_names_are_neutralized() {
        let card = project_card("a<b>&\"c\"", "https://x?a=1&b=2", None);
        assert!(card.contains("a&lt;b&gt;&amp;&quot;c&quot;"));
        assert!(card.contains("href=\"https://x?a=1&amp;b=2\""));
        assert!(!card.contains("<b>"));
    }

    #[test]
    fn comment_marker_cannot_close_the_comment() {
        let card = project_card("evil--x", "https://x", None);
        assert!(card.contains("<!--EVIL- -X-->"));
    }

    #[test]
    fn generation_is_deterministic() {
        let a = project_card("Foo", "https://x", Some("https://y/img.png"));
        let b = project_card("Foo", "https://x", Some("https://y/img.png"));
        assert_eq!(a, b);
    }
}
