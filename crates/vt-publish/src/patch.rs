// patch.rs — Anchor-based document splicing.
//
// The site document has a structural contract: a fixed literal anchor
// substring names the carousel container, and new cards are inserted as
// its first child, immediately after the opening tag's closing '>'.
// Everything outside the inserted fragment is preserved byte-for-byte.
// If the anchor is missing the patch fails outright — it never appends
// elsewhere.

use crate::error::PublishError;

/// Splice `fragment` into `html` immediately after the first `>` of the
/// first occurrence of `anchor`.
///
/// New fragments land as the anchor container's first child, so the most
/// recently published project appears first in the carousel.
pub fn insert_after_anchor(
    html: &str,
    anchor: &str,
    fragment: &str,
) -> Result<String, PublishError> {
    let anchor_start = html.find(anchor).ok_or_else(|| PublishError::AnchorMissing {
        anchor: anchor.to_string(),
    })?;

    // First '>' scanned forward from the anchor's start; an anchor with no
    // closing '>' anywhere after it means the document is truncated.
    let close = html[anchor_start..]
        .find('>')
        .ok_or_else(|| PublishError::AnchorMissing {
            anchor: anchor.to_string(),
        })?;
    let insert_at = anchor_start + close + 1;

    let mut patched = String::with_capacity(html.len() + fragment.len());
    patched.push_str(&html[..insert_at]);
    patched.push_str(fragment);
    patched.push_str(&html[insert_at..]);
    Ok(patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: &str = "<div class=\"carousel owl-carousel\">";

    #[test]
    fn fragment_lands_as_first_child() {
        let html = "<div class=\"carousel owl-carousel\">OLD</div>";
        let patched = insert_after_anchor(html, ANCHOR, "NEW").unwrap();
        assert_eq!(patched, "<div class=\"carousel owl-carousel\">NEWOLD</div>");
    }

    #[test]
    fn anchor_survives_patching_exactly_once_unmoved() {
        let html = format!("<html><body>{ANCHOR}<p>existing</p></div></body></html>");
        let patched = insert_after_anchor(&html, ANCHOR, "<p>new</p>").unwrap();

        assert_eq!(patched.matches(ANCHOR).count(), 1);
        assert_eq!(patched.find(ANCHOR), html.find(ANCHOR));
        // Fragment sits immediately after the anchor's closing '>'.
        let after = patched.find(ANCHOR).unwrap() + ANCHOR.len();
        assert!(patched[after..].starts_with("<p>new</p>"));
    }

    #[test]
    fn surrounding_document_is_preserved_byte_for_byte() {
        let html = format!("prefix \n\t {ANCHOR} middle </div> suffix \n");
        let patched = insert_after_anchor(&html, ANCHOR, "X").unwrap();

        let insert_at = html.find(ANCHOR).unwrap() + ANCHOR.len();
        assert_eq!(&patched[..insert_at], &html[..insert_at]);
        assert_eq!(&patched[insert_at + 1..], &html[insert_at..]);
    }

    #[test]
    fn missing_anchor_fails_without_modification() {
        let html = "<html><body>no carousel here</body></html>";
        let err = insert_after_anchor(html, ANCHOR, "NEW").unwrap_err();
        assert!(matches!(err, PublishError::AnchorMissing { .. }));
    }

    #[test]
    fn first_occurrence_wins_when_anchor_repeats() {
        let html = format!("{ANCHOR}one</div>{ANCHOR}two</div>");
        let patched = insert_after_anchor(&html, ANCHOR, "X").unwrap();
        assert!(patched.starts_with(&format!("{ANCHOR}Xone")));
    }

    #[test]
    fn insertion_point_is_the_first_gt_after_the_anchor_start() {
        // A partial anchor match (no trailing '>') still scans forward to
        // the tag's real closing '>'.
        let html = "<div class=\"cards\" data-x=\"1\">OLD</div>";
        let patched = insert_after_anchor(html, "<div class=\"cards\"", "NEW").unwrap();
        assert_eq!(patched, "<div class=\"cards\" data-x=\"1\">NEWOLD</div>");
    }

    #[test]
    fn truncated_document_with_unclosed_anchor_fails() {
        let err = insert_after_anchor("<div class=\"carousel owl-carousel\"", "<div class=\"carousel owl-carousel\"", "X")
            .unwrap_err();
        assert!(matches!(err, PublishError::AnchorMissing { .. }));
    }
}
