// publish_flow.rs — End-to-end pipeline test against the in-memory store.
//
// Exercises the complete publish flow the way the server drives it:
//
//   1. Seed the remote store with the live site document
//   2. Publish a project with an image → asset committed first, then the
//      patched document, both sha-guarded correctly
//   3. Publish a second project → it lands above the first (newest first)
//   4. Simulate a commit failure after an asset upload, then retry the
//      whole operation → the orphaned asset is reused, not re-created
//
// VERIFY:
//   - Anchor still present exactly once after every publish
//   - Cards accumulate in newest-first order
//   - Asset create carries no sha; the retry's update carries the sha of
//     the orphaned blob

use vt_publish::{AssetPayload, DocumentSpec, PublishRequest, Publisher};
use vt_remote::{ContentStore, MemoryStore, RepoConfig};

const ANCHOR: &str = "<div class=\"carousel owl-carousel\">";

const PAGE: &str = concat!(
    "<!DOCTYPE html>\n",
    "<html>\n",
    "<body>\n",
    "    <section id=\"work\">\n",
    "        <div class=\"carousel owl-carousel\">\n",
    "        </div>\n",
    "    </section>\n",
    "</body>\n",
    "</html>\n"
);

fn repo_config() -> RepoConfig {
    RepoConfig {
        owner: "rabia".to_string(),
        repo: "portfolio".to_string(),
        branch: "main".to_string(),
        api_base: "https://api.github.com".to_string(),
        raw_base: "https://raw.githubusercontent.com".to_string(),
    }
}

fn document_spec() -> DocumentSpec {
    DocumentSpec {
        path: "index.html".to_string(),
        anchor: ANCHOR.to_string(),
    }
}

#[tokio::test]
async fn full_publish_flow_accumulates_cards_newest_first() {
    let store = MemoryStore::new();
    store.seed("index.html", PAGE.as_bytes());
    let publisher = Publisher::new(store, repo_config(), document_spec());

    // First project, with an image.
    publisher
        .publish(&PublishRequest {
            name: "Weather App".to_string(),
            link: "https://example.com/weather".to_string(),
            asset: Some(AssetPayload {
                repo_path: "images/100-weather.png".to_string(),
                bytes: b"png-bytes-one".to_vec(),
            }),
        })
        .await
        .unwrap();

    // Second project, no image.
    publisher
        .publish(&PublishRequest {
            name: "Chess Engine".to_string(),
            link: "https://example.com/chess".to_string(),
            asset: None,
        })
        .await
        .unwrap();

    let html = String::from_utf8(
        publisher_store(&publisher).content("index.html").unwrap(),
    )
    .unwrap();

    // Anchor untouched, exactly once.
    assert_eq!(html.matches(ANCHOR).count(), 1);

    // Newest first: the chess card sits above the weather card.
    let chess = html.find("<!--CHESS ENGINE-->").unwrap();
    let weather = html.find("<!--WEATHER APP-->").unwrap();
    assert!(chess < weather);

    // The image reference is the deterministic raw address.
    assert!(html.contains(
        "https://raw.githubusercontent.com/rabia/portfolio/main/images/100-weather.png"
    ));

    // Surrounding document preserved.
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<section id=\"work\">"));
}

#[tokio::test]
async fn retry_after_failed_commit_reuses_the_orphaned_asset() {
    let store = MemoryStore::new();
    store.seed("index.html", PAGE.as_bytes());
    let publisher = Publisher::new(store, repo_config(), document_spec());

    let request = PublishRequest {
        name: "Tracker".to_string(),
        link: "https://example.com/tracker".to_string(),
        asset: Some(AssetPayload {
            repo_path: "images/200-tracker.png".to_string(),
            bytes: b"png-bytes-two".to_vec(),
        }),
    };

    // Upload the asset out-of-band to simulate the state left behind by a
    // publish whose document commit failed: asset committed, page not.
    let orphan_sha = publisher_store(&publisher)
        .put("images/200-tracker.png", b"png-bytes-two", None, "Add/update image for Tracker")
        .await
        .unwrap();

    // Retrying the whole operation reconciles against the orphan.
    publisher.publish(&request).await.unwrap();

    let history = publisher_store(&publisher).history();
    // out-of-band create, retry's update, document commit
    assert_eq!(history.len(), 3);
    assert_eq!(history[1].path, "images/200-tracker.png");
    assert_eq!(history[1].prior_sha.as_deref(), Some(orphan_sha.as_str()));
    assert_eq!(history[2].path, "index.html");
}

// The store is owned by the publisher; tests reach it through this helper
// to keep the assertions in one obvious shape.
fn publisher_store(publisher: &Publisher<MemoryStore>) -> &MemoryStore {
    publisher.store()
}
