//! Visitor flows: content loaded from disk into the gallery view-model,
//! and the checkout modal and newsletter form talking to a running server

mod common;

use atelier_catalog::{load_catalog, FsContentSource, Variant};
use atelier_client::SiteClient;
use atelier_gallery::{
    CloseTrigger, FilterKey, Focus, GalleryPage, Navigation, NavKey, PageContent, LOAD_FAILURE,
};
use atelier_newsletter::{MessageKind, NewsletterForm};
use atelier_shop::{CheckoutModal, CheckoutModalState};
use atelier_site::InstagramFeed;

use common::{artworks_json, spawn_server, TestApp};

async fn load_gallery(dir: &std::path::Path) -> PageContent {
    let source = FsContentSource::new(dir);
    GalleryPage::load(load_catalog(&source).await)
}

fn ids(page: &GalleryPage) -> Vec<String> {
    page.cards().into_iter().map(|c| c.artwork_id).collect()
}

#[tokio::test]
async fn test_gallery_browsing_session() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("artworks.json"), artworks_json().to_string()).unwrap();

    let mut page = match load_gallery(dir.path()).await {
        PageContent::Ready(page) => page,
        PageContent::Unavailable(failure) => panic!("gallery failed to load: {:?}", failure),
    };
    assert_eq!(ids(&page), vec!["a", "b", "c", "d"]);

    page.select_filter(FilterKey::parse("x"));
    assert_eq!(ids(&page), vec!["a", "b"]);
    assert_eq!(page.announcement(), Some("Showing 2 pieces in x"));

    page.select_filter(FilterKey::Featured);
    assert_eq!(ids(&page), vec!["a", "c"]);

    // Open the last featured piece, walk back, then close with Escape
    page.activate_artwork("c").unwrap();
    assert_eq!(page.focus(), &Focus::LightboxClose);
    let view = page.lightbox_view().unwrap();
    assert_eq!(view.title, "Gamma");
    assert!(!view.next_enabled);
    assert_eq!(view.prices.lines(), vec!["Print 16\"×20\" — $80".to_string()]);

    page.handle_key(NavKey::ArrowRight);
    assert_eq!(page.lightbox_view().unwrap().artwork_id, "c");
    page.handle_key(NavKey::ArrowLeft);
    assert_eq!(page.lightbox_view().unwrap().artwork_id, "a");
    assert_eq!(
        page.purchase(),
        Some(Navigation::Shop {
            artwork_id: "a".to_string()
        })
    );

    page.handle_key(NavKey::Escape);
    assert!(!page.lightbox().is_open());
    assert_eq!(page.focus(), &Focus::Card("a".to_string()));

    page.close_lightbox(CloseTrigger::Backdrop);
    assert_eq!(page.focus(), &Focus::Card("a".to_string()));
}

#[tokio::test]
async fn test_missing_content_shows_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    match load_gallery(dir.path()).await {
        PageContent::Unavailable(failure) => assert_eq!(failure, LOAD_FAILURE),
        PageContent::Ready(_) => panic!("gallery loaded without content"),
    }
}

#[tokio::test]
async fn test_checkout_redirects_for_available_print() {
    let app = TestApp::new();
    let client = SiteClient::new(spawn_server(&app).await);

    let catalog = common::catalog();
    let mut modal = CheckoutModal::open(Some(&catalog), "a").unwrap();
    let intent = modal.choose(Variant::Print8x10).unwrap();
    assert_eq!(modal.state(), &CheckoutModalState::Redirecting);

    let result = client
        .checkout(&intent.artwork_id, intent.variant.as_str())
        .await;
    modal.complete(result).unwrap();

    let url = modal.redirect_url().unwrap();
    assert!(url.starts_with("https://checkout.stripe.com/c/pay/"));
    assert_eq!(app.payments.request_count(), 1);
}

#[tokio::test]
async fn test_checkout_for_sold_piece_shows_server_error() {
    let app = TestApp::new();
    let client = SiteClient::new(spawn_server(&app).await);

    let catalog = common::catalog();
    let mut modal = CheckoutModal::open(Some(&catalog), "d").unwrap();
    let intent = modal.choose(Variant::Digital).unwrap();
    modal
        .complete(client.checkout(&intent.artwork_id, intent.variant.as_str()).await)
        .unwrap();

    assert!(modal.redirect_url().is_none());
    let panel = modal.error_panel().unwrap();
    assert_eq!(panel.headline, "Unable to process checkout");
    assert_eq!(panel.message, "Artwork is not available for purchase");
    assert_eq!(panel.action, "Try Again");
    assert_eq!(app.payments.request_count(), 0);
}

#[tokio::test]
async fn test_newsletter_form_against_server() {
    let app = TestApp::new();
    let client = SiteClient::new(spawn_server(&app).await);
    let mut form = NewsletterForm::new(Some("blog"));

    // Local validation stops the request
    assert!(form.submit("a@b", "").is_none());
    assert!(app.mailing.subscribers().is_empty());

    let request = form.submit("fan@example.com", "Ada").unwrap();
    form.complete(client.newsletter_signup(&request).await);
    let message = form.message().unwrap();
    assert_eq!(message.kind, MessageKind::Success);
    assert_eq!(message.text, "Successfully subscribed to newsletter!");
    assert_eq!(app.mailing.subscribers()[0].source, "blog");

    let request = form.submit("fan@example.com", "Ada").unwrap();
    form.complete(client.newsletter_signup(&request).await);
    let message = form.message().unwrap();
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, "This email is already subscribed!");
}

#[tokio::test]
async fn test_instagram_block_falls_back_without_feed_function() {
    let app = TestApp::new();
    let client = SiteClient::new(spawn_server(&app).await);

    let feed = client.instagram_feed().await;
    assert_eq!(feed, InstagramFeed::Fallback { placeholders: 6 });
    assert_eq!(feed.heading(), "Follow on Instagram");
}
