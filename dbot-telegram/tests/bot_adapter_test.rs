//! Integration tests for [`dbot_telegram::TelegramBotAdapter`] against a mock Bot API server.
//!
//! Verifies which Telegram method each core call turns into: one attachment → sendPhoto /
//! sendDocument, several → a single sendMediaGroup, edits → editMessageText.

use dbot_core::{Attachment, AttachmentKind, Bot, Chat, DbotError};
use dbot_telegram::TelegramBotAdapter;
use mockito::{Matcher, Server, ServerGuard};

const TOKEN: &str = "test_bot_token_12345";

const MESSAGE_JSON: &str = r#"{
    "message_id": 7,
    "date": 1706529600,
    "chat": {"id": 456, "type": "private"},
    "from": {"id": 123456789, "is_bot": true, "first_name": "UploadBot", "username": "upload_bot"},
    "text": "ok"
}"#;

fn method_path(method: &str) -> Matcher {
    Matcher::Regex(format!("^/bot{}/(?i){}$", TOKEN, method))
}

fn ok_body(result: &str) -> String {
    format!(r#"{{"ok": true, "result": {}}}"#, result)
}

fn adapter_for(server: &ServerGuard) -> TelegramBotAdapter {
    let url = reqwest::Url::parse(&server.url()).unwrap();
    TelegramBotAdapter::new(teloxide::Bot::new(TOKEN).set_api_url(url))
}

fn chat() -> Chat {
    Chat {
        id: 456,
        chat_type: "private".to_string(),
    }
}

fn photo(name: &str) -> Attachment {
    Attachment::new(name, b"\x89PNG fake".to_vec(), AttachmentKind::Photo)
}

/// **Test: several attachments go out as exactly one sendMediaGroup call.**
#[tokio::test]
async fn test_send_attachments_uses_media_group() {
    let mut server = Server::new_async().await;
    let group = server
        .mock("POST", method_path("sendmediagroup"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_body(&format!("[{0}, {0}, {0}]", MESSAGE_JSON)))
        .expect(1)
        .create_async()
        .await;
    let single = server
        .mock("POST", method_path("sendphoto"))
        .expect(0)
        .create_async()
        .await;

    let adapter = adapter_for(&server);
    adapter
        .send_attachments(
            &chat(),
            Some("Uploading batch 1/1"),
            vec![photo("a.png"), photo("b.png"), photo("c.jpg")],
        )
        .await
        .unwrap();

    group.assert_async().await;
    single.assert_async().await;
}

/// **Test: a lone photo uses sendPhoto; Telegram rejects media groups of one.**
#[tokio::test]
async fn test_send_single_attachment_uses_send_photo() {
    let mut server = Server::new_async().await;
    let single = server
        .mock("POST", method_path("sendphoto"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_body(MESSAGE_JSON))
        .expect(1)
        .create_async()
        .await;

    let adapter = adapter_for(&server);
    adapter
        .send_attachments(&chat(), Some("Uploading batch 2/2"), vec![photo("z.png")])
        .await
        .unwrap();

    single.assert_async().await;
}

/// **Test: a lone document uses sendDocument.**
#[tokio::test]
async fn test_send_single_document_uses_send_document() {
    let mut server = Server::new_async().await;
    let single = server
        .mock("POST", method_path("senddocument"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_body(MESSAGE_JSON))
        .expect(1)
        .create_async()
        .await;

    let adapter = adapter_for(&server);
    let doc = Attachment::new("raw.png", vec![1, 2, 3], AttachmentKind::Document);
    adapter.send_attachments(&chat(), None, vec![doc]).await.unwrap();

    single.assert_async().await;
}

/// **Test: an API error on the send surfaces as the transport error kind.**
#[tokio::test]
async fn test_send_attachments_api_error_maps_to_bot_error() {
    let mut server = Server::new_async().await;
    let _group = server
        .mock("POST", method_path("sendmediagroup"))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: file is too big"}"#)
        .create_async()
        .await;

    let adapter = adapter_for(&server);
    let err = adapter
        .send_attachments(&chat(), None, vec![photo("a.png"), photo("b.png")])
        .await
        .unwrap_err();

    assert!(matches!(err, DbotError::Bot(_)), "{:?}", err);
}

/// **Test: send_message_and_return_id returns the Telegram message id; edit_message targets it.**
#[tokio::test]
async fn test_send_then_edit_status_message() {
    let mut server = Server::new_async().await;
    let _send = server
        .mock("POST", method_path("sendmessage"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_body(MESSAGE_JSON))
        .create_async()
        .await;
    let edit = server
        .mock("POST", method_path("editmessagetext"))
        .match_body(Matcher::PartialJsonString(r#"{"message_id": 7}"#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_body(MESSAGE_JSON))
        .expect(1)
        .create_async()
        .await;

    let adapter = adapter_for(&server);
    let id = adapter
        .send_message_and_return_id(&chat(), "Found 3 files.")
        .await
        .unwrap();
    assert_eq!(id, "7");

    adapter.edit_message(&chat(), &id, "Uploading... 33%").await.unwrap();

    edit.assert_async().await;
}

/// **Test: a non-numeric handle is rejected before any request is made.**
#[tokio::test]
async fn test_edit_message_rejects_bad_handle() {
    let server = Server::new_async().await;
    let adapter = adapter_for(&server);

    let err = adapter.edit_message(&chat(), "abc", "x").await.unwrap_err();

    assert!(matches!(err, DbotError::Bot(_)));
}
