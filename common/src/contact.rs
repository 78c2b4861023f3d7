//! お問い合わせフォーム

use crate::error::{Error, Result};

/// フォーム送信先
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mojvnrkk";

/// 送信成功メッセージの表示時間
pub const SUCCESS_NOTICE_MS: u32 = 1_900;

pub const EMPTY_MESSAGE_NOTICE: &str = "Please enter a message before sending.";
pub const SEND_FAILED_NOTICE: &str = "Failed to send message. Please try again.";

/// 送信前にメッセージを検証（前後空白を除去）
pub fn prepare_message(raw: &str) -> Result<String> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(Error::Validation(EMPTY_MESSAGE_NOTICE.into()));
    }
    Ok(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_message_rejected() {
        assert!(matches!(prepare_message("  \n "), Err(Error::Validation(_))));
    }

    #[test]
    fn test_message_trimmed() {
        assert_eq!(prepare_message("  hello there \n").unwrap(), "hello there");
    }
}
