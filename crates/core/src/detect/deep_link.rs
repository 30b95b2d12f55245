//! Raycast deep links (`raycast://...`)

use url::Url;

use crate::record::{Detection, Payload};

const SCHEME_PREFIX: &str = "raycast://";
const AI_CHAT_PATH: &str = "extensions/raycast/raycast-ai/ai-chat";
const NOTE_PATH: &str = "extensions/raycast/raycast-notes/raycast-notes";

/// Detect a Raycast deep link
pub fn detect(input: &str) -> Option<Detection> {
    if !input.starts_with(SCHEME_PREFIX) || input.chars().any(char::is_control) {
        return None;
    }
    Url::parse(input).ok()?;

    Some(Detection::new(
        input,
        85,
        Payload::AppDeepLink {
            is_ai_chat: input.contains(AI_CHAT_PATH),
            is_note: input.contains(NOTE_PATH),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(input: &str) -> (bool, bool) {
        match detect(input).map(|d| d.payload) {
            Some(Payload::AppDeepLink {
                is_ai_chat,
                is_note,
            }) => (is_ai_chat, is_note),
            other => panic!("{input:?} gave {other:?}"),
        }
    }

    #[test]
    fn test_ai_chat() {
        assert_eq!(
            flags("raycast://extensions/raycast/raycast-ai/ai-chat?context=abc"),
            (true, false)
        );
    }

    #[test]
    fn test_note() {
        assert_eq!(
            flags("raycast://extensions/raycast/raycast-notes/raycast-notes?id=1"),
            (false, true)
        );
    }

    #[test]
    fn test_generic() {
        let detection = detect("raycast://extensions/raycast/clipboard-history").unwrap();
        assert_eq!(detection.confidence, 85);
        assert_eq!(
            flags("raycast://extensions/raycast/clipboard-history"),
            (false, false)
        );
    }

    #[test]
    fn test_rejects_other_schemes() {
        for input in [
            "https://raycast.com",
            "Raycast://extensions",
            "raycast:/extensions",
            " raycast://extensions",
            "raycast://extensions\nmore",
        ] {
            assert!(detect(input).is_none(), "{input:?}");
        }
    }
}
